//! Test-harness utilities for the scaffold workflow server.
//!
//! The centerpiece is [`table`], which decodes the column-aligned tables the
//! scaffold CLI prints. [`capture`] runs that CLI and feeds its stdout to the
//! decoder, and [`config`] resolves where the server and CLI live.

pub mod capture;
pub mod config;
pub mod table;

pub use capture::{CaptureError, CliRunner};
pub use config::{ConfigError, HarnessConfig, expand_tilde};
pub use table::{BoundaryStrategy, DecodeOptions, Record, Table, TableError, decode_table};
