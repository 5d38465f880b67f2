//! Run the scaffold CLI as a subprocess and decode the tables it prints.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

use crate::table::{DecodeOptions, Record, TableError, decode_table};

/// Error surfaced when capturing or decoding CLI output fails.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("{program} wrote non UTF-8 output")]
    Utf8 { program: String },
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Runs `scaffold get` for a profile and decodes its table output.
#[derive(Debug, Clone)]
pub struct CliRunner {
    program: PathBuf,
    profile: String,
}

impl CliRunner {
    pub fn new(program: impl Into<PathBuf>, profile: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            profile: profile.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Arguments for `get <object> -p <profile> [-c <context>]`.
    pub fn get_args(&self, object: &str, context: Option<&str>) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["get".into(), object.into(), "-p".into(), self.profile.as_str().into()];
        if let Some(context) = context {
            args.push("-c".into());
            args.push(context.into());
        }
        args
    }

    /// Run `get` and return its stdout.
    ///
    /// # Errors
    /// [`CaptureError::Failed`] when the CLI exits unsuccessfully.
    pub async fn get_raw(&self, object: &str, context: Option<&str>) -> Result<String, CaptureError> {
        let output = self.run(self.get_args(object, context)).await?;
        self.stdout_text(output)
    }

    /// Run `get` and decode its table into header-keyed records.
    pub async fn get_records(&self, object: &str, context: Option<&str>) -> Result<Vec<Record>, CaptureError> {
        let stdout = self.get_raw(object, context).await?;
        let table = decode_table(&stdout, &DecodeOptions::records())?;
        table
            .into_records()
            .ok_or_else(|| TableError::Configuration("decoder returned rows where records were requested".to_string()).into())
    }

    /// Whether `get` succeeds for the object, i.e. whether the profile can see it.
    ///
    /// An unsuccessful exit yields `Ok(false)`; only launch failures are errors.
    pub async fn get_status(&self, object: &str, context: Option<&str>) -> Result<bool, CaptureError> {
        match self.get_raw(object, context).await {
            Ok(_) => Ok(true),
            Err(CaptureError::Failed { .. }) => Ok(false),
            Err(error) => Err(error),
        }
    }

    async fn run(&self, args: Vec<OsString>) -> Result<Output, CaptureError> {
        debug!(program = %self.program.display(), ?args, "running scaffold cli");
        Command::new(&self.program)
            .args(&args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| CaptureError::Spawn {
                program: self.program.display().to_string(),
                source,
            })
    }

    fn stdout_text(&self, output: Output) -> Result<String, CaptureError> {
        let program = self.program.display().to_string();
        if !output.status.success() {
            return Err(CaptureError::Failed {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        String::from_utf8(output.stdout).map_err(|_| CaptureError::Utf8 { program })
    }
}
