//! Scaffold resource payloads.
//!
//! Each resource mirrors the JSON the scaffold API exchanges. Every field has a
//! declared default: a key missing from a payload (or sent as `null`) takes
//! that default, and unknown keys are ignored.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

mod file;
mod history;
mod input;
mod run;
mod state;
mod task;
mod user;
mod workflow;

pub use file::File;
pub use history::History;
pub use input::WorkflowInput;
pub use run::Run;
pub use state::State;
pub use task::{Task, TaskDependsOn, TaskLoadStore};
pub use user::User;
pub use workflow::Workflow;

/// Error surfaced when a resource payload cannot be loaded or serialized.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid {kind} payload: {source}")]
    Json {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A scaffold API resource with schema-defaulted loading.
pub trait Resource: Serialize + DeserializeOwned + Default {
    /// Resource name as used in API paths (`/api/v1/<KIND>`).
    const KIND: &'static str;

    /// Load from a JSON string.
    fn load_str(data: &str) -> Result<Self, LoadError> {
        serde_json::from_str(data).map_err(|source| LoadError::Json { kind: Self::KIND, source })
    }

    /// Load from a JSON file, typically a test fixture.
    fn load_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load_str(&data)
    }

    /// Load from an already-parsed JSON value, such as an API response body.
    fn load_value(value: Value) -> Result<Self, LoadError> {
        serde_json::from_value(value).map_err(|source| LoadError::Json { kind: Self::KIND, source })
    }

    /// Serialize every field, defaults included.
    fn to_value(&self) -> Result<Value, LoadError> {
        serde_json::to_value(self).map_err(|source| LoadError::Json { kind: Self::KIND, source })
    }
}

/// Deserialize `null` as the field's default.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
