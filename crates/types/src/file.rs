use serde::{Deserialize, Serialize};

use crate::{Resource, nullable};

/// Metadata for a file stored against a workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub modified: String,
    #[serde(deserialize_with = "nullable")]
    pub workflow: String,
}

impl Resource for File {
    const KIND: &'static str = "file";
}
