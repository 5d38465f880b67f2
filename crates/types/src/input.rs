use serde::{Deserialize, Serialize};

use crate::{Resource, nullable};

/// A named input value shared by the tasks of a workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowInput {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub workflow: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub default: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub r#type: String,
}

impl Resource for WorkflowInput {
    const KIND: &'static str = "input";
}
