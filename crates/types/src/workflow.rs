use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Resource, Task, WorkflowInput, nullable};

/// A workflow: a versioned, group-scoped set of tasks and inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workflow {
    #[serde(deserialize_with = "nullable")]
    pub version: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub inputs: Vec<WorkflowInput>,
    #[serde(deserialize_with = "nullable")]
    pub tasks: Vec<Task>,
    #[serde(deserialize_with = "nullable")]
    pub created: String,
    #[serde(deserialize_with = "nullable")]
    pub updated: String,
    #[serde(deserialize_with = "nullable")]
    pub groups: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub links: Map<String, Value>,
}

impl Resource for Workflow {
    const KIND: &'static str = "workflow";
}
