use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Resource, nullable};

/// Task names whose outcome gates this task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDependsOn {
    #[serde(deserialize_with = "nullable")]
    pub success: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub error: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub always: Vec<String>,
}

/// What a task loads from, or stores to, the workflow datastore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskLoadStore {
    #[serde(deserialize_with = "nullable")]
    pub env: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub file: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub env_passthrough: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub mounts: Vec<String>,
}

/// A containerised unit of work inside a workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub kind: String,
    #[serde(deserialize_with = "nullable")]
    pub cron: String,
    #[serde(deserialize_with = "nullable")]
    pub workflow: String,
    #[serde(deserialize_with = "nullable")]
    pub depends_on: TaskDependsOn,
    #[serde(deserialize_with = "nullable")]
    pub image: String,
    #[serde(deserialize_with = "nullable")]
    pub run: String,
    #[serde(deserialize_with = "nullable")]
    pub store: TaskLoadStore,
    #[serde(deserialize_with = "nullable")]
    pub load: TaskLoadStore,
    #[serde(deserialize_with = "nullable")]
    pub env: IndexMap<String, String>,
    #[serde(deserialize_with = "nullable")]
    pub inputs: IndexMap<String, String>,
    #[serde(deserialize_with = "nullable")]
    pub updated: String,
    #[serde(deserialize_with = "nullable")]
    pub run_number: i64,
    #[serde(deserialize_with = "nullable")]
    pub should_rm: bool,
    #[serde(alias = "auth_execute", deserialize_with = "nullable")]
    pub auto_execute: bool,
    #[serde(deserialize_with = "nullable")]
    pub disabled: bool,
    #[serde(deserialize_with = "nullable")]
    pub container_login_command: String,
}

impl Resource for Task {
    const KIND: &'static str = "task";
}
