use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Resource, State, Task, nullable};

/// A single task execution dispatched to a worker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Run {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub task: Task,
    #[serde(deserialize_with = "nullable")]
    pub state: State,
    #[serde(deserialize_with = "nullable")]
    pub number: i64,
    #[serde(deserialize_with = "nullable")]
    pub groups: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub worker: String,
    #[serde(deserialize_with = "nullable")]
    pub pid: i64,
    #[serde(deserialize_with = "nullable")]
    pub context: Map<String, Value>,
    #[serde(deserialize_with = "nullable")]
    pub run_id: String,
}

impl Resource for Run {
    const KIND: &'static str = "run";
}
