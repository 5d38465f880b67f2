use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Resource, nullable};

/// The latest execution state of one task in a workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    #[serde(deserialize_with = "nullable")]
    pub task: String,
    #[serde(deserialize_with = "nullable")]
    pub workflow: String,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    #[serde(deserialize_with = "nullable")]
    pub started: String,
    #[serde(deserialize_with = "nullable")]
    pub finished: String,
    #[serde(deserialize_with = "nullable")]
    pub output: String,
    #[serde(deserialize_with = "nullable")]
    pub output_checksum: String,
    #[serde(deserialize_with = "nullable")]
    pub display: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub worker: String,
    #[serde(deserialize_with = "nullable")]
    pub number: i64,
    #[serde(deserialize_with = "nullable")]
    pub disabled: bool,
    #[serde(deserialize_with = "nullable")]
    pub killed: bool,
    #[serde(deserialize_with = "nullable")]
    pub pid: i64,
    #[serde(deserialize_with = "nullable")]
    pub history: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub context: Map<String, Value>,
}

impl Resource for State {
    const KIND: &'static str = "state";
}
