use serde::{Deserialize, Serialize};

use crate::{Resource, State, nullable};

/// The states recorded over one workflow run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct History {
    #[serde(deserialize_with = "nullable")]
    pub run_id: String,
    #[serde(deserialize_with = "nullable")]
    pub states: Vec<State>,
    #[serde(deserialize_with = "nullable")]
    pub workflow: String,
    #[serde(deserialize_with = "nullable")]
    pub created: String,
    #[serde(deserialize_with = "nullable")]
    pub updated: String,
}

impl Resource for History {
    const KIND: &'static str = "history";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_decode_with_defaults() {
        let history = History::load_str(
            r#"{"run_id": "abc", "states": [{"task": "write_file", "status": "success", "number": 3}]}"#,
        )
        .unwrap();
        assert_eq!(history.states.len(), 1);
        assert_eq!(history.states[0].number, 3);
        assert_eq!(history.states[0].pid, 0);
        assert!(history.states[0].context.is_empty());
    }
}
