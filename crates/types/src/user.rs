use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Resource, nullable};

/// A scaffold user account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "nullable")]
    pub username: String,
    #[serde(deserialize_with = "nullable")]
    pub password: String,
    #[serde(deserialize_with = "nullable")]
    pub given_name: String,
    #[serde(deserialize_with = "nullable")]
    pub family_name: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub reset_token: String,
    #[serde(deserialize_with = "nullable")]
    pub reset_token_created: String,
    #[serde(deserialize_with = "nullable")]
    pub created: String,
    #[serde(deserialize_with = "nullable")]
    pub updated: String,
    #[serde(deserialize_with = "nullable")]
    pub login_token: String,
    #[serde(deserialize_with = "nullable")]
    pub api_tokens: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub groups: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub roles: Vec<String>,
}

impl Resource for User {
    const KIND: &'static str = "user";
}
