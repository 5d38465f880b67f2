use reqwest::Method;
use serde_json::Value;

use crate::{ApiError, ApiResponse, ScaffoldClient};

impl ScaffoldClient {
    /// `POST /webhook/{workflow}/{task}`, optionally with a JSON payload.
    pub async fn trigger_webhook(
        &self,
        workflow: &str,
        task: &str,
        payload: Option<&Value>,
        fail_on_error: bool,
    ) -> Result<ApiResponse<()>, ApiError> {
        let mut builder = self.request(Method::POST, &["webhook", workflow, task]);
        if let Some(payload) = payload {
            builder = builder.json(payload);
        }
        self.send_status(builder, fail_on_error).await
    }
}
