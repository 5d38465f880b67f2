use reqwest::Method;
use scaffold_types::{Resource, State};
use serde_json::Value;

use crate::{ApiError, ApiResponse, ScaffoldClient};

impl ScaffoldClient {
    /// `GET /state`
    pub async fn states(&self, fail_on_error: bool) -> Result<ApiResponse<Vec<State>>, ApiError> {
        self.send_json(self.request(Method::GET, &[State::KIND]), fail_on_error).await
    }

    /// `GET /state/{workflow}`
    pub async fn workflow_states(&self, workflow: &str, fail_on_error: bool) -> Result<ApiResponse<Vec<State>>, ApiError> {
        self.send_json(self.request(Method::GET, &[State::KIND, workflow]), fail_on_error)
            .await
    }

    /// `GET /state/{workflow}/{task}`
    pub async fn state(&self, workflow: &str, task: &str, fail_on_error: bool) -> Result<ApiResponse<State>, ApiError> {
        self.send_json(self.request(Method::GET, &[State::KIND, workflow, task]), fail_on_error)
            .await
    }

    /// `POST /state`
    pub async fn create_state(&self, state: &State, fail_on_error: bool) -> Result<ApiResponse<()>, ApiError> {
        let builder = self.request(Method::POST, &[State::KIND]).json(&state.to_value()?);
        self.send_status(builder, fail_on_error).await
    }

    /// `PUT /state/{workflow}/{task}`
    pub async fn update_state(&self, state: &State, fail_on_error: bool) -> Result<ApiResponse<Value>, ApiError> {
        let builder = self
            .request(Method::PUT, &[State::KIND, state.workflow.as_str(), state.task.as_str()])
            .json(&state.to_value()?);
        self.send_json(builder, fail_on_error).await
    }

    /// `DELETE /state/{workflow}`
    pub async fn delete_workflow_states(&self, workflow: &str, fail_on_error: bool) -> Result<ApiResponse<()>, ApiError> {
        self.send_status(self.request(Method::DELETE, &[State::KIND, workflow]), fail_on_error)
            .await
    }

    /// `DELETE /state/{workflow}/{task}`
    pub async fn delete_state(&self, workflow: &str, task: &str, fail_on_error: bool) -> Result<ApiResponse<()>, ApiError> {
        self.send_status(self.request(Method::DELETE, &[State::KIND, workflow, task]), fail_on_error)
            .await
    }
}
