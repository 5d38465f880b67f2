use reqwest::Method;
use scaffold_types::{Resource, WorkflowInput};
use serde_json::Value;

use crate::{ApiError, ApiResponse, ScaffoldClient};

impl ScaffoldClient {
    /// `GET /input`
    pub async fn inputs(&self, fail_on_error: bool) -> Result<ApiResponse<Vec<WorkflowInput>>, ApiError> {
        self.send_json(self.request(Method::GET, &[WorkflowInput::KIND]), fail_on_error)
            .await
    }

    /// `GET /input/{workflow}`
    pub async fn workflow_inputs(
        &self,
        workflow: &str,
        fail_on_error: bool,
    ) -> Result<ApiResponse<Vec<WorkflowInput>>, ApiError> {
        self.send_json(self.request(Method::GET, &[WorkflowInput::KIND, workflow]), fail_on_error)
            .await
    }

    /// `GET /input/{workflow}/{name}`
    pub async fn input(&self, workflow: &str, name: &str, fail_on_error: bool) -> Result<ApiResponse<WorkflowInput>, ApiError> {
        let builder = self.request(Method::GET, &[WorkflowInput::KIND, workflow, name]);
        self.send_json(builder, fail_on_error).await
    }

    /// `POST /input`
    pub async fn create_input(&self, input: &WorkflowInput, fail_on_error: bool) -> Result<ApiResponse<()>, ApiError> {
        let builder = self
            .request(Method::POST, &[WorkflowInput::KIND])
            .json(&input.to_value()?);
        self.send_status(builder, fail_on_error).await
    }

    /// `PUT /input/{workflow}/{name}`
    pub async fn update_input(
        &self,
        workflow: &str,
        name: &str,
        input: &WorkflowInput,
        fail_on_error: bool,
    ) -> Result<ApiResponse<Value>, ApiError> {
        let builder = self
            .request(Method::PUT, &[WorkflowInput::KIND, workflow, name])
            .json(&input.to_value()?);
        self.send_json(builder, fail_on_error).await
    }

    /// `DELETE /input/{workflow}`
    pub async fn delete_workflow_inputs(&self, workflow: &str, fail_on_error: bool) -> Result<ApiResponse<()>, ApiError> {
        self.send_status(self.request(Method::DELETE, &[WorkflowInput::KIND, workflow]), fail_on_error)
            .await
    }

    /// `DELETE /input/{workflow}/{name}`
    pub async fn delete_input(&self, workflow: &str, name: &str, fail_on_error: bool) -> Result<ApiResponse<()>, ApiError> {
        let builder = self.request(Method::DELETE, &[WorkflowInput::KIND, workflow, name]);
        self.send_status(builder, fail_on_error).await
    }

    /// `POST /input/{workflow}/update`: re-render the tasks that consume the changed inputs.
    pub async fn update_dependent_tasks(
        &self,
        workflow: &str,
        changed_inputs: &[String],
        fail_on_error: bool,
    ) -> Result<ApiResponse<Value>, ApiError> {
        let builder = self
            .request(Method::POST, &[WorkflowInput::KIND, workflow, "update"])
            .json(changed_inputs);
        self.send_json(builder, fail_on_error).await
    }
}
