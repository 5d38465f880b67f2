use reqwest::Method;
use scaffold_types::{Resource, Workflow};
use serde_json::Value;

use crate::{ApiError, ApiResponse, ScaffoldClient};

impl ScaffoldClient {
    /// `GET /workflow`
    pub async fn workflows(&self, fail_on_error: bool) -> Result<ApiResponse<Vec<Workflow>>, ApiError> {
        self.send_json(self.request(Method::GET, &[Workflow::KIND]), fail_on_error)
            .await
    }

    /// `GET /workflow/{name}`
    pub async fn workflow(&self, name: &str, fail_on_error: bool) -> Result<ApiResponse<Workflow>, ApiError> {
        self.send_json(self.request(Method::GET, &[Workflow::KIND, name]), fail_on_error)
            .await
    }

    /// `POST /workflow`
    pub async fn create_workflow(&self, workflow: &Workflow, fail_on_error: bool) -> Result<ApiResponse<()>, ApiError> {
        let builder = self
            .request(Method::POST, &[Workflow::KIND])
            .json(&workflow.to_value()?);
        self.send_status(builder, fail_on_error).await
    }

    /// `PUT /workflow/{name}`
    pub async fn update_workflow(&self, workflow: &Workflow, fail_on_error: bool) -> Result<ApiResponse<Value>, ApiError> {
        let builder = self
            .request(Method::PUT, &[Workflow::KIND, workflow.name.as_str()])
            .json(&workflow.to_value()?);
        self.send_json(builder, fail_on_error).await
    }

    /// `DELETE /workflow/{name}`
    pub async fn delete_workflow(&self, name: &str, fail_on_error: bool) -> Result<ApiResponse<()>, ApiError> {
        self.send_status(self.request(Method::DELETE, &[Workflow::KIND, name]), fail_on_error)
            .await
    }
}
