use reqwest::Method;
use scaffold_types::{Resource, Task};
use serde_json::Value;

use crate::{ApiError, ApiResponse, ScaffoldClient};

impl ScaffoldClient {
    /// `GET /task`
    pub async fn tasks(&self, fail_on_error: bool) -> Result<ApiResponse<Vec<Task>>, ApiError> {
        self.send_json(self.request(Method::GET, &[Task::KIND]), fail_on_error).await
    }

    /// `GET /task/{workflow}`
    pub async fn workflow_tasks(&self, workflow: &str, fail_on_error: bool) -> Result<ApiResponse<Vec<Task>>, ApiError> {
        self.send_json(self.request(Method::GET, &[Task::KIND, workflow]), fail_on_error)
            .await
    }

    /// `GET /task/{workflow}/{name}`
    pub async fn task(&self, workflow: &str, name: &str, fail_on_error: bool) -> Result<ApiResponse<Task>, ApiError> {
        self.send_json(self.request(Method::GET, &[Task::KIND, workflow, name]), fail_on_error)
            .await
    }

    /// `POST /task`
    pub async fn create_task(&self, task: &Task, fail_on_error: bool) -> Result<ApiResponse<()>, ApiError> {
        let builder = self.request(Method::POST, &[Task::KIND]).json(&task.to_value()?);
        self.send_status(builder, fail_on_error).await
    }

    /// `PUT /task/{workflow}/{name}`
    pub async fn update_task(&self, task: &Task, fail_on_error: bool) -> Result<ApiResponse<Value>, ApiError> {
        let builder = self
            .request(Method::PUT, &[Task::KIND, task.workflow.as_str(), task.name.as_str()])
            .json(&task.to_value()?);
        self.send_json(builder, fail_on_error).await
    }

    /// `PUT /task/{workflow}/{name}/enabled`, flipping the task's disabled flag.
    pub async fn toggle_task_enabled(
        &self,
        workflow: &str,
        name: &str,
        fail_on_error: bool,
    ) -> Result<ApiResponse<Value>, ApiError> {
        let builder = self.request(Method::PUT, &[Task::KIND, workflow, name, "enabled"]);
        self.send_json(builder, fail_on_error).await
    }

    /// `DELETE /task/{workflow}`
    pub async fn delete_workflow_tasks(&self, workflow: &str, fail_on_error: bool) -> Result<ApiResponse<()>, ApiError> {
        self.send_status(self.request(Method::DELETE, &[Task::KIND, workflow]), fail_on_error)
            .await
    }

    /// `DELETE /task/{workflow}/{name}`
    pub async fn delete_task(&self, workflow: &str, name: &str, fail_on_error: bool) -> Result<ApiResponse<()>, ApiError> {
        self.send_status(self.request(Method::DELETE, &[Task::KIND, workflow, name]), fail_on_error)
            .await
    }
}
