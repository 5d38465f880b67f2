use reqwest::Method;
use scaffold_types::{Resource, Run};
use serde_json::Value;

use crate::{ApiError, ApiResponse, ScaffoldClient};

impl ScaffoldClient {
    /// `POST /run/{workflow}/{task}`: trigger a manual run of a task.
    pub async fn create_run(
        &self,
        workflow: &str,
        task: &str,
        run: &Run,
        fail_on_error: bool,
    ) -> Result<ApiResponse<()>, ApiError> {
        let builder = self
            .request(Method::POST, &[Run::KIND, workflow, task])
            .json(&run.to_value()?);
        self.send_status(builder, fail_on_error).await
    }

    /// `GET /run/{run_id}`
    pub async fn run_status(&self, run_id: &str, fail_on_error: bool) -> Result<ApiResponse<Value>, ApiError> {
        self.send_json(self.request(Method::GET, &[Run::KIND, run_id]), fail_on_error)
            .await
    }

    /// `DELETE /run/{workflow}/{task}`: kill the task's current run.
    pub async fn kill_run(&self, workflow: &str, task: &str, fail_on_error: bool) -> Result<ApiResponse<()>, ApiError> {
        self.send_status(self.request(Method::DELETE, &[Run::KIND, workflow, task]), fail_on_error)
            .await
    }
}
