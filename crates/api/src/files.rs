use reqwest::Method;
use scaffold_types::{File, Resource};

use crate::{ApiError, ApiResponse, ScaffoldClient};

impl ScaffoldClient {
    /// `GET /file`
    pub async fn files(&self, fail_on_error: bool) -> Result<ApiResponse<Vec<File>>, ApiError> {
        self.send_json(self.request(Method::GET, &[File::KIND]), fail_on_error).await
    }

    /// `GET /file/{workflow}`
    pub async fn workflow_files(&self, workflow: &str, fail_on_error: bool) -> Result<ApiResponse<Vec<File>>, ApiError> {
        self.send_json(self.request(Method::GET, &[File::KIND, workflow]), fail_on_error)
            .await
    }

    /// `GET /file/{workflow}/{name}`
    pub async fn file(&self, workflow: &str, name: &str, fail_on_error: bool) -> Result<ApiResponse<File>, ApiError> {
        self.send_json(self.request(Method::GET, &[File::KIND, workflow, name]), fail_on_error)
            .await
    }

    /// `POST /file`
    pub async fn create_file(&self, file: &File, fail_on_error: bool) -> Result<ApiResponse<()>, ApiError> {
        let builder = self.request(Method::POST, &[File::KIND]).json(&file.to_value()?);
        self.send_status(builder, fail_on_error).await
    }
}
