use reqwest::Method;
use scaffold_types::{History, Resource};

use crate::{ApiError, ApiResponse, ScaffoldClient};

impl ScaffoldClient {
    /// `GET /history/{run_id}`
    pub async fn history(&self, run_id: &str, fail_on_error: bool) -> Result<ApiResponse<History>, ApiError> {
        self.send_json(self.request(Method::GET, &[History::KIND, run_id]), fail_on_error)
            .await
    }
}
