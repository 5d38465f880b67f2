use reqwest::Method;
use scaffold_types::{Resource, User};
use serde_json::Value;

use crate::{ApiError, ApiResponse, ScaffoldClient};

impl ScaffoldClient {
    /// `GET /user`
    pub async fn users(&self, fail_on_error: bool) -> Result<ApiResponse<Vec<User>>, ApiError> {
        self.send_json(self.request(Method::GET, &[User::KIND]), fail_on_error).await
    }

    /// `GET /user/{username}`
    pub async fn user(&self, username: &str, fail_on_error: bool) -> Result<ApiResponse<User>, ApiError> {
        self.send_json(self.request(Method::GET, &[User::KIND, username]), fail_on_error)
            .await
    }

    /// `POST /user`
    pub async fn create_user(&self, user: &User, fail_on_error: bool) -> Result<ApiResponse<()>, ApiError> {
        let builder = self.request(Method::POST, &[User::KIND]).json(&user.to_value()?);
        self.send_status(builder, fail_on_error).await
    }

    /// `PUT /user/{username}`
    pub async fn update_user(&self, user: &User, fail_on_error: bool) -> Result<ApiResponse<Value>, ApiError> {
        let builder = self
            .request(Method::PUT, &[User::KIND, user.username.as_str()])
            .json(&user.to_value()?);
        self.send_json(builder, fail_on_error).await
    }

    /// `DELETE /user/{username}`
    pub async fn delete_user(&self, username: &str, fail_on_error: bool) -> Result<ApiResponse<()>, ApiError> {
        self.send_status(self.request(Method::DELETE, &[User::KIND, username]), fail_on_error)
            .await
    }
}
