use super::types::{LoginRequest, RegisterRequest};
use crate::app_lib::{AppError, post_json_with_credentials};

/// Posts credentials; the backend answers with a session cookie.
pub async fn login(request: &LoginRequest) -> Result<(), AppError> {
    post_json_with_credentials("/users/login", request).await
}

pub async fn register(request: &RegisterRequest) -> Result<(), AppError> {
    post_json_with_credentials("/users/registro", request).await
}
