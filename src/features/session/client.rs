//! Session endpoints. Both rely on the session cookie and carry no body.

use crate::{
    app_lib::{AppError, get_json_with_credentials, post_empty_with_credentials},
    features::session::types::Identity,
};

/// Fetches the identity behind the current session cookie.
pub async fn who_am_i() -> Result<Identity, AppError> {
    get_json_with_credentials("/users/me").await
}

/// Invalidates the session on the server.
pub async fn logout() -> Result<(), AppError> {
    post_empty_with_credentials("/users/logout").await
}
