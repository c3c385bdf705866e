//! Seam between the views and the portal backend. Views and flows are written
//! against `PortalApi` so the session and dashboard logic can run against a
//! recording double in tests, while the browser build talks HTTP through
//! `HttpPortalApi`.

use crate::{
    app_lib::AppError,
    features::{
        auth::types::{LoginRequest, RegisterRequest},
        documents::types::{Document, Template},
        session::types::Identity,
    },
};

/// Operations the portal backend exposes to the front-end.
pub(crate) trait PortalApi {
    /// `GET /users/me`: identity behind the current session cookie.
    async fn who_am_i(&self) -> Result<Identity, AppError>;
    /// `GET /documents`: document kinds available to the signed-in worker.
    async fn list_documents(&self) -> Result<Vec<Document>, AppError>;
    /// `GET /searchdocuments/templates`: templates used to open a document.
    async fn list_templates(&self) -> Result<Vec<Template>, AppError>;
    /// `POST /users/login`: sets the session cookie on success.
    async fn login(&self, request: &LoginRequest) -> Result<(), AppError>;
    /// `POST /users/registro`: creates an account.
    async fn register(&self, request: &RegisterRequest) -> Result<(), AppError>;
    /// `POST /users/logout`: invalidates the session cookie.
    async fn logout(&self) -> Result<(), AppError>;
}

/// Cookie-authenticated HTTP implementation used by the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct HttpPortalApi;

#[cfg(target_arch = "wasm32")]
impl PortalApi for HttpPortalApi {
    async fn who_am_i(&self) -> Result<Identity, AppError> {
        crate::features::session::client::who_am_i().await
    }

    async fn list_documents(&self) -> Result<Vec<Document>, AppError> {
        crate::features::documents::client::list_documents().await
    }

    async fn list_templates(&self) -> Result<Vec<Template>, AppError> {
        crate::features::documents::client::list_templates().await
    }

    async fn login(&self, request: &LoginRequest) -> Result<(), AppError> {
        crate::features::auth::client::login(request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), AppError> {
        crate::features::auth::client::register(request).await
    }

    async fn logout(&self) -> Result<(), AppError> {
        crate::features::session::client::logout().await
    }
}
