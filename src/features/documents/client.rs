//! Client helpers for document endpoints. Both need the session cookie.

use crate::{
    app_lib::{AppError, get_json_with_credentials},
    features::documents::types::{Document, Template},
};

/// Fetches the document kinds available to the signed-in worker.
pub async fn list_documents() -> Result<Vec<Document>, AppError> {
    get_json_with_credentials("/documents").await
}

/// Fetches the search templates; the first one parameterizes document links.
pub async fn list_templates() -> Result<Vec<Template>, AppError> {
    get_json_with_credentials("/searchdocuments/templates").await
}
