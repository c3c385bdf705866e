//! Shared frontend utilities for API access, configuration, errors, logging and
//! build metadata.
//!
//! ## Session model
//!
//! The portal backend owns authentication. It sets an `HttpOnly` cookie on
//! `POST /users/login` and answers `GET /users/me` with the caller's identity
//! while that cookie is valid. The frontend never sees the cookie; it only
//! asks "who am I" once per mount and renders accordingly.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must avoid logging form
//! payloads, which carry passwords and CPF numbers.

pub(crate) mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod logging;

pub(crate) const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH_SHORT {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{
    get_json_with_credentials, post_empty_with_credentials, post_json_with_credentials,
};
pub(crate) use errors::AppError;
