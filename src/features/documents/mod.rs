//! Documents feature: the worker's dashboard content.
//!
//! Flow Overview: once the session is authenticated the home page enters
//! `LoadingContent` and issues `GET /documents` and
//! `GET /searchdocuments/templates` together. Both must settle before the grid
//! renders; if either fails the page shows an error with a retry. Cards link to
//! `/documentos/{template}?valor={name}`.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod dashboard;
pub(crate) mod decor;
pub(crate) mod types;
