//! Login and registration: form models, declarative validation and the submit
//! flows. Passwords stay in `SecretString` until the request is built and are
//! never logged.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod forms;
pub(crate) mod submit;
pub(crate) mod types;
pub(crate) mod validation;
