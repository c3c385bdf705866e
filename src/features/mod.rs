//! Domain-level frontend features (session, auth forms, documents) and their
//! shared backend seam. Routes import these modules to keep view code focused
//! on markup while flows and state machines stay testable without a browser.

pub(crate) mod auth;
pub(crate) mod backend;
pub(crate) mod documents;
pub(crate) mod session;
