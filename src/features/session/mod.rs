//! Session feature: who the visitor is and what that allows them to see.
//!
//! Flow Overview: `SessionProvider` mounts at the app root and probes
//! `GET /users/me` exactly once through a `MountScope`. The outcome moves the
//! `SessionStore` from `Resolving` to `Guest` or `Authenticated`. Routes read
//! the store through `use_session`; protected routes go through
//! `RequireSession`, which redirects guests to `/login` before rendering.
//! Sign-in restarts the store and re-reads the identity behind the new cookie;
//! sign-out calls `clear` whatever the server answers.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
pub(crate) mod context;
pub(crate) mod guards;
pub(crate) mod logout;
pub(crate) mod probe;
pub(crate) mod scope;
pub(crate) mod store;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::{GuestOnly, RequireSession};
