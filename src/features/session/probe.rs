//! The session probe: one "who am I" request per mount. Every failure, from a
//! 401 to a dropped connection, downgrades the visitor to guest; the reason is
//! logged and never shown.

use super::types::ProbeOutcome;
use crate::features::backend::PortalApi;

/// Issues exactly one `who_am_i` call and classifies the answer.
pub(crate) async fn probe_session<A: PortalApi>(api: &A) -> ProbeOutcome {
    match api.who_am_i().await {
        Ok(identity) => {
            tracing::debug!("session probe found an active session");
            ProbeOutcome::Authenticated(identity)
        }
        Err(err) if err.is_unauthorized() => {
            tracing::info!(status = err.status(), "no active session");
            ProbeOutcome::Unauthenticated
        }
        Err(err) => {
            tracing::warn!(error = %err, "session probe failed, continuing as guest");
            ProbeOutcome::Unauthenticated
        }
    }
}
