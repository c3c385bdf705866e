//! Optimistic sign-out: the local session is cleared whatever the server says.

use super::store::SessionSink;
use crate::{features::backend::PortalApi, routes::paths};

/// Posts the logout request, clears the local session and returns the route
/// the caller should navigate to. Server failures are only logged.
pub(crate) async fn sign_out<A, S>(api: &A, session: &S) -> &'static str
where
    A: PortalApi,
    S: SessionSink + ?Sized,
{
    if let Err(err) = api.logout().await {
        tracing::warn!(error = %err, "logout request failed, clearing local session anyway");
    }
    session.clear();
    paths::LOGIN
}

#[cfg(test)]
mod tests {
    use super::sign_out;
    use crate::{
        app_lib::AppError,
        features::{
            backend::mock::MockPortal,
            session::{
                store::{SessionPhase, SessionStore},
                types::{Identity, ProbeOutcome},
            },
        },
    };
    use std::cell::RefCell;

    fn signed_in_store() -> RefCell<SessionStore> {
        let mut store = SessionStore::init();
        store.resolve(ProbeOutcome::Authenticated(Identity {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
        }));
        RefCell::new(store)
    }

    #[tokio::test]
    async fn sign_out_clears_session_and_targets_login() {
        let api = MockPortal::default();
        let store = signed_in_store();

        let target = sign_out(&api, &store).await;

        assert_eq!(target, "/login");
        assert_eq!(store.borrow().phase(), &SessionPhase::Guest);
        assert_eq!(api.count("logout"), 1);
    }

    #[tokio::test]
    async fn sign_out_clears_session_even_when_server_fails() {
        for failure in [
            AppError::Network("offline".to_string()),
            AppError::Http {
                status: 500,
                message: "boom".to_string(),
            },
        ] {
            let api = MockPortal {
                logout: Err(failure),
                ..MockPortal::default()
            };
            let store = signed_in_store();

            let target = sign_out(&api, &store).await;

            assert_eq!(target, "/login");
            assert!(!store.borrow().session().authenticated);
        }
    }
}
