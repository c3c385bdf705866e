//! Session context for the app. The provider owns the `SessionStore`, probes
//! the backend once when it mounts and shares the store through Leptos
//! context. Only the identity (name and email) is held in memory.

use super::{
    probe::probe_session,
    scope::MountScope,
    store::{SessionPhase, SessionSink, SessionStore},
    types::{Identity, ProbeOutcome, Session},
};
use crate::features::backend::HttpPortalApi;
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone, Copy)]
/// Session handle shared through Leptos context.
pub struct SessionContext {
    store: RwSignal<SessionStore>,
}

impl SessionContext {
    fn new() -> Self {
        Self {
            store: RwSignal::new(SessionStore::init()),
        }
    }

    /// Current phase; tracked when read inside a reactive scope.
    pub fn phase(&self) -> SessionPhase {
        self.store.with(|store| store.phase().clone())
    }

    pub fn session(&self) -> Session {
        self.store.with(SessionStore::session)
    }

    pub fn identity(&self) -> Option<Identity> {
        self.store.with(|store| store.identity().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.with(SessionStore::is_authenticated)
    }

    pub fn is_resolving(&self) -> bool {
        self.store.with(SessionStore::is_resolving)
    }

    fn epoch(&self) -> u64 {
        self.store.with_untracked(SessionStore::epoch)
    }
}

impl SessionSink for SessionContext {
    fn clear(&self) {
        self.store.update(SessionStore::clear);
    }

    fn restart(&self) -> u64 {
        self.store.try_update(SessionStore::restart).unwrap_or_default()
    }

    fn resolve_at(&self, epoch: u64, outcome: ProbeOutcome) -> bool {
        self.store
            .try_update(|store| store.resolve_at(epoch, outcome))
            .unwrap_or(false)
    }
}

/// Provides the session context and resolves it once on mount.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext::new();
    provide_context(session);

    let scope = MountScope::new();
    if let Some(probe) = scope.once(async { probe_session(&HttpPortalApi).await }) {
        let mount = scope.id();
        let epoch = session.epoch();
        spawn_local(async move {
            match probe.await {
                Ok(outcome) => {
                    session.resolve_at(epoch, outcome);
                }
                Err(_) => tracing::debug!(mount, "session probe cancelled by unmount"),
            }
        });
    }
    on_cleanup(move || scope.cancel());

    view! { {children()} }
}

/// Returns the session context, or a guest context when no provider is mounted.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        let session = SessionContext::new();
        session.clear();
        session
    })
}
