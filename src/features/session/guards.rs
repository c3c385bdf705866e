//! Route-level session guards. Protected routes decide before rendering: they
//! wait while the probe is in flight, then either render or redirect. This is
//! UX only; the backend still authorizes every request.

use super::store::SessionPhase;
use crate::routes::paths;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Pending,
    Allow,
    Redirect(&'static str),
}

/// Decision for a route that requires a signed-in visitor.
pub fn guard(phase: &SessionPhase) -> GuardDecision {
    match phase {
        SessionPhase::Resolving => GuardDecision::Pending,
        SessionPhase::Guest => GuardDecision::Redirect(paths::LOGIN),
        SessionPhase::Authenticated(_) => GuardDecision::Allow,
    }
}

#[cfg(target_arch = "wasm32")]
pub use view::{GuestOnly, RequireSession};

#[cfg(target_arch = "wasm32")]
mod view {
    use super::{GuardDecision, guard};
    use crate::{
        components::{AlreadySignedInPanel, Spinner},
        features::session::context::use_session,
    };
    use leptos::prelude::*;
    use leptos_router::{NavigateOptions, hooks::use_navigate};

    /// Renders `children` only for signed-in visitors; guests are sent to the
    /// login page with the history entry replaced.
    #[component]
    pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
        let session = use_session();
        let navigate = use_navigate();
        let decision = Memo::new(move |_| guard(&session.phase()));

        Effect::new(move |_| {
            if let GuardDecision::Redirect(target) = decision.get() {
                tracing::debug!(to = target, "redirecting unauthenticated visitor");
                navigate(
                    target,
                    NavigateOptions {
                        replace: true,
                        ..NavigateOptions::default()
                    },
                );
            }
        });

        move || match decision.get() {
            GuardDecision::Allow => children().into_any(),
            GuardDecision::Pending => view! {
                <div class="flex justify-center items-center min-h-[50vh]">
                    <Spinner />
                </div>
            }
            .into_any(),
            GuardDecision::Redirect(_) => ().into_any(),
        }
    }

    /// Login and registration are pointless with a live session; show the
    /// signed-in panel instead of the form.
    #[component]
    pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
        let session = use_session();

        move || {
            if session.is_authenticated() {
                view! { <AlreadySignedInPanel /> }.into_any()
            } else {
                children().into_any()
            }
        }
    }
}
