//! View state for the home dashboard.
//!
//! ```text
//! Resolving ──guest──────────────▶ Guest
//!     │                              │ signed in later
//!     └──authenticated──▶ LoadingContent ◀──retry── Failed
//!                              │   └────one fetch failed───▶ Failed
//!                              └─both fetches ok──▶ Ready
//! ```
//!
//! Nothing ever returns to `Resolving`; that only happens on a fresh mount.
//! A cleared session moves any state to `Guest`.

use super::{
    decor::decorate,
    types::{DocumentCard, Template},
};
use crate::{
    app_lib::AppError,
    features::{backend::PortalApi, session::store::SessionPhase, session::types::Identity},
};
use rand::Rng;

/// Everything the ready dashboard renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardContent {
    pub documents: Vec<DocumentCard>,
    pub template_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DashboardState {
    #[default]
    Resolving,
    Guest,
    LoadingContent {
        identity: Identity,
    },
    Ready {
        identity: Identity,
        content: DashboardContent,
    },
    Failed {
        identity: Identity,
        error: AppError,
    },
}

impl DashboardState {
    /// Next state after the session phase changed, or `None` to stay put.
    pub fn on_session(&self, phase: &SessionPhase) -> Option<DashboardState> {
        match (self, phase) {
            (_, SessionPhase::Resolving) | (DashboardState::Guest, SessionPhase::Guest) => None,
            (_, SessionPhase::Guest) => Some(DashboardState::Guest),
            (DashboardState::Resolving | DashboardState::Guest, SessionPhase::Authenticated(identity)) => {
                Some(DashboardState::LoadingContent {
                    identity: identity.clone(),
                })
            }
            (
                DashboardState::LoadingContent { .. }
                | DashboardState::Ready { .. }
                | DashboardState::Failed { .. },
                SessionPhase::Authenticated(_),
            ) => None,
        }
    }

    /// Settles a content load. Only meaningful while loading; a result that
    /// arrives in any other state is dropped.
    #[must_use]
    pub fn finish(self, result: Result<DashboardContent, AppError>) -> DashboardState {
        match self {
            DashboardState::LoadingContent { identity } => match result {
                Ok(content) => {
                    tracing::debug!(documents = content.documents.len(), "dashboard ready");
                    DashboardState::Ready { identity, content }
                }
                Err(error) => {
                    tracing::warn!(error = %error, "dashboard content failed to load");
                    DashboardState::Failed { identity, error }
                }
            },
            other => {
                tracing::debug!("discarding content result outside of loading state");
                other
            }
        }
    }

    /// Leaves the error view for another load attempt.
    #[must_use]
    pub fn retry(self) -> DashboardState {
        match self {
            DashboardState::Failed { identity, .. } => DashboardState::LoadingContent { identity },
            other => other,
        }
    }

    /// In-place `retry`. True only when this call left `Failed`, which is the
    /// one case that needs a new load; repeated clicks get false.
    pub fn restart_load(&mut self) -> bool {
        if !matches!(self, DashboardState::Failed { .. }) {
            return false;
        }
        *self = std::mem::take(self).retry();
        true
    }

    pub fn is_loading_content(&self) -> bool {
        matches!(self, DashboardState::LoadingContent { .. })
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            DashboardState::LoadingContent { identity }
            | DashboardState::Ready { identity, .. }
            | DashboardState::Failed { identity, .. } => Some(identity),
            DashboardState::Resolving | DashboardState::Guest => None,
        }
    }
}

/// Loads the document list and the template list concurrently and waits for
/// both. Either failure fails the whole load; an empty template list only
/// leaves the template id unset.
pub(crate) async fn fetch_content<A, R>(api: &A, rng: &mut R) -> Result<DashboardContent, AppError>
where
    A: PortalApi,
    R: Rng + ?Sized,
{
    let (documents, templates) = futures::join!(api.list_documents(), api.list_templates());
    let documents = documents?;
    let template_id = first_template_id(templates?);

    Ok(DashboardContent {
        documents: decorate(documents, rng),
        template_id,
    })
}

fn first_template_id(templates: Vec<Template>) -> Option<String> {
    templates
        .into_iter()
        .next()
        .map(|template| template.type_id)
        .filter(|id| !id.trim().is_empty())
}
