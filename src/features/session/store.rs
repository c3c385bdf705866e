//! Owned session state with an explicit lifecycle. The store starts in
//! `Resolving` and takes exactly one probe result per round. Afterwards it
//! only changes through `restart` (sign-in) or `clear` (sign-out).

use super::types::{Identity, ProbeOutcome, Session};

/// Where the visitor's authentication currently stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Resolving,
    Guest,
    Authenticated(Identity),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStore {
    phase: SessionPhase,
    epoch: u64,
}

impl SessionStore {
    /// Fresh store awaiting its probe result.
    pub fn init() -> Self {
        Self {
            phase: SessionPhase::Resolving,
            epoch: 0,
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn session(&self) -> Session {
        match &self.phase {
            SessionPhase::Authenticated(identity) => Session {
                authenticated: true,
                identity: Some(identity.clone()),
            },
            SessionPhase::Resolving | SessionPhase::Guest => Session::default(),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        match &self.phase {
            SessionPhase::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_resolving(&self) -> bool {
        self.phase == SessionPhase::Resolving
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, SessionPhase::Authenticated(_))
    }

    /// Applies the mount probe result. Ignored once the session has been
    /// decided, so a late probe cannot undo an explicit sign-in or sign-out.
    pub fn resolve(&mut self, outcome: ProbeOutcome) -> bool {
        if !self.is_resolving() {
            tracing::debug!("ignoring probe result for an already resolved session");
            return false;
        }
        self.phase = match outcome {
            ProbeOutcome::Authenticated(identity) => SessionPhase::Authenticated(identity),
            ProbeOutcome::Unauthenticated => SessionPhase::Guest,
        };
        true
    }

    pub fn clear(&mut self) {
        self.phase = SessionPhase::Guest;
    }

    /// Resolution round the store is waiting on; bumped by `restart`.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Back to `Resolving` for a new round, used after a sign-in once the
    /// backend has set a new cookie. Returns the round to resolve.
    pub fn restart(&mut self) -> u64 {
        self.epoch += 1;
        self.phase = SessionPhase::Resolving;
        self.epoch
    }

    /// Like `resolve`, but only for the given round. A probe started before a
    /// restart carries an outdated cookie and is dropped.
    pub fn resolve_at(&mut self, epoch: u64, outcome: ProbeOutcome) -> bool {
        if epoch != self.epoch {
            tracing::debug!(epoch, current = self.epoch, "ignoring probe result from an earlier round");
            return false;
        }
        self.resolve(outcome)
    }
}

/// Receiver for session changes made by flows such as sign-in and sign-out.
pub(crate) trait SessionSink {
    fn clear(&self);
    fn restart(&self) -> u64;
    /// Applies a probe result for round `epoch`; `false` when it was dropped.
    fn resolve_at(&self, epoch: u64, outcome: ProbeOutcome) -> bool;
}

#[cfg(test)]
impl SessionSink for std::cell::RefCell<SessionStore> {
    fn clear(&self) {
        self.borrow_mut().clear();
    }

    fn restart(&self) -> u64 {
        self.borrow_mut().restart()
    }

    fn resolve_at(&self, epoch: u64, outcome: ProbeOutcome) -> bool {
        self.borrow_mut().resolve_at(epoch, outcome)
    }
}
