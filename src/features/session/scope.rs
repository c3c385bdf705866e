//! Per-mount task ownership. A `MountScope` is created when a view mounts and
//! cancelled from its cleanup hook. Futures bound to the scope are aborted on
//! cancellation, so a response that arrives after teardown never reaches the
//! view's signals. `once` adds a one-shot latch for work that must run at most
//! once per mount, such as the session probe.

use futures::future::{AbortHandle, Abortable};
use std::{
    future::Future,
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
};

static NEXT_MOUNT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Default)]
struct ScopeTasks {
    cancelled: bool,
    handles: Vec<AbortHandle>,
}

#[derive(Clone, Debug)]
pub struct MountScope {
    id: u64,
    fired: Arc<AtomicBool>,
    tasks: Arc<Mutex<ScopeTasks>>,
}

impl std::fmt::Debug for ScopeTasks {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ScopeTasks")
            .field("cancelled", &self.cancelled)
            .field("pending", &self.handles.len())
            .finish()
    }
}

impl Default for MountScope {
    fn default() -> Self {
        Self::new()
    }
}

impl MountScope {
    pub fn new() -> Self {
        Self {
            id: NEXT_MOUNT_ID.fetch_add(1, Ordering::Relaxed),
            fired: Arc::new(AtomicBool::new(false)),
            tasks: Arc::new(Mutex::new(ScopeTasks::default())),
        }
    }

    /// Identity of the mount this scope belongs to, used in log fields.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Binds `future` to the scope the first time it is called; every later
    /// call returns `None` without touching the future.
    pub fn once<F: Future>(&self, future: F) -> Option<Abortable<F>> {
        if self.fired.swap(true, Ordering::AcqRel) {
            tracing::debug!(mount = self.id, "one-shot task already started");
            return None;
        }
        Some(self.bind(future))
    }

    /// Wraps `future` so that cancelling the scope aborts it. Binding to an
    /// already cancelled scope yields a future that resolves to `Err(Aborted)`.
    pub fn bind<F: Future>(&self, future: F) -> Abortable<F> {
        let (handle, registration) = AbortHandle::new_pair();
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        if tasks.cancelled {
            handle.abort();
        } else {
            tasks.handles.retain(|existing| !existing.is_aborted());
            tasks.handles.push(handle);
        }
        Abortable::new(future, registration)
    }

    /// Aborts every bound future. Called from the view's cleanup.
    pub fn cancel(&self) {
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        if tasks.cancelled {
            return;
        }
        tasks.cancelled = true;
        let pending = tasks.handles.len();
        for handle in tasks.handles.drain(..) {
            handle.abort();
        }
        tracing::debug!(mount = self.id, pending, "mount scope cancelled");
    }

    pub fn is_cancelled(&self) -> bool {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::MountScope;
    use futures::future::{Aborted, pending};

    #[test]
    fn each_scope_gets_a_distinct_id() {
        let first = MountScope::new();
        let second = MountScope::new();
        assert_ne!(first.id(), second.id());
        assert_eq!(first.clone().id(), first.id());
    }

    #[tokio::test]
    async fn once_only_hands_out_the_first_future() {
        let scope = MountScope::new();

        let first = scope.once(async { 1 });
        assert!(scope.once(async { 2 }).is_none());
        assert!(scope.clone().once(async { 3 }).is_none());

        let first = first.expect("first call is armed");
        assert_eq!(first.await, Ok(1));
    }

    #[tokio::test]
    async fn cancel_aborts_pending_futures() {
        let scope = MountScope::new();
        let task = scope.bind(pending::<()>());

        scope.cancel();

        assert_eq!(task.await, Err(Aborted));
        assert!(scope.is_cancelled());
    }

    #[tokio::test]
    async fn bind_after_cancel_is_already_aborted() {
        let scope = MountScope::new();
        scope.cancel();
        scope.cancel();

        let task = scope.bind(async { "late" });
        assert_eq!(task.await, Err(Aborted));
    }

    #[tokio::test]
    async fn completed_tasks_are_unaffected_by_cancel() {
        let scope = MountScope::new();
        let result = scope.bind(async { 7 }).await;
        scope.cancel();
        assert_eq!(result, Ok(7));
    }
}
