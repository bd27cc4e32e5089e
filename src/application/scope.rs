//! Task scope - lifecycle owner for scheduled invocations.
//!
//! One scope per registration lifetime (e.g. one plugin or service).
//! Shutting the scope down aborts every outstanding invocation; aborted
//! tasks perform no completion work and send no message.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tokio::task::JoinHandle;
use tracing::debug;

/// Tracks the tasks spawned for one registration scope.
///
/// Shared read-mostly; the handle list is only locked briefly on spawn,
/// shutdown, and drain.
pub struct TaskScope {
    tasks: Mutex<Vec<JoinHandle<()>>>,
    shut_down: AtomicBool,
}

impl TaskScope {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            shut_down: AtomicBool::new(false),
        }
    }

    /// Spawns a task onto the tokio runtime and tracks its handle.
    ///
    /// After [`shutdown`](TaskScope::shutdown) the future is dropped
    /// without running.
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self.lock_tasks();
        if self.shut_down.load(Ordering::SeqCst) {
            debug!("task scope is shut down, dropping scheduled task");
            return;
        }
        // Prune finished handles so long-lived scopes don't accumulate.
        tasks.retain(|handle| !handle.is_finished());
        tasks.push(tokio::spawn(future));
    }

    /// Aborts all outstanding tasks and rejects further spawns.
    pub fn shutdown(&self) {
        self.shut_down.store(true, Ordering::SeqCst);
        let handles: Vec<JoinHandle<()>> = {
            let mut tasks = self.lock_tasks();
            tasks.drain(..).collect()
        };
        for handle in &handles {
            handle.abort();
        }
        debug!(aborted = handles.len(), "task scope shut down");
    }

    /// Waits for every currently-tracked task to finish (graceful drain).
    pub async fn wait_idle(&self) {
        let handles: Vec<JoinHandle<()>> = {
            let mut tasks = self.lock_tasks();
            tasks.drain(..).collect()
        };
        for handle in handles {
            // Abort (from a concurrent shutdown) surfaces as JoinError.
            let _ = handle.await;
        }
    }

    /// Number of tracked, unfinished tasks.
    pub fn outstanding(&self) -> usize {
        self.lock_tasks()
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::SeqCst)
    }

    fn lock_tasks(&self) -> std::sync::MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.tasks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for TaskScope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use tokio::sync::Notify;

    #[tokio::test]
    async fn spawned_task_runs_to_completion() {
        let scope = TaskScope::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let c = counter.clone();
        scope.spawn(async move {
            c.fetch_add(1, Ordering::SeqCst);
        });

        scope.wait_idle().await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn shutdown_aborts_outstanding_tasks() {
        let scope = TaskScope::new();
        let completed = Arc::new(AtomicUsize::new(0));
        let started = Arc::new(Notify::new());

        let c = completed.clone();
        let s = started.clone();
        scope.spawn(async move {
            s.notify_one();
            futures::future::pending::<()>().await;
            c.fetch_add(1, Ordering::SeqCst);
        });

        started.notified().await;
        scope.shutdown();
        scope.wait_idle().await;

        assert_eq!(completed.load(Ordering::SeqCst), 0);
        assert!(scope.is_shut_down());
    }

    #[tokio::test]
    async fn spawn_after_shutdown_is_dropped() {
        let scope = TaskScope::new();
        scope.shutdown();

        let counter = Arc::new(AtomicUsize::new(0));
        let c = counter.clone();
        scope.spawn(async move {
            c.fetch_add(1, Ordering::SeqCst);
        });

        scope.wait_idle().await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert_eq!(scope.outstanding(), 0);
    }

    #[tokio::test]
    async fn outstanding_counts_unfinished_tasks() {
        let scope = TaskScope::new();
        let gate = Arc::new(Notify::new());

        let g = gate.clone();
        scope.spawn(async move {
            g.notified().await;
        });

        assert_eq!(scope.outstanding(), 1);
        gate.notify_one();
        scope.wait_idle().await;
        assert_eq!(scope.outstanding(), 0);
    }
}
