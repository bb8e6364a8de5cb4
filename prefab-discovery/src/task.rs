//! Cancellable bounded-wait background task.
//!
//! Wraps the recurring pattern of a blocking call over an event-driven
//! subsystem: spawn a worker, wait for its first result with a timeout, then
//! cancel and join the worker before returning to the caller. After `wait`
//! returns there is no background activity left, whether a result arrived
//! or not.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

/// Handle given to the worker closure for delivering results and observing
/// cancellation.
pub(crate) struct TaskContext<T> {
    tx: mpsc::Sender<T>,
    cancelled: Arc<AtomicBool>,
}

impl<T> Clone for TaskContext<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            cancelled: Arc::clone(&self.cancelled),
        }
    }
}

impl<T> TaskContext<T> {
    /// True once the waiting side has given up; workers should exit promptly.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Deliver a result to the waiting side. Only the first delivery is
    /// observed; returns false when the waiter is already gone.
    pub fn deliver(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }
}

/// A background worker whose lifetime is bounded by a single `wait` call.
pub(crate) struct BoundedTask<T> {
    rx: mpsc::Receiver<T>,
    cancelled: Arc<AtomicBool>,
    handle: thread::JoinHandle<()>,
}

impl<T: Send + 'static> BoundedTask<T> {
    /// Spawn `work` on a dedicated thread. The closure must poll
    /// `TaskContext::is_cancelled` between blocking slices so that
    /// cancellation is observed promptly.
    pub fn spawn<F>(work: F) -> Self
    where
        F: FnOnce(TaskContext<T>) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let ctx = TaskContext {
            tx,
            cancelled: Arc::clone(&cancelled),
        };
        let handle = thread::spawn(move || work(ctx));
        Self {
            rx,
            cancelled,
            handle,
        }
    }

    /// Block until the worker delivers a value or `timeout` elapses,
    /// whichever comes first. The worker is cancelled and joined before this
    /// returns, so the thread is fully stopped either way.
    pub fn wait(self, timeout: Duration) -> Option<T> {
        let result = self.rx.recv_timeout(timeout).ok();
        self.cancelled.store(true, Ordering::Relaxed);
        let _ = self.handle.join();
        result
    }
}
