//! Single-flight lazy initialization for process-wide resources.

use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use tokio::sync::{Mutex, OnceCell};

struct Failure<E> {
    attempt: u64,
    error: Arc<E>,
}

/// A value that is built on first demand and then shared for the life of the process.
///
/// At most one setup runs at a time. Callers that were waiting while a setup ran
/// get that setup's result, success or error. A failed setup leaves the slot
/// empty, so a caller arriving after the failure starts a fresh attempt.
pub struct SharedInit<T, E> {
    value: OnceCell<T>,
    last_failure: Mutex<Option<Failure<E>>>,
    completed_attempts: AtomicU64,
}

impl<T: Clone, E> SharedInit<T, E> {
    pub fn new() -> Self {
        Self {
            value: OnceCell::new(),
            last_failure: Mutex::new(None),
            completed_attempts: AtomicU64::new(0),
        }
    }

    pub fn get(&self) -> Option<T> {
        self.value.get().cloned()
    }

    /// Number of setup attempts that ran to completion (successful or not).
    pub fn completed_attempts(&self) -> u64 {
        self.completed_attempts.load(Ordering::Acquire)
    }

    pub async fn get_or_try_init<F, Fut>(&self, init: F) -> Result<T, Arc<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.value.get() {
            return Ok(value.clone());
        }

        let seen = self.completed_attempts.load(Ordering::Acquire);
        let mut last_failure = self.last_failure.lock().await;

        if let Some(value) = self.value.get() {
            return Ok(value.clone());
        }

        // An attempt finished while we were queued on the lock: share its outcome.
        if let Some(failure) = last_failure.as_ref()
            && failure.attempt > seen
        {
            return Err(failure.error.clone());
        }

        let result = init().await;
        let attempt = self.completed_attempts.fetch_add(1, Ordering::AcqRel) + 1;

        match result {
            Ok(value) => {
                // Only reachable while holding the lock with the cell empty.
                let _ = self.value.set(value.clone());
                *last_failure = None;
                Ok(value)
            }
            Err(err) => {
                let err = Arc::new(err);
                *last_failure = Some(Failure {
                    attempt,
                    error: err.clone(),
                });
                Err(err)
            }
        }
    }
}

impl<T: Clone, E> Default for SharedInit<T, E> {
    fn default() -> Self {
        Self::new()
    }
}
