use std::sync::{
    Mutex, PoisonError,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    application::validators::looks_like_email,
    client::api::{Outcome, WaitlistClient},
};

pub const SUCCESS_MESSAGE: &str = "Successfully joined the waitlist!";

/// Where the form reports the result of a submission (a toast on a web page).
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that writes to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(notice = message, "Waitlist signup succeeded");
    }

    fn error(&self, message: &str) {
        tracing::warn!(notice = message, "Waitlist signup failed");
    }
}

/// Clears the busy flag when dropped, whichever way `submit` exits.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    /// `None` when a submission is already in flight.
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// State of the signup form: the email field and whether a request is in flight.
pub struct SignupForm<N: Notifier> {
    client: WaitlistClient,
    notifier: N,
    email: Mutex<String>,
    busy: AtomicBool,
}

impl<N: Notifier> SignupForm<N> {
    pub fn new(client: WaitlistClient, notifier: N) -> Self {
        Self {
            client,
            notifier,
            email: Mutex::new(String::new()),
            busy: AtomicBool::new(false),
        }
    }

    pub fn set_email(&self, value: impl Into<String>) {
        *self.email.lock().unwrap_or_else(PoisonError::into_inner) = value.into();
    }

    pub fn email(&self) -> String {
        self.email
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && looks_like_email(&self.email())
    }

    /// Submit the current field value.
    ///
    /// Returns `None` without sending anything when the field is refused (empty
    /// or not email-shaped) or a submission is already in flight.
    pub async fn submit(&self) -> Option<Outcome> {
        let email = self.email();
        if !looks_like_email(&email) {
            return None;
        }

        let _busy = BusyGuard::acquire(&self.busy)?;

        let outcome = self.client.submit(&email).await;
        match &outcome {
            Outcome::Success => {
                self.set_email(String::new());
                self.notifier.success(SUCCESS_MESSAGE);
            }
            Outcome::Failure(message) => self.notifier.error(message),
        }

        Some(outcome)
    }
}
