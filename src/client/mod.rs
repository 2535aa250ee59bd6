//! Submission client for the waitlist signup form.
//!
//! - **`WaitlistClient`** - sends one registration request and reduces the
//!   response to an [`Outcome`]
//! - **`SignupForm`** - the form state: input value, busy flag and the
//!   notifications a page shows after a submission
//!
//! # Example
//!
//! ```rust,ignore
//! use waitlist::client::{SignupForm, TracingNotifier, WaitlistClient};
//!
//! let client = WaitlistClient::new("https://example.com".parse()?)?;
//! let form = SignupForm::new(client, TracingNotifier);
//!
//! form.set_email("newuser@example.com");
//! if let Some(outcome) = form.submit().await {
//!     println!("{outcome:?}");
//! }
//! ```

mod api;
mod error;
mod form;

pub use api::{FALLBACK_ERROR_MESSAGE, Outcome, WaitlistClient};
pub use error::ClientError;
pub use form::{Notifier, SUCCESS_MESSAGE, SignupForm, TracingNotifier};
