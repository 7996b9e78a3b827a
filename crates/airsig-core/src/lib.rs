pub mod clock;
pub mod error;
pub mod models;
pub mod notifier;
pub mod random;
pub mod validation;

pub use clock::{Clock, SystemClock};
pub use error::{AirsigError, AirsigResult, DeviceErrorKind};
pub use models::account::Account;
pub use models::auth_history_entry::AuthHistoryEntry;
pub use models::auth_method::AuthMethod;
pub use models::page::Page;
pub use models::session::Session;
pub use models::signature_sample::SignatureSample;
pub use notifier::{LogNotifier, Notification, Notifier, Severity};
pub use random::{RandomSource, ThreadRandom};
pub use validation::{
    MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH, is_valid_email, is_valid_username,
    validate_registration,
};

#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;
#[cfg(any(test, feature = "testing"))]
pub use notifier::RecordingNotifier;
#[cfg(any(test, feature = "testing"))]
pub use random::SequenceRandom;

#[cfg(test)]
mod tests;

/// Signature samples required to complete enrollment.
pub const REQUIRED_SIGNATURES: usize = 5;
