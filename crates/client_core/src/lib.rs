//! Client runtime for the benefits console.
//!
//! Everything a presentation layer needs to drive the benefits API:
//! the HTTP repository, the reactive view-state controller, the form
//! binding for create/edit, and the auto-expiring notification surface.

pub mod controller;
pub mod form;
pub mod notification;
pub mod repository;
pub mod state;

pub use controller::{sanitize_amount, DeleteConfirmer, ViewController};
pub use form::{BenefitForm, FieldError, SubmitResetMode, SUBMIT_RESET_DELAY};
pub use notification::{
    Notification, NotificationKind, NotificationService, NOTIFICATION_LIFETIME,
};
pub use repository::{BenefitRepository, HttpBenefitRepository, DEFAULT_BASE_PATH};
pub use state::Signal;

#[cfg(test)]
mod tests;
