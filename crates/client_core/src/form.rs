use std::time::Duration;

use rust_decimal::Decimal;
use shared::{domain::Benefit, protocol::BenefitDraft};
use thiserror::Error;

use crate::state::Signal;

/// Delay after which the fixed-delay policy clears the `submitting` flag.
pub const SUBMIT_RESET_DELAY: Duration = Duration::from_secs(1);

const NAME_MIN_LEN: usize = 3;

fn balance_min() -> Decimal {
    // 0.01
    Decimal::new(1, 2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("this field is required")]
    Required,
    #[error("value is too short")]
    TooShort,
    #[error("value is below the allowed minimum")]
    BelowMinimum,
}

/// Which event clears the `submitting` flag after a submit.
///
/// The source behavior resets the flag on a fixed timer whether or not the
/// request has resolved by then; that stays the default, with the
/// clear-on-actual-response variant available behind this switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResetMode {
    FixedDelay(Duration),
    /// Cleared only when the caller reports the real outcome via
    /// [`BenefitForm::finish_submit`].
    OnResponse,
}

impl Default for SubmitResetMode {
    fn default() -> Self {
        Self::FixedDelay(SUBMIT_RESET_DELAY)
    }
}

/// Field-level binding and validation for the create/edit form.
///
/// Validation errors are only meant to render once the form has been touched;
/// an invalid submit attempt marks everything touched.
pub struct BenefitForm {
    pub name: Signal<String>,
    pub description: Signal<String>,
    pub balance: Signal<Option<Decimal>>,
    pub active: Signal<bool>,
    pub submitting: Signal<bool>,
    touched: Signal<bool>,
    reset_mode: SubmitResetMode,
}

impl BenefitForm {
    pub fn new() -> Self {
        Self::with_reset_mode(SubmitResetMode::default())
    }

    pub fn with_reset_mode(reset_mode: SubmitResetMode) -> Self {
        Self {
            name: Signal::new(String::new()),
            description: Signal::new(String::new()),
            balance: Signal::new(None),
            active: Signal::new(true),
            submitting: Signal::new(false),
            touched: Signal::new(false),
            reset_mode,
        }
    }

    /// Pre-fill for edit mode, or reset to defaults for create mode.
    pub fn set_record(&self, record: Option<&Benefit>) {
        match record {
            Some(benefit) => {
                self.name.set(benefit.name.clone());
                self.description.set(benefit.description.clone());
                self.balance.set(Some(benefit.balance));
                self.active.set(benefit.active);
            }
            None => {
                self.name.set(String::new());
                self.description.set(String::new());
                self.balance.set(None);
                self.active.set(true);
            }
        }
        self.touched.set(false);
    }

    pub fn name_error(&self) -> Option<FieldError> {
        let name = self.name.get();
        if name.is_empty() {
            Some(FieldError::Required)
        } else if name.chars().count() < NAME_MIN_LEN {
            Some(FieldError::TooShort)
        } else {
            None
        }
    }

    pub fn balance_error(&self) -> Option<FieldError> {
        match self.balance.get() {
            None => Some(FieldError::Required),
            Some(value) if value < balance_min() => Some(FieldError::BelowMinimum),
            Some(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.name_error().is_none() && self.balance_error().is_none()
    }

    /// Whether validation errors should currently be rendered.
    pub fn touched(&self) -> bool {
        self.touched.get()
    }

    pub fn mark_all_touched(&self) {
        self.touched.set(true);
    }

    /// Validate and hand the draft to the caller for submission.
    ///
    /// Returns `None` (and marks all fields touched) when invalid. When valid,
    /// raises the `submitting` flag, schedules its reset per the configured
    /// [`SubmitResetMode`], and returns the draft; the caller owns the actual
    /// repository call and the closing of the modal.
    pub fn submit(&self) -> Option<BenefitDraft> {
        let balance = match self.balance.get() {
            Some(balance) if self.is_valid() => balance,
            _ => {
                self.mark_all_touched();
                return None;
            }
        };

        self.submitting.set(true);
        if let SubmitResetMode::FixedDelay(delay) = self.reset_mode {
            let submitting = self.submitting.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                submitting.set(false);
            });
        }

        Some(BenefitDraft {
            name: self.name.get(),
            description: self.description.get(),
            balance,
            active: self.active.get(),
        })
    }

    /// Report completion of the real request in [`SubmitResetMode::OnResponse`].
    pub fn finish_submit(&self) {
        self.submitting.set(false);
    }
}

impl Default for BenefitForm {
    fn default() -> Self {
        Self::new()
    }
}
