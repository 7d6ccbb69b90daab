use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::{
    domain::{Benefit, BenefitId},
    error::RequestError,
    protocol::{BenefitDraft, TransferRequest},
};
use tracing::{debug, warn};

use crate::notification::NotificationService;
use crate::repository::BenefitRepository;
use crate::state::Signal;

const DELETE_PROMPT: &str = "Are you sure you want to delete this benefit?";
const GENERIC_DETAIL: &str = "Check the logs for more details.";

/// Out-of-band yes/no prompt guarding destructive actions. Injected so the
/// presentation environment (terminal, dialog box, test double) owns the
/// interaction.
#[async_trait]
pub trait DeleteConfirmer: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Strip every character outside digits, comma and period, then normalize the
/// first comma to a period. The cleaned text is also what the input field
/// echoes back.
pub fn sanitize_amount(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();
    kept.replacen(',', ".", 1)
}

/// View-state controller for the benefits list and its two modals.
///
/// Every stateful field is an observable [`Signal`]; derived values such as
/// [`ViewController::source_benefit`] are recomputed on read and never
/// cached. The two modal flags are deliberately independent; nothing enforces
/// that only one modal is open at a time.
///
/// Invariants:
/// - `selected_for_edit` is `Some` only while `form_visible` is true; closing
///   the form clears both together.
/// - closing the transfer modal clears source, destination and amount
///   together, so no stale transfer input survives a reopen.
pub struct ViewController {
    repository: Arc<dyn BenefitRepository>,
    notifications: Arc<NotificationService>,
    confirmer: Arc<dyn DeleteConfirmer>,
    pub benefits: Signal<Vec<Benefit>>,
    pub form_visible: Signal<bool>,
    pub selected_for_edit: Signal<Option<Benefit>>,
    pub transfer_visible: Signal<bool>,
    pub transfer_source: Signal<Option<BenefitId>>,
    pub transfer_destination: Signal<Option<BenefitId>>,
    pub transfer_amount: Signal<Option<String>>,
}

impl ViewController {
    pub fn new(
        repository: Arc<dyn BenefitRepository>,
        notifications: Arc<NotificationService>,
        confirmer: Arc<dyn DeleteConfirmer>,
    ) -> Self {
        Self {
            repository,
            notifications,
            confirmer,
            benefits: Signal::new(Vec::new()),
            form_visible: Signal::new(false),
            selected_for_edit: Signal::new(None),
            transfer_visible: Signal::new(false),
            transfer_source: Signal::new(None),
            transfer_destination: Signal::new(None),
            transfer_amount: Signal::new(None),
        }
    }

    /// Fetch the full list from the server and replace the local snapshot.
    pub async fn load_benefits(&self) {
        match self.repository.list().await {
            Ok(benefits) => {
                debug!(count = benefits.len(), "loaded benefit list");
                self.benefits.set(benefits);
            }
            Err(err) => self.report_failure("Error loading benefits.", &err).await,
        }
    }

    /// Open the create/edit form. `None` means create mode; `Some` means edit
    /// mode, and the form pre-fills from the given record.
    pub fn open_form(&self, existing: Option<Benefit>) {
        self.selected_for_edit.set(existing);
        self.form_visible.set(true);
    }

    /// Idempotent: closing an already-closed form changes nothing.
    pub fn close_form(&self) {
        self.form_visible.set(false);
        self.selected_for_edit.set(None);
    }

    pub fn open_transfer(&self) {
        self.transfer_visible.set(true);
    }

    pub fn close_transfer(&self) {
        self.transfer_visible.set(false);
        self.transfer_source.set(None);
        self.transfer_destination.set(None);
        self.transfer_amount.set(None);
    }

    /// An empty selection maps to `None`, never to id zero.
    pub fn on_source_change(&self, id: Option<BenefitId>) {
        self.transfer_source.set(id);
    }

    pub fn on_destination_change(&self, id: Option<BenefitId>) {
        self.transfer_destination.set(id);
    }

    /// Sanitize, store and echo the transfer amount text.
    pub fn on_amount_input(&self, raw: &str) -> String {
        let sanitized = sanitize_amount(raw);
        self.transfer_amount.set(Some(sanitized.clone()));
        sanitized
    }

    /// The record currently selected as transfer source, looked up in the
    /// loaded list. Pure function of (list, selection); never cached.
    pub fn source_benefit(&self) -> Option<Benefit> {
        self.find_benefit(self.transfer_source.get())
    }

    pub fn destination_benefit(&self) -> Option<Benefit> {
        self.find_benefit(self.transfer_destination.get())
    }

    fn find_benefit(&self, id: Option<BenefitId>) -> Option<Benefit> {
        let id = id?;
        self.benefits.get().into_iter().find(|b| b.id == id)
    }

    /// Create or update, depending on whether a record is selected for edit.
    ///
    /// On success: reload the list, close the form, show a success
    /// notification. On failure: show an error notification and leave the
    /// form open so the user can retry.
    pub async fn submit_form(&self, draft: BenefitDraft) {
        let outcome = match self.selected_for_edit.get() {
            Some(existing) => {
                debug!(id = existing.id.0, "submitting benefit update");
                self.repository
                    .update(existing.id, &draft)
                    .await
                    .map(|_| "Benefit updated successfully!")
            }
            None => {
                debug!("submitting new benefit");
                self.repository
                    .create(&draft)
                    .await
                    .map(|_| "Benefit created successfully!")
            }
        };

        match outcome {
            Ok(message) => {
                self.load_benefits().await;
                self.close_form();
                self.notifications.show_success(message, None).await;
            }
            Err(err) => self.report_failure("Error saving benefit.", &err).await,
        }
    }

    /// Run the ordered client-side checks and, only if all pass, send the
    /// transfer. The first failing check emits an error notification and
    /// aborts with no request.
    ///
    /// These checks are advisory, for fast feedback only; the server performs
    /// the authoritative balance check and the atomic debit/credit.
    pub async fn submit_transfer(&self) {
        let (Some(source_id), Some(destination_id)) =
            (self.transfer_source.get(), self.transfer_destination.get())
        else {
            self.notifications
                .show_error("Select a source and a destination.", None)
                .await;
            return;
        };
        if source_id == destination_id {
            self.notifications
                .show_error("Source and destination must be different.", None)
                .await;
            return;
        }
        let amount_text = self.transfer_amount.get().unwrap_or_default();
        if amount_text.is_empty() {
            self.notifications
                .show_error("Enter an amount to transfer.", None)
                .await;
            return;
        }
        let amount = match amount_text.parse::<Decimal>() {
            Ok(value) if value > Decimal::ZERO => value,
            _ => {
                self.notifications
                    .show_error("Amount must be a positive number.", None)
                    .await;
                return;
            }
        };
        match self.source_benefit() {
            Some(source) if source.balance >= amount => {}
            _ => {
                self.notifications
                    .show_error("Insufficient balance at source.", None)
                    .await;
                return;
            }
        }

        let request = TransferRequest {
            source_id,
            destination_id,
            amount,
        };
        match self.repository.transfer(&request).await {
            Ok(()) => {
                self.notifications
                    .show_success("Transfer completed successfully!", None)
                    .await;
                self.load_benefits().await;
                self.close_transfer();
            }
            Err(err) => self.report_failure("Error transferring.", &err).await,
        }
    }

    /// Delete after out-of-band confirmation. Declining issues no request and
    /// changes no state.
    pub async fn delete_benefit(&self, id: BenefitId) {
        if !self.confirmer.confirm(DELETE_PROMPT).await {
            debug!(id = id.0, "delete not confirmed");
            return;
        }
        match self.repository.delete(id).await {
            Ok(()) => {
                self.load_benefits().await;
                self.notifications
                    .show_success("Benefit deleted successfully!", None)
                    .await;
            }
            Err(err) => self.report_failure("Error deleting benefit.", &err).await,
        }
    }

    async fn report_failure(&self, headline: &str, err: &RequestError) {
        warn!(%headline, error = %err, "benefits request failed");
        let detail = err
            .detail
            .clone()
            .unwrap_or_else(|| GENERIC_DETAIL.to_string());
        self.notifications.show_error(headline, Some(detail)).await;
    }
}
