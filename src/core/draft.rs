use chrono::NaiveDate;
use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use super::currencies::Currency;
use super::due_date::{DueDatePreset, quick_due_date_on};
use super::error::{DraftError, ValidationError};
use super::model::InvoiceModel;
use super::numbering::generate_invoice_number_with;
use super::types::*;
use super::validation;

/// One invoice-editing session: the details entered in the form plus the
/// computation model. Dropped when the session ends; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceDraft {
    business: BusinessDetails,
    customer: CustomerDetails,
    number: String,
    invoice_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
    notes: String,
    model: InvoiceModel,
}

impl InvoiceDraft {
    /// Empty draft with one default row.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_model(model: InvoiceModel) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    pub fn business(&self) -> &BusinessDetails {
        &self.business
    }

    pub fn business_mut(&mut self) -> &mut BusinessDetails {
        &mut self.business
    }

    pub fn customer(&self) -> &CustomerDetails {
        &self.customer
    }

    pub fn customer_mut(&mut self) -> &mut CustomerDetails {
        &mut self.customer
    }

    pub fn model(&self) -> &InvoiceModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut InvoiceModel {
        &mut self.model
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn set_number(&mut self, number: impl Into<String>) {
        self.number = number.into();
    }

    pub fn invoice_date(&self) -> Option<NaiveDate> {
        self.invoice_date
    }

    pub fn set_invoice_date(&mut self, date: Option<NaiveDate>) {
        self.invoice_date = date;
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn set_due_date(&mut self, date: Option<NaiveDate>) {
        self.due_date = date;
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Fill in the invoice number from the business name and customer label.
    pub fn generate_number<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        self.number = generate_invoice_number_with(
            &self.business.name,
            &self.customer.display_name(),
            rng,
        );
        &self.number
    }

    /// [`InvoiceDraft::generate_number`] with the thread-local generator.
    pub fn generate_number_random(&mut self) -> &str {
        self.generate_number(&mut rand::thread_rng())
    }

    /// Set the due date from a preset, counted from the invoice date or
    /// `today` when no invoice date is set.
    pub fn apply_due_preset(
        &mut self,
        preset: DueDatePreset,
        today: NaiveDate,
    ) -> Result<NaiveDate, DraftError> {
        let due = quick_due_date_on(self.invoice_date, preset.days(), today)?;
        self.due_date = Some(due);
        Ok(due)
    }

    /// All missing required fields.
    pub fn validate(&self) -> Vec<ValidationError> {
        validation::validate_submission(&self.business, &self.customer)
    }

    /// Validate and freeze the draft into a snapshot for preview.
    pub fn submit(&self) -> Result<InvoiceSnapshot, DraftError> {
        let errors = self.validate();
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(DraftError::Validation(msg));
        }

        let snapshot = InvoiceSnapshot::from_draft(self);
        info!(
            number = %snapshot.number,
            lines = snapshot.lines.len(),
            total = %snapshot.totals.total,
            "invoice submitted"
        );
        Ok(snapshot)
    }
}

/// A line item with its derived amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotLine {
    #[serde(flatten)]
    pub line: LineItem,
    pub amount: Decimal,
}

/// Immutable copy of a submitted draft, with totals resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceSnapshot {
    pub number: String,
    pub invoice_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub business: BusinessDetails,
    pub customer: CustomerDetails,
    pub notes: String,
    pub currency: Currency,
    pub lines: Vec<SnapshotLine>,
    pub discount: Adjustment,
    pub tax: Adjustment,
    pub totals: Totals,
}

impl InvoiceSnapshot {
    fn from_draft(draft: &InvoiceDraft) -> Self {
        let model = &draft.model;
        Self {
            number: draft.number.clone(),
            invoice_date: draft.invoice_date,
            due_date: draft.due_date,
            business: draft.business.clone(),
            customer: draft.customer.clone(),
            notes: draft.notes.clone(),
            currency: model.currency(),
            lines: model
                .line_items()
                .iter()
                .map(|line| SnapshotLine {
                    line: line.clone(),
                    amount: line.amount(),
                })
                .collect(),
            discount: model.discount(),
            tax: model.tax(),
            totals: model.compute_totals(),
        }
    }
}
