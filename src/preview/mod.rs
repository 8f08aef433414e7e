//! Preview rendering for a submitted invoice.
//!
//! Two renderings of an [`InvoiceSnapshot`]: pretty-printed JSON, and a
//! plain-text summary with amounts formatted in the invoice currency.
//! Styling, PDF output and delivery are left to the embedding application.

use crate::core::{DraftError, InvoiceSnapshot, format_money};

/// Pretty-printed JSON of the snapshot. Amounts are serialized as strings
/// to keep them exact.
pub fn render_json(snapshot: &InvoiceSnapshot) -> Result<String, DraftError> {
    serde_json::to_string_pretty(snapshot).map_err(|e| DraftError::Preview(e.to_string()))
}

/// Plain-text summary: header, one line per item, then totals.
///
/// Discount and tax rows only appear when enabled.
pub fn render_text(snapshot: &InvoiceSnapshot) -> String {
    let currency = &snapshot.currency;
    let money = |value| format_money(value, currency);

    let mut lines = vec![format!("Invoice {}", snapshot.number)];
    if let Some(date) = snapshot.invoice_date {
        lines.push(format!("Date: {date}"));
    }
    if let Some(due) = snapshot.due_date {
        lines.push(format!("Due: {due}"));
    }
    lines.push(format!("From: {}", snapshot.business.name));
    lines.push(format!("To: {}", snapshot.customer.display_name()));
    lines.push(format!("Currency: {}", currency.code));
    lines.push(String::new());

    for entry in &snapshot.lines {
        let line = &entry.line;
        lines.push(format!(
            "{} x {} @ {} = {}",
            line.item,
            line.quantity,
            money(line.rate),
            money(entry.amount)
        ));
        if !line.description.is_empty() {
            lines.push(format!("  {}", line.description));
        }
    }
    lines.push(String::new());

    let totals = &snapshot.totals;
    lines.push(format!("Subtotal: {}", money(totals.subtotal)));
    if snapshot.discount.enabled {
        lines.push(format!(
            "Discount ({}%): -{}",
            snapshot.discount.rate,
            money(totals.discount_amount)
        ));
    }
    if snapshot.tax.enabled {
        lines.push(format!(
            "Tax ({}%): {}",
            snapshot.tax.rate,
            money(totals.tax_amount)
        ));
    }
    lines.push(format!("Total: {}", money(totals.total)));

    if !snapshot.notes.is_empty() {
        lines.push(String::new());
        lines.push(format!("Notes: {}", snapshot.notes));
    }
    lines.join("\n")
}
