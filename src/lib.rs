//! # invoice-draft
//!
//! In-memory model behind an invoice creation form: line items,
//! discount and tax toggles, currency labels, invoice numbers and
//! due-date presets.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Totals are derived on every read and never rounded; rounding to cents
//! happens only in [`core::format_money`].
//!
//! ## Quick Start
//!
//! ```rust
//! use invoice_draft::core::*;
//! use rust_decimal_macros::dec;
//!
//! let mut model = InvoiceModel::new();
//! model.update_line_item(0, LineItemField::Quantity, "2");
//! model.update_line_item(0, LineItemField::Rate, "50");
//! model.add_line_item();
//! model.update_line_item(1, LineItemField::Rate, "25");
//! model.set_discount(true, dec!(10));
//! model.set_tax(true, dec!(13));
//!
//! let totals = model.compute_totals();
//! assert_eq!(totals.subtotal, dec!(125));
//! assert_eq!(totals.discount_amount, dec!(12.5));
//! assert_eq!(totals.tax_amount, dec!(14.625));
//! assert_eq!(totals.total, dec!(127.125));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Computation model, draft session, numbering, due dates, validation |
//! | `preview` | JSON and plain-text preview of a submitted invoice |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "preview")]
pub mod preview;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
