//! Core invoice draft types, totals computation, and helpers.
//!
//! [`InvoiceModel`] owns the line items and the discount/tax/currency
//! configuration; [`InvoiceDraft`] wraps it together with the business and
//! customer details for one editing session.

mod builder;
pub mod currencies;
mod draft;
mod due_date;
mod error;
mod format;
mod model;
mod numbering;
mod types;
mod validation;

pub use builder::*;
pub use currencies::{CURRENCIES, Currency};
pub use draft::*;
pub use due_date::*;
pub use error::*;
pub use format::*;
pub use model::*;
pub use numbering::*;
pub use types::*;
pub use validation::*;
