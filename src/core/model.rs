use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use super::currencies::Currency;
use super::types::*;

/// Parse a form value as a decimal number.
///
/// Surrounding whitespace is ignored and scientific notation is accepted.
/// Anything else (`"abc"`, `""`, `"12abc"`, `"1_000"`) yields zero; a parse
/// failure is never an error. See [`try_parse_amount`] for the rules.
pub fn parse_amount(value: &str) -> Decimal {
    try_parse_amount(value).unwrap_or(Decimal::ZERO)
}

/// Parse a form value as a decimal number, or `None` if it is not one.
///
/// Accepted: optional sign, digits with at most one `.` (at least one digit
/// overall), optional exponent `e`/`E` with optional sign and digits.
/// Numbers too large for `Decimal` saturate at `Decimal::MAX`/`MIN`; numbers
/// too small to represent round to zero.
pub fn try_parse_amount(value: &str) -> Option<Decimal> {
    NumberLiteral::scan(value.trim()).map(|literal| literal.to_decimal())
}

/// Largest power of ten below `Decimal::MAX` (~7.9e28).
const MAX_LEADING_EXPONENT: i64 = 28;

/// A syntactically valid number, split into its parts.
struct NumberLiteral<'a> {
    negative: bool,
    int: &'a str,
    frac: &'a str,
    exponent: i64,
}

impl<'a> NumberLiteral<'a> {
    fn scan(s: &'a str) -> Option<Self> {
        let (negative, rest) = match s.as_bytes().first()? {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };
        let (mantissa, exponent) = match rest.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => (&rest[..pos], scan_exponent(&rest[pos + 1..])?),
            None => (rest, 0),
        };
        let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if (int.is_empty() && frac.is_empty()) || !is_digits(int) || !is_digits(frac) {
            return None;
        }
        Some(Self {
            negative,
            int,
            frac,
            exponent,
        })
    }

    fn to_decimal(&self) -> Decimal {
        let Some(first) = self
            .int
            .bytes()
            .chain(self.frac.bytes())
            .position(|b| b != b'0')
        else {
            return Decimal::ZERO;
        };
        // Power of ten of the leading significant digit.
        let lead = (self.int.len() as i64 - 1 - first as i64).saturating_add(self.exponent);
        if lead > MAX_LEADING_EXPONENT {
            return self.saturated();
        }
        if lead < -MAX_LEADING_EXPONENT {
            return Decimal::ZERO;
        }

        let int = match self.int.trim_start_matches('0') {
            "" => "0",
            digits => digits,
        };
        let sign = if self.negative { "-" } else { "" };
        let mut mantissa = format!("{sign}{int}");
        if !self.frac.is_empty() {
            mantissa.push('.');
            mantissa.push_str(self.frac);
        }
        let parsed = if self.exponent == 0 {
            Decimal::from_str(&mantissa)
        } else {
            Decimal::from_scientific(&format!("{mantissa}e{}", self.exponent))
        };
        match parsed {
            Ok(value) => value,
            Err(_) if lead >= MAX_LEADING_EXPONENT => self.saturated(),
            Err(_) => Decimal::ZERO,
        }
    }

    fn saturated(&self) -> Decimal {
        if self.negative {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    }
}

fn scan_exponent(s: &str) -> Option<i64> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if digits.is_empty() || !is_digits(digits) {
        return None;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Line items plus discount, tax and currency settings for one invoice.
///
/// Totals are derived on every call to [`InvoiceModel::compute_totals`];
/// nothing derived is cached. No operation fails: invalid numeric input is
/// stored as zero and edits addressed to missing rows are ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceModel {
    line_items: Vec<LineItem>,
    discount: Adjustment,
    tax: Adjustment,
    currency: Currency,
    saved_items: Vec<SavedItem>,
}

impl Default for InvoiceModel {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceModel {
    /// A model with one default row, discount and tax off, currency CAD.
    pub fn new() -> Self {
        Self {
            line_items: vec![LineItem::default()],
            discount: Adjustment::default(),
            tax: Adjustment::default(),
            currency: Currency::default(),
            saved_items: Vec::new(),
        }
    }

    /// A model starting from the given rows (may be empty).
    pub fn with_line_items(line_items: Vec<LineItem>) -> Self {
        Self {
            line_items,
            ..Self::new()
        }
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn discount(&self) -> Adjustment {
        self.discount
    }

    pub fn tax(&self) -> Adjustment {
        self.tax
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn saved_items(&self) -> &[SavedItem] {
        &self.saved_items
    }

    /// Append a default row and return its index.
    pub fn add_line_item(&mut self) -> usize {
        self.push_line(LineItem::default())
    }

    /// Append a prepared row and return its index.
    pub fn push_line(&mut self, line: LineItem) -> usize {
        self.line_items.push(line);
        let index = self.line_items.len() - 1;
        debug!(index, "line item appended");
        index
    }

    /// Remove the row at `index`.
    ///
    /// Removing the last remaining row is allowed here; keeping at least one
    /// row on screen is up to the form.
    pub fn remove_line_item(&mut self, index: usize) -> Option<LineItem> {
        if index >= self.line_items.len() {
            warn!(index, len = self.line_items.len(), "remove of missing line item ignored");
            return None;
        }
        let removed = self.line_items.remove(index);
        debug!(index, remaining = self.line_items.len(), "line item removed");
        Some(removed)
    }

    /// Apply a field edit. Returns `false` if there is no row at `index`.
    ///
    /// `quantity` and `rate` are parsed with [`parse_amount`]; text fields
    /// are stored verbatim.
    pub fn update_line_item(&mut self, index: usize, field: LineItemField, value: &str) -> bool {
        let Some(line) = self.line_items.get_mut(index) else {
            warn!(index, field = field.name(), "edit of missing line item ignored");
            return false;
        };

        match field {
            LineItemField::Item => line.item = value.to_string(),
            LineItemField::Description => line.description = value.to_string(),
            LineItemField::Quantity | LineItemField::Rate => {
                let parsed = try_parse_amount(value).unwrap_or_else(|| {
                    warn!(index, field = field.name(), value, "non-numeric input stored as 0");
                    Decimal::ZERO
                });
                if field == LineItemField::Quantity {
                    line.quantity = parsed;
                } else {
                    line.rate = parsed;
                }
            }
        }
        debug!(index, field = field.name(), "line item updated");
        true
    }

    pub fn set_discount(&mut self, enabled: bool, rate: Decimal) {
        self.discount = Adjustment::new(enabled, rate);
        debug!(enabled, %rate, "discount changed");
    }

    pub fn set_tax(&mut self, enabled: bool, rate: Decimal) {
        self.tax = Adjustment::new(enabled, rate);
        debug!(enabled, %rate, "tax changed");
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
        debug!(code = currency.code, "currency changed");
    }

    /// Snapshot the row at `index` into the saved-item list.
    ///
    /// Repeated saves of the same row append duplicates.
    pub fn save_line_item(&mut self, index: usize) -> Option<&SavedItem> {
        let saved = SavedItem::from(self.line_items.get(index)?);
        self.saved_items.push(saved);
        debug!(index, saved = self.saved_items.len(), "line item saved");
        self.saved_items.last()
    }

    /// Append a row pre-filled from a saved item (quantity 1).
    pub fn add_saved_item(&mut self, saved: &SavedItem) -> usize {
        self.push_line(LineItem {
            item: saved.item.clone(),
            description: saved.description.clone(),
            rate: saved.rate,
            ..LineItem::default()
        })
    }

    /// Sum of all line amounts.
    pub fn subtotal(&self) -> Decimal {
        self.line_items
            .iter()
            .map(LineItem::amount)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Derive the totals from the current state.
    ///
    /// The discount applies to the subtotal and tax to the discounted
    /// subtotal, in that order. Amounts beyond the range of `Decimal`
    /// saturate instead of panicking.
    pub fn compute_totals(&self) -> Totals {
        let subtotal = self.subtotal();
        let discount_amount = self.discount.apply_to(subtotal);
        let discounted_subtotal = subtotal.saturating_sub(discount_amount);
        let tax_amount = self.tax.apply_to(discounted_subtotal);

        Totals {
            subtotal,
            discount_amount,
            discounted_subtotal,
            tax_amount,
            total: discounted_subtotal.saturating_add(tax_amount),
        }
    }
}
