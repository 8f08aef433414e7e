use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One billable row of the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Short label, free text (may be empty).
    pub item: String,
    /// Longer free text (may be empty).
    pub description: String,
    /// Invoiced quantity. Any value is accepted; invalid input is stored as 0.
    pub quantity: Decimal,
    /// Price per unit. Any value is accepted; invalid input is stored as 0.
    pub rate: Decimal,
}

impl Default for LineItem {
    fn default() -> Self {
        Self {
            item: String::new(),
            description: String::new(),
            quantity: Decimal::ONE,
            rate: Decimal::ZERO,
        }
    }
}

impl LineItem {
    /// `quantity * rate`, unrounded. Saturates at the limits of `Decimal`.
    pub fn amount(&self) -> Decimal {
        self.quantity.saturating_mul(self.rate)
    }
}

/// Addressable fields of a [`LineItem`], as sent by a form view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineItemField {
    Item,
    Description,
    Quantity,
    Rate,
}

impl LineItemField {
    /// Form field name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Description => "description",
            Self::Quantity => "quantity",
            Self::Rate => "rate",
        }
    }

    /// Parse from a form field name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "item" => Some(Self::Item),
            "description" => Some(Self::Description),
            "quantity" => Some(Self::Quantity),
            "rate" => Some(Self::Rate),
            _ => None,
        }
    }
}

/// Reusable snapshot of a line item (quantity is not kept).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedItem {
    pub item: String,
    pub description: String,
    pub rate: Decimal,
}

impl From<&LineItem> for SavedItem {
    fn from(line: &LineItem) -> Self {
        Self {
            item: line.item.clone(),
            description: line.description.clone(),
            rate: line.rate,
        }
    }
}

/// A percentage adjustment that can be switched on and off (discount, tax).
///
/// The rate is not clamped: negative or >100 rates are computed as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Adjustment {
    pub enabled: bool,
    /// Percentage, e.g. `13` for 13%.
    pub rate: Decimal,
}

impl Adjustment {
    pub fn new(enabled: bool, rate: Decimal) -> Self {
        Self { enabled, rate }
    }

    /// `base * rate / 100` when enabled, zero otherwise.
    pub fn apply_to(&self, base: Decimal) -> Decimal {
        if self.enabled {
            base.saturating_mul(self.rate / Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        }
    }
}

/// Derived invoice totals. Never stored, always exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all line amounts.
    pub subtotal: Decimal,
    /// `subtotal * discount rate / 100` when the discount is enabled.
    pub discount_amount: Decimal,
    /// `subtotal - discount_amount`; the base for tax.
    pub discounted_subtotal: Decimal,
    /// `discounted_subtotal * tax rate / 100` when tax is enabled.
    pub tax_amount: Decimal,
    /// `discounted_subtotal + tax_amount`.
    pub total: Decimal,
}

/// Issuer of the invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessDetails {
    /// Required at submission.
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
}

/// Recipient of the invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    /// Required at submission.
    pub first_name: String,
    /// Required at submission.
    pub last_name: String,
    pub email: String,
    pub street_address: String,
    pub city: String,
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
}

impl CustomerDetails {
    /// `"first last"`, trimmed. Used as the customer label for invoice numbers.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}
