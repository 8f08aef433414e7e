use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::currencies::Currency;
use super::draft::InvoiceDraft;
use super::model::InvoiceModel;
use super::types::*;

/// Builder for an [`InvoiceDraft`] session.
///
/// ```
/// use invoice_draft::core::*;
/// use rust_decimal_macros::dec;
///
/// let draft = InvoiceDraftBuilder::new()
///     .business(BusinessDetailsBuilder::new("Acme Co").city("Toronto").build())
///     .customer(CustomerDetailsBuilder::new("Jane", "Doe").build())
///     .currency(Currency::from_code("USD").unwrap())
///     .add_line(LineItemBuilder::new("Design", dec!(2), dec!(50)).build())
///     .build();
///
/// assert_eq!(draft.model().line_items().len(), 1);
/// assert_eq!(draft.model().compute_totals().total, dec!(100));
/// ```
pub struct InvoiceDraftBuilder {
    business: BusinessDetails,
    customer: CustomerDetails,
    number: String,
    invoice_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
    notes: String,
    currency: Currency,
    lines: Vec<LineItem>,
    discount: Adjustment,
    tax: Adjustment,
}

impl Default for InvoiceDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceDraftBuilder {
    pub fn new() -> Self {
        Self {
            business: BusinessDetails::default(),
            customer: CustomerDetails::default(),
            number: String::new(),
            invoice_date: None,
            due_date: None,
            notes: String::new(),
            currency: Currency::default(),
            lines: Vec::new(),
            discount: Adjustment::default(),
            tax: Adjustment::default(),
        }
    }

    pub fn business(mut self, business: BusinessDetails) -> Self {
        self.business = business;
        self
    }

    pub fn customer(mut self, customer: CustomerDetails) -> Self {
        self.customer = customer;
        self
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn invoice_date(mut self, date: NaiveDate) -> Self {
        self.invoice_date = Some(date);
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.lines.push(line);
        self
    }

    pub fn discount(mut self, rate: Decimal) -> Self {
        self.discount = Adjustment::new(true, rate);
        self
    }

    pub fn tax(mut self, rate: Decimal) -> Self {
        self.tax = Adjustment::new(true, rate);
        self
    }

    /// Build the draft. With no lines added, the draft starts with one
    /// default row, as a fresh form does.
    pub fn build(self) -> InvoiceDraft {
        let mut model = if self.lines.is_empty() {
            InvoiceModel::new()
        } else {
            InvoiceModel::with_line_items(self.lines)
        };
        model.set_currency(self.currency);
        model.set_discount(self.discount.enabled, self.discount.rate);
        model.set_tax(self.tax.enabled, self.tax.rate);

        let mut draft = InvoiceDraft::from_model(model);
        *draft.business_mut() = self.business;
        *draft.customer_mut() = self.customer;
        draft.set_number(self.number);
        draft.set_invoice_date(self.invoice_date);
        draft.set_due_date(self.due_date);
        draft.set_notes(self.notes);
        draft
    }
}

/// Builder for [`BusinessDetails`].
pub struct BusinessDetailsBuilder {
    details: BusinessDetails,
}

impl BusinessDetailsBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            details: BusinessDetails {
                name: name.into(),
                ..Default::default()
            },
        }
    }

    pub fn street_address(mut self, street: impl Into<String>) -> Self {
        self.details.street_address = street.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.details.city = city.into();
        self
    }

    pub fn state_province(mut self, state: impl Into<String>) -> Self {
        self.details.state_province = state.into();
        self
    }

    pub fn postal_code(mut self, code: impl Into<String>) -> Self {
        self.details.postal_code = code.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.details.country = country.into();
        self
    }

    pub fn build(self) -> BusinessDetails {
        self.details
    }
}

/// Builder for [`CustomerDetails`].
pub struct CustomerDetailsBuilder {
    details: CustomerDetails,
}

impl CustomerDetailsBuilder {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            details: CustomerDetails {
                first_name: first_name.into(),
                last_name: last_name.into(),
                ..Default::default()
            },
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.details.email = email.into();
        self
    }

    pub fn street_address(mut self, street: impl Into<String>) -> Self {
        self.details.street_address = street.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.details.city = city.into();
        self
    }

    pub fn state_province(mut self, state: impl Into<String>) -> Self {
        self.details.state_province = state.into();
        self
    }

    pub fn postal_code(mut self, code: impl Into<String>) -> Self {
        self.details.postal_code = code.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.details.country = country.into();
        self
    }

    pub fn build(self) -> CustomerDetails {
        self.details
    }
}

/// Builder for [`LineItem`].
pub struct LineItemBuilder {
    line: LineItem,
}

impl LineItemBuilder {
    pub fn new(item: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            line: LineItem {
                item: item.into(),
                quantity,
                rate,
                ..LineItem::default()
            },
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.line.description = desc.into();
        self
    }

    pub fn build(self) -> LineItem {
        self.line
    }
}
