//! Property-based tests for the totals arithmetic and invoice numbers.
//!
//! Run with: `cargo test --test proptest_tests`

use invoice_draft::core::*;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Generate a rate per unit (0.00 to 99999.99).
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generate a quantity within the form's bounds.
fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (1i64..=999i64).prop_map(Decimal::from)
}

/// Generate a percentage, including out-of-range values (-50.00 to 150.00).
fn arb_percent() -> impl Strategy<Value = Decimal> {
    (-5_000i64..=15_000i64).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

fn arb_lines() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(
        (arb_quantity(), arb_rate())
            .prop_map(|(quantity, rate)| LineItemBuilder::new("item", quantity, rate).build()),
        0..20,
    )
}

fn arb_model() -> impl Strategy<Value = InvoiceModel> {
    (arb_lines(), any::<bool>(), arb_percent(), any::<bool>(), arb_percent()).prop_map(
        |(lines, discount_on, discount, tax_on, tax)| {
            let mut model = InvoiceModel::with_line_items(lines);
            model.set_discount(discount_on, discount);
            model.set_tax(tax_on, tax);
            model
        },
    )
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn subtotal_is_sum_of_amounts(lines in arb_lines()) {
        let expected: Decimal = lines.iter().map(|l| l.quantity * l.rate).sum();
        let model = InvoiceModel::with_line_items(lines);
        prop_assert_eq!(model.compute_totals().subtotal, expected);
    }

    #[test]
    fn disabled_discount_is_zero(lines in arb_lines(), rate in arb_percent()) {
        let mut model = InvoiceModel::with_line_items(lines);
        model.set_discount(false, rate);
        prop_assert_eq!(model.compute_totals().discount_amount, Decimal::ZERO);
    }

    #[test]
    fn tax_applies_to_discounted_base(model in arb_model()) {
        let totals = model.compute_totals();
        let expected_tax = if model.tax().enabled {
            (totals.subtotal - totals.discount_amount) * (model.tax().rate / Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        };
        prop_assert_eq!(totals.tax_amount, expected_tax);
        prop_assert_eq!(totals.discounted_subtotal, totals.subtotal - totals.discount_amount);
    }

    #[test]
    fn total_identity(model in arb_model()) {
        let totals = model.compute_totals();
        prop_assert_eq!(
            totals.total,
            totals.subtotal - totals.discount_amount + totals.tax_amount
        );
    }

    #[test]
    fn compute_totals_is_pure(model in arb_model()) {
        prop_assert_eq!(model.compute_totals(), model.compute_totals());
    }

    #[test]
    fn non_numeric_input_stores_zero(prior in "[0-9]{1,4}", garbage in "[a-zA-Z ]{1,12}") {
        let mut model = InvoiceModel::new();
        model.update_line_item(0, LineItemField::Quantity, &prior);
        model.update_line_item(0, LineItemField::Quantity, &garbage);
        prop_assert_eq!(model.line_items()[0].quantity, Decimal::ZERO);
    }

    #[test]
    fn invoice_number_pattern(
        business in "\\PC{0,30}",
        customer in "\\PC{0,30}",
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let number = generate_invoice_number_with(&business, &customer, &mut rng);
        let bytes = number.as_bytes();
        prop_assert_eq!(bytes.len(), 8);
        prop_assert!(bytes[..4].iter().all(u8::is_ascii_uppercase));
        prop_assert_eq!(bytes[4], b'-');
        prop_assert!(bytes[5..].iter().all(u8::is_ascii_digit));
    }

    #[test]
    fn due_date_offset_is_exact(days in -3650i64..=3650i64) {
        let base = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let due = quick_due_date_on(Some(base), days, base).unwrap();
        prop_assert_eq!((due - base).num_days(), days);
    }
}
