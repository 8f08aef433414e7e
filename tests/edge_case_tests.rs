//! Edge cases: out-of-range rates, empty lists, odd input.

use invoice_draft::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn one_row(quantity: Decimal, rate: Decimal) -> InvoiceModel {
    InvoiceModel::with_line_items(vec![LineItemBuilder::new("x", quantity, rate).build()])
}

// ---------------------------------------------------------------------------
// Rates are not clamped
// ---------------------------------------------------------------------------

#[test]
fn discount_above_100_goes_negative() {
    let mut model = one_row(dec!(1), dec!(100));
    model.set_discount(true, dec!(150));
    let totals = model.compute_totals();
    assert_eq!(totals.discount_amount, dec!(150));
    assert_eq!(totals.discounted_subtotal, dec!(-50));
    assert_eq!(totals.total, dec!(-50));
}

#[test]
fn negative_discount_is_a_surcharge() {
    let mut model = one_row(dec!(1), dec!(100));
    model.set_discount(true, dec!(-10));
    model.set_tax(true, dec!(10));
    let totals = model.compute_totals();
    assert_eq!(totals.discount_amount, dec!(-10));
    assert_eq!(totals.discounted_subtotal, dec!(110));
    assert_eq!(totals.tax_amount, dec!(11));
    assert_eq!(totals.total, dec!(121));
}

#[test]
fn negative_tax_rate() {
    let mut model = one_row(dec!(4), dec!(25));
    model.set_tax(true, dec!(-5));
    assert_eq!(model.compute_totals().total, dec!(95));
}

#[test]
fn full_discount_zeroes_tax() {
    let mut model = one_row(dec!(3), dec!(33.33));
    model.set_discount(true, dec!(100));
    model.set_tax(true, dec!(13));
    let totals = model.compute_totals();
    assert_eq!(totals.discounted_subtotal, dec!(0));
    assert_eq!(totals.tax_amount, dec!(0));
    assert_eq!(totals.total, dec!(0));
}

#[test]
fn fractional_rates() {
    let mut model = one_row(dec!(1), dec!(200));
    model.set_tax(true, dec!(14.975));
    assert_eq!(model.compute_totals().tax_amount, dec!(29.95));
}

// ---------------------------------------------------------------------------
// Line items
// ---------------------------------------------------------------------------

#[test]
fn empty_list_yields_zero_subtotal() {
    let mut model = InvoiceModel::with_line_items(Vec::new());
    model.set_discount(true, dec!(10));
    model.set_tax(true, dec!(13));
    let totals = model.compute_totals();
    assert_eq!(totals.subtotal, dec!(0));
    assert_eq!(totals.discount_amount, dec!(0));
    assert_eq!(totals.tax_amount, dec!(0));
    assert_eq!(totals.total, dec!(0));
}

#[test]
fn quantity_outside_form_bounds_is_kept() {
    let mut model = InvoiceModel::new();
    model.update_line_item(0, LineItemField::Quantity, "5000");
    model.update_line_item(0, LineItemField::Rate, "2");
    assert_eq!(model.compute_totals().subtotal, dec!(10000));

    model.update_line_item(0, LineItemField::Quantity, "-1");
    assert_eq!(model.compute_totals().subtotal, dec!(-2));
}

#[test]
fn numeric_parsing_edge_cases() {
    let mut model = InvoiceModel::new();
    let cases = [
        ("", dec!(0)),
        ("   ", dec!(0)),
        ("1,000", dec!(0)),
        ("1_000", dec!(0)),
        ("1__0", dec!(0)),
        ("-", dec!(0)),
        ("$5", dec!(0)),
        ("NaN", dec!(0)),
        (" 12.50 ", dec!(12.50)),
        ("0.0001", dec!(0.0001)),
        ("2.5e1", dec!(25)),
    ];
    for (input, expected) in cases {
        model.update_line_item(0, LineItemField::Rate, input);
        assert_eq!(model.line_items()[0].rate, expected, "input {input:?}");
    }
}

#[test]
fn numbers_beyond_decimal_range_saturate() {
    let mut model = InvoiceModel::new();
    model.update_line_item(0, LineItemField::Quantity, "1e30");
    assert_eq!(model.line_items()[0].quantity, Decimal::MAX);
    model.update_line_item(0, LineItemField::Rate, "100000000000000000000000000000");
    assert_eq!(model.line_items()[0].rate, Decimal::MAX);
    model.update_line_item(0, LineItemField::Rate, "-1e30");
    assert_eq!(model.line_items()[0].rate, Decimal::MIN);
    assert_eq!(model.compute_totals().total, Decimal::MIN);
}

#[test]
fn unicode_text_is_stored_verbatim() {
    let mut model = InvoiceModel::new();
    let text = "Ünïcödé\n  multi-line ✓";
    model.update_line_item(0, LineItemField::Description, text);
    assert_eq!(model.line_items()[0].description, text);
}

#[test]
fn edits_to_missing_rows_change_nothing() {
    let mut model = InvoiceModel::new();
    let before = model.clone();
    assert!(!model.update_line_item(1, LineItemField::Item, "ghost"));
    assert!(model.remove_line_item(5).is_none());
    assert!(model.save_line_item(2).is_none());
    assert_eq!(model, before);
}

#[test]
fn many_rows() {
    let mut model = InvoiceModel::with_line_items(Vec::new());
    for i in 1..=1000 {
        let index = model.add_line_item();
        model.update_line_item(index, LineItemField::Rate, &i.to_string());
    }
    // 1 + 2 + ... + 1000
    assert_eq!(model.compute_totals().subtotal, dec!(500500));
}

// ---------------------------------------------------------------------------
// Saved items
// ---------------------------------------------------------------------------

#[test]
fn saved_item_survives_row_removal() {
    let mut model = InvoiceModel::new();
    model.update_line_item(0, LineItemField::Item, "Retainer");
    model.update_line_item(0, LineItemField::Quantity, "3");
    model.update_line_item(0, LineItemField::Rate, "500");
    let saved = model.save_line_item(0).cloned().unwrap();
    model.remove_line_item(0);

    let index = model.add_saved_item(&saved);
    assert_eq!(index, 0);
    assert_eq!(model.line_items()[0].quantity, dec!(1));
    assert_eq!(model.compute_totals().subtotal, dec!(500));
}

// ---------------------------------------------------------------------------
// Invoice numbers
// ---------------------------------------------------------------------------

#[test]
fn invoice_number_with_symbol_only_names() {
    let number = generate_invoice_number("123 !!!", "");
    assert!(number.starts_with("XXXX-"), "{number}");
}

#[test]
fn invoice_number_single_letter_names() {
    let number = generate_invoice_number("a", "b");
    assert!(number.starts_with("AABB-"), "{number}");
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn format_large_and_tiny_amounts() {
    let cad = Currency::default();
    assert_eq!(format_money(dec!(1234567.891), &cad), "C$1234567.89");
    assert_eq!(format_money(dec!(0.005), &cad), "C$0.01");
    assert_eq!(format_money(dec!(0.004), &cad), "C$0.00");
}
