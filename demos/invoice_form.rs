use chrono::NaiveDate;
use invoice_draft::core::*;
use rust_decimal_macros::dec;

fn main() {
    // A session as a form view would drive it: details first, then row edits.
    let mut draft = InvoiceDraftBuilder::new()
        .business(
            BusinessDetailsBuilder::new("Acme Co")
                .street_address("100 King St W")
                .city("Toronto")
                .state_province("ON")
                .postal_code("M5X 1A9")
                .country("Canada")
                .build(),
        )
        .customer(
            CustomerDetailsBuilder::new("Jane", "Doe")
                .email("jane@example.com")
                .build(),
        )
        .invoice_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .build();

    let model = draft.model_mut();
    for (field, value) in [("item", "Design"), ("quantity", "2"), ("rate", "50")] {
        model.update_line_item(0, LineItemField::from_name(field).unwrap(), value);
    }
    let row = model.add_line_item();
    model.update_line_item(row, LineItemField::Item, "Hosting");
    model.update_line_item(row, LineItemField::Rate, "25");
    model.set_discount(true, dec!(10));
    model.set_tax(true, dec!(13));
    model.save_line_item(row);

    draft.generate_number_random();
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    draft
        .apply_due_preset(DueDatePreset::Within30Days, today)
        .expect("due date in range");

    let currency = draft.model().currency();
    let totals = draft.model().compute_totals();
    println!("Invoice {}", draft.number());
    println!("  Subtotal:   {}", format_money(totals.subtotal, &currency));
    println!("  Discount:   {}", format_money(totals.discount_amount, &currency));
    println!("  Tax:        {}", format_money(totals.tax_amount, &currency));
    println!("  Total:      {}", format_money(totals.total, &currency));
    if let Some(due) = draft.due_date() {
        println!("  Due:        {}", due.format(DATE_FORMAT));
    }
    println!("  Saved items: {}", draft.model().saved_items().len());

    match draft.submit() {
        Ok(snapshot) => println!("Submitted {} line items", snapshot.lines.len()),
        Err(e) => eprintln!("Submission failed: {e}"),
    }

    // Missing names are reported all at once.
    for error in InvoiceDraft::new().validate() {
        println!("  - {error}");
    }
}
