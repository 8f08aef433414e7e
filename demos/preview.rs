use invoice_draft::core::*;
use invoice_draft::preview;
use rust_decimal_macros::dec;

fn main() {
    let draft = InvoiceDraftBuilder::new()
        .business(BusinessDetailsBuilder::new("Acme Co").build())
        .customer(CustomerDetailsBuilder::new("Jane", "Doe").build())
        .number("ACJD-042")
        .currency(Currency::from_code("GBP").unwrap())
        .add_line(
            LineItemBuilder::new("Consulting", dec!(8), dec!(120))
                .description("Architecture review")
                .build(),
        )
        .tax(dec!(20))
        .build();

    let snapshot = match draft.submit() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Submission failed: {e}");
            return;
        }
    };

    println!("{}\n", preview::render_text(&snapshot));
    match preview::render_json(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("{e}"),
    }
}
