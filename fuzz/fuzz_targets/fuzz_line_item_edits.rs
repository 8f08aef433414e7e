#![no_main]

use invoice_draft::core::{InvoiceModel, LineItemField};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic for any input — odd values are stored as 0.
        let mut model = InvoiceModel::new();
        for (i, part) in s.split('|').enumerate() {
            let field = match i % 4 {
                0 => LineItemField::Quantity,
                1 => LineItemField::Rate,
                2 => LineItemField::Item,
                _ => LineItemField::Description,
            };
            if i % 4 == 0 && i > 0 {
                model.add_line_item();
            }
            let last = model.line_items().len() - 1;
            model.update_line_item(last, field, part);
        }
        let _ = model.compute_totals();
    }
});
