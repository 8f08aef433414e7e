#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (business, customer) = s.split_once('\n').unwrap_or((s, ""));
        let number = invoice_draft::core::generate_invoice_number(business, customer);
        assert_eq!(number.len(), 8);
    }
});
