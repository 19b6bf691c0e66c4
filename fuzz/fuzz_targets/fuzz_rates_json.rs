#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Any table that loads must produce an invoice.
        if let Ok(rates) = lawncare::json::rates_from_json(s) {
            let form = lawncare::InvoiceForm::new("A", "B", "C", "111-222-3333", "1000");
            let invoice = lawncare::calculate_invoice(&form, &rates).unwrap();
            let _ = lawncare::json::to_json(&invoice);
        }
    }
});
