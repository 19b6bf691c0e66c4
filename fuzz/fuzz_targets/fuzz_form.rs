#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Five fields separated by newlines; validate → render must not panic.
        let mut fields = s.splitn(5, '\n');
        let mut next = || fields.next().unwrap_or_default().to_string();
        let form = lawncare::InvoiceForm::new(next(), next(), next(), next(), next());
        if let Ok(invoice) = form.calculate() {
            let _ = lawncare::render::to_text(&invoice);
            let _ = lawncare::html::to_html(&invoice);
        }
    }
});
