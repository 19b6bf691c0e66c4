use super::calculation::calculate_invoice;
use super::rates::RateTable;
use super::types::{Invoice, InvoiceForm};

/// The environment an invoice is generated in.
///
/// A host supplies the form fields, shows alerts and displays finished
/// invoices. The calculator never paints anything itself.
pub trait InvoiceHost {
    /// Read the current form fields.
    fn read_form(&self) -> InvoiceForm;

    /// Show a blocking validation message to the user.
    fn alert(&mut self, message: &str);

    /// Replace the output region with `invoice`.
    fn show_invoice(&mut self, invoice: &Invoice);
}

/// Generate an invoice from the host's form using [`RateTable::STANDARD`].
///
/// Exactly one of [`InvoiceHost::alert`] or [`InvoiceHost::show_invoice`] is
/// called. On a validation failure the output region is left untouched.
pub fn generate_invoice<H: InvoiceHost + ?Sized>(host: &mut H) {
    generate_invoice_with(host, &RateTable::STANDARD);
}

/// Like [`generate_invoice`], with a custom rate table.
pub fn generate_invoice_with<H: InvoiceHost + ?Sized>(host: &mut H, rates: &RateTable) {
    let form = host.read_form();
    match calculate_invoice(&form, rates) {
        Ok(invoice) => host.show_invoice(&invoice),
        Err(e) => host.alert(&e.to_string()),
    }
}
