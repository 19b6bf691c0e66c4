use tracing::debug;

use super::error::InvoiceError;
use super::rates::RateTable;
use super::types::{Charges, Invoice, InvoiceForm, LotArea};
use super::validation::validate_form;

/// Validate a form and compute its invoice against `rates`.
///
/// ```
/// use lawncare::core::*;
/// use rust_decimal_macros::dec;
///
/// let form = InvoiceForm::new("Jane Doe", "12 Elm St", "Springfield", "519-555-0199", "1000");
/// let invoice = calculate_invoice(&form, &RateTable::STANDARD).unwrap();
/// assert_eq!(invoice.charges.subtotal, dec!(79.60));
/// assert_eq!(format_money(invoice.charges.total), "$92.65");
/// ```
pub fn calculate_invoice(form: &InvoiceForm, rates: &RateTable) -> Result<Invoice, InvoiceError> {
    let (customer, area) = validate_form(form)?;
    let charges = calculate_charges(area, rates);
    debug!(
        area = area.square_feet(),
        subtotal = %charges.subtotal,
        total = %charges.total,
        "invoice calculated"
    );
    Ok(Invoice {
        customer,
        area,
        rates: *rates,
        charges,
        issue_date: None,
    })
}

/// Compute all charges for a lot. Nothing is rounded.
///
/// Both taxes apply to the pre-tax subtotal; neither is applied to the other.
pub fn calculate_charges(area: LotArea, rates: &RateTable) -> Charges {
    let sq_ft = area.as_decimal();

    let border_area = sq_ft * rates.border_percent();
    let border_cost = border_area * rates.border_rate();

    let mow_area = sq_ft * rates.mow_percent();
    let mow_cost = mow_area * rates.mow_rate();

    let fert_cost = sq_ft * rates.fert_rate();

    let subtotal = border_cost + mow_cost + fert_cost;
    let hst = subtotal * rates.hst_rate();
    let env_tax = subtotal * rates.env_rate();

    Charges {
        border_area,
        border_cost,
        mow_area,
        mow_cost,
        fert_cost,
        subtotal,
        hst,
        env_tax,
        total: subtotal + hst + env_tax,
    }
}

impl InvoiceForm {
    /// Validate and compute with [`RateTable::STANDARD`].
    pub fn calculate(&self) -> Result<Invoice, InvoiceError> {
        calculate_invoice(self, &RateTable::STANDARD)
    }
}
