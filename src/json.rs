//! JSON export of computed invoices and loading of rate tables.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{Charges, Customer, Invoice, InvoiceError, LotArea, RateTable, format_money};

fn json_err(e: serde_json::Error) -> InvoiceError {
    InvoiceError::Json(e.to_string())
}

#[derive(Serialize)]
struct InvoiceDocument<'a> {
    customer: &'a Customer,
    area: LotArea,
    #[serde(skip_serializing_if = "Option::is_none")]
    issue_date: Option<NaiveDate>,
    rates: &'a RateTable,
    charges: &'a Charges,
    lines: Vec<DocumentLine>,
}

#[derive(Serialize)]
struct DocumentLine {
    label: String,
    amount: Decimal,
    formatted: String,
    emphasized: bool,
}

/// Serialize an invoice as pretty JSON.
///
/// Amounts are unrounded decimal strings; each display row also carries
/// its formatted currency text.
pub fn to_json(invoice: &Invoice) -> Result<String, InvoiceError> {
    let doc = InvoiceDocument {
        customer: &invoice.customer,
        area: invoice.area,
        issue_date: invoice.issue_date,
        rates: &invoice.rates,
        charges: &invoice.charges,
        lines: invoice
            .lines()
            .into_iter()
            .map(|l| DocumentLine {
                formatted: format_money(l.amount),
                label: l.label,
                amount: l.amount,
                emphasized: l.emphasized,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&doc).map_err(json_err)
}

/// Parse a rate table, e.g.
/// `{"border_percent":"0.04","border_rate":"0.28",...}`.
///
/// All seven rates are required and are validated as by
/// [`RateTable::builder`].
pub fn rates_from_json(json: &str) -> Result<RateTable, InvoiceError> {
    serde_json::from_str(json).map_err(json_err)
}

/// Serialize a rate table.
pub fn rates_to_json(rates: &RateTable) -> Result<String, InvoiceError> {
    serde_json::to_string_pretty(rates).map_err(json_err)
}
