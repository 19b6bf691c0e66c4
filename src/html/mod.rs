//! HTML rendering of a computed invoice.
//!
//! Produces the fragment a web host drops into its output region: a
//! heading, the customer block and the line-item table.
//!
//! # Example
//!
//! ```
//! use lawncare::core::*;
//!
//! let form = InvoiceForm::new("Jane Doe", "12 Elm St", "Springfield", "519-555-0199", "1000");
//! let html = lawncare::html::to_html(&form.calculate().unwrap()).unwrap();
//! assert!(html.contains("<td class=\"amt\">$11.20</td>"));
//! ```

pub(crate) mod markup;

use crate::core::{Invoice, format_money};
use markup::{MarkupResult, MarkupWriter};

/// CSS class on the line-item table.
pub const TABLE_CLASS: &str = "resultTable";
/// CSS class on amount cells.
pub const AMOUNT_CLASS: &str = "amt";

/// Render `invoice` as an HTML fragment. Customer text is escaped.
pub fn to_html(invoice: &Invoice) -> MarkupResult {
    let mut w = MarkupWriter::new();
    let c = &invoice.customer;

    w.text_element("h2", "Service Invoice")?;
    if let Some(date) = invoice.issue_date {
        w.text_element("p", &format!("Date: {}", date.format("%Y-%m-%d")))?;
    }

    w.start_element("p")?;
    w.text_element("strong", &c.name)?;
    w.empty_element("br")?;
    w.text(&c.street)?;
    w.empty_element("br")?;
    w.text(&format!("{}\u{a0}\u{a0}{}", c.city, c.phone))?;
    w.end_element("p")?;

    w.start_element_with_attrs("table", &[("class", TABLE_CLASS)])?;
    w.start_element("tr")?;
    w.text_element("th", "Description")?;
    w.text_element("th", "Amount")?;
    w.end_element("tr")?;

    for line in invoice.lines() {
        let amount = format_money(line.amount);
        w.start_element("tr")?;
        if line.emphasized {
            w.start_element("td")?;
            w.text_element("strong", &line.label)?;
            w.end_element("td")?;
            w.start_element_with_attrs("td", &[("class", AMOUNT_CLASS)])?;
            w.text_element("strong", &amount)?;
            w.end_element("td")?;
        } else {
            w.text_element("td", &line.label)?;
            w.text_element_with_attrs("td", &amount, &[("class", AMOUNT_CLASS)])?;
        }
        w.end_element("tr")?;
    }
    w.end_element("table")?;

    w.into_string()
}
