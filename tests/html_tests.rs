#![cfg(feature = "html")]

use chrono::NaiveDate;
use lawncare::core::*;
use lawncare::html::to_html;

fn render(form: InvoiceForm) -> String {
    to_html(&form.calculate().unwrap()).unwrap()
}

fn scenario_a() -> InvoiceForm {
    InvoiceForm::new("Jane Doe", "12 Elm St", "Springfield", "519-555-0199", "1000")
}

#[test]
fn heading_and_customer_block() {
    let html = render(scenario_a());
    assert!(html.starts_with("<h2>Service Invoice</h2>"));
    assert!(html.contains("<strong>Jane Doe</strong>"));
    assert!(html.contains("12 Elm St"));
    assert!(html.contains("Springfield\u{a0}\u{a0}519-555-0199"));
    assert_eq!(html.matches("<br/>").count(), 2);
}

#[test]
fn table_rows_in_order() {
    let html = render(scenario_a());
    assert!(html.contains("<table class=\"resultTable\">"));
    assert!(html.contains("<th>Description</th>"));
    assert!(html.contains("<th>Amount</th>"));

    let cells = [
        "<td>Border Trimming</td>",
        "<td class=\"amt\">$11.20</td>",
        "<td>Lawn Mowing</td>",
        "<td class=\"amt\">$38.40</td>",
        "<td>Fertilizer Treatment</td>",
        "<td class=\"amt\">$30.00</td>",
        "<strong>Total Charges</strong>",
        "<strong>$79.60</strong>",
        "<td>HST (15%)</td>",
        "<td class=\"amt\">$11.94</td>",
        "<td>Environmental Tax (1.4%)</td>",
        "<td class=\"amt\">$1.11</td>",
        "<strong>Invoice Total</strong>",
        "<strong>$92.65</strong>",
    ];
    let mut from = 0;
    for cell in cells {
        let at = html[from..]
            .find(cell)
            .unwrap_or_else(|| panic!("{cell} missing or out of order"));
        from += at + cell.len();
    }
}

#[test]
fn emphasized_amounts_in_amount_cells() {
    let html = render(scenario_a());
    assert_eq!(html.matches("<td class=\"amt\">").count(), 7);
    assert_eq!(html.matches("<tr>").count(), 8);
}

#[test]
fn customer_text_escaped() {
    let html = render(InvoiceForm::new(
        "<script>alert(1)</script>",
        "1 & 2 Elm",
        "Springfield",
        "519-555-0199",
        "10",
    ));
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("1 &amp; 2 Elm"));
}

#[test]
fn zero_area_amounts() {
    let html = render(InvoiceForm {
        sq_feet: "0".into(),
        ..scenario_a()
    });
    assert_eq!(html.matches("$0.00").count(), 7);
}

#[test]
fn issue_date_paragraph() {
    let inv = scenario_a()
        .calculate()
        .unwrap()
        .with_issue_date(NaiveDate::from_ymd_opt(2025, 11, 19).unwrap());
    let html = to_html(&inv).unwrap();
    assert!(html.contains("<p>Date: 2025-11-19</p>"));
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(render(scenario_a()), render(scenario_a()));
}
