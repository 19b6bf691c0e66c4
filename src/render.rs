//! Plain-text invoice rendering.

use std::fmt::{self, Write};

use crate::core::{Invoice, format_money};

/// Minimum column widths; wider labels or amounts grow their column.
const LABEL_WIDTH: usize = 26;
const AMOUNT_WIDTH: usize = 10;

/// Render an invoice as fixed-width text, amounts right-aligned.
///
/// Emphasized rows (the two totals) are set off by a rule line.
pub fn to_text(invoice: &Invoice) -> String {
    let mut out = String::new();
    write_text(&mut out, invoice).expect("writing to a String cannot fail");
    out
}

fn write_text(out: &mut String, invoice: &Invoice) -> fmt::Result {
    let rows: Vec<(String, String, bool)> = invoice
        .lines()
        .into_iter()
        .map(|l| {
            let amount = format_money(l.amount);
            (l.label, amount, l.emphasized)
        })
        .collect();

    // Keep at least two spaces between the widest label and its amount.
    let label_width = rows
        .iter()
        .map(|(label, _, _)| label.chars().count() + 2)
        .fold(LABEL_WIDTH, usize::max);
    let amount_width = rows
        .iter()
        .map(|(_, amount, _)| amount.len())
        .fold(AMOUNT_WIDTH, usize::max);
    let rule = "-".repeat(label_width + amount_width);
    let c = &invoice.customer;

    writeln!(out, "Service Invoice")?;
    if let Some(date) = invoice.issue_date {
        writeln!(out, "Date: {}", date.format("%Y-%m-%d"))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", c.name)?;
    writeln!(out, "{}", c.street)?;
    writeln!(out, "{}  {}", c.city, c.phone)?;
    writeln!(out)?;
    writeln!(out, "{:<label_width$}{:>amount_width$}", "Description", "Amount")?;
    writeln!(out, "{rule}")?;

    for (label, amount, emphasized) in &rows {
        if *emphasized {
            writeln!(out, "{rule}")?;
        }
        writeln!(out, "{label:<label_width$}{amount:>amount_width$}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InvoiceForm;
    use chrono::NaiveDate;

    fn invoice() -> Invoice {
        InvoiceForm::new("Jane Doe", "12 Elm St", "Springfield", "519-555-0199", "1000")
            .calculate()
            .unwrap()
    }

    #[test]
    fn rows_in_order() {
        let text = to_text(&invoice());
        let order = [
            "Border Trimming",
            "Lawn Mowing",
            "Fertilizer Treatment",
            "Total Charges",
            "HST (15%)",
            "Environmental Tax (1.4%)",
            "Invoice Total",
        ];
        let positions: Vec<usize> = order.iter().map(|l| text.find(l).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn amounts_right_aligned() {
        let text = to_text(&invoice());
        let line = text.lines().find(|l| l.starts_with("Environmental Tax")).unwrap();
        assert_eq!(line.len(), LABEL_WIDTH + AMOUNT_WIDTH);
        assert!(line.ends_with(" $1.11"));
    }

    #[test]
    fn date_line_only_when_dated() {
        assert!(!to_text(&invoice()).contains("Date:"));
        let dated = invoice().with_issue_date(NaiveDate::from_ymd_opt(2025, 11, 19).unwrap());
        assert!(to_text(&dated).contains("Date: 2025-11-19"));
    }
}
