//! Currency display formatting.
//!
//! Amounts are carried unrounded through every calculation and rounded to
//! two places only here, half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Symbols and separators for rendering money.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyFormat {
    pub symbol: &'static str,
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl MoneyFormat {
    /// Canadian dollars, en-CA: `$1,234.56`.
    pub const CAD: MoneyFormat = MoneyFormat {
        symbol: "$",
        thousands_separator: ',',
        decimal_separator: '.',
    };

    /// Format `amount` with exactly two fractional digits.
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded < Decimal::ZERO;

        // `{:.2}` pads scale 0/1 values out to two digits.
        let digits = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
        if negative {
            out.push('-');
        }
        out.push_str(self.symbol);
        out.push_str(&group_thousands(int_part, self.thousands_separator));
        out.push(self.decimal_separator);
        out.push_str(frac_part);
        out
    }
}

/// Format an amount in Canadian dollars.
pub fn format_money(amount: Decimal) -> String {
    MoneyFormat::CAD.format(amount)
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
