use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rates::RateTable;

/// The five raw form fields, exactly as the host read them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceForm {
    /// Customer name.
    pub name: String,
    /// Street address.
    pub street: String,
    /// City.
    pub city: String,
    /// Phone number, expected as `999-999-9999`.
    pub phone: String,
    /// Total square feet of the lot, digits only.
    pub sq_feet: String,
}

impl InvoiceForm {
    pub fn new(
        name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        phone: impl Into<String>,
        sq_feet: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            street: street.into(),
            city: city.into(),
            phone: phone.into(),
            sq_feet: sq_feet.into(),
        }
    }
}

/// Validated customer details. Fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub street: String,
    pub city: String,
    /// Always in `DDD-DDD-DDDD` form.
    pub phone: String,
}

/// Serviced lot size in whole square feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LotArea(pub u64);

impl LotArea {
    pub fn square_feet(self) -> u64 {
        self.0
    }

    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl std::fmt::Display for LotArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} sq ft", self.0)
    }
}

/// Derived service charges and taxes, unrounded.
///
/// Rounding happens only when an amount is formatted for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charges {
    /// Square feet of border trimmed.
    pub border_area: Decimal,
    pub border_cost: Decimal,
    /// Square feet mowed.
    pub mow_area: Decimal,
    pub mow_cost: Decimal,
    pub fert_cost: Decimal,
    /// Pre-tax total of the three services.
    pub subtotal: Decimal,
    pub hst: Decimal,
    pub env_tax: Decimal,
    /// subtotal + hst + env_tax.
    pub total: Decimal,
}

/// A computed lawn-care invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: Customer,
    pub area: LotArea,
    /// The rate table the charges were computed with.
    pub rates: RateTable,
    pub charges: Charges,
    /// Issue date, if the host supplies one.
    pub issue_date: Option<NaiveDate>,
}

impl Invoice {
    /// Stamp the invoice with an issue date.
    pub fn with_issue_date(mut self, date: NaiveDate) -> Self {
        self.issue_date = Some(date);
        self
    }

    /// The display rows, in fixed order.
    pub fn lines(&self) -> [InvoiceLine; 7] {
        let c = &self.charges;
        [
            InvoiceLine::new("Border Trimming", c.border_cost),
            InvoiceLine::new("Lawn Mowing", c.mow_cost),
            InvoiceLine::new("Fertilizer Treatment", c.fert_cost),
            InvoiceLine::emphasized("Total Charges", c.subtotal),
            InvoiceLine::new(format!("HST ({})", percent_label(self.rates.hst_rate())), c.hst),
            InvoiceLine::new(
                format!("Environmental Tax ({})", percent_label(self.rates.env_rate())),
                c.env_tax,
            ),
            InvoiceLine::emphasized("Invoice Total", c.total),
        ]
    }
}

/// One labeled amount on the rendered invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub label: String,
    pub amount: Decimal,
    /// Totals are shown in bold.
    pub emphasized: bool,
}

impl InvoiceLine {
    fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
            emphasized: false,
        }
    }

    fn emphasized(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
            emphasized: true,
        }
    }
}

/// `0.15` -> `15%`, `0.014` -> `1.4%`.
fn percent_label(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}
