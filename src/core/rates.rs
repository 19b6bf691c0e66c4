use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::{InvoiceError, RateError};

/// Upper bound for any per-square-foot price.
pub const MAX_UNIT_RATE: Decimal = dec!(1000);

/// Fixed rates that drive every invoice amount.
///
/// A table is immutable once built. Use [`RateTable::STANDARD`] for the
/// published price list, or [`RateTable::builder`] to derive a validated
/// variant from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RateFields", into = "RateFields")]
pub struct RateTable {
    border_percent: Decimal,
    border_rate: Decimal,
    mow_percent: Decimal,
    mow_rate: Decimal,
    fert_rate: Decimal,
    hst_rate: Decimal,
    env_rate: Decimal,
}

impl RateTable {
    /// The published price list.
    pub const STANDARD: RateTable = RateTable {
        border_percent: dec!(0.04),
        border_rate: dec!(0.28),
        mow_percent: dec!(0.96),
        mow_rate: dec!(0.04),
        fert_rate: dec!(0.03),
        hst_rate: dec!(0.15),
        env_rate: dec!(0.014),
    };

    /// Start a builder seeded with [`RateTable::STANDARD`].
    pub fn builder() -> RateTableBuilder {
        RateTableBuilder {
            fields: RateFields::from(Self::STANDARD),
        }
    }

    /// Fraction of the lot that is border-trimmed.
    pub fn border_percent(&self) -> Decimal {
        self.border_percent
    }

    /// Price per square foot of border trimming.
    pub fn border_rate(&self) -> Decimal {
        self.border_rate
    }

    /// Fraction of the lot that is mowed.
    pub fn mow_percent(&self) -> Decimal {
        self.mow_percent
    }

    /// Price per square foot of mowing.
    pub fn mow_rate(&self) -> Decimal {
        self.mow_rate
    }

    /// Price per square foot of fertilizer, applied to the whole lot.
    pub fn fert_rate(&self) -> Decimal {
        self.fert_rate
    }

    /// Harmonized sales tax rate on the pre-tax subtotal.
    pub fn hst_rate(&self) -> Decimal {
        self.hst_rate
    }

    /// Environmental tax rate on the pre-tax subtotal.
    pub fn env_rate(&self) -> Decimal {
        self.env_rate
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Builder for custom rate tables.
///
/// ```
/// use lawncare::core::*;
/// use rust_decimal_macros::dec;
///
/// let ontario = RateTable::builder().hst_rate(dec!(0.13)).build().unwrap();
/// assert_eq!(ontario.hst_rate(), dec!(0.13));
/// assert_eq!(ontario.mow_rate(), RateTable::STANDARD.mow_rate());
/// ```
#[derive(Debug, Clone)]
pub struct RateTableBuilder {
    fields: RateFields,
}

impl RateTableBuilder {
    pub fn border_percent(mut self, value: Decimal) -> Self {
        self.fields.border_percent = value;
        self
    }

    pub fn border_rate(mut self, value: Decimal) -> Self {
        self.fields.border_rate = value;
        self
    }

    pub fn mow_percent(mut self, value: Decimal) -> Self {
        self.fields.mow_percent = value;
        self
    }

    pub fn mow_rate(mut self, value: Decimal) -> Self {
        self.fields.mow_rate = value;
        self
    }

    pub fn fert_rate(mut self, value: Decimal) -> Self {
        self.fields.fert_rate = value;
        self
    }

    pub fn hst_rate(mut self, value: Decimal) -> Self {
        self.fields.hst_rate = value;
        self
    }

    pub fn env_rate(mut self, value: Decimal) -> Self {
        self.fields.env_rate = value;
        self
    }

    /// Validate and freeze the table.
    /// Reports every problem found, not just the first.
    pub fn build(self) -> Result<RateTable, InvoiceError> {
        RateTable::try_from(self.fields)
    }
}

/// Plain field record used for (de)serialization and building.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RateFields {
    border_percent: Decimal,
    border_rate: Decimal,
    mow_percent: Decimal,
    mow_rate: Decimal,
    fert_rate: Decimal,
    hst_rate: Decimal,
    env_rate: Decimal,
}

impl From<RateTable> for RateFields {
    fn from(t: RateTable) -> Self {
        Self {
            border_percent: t.border_percent,
            border_rate: t.border_rate,
            mow_percent: t.mow_percent,
            mow_rate: t.mow_rate,
            fert_rate: t.fert_rate,
            hst_rate: t.hst_rate,
            env_rate: t.env_rate,
        }
    }
}

impl TryFrom<RateFields> for RateTable {
    type Error = InvoiceError;

    fn try_from(f: RateFields) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let amounts = [
            ("border_percent", f.border_percent),
            ("border_rate", f.border_rate),
            ("mow_percent", f.mow_percent),
            ("mow_rate", f.mow_rate),
            ("fert_rate", f.fert_rate),
            ("hst_rate", f.hst_rate),
            ("env_rate", f.env_rate),
        ];
        for (field, value) in amounts {
            if value < Decimal::ZERO {
                errors.push(RateError::new(field, format!("must not be negative (got {value})")));
            }
        }

        // Area fractions are a share of the lot; taxes are at most 100%.
        let fractions = [
            ("border_percent", f.border_percent),
            ("mow_percent", f.mow_percent),
            ("hst_rate", f.hst_rate),
            ("env_rate", f.env_rate),
        ];
        for (field, value) in fractions {
            if value > Decimal::ONE {
                errors.push(RateError::new(field, format!("must not exceed 1 (got {value})")));
            }
        }

        // Bounded so a u64 lot can never overflow Decimal arithmetic.
        let unit_rates = [
            ("border_rate", f.border_rate),
            ("mow_rate", f.mow_rate),
            ("fert_rate", f.fert_rate),
        ];
        for (field, value) in unit_rates {
            if value > MAX_UNIT_RATE {
                errors.push(RateError::new(
                    field,
                    format!("must not exceed {MAX_UNIT_RATE} per square foot (got {value})"),
                ));
            }
        }

        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(InvoiceError::Rates(msg));
        }

        Ok(RateTable {
            border_percent: f.border_percent,
            border_rate: f.border_rate,
            mow_percent: f.mow_percent,
            mow_rate: f.mow_rate,
            fert_rate: f.fert_rate,
            hst_rate: f.hst_rate,
            env_rate: f.env_rate,
        })
    }
}
