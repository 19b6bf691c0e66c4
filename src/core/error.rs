use thiserror::Error;

/// Errors that can occur while producing an invoice.
///
/// The first three variants are user-input errors. Their `Display` text is
/// the exact message shown to the customer-facing host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// Name, street or city is blank after trimming.
    #[error("Please complete all customer details.")]
    MissingCustomerDetails,

    /// Phone number is not in `DDD-DDD-DDDD` form.
    #[error("Phone number must be in the format 999-999-9999.")]
    InvalidPhone,

    /// Lot size is not a whole number of square feet.
    #[error("Total square feet must be a number.")]
    InvalidSquareFeet,

    /// A custom rate table failed validation.
    #[error("invalid rate table: {0}")]
    Rates(String),

    /// Markup generation failed.
    #[error("render error: {0}")]
    Render(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(String),
}

impl InvoiceError {
    /// True for the errors caused by what the user typed into the form.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingCustomerDetails | Self::InvalidPhone | Self::InvalidSquareFeet
        )
    }
}

/// A single rate-table problem with field name and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateError {
    /// Name of the offending rate (e.g. "hst_rate").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for RateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl RateError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
