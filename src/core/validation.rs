use tracing::trace;

use super::error::InvoiceError;
use super::types::{Customer, InvoiceForm, LotArea};

/// Validate the raw form, in order, stopping at the first failure.
///
/// 1. name, street and city must be non-blank
/// 2. phone must be `DDD-DDD-DDDD`
/// 3. square feet must be one or more ASCII digits
///
/// Surrounding whitespace is trimmed from every field first.
pub fn validate_form(form: &InvoiceForm) -> Result<(Customer, LotArea), InvoiceError> {
    let name = trim_field(&form.name);
    let street = trim_field(&form.street);
    let city = trim_field(&form.city);
    let phone = trim_field(&form.phone);
    let sq_feet = trim_field(&form.sq_feet);

    if name.is_empty() || street.is_empty() || city.is_empty() {
        trace!("customer details incomplete");
        return Err(InvoiceError::MissingCustomerDetails);
    }

    if !is_valid_phone(phone) {
        trace!(phone, "phone rejected");
        return Err(InvoiceError::InvalidPhone);
    }

    let area = parse_lot_area(sq_feet)?;

    Ok((
        Customer {
            name: name.to_string(),
            street: street.to_string(),
            city: city.to_string(),
            phone: phone.to_string(),
        },
        area,
    ))
}

/// Trim the whitespace a web form's `trim()` strips: Unicode whitespace
/// plus the byte-order mark, but not NEL (U+0085).
fn trim_field(text: &str) -> &str {
    text.trim_matches(|c: char| c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}'))
}

/// Check a phone number is exactly three digits, hyphen, three digits,
/// hyphen, four digits.
pub fn is_valid_phone(phone: &str) -> bool {
    let b = phone.as_bytes();
    b.len() == 12
        && b.iter().enumerate().all(|(i, c)| match i {
            3 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        })
}

/// Parse a digits-only lot size. Signs, decimal points and inner whitespace
/// are rejected; whole square feet only.
pub fn parse_lot_area(text: &str) -> Result<LotArea, InvoiceError> {
    if text.is_empty() || !text.bytes().all(|c| c.is_ascii_digit()) {
        trace!(sq_feet = text, "square feet rejected");
        return Err(InvoiceError::InvalidSquareFeet);
    }
    // Only overflow can fail here.
    text.parse::<u64>()
        .map(LotArea)
        .map_err(|_| InvoiceError::InvalidSquareFeet)
}
