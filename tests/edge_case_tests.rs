use lawncare::core::*;
use rust_decimal_macros::dec;

fn form(name: &str, street: &str, city: &str, phone: &str, sq_feet: &str) -> InvoiceForm {
    InvoiceForm::new(name, street, city, phone, sq_feet)
}

fn valid(sq_feet: &str) -> InvoiceForm {
    form("Jane Doe", "12 Elm St", "Springfield", "519-555-0199", sq_feet)
}

// --- Whitespace ---

#[test]
fn whitespace_only_city_rejected() {
    let f = form("Jane", "12 Elm St", " \t ", "519-555-0199", "100");
    assert_eq!(f.calculate().unwrap_err(), InvoiceError::MissingCustomerDetails);
}

#[test]
fn surrounding_whitespace_trimmed_everywhere() {
    let f = form(" Jane ", " 12 Elm St ", " Springfield ", " 519-555-0199 ", " 1000 ");
    let inv = f.calculate().unwrap();
    assert_eq!(inv.customer.name, "Jane");
    assert_eq!(inv.customer.phone, "519-555-0199");
    assert_eq!(inv.area, LotArea(1000));
}

#[test]
fn byte_order_mark_only_name_rejected() {
    let f = form("\u{feff}", "12 Elm St", "Springfield", "519-555-0199", "1000");
    assert_eq!(f.calculate().unwrap_err(), InvoiceError::MissingCustomerDetails);
}

#[test]
fn byte_order_mark_trimmed_from_name() {
    let f = form("\u{feff}Jane Doe\u{feff}", "12 Elm St", "Springfield", "519-555-0199", "1000");
    assert_eq!(f.calculate().unwrap().customer.name, "Jane Doe");
}

#[test]
fn trailing_next_line_on_phone_rejected() {
    let f = form("Jane", "12 Elm St", "Springfield", "519-555-0199\u{85}", "1000");
    assert_eq!(f.calculate().unwrap_err(), InvoiceError::InvalidPhone);
}

#[test]
fn inner_whitespace_in_area_rejected() {
    assert_eq!(valid("1 000").calculate().unwrap_err(), InvoiceError::InvalidSquareFeet);
}

// --- Validation order ---

#[test]
fn first_failure_wins() {
    let f = form("", "", "", "nope", "nope");
    assert_eq!(f.calculate().unwrap_err(), InvoiceError::MissingCustomerDetails);

    let f = form("Jane", "12 Elm St", "Springfield", "nope", "nope");
    assert_eq!(f.calculate().unwrap_err(), InvoiceError::InvalidPhone);
}

// --- Square feet ---

#[test]
fn rejected_area_texts() {
    for text in ["", "-100", "+100", "1e3", "12a", "0x10", "1,000", "½", "١٢٣"] {
        assert_eq!(
            valid(text).calculate().unwrap_err(),
            InvoiceError::InvalidSquareFeet,
            "{text:?}"
        );
    }
}

#[test]
fn leading_zeros_accepted() {
    assert_eq!(valid("0001000").calculate().unwrap().area, LotArea(1000));
}

#[test]
fn huge_digit_string_rejected() {
    let digits = "9".repeat(40);
    assert_eq!(valid(&digits).calculate().unwrap_err(), InvoiceError::InvalidSquareFeet);
}

// --- Phone ---

#[test]
fn rejected_phones() {
    for phone in ["519.555.0199", "519-555-019a", "+1-519-555-0199", "519-5550-199", "519_555_0199"] {
        let f = form("Jane", "12 Elm St", "Springfield", phone, "10");
        assert_eq!(f.calculate().unwrap_err(), InvoiceError::InvalidPhone, "{phone:?}");
    }
}

// --- Unicode names ---

#[test]
fn unicode_customer_details() {
    let f = form("Zoë Brontë", "1 Rue Sainte-Catherine", "Montréal", "514-555-0101", "500");
    let inv = f.calculate().unwrap();
    assert_eq!(inv.customer.city, "Montréal");
    let text = lawncare::render::to_text(&inv);
    assert!(text.contains("Zoë Brontë"));
}

// --- Amounts ---

#[test]
fn single_square_foot() {
    let c = valid("1").calculate().unwrap().charges;
    // 0.04 * 0.28 + 0.96 * 0.04 + 0.03
    assert_eq!(c.subtotal, dec!(0.0796));
    assert_eq!(format_money(c.subtotal), "$0.08");
    assert_eq!(format_money(c.env_tax), "$0.00");
}

#[test]
fn large_lot_uses_thousands_separators() {
    let inv = valid("1000000").calculate().unwrap();
    assert_eq!(format_money(inv.charges.subtotal), "$79,600.00");
    assert_eq!(format_money(inv.charges.total), "$92,654.40");
}

#[test]
fn display_rounding_does_not_leak_into_totals() {
    // 3 sq ft: env tax 0.0033432, hst 0.03582
    let c = valid("3").calculate().unwrap().charges;
    assert_eq!(c.total, c.subtotal + c.hst + c.env_tax);
    assert_eq!(c.total, dec!(0.2779632));
    assert_eq!(format_money(c.total), "$0.28");
}
