//! # lawncare
//!
//! Invoice calculator for a lawn-care service: validates customer details
//! and lot size, prices border trimming, mowing and fertilizer from a fixed
//! rate table, adds HST and environmental tax, and renders the result.
//!
//! All monetary values use [`rust_decimal::Decimal`] and stay unrounded until
//! they are formatted for display.
//!
//! ## Quick Start
//!
//! ```rust
//! use lawncare::core::*;
//!
//! let form = InvoiceForm::new("Jane Doe", "12 Elm St", "Springfield", "519-555-0199", "1000");
//! let invoice = form.calculate().unwrap();
//!
//! assert_eq!(format_money(invoice.charges.env_tax), "$1.11");
//! assert_eq!(format_money(invoice.charges.total), "$92.65");
//!
//! let bad = InvoiceForm::new("Jane Doe", "12 Elm St", "Springfield", "5195550199", "1000");
//! assert_eq!(
//!     bad.calculate().unwrap_err().to_string(),
//!     "Phone number must be in the format 999-999-9999."
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Form validation, rates, calculation, money formatting, text rendering |
//! | `html` | HTML fragment rendering |
//! | `json` | JSON invoice export, rate-table files |
//! | `cli` | The `lawncare` command-line front end |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod render;

#[cfg(feature = "html")]
pub mod html;

#[cfg(feature = "json")]
pub mod json;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
