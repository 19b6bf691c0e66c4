//! Core invoice types, validation, calculation and formatting.
//!
//! This module holds everything needed to turn the five raw form fields into
//! a computed [`Invoice`], independent of any display surface.

mod calculation;
mod error;
mod host;
pub mod money;
mod rates;
mod types;
mod validation;

pub use calculation::*;
pub use error::*;
pub use host::*;
pub use money::{MoneyFormat, format_money};
pub use rates::*;
pub use types::*;
pub use validation::*;
