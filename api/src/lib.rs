//! This crate contains the non-UI logic of the rates screen: fetching, filtering,
//! converting, and the state machine tying them together.

pub mod amount_converter;
pub mod conversion_screen;
pub mod fiat_currency;
pub mod fixed_amount;
pub mod prefs;
pub mod rate_filter;
pub mod rate_list;
pub mod rate_providers;

#[cfg(test)]
#[path = "tests/coinbase_tests.rs"]
mod coinbase_tests;
