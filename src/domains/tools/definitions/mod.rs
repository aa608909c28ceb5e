//! Tool definitions module.
//!
//! This module exports all available tool definitions.

pub mod bot;

pub use bot::{ExchangeRateParams, InterbankRateParams, RateFamily, RateQuery, RateTool};
