//! Bank of Thailand rate tools module.
//!
//! - `rate_tool`: the eight interbank/exchange tools and their dispatch table
//! - `params`: typed parameters, generic over the period grammar
//! - `common`: argument parsing and result envelopes
//!
//! Each tool has handlers for both HTTP and STDIO transports.

pub mod common;
pub mod params;
pub mod rate_tool;

pub use params::{ExchangeRateParams, InterbankRateParams, RateQuery};
pub use rate_tool::{RateFamily, RateTool};
