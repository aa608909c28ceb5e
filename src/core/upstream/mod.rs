//! Upstream gateway for the Bank of Thailand API.
//!
//! Every tool call ends in exactly one authenticated GET against one of two
//! base endpoints:
//! - **Reference rate**: THB/USD interbank rates
//! - **Exchange rate**: average THB rates against foreign currencies
//!
//! The gateway owns the HTTP client and applies the per-call deadline. It
//! never retries, caches, or reshapes the upstream JSON.

mod client;
mod error;

pub use client::{RateApi, RateGateway};
pub use error::{UpstreamError, UpstreamResult};
