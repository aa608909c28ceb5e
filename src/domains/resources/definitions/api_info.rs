//! API reference resource definition.
//!
//! Plain-text summary of the tools, their upstream endpoints and the
//! accepted parameters. Generated from the tool table so it never drifts.

use std::fmt::Write;

use super::ResourceDefinition;
use crate::core::config::UpstreamConfig;
use crate::core::validation::Currency;
use crate::domains::resources::ResourceError;
use crate::domains::tools::definitions::{RateFamily, RateTool};

/// Reference text for the Bank of Thailand rate APIs (dynamic).
pub struct ApiInfoResource;

impl ResourceDefinition for ApiInfoResource {
    const URI: &'static str = "bot://api-info";
    const NAME: &'static str = "BOT API Information";
    const DESCRIPTION: &'static str =
        "Base URLs, tools, period formats and parameters of the Bank of Thailand rate APIs";
    const MIME_TYPE: &'static str = "text/plain";

    fn render(upstream: &UpstreamConfig) -> Result<String, ResourceError> {
        write_info(upstream).map_err(|e| ResourceError::internal(e.to_string()))
    }
}

fn write_info(upstream: &UpstreamConfig) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Bank of Thailand Rate APIs")?;
    writeln!(out, "==========================")?;
    writeln!(out)?;
    writeln!(out, "Base URLs:")?;
    writeln!(out, "  Reference rate (interbank): {}", upstream.reference_rate_url)?;
    writeln!(out, "  Exchange rate:              {}", upstream.exchange_rate_url)?;
    writeln!(out)?;
    writeln!(out, "Authentication: API key read from the BOT_API_KEY environment variable,")?;
    writeln!(out, "sent in the Authorization header.")?;
    writeln!(out)?;

    for (family, heading) in [
        (RateFamily::Interbank, "Interbank reference rates (THB/USD)"),
        (RateFamily::Exchange, "Average exchange rates (THB/foreign currency)"),
    ] {
        writeln!(out, "{heading}:")?;
        for tool in RateTool::ALL.iter().filter(|tool| tool.family == family) {
            writeln!(
                out,
                "  {:<30} {:<26} {} (e.g. {})",
                tool.name(),
                tool.endpoint(),
                tool.granularity.format(),
                tool.granularity.example()
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Parameters:")?;
    writeln!(out, "  start_period  First period of the range, in the tool's format (required)")?;
    writeln!(out, "  end_period    Last period of the range, in the tool's format (required)")?;
    writeln!(out, "  currency      Currency code, exchange rate tools only (optional)")?;
    writeln!(out)?;

    let codes: Vec<_> = Currency::ALL.iter().map(|c| c.code()).collect();
    writeln!(out, "Supported currencies: {}", codes.join(", "))?;

    Ok(out)
}
