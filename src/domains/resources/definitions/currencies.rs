//! Supported currencies resource definition.

use serde::Serialize;

use super::ResourceDefinition;
use crate::core::config::UpstreamConfig;
use crate::core::validation::{Currency, currency::description_for};
use crate::domains::resources::ResourceError;

/// The currency codes accepted by the exchange rate tools (static).
pub struct CurrenciesResource;

#[derive(Debug, Serialize)]
struct CurrencyEntry {
    code: &'static str,
    description: &'static str,
}

impl ResourceDefinition for CurrenciesResource {
    const URI: &'static str = "bot://currencies";
    const NAME: &'static str = "Supported Currencies";
    const DESCRIPTION: &'static str =
        "Currency codes accepted by the exchange rate tools, with their names";
    const MIME_TYPE: &'static str = "application/json";

    fn render(_upstream: &UpstreamConfig) -> Result<String, ResourceError> {
        let entries: Vec<CurrencyEntry> = Currency::ALL
            .iter()
            .map(|currency| {
                let code = currency.code();
                CurrencyEntry {
                    code,
                    description: description_for(code).unwrap_or(code),
                }
            })
            .collect();

        serde_json::to_string_pretty(&entries).map_err(|e| ResourceError::internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn rendered() -> Vec<Value> {
        let text = CurrenciesResource::render(&UpstreamConfig::default()).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_currencies_metadata() {
        assert_eq!(CurrenciesResource::URI, "bot://currencies");
        assert_eq!(CurrenciesResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_currencies_in_declared_order() {
        let entries = rendered();
        assert_eq!(entries.len(), 20);

        let codes: Vec<_> = entries.iter().map(|e| e["code"].as_str().unwrap()).collect();
        assert_eq!(&codes[..4], &["USD", "EUR", "JPY", "GBP"]);
        assert_eq!(codes[19], "NOK");
    }

    #[test]
    fn test_every_currency_described() {
        for entry in rendered() {
            let description = entry["description"].as_str().unwrap();
            assert!(!description.is_empty());
            assert_ne!(description, entry["code"].as_str().unwrap());
        }
    }
}
