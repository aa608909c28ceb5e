//! Parameter types for the rate tools.
//!
//! Both families are generic over the period newtype, so one struct yields
//! the schema for every granularity and both boundaries always share a grammar.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer};

use crate::core::validation::{Currency, Period, validate_currency};

/// Parameters for the interbank (THB/USD reference rate) tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InterbankRateParams<P> {
    /// First period of the range (inclusive).
    pub start_period: P,

    /// Last period of the range (inclusive).
    pub end_period: P,
}

/// Parameters for the exchange rate (THB/foreign currency) tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExchangeRateParams<P> {
    /// First period of the range (inclusive).
    pub start_period: P,

    /// Last period of the range (inclusive).
    pub end_period: P,

    /// Currency code. Omit to get every available currency.
    #[serde(default, deserialize_with = "deserialize_currency")]
    #[schemars(with = "Option<Currency>")]
    pub currency: Option<Currency>,
}

fn deserialize_currency<'de, D>(deserializer: D) -> Result<Option<Currency>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    validate_currency(value.as_deref()).map_err(serde::de::Error::custom)
}

/// Validated invocation, flattened to what the upstream call needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateQuery {
    pub start_period: String,
    pub end_period: String,
    pub currency: Option<Currency>,
}

impl RateQuery {
    /// Query parameters in upstream naming. Absent values are dropped by the gateway.
    pub fn query_params(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("start_period", Some(self.start_period.as_str())),
            ("end_period", Some(self.end_period.as_str())),
            ("currency", self.currency.map(Currency::code)),
        ]
    }
}

impl<P: Period> From<InterbankRateParams<P>> for RateQuery {
    fn from(params: InterbankRateParams<P>) -> Self {
        Self {
            start_period: params.start_period.as_ref().to_string(),
            end_period: params.end_period.as_ref().to_string(),
            currency: None,
        }
    }
}

impl<P: Period> From<ExchangeRateParams<P>> for RateQuery {
    fn from(params: ExchangeRateParams<P>) -> Self {
        Self {
            start_period: params.start_period.as_ref().to_string(),
            end_period: params.end_period.as_ref().to_string(),
            currency: params.currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::{AnnualPeriod, DailyPeriod, QuarterlyPeriod};

    #[test]
    fn test_exchange_params_currency_optional() {
        let json = r#"{"start_period": "2024-Q1", "end_period": "2024-Q2"}"#;
        let params: ExchangeRateParams<QuarterlyPeriod> = serde_json::from_str(json).unwrap();
        assert_eq!(params.currency, None);

        let query = RateQuery::from(params);
        assert_eq!(query.query_params()[2], ("currency", None));
    }

    #[test]
    fn test_exchange_params_with_currency() {
        let json = r#"{"start_period": "2024-01-01", "end_period": "2024-01-31", "currency": "JPY"}"#;
        let params: ExchangeRateParams<DailyPeriod> = serde_json::from_str(json).unwrap();
        let query = RateQuery::from(params);
        assert_eq!(query.currency, Some(Currency::Jpy));
        assert_eq!(query.query_params()[2], ("currency", Some("JPY")));
    }

    #[test]
    fn test_exchange_params_null_currency_is_absent() {
        let json = r#"{"start_period": "2024", "end_period": "2024", "currency": null}"#;
        let params: ExchangeRateParams<AnnualPeriod> = serde_json::from_str(json).unwrap();
        assert_eq!(params.currency, None);
    }

    #[test]
    fn test_exchange_params_unknown_currency_rejected() {
        // Codes are case-sensitive
        let json = r#"{"start_period": "2024", "end_period": "2024", "currency": "usd"}"#;
        let err = serde_json::from_str::<ExchangeRateParams<AnnualPeriod>>(json).unwrap_err();
        assert!(err.to_string().contains("'usd' is not a supported currency code"));
    }

    #[test]
    fn test_exchange_params_schema_lists_currencies() {
        let schema = schemars::schema_for!(ExchangeRateParams<DailyPeriod>);
        let text = serde_json::to_string(&schema).unwrap();
        assert!(text.contains("\"USD\""));
        assert!(text.contains("\"JPY\""));
    }

    #[test]
    fn test_boundaries_share_grammar() {
        // A monthly end boundary is not a daily period
        let json = r#"{"start_period": "2024-01-01", "end_period": "2024-01"}"#;
        assert!(serde_json::from_str::<InterbankRateParams<DailyPeriod>>(json).is_err());
    }

    #[test]
    fn test_missing_boundary_rejected() {
        let json = r#"{"start_period": "2024-01-01"}"#;
        let err = serde_json::from_str::<InterbankRateParams<DailyPeriod>>(json).unwrap_err();
        assert!(err.to_string().contains("end_period"));
    }
}
