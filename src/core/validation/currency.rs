use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Errors that can occur during currency validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a supported currency code")]
pub struct CurrencyError(pub String);

/// Currency codes accepted by the exchange rate tools.
///
/// Codes match case-sensitively; `usd` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Jpy,
    Gbp,
    Cny,
    Hkd,
    Sgd,
    Myr,
    Idr,
    Php,
    Krw,
    Twd,
    Aud,
    Nzd,
    Cad,
    Chf,
    Inr,
    Sek,
    Dkk,
    Nok,
}

impl Currency {
    /// Every supported currency, in declared order.
    pub const ALL: [Currency; 20] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Jpy,
        Currency::Gbp,
        Currency::Cny,
        Currency::Hkd,
        Currency::Sgd,
        Currency::Myr,
        Currency::Idr,
        Currency::Php,
        Currency::Krw,
        Currency::Twd,
        Currency::Aud,
        Currency::Nzd,
        Currency::Cad,
        Currency::Chf,
        Currency::Inr,
        Currency::Sek,
        Currency::Dkk,
        Currency::Nok,
    ];

    /// ISO 4217 code as sent to the upstream API.
    pub fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Jpy => "JPY",
            Self::Gbp => "GBP",
            Self::Cny => "CNY",
            Self::Hkd => "HKD",
            Self::Sgd => "SGD",
            Self::Myr => "MYR",
            Self::Idr => "IDR",
            Self::Php => "PHP",
            Self::Krw => "KRW",
            Self::Twd => "TWD",
            Self::Aud => "AUD",
            Self::Nzd => "NZD",
            Self::Cad => "CAD",
            Self::Chf => "CHF",
            Self::Inr => "INR",
            Self::Sek => "SEK",
            Self::Dkk => "DKK",
            Self::Nok => "NOK",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code() == s)
            .ok_or_else(|| CurrencyError(s.to_string()))
    }
}

/// Validate an optional currency parameter.
///
/// Absence is valid and means "all currencies".
pub fn validate_currency(value: Option<&str>) -> Result<Option<Currency>, CurrencyError> {
    value.map(str::parse).transpose()
}

/// Display name for a currency code, if one is known.
pub fn description_for(code: &str) -> Option<&'static str> {
    let description = match code {
        "USD" => "US Dollar",
        "EUR" => "Euro",
        "JPY" => "Japanese Yen",
        "GBP" => "British Pound Sterling",
        "CNY" => "Chinese Yuan Renminbi",
        "HKD" => "Hong Kong Dollar",
        "SGD" => "Singapore Dollar",
        "MYR" => "Malaysian Ringgit",
        "IDR" => "Indonesian Rupiah",
        "PHP" => "Philippine Peso",
        "KRW" => "South Korean Won",
        "TWD" => "New Taiwan Dollar",
        "AUD" => "Australian Dollar",
        "NZD" => "New Zealand Dollar",
        "CAD" => "Canadian Dollar",
        "CHF" => "Swiss Franc",
        "INR" => "Indian Rupee",
        "SEK" => "Swedish Krona",
        "DKK" => "Danish Krone",
        "NOK" => "Norwegian Krone",
        _ => return None,
    };
    Some(description)
}
