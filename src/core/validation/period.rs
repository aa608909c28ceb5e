use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

/// Errors that can occur during period validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {grammar} period (expected {format}, e.g. {example})",
    format = .grammar.format(), example = .grammar.example())]
pub struct PeriodError {
    pub value: String,
    pub grammar: PeriodGrammar,
}

/// The four period shapes accepted by the rate endpoints.
///
/// Validation is purely syntactic: `2024-13-99` is a well-formed daily period
/// even though no such date exists. Calendar checks are left to the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodGrammar {
    /// `YYYY-MM-DD`
    Daily,
    /// `YYYY-MM`
    Monthly,
    /// `YYYY-QN` with N in 1..=4
    Quarterly,
    /// `YYYY`
    Annual,
}

impl PeriodGrammar {
    /// All grammars, finest granularity first.
    pub const ALL: [PeriodGrammar; 4] = [
        PeriodGrammar::Daily,
        PeriodGrammar::Monthly,
        PeriodGrammar::Quarterly,
        PeriodGrammar::Annual,
    ];

    /// Check a raw value against this grammar.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// assert!(PeriodGrammar::Quarterly.validate("2024-Q3").is_ok());
    /// assert!(PeriodGrammar::Quarterly.validate("2024-Q5").is_err());
    /// ```
    pub fn validate(self, value: &str) -> Result<(), PeriodError> {
        if self.regex().is_match(value) {
            Ok(())
        } else {
            Err(PeriodError {
                value: value.to_string(),
                grammar: self,
            })
        }
    }

    /// Human-readable format, as shown to clients.
    pub fn format(self) -> &'static str {
        match self {
            Self::Daily => "YYYY-MM-DD",
            Self::Monthly => "YYYY-MM",
            Self::Quarterly => "YYYY-QN",
            Self::Annual => "YYYY",
        }
    }

    /// Regex equivalent of the grammar, published in the JSON schema.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Daily => r"^\d{4}-\d{2}-\d{2}$",
            Self::Monthly => r"^\d{4}-\d{2}$",
            Self::Quarterly => r"^\d{4}-Q[1-4]$",
            Self::Annual => r"^\d{4}$",
        }
    }

    pub fn example(self) -> &'static str {
        match self {
            Self::Daily => "2024-01-15",
            Self::Monthly => "2024-01",
            Self::Quarterly => "2024-Q1",
            Self::Annual => "2024",
        }
    }

    /// Lower-case label used in tool names and messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annual => "annual",
        }
    }

    /// Compiled form of [`pattern`](Self::pattern), built once per grammar.
    fn regex(self) -> &'static Regex {
        static DAILY: LazyLock<Regex> = LazyLock::new(|| compile(PeriodGrammar::Daily));
        static MONTHLY: LazyLock<Regex> = LazyLock::new(|| compile(PeriodGrammar::Monthly));
        static QUARTERLY: LazyLock<Regex> = LazyLock::new(|| compile(PeriodGrammar::Quarterly));
        static ANNUAL: LazyLock<Regex> = LazyLock::new(|| compile(PeriodGrammar::Annual));

        match self {
            Self::Daily => &DAILY,
            Self::Monthly => &MONTHLY,
            Self::Quarterly => &QUARTERLY,
            Self::Annual => &ANNUAL,
        }
    }
}

impl fmt::Display for PeriodGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Unicode mode is off so `\d` means ASCII digits, as it does in JSON Schema.
fn compile(grammar: PeriodGrammar) -> Regex {
    RegexBuilder::new(grammar.pattern())
        .unicode(false)
        .build()
        .expect("period patterns are valid regexes")
}

/// A validated period boundary of a fixed granularity.
///
/// Implemented by the newtypes below so that tool parameter structs can be
/// generic over granularity while sharing one grammar for both boundaries.
pub trait Period:
    JsonSchema + for<'de> Deserialize<'de> + AsRef<str> + Send + Sync + 'static
{
    const GRAMMAR: PeriodGrammar;
}

macro_rules! period_type {
    ($(#[$meta:meta])* $name:ident => $grammar:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = PeriodError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                <Self as Period>::GRAMMAR.validate(&value)?;
                Ok(Self(value))
            }
        }

        impl TryFrom<&str> for $name {
            type Error = PeriodError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::try_from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(period: $name) -> Self {
                period.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Period for $name {
            const GRAMMAR: PeriodGrammar = $grammar;
        }

        impl JsonSchema for $name {
            fn inline_schema() -> bool {
                true
            }

            fn schema_name() -> Cow<'static, str> {
                stringify!($name).into()
            }

            fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
                let grammar = <Self as Period>::GRAMMAR;
                json_schema!({
                    "type": "string",
                    "pattern": grammar.pattern(),
                    "description": format!(
                        "{} period in {} format (e.g. {})",
                        grammar.label(),
                        grammar.format(),
                        grammar.example()
                    ),
                })
            }
        }
    };
}

period_type!(
    /// A `YYYY-MM-DD` period boundary.
    DailyPeriod => PeriodGrammar::Daily
);
period_type!(
    /// A `YYYY-MM` period boundary.
    MonthlyPeriod => PeriodGrammar::Monthly
);
period_type!(
    /// A `YYYY-QN` period boundary.
    QuarterlyPeriod => PeriodGrammar::Quarterly
);
period_type!(
    /// A `YYYY` period boundary.
    AnnualPeriod => PeriodGrammar::Annual
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_accepts_grammar() {
        for value in ["2024-01-01", "1999-12-31", "0000-00-00"] {
            assert!(PeriodGrammar::Daily.validate(value).is_ok(), "{value}");
        }
    }

    #[test]
    fn test_daily_does_not_check_calendar() {
        assert!(PeriodGrammar::Daily.validate("2024-13-99").is_ok());
        assert!(PeriodGrammar::Daily.validate("2023-02-30").is_ok());
    }

    #[test]
    fn test_daily_rejects_other_shapes() {
        for value in [
            "",
            "2024-1-01",
            "2024/01/01",
            "24-01-01",
            "2024-01-011",
            " 2024-01-01",
            "2024-01-01 ",
            "2024-01",
            "abcd-ef-gh",
        ] {
            assert!(PeriodGrammar::Daily.validate(value).is_err(), "{value:?}");
        }
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // Thai digits are numeric but not part of the grammar
        assert!(PeriodGrammar::Annual.validate("๒๕๖๗").is_err());
        assert!(PeriodGrammar::Monthly.validate("２０２４-01").is_err());
    }

    #[test]
    fn test_monthly_grammar() {
        assert!(PeriodGrammar::Monthly.validate("2024-01").is_ok());
        assert!(PeriodGrammar::Monthly.validate("2024-99").is_ok());
        assert!(PeriodGrammar::Monthly.validate("2024-1").is_err());
        assert!(PeriodGrammar::Monthly.validate("2024-01-01").is_err());
        assert!(PeriodGrammar::Monthly.validate("2024").is_err());
    }

    #[test]
    fn test_quarterly_grammar() {
        for quarter in ["2024-Q1", "2024-Q2", "2024-Q3", "2024-Q4"] {
            assert!(PeriodGrammar::Quarterly.validate(quarter).is_ok(), "{quarter}");
        }
        for value in ["2024-Q0", "2024-Q5", "2024-q1", "2024Q1", "2024-Q", "2024-Q12"] {
            assert!(PeriodGrammar::Quarterly.validate(value).is_err(), "{value}");
        }
    }

    #[test]
    fn test_annual_grammar() {
        assert!(PeriodGrammar::Annual.validate("2024").is_ok());
        assert!(PeriodGrammar::Annual.validate("202").is_err());
        assert!(PeriodGrammar::Annual.validate("20245").is_err());
        assert!(PeriodGrammar::Annual.validate("2024-01").is_err());
    }

    #[test]
    fn test_error_message_names_value_and_format() {
        let err = PeriodGrammar::Quarterly.validate("2024-Q5").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'2024-Q5'"));
        assert!(message.contains("quarterly"));
        assert!(message.contains("YYYY-QN"));
    }

    #[test]
    fn test_examples_satisfy_their_grammar() {
        for grammar in PeriodGrammar::ALL {
            assert!(grammar.validate(grammar.example()).is_ok(), "{grammar}");
        }
    }

    #[test]
    fn test_newtype_deserialization() {
        let period: DailyPeriod = serde_json::from_str(r#""2024-01-31""#).unwrap();
        assert_eq!(period.as_str(), "2024-01-31");

        let err = serde_json::from_str::<DailyPeriod>(r#""2024-01""#).unwrap_err();
        assert!(err.to_string().contains("not a valid daily period"));

        assert!(serde_json::from_str::<QuarterlyPeriod>(r#""2024-Q2""#).is_ok());
        assert!(serde_json::from_str::<AnnualPeriod>("2024").is_err());
    }

    #[test]
    fn test_published_pattern_is_enforced() {
        // The schema pattern and the validator must agree on every sample
        let samples = [
            "2024", "2024-01", "2024-01-31", "2024-Q3", "2024-Q0", "2024-1", "24", "",
        ];
        for grammar in PeriodGrammar::ALL {
            let published = Regex::new(grammar.pattern()).unwrap();
            for value in samples {
                assert_eq!(
                    grammar.validate(value).is_ok(),
                    published.is_match(value),
                    "{grammar} {value:?}"
                );
            }
        }
    }

    #[test]
    fn test_newtype_grammar_constants() {
        assert_eq!(DailyPeriod::GRAMMAR, PeriodGrammar::Daily);
        assert_eq!(MonthlyPeriod::GRAMMAR, PeriodGrammar::Monthly);
        assert_eq!(QuarterlyPeriod::GRAMMAR, PeriodGrammar::Quarterly);
        assert_eq!(AnnualPeriod::GRAMMAR, PeriodGrammar::Annual);
    }

    #[test]
    fn test_newtype_schema_has_pattern() {
        let schema = schemars::schema_for!(MonthlyPeriod);
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["type"], "string");
        assert_eq!(value["pattern"], r"^\d{4}-\d{2}$");
    }
}
