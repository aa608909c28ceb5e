// Validation module for tool parameters
//
// This module provides the purely syntactic checks applied to period
// boundaries and currency codes before a tool handler is allowed to run.
// Nothing here normalizes input: values are accepted or rejected as given.

pub mod currency;
pub mod period;

pub use currency::{Currency, CurrencyError, validate_currency};
pub use period::{
    AnnualPeriod, DailyPeriod, MonthlyPeriod, Period, PeriodError, PeriodGrammar,
    QuarterlyPeriod,
};
