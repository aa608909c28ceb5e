//! Bank of Thailand rate tools.
//!
//! Eight tools, one per pairing of rate family and period granularity:
//! - **Interbank**: THB/USD reference rates (`*_REF_RATE` endpoints)
//! - **Exchange**: average THB rates against foreign currencies (`*_AVG_EXG_RATE`)
//!
//! Each tool validates its periods at the schema boundary, makes exactly one
//! gateway call, and passes the upstream JSON through unchanged.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool, ToolAnnotations},
};
use tracing::{info, instrument};

use super::common::{error_result, parse_arguments, success_result};
use super::params::{ExchangeRateParams, InterbankRateParams, RateQuery};
use crate::core::upstream::{RateApi, RateGateway};
use crate::core::validation::{
    AnnualPeriod, DailyPeriod, MonthlyPeriod, Period, PeriodGrammar, QuarterlyPeriod,
};
use crate::domains::tools::ToolError;

/// Which upstream rate series a tool reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateFamily {
    /// THB/USD interbank reference rate.
    Interbank,
    /// Average THB exchange rate against foreign currencies.
    Exchange,
}

impl RateFamily {
    /// The upstream API serving this family.
    pub fn api(self) -> RateApi {
        match self {
            Self::Interbank => RateApi::ReferenceRate,
            Self::Exchange => RateApi::ExchangeRate,
        }
    }

    fn schema_for<P: Period>(self) -> Arc<JsonObject> {
        match self {
            Self::Interbank => cached_schema_for_type::<InterbankRateParams<P>>(),
            Self::Exchange => cached_schema_for_type::<ExchangeRateParams<P>>(),
        }
    }

    fn parse_for<P: Period>(self, arguments: JsonObject) -> Result<RateQuery, McpError> {
        match self {
            Self::Interbank => parse_arguments::<InterbankRateParams<P>>(arguments).map(Into::into),
            Self::Exchange => parse_arguments::<ExchangeRateParams<P>>(arguments).map(Into::into),
        }
    }
}

/// A single rate tool: a family read at one granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RateTool {
    pub family: RateFamily,
    pub granularity: PeriodGrammar,
}

impl RateTool {
    /// The full tool table, registered once at startup.
    pub const ALL: [RateTool; 8] = [
        RateTool::new(RateFamily::Interbank, PeriodGrammar::Daily),
        RateTool::new(RateFamily::Interbank, PeriodGrammar::Monthly),
        RateTool::new(RateFamily::Interbank, PeriodGrammar::Quarterly),
        RateTool::new(RateFamily::Interbank, PeriodGrammar::Annual),
        RateTool::new(RateFamily::Exchange, PeriodGrammar::Daily),
        RateTool::new(RateFamily::Exchange, PeriodGrammar::Monthly),
        RateTool::new(RateFamily::Exchange, PeriodGrammar::Quarterly),
        RateTool::new(RateFamily::Exchange, PeriodGrammar::Annual),
    ];

    pub const fn new(family: RateFamily, granularity: PeriodGrammar) -> Self {
        Self {
            family,
            granularity,
        }
    }

    /// Look up a tool by its registered name.
    pub fn find(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Tool name as registered in MCP. Stable across releases.
    pub fn name(self) -> &'static str {
        use PeriodGrammar::*;
        use RateFamily::*;

        match (self.family, self.granularity) {
            (Interbank, Daily) => "get_daily_interbank_rate",
            (Interbank, Monthly) => "get_monthly_interbank_rate",
            (Interbank, Quarterly) => "get_quarterly_interbank_rate",
            (Interbank, Annual) => "get_annual_interbank_rate",
            (Exchange, Daily) => "get_daily_exchange_rate",
            (Exchange, Monthly) => "get_monthly_exchange_rate",
            (Exchange, Quarterly) => "get_quarterly_exchange_rate",
            (Exchange, Annual) => "get_annual_exchange_rate",
        }
    }

    /// Upstream endpoint path, appended to the family's base URL.
    pub fn endpoint(self) -> &'static str {
        use PeriodGrammar::*;
        use RateFamily::*;

        match (self.family, self.granularity) {
            (Interbank, Daily) => "/DAILY_REF_RATE/",
            (Interbank, Monthly) => "/MONTHLY_REF_RATE/",
            (Interbank, Quarterly) => "/QUARTERLY_REF_RATE/",
            (Interbank, Annual) => "/ANNUAL_REF_RATE/",
            (Exchange, Daily) => "/DAILY_AVG_EXG_RATE/",
            (Exchange, Monthly) => "/MONTHLY_AVG_EXG_RATE/",
            (Exchange, Quarterly) => "/QUARTERLY_AVG_EXG_RATE/",
            (Exchange, Annual) => "/ANNUAL_AVG_EXG_RATE/",
        }
    }

    /// Tool description shown to clients.
    pub fn description(self) -> String {
        let grammar = self.granularity;
        match self.family {
            RateFamily::Interbank => format!(
                "Get {} Thai Baht / US Dollar interbank reference rates from the Bank of Thailand. \
                 start_period and end_period use {} format (e.g. {}). \
                 Returns the raw API response.",
                grammar.label(),
                grammar.format(),
                grammar.example()
            ),
            RateFamily::Exchange => format!(
                "Get {} average exchange rates of the Thai Baht against foreign currencies \
                 from the Bank of Thailand. start_period and end_period use {} format (e.g. {}). \
                 Pass a currency code (e.g. USD, EUR, JPY) to narrow the result, or omit it \
                 for all currencies. Returns the raw API response.",
                grammar.label(),
                grammar.format(),
                grammar.example()
            ),
        }
    }

    /// JSON schema of the tool's parameters.
    pub fn input_schema(self) -> Arc<JsonObject> {
        match self.granularity {
            PeriodGrammar::Daily => self.family.schema_for::<DailyPeriod>(),
            PeriodGrammar::Monthly => self.family.schema_for::<MonthlyPeriod>(),
            PeriodGrammar::Quarterly => self.family.schema_for::<QuarterlyPeriod>(),
            PeriodGrammar::Annual => self.family.schema_for::<AnnualPeriod>(),
        }
    }

    /// Validate raw arguments against the tool's schema.
    pub fn parse_arguments(self, arguments: JsonObject) -> Result<RateQuery, McpError> {
        match self.granularity {
            PeriodGrammar::Daily => self.family.parse_for::<DailyPeriod>(arguments),
            PeriodGrammar::Monthly => self.family.parse_for::<MonthlyPeriod>(arguments),
            PeriodGrammar::Quarterly => self.family.parse_for::<QuarterlyPeriod>(arguments),
            PeriodGrammar::Annual => self.family.parse_for::<AnnualPeriod>(arguments),
        }
    }

    /// Execute a validated invocation.
    ///
    /// Every gateway failure becomes an error envelope; nothing escapes.
    #[instrument(skip_all, fields(tool = self.name()))]
    pub async fn execute(self, query: &RateQuery, gateway: &RateGateway) -> CallToolResult {
        info!(
            "Fetching {} to {}{}",
            query.start_period,
            query.end_period,
            query
                .currency
                .map(|c| format!(" ({c})"))
                .unwrap_or_default()
        );

        match gateway
            .fetch(self.family.api(), self.endpoint(), &query.query_params())
            .await
        {
            Ok(value) => success_result(&value),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        self,
        arguments: serde_json::Value,
        gateway: &RateGateway,
    ) -> Result<serde_json::Value, ToolError> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => JsonObject::new(),
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "arguments must be an object, got {other}"
                )));
            }
        };

        let query = self
            .parse_arguments(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.message.to_string()))?;

        let result = self.execute(&query, gateway).await;

        serde_json::to_value(&result).map_err(|e| ToolError::internal(e.to_string()))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(self) -> Tool {
        Tool {
            name: self.name().into(),
            description: Some(self.description().into()),
            input_schema: self.input_schema(),
            annotations: Some(ToolAnnotations {
                read_only_hint: Some(true),
                destructive_hint: Some(false),
                idempotent_hint: Some(true),
                open_world_hint: Some(true),
                ..Default::default()
            }),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(self, gateway: Arc<RateGateway>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(self.to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let gateway = gateway.clone();
            async move {
                let query = self.parse_arguments(args)?;
                Ok(self.execute(&query, &gateway).await)
            }
            .boxed()
        })
    }
}
