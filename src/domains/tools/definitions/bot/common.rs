//! Common utilities shared across the BOT rate tools.
//!
//! This module provides argument parsing at the schema boundary and the
//! success/error envelope helpers.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Deserialize raw tool arguments into typed parameters.
///
/// Period and currency validation happens inside deserialization, so a
/// malformed invocation is rejected here with `invalid_params` and never
/// reaches a handler.
pub fn parse_arguments<T: DeserializeOwned>(arguments: JsonObject) -> Result<T, McpError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Create a success result carrying the upstream JSON, pretty-printed.
pub fn success_result(value: &Value) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_result(&format!("failed to format response: {e}")),
    }
}

/// Create an error result with the `Error: ` prefix clients rely on.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(format!("Error: {message}"))])
}

#[cfg(test)]
pub(crate) fn result_text(result: &CallToolResult) -> &str {
    use rmcp::model::RawContent;

    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        other => panic!("Expected text content, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[allow(dead_code)]
        value: u32,
    }

    #[test]
    fn test_success_result_round_trips() {
        let payload = json!({
            "result": {
                "timestamp": "2024-02-01 10:00:00",
                "data": {"data_detail": [{"period": "2024-01-31", "rate": "35.4567"}]}
            }
        });

        let result = success_result(&payload);
        assert_eq!(result.is_error, Some(false));

        let text = result_text(&result);
        assert!(text.contains('\n'), "expected pretty-printed JSON");
        let parsed: Value = serde_json::from_str(text).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn test_error_result_prefix() {
        let result = error_result("API request timed out");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_text(&result), "Error: API request timed out");
    }

    #[test]
    fn test_parse_arguments_invalid_params() {
        let mut args = JsonObject::new();
        args.insert("value".to_string(), json!("not a number"));

        let err = parse_arguments::<Probe>(args).unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }
}
