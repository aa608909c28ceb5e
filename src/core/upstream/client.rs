//! Async HTTP client for the BOT rate APIs.

use std::time::Instant;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::{UpstreamError, UpstreamResult};
use crate::core::config::{Config, CredentialsConfig, UpstreamConfig};

/// The two upstream APIs, each with its own base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateApi {
    /// THB/USD interbank reference rates.
    ReferenceRate,
    /// Average THB exchange rates against foreign currencies.
    ExchangeRate,
}

/// Gateway performing authenticated, deadline-bounded GETs.
///
/// Cheap to share behind an `Arc`; holds no per-call state.
#[derive(Debug, Clone)]
pub struct RateGateway {
    client: reqwest::Client,
    upstream: UpstreamConfig,
    credentials: CredentialsConfig,
}

impl RateGateway {
    /// Create a gateway for the given endpoints and credentials.
    pub fn new(upstream: UpstreamConfig, credentials: CredentialsConfig) -> UpstreamResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError::Client(e.to_string()))?;

        Ok(Self {
            client,
            upstream,
            credentials,
        })
    }

    /// Create a gateway from the server configuration.
    pub fn from_config(config: &Config) -> UpstreamResult<Self> {
        Self::new(config.upstream.clone(), config.credentials.clone())
    }

    /// Base URL for an API.
    pub fn base_url(&self, api: RateApi) -> &str {
        match api {
            RateApi::ReferenceRate => &self.upstream.reference_rate_url,
            RateApi::ExchangeRate => &self.upstream.exchange_rate_url,
        }
    }

    /// Fetch `base + endpoint` and return the parsed JSON body.
    ///
    /// Parameters whose value is absent or empty are left out of the query
    /// string. The API key is resolved on every call. The whole exchange,
    /// including reading the body, runs under the configured deadline; when
    /// it expires the in-flight request is dropped.
    #[instrument(skip_all, fields(api = ?api, endpoint = endpoint))]
    pub async fn fetch(
        &self,
        api: RateApi,
        endpoint: &str,
        params: &[(&str, Option<&str>)],
    ) -> UpstreamResult<Value> {
        let api_key = self.credentials.resolve_api_key().ok_or_else(|| {
            UpstreamError::MissingCredential(self.credentials.api_key_var.clone())
        })?;

        let url = format!("{}{}", self.base_url(api), endpoint);
        let query: Vec<(&str, &str)> = params
            .iter()
            .filter_map(|&(name, value)| value.filter(|v| !v.is_empty()).map(|v| (name, v)))
            .collect();

        debug!("GET {} with {} query parameter(s)", url, query.len());

        let request = self
            .client
            .get(&url)
            .header(AUTHORIZATION, api_key)
            .header(ACCEPT, "application/json")
            .query(&query);

        let started = Instant::now();
        let result = tokio::time::timeout(self.upstream.timeout(), Self::send(request))
            .await
            .unwrap_or_else(|_elapsed| Err(UpstreamError::Timeout));
        let elapsed = started.elapsed();

        match &result {
            Ok(_) => debug!(?elapsed, "Upstream request succeeded"),
            Err(e) => warn!(kind = e.kind(), ?elapsed, "Upstream request failed: {}", e),
        }

        result
    }

    async fn send(request: reqwest::RequestBuilder) -> UpstreamResult<Value> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        debug!("Upstream response received: {} bytes", body.len());

        serde_json::from_slice(&body)
            .map_err(|e| UpstreamError::network(format!("invalid JSON in response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway(server: &MockServer, timeout_ms: u64, credentials: CredentialsConfig) -> RateGateway {
        let upstream = UpstreamConfig {
            reference_rate_url: format!("{}/ref", server.uri()),
            exchange_rate_url: format!("{}/exg", server.uri()),
            timeout_ms,
        };
        RateGateway::new(upstream, credentials).unwrap()
    }

    fn unset_credentials(var: &str) -> CredentialsConfig {
        CredentialsConfig {
            api_key_var: var.to_string(),
            api_key: None,
        }
    }

    #[tokio::test]
    async fn test_fetch_sends_headers_and_returns_body() {
        let server = MockServer::start().await;
        let body = json!({"result": {"data": {"data_detail": [{"rate": "35.1234"}]}}});

        Mock::given(method("GET"))
            .and(path("/ref/DAILY_REF_RATE/"))
            .and(header("Authorization", "test-key"))
            .and(header("Accept", "application/json"))
            .and(query_param("start_period", "2024-01-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway(&server, 5_000, CredentialsConfig::fixed("test-key"));
        let value = gateway
            .fetch(
                RateApi::ReferenceRate,
                "/DAILY_REF_RATE/",
                &[("start_period", Some("2024-01-01"))],
            )
            .await
            .unwrap();

        assert_eq!(value, body);
    }

    #[tokio::test]
    async fn test_fetch_omits_empty_and_absent_params() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/exg/MONTHLY_AVG_EXG_RATE/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let gateway = gateway(&server, 5_000, CredentialsConfig::fixed("test-key"));
        gateway
            .fetch(
                RateApi::ExchangeRate,
                "/MONTHLY_AVG_EXG_RATE/",
                &[
                    ("start_period", Some("2024-01")),
                    ("end_period", Some("")),
                    ("currency", None),
                ],
            )
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let pairs: Vec<(String, String)> = requests[0]
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs, vec![("start_period".to_string(), "2024-01".to_string())]);
    }

    #[tokio::test]
    async fn test_status_error_does_not_leak_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string("internal routing table: node-7 secret"),
            )
            .mount(&server)
            .await;

        let gateway = gateway(&server, 5_000, CredentialsConfig::fixed("test-key"));
        let err = gateway
            .fetch(RateApi::ReferenceRate, "/DAILY_REF_RATE/", &[])
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Status(404)));
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(!message.contains("secret"));
    }

    #[tokio::test]
    async fn test_timeout_after_deadline() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let gateway = gateway(&server, 200, CredentialsConfig::fixed("test-key"));
        let started = Instant::now();
        let err = gateway
            .fetch(RateApi::ExchangeRate, "/DAILY_AVG_EXG_RATE/", &[])
            .await
            .unwrap_err();
        let elapsed = started.elapsed();

        assert!(matches!(err, UpstreamError::Timeout));
        assert_eq!(err.to_string(), "API request timed out");
        assert!(elapsed >= Duration::from_millis(200), "{elapsed:?}");
        assert!(elapsed < Duration::from_secs(3), "{elapsed:?}");
    }

    #[tokio::test]
    async fn test_malformed_json_is_network_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let gateway = gateway(&server, 5_000, CredentialsConfig::fixed("test-key"));
        let err = gateway
            .fetch(RateApi::ReferenceRate, "/ANNUAL_REF_RATE/", &[])
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Network(_)));
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[tokio::test]
    async fn test_missing_credential_makes_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let gateway = gateway(&server, 5_000, unset_credentials("BOT_GATEWAY_TEST_UNSET_KEY"));
        let err = gateway
            .fetch(RateApi::ReferenceRate, "/DAILY_REF_RATE/", &[])
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::MissingCredential(_)));
        assert!(
            err.to_string()
                .starts_with("BOT_GATEWAY_TEST_UNSET_KEY environment variable is not set")
        );
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_credential_picked_up_after_construction() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(header("Authorization", "late-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&server)
            .await;

        let var = "BOT_GATEWAY_TEST_LATE_KEY";
        unsafe {
            std::env::remove_var(var);
        }
        let gateway = gateway(&server, 5_000, unset_credentials(var));

        let first = gateway.fetch(RateApi::ReferenceRate, "/DAILY_REF_RATE/", &[]).await;
        assert!(matches!(first, Err(UpstreamError::MissingCredential(_))));

        unsafe {
            std::env::set_var(var, "late-key");
        }
        let second = gateway.fetch(RateApi::ReferenceRate, "/DAILY_REF_RATE/", &[]).await;
        assert_eq!(second.unwrap(), json!({"ok": true}));

        unsafe {
            std::env::remove_var(var);
        }
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        let upstream = UpstreamConfig {
            reference_rate_url: "http://127.0.0.1:1".to_string(),
            exchange_rate_url: "http://127.0.0.1:1".to_string(),
            timeout_ms: 5_000,
        };
        let gateway = RateGateway::new(upstream, CredentialsConfig::fixed("test-key")).unwrap();

        let err = gateway
            .fetch(RateApi::ReferenceRate, "/DAILY_REF_RATE/", &[])
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Network(_)));
    }

    #[test]
    fn test_base_url_per_api() {
        let gateway =
            RateGateway::new(UpstreamConfig::default(), CredentialsConfig::default()).unwrap();
        assert!(gateway.base_url(RateApi::ReferenceRate).ends_with("Stat-ReferenceRate/v2"));
        assert!(gateway.base_url(RateApi::ExchangeRate).ends_with("Stat-ExchangeRate/v2"));
    }
}
