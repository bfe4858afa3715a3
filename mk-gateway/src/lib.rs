//! Request gateway for the review and EHS backends.
//!
//! Every backend endpoint answers with a `{status, data, msg}` envelope. The
//! [`Gateway`] sends JSON requests, checks the HTTP status, unwraps the
//! envelope and hands back `data`, or a [`GatewayError`] that knows which
//! notice to show.

mod error;

pub use error::{
    GatewayError, MSG_CONFIG, MSG_FORBIDDEN, MSG_GENERIC, MSG_NETWORK, MSG_NOT_FOUND, MSG_SERVER,
    MSG_UNAUTHORIZED,
};

use log::{debug, warn};
use mk_model::Envelope;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Path prefix every backend endpoint lives under.
pub const DEFAULT_BASE_PATH: &str = "/ekp_mkpass/back";

/// Request timeout. Only enforced on native targets; the browser owns
/// timeouts under WASM.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(100);

/// Connection settings for a [`Gateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Resolve the default base path against a page origin such as
    /// `https://ehs.example.com`. reqwest needs absolute URLs in the browser.
    pub fn for_origin(origin: &str) -> Self {
        Self::new(format!("{}{}", origin.trim_end_matches('/'), DEFAULT_BASE_PATH))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// JSON-over-HTTP client that unwraps backend envelopes.
#[derive(Debug, Clone)]
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
}

/// Gateways are interchangeable when they talk to the same base URL.
impl PartialEq for Gateway {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl Gateway {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let http = builder
            .build()
            .map_err(|e| GatewayError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(&config.base_url, http))
    }

    /// Wrap an existing reqwest client (tests point this at a mock server).
    pub fn with_client(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let url = self.url(path);
        debug!("GET {url}");
        self.send(self.http.get(&url), &url).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {url}");
        self.send(self.http.post(&url).json(body), &url).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<T, GatewayError> {
        let response = request.send().await.map_err(|e| {
            let err = GatewayError::from_transport(e);
            warn!("{url}: {err}");
            err
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(GatewayError::from_transport)?;

        if !status.is_success() {
            let err = GatewayError::Http {
                status: status.as_u16(),
                msg: body_msg(&body),
            };
            warn!("{url}: {err}");
            return Err(err);
        }

        parse_envelope(&body).inspect_err(|err| warn!("{url}: {err}"))
    }
}

/// Unwrap a `{status, data, msg}` body into its `data`.
pub fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<T, GatewayError> {
    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|e| GatewayError::Decode(e.to_string()))?;
    if !envelope.is_success() {
        return Err(GatewayError::Business {
            status: envelope.status,
            msg: envelope.msg,
        });
    }
    envelope.data.ok_or(GatewayError::MissingData)
}

/// Best-effort `msg` from an error body.
fn body_msg(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("msg")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_joined_with_base_path() {
        let config = GatewayConfig::for_origin("https://ehs.example.com/");
        assert_eq!(config.base_url, "https://ehs.example.com/ekp_mkpass/back");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn url_joins_with_or_without_slash() {
        let gw = Gateway::with_client("http://h/back/", reqwest::Client::new());
        assert_eq!(gw.url("/a/b/"), "http://h/back/a/b/");
        assert_eq!(gw.url("a"), "http://h/back/a");
    }

    #[test]
    fn gateways_compare_by_base_url() {
        let a = Gateway::with_client("http://h/back", reqwest::Client::new());
        let b = Gateway::with_client("http://h/back/", reqwest::Client::new());
        let c = Gateway::with_client("http://other/back", reqwest::Client::new());
        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn envelope_success_yields_data() {
        let data: Vec<u32> = parse_envelope(r#"{"status":0,"data":[1,2,3]}"#).unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn envelope_failure_keeps_msg() {
        let err = parse_envelope::<Vec<u32>>(r#"{"status":5,"msg":"no template"}"#).unwrap_err();
        assert!(matches!(err, GatewayError::Business { status: 5, .. }));
        assert_eq!(err.user_message(), "no template");
    }

    #[test]
    fn envelope_without_data_is_an_error() {
        let err = parse_envelope::<Vec<u32>>(r#"{"status":0,"data":null}"#).unwrap_err();
        assert!(matches!(err, GatewayError::MissingData));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = parse_envelope::<Vec<u32>>("<html>").unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
        assert_eq!(err.user_message(), MSG_GENERIC);
    }

    #[test]
    fn error_body_msg_is_extracted() {
        assert_eq!(body_msg(r#"{"msg":"down"}"#).as_deref(), Some("down"));
        assert_eq!(body_msg("not json"), None);
        assert_eq!(body_msg(r#"{"msg":3}"#), None);
    }
}
