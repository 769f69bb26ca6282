//! JSON-RPC Summary Client
//!
//! Calls `get_dashboard_summary` on the backend through the Odoo
//! `call_kw` JSON-RPC route.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::error::{SummaryError, SummaryResult};
use super::types::{PeriodKey, SummaryResponse};
use super::SummaryProvider;

/// Configuration for the summary backend
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the backend (e.g., "http://localhost:8069")
    pub url: String,
    /// Model exposing the summary method
    pub model: String,
    /// Method name on the model
    pub method: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Session cookie forwarded as `session_id`
    pub session_id: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8069".to_string(),
            model: "twh.dashboard".to_string(),
            method: "get_dashboard_summary".to_string(),
            request_timeout_ms: 30_000,
            session_id: None,
        }
    }
}

/// Summary provider speaking JSON-RPC to the backend
pub struct OdooRpcClient {
    client: Client,
    config: BackendConfig,
    next_id: AtomicU64,
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'static str,
    id: u64,
    params: CallKwParams<'a>,
}

#[derive(Serialize)]
struct CallKwParams<'a> {
    model: &'a str,
    method: &'a str,
    args: Vec<Value>,
    kwargs: Value,
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Option<RpcErrorData>,
}

#[derive(Deserialize)]
struct RpcErrorData {
    #[serde(default)]
    message: String,
}

impl From<RpcErrorBody> for SummaryError {
    fn from(body: RpcErrorBody) -> Self {
        let detail = body
            .data
            .map(|d| d.message)
            .filter(|m| !m.is_empty());

        let message = match detail {
            Some(detail) if !body.message.is_empty() => format!("{}: {}", body.message, detail),
            Some(detail) => detail,
            None => body.message,
        };

        SummaryError::Rpc {
            code: body.code,
            message,
        }
    }
}

impl OdooRpcClient {
    /// Create a new client with the given configuration
    pub fn new(config: BackendConfig) -> SummaryResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            config,
            next_id: AtomicU64::new(1),
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Full URL of the `call_kw` route for the configured model and method
    pub fn endpoint(&self) -> String {
        format!(
            "{}/web/dataset/call_kw/{}/{}",
            self.config.url.trim_end_matches('/'),
            self.config.model,
            self.config.method
        )
    }

    async fn call_kw(&self, kwargs: Value) -> SummaryResult<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = RpcRequest {
            jsonrpc: "2.0",
            method: "call",
            id,
            params: CallKwParams {
                model: &self.config.model,
                method: &self.config.method,
                args: Vec::new(),
                kwargs,
            },
        };

        let mut request = self.client.post(self.endpoint()).json(&body);
        if let Some(session) = &self.config.session_id {
            request = request.header(reqwest::header::COOKIE, format!("session_id={}", session));
        }

        let response = request.send().await.map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SummaryError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        let text = response.text().await.map_err(map_transport_error)?;
        let envelope: RpcResponse = serde_json::from_str(&text)?;

        if let Some(error) = envelope.error {
            return Err(error.into());
        }

        envelope.result.ok_or_else(|| {
            SummaryError::Malformed("response carried neither result nor error".to_string())
        })
    }
}

fn map_transport_error(e: reqwest::Error) -> SummaryError {
    if e.is_timeout() {
        SummaryError::Timeout
    } else if e.is_connect() {
        SummaryError::Unavailable
    } else {
        SummaryError::Request(e)
    }
}

#[async_trait]
impl SummaryProvider for OdooRpcClient {
    async fn fetch_summary(&self, period: &PeriodKey) -> SummaryResult<SummaryResponse> {
        tracing::debug!(period = %period, endpoint = %self.endpoint(), "Requesting dashboard summary");

        let result = self
            .call_kw(json!({ "revenue_period": period.as_str() }))
            .await?;

        if !result.is_object() {
            return Err(SummaryError::Malformed(format!(
                "expected a summary object, found {}",
                result
            )));
        }

        let summary: SummaryResponse = serde_json::from_value(result)?;
        Ok(summary)
    }
}
