//! Ethereum JSON-RPC client, limited to `eth_call` against the latest block.
//!
//! Wire format:
//! ```text
//! POST <rpc_url>
//! {"jsonrpc":"2.0","id":1,"method":"eth_call","params":[{"to":"0x..","data":"0x.."},"latest"]}
//!
//! {"jsonrpc":"2.0","id":1,"result":"0x.."}
//! {"jsonrpc":"2.0","id":1,"error":{"code":3,"message":"execution reverted"}}
//! ```

use super::abi::{self, Address};
use ferrous_dnslink_domain::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("request to {0} timed out")]
    Timeout(String),

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("execution reverted")]
    Reverted,

    #[error("JSON-RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<RpcError> for DomainError {
    fn from(err: RpcError) -> Self {
        match err {
            RpcError::Timeout(_) => DomainError::UpstreamTimeout,
            other => DomainError::UpstreamUnavailable(other.to_string()),
        }
    }
}

impl From<abi::AbiError> for RpcError {
    fn from(err: abi::AbiError) -> Self {
        RpcError::Malformed(err.to_string())
    }
}

#[derive(Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    error: Option<JsonRpcErrorObject>,
}

#[derive(Deserialize)]
struct JsonRpcErrorObject {
    code: i64,
    message: String,
}

pub struct JsonRpcClient {
    http: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl JsonRpcClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RpcError> {
        let url = url.into();
        let http = reqwest::Client::builder()
            .user_agent(concat!("Ferrous-DNSLink/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| RpcError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            url,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Executes a read-only contract call and returns the raw return data.
    pub async fn eth_call(&self, to: &Address, data: &[u8]) -> Result<Vec<u8>, RpcError> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method: "eth_call",
            params: json!([{ "to": to.to_string(), "data": abi::encode_hex(data) }, "latest"]),
        };

        debug!(url = %self.url, to = %to, id = request.id, "Sending eth_call");

        let response = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body: JsonRpcResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                RpcError::Timeout(self.url.clone())
            } else {
                RpcError::Malformed(e.to_string())
            }
        })?;

        if let Some(error) = body.error {
            return Err(if error.message.contains("revert") {
                RpcError::Reverted
            } else {
                RpcError::Rpc {
                    code: error.code,
                    message: error.message,
                }
            });
        }

        let result = body
            .result
            .ok_or_else(|| RpcError::Malformed("missing result".to_string()))?;

        debug!(url = %self.url, result_len = result.len(), "eth_call result received");

        Ok(abi::decode_hex(&result)?)
    }

    fn transport_error(&self, err: reqwest::Error) -> RpcError {
        if err.is_timeout() {
            RpcError::Timeout(self.url.clone())
        } else {
            RpcError::Transport {
                url: self.url.clone(),
                message: err.to_string(),
            }
        }
    }
}
