//! etcd v3 client over the JSON gRPC gateway.
//!
//! Wire format (HTTP):
//! ```text
//! POST /v3/kv/range HTTP/1.1
//! Content-Type: application/json
//!
//! {"key": "<base64 key>"}
//! ```
//! Response: `{"header": {...}, "kvs": [{"key": "<b64>", "value": "<b64>", ...}], "count": "1"}`.
//! `kvs` is omitted when nothing matches.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use kvdns_application::ports::{KvStore, StoreEntry};
use kvdns_domain::{StoreError, StoreKey};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const RANGE_PATH: &str = "/v3/kv/range";
const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Serialize)]
struct RangeRequest {
    key: String,
}

#[derive(Deserialize)]
struct RangeResponse {
    #[serde(default)]
    kvs: Vec<RangeKeyValue>,
}

#[derive(Deserialize)]
struct RangeKeyValue {
    #[serde(default)]
    key: String,
    #[serde(default)]
    value: String,
}

/// Exact-key reads against one or more etcd endpoints.
///
/// Endpoints are tried in order inside the caller's deadline; the first
/// answer wins. The HTTP client (and its connection pool) is built once.
pub struct EtcdHttpStore {
    endpoints: Vec<String>,
    client: reqwest::Client,
}

impl EtcdHttpStore {
    pub fn new(endpoints: Vec<String>) -> Result<Self, StoreError> {
        if endpoints.is_empty() {
            return Err(StoreError::Unavailable(
                "no etcd endpoints configured".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| StoreError::Unavailable(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoints: endpoints
                .into_iter()
                .map(|e| e.trim_end_matches('/').to_string())
                .collect(),
            client,
        })
    }

    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    async fn range(
        &self,
        endpoint: &str,
        key: &StoreKey,
        timeout: Duration,
    ) -> Result<Vec<StoreEntry>, StoreError> {
        let url = format!("{}{}", endpoint, RANGE_PATH);
        let body = encode_range_request(key);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .timeout(timeout)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    StoreError::Timeout(timeout)
                } else {
                    StoreError::Unavailable(format!("{}: {}", url, e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Unavailable(format!(
                "{} returned HTTP {}",
                url, status
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", url, e)))?;

        parse_range_response(&bytes)
    }
}

#[async_trait]
impl KvStore for EtcdHttpStore {
    async fn get(&self, key: &StoreKey, deadline: Duration) -> Result<Vec<StoreEntry>, StoreError> {
        let started = Instant::now();
        let mut last_error = StoreError::Unavailable("no etcd endpoint reachable".to_string());

        for endpoint in &self.endpoints {
            let remaining = deadline.saturating_sub(started.elapsed());
            if remaining.is_zero() {
                return Err(StoreError::Timeout(deadline));
            }

            match self.range(endpoint, key, remaining).await {
                Ok(entries) => {
                    debug!(endpoint = %endpoint, key = %key, count = entries.len(), "etcd range");
                    return Ok(entries);
                }
                // Malformed bodies end the lookup; the next endpoint is not asked.
                Err(e @ StoreError::InvalidResponse(_)) => return Err(e),
                Err(e) => {
                    warn!(endpoint = %endpoint, key = %key, error = %e, "etcd endpoint failed");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

fn encode_range_request(key: &StoreKey) -> Vec<u8> {
    let request = RangeRequest {
        key: STANDARD.encode(key.as_str()),
    };
    serde_json::to_vec(&request).unwrap_or_default()
}

fn parse_range_response(body: &[u8]) -> Result<Vec<StoreEntry>, StoreError> {
    let response: RangeResponse = serde_json::from_slice(body)
        .map_err(|e| StoreError::InvalidResponse(format!("range response: {}", e)))?;

    response
        .kvs
        .into_iter()
        .map(|kv| {
            let key = STANDARD
                .decode(&kv.key)
                .map_err(|e| StoreError::InvalidResponse(format!("key encoding: {}", e)))?;
            let value = STANDARD
                .decode(&kv.value)
                .map_err(|e| StoreError::InvalidResponse(format!("value encoding: {}", e)))?;
            Ok(StoreEntry::new(
                String::from_utf8_lossy(&key).into_owned(),
                Bytes::from(value),
            ))
        })
        .collect()
}
