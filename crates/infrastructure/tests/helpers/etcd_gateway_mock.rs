#![allow(dead_code)]
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[derive(Clone, Copy)]
pub enum GatewayMode {
    Serve,
    Status(u16),
    Garbage,
    Stall(Duration),
}

#[derive(Clone)]
struct GatewayState {
    mode: GatewayMode,
    data: Arc<RwLock<HashMap<String, Vec<String>>>>,
    requests: Arc<AtomicUsize>,
}

#[derive(Deserialize)]
struct RangeRequest {
    #[serde(default)]
    key: String,
}

/// Stand-in for etcd's `/v3/kv/range` JSON endpoint.
pub struct MockEtcdGateway {
    addr: SocketAddr,
    state: GatewayState,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockEtcdGateway {
    pub async fn start(mode: GatewayMode) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let state = GatewayState {
            mode,
            data: Arc::default(),
            requests: Arc::new(AtomicUsize::new(0)),
        };
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let app = Router::new()
            .route("/v3/kv/range", post(range))
            .with_state(state.clone());

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn put(&self, key: &str, value: &str) {
        self.state
            .data
            .write()
            .unwrap()
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }
}

impl Drop for MockEtcdGateway {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn range(
    State(state): State<GatewayState>,
    Json(request): Json<RangeRequest>,
) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);

    match state.mode {
        GatewayMode::Stall(delay) => {
            tokio::time::sleep(delay).await;
            Json(json!({})).into_response()
        }
        GatewayMode::Status(code) => (
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(json!({"error": "unavailable"})),
        )
            .into_response(),
        GatewayMode::Garbage => (StatusCode::OK, "<html>not etcd</html>").into_response(),
        GatewayMode::Serve => Json(range_response(&request.key, &state.data)).into_response(),
    }
}

fn range_response(encoded_key: &str, data: &RwLock<HashMap<String, Vec<String>>>) -> Value {
    let key = STANDARD
        .decode(encoded_key)
        .map(|k| String::from_utf8_lossy(&k).into_owned())
        .unwrap_or_default();

    let values = data.read().unwrap().get(&key).cloned().unwrap_or_default();
    if values.is_empty() {
        return json!({"header": {"revision": "1"}});
    }

    let kvs: Vec<Value> = values
        .iter()
        .map(|v| {
            json!({
                "key": STANDARD.encode(&key),
                "value": STANDARD.encode(v),
                "version": "1",
            })
        })
        .collect();

    json!({
        "header": {"revision": "1"},
        "kvs": kvs,
        "count": values.len().to_string(),
    })
}
