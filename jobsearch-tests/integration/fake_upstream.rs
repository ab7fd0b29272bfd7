//! In-process stand-in for the JSearch provider
//!
//! Serves `GET /search` on an ephemeral localhost port and records every
//! request it receives so tests can assert on headers and parameters.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use jobsearch_core::ServiceConfig;
use serde_json::json;
use url::Url;

/// How the fake provider answers.
#[derive(Debug, Clone)]
pub enum Behavior {
    /// 200 with `count` numbered records
    Records(usize),
    /// Given status with a plain-text body
    Status(u16, &'static str),
    /// 200 with a raw body
    RawBody(&'static str),
    /// 200 with records, after a delay
    Delayed(Duration),
    /// 302 to the given location with a plain-text body
    Redirect(String),
}

/// One request as seen by the fake provider.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub headers: HeaderMap,
    pub params: HashMap<String, String>,
}

#[derive(Clone)]
struct UpstreamState {
    behavior: Behavior,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Handle to a running fake provider.
pub struct FakeUpstream {
    pub address: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeUpstream {
    /// Starts a fake provider with the given behavior.
    pub async fn start(behavior: Behavior) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = UpstreamState {
            behavior,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/search", get(search))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { address, requests }
    }

    /// Base URL to point the provider configuration at.
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}/", self.address)).unwrap()
    }

    /// Configuration with a credential and this fake as the provider.
    pub fn config(&self) -> ServiceConfig {
        ServiceConfig::default()
            .with_api_key("test-key")
            .with_base_url(self.base_url())
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Address on localhost where nothing is listening.
pub fn closed_port_url() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{address}/")).unwrap()
}

async fn search(
    State(state): State<UpstreamState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state
        .requests
        .lock()
        .unwrap()
        .push(RecordedRequest { headers, params });

    match state.behavior {
        Behavior::Records(count) => axum::Json(numbered_records(count)).into_response(),
        Behavior::Status(status, body) => {
            (StatusCode::from_u16(status).unwrap(), body).into_response()
        }
        Behavior::RawBody(body) => (StatusCode::OK, body).into_response(),
        Behavior::Delayed(delay) => {
            tokio::time::sleep(delay).await;
            axum::Json(numbered_records(1)).into_response()
        }
        Behavior::Redirect(location) => {
            (StatusCode::FOUND, [(header::LOCATION, location)], "moved").into_response()
        }
    }
}

fn numbered_records(count: usize) -> serde_json::Value {
    let data: Vec<_> = (0..count)
        .map(|index| {
            json!({
                "job_id": format!("upstream-{index}"),
                "job_title": format!("Engineer {index}"),
                "employer_name": "Acme Corp",
                "job_city": if index % 2 == 0 { json!("Denver") } else { json!(null) },
                "job_country": "US",
                "job_salary": null,
                "job_apply_link": format!("https://apply.example/{index}"),
                "job_google_link": format!("https://google.example/{index}"),
                "job_description": "ignored by the service"
            })
        })
        .collect();

    json!({ "status": "OK", "request_id": "fake", "data": data })
}
