//! In-process API double that records every request it receives.
//!
//! Responses are canned per `(method, path)`; anything unregistered gets a
//! 404 with an empty body.

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use portal::outbound::http::ApiClient;
use reqwest::Url;
use serde_json::Value;

/// One request as seen by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
struct CannedResponse {
    status: u16,
    body: String,
}

/// Shared log of requests plus the responses to serve.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<HashMap<(String, String), CannedResponse>>>,
}

impl Recorder {
    /// Serve `body` as JSON with `status` for `method path`.
    pub fn respond_json(&self, method: &str, path: &str, status: u16, body: &Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    /// Serve a raw body with `status` for `method path`.
    pub fn respond_raw(&self, method: &str, path: &str, status: u16, body: &str) {
        self.responses.lock().expect("responses lock").insert(
            (method.to_owned(), path.to_owned()),
            CannedResponse {
                status,
                body: body.to_owned(),
            },
        );
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    fn record(&self, request: RecordedRequest) -> CannedResponse {
        let key = (request.method.clone(), request.path.clone());
        self.requests.lock().expect("requests lock").push(request);
        self.responses
            .lock()
            .expect("responses lock")
            .get(&key)
            .cloned()
            .unwrap_or(CannedResponse {
                status: 404,
                body: String::new(),
            })
    }
}

/// Running server plus the handles tests need.
pub struct RecordingServer {
    pub base_url: Url,
    pub recorder: Recorder,
    pub handle: ServerHandle,
}

impl RecordingServer {
    /// Client rooted at this server.
    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone(), None).expect("client builds")
    }

    /// Stop accepting connections and wait for in-flight requests.
    pub async fn stop(&self) {
        self.handle.stop(true).await;
    }
}

async fn record(request: HttpRequest, body: web::Bytes, recorder: web::Data<Recorder>) -> HttpResponse {
    let recorded = RecordedRequest {
        method: request.method().as_str().to_owned(),
        path: request.path().to_owned(),
        query: Some(request.query_string())
            .filter(|query| !query.is_empty())
            .map(str::to_owned),
        body: (!body.is_empty())
            .then(|| serde_json::from_slice(&body).expect("request body is JSON")),
    };
    let canned = recorder.record(recorded);
    let status = StatusCode::from_u16(canned.status).expect("valid canned status");
    if canned.body.is_empty() {
        return HttpResponse::build(status).finish();
    }
    HttpResponse::build(status)
        .content_type("application/json")
        .body(canned.body)
}

/// Bind an ephemeral port and serve recorded responses.
///
/// Must be called from within an Actix or `LocalSet` context.
pub fn spawn_recording_server() -> RecordingServer {
    let recorder = Recorder::default();
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local address");
    let data = web::Data::new(recorder.clone());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .default_service(web::to(record))
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .expect("listen on ephemeral port")
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    RecordingServer {
        base_url: Url::parse(&format!("http://{addr}")).expect("server url"),
        recorder,
        handle,
    }
}
