//! Shared harness for route tests: a real router over a temp SQLite file,
//! with the in-process calendar stub and a counting notifier.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use hireflow_app::{router, AppContext};
use hireflow_core::Notifier;
use hireflow_domain::{
    Config, DatabaseConfig, FrontendConfig, GoogleConfig, HttpConfig, Interview, SmtpConfig,
    WorkflowConfig,
};
use hireflow_infra::{DbManager, StubCalendarProvider};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const FRONTEND_URL: &str = "http://localhost:5173";

/// Notifier double that records dispatch counts.
#[derive(Default)]
pub struct CountingNotifier {
    scheduled: AtomicUsize,
}

impl CountingNotifier {
    pub fn scheduled_count(&self) -> usize {
        self.scheduled.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for CountingNotifier {
    async fn notify_scheduled(&self, _interview: &Interview) -> bool {
        self.scheduled.fetch_add(1, Ordering::SeqCst);
        true
    }

    async fn notify_cancelled(&self, _interview: &Interview) -> bool {
        true
    }
}

pub struct TestApp {
    pub router: Router,
    pub notifier: Arc<CountingNotifier>,
    _temp: TempDir,
}

fn test_config(db_path: &str) -> Config {
    Config {
        http: HttpConfig { bind_addr: "127.0.0.1:0".to_string() },
        database: DatabaseConfig { path: db_path.to_string(), pool_size: 2 },
        smtp: SmtpConfig {
            enabled: false,
            host: "smtp.example.com".to_string(),
            port: 587,
            username: "mailer".to_string(),
            password: "secret".to_string(),
            from_address: "noreply@example.com".to_string(),
            from_name: "Interview Scheduler".to_string(),
        },
        google: GoogleConfig {
            client_id: "client-123".to_string(),
            redirect_uri: "http://localhost:8080/api/auth/google-callback".to_string(),
        },
        frontend: FrontendConfig { url: FRONTEND_URL.to_string() },
        workflow: WorkflowConfig::default(),
    }
}

pub fn app() -> TestApp {
    let temp = TempDir::new().expect("temp dir created");
    let db_path = temp.path().join("test.db");

    let db = DbManager::new(&db_path, 2).expect("manager created");
    db.run_migrations().expect("migrations run");

    let notifier = Arc::new(CountingNotifier::default());
    let config = test_config(&db_path.to_string_lossy());
    let ctx =
        AppContext::new(&config, db, Arc::new(StubCalendarProvider::new()), notifier.clone());

    TestApp { router: router(ctx), notifier, _temp: temp }
}

impl TestApp {
    pub async fn request(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.expect("router handled request")
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.request(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Response<Body> {
        self.request(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn patch_json(&self, uri: &str, body: Value) -> Response<Body> {
        self.request(
            Request::builder()
                .method("PATCH")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.request(
            Request::builder().method("DELETE").uri(uri).body(Body::empty()).unwrap(),
        )
        .await
    }

    /// Issue a development token so create requests pass the auth gate.
    pub async fn login(&self) {
        let response = self.post_json("/api/auth/fake-login", serde_json::json!({})).await;
        assert!(response.status().is_success(), "fake login succeeded");
    }
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.expect("body collected").to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

/// A create payload one day in the future.
pub fn create_payload() -> Value {
    let start = chrono::Utc::now() + chrono::Duration::days(1);
    let start = start - chrono::Duration::nanoseconds(i64::from(start.timestamp_subsec_nanos()));
    let end = start + chrono::Duration::minutes(45);
    serde_json::json!({
        "jobTitle": "Backend Engineer",
        "candidateName": "Ada Lovelace",
        "candidateEmail": "ada@example.com",
        "interviewerName": "Grace Hopper",
        "interviewerEmail": "grace@example.com",
        "startTime": start.to_rfc3339(),
        "endTime": end.to_rfc3339(),
    })
}
