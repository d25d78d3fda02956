//! Header-contract tests against a live stub backend: bearer injection,
//! namespace scoping, central 401 handling, and namespace refresh.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, put};
use axum::{Json, Router};
use courier_client::client::{ApiClient, ApiClientConfig, HEADER_NAMESPACE};
use courier_client::context::NamespaceContext;
use courier_client::error::ApiError;
use courier_client::types::{GlobalStatus, PageQuery};
use courier_client::{message_log, template};
use courier_client_core::{FileSessionStore, MemorySessionStore, SessionStore};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
struct Recorded {
    path: String,
    authorization: Option<String>,
    namespace: Option<String>,
    body: Option<Value>,
}

type Log = Arc<Mutex<Vec<Recorded>>>;

async fn record(log: &Log, path: &str, headers: &HeaderMap, body: Option<Value>) {
    log.lock().await.push(Recorded {
        path: path.to_string(),
        authorization: headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string()),
        namespace: headers
            .get(HEADER_NAMESPACE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string()),
        body,
    });
}

async fn recorded_for(log: &Log, path: &str) -> Vec<Recorded> {
    log.lock()
        .await
        .iter()
        .filter(|entry| entry.path == path)
        .cloned()
        .collect()
}

fn empty_page() -> Value {
    json!({"items": [], "total": 0, "page": 1, "pageSize": 20})
}

fn namespace_page(names: &[&str]) -> Value {
    let items: Vec<Value> = names
        .iter()
        .map(|name| {
            json!({
                "name": name,
                "status": "ENABLED",
                "createdAt": "2026-08-01T00:00:00Z",
                "updatedAt": "2026-08-01T00:00:00Z"
            })
        })
        .collect();
    json!({"items": items, "total": items.len(), "page": 1, "pageSize": 100})
}

async fn spawn_stub(app: Router) -> Result<(SocketAddr, JoinHandle<()>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .await
            .expect("stub backend failed");
    });
    Ok((addr, handle))
}

fn client_for(addr: SocketAddr, session: Arc<dyn SessionStore>) -> ApiClient {
    ApiClient::new(ApiClientConfig::new(format!("http://{addr}")), session)
        .expect("api client")
}

fn client_for_dev(addr: SocketAddr, session: Arc<dyn SessionStore>) -> ApiClient {
    let mut config = ApiClientConfig::new(format!("http://{addr}"));
    config.dev_mode = true;
    ApiClient::new(config, session).expect("api client")
}

/// Stub covering the paths these tests touch, recording every request.
fn recording_app(log: Log) -> Router {
    Router::new()
        .route(
            template::LIST_PATH,
            get(|State(log): State<Log>, headers: HeaderMap| async move {
                record(&log, template::LIST_PATH, &headers, None).await;
                Json(empty_page())
            }),
        )
        .route(
            "/v1/namespaces",
            get(|State(log): State<Log>, headers: HeaderMap| async move {
                record(&log, "/v1/namespaces", &headers, None).await;
                Json(namespace_page(&["prod", "staging"]))
            }),
        )
        .route(
            "/health",
            get(|State(log): State<Log>, headers: HeaderMap| async move {
                record(&log, "/health", &headers, None).await;
                Json(json!({
                    "status": "SERVING",
                    "message": "ok",
                    "timestamp": "2026-08-01T00:00:00Z"
                }))
            }),
        )
        .route(
            "/v1/message-log/log_1/retry",
            put(
                |State(log): State<Log>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    record(&log, "/v1/message-log/log_1/retry", &headers, Some(body)).await;
                    Json(json!({"code": 0, "message": "ok"}))
                },
            ),
        )
        .with_state(log)
}

#[tokio::test]
async fn scoped_request_carries_selected_namespace() -> Result<()> {
    let log: Log = Log::default();
    let (addr, server) = spawn_stub(recording_app(Arc::clone(&log))).await?;

    let session = Arc::new(MemorySessionStore::new());
    session.set_current_namespace("prod")?;
    let client = client_for(addr, Arc::clone(&session) as Arc<dyn SessionStore>);

    client
        .templates()
        .list(&Default::default())
        .await
        .map_err(anyhow::Error::from)?;

    let requests = recorded_for(&log, template::LIST_PATH).await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].namespace.as_deref(), Some("prod"));

    // Deselecting drops the header entirely.
    session.clear_current_namespace()?;
    client
        .templates()
        .list(&Default::default())
        .await
        .map_err(anyhow::Error::from)?;

    let requests = recorded_for(&log, template::LIST_PATH).await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].namespace, None);

    server.abort();
    Ok(())
}

#[tokio::test]
async fn namespace_and_health_endpoints_are_exempt() -> Result<()> {
    let log: Log = Log::default();
    let (addr, server) = spawn_stub(recording_app(Arc::clone(&log))).await?;

    let session = Arc::new(MemorySessionStore::new());
    session.set_current_namespace("prod")?;
    let client = client_for(addr, session);

    client
        .namespaces()
        .list(&PageQuery::page(1, 100))
        .await
        .map_err(anyhow::Error::from)?;
    client.health().check().await.map_err(anyhow::Error::from)?;

    let namespaces = recorded_for(&log, "/v1/namespaces").await;
    assert_eq!(namespaces.len(), 1);
    assert_eq!(namespaces[0].namespace, None);

    let health = recorded_for(&log, "/health").await;
    assert_eq!(health.len(), 1);
    assert_eq!(health[0].namespace, None);

    server.abort();
    Ok(())
}

#[tokio::test]
async fn bearer_token_sent_only_when_present() -> Result<()> {
    let log: Log = Log::default();
    let (addr, server) = spawn_stub(recording_app(Arc::clone(&log))).await?;

    let session = Arc::new(MemorySessionStore::new());
    let client = client_for(addr, Arc::clone(&session) as Arc<dyn SessionStore>);

    client
        .templates()
        .list(&Default::default())
        .await
        .map_err(anyhow::Error::from)?;
    let requests = recorded_for(&log, template::LIST_PATH).await;
    assert_eq!(requests[0].authorization, None);

    session.set_auth_token("tok_123")?;
    client
        .templates()
        .list(&Default::default())
        .await
        .map_err(anyhow::Error::from)?;
    let requests = recorded_for(&log, template::LIST_PATH).await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].authorization.as_deref(), Some("Bearer tok_123"));

    server.abort();
    Ok(())
}

#[tokio::test]
async fn transition_body_echoes_uid() -> Result<()> {
    let log: Log = Log::default();
    let (addr, server) = spawn_stub(recording_app(Arc::clone(&log))).await?;

    let session = Arc::new(MemorySessionStore::new());
    session.set_current_namespace("prod")?;
    let client = client_for(addr, session);

    client
        .message_logs()
        .retry("log_1")
        .await
        .map_err(anyhow::Error::from)?;

    let path = message_log::action_path("log_1", message_log::LogAction::Retry);
    let requests = recorded_for(&log, &path).await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body, Some(json!({"uid": "log_1"})));
    assert_eq!(requests[0].namespace.as_deref(), Some("prod"));

    server.abort();
    Ok(())
}

#[tokio::test]
async fn unauthorized_clears_token_but_keeps_namespace() -> Result<()> {
    let app = Router::new().route(
        template::LIST_PATH,
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"message": "expired"}))) }),
    );
    let (addr, server) = spawn_stub(app).await?;

    let session = Arc::new(MemorySessionStore::new());
    session.set_auth_token("tok_123")?;
    session.set_current_namespace("prod")?;
    let client = client_for(addr, Arc::clone(&session) as Arc<dyn SessionStore>);

    let result = client.templates().list(&Default::default()).await;
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    assert_eq!(session.auth_token(), None);
    assert_eq!(session.current_namespace().as_deref(), Some("prod"));

    server.abort();
    Ok(())
}

#[tokio::test]
async fn dev_mode_suppresses_auto_logout() -> Result<()> {
    let app = Router::new().route(
        template::LIST_PATH,
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"message": "expired"}))) }),
    );
    let (addr, server) = spawn_stub(app).await?;

    let session = Arc::new(MemorySessionStore::new());
    session.set_auth_token("tok_123")?;
    let client = client_for_dev(addr, Arc::clone(&session) as Arc<dyn SessionStore>);

    let result = client.templates().list(&Default::default()).await;
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    assert_eq!(session.auth_token().as_deref(), Some("tok_123"));

    server.abort();
    Ok(())
}

#[tokio::test]
async fn non_401_errors_propagate_unchanged() -> Result<()> {
    let app = Router::new().route(
        template::LIST_PATH,
        get(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "code": 3,
                    "message": "validation failed",
                    "metadata": {"name": "must not be empty"}
                })),
            )
        }),
    );
    let (addr, server) = spawn_stub(app).await?;

    let session = Arc::new(MemorySessionStore::new());
    session.set_auth_token("tok_123")?;
    let client = client_for(addr, Arc::clone(&session) as Arc<dyn SessionStore>);

    let error = client
        .templates()
        .list(&Default::default())
        .await
        .expect_err("expected 400");
    let fields = error.field_errors().expect("structured validation body");
    assert_eq!(
        fields.metadata.get("name").map(String::as_str),
        Some("must not be empty")
    );
    // Token untouched by non-401 failures.
    assert_eq!(session.auth_token().as_deref(), Some("tok_123"));

    server.abort();
    Ok(())
}

#[tokio::test]
async fn refresh_clears_vanished_selection() -> Result<()> {
    let log: Log = Log::default();
    let (addr, server) = spawn_stub(recording_app(Arc::clone(&log))).await?;

    let session = Arc::new(MemorySessionStore::new());
    session.set_current_namespace("gone")?;
    let client = client_for(addr, Arc::clone(&session) as Arc<dyn SessionStore>);

    let mut context = NamespaceContext::load(Arc::clone(&session) as Arc<dyn SessionStore>);
    context.refresh(&client).await.map_err(anyhow::Error::from)?;

    assert_eq!(context.current(), None);
    assert_eq!(session.current_namespace(), None);
    assert_eq!(context.namespaces().len(), 2);

    server.abort();
    Ok(())
}

#[tokio::test]
async fn refresh_keeps_selection_still_present() -> Result<()> {
    let log: Log = Log::default();
    let (addr, server) = spawn_stub(recording_app(Arc::clone(&log))).await?;

    let session = Arc::new(MemorySessionStore::new());
    session.set_current_namespace("prod")?;
    let client = client_for(addr, Arc::clone(&session) as Arc<dyn SessionStore>);

    let mut context = NamespaceContext::load(Arc::clone(&session) as Arc<dyn SessionStore>);
    context.refresh(&client).await.map_err(anyhow::Error::from)?;

    assert_eq!(context.current(), Some("prod"));
    assert_eq!(session.current_namespace().as_deref(), Some("prod"));

    server.abort();
    Ok(())
}

#[tokio::test]
async fn refresh_failure_keeps_cached_state() -> Result<()> {
    let app = Router::new().route(
        "/v1/namespaces",
        get(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"message": "down"})),
            )
        }),
    );
    let (addr, server) = spawn_stub(app).await?;

    let session = Arc::new(MemorySessionStore::new());
    session.set_current_namespace("prod")?;
    let client = client_for(addr, Arc::clone(&session) as Arc<dyn SessionStore>);

    let mut context = NamespaceContext::load(Arc::clone(&session) as Arc<dyn SessionStore>);
    let result = context.refresh(&client).await;

    assert!(matches!(result, Err(ApiError::Http { .. })));
    assert_eq!(context.current(), Some("prod"));
    assert_eq!(session.current_namespace().as_deref(), Some("prod"));
    assert!(!context.loading());

    server.abort();
    Ok(())
}

#[tokio::test]
async fn selection_survives_store_reopen() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("session.json");

    {
        let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::open(&path)?);
        let mut context = NamespaceContext::load(Arc::clone(&store));
        context
            .set_current(Some("ns1"))
            .map_err(anyhow::Error::from)?;
    }

    let reopened: Arc<dyn SessionStore> = Arc::new(FileSessionStore::open(&path)?);
    let context = NamespaceContext::load(reopened);
    assert_eq!(context.current(), Some("ns1"));
    Ok(())
}

#[tokio::test]
async fn status_body_is_stringly_typed() -> Result<()> {
    let log: Log = Log::default();
    let app = Router::new()
        .route(
            "/v1/template/tpl_1/status",
            put(
                |State(log): State<Log>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    record(&log, "/v1/template/tpl_1/status", &headers, Some(body)).await;
                    Json(json!({"code": 0, "message": "ok"}))
                },
            ),
        )
        .with_state(Arc::clone(&log));
    let (addr, server) = spawn_stub(app).await?;

    let session = Arc::new(MemorySessionStore::new());
    session.set_current_namespace("prod")?;
    let client = client_for(addr, session);

    client
        .templates()
        .update_status("tpl_1", GlobalStatus::Disabled)
        .await
        .map_err(anyhow::Error::from)?;

    let requests = recorded_for(&log, "/v1/template/tpl_1/status").await;
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].body,
        Some(json!({"uid": "tpl_1", "status": "DISABLED"}))
    );

    server.abort();
    Ok(())
}
