use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::Path as UrlPath;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use serde::Deserialize;
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HttpConfig;
use crate::home::Home;
use crate::home::RoomFilter;
use crate::pages;

/// Response for the /v1/ping endpoint
#[derive(Serialize)]
struct PingResponse {
    status: String,
}

/// Response for the /v1/info endpoint
#[derive(Serialize)]
struct InfoResponse {
    version: String,
    hostname: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Shared application state
pub struct AppState {
    pub(crate) version: &'static str,
    pub(crate) home: Arc<Home>,
}

impl AppState {
    pub fn new(home: Arc<Home>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            home,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no device with id '{0}'")]
    DeviceNotFound(String),

    #[error("no automation rule with id '{0}'")]
    RuleNotFound(String),

    #[error("unknown preference '{0}'")]
    UnknownPreference(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!("Request failed: {}", self);
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RoomQuery {
    pub(crate) room: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ValueRequest {
    value: i64,
}

/// Handler for GET /v1/ping
#[tracing::instrument]
async fn ping() -> impl IntoResponse {
    tracing::debug!("Handling /v1/ping request");
    (
        StatusCode::OK,
        Json(PingResponse {
            status: "ok".to_string(),
        }),
    )
}

/// Handler for GET /v1/info
#[tracing::instrument(skip(state))]
async fn info(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    tracing::debug!("Handling /v1/info request");

    let hostname = hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string());

    (
        StatusCode::OK,
        Json(InfoResponse {
            version: state.version.to_string(),
            hostname,
        }),
    )
}

#[tracing::instrument(skip(state))]
async fn list_devices(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RoomQuery>,
) -> impl IntoResponse {
    let filter = RoomFilter::from_query(query.room.as_deref());
    Json(state.home.devices(&filter).await)
}

#[tracing::instrument(skip(state))]
async fn toggle_device(
    State(state): State<Arc<AppState>>,
    UrlPath(id): UrlPath<String>,
) -> Result<impl IntoResponse, ApiError> {
    match state.home.toggle_device(&id).await {
        Some(device) => Ok(Json(device)),
        None => Err(ApiError::DeviceNotFound(id)),
    }
}

#[tracing::instrument(skip(state, body))]
async fn set_device_value(
    State(state): State<Arc<AppState>>,
    UrlPath(id): UrlPath<String>,
    Json(body): Json<ValueRequest>,
) -> Result<impl IntoResponse, ApiError> {
    match state.home.set_device_value(&id, body.value).await {
        Some(device) => Ok(Json(device)),
        None => Err(ApiError::DeviceNotFound(id)),
    }
}

#[tracing::instrument(skip(state))]
async fn list_rules(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.home.rules().await)
}

#[tracing::instrument(skip(state))]
async fn toggle_rule(
    State(state): State<Arc<AppState>>,
    UrlPath(id): UrlPath<String>,
) -> Result<impl IntoResponse, ApiError> {
    match state.home.toggle_rule(&id).await {
        Some(rule) => Ok(Json(rule)),
        None => Err(ApiError::RuleNotFound(id)),
    }
}

#[tracing::instrument(skip(state))]
async fn delete_rule(
    State(state): State<Arc<AppState>>,
    UrlPath(id): UrlPath<String>,
) -> Result<impl IntoResponse, ApiError> {
    match state.home.delete_rule(&id).await {
        Some(rule) => Ok(Json(rule)),
        None => Err(ApiError::RuleNotFound(id)),
    }
}

#[tracing::instrument(skip(state))]
async fn list_locations(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.home.locations().to_vec())
}

#[tracing::instrument(skip(state))]
async fn presence(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.home.presence().await)
}

#[tracing::instrument(skip(state))]
async fn demo(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.home.demo().await)
}

#[tracing::instrument(skip(state))]
async fn start_demo(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.home.start_demo().await)
}

/// Create the router: the `/v1` JSON API, the HTML pages and static assets
pub fn create_router(state: Arc<AppState>, assets_dir: &Path) -> Router {
    Router::new()
        .route("/v1/ping", get(ping))
        .route("/v1/info", get(info))
        .route("/v1/devices", get(list_devices))
        .route("/v1/devices/:id/toggle", post(toggle_device))
        .route("/v1/devices/:id/value", put(set_device_value))
        .route("/v1/automations", get(list_rules))
        .route("/v1/automations/:id", axum::routing::delete(delete_rule))
        .route("/v1/automations/:id/toggle", post(toggle_rule))
        .route("/v1/locations", get(list_locations))
        .route("/v1/presence", get(presence))
        .route("/v1/demo", get(demo))
        .route("/v1/demo/start", post(start_demo))
        .merge(pages::routes())
        .nest_service("/assets", ServeDir::new(assets_dir))
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server
///
/// Runs until `shutdown_rx` fires, then finishes in-flight requests.
pub async fn serve(
    http: HttpConfig,
    home: Arc<Home>,
    shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(home));
    let app = create_router(state, &http.assets_dir);

    let addr: SocketAddr = format!("{}:{}", http.listen, http.port).parse()?;
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_rx.await.ok();
            tracing::info!("HTTP server shutting down gracefully");
        })
        .await?;

    Ok(())
}
