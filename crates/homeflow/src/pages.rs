//! HTML page handlers and the form endpoints behind them.
//!
//! Forms POST to an endpoint that mutates the household and answers with
//! `303 See Other` back to the page they came from.

use std::str::FromStr;
use std::sync::Arc;

use axum::Form;
use axum::Router;
use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::routing::get;
use axum::routing::post;
use serde::Deserialize;

use crate::api::ApiError;
use crate::api::AppState;
use crate::api::RoomQuery;
use crate::home::Preference;
use crate::home::RoomFilter;
use crate::views;

#[derive(Debug, Deserialize)]
struct LandingQuery {
    signed_up: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReturnForm {
    from: Option<String>,
    room: Option<String>,
}

impl ReturnForm {
    fn redirect(&self) -> Redirect {
        match self.from.as_deref() {
            Some("dashboard") => Redirect::to("/dashboard"),
            _ => devices_redirect(self.room.as_deref()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ValueForm {
    value: i64,
    room: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SignupForm {
    #[serde(default)]
    email: String,
}

fn devices_redirect(room: Option<&str>) -> Redirect {
    Redirect::to(&views::room_href(&RoomFilter::from_query(room)))
}

#[tracing::instrument(skip(state))]
async fn landing(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LandingQuery>,
) -> impl IntoResponse {
    let demo = state.home.demo().await;
    let refresh_secs = demo
        .playing
        .then(|| state.home.demo_interval().as_secs().max(1));
    let signed_up = query.signed_up.as_deref() == Some("1");
    Html(views::render_landing(demo, refresh_secs, signed_up))
}

#[tracing::instrument(skip(state))]
async fn dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let home = &state.home;
    Html(views::render_dashboard(
        home.presence().await,
        home.devices(&RoomFilter::All).await,
        home.device_stats().await,
        home.presence_interval().as_secs().max(1),
    ))
}

#[tracing::instrument(skip(state))]
async fn devices(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RoomQuery>,
) -> impl IntoResponse {
    let home = &state.home;
    let filter = RoomFilter::from_query(query.room.as_deref());
    let devices = home.devices(&filter).await;
    Html(views::render_devices(
        filter,
        home.rooms().await,
        devices,
        home.device_stats().await,
    ))
}

#[tracing::instrument(skip(state))]
async fn settings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let home = &state.home;
    Html(views::render_settings(
        home.rules().await,
        home.locations().to_vec(),
        home.preferences().await,
    ))
}

#[tracing::instrument(skip(state))]
async fn toggle_device(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<ReturnForm>,
) -> Redirect {
    state.home.toggle_device(&id).await;
    form.redirect()
}

#[tracing::instrument(skip(state))]
async fn set_device_value(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<ValueForm>,
) -> Redirect {
    state.home.set_device_value(&id, form.value).await;
    devices_redirect(form.room.as_deref())
}

#[tracing::instrument(skip(state))]
async fn toggle_rule(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Redirect {
    state.home.toggle_rule(&id).await;
    Redirect::to("/settings")
}

#[tracing::instrument(skip(state))]
async fn delete_rule(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Redirect {
    state.home.delete_rule(&id).await;
    Redirect::to("/settings")
}

#[tracing::instrument(skip(state))]
async fn toggle_preference(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Redirect, ApiError> {
    let pref = Preference::from_str(&name).map_err(|_| ApiError::UnknownPreference(name))?;
    let enabled = state.home.toggle_preference(pref).await;
    tracing::info!("Preference {} is now {}", pref, if enabled { "on" } else { "off" });
    Ok(Redirect::to("/settings"))
}

#[tracing::instrument(skip(state))]
async fn start_demo(State(state): State<Arc<AppState>>) -> Redirect {
    state.home.start_demo().await;
    Redirect::to("/#demo")
}

#[tracing::instrument(skip(form))]
async fn signup(Form(form): Form<SignupForm>) -> Redirect {
    if form.email.trim().is_empty() {
        return Redirect::to("/");
    }
    tracing::info!("Sign-up request received");
    Redirect::to("/?signed_up=1#signup")
}

/// Fallback for every unknown path
pub(crate) async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!("No route for {}", uri.path());
    (StatusCode::NOT_FOUND, Html(views::render_not_found(uri.path())))
}

pub(crate) fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(landing))
        .route("/dashboard", get(dashboard))
        .route("/devices", get(devices))
        .route("/settings", get(settings))
        .route("/devices/:id/toggle", post(toggle_device))
        .route("/devices/:id/value", post(set_device_value))
        .route("/settings/rules/:id/toggle", post(toggle_rule))
        .route("/settings/rules/:id/delete", post(delete_rule))
        .route("/settings/preferences/:name/toggle", post(toggle_preference))
        .route("/demo/start", post(start_demo))
        .route("/signup", post(signup))
}
