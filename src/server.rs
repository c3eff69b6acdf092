//! HTTP surface
//!
//! Stateless JSON/HTML endpoints over the typing calculators.

use anyhow::Result;
use axum::{
    extract::{Json, Path},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::ap::{all_relations, derive_shadow_types, relation};
use crate::config::AppConfig;
use crate::error::TypingError;
use crate::format::{HtmlFormatter, JsonFormatter};
use crate::triads::get_triads;

struct ServerError(TypingError);

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = if self.0.is_user_error() {
            warn!("Rejected request: {}", self.0);
            StatusCode::BAD_REQUEST
        } else {
            error!("Lookup table gap: {}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}

impl From<TypingError> for ServerError {
    fn from(err: TypingError) -> Self {
        Self(err)
    }
}

/// All routes, with request tracing.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/shadow/{ap_type}/{subtype}", get(shadow_handler))
        .route("/shadow/{ap_type}/{subtype}/html", get(shadow_html_handler))
        .route("/intertype/{ap_type1}/{ap_type2}", get(intertype_handler))
        .route("/intertypes/{ap_type}", get(intertypes_handler))
        .route("/triads/{input}", get(triads_handler))
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(config: &AppConfig) -> Result<()> {
    info!("Starting AP typing server...");

    let listener = tokio::net::TcpListener::bind(&config.server_addr).await?;
    info!("Server listening at http://{}", config.server_addr);
    axum::serve(listener, router()).await?;

    Ok(())
}

async fn shadow_handler(Path((ap_type, subtype)): Path<(String, String)>) -> Result<Json<Value>, ServerError> {
    info!("Request: shadow, ap_type=\"{}\", subtype=\"{}\"", ap_type, subtype);
    let sequence = derive_shadow_types(&ap_type, &subtype)?;
    Ok(Json(JsonFormatter::shadow(&sequence)))
}

async fn shadow_html_handler(Path((ap_type, subtype)): Path<(String, String)>) -> Result<Html<String>, ServerError> {
    info!("Request: shadow html, ap_type=\"{}\", subtype=\"{}\"", ap_type, subtype);
    let sequence = derive_shadow_types(&ap_type, &subtype)?;
    Ok(Html(HtmlFormatter::shadow(&sequence)))
}

async fn intertype_handler(Path((first, second)): Path<(String, String)>) -> Result<Json<Value>, ServerError> {
    info!("Request: intertype, ap_type1=\"{}\", ap_type2=\"{}\"", first, second);
    Ok(Json(JsonFormatter::relation(&relation(&first, &second)?)))
}

async fn intertypes_handler(Path(ap_type): Path<String>) -> Result<Json<Value>, ServerError> {
    info!("Request: intertypes, ap_type=\"{}\"", ap_type);
    Ok(Json(JsonFormatter::intertypes(&all_relations(&ap_type)?)))
}

async fn triads_handler(Path(input): Path<String>) -> Result<Json<Value>, ServerError> {
    info!("Request: triads, input=\"{}\"", input);
    Ok(Json(JsonFormatter::triads(&get_triads(&input)?)))
}
