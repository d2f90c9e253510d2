use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::AppState;
use crate::errors::AppError;
use crate::hls::{parser, resolver};
use crate::models::QualityMap;

#[derive(Debug, Deserialize)]
pub struct VideoQueryParams {
    pub id: Option<String>,
    pub url: Option<String>,
}

/// Resolve a video id or master playlist URL into a quality -> URL map
pub async fn get_video(
    State(state): State<AppState>,
    Query(params): Query<VideoQueryParams>,
) -> Result<Json<QualityMap>, AppError> {
    // Decide source: metadata lookup (by id) or master playlist URL (direct)
    let master_url = match (&params.id, &params.url) {
        (Some(id), _) => {
            let metadata = state.upstream.fetch_metadata(id).await?;
            resolver::resolve(&metadata)?
        }
        (None, Some(url)) => url.clone(),
        (None, None) => return Err(AppError::MissingParam),
    };

    info!("Resolving qualities for master playlist: {}", master_url);

    let playlist_text = state.upstream.fetch_playlist(&master_url).await?;
    let qualities = parser::parse(&playlist_text, &master_url)?;

    info!("Found {} quality variant(s)", qualities.len());

    Ok(Json(qualities))
}

pub async fn index() -> Json<Value> {
    Json(json!({ "message": "Welcome to the HLS Resolver API" }))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "hls-resolver",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
