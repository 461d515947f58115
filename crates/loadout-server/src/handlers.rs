//! REST endpoint handlers for the advisor API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/health` | Liveness probe |
//! | `GET` | `/api/weapons` | Catalog weapons with derived features and mod families |
//! | `GET` | `/api/advisor` | Next visible batch plus the follow-up link |
//! | `GET` | `/api/advisor/ranked` | Full ranking for a questionnaire |
//!
//! Both advisor endpoints take the share-link query (`loc`, `sq`, `fc`,
//! `rg`, `st`, `wr`, `dbg`, `sh`). Unreadable advisor tokens fall back to
//! their defaults; only the batch size `n` can be rejected.

// Axum handlers must be async even when the engine call is synchronous.
#![allow(clippy::unused_async)]

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, RawQuery, State};
use axum::http::Uri;
use axum::response::IntoResponse;
use loadout_advisor::{parse_query, serialize_query};
use loadout_types::{
    AdvisorEmptyState, AdvisorInputs, PairRecommendation, PartialAdvisorInputs,
    RankedRecommendations, ShuffleState,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Largest batch a client may request.
pub const MAX_BATCH_SIZE: usize = 10;

// ---------------------------------------------------------------------------
// Query parameter and response structs
// ---------------------------------------------------------------------------

/// Extra parameters accepted by `GET /api/advisor`.
#[derive(Debug, Deserialize)]
pub struct BatchQuery {
    /// Pairs per batch. Clamped to `1..=10`.
    pub n: Option<String>,
}

/// Body of `GET /api/advisor`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorResponse {
    /// The questionnaire after defaults were applied.
    pub inputs: AdvisorInputs,
    /// The visible batch.
    pub recommendations: Vec<PairRecommendation>,
    /// Why the batch is empty, when it is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<AdvisorEmptyState>,
    /// Cursor after this batch.
    pub shuffle_state: ShuffleState,
    /// Query string that draws the following batch.
    pub next: String,
}

fn batch_size(raw: Option<&str>, default: usize) -> Result<usize, ApiError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let size: usize = raw.trim().parse().map_err(|err| {
        ApiError::InvalidQuery(format!("n must be a non-negative integer, got {raw:?}: {err}"))
    })?;
    Ok(size.clamp(1, MAX_BATCH_SIZE))
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// GET /api/weapons
// ---------------------------------------------------------------------------

/// List every catalog weapon with its derived features, plus the mod
/// families the loadout editor offers for them.
pub async fn list_weapons(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let features = state.advisor.features();
    Json(serde_json::json!({
        "count": features.len(),
        "weapons": features,
        "mods": state.advisor.catalog().families(),
    }))
}

// ---------------------------------------------------------------------------
// GET /api/advisor
// ---------------------------------------------------------------------------

/// Draw the next batch for the questionnaire in the query string.
///
/// A well-formed `sh` cursor resumes the shuffle where the previous link
/// left off; otherwise the draw starts a fresh cycle.
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
    Query(params): Query<BatchQuery>,
) -> Result<Json<AdvisorResponse>, ApiError> {
    let advisor = &state.advisor;
    let size = batch_size(
        params.n.as_deref(),
        advisor.config().shuffle.default_batch_size,
    )?;
    let decoded = parse_query(query.as_deref().unwrap_or_default());

    let ranked = advisor.rank(&PartialAdvisorInputs::from(decoded.inputs), None);
    let resumed = decoded
        .shuffle
        .map(|cursor| ShuffleState::resume(&ranked.ranked, cursor));
    let result = advisor.draw(&ranked, resumed, Some(size));
    let next = serialize_query(&ranked.inputs, Some(result.shuffle_state.cursor()));

    debug!(
        batch = result.recommendations.len(),
        ranked = ranked.ranked.len(),
        next = %next,
        "advisor batch served"
    );
    Ok(Json(AdvisorResponse {
        inputs: ranked.inputs,
        recommendations: result.recommendations,
        empty_state: result.empty_state,
        shuffle_state: result.shuffle_state,
        next,
    }))
}

// ---------------------------------------------------------------------------
// GET /api/advisor/ranked
// ---------------------------------------------------------------------------

/// Return the full ranking for the questionnaire in the query string.
pub async fn ranked(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Json<RankedRecommendations> {
    let decoded = parse_query(query.as_deref().unwrap_or_default());
    Json(
        state
            .advisor
            .rank(&PartialAdvisorInputs::from(decoded.inputs), None),
    )
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// Any unrouted path.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_owned())
}
