use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    routing::{get, patch, put},
    Json, Router,
};
use serde::Deserialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use common::types::Health;
use models::aggregator::{AggregatorReviewsResponse, FetchReviewsParams, RawFetchReviewsParams};
use models::mock;
use models::property::Property;
use models::review::Review;
use models::stats::{DashboardStats, ReviewStats};
use service::{export, properties, reviews};

use crate::errors::ApiError;
use crate::state::ServerState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn list_reviews(
    State(state): State<ServerState>,
    Query(q): Query<reviews::ReviewQuery>,
) -> Json<Vec<Review>> {
    let all = state.reviews.list().await;
    Json(reviews::filter_and_sort(&all, &q))
}

async fn review_stats(State(state): State<ServerState>) -> Json<ReviewStats> {
    let all = state.reviews.list().await;
    Json(reviews::review_stats(&all))
}

/// CSV download of the current (filtered) review selection.
async fn export_reviews(
    State(state): State<ServerState>,
    Query(q): Query<reviews::ReviewQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let all = state.reviews.list().await;
    let filtered = reviews::filter_and_sort(&all, &q);
    let csv = export::reviews_to_csv(&filtered)?;
    info!(rows = filtered.len(), "exported reviews as csv");
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"reviews.csv\""),
        ],
        csv,
    ))
}

#[derive(Debug, Deserialize)]
pub struct ApprovalInput {
    pub approved: bool,
}

#[derive(Debug, Deserialize)]
pub struct VisibilityInput {
    pub public: bool,
}

#[derive(Debug, Deserialize)]
pub struct NotesInput {
    #[serde(default)]
    pub notes: Option<String>,
}

async fn set_approval(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(input): Json<ApprovalInput>,
) -> Result<Json<Review>, ApiError> {
    let review = state.reviews.set_approved(&id, input.approved).await?;
    info!(id = %review.id, approved = input.approved, "review approval updated");
    Ok(Json(review))
}

async fn set_visibility(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(input): Json<VisibilityInput>,
) -> Result<Json<Review>, ApiError> {
    let review = state.reviews.set_public(&id, input.public).await?;
    info!(id = %review.id, public = input.public, "review visibility updated");
    Ok(Json(review))
}

async fn set_notes(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(input): Json<NotesInput>,
) -> Result<Json<Review>, ApiError> {
    let review = state.reviews.set_manager_notes(&id, input.notes).await?;
    info!(id = %review.id, has_notes = review.manager_notes.is_some(), "manager notes updated");
    Ok(Json(review))
}

/// Proxy to the aggregator. Query parameters are normalized against the
/// dashboard defaults; failures fall back to the mock payload, so this
/// route always answers 200.
async fn recent_reviews(
    State(state): State<ServerState>,
    Query(raw): Query<RawFetchReviewsParams>,
) -> Json<AggregatorReviewsResponse> {
    let params = raw.normalize();
    Json(state.aggregator.fetch_reviews_or_mock(&params).await)
}

/// Same proxy with parameters in the JSON body, merged over the defaults.
async fn recent_reviews_post(
    State(state): State<ServerState>,
    Json(params): Json<FetchReviewsParams>,
) -> Json<AggregatorReviewsResponse> {
    Json(state.aggregator.fetch_reviews_or_mock(&params).await)
}

async fn list_properties(
    State(state): State<ServerState>,
    Query(q): Query<properties::PropertyQuery>,
) -> Json<Vec<Property>> {
    Json(properties::filter_and_sort(&state.properties, &q))
}

async fn dashboard_stats() -> Json<DashboardStats> {
    Json(mock::mock_dashboard_stats())
}

/// Build the full application router: health, review moderation, the
/// aggregator proxy, and the dashboard surfaces.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/reviews", get(list_reviews))
        .route("/api/reviews/stats", get(review_stats))
        .route("/api/reviews/export", get(export_reviews))
        .route("/api/reviews/recent", get(recent_reviews).post(recent_reviews_post))
        .route("/api/reviews/:id/approval", patch(set_approval))
        .route("/api/reviews/:id/visibility", patch(set_visibility))
        .route("/api/reviews/:id/notes", put(set_notes))
        .route("/api/properties", get(list_properties))
        .route("/api/dashboard/stats", get(dashboard_stats));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
