use axum::extract::{Query, State};
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::{Pagination, PaginationMeta};
use crate::models::{
    dates, HistoryEntry, PlayerProfile, ScoredTournament, TournamentCandidate, TournamentFilters,
};

#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub player: Option<PlayerProfile>,

    #[serde(default)]
    pub tournaments: Vec<TournamentCandidate>,

    #[serde(default)]
    pub history: Vec<HistoryEntry>,

    #[serde(default)]
    pub filters: TournamentFilters,

    /// Reference date for the "this week" filter; defaults to today
    #[serde(
        default,
        alias = "asOf",
        deserialize_with = "dates::lenient_date"
    )]
    pub as_of: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<ScoredTournament>,
    pub pagination: PaginationMeta,
}

pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendationParams>,
    Json(request): Json<RecommendationRequest>,
) -> Json<RecommendationResponse> {
    let today = request.as_of.unwrap_or_else(|| Local::now().date_naive());

    let ranked = state.recommender.recommend_filtered(
        request.player.as_ref(),
        &request.tournaments,
        &request.filters,
        &request.history,
        today,
    );

    let default_size = u32::try_from(state.default_limit).unwrap_or(u32::MAX);
    let pagination = Pagination::new(params.page, params.page_size.or(Some(default_size)));
    let meta = PaginationMeta::new(&pagination, ranked.len() as u32);

    tracing::debug!(
        "Recommending {} of {} candidates (page {})",
        ranked.len(),
        request.tournaments.len(),
        pagination.page
    );

    Json(RecommendationResponse {
        recommendations: pagination.apply(ranked),
        pagination: meta,
    })
}
