use axum::Json;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::models::{dates, ComparisonReport, DiversityReport, PlayerProfile, TournamentCandidate};
use crate::reports;

#[derive(Debug, Deserialize)]
pub struct DiversityRequest {
    pub tournament: TournamentCandidate,

    #[serde(
        default,
        alias = "asOf",
        deserialize_with = "dates::lenient_date"
    )]
    pub as_of: Option<NaiveDate>,
}

pub async fn diversity(Json(request): Json<DiversityRequest>) -> Json<DiversityReport> {
    let today = request.as_of.unwrap_or_else(|| Local::now().date_naive());
    Json(reports::diversity_on(&request.tournament, today))
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub player: Option<PlayerProfile>,
    pub tournament: TournamentCandidate,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    /// Null when the tournament has no participants
    pub comparison: Option<ComparisonReport>,
}

pub async fn compare(
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    let player = request
        .player
        .ok_or_else(|| ApiError::BadRequest("player is required".to_string()))?;

    Ok(Json(CompareResponse {
        comparison: reports::compare(&player, &request.tournament),
    }))
}

#[cfg(test)]
mod tests {
    use crate::api::testing::{post_json, test_app};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_diversity_even_split() {
        let mut participants = Vec::new();
        for first in ["2026-09-01", "2026-03-01", "2023-01-01"] {
            for _ in 0..3 {
                participants.push(json!({"first_tournament_date": first}));
            }
        }
        let body = json!({
            "tournament": {"city": "Pune", "participants": participants},
            "as_of": "2026-10-19"
        });

        let (status, json) = post_json(test_app(), "/api/reports/diversity", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["new_players"], 3);
        assert_eq!(json["active_players"], 3);
        assert_eq!(json["veteran_players"], 3);
        assert_eq!(json["diversity_score"], 100);
    }

    #[tokio::test]
    async fn test_diversity_empty() {
        let body = json!({"tournament": {"city": "Pune"}});

        let (status, json) = post_json(test_app(), "/api/reports/diversity", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["diversity_score"], 0);
        assert_eq!(json["description"], "No participants yet");
    }

    #[tokio::test]
    async fn test_compare() {
        let body = json!({
            "player": {"city": "Pune", "matchesPlayed": 60, "wins": 40, "totalTournaments": 9},
            "tournament": {
                "city": "Pune",
                "participants": [
                    {"matches_played": 10, "wins": 4, "total_tournaments": 2},
                    {"matches_played": 30, "wins": 21, "total_tournaments": 6}
                ]
            }
        });

        let (status, json) = post_json(test_app(), "/api/reports/compare", body).await;

        assert_eq!(status, StatusCode::OK);
        let comparison = &json["comparison"];
        assert_eq!(comparison["average"]["matches"], 20.0);
        assert_eq!(comparison["participant_count"], 2);
        assert_eq!(comparison["above_avg_matches"], true);
        assert_eq!(comparison["overall_above_avg"], true);
    }

    #[tokio::test]
    async fn test_compare_no_participants_is_null() {
        let body = json!({
            "player": {"city": "Pune", "matchesPlayed": 10},
            "tournament": {"city": "Pune", "participants": []}
        });

        let (status, json) = post_json(test_app(), "/api/reports/compare", body).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["comparison"].is_null());
    }

    #[tokio::test]
    async fn test_compare_requires_player() {
        let body = json!({"tournament": {"city": "Pune"}});

        let (status, json) = post_json(test_app(), "/api/reports/compare", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }
}
