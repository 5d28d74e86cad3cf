use std::convert::Infallible;
use std::sync::Arc;

use score_types::{ApiError, EditRequest, ScoreboardRequest};
use tracing::{debug, warn};
use warp::Filter;
use warp::http::StatusCode;

use crate::config::Config;
use crate::error::ServerError;

pub mod config;
pub mod error;
pub mod scoreboard;

/// Largest accepted request body; a full match of sections fits comfortably.
const MAX_BODY_BYTES: u64 = 4 * 1024 * 1024;

pub fn create_routes(
    config: Arc<Config>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let config_filter = warp::any().map({
        let config = config.clone();
        move || config.clone()
    });

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    // Scores, boundaries and match tally for a list of sections
    let scoreboard = warp::path!("api" / "scoreboard")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(config_filter.clone())
        .and_then(handle_scoreboard_request);

    // Manual increment/decrement from the score editor
    let edit = warp::path!("api" / "score" / "edit")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and_then(handle_edit_request);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST"]);

    health
        .or(scoreboard)
        .or(edit)
        .recover(handle_rejection)
        .with(cors)
        .with(warp::log("score_server"))
}

async fn handle_scoreboard_request(
    request: ScoreboardRequest,
    config: Arc<Config>,
) -> Result<impl warp::Reply, warp::Rejection> {
    debug!(
        sections = request.sections.len(),
        target_id = ?request.target_id,
        "Building scoreboard"
    );

    let response = scoreboard::build_scoreboard(&request, &config);
    Ok(warp::reply::with_status(
        warp::reply::json(&response),
        StatusCode::OK,
    ))
}

async fn handle_edit_request(request: EditRequest) -> Result<impl warp::Reply, warp::Rejection> {
    match scoreboard::apply_edit(&request) {
        Ok(state) => Ok(warp::reply::with_status(
            warp::reply::json(&state),
            StatusCode::OK,
        )),
        Err(err) => Err(warp::reject::custom(err)),
    }
}

async fn handle_rejection(rejection: warp::Rejection) -> Result<impl warp::Reply, Infallible> {
    let error = ServerError::from_rejection(&rejection);
    let status = error.status_code();

    if status.is_server_error() {
        tracing::error!("Unhandled rejection: {:?}", rejection);
    } else if status != StatusCode::NOT_FOUND {
        warn!("Rejected request: {}", error);
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&ApiError::new(error.to_string())),
        status,
    ))
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use score_types::{EditableScoreState, GameScore, PointValue, ScoreboardResponse, Side};

    fn create_test_app()
    -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        create_routes(Arc::new(Config::default()))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = warp::test::request()
            .method("GET")
            .path("/health")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), "OK");
    }

    #[tokio::test]
    async fn test_scoreboard_endpoint() {
        let app = create_test_app();

        let response = warp::test::request()
            .method("POST")
            .path("/api/scoreboard")
            .json(&serde_json::json!({
                "sections": [
                    {"id": 1, "summary": {"player_won_point": "top"}},
                    {"id": 2, "summary": {"player_won_point": "top"}},
                    {"id": 3, "summary": {"player_won_point": "top"}},
                    {"id": 4, "summary": {"player_won_point": "top"}}
                ],
                "target_id": 3
            }))
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        let body: ScoreboardResponse = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body.boundaries, vec![1, 4]);
        assert_eq!(
            body.score,
            GameScore::new(PointValue::Forty, PointValue::Love)
        );
    }

    #[tokio::test]
    async fn test_edit_endpoint() {
        let app = create_test_app();

        let response = warp::test::request()
            .method("POST")
            .path("/api/score/edit")
            .json(&serde_json::json!({
                "state": {"score": {"top": "40", "bottom": "30"}, "previous": null},
                "action": {"type": "Increment", "side": "top"}
            }))
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        let state: EditableScoreState = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(state.score, GameScore::first_point_for(Side::Top));
        assert!(state.can_undo());
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = create_test_app();

        let response = warp::test::request()
            .method("POST")
            .path("/api/scoreboard")
            .header("content-type", "application/json")
            .body("{\"sections\": [{\"id\": \"one\"}]}")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 400);
        let body: ApiError = serde_json::from_slice(response.body()).unwrap();
        assert!(body.error.starts_with("Invalid request body"));
    }

    #[tokio::test]
    async fn test_invalid_edit_state_is_bad_request() {
        let app = create_test_app();

        let response = warp::test::request()
            .method("POST")
            .path("/api/score/edit")
            .json(&serde_json::json!({
                "state": {"score": {"top": "AD", "bottom": "AD"}},
                "action": {"type": "Decrement", "side": "bottom"}
            }))
            .reply(&app)
            .await;

        assert_eq!(response.status(), 400);
        let body: ApiError = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body.error, "Invalid score: AD-AD");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = create_test_app();

        let response = warp::test::request()
            .method("GET")
            .path("/api/unknown")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 404);
    }
}
