//! HTTP front end for the annealing engine.
//!
//! A thin, stateless warp layer: decode the request, run one search
//! synchronously, encode the outcome. Nothing persists between requests.

use serde::{Deserialize, Serialize};
use tracing::info;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::anneal::{AnnealConfig, AnnealOutcome, AnnealRunner, GroupingProblem};
use crate::solution::{ExclusionPair, StudentId};

/// Request body for `POST /groups`.
///
/// The annealing parameters are optional; the defaults match
/// [`AnnealConfig::default`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupsRequest {
    pub students: Vec<u64>,
    pub num_groups: usize,
    #[serde(default)]
    pub exclusions: Vec<ExclusionPair>,
    #[serde(default = "default_max_temperature")]
    pub max_temperature: f64,
    #[serde(default = "default_min_temperature")]
    pub min_temperature: f64,
    #[serde(default = "default_steps")]
    pub steps: usize,
}

fn default_max_temperature() -> f64 {
    AnnealConfig::default().max_temperature
}

fn default_min_temperature() -> f64 {
    AnnealConfig::default().min_temperature
}

fn default_steps() -> usize {
    AnnealConfig::default().steps
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// All routes served by `grouper-server`.
pub fn routes() -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let groups = warp::path("groups")
        .and(warp::post())
        .and(warp::body::json())
        .map(create_groups);
    let health = warp::path("health").and(warp::get()).map(|| "ok");
    groups.or(health)
}

fn create_groups(request: GroupsRequest) -> warp::reply::Response {
    let students: Vec<StudentId> = request.students.iter().copied().map(StudentId::new).collect();

    let problem = match GroupingProblem::new(students, request.num_groups, request.exclusions) {
        Ok(problem) => problem,
        Err(err) => return bad_request(err.to_string()),
    };

    let config = AnnealConfig::default()
        .with_max_temperature(request.max_temperature)
        .with_min_temperature(request.min_temperature)
        .with_steps(request.steps);
    if let Err(err) = config.validate() {
        return bad_request(err);
    }

    let result = AnnealRunner::run(&problem, &config);
    info!(
        score = result.best_score,
        accepted = result.accepted_moves,
        skipped = result.skipped_moves,
        "grouping request served"
    );

    warp::reply::json(&AnnealOutcome::new(&problem, &result)).into_response()
}

fn bad_request(error: String) -> warp::reply::Response {
    warp::reply::with_status(
        warp::reply::json(&ErrorBody { error }),
        StatusCode::BAD_REQUEST,
    )
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_groups_round_trip() {
        let body = json!({
            "students": [1, 2, 3, 4],
            "numGroups": 2,
            "exclusions": [{"a": 1, "b": 2}, {"a": 3, "b": 4}],
            "steps": 1000,
        });

        let response = warp::test::request()
            .method("POST")
            .path("/groups")
            .json(&body)
            .reply(&routes())
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let outcome: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(outcome["score"], 0.0);
        assert_eq!(outcome["violations"].as_array().unwrap().len(), 0);
        assert_eq!(outcome["groups"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_zero_groups_is_a_client_error() {
        let body = json!({
            "students": [1, 2],
            "numGroups": 0,
        });

        let response = warp::test::request()
            .method("POST")
            .path("/groups")
            .json(&body)
            .reply(&routes())
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: Value = serde_json::from_slice(response.body()).unwrap();
        assert!(error["error"].as_str().unwrap().contains("positive"));
    }

    #[tokio::test]
    async fn test_unknown_student_in_pair_is_a_client_error() {
        let body = json!({
            "students": [1, 2],
            "numGroups": 2,
            "exclusions": [{"a": 1, "b": 99}],
        });

        let response = warp::test::request()
            .method("POST")
            .path("/groups")
            .json(&body)
            .reply(&routes())
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_annealing_parameters_are_a_client_error() {
        let body = json!({
            "students": [1, 2],
            "numGroups": 2,
            "steps": 0,
        });

        let response = warp::test::request()
            .method("POST")
            .path("/groups")
            .json(&body)
            .reply(&routes())
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let response = warp::test::request()
            .method("POST")
            .path("/groups")
            .body("not json")
            .reply(&routes())
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health() {
        let response = warp::test::request()
            .method("GET")
            .path("/health")
            .reply(&routes())
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body().as_ref(), b"ok");
    }
}
