//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::autocomplete::possible_stations;
use crate::directory::{DirectoryError, StationDirectory};
use crate::ekispert::RangeApi;
use crate::search::HandlerOutcome;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<D, A>(state: AppState<D, A>) -> Router
where
    D: StationDirectory + 'static,
    A: RangeApi + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/range-search", post(range_search::<D, A>))
        .route("/incremental-search", get(incremental_search::<D, A>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Stations reachable from a set of base stations within their budgets.
async fn range_search<D, A>(State(state): State<AppState<D, A>>, body: Bytes) -> HandlerOutcome
where
    D: StationDirectory + 'static,
    A: RangeApi + 'static,
{
    state.search.run(&body).await
}

/// Station names starting with the typed text.
async fn incremental_search<D, A>(
    State(state): State<AppState<D, A>>,
    Query(req): Query<IncrementalSearchRequest>,
) -> Result<Json<PossibleStationsResponse>, AppError>
where
    D: StationDirectory + 'static,
    A: RangeApi + 'static,
{
    let text = req.base_station_name.unwrap_or_default();
    let names = possible_stations(state.directory.as_ref(), &text).await?;

    Ok(Json(PossibleStationsResponse {
        possible_stations: names,
    }))
}

impl IntoResponse for HandlerOutcome {
    fn into_response(self) -> Response {
        match self {
            HandlerOutcome::Found(result) => (StatusCode::OK, Json(result)).into_response(),
            // Rejected input is a normal answer, not an HTTP error.
            HandlerOutcome::Rejected { .. } => {
                let message = self.rejection_message().unwrap_or_default();
                (StatusCode::OK, Json(ErrorResponse::new(message))).into_response()
            }
            HandlerOutcome::Failed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::system_error()),
            )
                .into_response(),
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Internal { message: String },
}

impl From<DirectoryError> for AppError {
    fn from(e: DirectoryError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Internal { message } = self;

        // Details go to the log only.
        warn!(error = %message, "request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::system_error()),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::StationTable;
    use crate::ekispert::MockRangeApi;
    use crate::search::ApiKeys;
    use crate::testing::{CountingDirectory, exhausted_payload, points_payload, sample_table};
    use axum::body::Body;
    use axum::http::{Request, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app(api: MockRangeApi) -> Router {
        create_router(AppState::new(
            sample_table(),
            api,
            ApiKeys::parse("primary,fallback"),
        ))
    }

    fn post_search(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/range-search")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn read_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_ok() {
        let response = app(MockRangeApi::new()).oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn range_search_success() {
        let api = MockRangeApi::new().respond_with(points_payload(&[("津田沼", "22370")], 1));

        let response = app(api)
            .oneshot(post_search(json!({
                "SearchConditions": [{"BaseStationName": "津田沼", "UpperMinute": "20"}]
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        let stations = body["Stations"].as_array().unwrap();
        assert_eq!(stations.len(), 1);
        assert!(stations.iter().all(|s| s["Cost"].is_array()));
    }

    #[tokio::test]
    async fn range_search_rejection_is_ok_status() {
        let response = app(MockRangeApi::new())
            .oneshot(post_search(json!({
                "SearchConditions": [
                    {"BaseStationName": "津田沼", "UpperMinute": "20"},
                    {"BaseStationName": "", "UpperMinute": "10"}
                ]
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({"ErrorMessage": "検索条件2: 起点駅を入力してください"})
        );
    }

    #[tokio::test]
    async fn range_search_with_rotated_key() {
        let api = MockRangeApi::new()
            .respond_with(exhausted_payload())
            .respond_with(points_payload(&[("千葉", "22361"), ("津田沼", "22370")], 2));

        let response = app(api)
            .oneshot(post_search(json!({
                "SearchConditions": [
                    {"BaseStationName": "津田沼", "UpperMinute": "20"},
                    {"BaseStationName": "千葉", "UpperMinute": "10"}
                ]
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["Stations"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn range_search_system_error() {
        let response = app(MockRangeApi::new())
            .oneshot(post_search(json!({"unexpected": []})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            read_json(response).await,
            json!({"ErrorMessage": "システムエラー"})
        );
    }

    #[tokio::test]
    async fn incremental_search_matches() {
        let response = app(MockRangeApi::new())
            .oneshot(get("/incremental-search?baseStationName=%E5%8D%83"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        let names = body["PossibleStations"].as_array().unwrap();
        assert!(!names.is_empty());
    }

    #[tokio::test]
    async fn incremental_search_no_match_or_empty() {
        for uri in [
            "/incremental-search?baseStationName=aaa",
            "/incremental-search?baseStationName=",
            "/incremental-search",
        ] {
            let response = app(MockRangeApi::new()).oneshot(get(uri)).await.unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert_eq!(read_json(response).await, json!({"PossibleStations": []}));
        }
    }

    #[tokio::test]
    async fn incremental_search_directory_failure() {
        let app = create_router(AppState::new(
            CountingDirectory::unavailable(),
            MockRangeApi::new(),
            ApiKeys::parse("primary"),
        ));

        let response = app
            .oneshot(get("/incremental-search?baseStationName=aaa"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            read_json(response).await,
            json!({"ErrorMessage": "システムエラー"})
        );
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let request = Request::builder()
            .uri("/incremental-search?baseStationName=aaa")
            .header(header::ORIGIN, "https://example.com")
            .body(Body::empty())
            .unwrap();

        let response = app(MockRangeApi::new()).oneshot(request).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn empty_table_still_serves() {
        let app = create_router(AppState::new(
            StationTable::from_records(Vec::new()),
            MockRangeApi::new(),
            ApiKeys::parse("primary"),
        ));

        let response = app
            .oneshot(post_search(json!({
                "SearchConditions": [{"BaseStationName": "千葉", "UpperMinute": "10"}]
            })))
            .await
            .unwrap();

        assert_eq!(
            read_json(response).await,
            json!({"ErrorMessage": "検索条件1: 千葉駅は存在しません"})
        );
    }
}
