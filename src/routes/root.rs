use crate::db::database::Database;
use crate::handler::ranking_handler;
use crate::middleware::cors::{cors, CorsState};
use crate::routes::ranking;
use crate::state::ranking_state::RankingState;
use axum::routing::{get, IntoMakeService};
use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn routes(db_conn: Arc<Database>, cors_state: CorsState) -> IntoMakeService<Router> {
    app(RankingState::new(&db_conn), cors_state).into_make_service()
}

/// 组装全部路由，测试里可以换成 mock 仓库
pub fn app(ranking_state: RankingState, cors_state: CorsState) -> Router {
    let merged_router = Router::new()
        .merge(ranking::routes().with_state(ranking_state))
        .merge(Router::new().route("/health", get(ranking_handler::health)));

    Router::new()
        .nest("/api", merged_router)
        .layer(middleware::from_fn_with_state(cors_state, cors))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ranking::RankingEntry;
    use crate::repository::ranking_repository::MockRankingRepositoryTrait;
    use axum::{
        body::Body,
        http::{self, Request, StatusCode},
    };
    use chrono::{TimeZone, Utc};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const ORIGIN: &str = "http://localhost:3000";

    fn test_app(repo: MockRankingRepositoryTrait) -> Router {
        app(
            RankingState::with_repository(Arc::new(repo)),
            CorsState::new(ORIGIN).unwrap(),
        )
    }

    fn entry(id: i32, battle_tag: &str, score: i32, difficulty_level: i32, minute: u32) -> RankingEntry {
        RankingEntry {
            id,
            battle_tag: battle_tag.to_string(),
            score,
            difficulty_level,
            date_game: Utc.with_ymd_and_hms(2025, 1, 1, 10, minute, 0).unwrap(),
        }
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        response.into_body().collect().await.unwrap().to_bytes().to_vec()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .uri("/api/rankings")
            .method(http::Method::POST)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = test_app(MockRankingRepositoryTrait::new())
            .oneshot(get_request("/api/health"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"OK");
    }

    #[tokio::test]
    async fn rankings_without_filter_query_every_difficulty() {
        let mut repo = MockRankingRepositoryTrait::new();
        repo.expect_fetch_rankings()
            .withf(|difficulty| difficulty.is_none())
            .times(1)
            .returning(|_| {
                Ok(vec![
                    entry(2, "Zed#5678", 150, 2, 5),
                    entry(3, "Ann#0001", 120, 1, 6),
                    entry(1, "Hero#1234", 100, 2, 0),
                ])
            });

        let response = test_app(repo).oneshot(get_request("/api/rankings")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let tags: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["battle_tag"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(tags, vec!["Zed#5678", "Ann#0001", "Hero#1234"]);
    }

    #[tokio::test]
    async fn rankings_by_difficulty_pass_filter_and_keep_order() {
        let mut repo = MockRankingRepositoryTrait::new();
        repo.expect_fetch_rankings()
            .withf(|difficulty| *difficulty == Some(2))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    entry(2, "Zed#5678", 150, 2, 5),
                    entry(1, "Hero#1234", 100, 2, 0),
                ])
            });

        let response = test_app(repo).oneshot(get_request("/api/rankings/2")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!([
                {
                    "id": 2,
                    "battle_tag": "Zed#5678",
                    "score": 150,
                    "difficulty_level": 2,
                    "date_game": "2025-01-01T10:05:00Z"
                },
                {
                    "id": 1,
                    "battle_tag": "Hero#1234",
                    "score": 100,
                    "difficulty_level": 2,
                    "date_game": "2025-01-01T10:00:00Z"
                }
            ])
        );
    }

    #[tokio::test]
    async fn empty_difficulty_returns_empty_list() {
        let mut repo = MockRankingRepositoryTrait::new();
        repo.expect_fetch_rankings()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let response = test_app(repo).oneshot(get_request("/api/rankings/9")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn non_integer_difficulty_is_bad_request_without_store_read() {
        let mut repo = MockRankingRepositoryTrait::new();
        repo.expect_fetch_rankings().times(0);

        let response = test_app(repo)
            .oneshot(get_request("/api/rankings/hard"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"code": 20005, "msg": "Invalid difficulty parameter"})
        );
    }

    #[tokio::test]
    async fn store_read_failure_is_generic_500() {
        let mut repo = MockRankingRepositoryTrait::new();
        repo.expect_fetch_rankings()
            .times(1)
            .returning(|_| Err(sqlx::Error::Protocol("relation \"ranking\" does not exist".into())));

        let response = test_app(repo).oneshot(get_request("/api/rankings")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body, json!({"code": 13001, "msg": "Failed to fetch rankings"}));
        assert!(!body.to_string().contains("relation"));
    }

    #[tokio::test]
    async fn submit_ranking_is_created_with_empty_body() {
        let mut repo = MockRankingRepositoryTrait::new();
        repo.expect_insert_ranking()
            .withf(|payload| {
                payload.battle_tag == "Hero#1234"
                    && payload.score == 100
                    && payload.difficulty_level == 2
            })
            .times(1)
            .returning(|_| Ok(()));

        let response = test_app(repo)
            .oneshot(post_json(
                r#"{"battle_tag":"Hero#1234","score":100,"difficulty_level":2}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn malformed_submission_is_bad_request_without_insert() {
        let bodies = [
            r#"{"battle_tag":"Hero#1234","score":100}"#,
            r#"{"battle_tag":"Hero#1234","score":"lots","difficulty_level":2}"#,
            r#"{"battle_tag":"Hero#1234","score":100,"difficulty_level":2"#,
            r#"{"battle_tag":"","score":100,"difficulty_level":2}"#,
        ];
        for body in bodies {
            let mut repo = MockRankingRepositoryTrait::new();
            repo.expect_insert_ranking().times(0);

            let response = test_app(repo).oneshot(post_json(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        }
    }

    #[tokio::test]
    async fn store_write_failure_is_generic_500() {
        let mut repo = MockRankingRepositoryTrait::new();
        repo.expect_insert_ranking()
            .times(1)
            .returning(|_| Err(sqlx::Error::PoolTimedOut));

        let response = test_app(repo)
            .oneshot(post_json(
                r#"{"battle_tag":"Zed#5678","score":150,"difficulty_level":2}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({"code": 13002, "msg": "Failed to insert ranking"})
        );
    }

    #[tokio::test]
    async fn preflight_short_circuits_with_cors_headers() {
        let mut repo = MockRankingRepositoryTrait::new();
        repo.expect_insert_ranking().times(0);
        repo.expect_fetch_rankings().times(0);

        let request = Request::builder()
            .uri("/api/rankings")
            .method(http::Method::OPTIONS)
            .header(http::header::ORIGIN, ORIGIN)
            .body(Body::empty())
            .unwrap();
        let response = test_app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], ORIGIN);
        assert_eq!(
            headers["access-control-allow-methods"],
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        assert_eq!(headers["access-control-allow-credentials"], "true");
    }

    #[tokio::test]
    async fn regular_responses_carry_cors_headers() {
        let response = test_app(MockRankingRepositoryTrait::new())
            .oneshot(get_request("/api/health"))
            .await
            .unwrap();

        assert_eq!(response.headers()["access-control-allow-origin"], ORIGIN);
    }
}
