use crate::dto::ranking_dto::SubmitRankingReq;
use crate::error::request_error::parse_difficulty;
use crate::error::{api_error::ApiError, request_error::ValidatedRequest};
use crate::model::ranking::RankingEntry;
use crate::state::ranking_state::RankingState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_macros::debug_handler;

pub async fn health() -> &'static str {
    "OK"
}

// 全部难度的排行榜
#[debug_handler]
pub async fn get_rankings(
    State(state): State<RankingState>,
) -> Result<Json<Vec<RankingEntry>>, ApiError> {
    let rankings = state.ranking_service.get_rankings(None).await?;
    Ok(Json(rankings))
}

// 指定难度的排行榜
#[debug_handler]
pub async fn get_rankings_by_difficulty(
    State(state): State<RankingState>,
    Path(difficulty): Path<String>,
) -> Result<Json<Vec<RankingEntry>>, ApiError> {
    let difficulty = parse_difficulty(&difficulty)?;
    let rankings = state.ranking_service.get_rankings(Some(difficulty)).await?;
    Ok(Json(rankings))
}

#[debug_handler]
pub async fn submit_ranking(
    State(state): State<RankingState>,
    ValidatedRequest(payload): ValidatedRequest<SubmitRankingReq>,
) -> Result<StatusCode, ApiError> {
    state.ranking_service.submit_ranking(payload).await?;
    Ok(StatusCode::CREATED)
}
