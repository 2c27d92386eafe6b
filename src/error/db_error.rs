use crate::error::error_code;
use crate::response::api_response::ApiErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use thiserror::Error;

/// 数据访问错误，具体原因只写日志，不返回给调用方
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to fetch rankings")]
    FetchRankingsFailed(#[source] sqlx::Error),
    #[error("Failed to insert ranking")]
    InsertRankingFailed(#[source] sqlx::Error),
}

impl DbError {
    fn get_code(&self) -> u32 {
        match self {
            DbError::FetchRankingsFailed(_) => error_code::FETCH_RANKINGS_FAILED,
            DbError::InsertRankingFailed(_) => error_code::INSERT_RANKING_FAILED,
        }
    }
}

impl IntoResponse for DbError {
    fn into_response(self) -> Response {
        ApiErrorResponse::send(
            StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            self.get_code(),
            Some(self.to_string()),
        )
    }
}
