use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// 错误返回体 `{"code": .., "msg": ..}`，http 状态码不序列化
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ApiErrorResponse {
    code: u32,
    msg: Option<String>,
    #[serde(skip)]
    status: u16,
}

impl ApiErrorResponse {
    pub(crate) fn new(status: u16, code: u32, msg: Option<String>) -> Self {
        return Self { code, msg, status };
    }

    pub(crate) fn send(status: u16, code: u32, msg: Option<String>) -> Response {
        return ApiErrorResponse::new(status, code, msg).into_response();
    }

    fn get_status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.get_status_code(), Json(self)).into_response()
    }
}
