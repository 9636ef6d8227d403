use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use rollcall::data::ErrorDetail;
use rollcall::errors::RosterError;

/// Anything a handler can fail with, rendered as `{"detail": ...}`.
#[derive(Debug)]
pub enum ApiError {
    Roster(RosterError),
    Query(QueryRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Roster(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            Self::Roster(_) => StatusCode::BAD_REQUEST,
            Self::Query(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        Self::Roster(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Query(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            Self::Roster(err) => err.to_string(),
            Self::Query(rejection) => rejection.body_text(),
        };
        (status, Json(ErrorDetail::new(detail))).into_response()
    }
}
