use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

// The display strings are the wire contract: they go out verbatim as the
// `detail` field of the error body.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::ActivityNotFound => StatusCode::NOT_FOUND,
            ApiError::AlreadySignedUp | ApiError::NotSignedUp => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
