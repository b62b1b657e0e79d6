use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired QR code!";

#[derive(Debug)]
pub enum AppError {
    /// token 不在表中
    InvalidToken,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidToken => (StatusCode::NOT_FOUND, INVALID_TOKEN_MESSAGE),
        };

        (status, message).into_response()
    }
}
