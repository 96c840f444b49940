use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use katas_core::calculator::CalcError;
use katas_core::dates::DateError;
use katas_core::item::ItemError;
use katas_core::kaprekar::KaprekarError;
use katas_core::shapes::ShapeError;
use katas_core::text::TextError;

/// Error returned by the HTTP handlers as `{ "error": code, "message": text }`
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: &'a str,
}

impl ApiError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            code,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            log::warn!("{} ({}): {}", self.status, self.code, self.message);
        } else {
            log::debug!("{} ({}): {}", self.status, self.code, self.message);
        }

        let body = ErrorBody {
            error: self.code,
            message: &self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request("invalid_body", rejection.body_text())
    }
}

impl From<ItemError> for ApiError {
    fn from(e: ItemError) -> Self {
        ApiError::bad_request(e.code(), e.to_string())
    }
}

impl From<CalcError> for ApiError {
    fn from(e: CalcError) -> Self {
        let status = match e {
            CalcError::Overflow => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        ApiError {
            status,
            code: e.code(),
            message: e.to_string(),
        }
    }
}

impl From<DateError> for ApiError {
    fn from(e: DateError) -> Self {
        ApiError::bad_request(e.code(), e.to_string())
    }
}

impl From<TextError> for ApiError {
    fn from(e: TextError) -> Self {
        ApiError::bad_request(e.code(), e.to_string())
    }
}

impl From<KaprekarError> for ApiError {
    fn from(e: KaprekarError) -> Self {
        ApiError::bad_request(e.code(), e.to_string())
    }
}

impl From<ShapeError> for ApiError {
    fn from(e: ShapeError) -> Self {
        ApiError::bad_request(e.code(), e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_is_server_error() {
        let err = ApiError::from(CalcError::Overflow);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code, "overflow");
    }

    #[test]
    fn test_validation_is_bad_request() {
        let err = ApiError::from(ItemError::EmptyName);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "empty_name");
        assert_eq!(err.message, "The item name is required");
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::from(CalcError::DivisionByZero).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
