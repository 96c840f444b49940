use axum::{extract::Path, Json};

use super::ApiError;
use crate::kaprekar::check_data;
use katas_core::kaprekar::KaprekarOutput;

/// `GET /api/kaprekar/{number}`
pub async fn check(Path(number): Path<String>) -> Result<Json<KaprekarOutput>, ApiError> {
    Ok(Json(check_data(&number)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check() {
        let Json(out) = check(Path("55".to_string())).await.unwrap();
        assert!(out.is_kaprekar);

        let Json(out) = check(Path("10".to_string())).await.unwrap();
        assert!(!out.is_kaprekar);
    }

    #[tokio::test]
    async fn test_check_rejects_overlong() {
        let err = check(Path("99999999999".to_string())).await.unwrap_err();
        assert_eq!(err.code, "invalid_number");
    }
}
