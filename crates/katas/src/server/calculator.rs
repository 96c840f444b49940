use axum::{extract::Path, Json};

use super::ApiError;
use crate::calc::{calculate_data, compare_data, CalculatorKind};
use katas_core::calculator::{CalcError, CalcOutput, CompareOutput, Operation};

fn operation(raw: &str) -> Result<Operation, ApiError> {
    raw.parse()
        .map_err(|message: String| ApiError::bad_request("unknown_operation", message))
}

fn decimals(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::from(CalcError::InvalidDecimalPlaces))
}

fn calculate(
    kind: CalculatorKind,
    (op, a, b, places): (String, String, String, String),
) -> Result<Json<CalcOutput>, ApiError> {
    let op = operation(&op)?;
    let out = calculate_data(kind, op, &a, &b, decimals(&places)?)?;
    log::debug!("{:?} {:?}({}, {}) = {}", kind, op, a, b, out.result);
    Ok(Json(out))
}

/// `GET /api/calculator/{op}/{a}/{b}/{decimals}`
pub async fn float_calculate(
    Path(params): Path<(String, String, String, String)>,
) -> Result<Json<CalcOutput>, ApiError> {
    calculate(CalculatorKind::Float, params)
}

/// `GET /api/decimal-calculator/{op}/{a}/{b}/{decimals}`
pub async fn decimal_calculate(
    Path(params): Path<(String, String, String, String)>,
) -> Result<Json<CalcOutput>, ApiError> {
    calculate(CalculatorKind::Decimal, params)
}

/// `GET /api/calculator/compare/{a}/{b}`
pub async fn float_compare(
    Path((a, b)): Path<(String, String)>,
) -> Result<Json<CompareOutput>, ApiError> {
    Ok(Json(compare_data(CalculatorKind::Float, &a, &b)?))
}

/// `GET /api/decimal-calculator/compare/{a}/{b}`
pub async fn decimal_compare(
    Path((a, b)): Path<(String, String)>,
) -> Result<Json<CompareOutput>, ApiError> {
    Ok(Json(compare_data(CalculatorKind::Decimal, &a, &b)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn params(op: &str, a: &str, b: &str, places: &str) -> Path<(String, String, String, String)> {
        Path((op.to_string(), a.to_string(), b.to_string(), places.to_string()))
    }

    #[tokio::test]
    async fn test_float_calculate() {
        let Json(out) = float_calculate(params("divide", "10", "4", "2"))
            .await
            .unwrap();
        assert_eq!(out.result, "2.50");
        assert_eq!(out.operation, Operation::Divide);
    }

    #[tokio::test]
    async fn test_decimal_calculate_grouping() {
        let Json(out) = decimal_calculate(params("multiply", "1000", "1000", "0"))
            .await
            .unwrap();
        assert_eq!(out.result, "1,000,000");
    }

    #[tokio::test]
    async fn test_calculate_errors() {
        let err = float_calculate(params("divide", "1", "0", "2"))
            .await
            .unwrap_err();
        assert_eq!(err.code, "division_by_zero");

        let err = float_calculate(params("power", "1", "2", "2"))
            .await
            .unwrap_err();
        assert_eq!(err.code, "unknown_operation");

        let err = decimal_calculate(params("add", "1", "2", "nine"))
            .await
            .unwrap_err();
        assert_eq!(err.code, "invalid_decimal_places");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_compare() {
        let Json(out) = decimal_compare(Path(("2.5".to_string(), "2.50".to_string())))
            .await
            .unwrap();
        assert_eq!(out.result, "Both numbers are equal.");

        let Json(out) = float_compare(Path(("3".to_string(), "-3".to_string())))
            .await
            .unwrap();
        assert_eq!(out.result, "The first number is greater.");
    }
}
