use axum::Json;

use super::{ApiError, ApiJson};
use katas_core::dates::{
    self, DatePair, DifferenceOutput, MonthWeek, PairOutput, YearBounds, YearLength,
};

/// `POST /api/dates/difference`
pub async fn difference(
    ApiJson(pair): ApiJson<DatePair>,
) -> Result<Json<DifferenceOutput>, ApiError> {
    Ok(Json(dates::difference(&pair)?))
}

/// `POST /api/dates/bounds`
pub async fn bounds(
    ApiJson(pair): ApiJson<DatePair>,
) -> Result<Json<PairOutput<YearBounds>>, ApiError> {
    Ok(Json(dates::year_bounds(&pair)?))
}

/// `POST /api/dates/days`
pub async fn days(
    ApiJson(pair): ApiJson<DatePair>,
) -> Result<Json<PairOutput<YearLength>>, ApiError> {
    Ok(Json(dates::year_lengths(&pair)?))
}

/// `POST /api/dates/week`
pub async fn week(
    ApiJson(pair): ApiJson<DatePair>,
) -> Result<Json<PairOutput<MonthWeek>>, ApiError> {
    Ok(Json(dates::month_weeks(&pair)?))
}
