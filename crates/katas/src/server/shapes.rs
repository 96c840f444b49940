use axum::{extract::State, Json};

use super::{ApiError, ApiJson, SharedState};
use crate::shapes::generate_data;
use katas_core::shapes::{ShapeRequest, ShapesOutput};

/// `POST /api/shapes`
///
/// Each request draws from its own entropy-seeded generator.
pub async fn generate(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<ShapeRequest>,
) -> Result<Json<ShapesOutput>, ApiError> {
    if state.global.verbose {
        log::info!("shape request: {:?}", request);
    }
    let out = generate_data(&request, None)?;
    log::debug!("generated {} shapes", out.shapes.len());
    Ok(Json(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::test_state;

    #[tokio::test]
    async fn test_generate() {
        let request = ShapeRequest {
            circles: 2,
            squares: 0,
            triangles: 3,
        };
        let Json(out) = generate(State(test_state()), ApiJson(request)).await.unwrap();
        assert_eq!(out.shapes.len(), 5);
        assert_eq!(out.grouped.circles.len(), 2);
        assert_eq!(out.grouped.triangles.len(), 3);
        assert!(out.shapes.iter().all(|s| s.area > 0.0));
    }

    #[tokio::test]
    async fn test_generate_negative() {
        let request = ShapeRequest {
            circles: 1,
            squares: -1,
            triangles: 0,
        };
        let err = generate(State(test_state()), ApiJson(request)).await.unwrap_err();
        assert_eq!(err.code, "negative_count");
    }
}
