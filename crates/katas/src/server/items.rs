use axum::{extract::State, Json};
use serde::Deserialize;

use super::{ApiError, ApiJson, SharedState};
use crate::item::{decode_data, ItemOutput};

#[derive(Debug, Deserialize)]
pub struct ItemRequest {
    #[serde(default)]
    pub input: Option<String>,
}

/// `POST /api/items`
pub async fn decode(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<ItemRequest>,
) -> Result<Json<ItemOutput>, ApiError> {
    let out = decode_data(request.input.as_deref(), &state.decoder)?;
    log::debug!("decoded item {:?}", out.item_name);
    Ok(Json(out))
}
