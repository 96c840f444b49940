use axum::Json;
use serde::Deserialize;

use super::{ApiError, ApiJson};
use crate::text::{concat_data, count_data, lower_data, repeated_data, replace_data, upper_data};
use katas_core::text::{ConcatOutput, ConvertedOutput, CountOutput, RepeatedOutput};

#[derive(Debug, Deserialize)]
pub struct ConcatRequest {
    pub times: i64,
    #[serde(default)]
    pub text: Option<String>,
}

pub async fn count(ApiJson(text): ApiJson<String>) -> Json<CountOutput> {
    Json(count_data(&text))
}

pub async fn upper(ApiJson(text): ApiJson<String>) -> Json<ConvertedOutput> {
    Json(upper_data(&text))
}

pub async fn lower(ApiJson(text): ApiJson<String>) -> Json<ConvertedOutput> {
    Json(lower_data(&text))
}

pub async fn repeated(ApiJson(text): ApiJson<String>) -> Json<RepeatedOutput> {
    Json(repeated_data(&text))
}

pub async fn replace(ApiJson(text): ApiJson<String>) -> Json<ConvertedOutput> {
    Json(replace_data(&text))
}

/// `POST /api/text/concat`
pub async fn concat(
    ApiJson(request): ApiJson<ConcatRequest>,
) -> Result<Json<ConcatOutput>, ApiError> {
    let text = request.text.unwrap_or_default();
    let out = concat_data(&text, request.times)?;
    log::debug!("concatenated {} times in {} ms", request.times, out.elapsed_ms);
    Ok(Json(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_count_and_case() {
        let Json(out) = count(ApiJson("abc".to_string())).await;
        assert_eq!(out.characters, 3);

        let Json(out) = upper(ApiJson("abc".to_string())).await;
        assert_eq!(out.text, "ABC");

        let Json(out) = lower(ApiJson("ABC".to_string())).await;
        assert_eq!(out.text, "abc");
    }

    #[tokio::test]
    async fn test_replace() {
        let Json(out) = replace(ApiJson("Proconsi and Proconsi".to_string())).await;
        assert_eq!(out.text, "Isnocorp and Isnocorp");
    }

    #[tokio::test]
    async fn test_repeated_empty_text_uses_default() {
        let Json(out) = repeated(ApiJson(String::new())).await;
        assert!(out.repeated_words.iter().any(|w| w.word == "Proconsi"));
    }

    #[tokio::test]
    async fn test_concat() {
        let Json(out) = concat(ApiJson(ConcatRequest {
            times: 10,
            text: Some("xy".to_string()),
        }))
        .await
        .unwrap();
        assert_eq!(out.length, 20);

        let err = concat(ApiJson(ConcatRequest {
            times: 100_001,
            text: None,
        }))
        .await
        .unwrap_err();
        assert_eq!(err.code, "too_many_repetitions");
    }
}
