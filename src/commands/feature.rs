//! Feature Commands
//!
//! Frontend bindings for `/api/features`.

use reqwest::StatusCode;

use crate::models::{Feature, FeatureInput, FeaturePatch};
use super::{api_url, check, client, read_json};

pub async fn list_features() -> Result<Vec<Feature>, String> {
    let response = client().get(api_url("/features")).send().await.map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn get_feature(id: u32) -> Result<Option<Feature>, String> {
    let response = client()
        .get(api_url(&format!("/features/{}", id)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    read_json(response).await.map(Some)
}

pub async fn create_feature(input: &FeatureInput) -> Result<Feature, String> {
    let response = client()
        .post(api_url("/features"))
        .json(input)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn update_feature(id: u32, patch: &FeaturePatch) -> Result<Feature, String> {
    let response = client()
        .patch(api_url(&format!("/features/{}", id)))
        .json(patch)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn delete_feature(id: u32) -> Result<(), String> {
    let response = client()
        .delete(api_url(&format!("/features/{}", id)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check(response).await.map(|_| ())
}
