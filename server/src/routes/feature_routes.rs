//! Feature CRUD Routes
//!
//! Exposes Feature operations to the board client over HTTP.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use roadmap_domain::{Feature, FeatureInput, FeaturePatch};

use crate::error::{ApiError, ApiResult};
use crate::repository::{PatchableRepository, Repository, SearchableRepository};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Case-insensitive name filter
    pub search: Option<String>,
}

/// Path ids that are not plain digit strings behave like unknown ids.
fn parse_id(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn not_found() -> ApiError {
    ApiError::NotFound("Feature not found".to_string())
}

/// List all features, optionally filtered by name.
///
/// An unreadable query string lists everything.
pub async fn list_features(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Feature>>> {
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!(%rejection, "ignoring list query");
            ListParams::default()
        }
    };
    let features = match params.search.as_deref() {
        Some(term) if !term.is_empty() => state.features.search(term).await?,
        _ => state.features.list().await?,
    };
    Ok(Json(features))
}

/// Get feature by ID
pub async fn get_feature(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Feature>> {
    let id = parse_id(&id).ok_or_else(not_found)?;
    state
        .features
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// Create a new feature
pub async fn create_feature(
    State(state): State<AppState>,
    body: Result<Json<FeatureInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Feature>)> {
    let Json(input) = body.map_err(ApiError::invalid_feature)?;
    let input = input.validate()?;

    let created = state.features.create(&input.into_feature(0)).await?;
    tracing::info!(id = created.id, name = %created.name, "feature created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Partially update a feature
pub async fn update_feature(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<FeaturePatch>, JsonRejection>,
) -> ApiResult<Json<Feature>> {
    let Json(patch) = body.map_err(ApiError::invalid_feature)?;
    let patch = patch.validate()?;

    let Some(id) = parse_id(&id) else {
        return Err(ApiError::NotFound(format!("Feature not found: {}", id)));
    };
    let updated = state.features.merge(id, patch).await?;
    tracing::info!(id, "feature updated");
    Ok(Json(updated))
}

/// Delete a feature. Always succeeds.
pub async fn delete_feature(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if let Some(id) = parse_id(&id) {
        state.features.delete(id).await?;
        tracing::info!(id, "feature deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("+1"), None);
        assert_eq!(parse_id(" 1 "), None);
        assert_eq!(parse_id("99999999999"), None);
    }
}
