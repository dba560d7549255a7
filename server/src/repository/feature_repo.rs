//! Feature Repository Implementation
//!
//! In-memory implementation of Repository<Feature>. Ids start at 1 and are
//! never reused, so id order is creation order.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

use roadmap_domain::{DomainError, DomainResult, Feature, FeaturePatch};
use super::traits::{PatchableRepository, Repository, SearchableRepository};

struct Store {
    features: BTreeMap<u32, Feature>,
    next_id: u32,
}

/// In-memory feature store
pub struct FeatureRepository {
    store: Mutex<Store>,
}

impl FeatureRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                features: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored features
    pub async fn len(&self) -> usize {
        self.store.lock().await.features.len()
    }
}

impl Default for FeatureRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<Feature> for FeatureRepository {
    async fn create(&self, entity: &Feature) -> DomainResult<Feature> {
        let mut store = self.store.lock().await;

        let id = store.next_id;
        store.next_id = id
            .checked_add(1)
            .ok_or_else(|| DomainError::Internal("feature id space exhausted".to_string()))?;

        let mut feature = entity.clone();
        feature.id = id;
        store.features.insert(id, feature.clone());
        tracing::debug!(id, name = %feature.name, "feature created");
        Ok(feature)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Feature>> {
        let store = self.store.lock().await;
        Ok(store.features.get(&id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Feature>> {
        let store = self.store.lock().await;
        Ok(store.features.values().cloned().collect())
    }

    async fn update(&self, entity: &Feature) -> DomainResult<Feature> {
        let mut store = self.store.lock().await;

        let slot = store
            .features
            .get_mut(&entity.id)
            .ok_or_else(|| DomainError::NotFound(format!("Feature not found: {}", entity.id)))?;
        *slot = entity.clone();
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let mut store = self.store.lock().await;
        if store.features.remove(&id).is_some() {
            tracing::debug!(id, "feature deleted");
        }
        Ok(())
    }
}

#[async_trait]
impl SearchableRepository<Feature> for FeatureRepository {
    async fn search(&self, query: &str) -> DomainResult<Vec<Feature>> {
        let store = self.store.lock().await;
        Ok(store
            .features
            .values()
            .filter(|f| f.matches_name(query))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PatchableRepository<Feature, FeaturePatch> for FeatureRepository {
    async fn merge(&self, id: u32, patch: FeaturePatch) -> DomainResult<Feature> {
        let mut store = self.store.lock().await;

        let feature = store
            .features
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(format!("Feature not found: {}", id)))?;
        feature.apply(patch);
        Ok(feature.clone())
    }
}
