//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{ColumnField, Feature, FeaturePatch};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All features, in server order
    pub features: Vec<Feature>,
    /// True until the first list request finishes
    pub loading: bool,
    /// Field the board columns are grouped by
    pub column_field: ColumnField,
    /// Card name filter
    pub search: String,
    /// Last failed request, shown as a banner
    pub error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the feature list after a load
pub fn store_set_features(store: &AppStore, features: Vec<Feature>) {
    store.features().set(features);
    store.loading().set(false);
}

/// Update a feature in the store by ID
pub fn store_update_feature(store: &AppStore, updated: Feature) {
    if let Some(feature) = store.features().write().iter_mut().find(|feature| feature.id == updated.id) {
        *feature = updated;
    }
}

/// Apply a partial update locally (optimistic card move)
pub fn store_patch_feature(store: &AppStore, id: u32, patch: FeaturePatch) {
    if let Some(feature) = store.features().write().iter_mut().find(|feature| feature.id == id) {
        feature.apply(patch);
    }
}

/// Remove a feature from the store by ID
pub fn store_remove_feature(store: &AppStore, id: u32) {
    store.features().write().retain(|feature| feature.id != id);
}

pub fn store_set_error(store: &AppStore, error: Option<String>) {
    store.error().set(error);
}
