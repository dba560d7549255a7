//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! The server ships an in-memory implementation.

use async_trait::async_trait;
use roadmap_domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Store a new entity; the id on `entity` is ignored and a fresh one assigned
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Replace an existing entity; `NotFound` if its id is unknown
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID. Deleting an unknown id is not an error.
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}

/// Extension for repositories that support text search
#[async_trait]
pub trait SearchableRepository<T: Entity>: Repository<T> {
    /// Search entities by text query
    async fn search(&self, query: &str) -> DomainResult<Vec<T>>;
}

/// Extension for repositories that apply partial updates in place
#[async_trait]
pub trait PatchableRepository<T: Entity, P: Send + 'static>: Repository<T> {
    /// Merge `patch` into the stored entity and return the result
    async fn merge(&self, id: T::Id, patch: P) -> DomainResult<T>;
}
