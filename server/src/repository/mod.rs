//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod feature_repo;


pub use traits::{PatchableRepository, Repository, SearchableRepository};
pub use feature_repo::FeatureRepository;
