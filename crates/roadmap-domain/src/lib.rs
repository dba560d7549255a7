//! Roadmap Domain
//!
//! Entities and board logic shared by the REST server and the browser UI.
//! This crate has NO I/O (serde for the wire format, chrono for dates).

mod entity;
mod feature;
mod milestone;
mod values;

pub mod board;
pub mod dates;
pub mod milestone_view;

pub use board::{Column, ColumnField};
pub use entity::{DomainError, DomainResult, Entity};
pub use feature::{Feature, FeatureInput, FeaturePatch};
pub use milestone::{completion, completion_percent, Milestone, MAX_PERCENT};
pub use milestone_view::{MilestoneFilter, MilestoneQuery, SortDirection, SortField};
pub use values::{EffortLevel, MilestoneType, Priority, TShirtSize};
