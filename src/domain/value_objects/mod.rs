//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod logical_id;
mod resource_kind;
mod strategy;

pub use hash::ContentHash;
pub use logical_id::LogicalId;
pub use resource_kind::ResourceKind;
pub use strategy::{GrowthType, ReplicateTo};
