//! Domain Layer
//!
//! The stack model - pure declarations without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Resources, outputs, content sources and the template
//! - `value_objects/` - Immutable value types (LogicalId, ContentHash, ResourceKind)
//! - `services/` - Stack assembly
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Declaration order** - A reference can only name something already declared
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
