//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{CheckUseCase, DiffUseCase, SynthUseCase};
use crate::infrastructure::LocalFs;

/// Type alias for the concrete SynthUseCase
pub type ConcreteSynthUseCase = SynthUseCase<LocalFs>;

/// Type alias for the concrete DiffUseCase
pub type ConcreteDiffUseCase = DiffUseCase<LocalFs>;

/// Type alias for the concrete CheckUseCase
pub type ConcreteCheckUseCase = CheckUseCase<LocalFs>;

/// Create a synth use case backed by the local file system
pub fn create_synth_use_case() -> ConcreteSynthUseCase {
    SynthUseCase::new(LocalFs::new())
}

/// Create a diff use case backed by the local file system
pub fn create_diff_use_case() -> ConcreteDiffUseCase {
    DiffUseCase::new(LocalFs::new())
}

/// Create a check use case backed by the local file system
pub fn create_check_use_case() -> ConcreteCheckUseCase {
    CheckUseCase::new(LocalFs::new())
}
