//! Domain Services
//!
//! Stateless operations over domain entities.

pub mod stack_builder;

pub use stack_builder::{
    build_stack, construct_ids, output_ids, Stack, StackDefinition, StrategySettings,
};
