//! Project assembly helpers
//!
//! The engine consumes a plain [`crate::model::Project`] record; this module
//! provides the fluent builder DSL for constructing one in code.

mod builder;

pub use builder::{ProjectBuilder, TaskBuilder};
