//! Migration script discovery and cataloging.
//!
//! [`ScriptLoader`] walks a directory tree, classifies every script into an
//! execution phase, orders the whole set deterministically, and enforces
//! global filename uniqueness.

pub mod file;
pub mod loader;

pub use file::{ConventionClassifier, ScriptClassifier, ScriptFile, ScriptKind};
pub use loader::ScriptLoader;
