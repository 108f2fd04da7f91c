//! Liftplan Shared Library
//!
//! This crate contains the types shared between the progression engine
//! and its consumers (API layer, front ends): lift enums, 1RM records,
//! program descriptors, generated-workout types, load math, and
//! request/response types.

pub mod loading;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use loading::*;
pub use models::*;
pub use types::*;
