//! Stratex Domain Layer
//!
//! Core data model for the chunked extraction pipeline. This crate has no
//! external dependencies; it defines the values that flow through the pipeline
//! and the trait boundary to the language model runtime.
//!
//! ## Key Concepts
//!
//! - **Document**: extracted text plus the subject label it belongs to
//! - **Chunk**: a bounded, word-boundary-respecting slice of a document
//! - **LineItem**: one fact parsed out of a model answer
//! - **LlmProvider**: the `complete(model, prompt)` capability
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - No I/O
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod line_item;
pub mod traits;

// Re-exports for convenience
pub use document::{Chunk, Document};
pub use line_item::LineItem;
pub use traits::LlmProvider;
