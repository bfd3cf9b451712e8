//! verbline - Statement segmentation and verb normalization
//!
//! This crate re-exports both layers of verbline for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: verbline_parser - Segmenter, vocabulary, reducers, resolver
//! Layer 0: verbline_foundation - Core types (Scope, Category, NormalizeError)
//! ```

pub use verbline_foundation as foundation;
pub use verbline_parser as parser;
