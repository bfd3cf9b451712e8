//! Core types and the error taxonomy for verbline.
//!
//! This crate provides:
//! - [`Scope`] - Applicability tier of a normalized statement
//! - [`Polarity`] - Inclusion/exclusion tag on segments
//! - [`Category`] - The five verb categories
//! - [`PhraseId`] - Process-unique phrase identifiers
//! - [`NormalizeError`] - Structured, renderable normalization errors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;
pub mod types;

pub use error::{ErrorKind, NormalizeError};
pub use id::PhraseId;
pub use types::{Category, Polarity, Scope};
