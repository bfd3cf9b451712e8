//! Error taxonomy for statement normalization.
//!
//! Uses `thiserror` so that every variant renders the user-facing message
//! while still carrying its parameters for callers that re-render or
//! localize.

use std::fmt;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::Category;

/// A problem that rejects a statement during normalization.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NormalizeError {
    /// Two or more distinct verbs matched a category that allows only one.
    #[error(
        "More than one {category} verb was provided.  All verbs have to be consistant across all segments. Please submit only one of these verbs: {}.",
        VerbList(.verbs)
    )]
    MultipleVerbs {
        /// The category that matched more than one verb.
        category: Category,
        /// Every distinct verb matched, in first-seen order.
        verbs: Vec<String>,
    },

    /// Two or more search verbs matched and none of them was canonical.
    #[error(
        "More than one search verb was provided.  All search verbs can be promoted to '{canonical}' when the '{canonical}' verb is provided.  Otherwise all verbs have to be consistant across all segments. Please submit only one of these verbs: {}.",
        VerbList(.verbs)
    )]
    SearchMultipleVerbs {
        /// The verb other search verbs are promoted to.
        canonical: String,
        /// Every distinct search verb matched, in first-seen order.
        verbs: Vec<String>,
    },

    /// A non-collective verb was used in more than one phrase.
    #[error(
        "Only the verb '{collective}' can be combined into multiple {category} segments. Other verbs such as '{verb}' cannot be combined"
    )]
    CollectiveViolation {
        /// The category the verb belongs to.
        category: Category,
        /// The only verb allowed to span several phrases.
        collective: String,
        /// The verb that spanned several phrases.
        verb: String,
    },

    /// Search and display verbs in the same statement.
    #[error("Cannot combine search segments with file segments.")]
    SearchWithDisplay,

    /// Display verbs together with status or removal verbs.
    #[error("Cannot combine file segments with status or removal segments.")]
    DisplayWithStatusOrRemoval,

    /// Search verbs together with status or removal verbs.
    #[error("Cannot combine search segments with status or removal segments.")]
    SearchWithStatusOrRemoval,

    /// Removal verbs alongside both status and persistence verbs.
    #[error("Cannot combine removal segments with status or persistence segments.")]
    RemovalWithConfig,

    /// Status verbs alongside both removal and persistence verbs.
    #[error("Cannot combine status segments with removal or persistence segments.")]
    StatusWithConfig,

    /// Persistence verbs alongside both status and removal verbs.
    #[error("Cannot combine persistence segments with status or removal segments.")]
    PersistenceWithConfig,

    /// Normalization was asked of a statement that never built its phrases.
    #[error("Driver design error")]
    DriverDesign,
}

impl NormalizeError {
    /// Creates a multi-verb error for a category.
    #[must_use]
    pub fn multiple_verbs(category: Category, verbs: Vec<String>) -> Self {
        Self::MultipleVerbs { category, verbs }
    }

    /// Creates a search promotion error.
    #[must_use]
    pub fn search_multiple_verbs(canonical: impl Into<String>, verbs: Vec<String>) -> Self {
        Self::SearchMultipleVerbs {
            canonical: canonical.into(),
            verbs,
        }
    }

    /// Creates a collective verb violation.
    #[must_use]
    pub fn collective_violation(
        category: Category,
        collective: impl Into<String>,
        verb: impl Into<String>,
    ) -> Self {
        Self::CollectiveViolation {
            category,
            collective: collective.into(),
            verb: verb.into(),
        }
    }

    /// Returns the fieldless tag for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MultipleVerbs { .. } => ErrorKind::Ambiguity,
            Self::SearchMultipleVerbs { .. } => ErrorKind::SearchAmbiguity,
            Self::CollectiveViolation { .. } => ErrorKind::CollectiveViolation,
            Self::SearchWithDisplay
            | Self::DisplayWithStatusOrRemoval
            | Self::SearchWithStatusOrRemoval
            | Self::RemovalWithConfig
            | Self::StatusWithConfig
            | Self::PersistenceWithConfig => ErrorKind::CrossCategory,
            Self::DriverDesign => ErrorKind::DriverDesign,
        }
    }

    /// The category an intra-category error refers to, if any.
    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        match self {
            Self::MultipleVerbs { category, .. } | Self::CollectiveViolation { category, .. } => {
                Some(*category)
            }
            Self::SearchMultipleVerbs { .. } => Some(Category::Search),
            _ => None,
        }
    }
}

/// Coarse classification of [`NormalizeError`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// Several distinct verbs within one category.
    Ambiguity,
    /// Several distinct search verbs with nothing to promote them to.
    SearchAmbiguity,
    /// A non-collective verb spanning several phrases.
    CollectiveViolation,
    /// Mutually exclusive categories in one statement.
    CrossCategory,
    /// The caller broke a construction invariant.
    DriverDesign,
}

/// Renders verbs as `a, b, c`.
struct VerbList<'a>(&'a [String]);

impl fmt::Display for VerbList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, verb) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(verb)?;
        }
        Ok(())
    }
}
