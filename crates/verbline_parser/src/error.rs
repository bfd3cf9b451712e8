//! Errors raised while loading a vocabulary definition.

use thiserror::Error;

use verbline_foundation::Category;

/// Result alias for vocabulary loading.
pub type Result<T> = std::result::Result<T, VocabularyError>;

/// A problem in a vocabulary definition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VocabularyError {
    /// A line could not be read as `category: verb ...`.
    #[error("syntax error on line {line}: {message}")]
    Syntax {
        /// Line number (1-indexed).
        line: usize,
        /// What was wrong with it.
        message: String,
    },

    /// The category name is not one of the five categories.
    #[error("unknown category '{name}' on line {line}")]
    UnknownCategory {
        /// Line number (1-indexed).
        line: usize,
        /// The name that was given.
        name: String,
    },

    /// A category was defined twice.
    #[error("category {0} is defined more than once")]
    DuplicateCategory(Category),

    /// A category was never defined.
    #[error("category {0} is not defined")]
    MissingCategory(Category),

    /// A category has no verbs.
    #[error("category {0} has no verbs")]
    EmptyCategory(Category),

    /// The same verb token appears twice.
    #[error("verb '{verb}' is listed in both {first} and {second}")]
    DuplicateVerb {
        /// The repeated token.
        verb: String,
        /// Where it was first seen.
        first: Category,
        /// Where it was seen again.
        second: Category,
    },

    /// A category needs exactly one marked verb and got some other number.
    #[error("category {category} needs exactly one marked verb, found {found}")]
    MarkerCount {
        /// The category.
        category: Category,
        /// How many verbs were marked.
        found: usize,
    },

    /// A verb was marked in a category that does not use markers.
    #[error("category {category} does not take a marked verb, found '{verb}'")]
    UnexpectedMarker {
        /// The category.
        category: Category,
        /// The marked verb.
        verb: String,
    },

    /// A sigil was used in a category whose verbs are not scoped.
    #[error("category {category} does not take scoped verbs, found '{verb}'")]
    SigilNotAllowed {
        /// The category.
        category: Category,
        /// The offending verb.
        verb: String,
    },
}

impl VocabularyError {
    /// Creates a syntax error.
    #[must_use]
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }
}
