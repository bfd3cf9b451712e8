//! Scope tiers, segment polarity, and verb categories.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Applicability tier of a normalized statement.
///
/// The tiers are ordered `Undefined`, `System`, `Statement`. `System` is the
/// more restrictive (global) tier; `Undefined` means the result is not
/// applicable or was rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Scope {
    /// Not applicable, or rejected because of an error.
    #[default]
    Undefined,
    /// Applies system-wide.
    System,
    /// Applies to the current statement only.
    Statement,
}

impl Scope {
    /// Returns true unless this is `Undefined`.
    #[must_use]
    pub const fn is_defined(self) -> bool {
        !matches!(self, Self::Undefined)
    }

    /// Returns the more restrictive of two scopes.
    ///
    /// `System` wins over `Statement`. `Undefined` never participates:
    /// narrowing with it returns the other operand unchanged.
    #[must_use]
    pub const fn narrow(self, other: Self) -> Self {
        match (self, other) {
            (Self::Undefined, scope) | (scope, Self::Undefined) => scope,
            (Self::System, _) | (_, Self::System) => Self::System,
            (Self::Statement, Self::Statement) => Self::Statement,
        }
    }

    /// Scope implied by a verb token's sigil.
    #[must_use]
    pub const fn from_sigil(has_sigil: bool) -> Self {
        if has_sigil { Self::System } else { Self::Statement }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Statement => write!(f, "statement"),
            Self::System => write!(f, "system"),
        }
    }
}

/// Inclusion or exclusion tag carried by every segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polarity {
    /// Introduced by `//` (or the start of the statement).
    Positive,
    /// Introduced by `/-`.
    Negative,
}

impl Polarity {
    /// Returns true for `Positive`.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "+"),
            Self::Negative => write!(f, "-"),
        }
    }
}

/// The five command categories a verb can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    /// Search verbs; several may be promoted to one canonical verb.
    Search,
    /// Simple display and file verbs.
    Display,
    /// Setter verbs that persist control values.
    Persistence,
    /// Getter verbs that report control values.
    Status,
    /// Verbs that clear or remove control values.
    Removal,
}

impl Category {
    /// All categories in reduction order.
    pub const ALL: [Self; 5] = [
        Self::Search,
        Self::Display,
        Self::Persistence,
        Self::Status,
        Self::Removal,
    ];

    /// Lowercase name used in messages and vocabulary definitions.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Display => "display",
            Self::Persistence => "persistence",
            Self::Status => "status",
            Self::Removal => "removal",
        }
    }

    /// Parses a category name, accepting the common aliases.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "search" => Some(Self::Search),
            "display" | "file" => Some(Self::Display),
            "persistence" | "setter" => Some(Self::Persistence),
            "status" | "getter" => Some(Self::Status),
            "removal" => Some(Self::Removal),
            _ => None,
        }
    }

    /// Returns true for categories whose verbs may carry a scope sigil.
    #[must_use]
    pub const fn is_scoped(self) -> bool {
        matches!(self, Self::Persistence | Self::Status | Self::Removal)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
