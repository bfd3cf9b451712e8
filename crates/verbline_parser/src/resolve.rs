//! Cross-category conflict rules and overall scope.

use verbline_foundation::{Category, NormalizeError, PhraseId, Scope};

use crate::phrase::PhraseArena;
use crate::reduce::{CategoryReducer, Reduction};
use crate::vocabulary::Vocabulary;

/// An accepted category verb and the phrases it applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    /// Owning category.
    pub category: Category,
    /// Normalized, sigil-free verb.
    pub verb: String,
    /// Phrases in construction order.
    pub phrases: Vec<PhraseId>,
}

/// Result of normalizing a whole statement.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Normalization {
    scope: Scope,
    errors: Vec<NormalizeError>,
    commands: Vec<Command>,
    reductions: Vec<Reduction>,
}

impl Normalization {
    /// The result for a statement that never built its phrases.
    #[must_use]
    pub fn driver_error() -> Self {
        Self {
            scope: Scope::Undefined,
            errors: vec![NormalizeError::DriverDesign],
            commands: Vec::new(),
            reductions: Vec::new(),
        }
    }

    /// Overall scope; `Undefined` whenever there are errors.
    #[must_use]
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// The errors, or `None` when the statement was accepted.
    #[must_use]
    pub fn errors(&self) -> Option<&[NormalizeError]> {
        if self.errors.is_empty() {
            None
        } else {
            Some(&self.errors)
        }
    }

    /// Returns true if any error rejected the statement.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Accepted verbs in the order persistence, search, display, status,
    /// removal. Advisory only when the statement was rejected.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Looks up an accepted command by verb.
    #[must_use]
    pub fn command(&self, verb: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.verb == verb)
    }

    /// Per-category reductions in [`Category::ALL`] order.
    #[must_use]
    pub fn reductions(&self) -> &[Reduction] {
        &self.reductions
    }

    /// The reduction for one category.
    #[must_use]
    pub fn reduction(&self, category: Category) -> Option<&Reduction> {
        self.reductions.iter().find(|r| r.category == category)
    }

    /// Rendered error messages.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Runs the five reducers and applies the cross-category rules.
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> Resolver<'v> {
    /// Creates a resolver over a vocabulary.
    #[must_use]
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Normalizes a statement's phrases.
    #[must_use]
    pub fn resolve(&self, phrases: &PhraseArena) -> Normalization {
        let mut errors = Vec::new();

        let search = self.reduce(Category::Search, phrases, Scope::Statement, &mut errors);
        let display = self.reduce(Category::Display, phrases, Scope::Statement, &mut errors);
        let ceiling = persistence_ceiling(&search, &display);
        let persistence = self.reduce(Category::Persistence, phrases, ceiling, &mut errors);
        let status = self.reduce(Category::Status, phrases, Scope::System, &mut errors);
        let removal = self.reduce(Category::Removal, phrases, Scope::System, &mut errors);

        if display.is_defined() && search.is_defined() {
            errors.push(NormalizeError::SearchWithDisplay);
        }

        if removal.is_defined() || status.is_defined() {
            if display.is_defined() {
                errors.push(NormalizeError::DisplayWithStatusOrRemoval);
            }
            if search.is_defined() {
                errors.push(NormalizeError::SearchWithStatusOrRemoval);
            }
        }

        if removal.is_defined() && status.is_defined() && persistence.is_defined() {
            errors.push(NormalizeError::RemovalWithConfig);
            errors.push(NormalizeError::StatusWithConfig);
            errors.push(NormalizeError::PersistenceWithConfig);
        }

        let scope = if errors.is_empty() {
            [&display, &search, &status, &persistence, &removal]
                .into_iter()
                .fold(Scope::System, |narrowest, r| narrowest.narrow(r.scope))
        } else {
            Scope::Undefined
        };

        let commands: Vec<Command> = [&persistence, &search, &display, &status, &removal]
            .into_iter()
            .filter(|r| r.is_accepted())
            .filter_map(|r| {
                r.verb.as_ref().map(|verb| Command {
                    category: r.category,
                    verb: verb.clone(),
                    phrases: r.phrases.clone(),
                })
            })
            .collect();

        tracing::debug!(
            %scope,
            errors = errors.len(),
            commands = commands.len(),
            "normalized statement"
        );

        Normalization {
            scope,
            errors,
            commands,
            reductions: vec![search, display, persistence, status, removal],
        }
    }

    fn reduce(
        &self,
        category: Category,
        phrases: &PhraseArena,
        seed: Scope,
        errors: &mut Vec<NormalizeError>,
    ) -> Reduction {
        CategoryReducer::new(self.vocabulary.rule(category)).reduce(phrases, seed, errors)
    }
}

/// Seed scope for persistence verbs.
///
/// Search or display verbs seed persistence at statement scope. Both arms
/// currently yield `Statement`; a sigiled setter still raises its own
/// reduction to `System`.
#[allow(clippy::if_same_then_else)]
fn persistence_ceiling(search: &Reduction, display: &Reduction) -> Scope {
    if search.scope == Scope::Statement || display.scope == Scope::Statement {
        Scope::Statement
    } else {
        Scope::Statement
    }
}
