//! Per-category verb reduction.
//!
//! One reducer serves all five categories; the [`CategoryRule`] it is built
//! from supplies the vocabulary, the multi-match policy and the sigil.

use verbline_foundation::{Category, NormalizeError, PhraseId, Scope};

use crate::phrase::Phrase;
use crate::vocabulary::{CategoryRule, Policy};

/// Outcome of reducing one category.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reduction {
    /// The category reduced.
    pub category: Category,
    /// `Undefined` when nothing matched or the matches conflict.
    pub scope: Scope,
    /// The normalized verb, sigil-free.
    pub verb: Option<String>,
    /// Every phrase whose verb belongs to the category, conflicting or not.
    pub phrases: Vec<PhraseId>,
}

impl Reduction {
    fn rejected(category: Category, phrases: Vec<PhraseId>) -> Self {
        Self {
            category,
            scope: Scope::Undefined,
            verb: None,
            phrases,
        }
    }

    /// Returns true if the category produced a scope.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.scope.is_defined()
    }

    /// Returns true if the category produced both a verb and a scope.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.verb.is_some() && self.scope.is_defined()
    }
}

/// Reduces phrases against one category rule.
#[derive(Clone, Copy, Debug)]
pub struct CategoryReducer<'r> {
    rule: &'r CategoryRule,
}

impl<'r> CategoryReducer<'r> {
    /// Creates a reducer for a rule.
    #[must_use]
    pub fn new(rule: &'r CategoryRule) -> Self {
        Self { rule }
    }

    /// Reduces `phrases`, appending any conflict to `errors`.
    ///
    /// Sigil-scoped categories start at `seed` and take the more restrictive
    /// of it and each matched verb's sigil scope. Unscoped categories ignore
    /// `seed` and report `Statement` on success.
    pub fn reduce<'p, I>(
        &self,
        phrases: I,
        seed: Scope,
        errors: &mut Vec<NormalizeError>,
    ) -> Reduction
    where
        I: IntoIterator<Item = &'p Phrase>,
    {
        let category = self.rule.category;
        let mut scope = if self.rule.is_scoped() {
            seed
        } else {
            Scope::Statement
        };
        let mut verbs: Vec<String> = Vec::new();
        let mut matched = Vec::new();

        for phrase in phrases {
            let Some((verb, implied)) = phrase.verb().and_then(|token| self.rule.resolve(token))
            else {
                continue;
            };
            matched.push(phrase.id);
            scope = scope.narrow(implied);
            if !verbs.iter().any(|v| v == verb) {
                verbs.push(verb.to_string());
            }
        }

        if verbs.is_empty() {
            return Reduction::rejected(category, matched);
        }

        tracing::debug!(%category, ?verbs, phrases = matched.len(), "reducing category");

        if let [verb] = verbs.as_slice() {
            if let Policy::CollectiveAllowed { collective } = &self.rule.policy {
                if verb != collective && matched.len() > 1 {
                    errors.push(NormalizeError::collective_violation(category, collective, verb));
                    return Reduction::rejected(category, matched);
                }
            }
            return Reduction {
                category,
                scope,
                verb: Some(verb.clone()),
                phrases: matched,
            };
        }

        match &self.rule.policy {
            Policy::PromoteToCanonical { canonical } if verbs.contains(canonical) => Reduction {
                category,
                scope: Scope::Statement,
                verb: Some(canonical.clone()),
                phrases: matched,
            },
            Policy::PromoteToCanonical { canonical } => {
                errors.push(NormalizeError::search_multiple_verbs(canonical, verbs));
                Reduction::rejected(category, matched)
            }
            Policy::SingleOnly | Policy::CollectiveAllowed { .. } => {
                errors.push(NormalizeError::multiple_verbs(category, verbs));
                Reduction::rejected(category, matched)
            }
        }
    }
}
