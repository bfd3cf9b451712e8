//! Verb vocabularies for the five command categories.
//!
//! Each category owns a list of member tokens, a multi-match policy and,
//! for the configuration categories, a scope sigil. Vocabularies can be
//! built from [`CategoryRule`]s directly or loaded from a small line-based
//! definition:
//!
//! ```text
//! ;; category: verbs, `*` marks the canonical or collective verb
//! search: find* search seek
//! display: print
//! persistence: set* #set
//! status: get* #get
//! removal: clear* #clear remove
//! ```

use std::collections::HashMap;

use verbline_foundation::{Category, Scope};

use crate::config::ParserConfig;
use crate::error::{Result, VocabularyError};
use crate::stdlib;

/// Resolves a verb token to the category that owns it.
pub trait VerbLookup {
    /// Returns the owning category, or `None` if the token is not a verb.
    fn is_verb(&self, token: &str) -> Option<Category>;
}

/// What a category does when more than one distinct verb matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Any two distinct verbs conflict.
    SingleOnly,
    /// Distinct verbs collapse onto `canonical` when it is among them.
    PromoteToCanonical {
        /// The verb every other member is promoted to.
        canonical: String,
    },
    /// One distinct verb only, and only `collective` may span several
    /// phrases.
    CollectiveAllowed {
        /// The verb allowed in more than one phrase (sigil-free).
        collective: String,
    },
}

/// Vocabulary and matching behavior of one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRule {
    /// The category this rule reduces.
    pub category: Category,
    /// Member tokens, sigils included.
    pub members: Vec<String>,
    /// Multi-match policy.
    pub policy: Policy,
    /// Scope sigil, for categories whose verbs are scoped.
    pub sigil: Option<char>,
}

impl CategoryRule {
    /// Creates an unscoped rule.
    #[must_use]
    pub fn new<I, S>(category: Category, policy: Policy, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            members: members.into_iter().map(Into::into).collect(),
            policy,
            sigil: None,
        }
    }

    /// Builder method to make member verbs scoped by `sigil`.
    #[must_use]
    pub fn with_sigil(mut self, sigil: char) -> Self {
        self.sigil = Some(sigil);
        self
    }

    /// Returns true if member verbs carry a scope sigil.
    #[must_use]
    pub fn is_scoped(&self) -> bool {
        self.sigil.is_some()
    }

    /// Returns true if `token` is one of the members.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.members.iter().any(|m| m == token)
    }

    /// Matches a token against the members.
    ///
    /// Returns the sigil-free verb and the scope its sigil implies.
    /// Unscoped rules always imply `Statement`.
    #[must_use]
    pub fn resolve<'t>(&self, token: &'t str) -> Option<(&'t str, Scope)> {
        if !self.contains(token) {
            return None;
        }
        let stripped = self.sigil.and_then(|sigil| token.strip_prefix(sigil));
        Some((stripped.unwrap_or(token), Scope::from_sigil(stripped.is_some())))
    }
}

/// The complete set of category rules.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    /// One rule per category, in [`Category::ALL`] order.
    rules: Vec<CategoryRule>,
    /// Token -> owning category
    index: HashMap<String, Category>,
}

impl Vocabulary {
    /// Builds a vocabulary from exactly one rule per category.
    ///
    /// # Errors
    ///
    /// Fails when a category is missing, repeated or empty, or when a token
    /// belongs to more than one category.
    pub fn new(rules: impl IntoIterator<Item = CategoryRule>) -> Result<Self> {
        let mut rules: Vec<CategoryRule> = rules.into_iter().collect();
        rules.sort_by_key(|rule| rule.category);

        for pair in rules.windows(2) {
            if pair[0].category == pair[1].category {
                return Err(VocabularyError::DuplicateCategory(pair[0].category));
            }
        }
        for category in Category::ALL {
            if !rules.iter().any(|rule| rule.category == category) {
                return Err(VocabularyError::MissingCategory(category));
            }
        }

        let mut index = HashMap::new();
        for rule in &rules {
            if rule.members.is_empty() {
                return Err(VocabularyError::EmptyCategory(rule.category));
            }
            for member in &rule.members {
                if let Some(first) = index.insert(member.clone(), rule.category) {
                    return Err(VocabularyError::DuplicateVerb {
                        verb: member.clone(),
                        first,
                        second: rule.category,
                    });
                }
            }
        }

        Ok(Self { rules, index })
    }

    /// Loads the bundled vocabulary with the default `#` sigil.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled definition itself is malformed.
    pub fn standard() -> Result<Self> {
        Self::standard_for(&ParserConfig::default())
    }

    /// Loads the bundled vocabulary using `config.sigil` for scoped verbs.
    ///
    /// # Errors
    ///
    /// Fails if the sigil collides with a verb character or the `*` marker.
    pub fn standard_for(config: &ParserConfig) -> Result<Self> {
        let source = stdlib::VOCABULARY.replace('#', &config.sigil.to_string());
        Self::parse(&source, config.sigil)
    }

    /// Loads a vocabulary definition.
    ///
    /// - `;;` starts a comment
    /// - Each non-empty line is `category: verb verb ...`
    /// - A trailing `*` marks the canonical (search) or collective verb
    /// - `sigil` prefixes system-scoped verbs in scoped categories
    ///
    /// # Errors
    ///
    /// Returns a [`VocabularyError`] describing the first problem found.
    pub fn parse(source: &str, sigil: char) -> Result<Self> {
        let mut rules: Vec<CategoryRule> = Vec::new();

        for (n, raw) in source.lines().enumerate() {
            let line_no = n + 1;
            let line = match raw.find(";;") {
                Some(end) => &raw[..end],
                None => raw,
            }
            .trim();
            if line.is_empty() {
                continue;
            }

            let Some((name, verbs)) = line.split_once(':') else {
                return Err(VocabularyError::syntax(
                    line_no,
                    "expected 'category: verb ...'",
                ));
            };
            let category =
                Category::from_name(name).ok_or_else(|| VocabularyError::UnknownCategory {
                    line: line_no,
                    name: name.trim().to_string(),
                })?;
            if rules.iter().any(|rule| rule.category == category) {
                return Err(VocabularyError::DuplicateCategory(category));
            }
            rules.push(parse_rule(line_no, category, verbs, sigil)?);
        }

        Self::new(rules)
    }

    /// Returns the rule for a category.
    #[must_use]
    pub fn rule(&self, category: Category) -> &CategoryRule {
        &self.rules[category as usize]
    }

    /// All rules, in [`Category::ALL`] order.
    #[must_use]
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Number of registered verb tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if no verb is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl VerbLookup for Vocabulary {
    fn is_verb(&self, token: &str) -> Option<Category> {
        self.index.get(token).copied()
    }
}

fn parse_rule(line: usize, category: Category, verbs: &str, sigil: char) -> Result<CategoryRule> {
    let mut members = Vec::new();
    let mut marked = Vec::new();

    for word in verbs.split_whitespace() {
        let word = word.to_lowercase();
        let (token, is_marked) = match word.strip_suffix('*') {
            Some(token) => (token.to_string(), true),
            None => (word, false),
        };
        let bare = token.strip_prefix(sigil).unwrap_or(token.as_str());
        if bare.is_empty() {
            return Err(VocabularyError::syntax(line, "empty verb"));
        }
        if bare.len() != token.len() && !category.is_scoped() {
            return Err(VocabularyError::SigilNotAllowed { category, verb: token });
        }
        if is_marked {
            marked.push(bare.to_string());
        }
        members.push(token);
    }

    if members.is_empty() {
        return Err(VocabularyError::EmptyCategory(category));
    }

    let policy = match category {
        Category::Display => {
            if let Some(verb) = marked.pop() {
                return Err(VocabularyError::UnexpectedMarker { category, verb });
            }
            Policy::SingleOnly
        }
        Category::Search => Policy::PromoteToCanonical {
            canonical: single_marked(category, marked)?,
        },
        Category::Persistence | Category::Status | Category::Removal => {
            Policy::CollectiveAllowed {
                collective: single_marked(category, marked)?,
            }
        }
    };

    let rule = CategoryRule::new(category, policy, members);
    Ok(if category.is_scoped() {
        rule.with_sigil(sigil)
    } else {
        rule
    })
}

fn single_marked(category: Category, mut marked: Vec<String>) -> Result<String> {
    match (marked.pop(), marked.is_empty()) {
        (Some(verb), true) => Ok(verb),
        (found, _) => Err(VocabularyError::MarkerCount {
            category,
            found: marked.len() + usize::from(found.is_some()),
        }),
    }
}
