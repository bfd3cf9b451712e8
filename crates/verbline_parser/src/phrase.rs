//! Phrases: segments enriched with their verb token.

use std::collections::HashMap;

use verbline_foundation::{Category, PhraseId, Polarity};

use crate::segment::{Segment, Segmentation};
use crate::vocabulary::VerbLookup;

/// A segment with its extracted verb.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Phrase {
    /// Process-unique identifier.
    pub id: PhraseId,
    /// Scan position of the underlying segment.
    pub order: u32,
    /// Inclusion or exclusion.
    pub polarity: Polarity,
    /// Trimmed segment text.
    pub text: String,
    /// Leading verb token, when the vocabulary recognizes it.
    pub verb: Option<String>,
    /// Category that owns `verb`.
    pub category: Option<Category>,
}

impl Phrase {
    /// Wraps a segment, extracting its verb through `lookup`.
    #[must_use]
    pub fn wrap<L>(segment: &Segment, lookup: &L, quote: char) -> Self
    where
        L: VerbLookup + ?Sized,
    {
        let (verb, category) = match leading_token(&segment.text, quote) {
            Some(token) => match lookup.is_verb(&token) {
                Some(category) => (Some(token), Some(category)),
                None => (None, None),
            },
            None => (None, None),
        };

        Self {
            id: PhraseId::next(),
            order: segment.order,
            polarity: segment.polarity,
            text: segment.text.clone(),
            verb,
            category,
        }
    }

    /// Returns the verb token, if any.
    #[must_use]
    pub fn verb(&self) -> Option<&str> {
        self.verb.as_deref()
    }
}

/// First whitespace-delimited token outside quotes, lowercased.
///
/// A phrase opening with a quote has no verb.
fn leading_token(text: &str, quote: char) -> Option<String> {
    let first = text.chars().next()?;
    if first == quote {
        return None;
    }
    let token: String = text
        .chars()
        .take_while(|c| !c.is_whitespace() && *c != quote)
        .collect();
    Some(token.to_lowercase())
}

/// Phrases of one statement, in construction order, with lookup by id.
#[derive(Clone, Debug, Default)]
pub struct PhraseArena {
    phrases: Vec<Phrase>,
    /// `PhraseId` -> position in `phrases`
    index: HashMap<PhraseId, usize>,
}

impl PhraseArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps every segment, positives first.
    #[must_use]
    pub fn from_segments<L>(segmentation: &Segmentation, lookup: &L, quote: char) -> Self
    where
        L: VerbLookup + ?Sized,
    {
        let mut arena = Self::new();
        for segment in segmentation.iter() {
            arena.push(Phrase::wrap(segment, lookup, quote));
        }
        arena
    }

    /// Appends a phrase and returns its id.
    pub fn push(&mut self, phrase: Phrase) -> PhraseId {
        let id = phrase.id;
        self.index.insert(id, self.phrases.len());
        self.phrases.push(phrase);
        id
    }

    /// Looks up a phrase by id.
    #[must_use]
    pub fn get(&self, id: PhraseId) -> Option<&Phrase> {
        self.index.get(&id).map(|&i| &self.phrases[i])
    }

    /// Iterates in construction order.
    pub fn iter(&self) -> std::slice::Iter<'_, Phrase> {
        self.phrases.iter()
    }

    /// All phrases in construction order.
    #[must_use]
    pub fn as_slice(&self) -> &[Phrase] {
        &self.phrases
    }

    /// Number of phrases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Returns true if there are no phrases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl<'a> IntoIterator for &'a PhraseArena {
    type Item = &'a Phrase;
    type IntoIter = std::slice::Iter<'a, Phrase>;

    fn into_iter(self) -> Self::IntoIter {
        self.phrases.iter()
    }
}
