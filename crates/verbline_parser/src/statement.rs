//! Statements: one user-typed line, segmented and ready to normalize.

use verbline_foundation::Polarity;

use crate::config::ParserConfig;
use crate::notify::{Notifier, NotifyMode, TracingNotifier};
use crate::phrase::PhraseArena;
use crate::resolve::{Normalization, Resolver};
use crate::segment::{Segment, Segmentation, Segmenter};
use crate::vocabulary::Vocabulary;

/// Everything a statement needs from its host, passed explicitly.
#[derive(Clone, Copy)]
pub struct ParseContext<'a> {
    /// Verb tables and policies.
    pub vocabulary: &'a Vocabulary,
    /// Segmentation characters.
    pub config: &'a ParserConfig,
    /// Sink for design-level problems.
    pub notifier: &'a dyn Notifier,
}

impl<'a> ParseContext<'a> {
    /// Creates a context that notifies through `tracing`.
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary, config: &'a ParserConfig) -> Self {
        Self {
            vocabulary,
            config,
            notifier: &TracingNotifier,
        }
    }

    /// Builder method to replace the notifier.
    #[must_use]
    pub fn with_notifier(mut self, notifier: &'a dyn Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    fn notify(&self, mode: NotifyMode, message: &str) {
        self.notifier.notify(mode, message);
    }
}

impl std::fmt::Debug for ParseContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseContext")
            .field("vocabulary", &self.vocabulary)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// A trimmed input line with its segments and phrases.
#[derive(Clone, Debug)]
pub struct Statement {
    text: String,
    segmentation: Segmentation,
    /// `None` when the trimmed text was empty.
    phrases: Option<PhraseArena>,
}

impl Statement {
    /// Segments `input` and wraps every segment into a phrase.
    #[must_use]
    pub fn new(input: &str, ctx: &ParseContext<'_>) -> Self {
        let text = input.trim().to_string();
        if text.is_empty() {
            return Self {
                text,
                segmentation: Segmentation::default(),
                phrases: None,
            };
        }

        let segmentation = Segmenter::new(ctx.config).segment(&text);
        if segmentation.unterminated_quote {
            tracing::warn!(statement = %text, "unterminated quote");
            ctx.notify(
                NotifyMode::Warning,
                &format!("Unterminated quote in statement: {text}"),
            );
        }

        let phrases = PhraseArena::from_segments(&segmentation, ctx.vocabulary, ctx.config.quote);
        Self {
            text,
            segmentation,
            phrases: Some(phrases),
        }
    }

    /// The trimmed statement text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Phrases, or `None` for an empty statement.
    #[must_use]
    pub fn phrases(&self) -> Option<&PhraseArena> {
        self.phrases.as_ref()
    }

    /// Positive segments in scan order.
    #[must_use]
    pub fn positives(&self) -> &[Segment] {
        &self.segmentation.positives
    }

    /// Negative segments in scan order.
    #[must_use]
    pub fn negatives(&self) -> &[Segment] {
        &self.segmentation.negatives
    }

    /// Raw segment texts, positives first.
    #[must_use]
    pub fn raw_segments(&self) -> Vec<&str> {
        self.segmentation.iter().map(|s| s.text.as_str()).collect()
    }

    /// Polarity of each entry in [`raw_segments`](Self::raw_segments).
    #[must_use]
    pub fn polarities(&self) -> Vec<Polarity> {
        self.segmentation.iter().map(|s| s.polarity).collect()
    }

    /// Normalizes the statement's verbs.
    ///
    /// Repeated calls return identical results. An empty statement is a
    /// driver error: it is reported to the notifier and rejected.
    #[must_use]
    pub fn normalize(&self, ctx: &ParseContext<'_>) -> Normalization {
        let Some(phrases) = &self.phrases else {
            ctx.notify(
                NotifyMode::Error,
                "Driver design error: normalization requested for an empty statement",
            );
            return Normalization::driver_error();
        };
        Resolver::new(ctx.vocabulary).resolve(phrases)
    }
}
