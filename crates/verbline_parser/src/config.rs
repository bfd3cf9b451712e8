//! Configuration for segmentation and verb scoping.

/// Characters the segmenter and vocabulary treat as syntax.
///
/// A segment boundary is `marker` followed by `positive` (switch to the
/// inclusion bucket) or by `negative` (switch to the exclusion bucket).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// First character of every segment boundary.
    pub marker: char,

    /// Second boundary character selecting the positive bucket.
    pub positive: char,

    /// Second boundary character selecting the negative bucket.
    pub negative: char,

    /// Escapes the following character.
    pub escape: char,

    /// Opens and closes an inert quoted region.
    pub quote: char,

    /// Prefix marking a verb as system-scoped.
    pub sigil: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            marker: '/',
            positive: '/',
            negative: '-',
            escape: '\\',
            quote: '"',
            sigil: '#',
        }
    }
}

impl ParserConfig {
    /// Creates the default configuration (`//`, `/-`, `\`, `"`, `#`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the boundary characters.
    #[must_use]
    pub fn with_markers(mut self, marker: char, positive: char, negative: char) -> Self {
        self.marker = marker;
        self.positive = positive;
        self.negative = negative;
        self
    }

    /// Builder method to set the escape character.
    #[must_use]
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }

    /// Builder method to set the quote character.
    #[must_use]
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Builder method to set the system scope sigil.
    #[must_use]
    pub fn with_sigil(mut self, sigil: char) -> Self {
        self.sigil = sigil;
        self
    }
}
