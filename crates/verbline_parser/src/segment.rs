//! Statement segmentation.
//!
//! Splits a raw statement into polarity-tagged segments. The only
//! delimiters are `//` (switch to the positive bucket) and `/-` (switch to
//! the negative bucket); escaped characters and quoted regions never
//! delimit.

use verbline_foundation::Polarity;

use crate::config::ParserConfig;

/// A trimmed piece of a statement with its polarity and scan position.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Position in the original scan, shared across both polarities.
    pub order: u32,
    /// Inclusion or exclusion.
    pub polarity: Polarity,
    /// Trimmed segment text.
    pub text: String,
}

impl Segment {
    /// Creates a segment.
    #[must_use]
    pub fn new(order: u32, polarity: Polarity, text: impl Into<String>) -> Self {
        Self {
            order,
            polarity,
            text: text.into(),
        }
    }
}

/// Output of [`Segmenter::segment`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// Positive segments in scan order, after cancellation.
    pub positives: Vec<Segment>,
    /// Negative segments in scan order.
    pub negatives: Vec<Segment>,
    /// Number of positive segments removed because a negative matched them.
    pub cancelled: usize,
    /// A quoted region was still open at the end of input.
    pub unterminated_quote: bool,
}

impl Segmentation {
    /// Total number of surviving segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positives.len() + self.negatives.len()
    }

    /// Returns true if no segment survived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positives.is_empty() && self.negatives.is_empty()
    }

    /// Iterates positives then negatives, each in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.positives.iter().chain(self.negatives.iter())
    }

    fn push(&mut self, order: u32, polarity: Polarity, raw: &str) {
        let text = raw.trim();
        if text.is_empty() {
            return;
        }
        let segment = Segment::new(order, polarity, text);
        match polarity {
            Polarity::Positive => self.positives.push(segment),
            Polarity::Negative => self.negatives.push(segment),
        }
    }

    /// Drops positives that a negative segment excludes.
    fn cancel(&mut self) {
        let excluded: Vec<String> = self.negatives.iter().map(|n| n.text.to_lowercase()).collect();
        let before = self.positives.len();
        self.positives
            .retain(|p| !excluded.contains(&p.text.to_lowercase()));
        self.cancelled = before - self.positives.len();
    }
}

/// Splits statements according to a [`ParserConfig`].
#[derive(Clone, Copy, Debug)]
pub struct Segmenter<'c> {
    config: &'c ParserConfig,
}

impl<'c> Segmenter<'c> {
    /// Creates a segmenter for the given configuration.
    #[must_use]
    pub fn new(config: &'c ParserConfig) -> Self {
        Self { config }
    }

    /// Segments a statement.
    ///
    /// - Trims the input; empty input yields no segments
    /// - Every text run that trims to empty still consumes an order value
    /// - A positive segment equal (ignoring case) to a negative one is removed
    #[must_use]
    pub fn segment(&self, input: &str) -> Segmentation {
        let text = input.trim();
        let mut out = Segmentation::default();
        if text.is_empty() {
            return out;
        }

        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut escaped = false;
        let mut quoted = false;
        let mut active = Polarity::Positive;
        let mut last = 0;
        let mut order = 1;
        let mut i = 0;

        while i < chars.len() {
            let (offset, ch) = chars[i];
            i += 1;

            if escaped {
                escaped = false;
                continue;
            }
            if quoted {
                quoted = ch != self.config.quote;
                continue;
            }
            if ch == self.config.escape {
                escaped = true;
                continue;
            }
            if ch == self.config.quote {
                quoted = true;
                continue;
            }
            if ch != self.config.marker {
                continue;
            }

            let Some(&(next_offset, next)) = chars.get(i) else {
                continue;
            };
            let target = if next == self.config.positive {
                Polarity::Positive
            } else if next == self.config.negative {
                Polarity::Negative
            } else {
                continue;
            };

            if last < offset {
                out.push(order, active, &text[last..offset]);
                order += 1;
            }
            active = target;
            last = next_offset + next.len_utf8();
            i += 1;
        }

        if last < text.len() {
            out.push(order, active, &text[last..]);
        }

        out.unterminated_quote = quoted;
        out.cancel();

        tracing::trace!(
            positives = out.positives.len(),
            negatives = out.negatives.len(),
            cancelled = out.cancelled,
            "segmented statement"
        );
        out
    }
}
