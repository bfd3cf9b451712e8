//! Process-unique phrase identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Sequence identifier assigned to every phrase when it is built.
///
/// Identifiers come from a single process-wide counter, so two phrases never
/// share an id even when they belong to different statements.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhraseId(u64);

impl PhraseId {
    /// Allocates the next identifier.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed))
    }

    /// Wraps a raw sequence number.
    #[must_use]
    pub const fn from_raw(sequence: u64) -> Self {
        Self(sequence)
    }

    /// Returns the raw sequence number.
    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for PhraseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhraseId({})", self.0)
    }
}

impl fmt::Display for PhraseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "phrase#{}", self.0)
    }
}
