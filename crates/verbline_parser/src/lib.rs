//! Statement segmentation and verb normalization for search-style command
//! lines.
//!
//! This crate turns a typed line like `find light // #clear span /- dark`
//! into one overall scope, a list of errors, and the accepted verbs with the
//! phrases they apply to.
//!
//! # Architecture
//!
//! ```text
//! "find light // search dark /- void"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   SEGMENTER     │  → +1 "find light", +2 "search dark", -3 "void"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PHRASES         │  → verb "find", verb "search", no verb
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CATEGORY        │  → search: find (promoted), display: -, ...
//! │ REDUCERS (×5)   │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RESOLVER        │  → scope System, no errors, {find: [1, 2]}
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Segmentation and sigil characters
//! - [`segment`] - Quote and escape aware statement splitting
//! - [`vocabulary`] - Category rules, the verb lookup, and the definition loader
//! - [`phrase`] - Phrases and the phrase arena
//! - [`reduce`] - The generic per-category reducer
//! - [`resolve`] - Cross-category rules and overall scope
//! - [`statement`] - Statement construction and normalization
//! - [`notify`] - Notification sink
//! - [`stdlib`] - Standard vocabulary

pub mod config;
pub mod error;
pub mod notify;
pub mod phrase;
pub mod reduce;
pub mod resolve;
pub mod segment;
pub mod statement;
pub mod stdlib;
pub mod vocabulary;

// Re-export main types for convenience
pub use config::ParserConfig;
pub use error::{Result, VocabularyError};
pub use notify::{Notifier, NotifyMode, NullNotifier, RecordingNotifier, TracingNotifier};
pub use phrase::{Phrase, PhraseArena};
pub use reduce::{CategoryReducer, Reduction};
pub use resolve::{Command, Normalization, Resolver};
pub use segment::{Segment, Segmentation, Segmenter};
pub use statement::{ParseContext, Statement};
pub use vocabulary::{CategoryRule, Policy, VerbLookup, Vocabulary};
