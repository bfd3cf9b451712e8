//! Standard vocabulary for search-style command lines.
//!
//! Loaded by [`Vocabulary::standard`](crate::vocabulary::Vocabulary::standard).
//! Hosts with their own verb tables should build a
//! [`Vocabulary`](crate::vocabulary::Vocabulary) from their own definition.

/// Standard verbs definition.
pub const VOCABULARY: &str = r"
;; Searching: every search verb is promoted to `find` when `find` is present
search: find* search seek locate

;; Simple display and file output
display: print display output

;; Setters: `#` makes the setting system-wide
persistence: set* #set save #save

;; Getters
status: get* #get status #status

;; Removal: only `clear` may span several segments
removal: clear* #clear remove delete
";
