//! Category reducer tests.
//!
//! Tests for the three multi-match policies and sigil scoping.

use verbline_foundation::{Category, NormalizeError, Scope};
use verbline_parser::{CategoryReducer, Reduction, Vocabulary};

use crate::common::{phrases, synthetic};

fn reduce(
    vocab: &Vocabulary,
    category: Category,
    input: &str,
    seed: Scope,
) -> (Reduction, Vec<NormalizeError>) {
    let arena = phrases(vocab, input);
    let mut errors = Vec::new();
    let reduction = CategoryReducer::new(vocab.rule(category)).reduce(&arena, seed, &mut errors);
    (reduction, errors)
}

// =============================================================================
// Zero Matches
// =============================================================================

#[test]
fn no_match_is_undefined_without_error() {
    let vocab = synthetic();
    for category in Category::ALL {
        let (reduction, errors) = reduce(&vocab, category, "light // dark /- void", Scope::System);
        assert_eq!(reduction.scope, Scope::Undefined);
        assert!(reduction.verb.is_none());
        assert!(reduction.phrases.is_empty());
        assert!(errors.is_empty());
    }
}

#[test]
fn other_categories_are_ignored() {
    let vocab = synthetic();
    let (reduction, errors) = reduce(&vocab, Category::Display, "find light", Scope::Statement);
    assert!(!reduction.is_defined());
    assert!(errors.is_empty());
}

// =============================================================================
// PromoteToCanonical
// =============================================================================

#[test]
fn single_search_verb_is_kept() {
    let vocab = synthetic();
    let (reduction, errors) = reduce(&vocab, Category::Search, "seek light", Scope::Statement);
    assert_eq!(reduction.verb.as_deref(), Some("seek"));
    assert_eq!(reduction.scope, Scope::Statement);
    assert!(errors.is_empty());
}

#[test]
fn repeated_search_verb_keeps_every_phrase() {
    let vocab = synthetic();
    let (reduction, errors) = reduce(
        &vocab,
        Category::Search,
        "seek light // seek dark /- seek void",
        Scope::Statement,
    );
    assert_eq!(reduction.verb.as_deref(), Some("seek"));
    assert_eq!(reduction.phrases.len(), 3);
    assert!(errors.is_empty());
}

#[test]
fn failed_promotion_lists_verbs_in_first_seen_order() {
    let vocab = synthetic();
    let (reduction, errors) = reduce(
        &vocab,
        Category::Search,
        "seek a // search b // seek c",
        Scope::Statement,
    );
    assert!(!reduction.is_accepted());
    assert_eq!(reduction.phrases.len(), 3);
    assert_eq!(
        errors,
        vec![NormalizeError::search_multiple_verbs(
            "find",
            vec!["seek".to_string(), "search".to_string()]
        )]
    );
}

// =============================================================================
// SingleOnly
// =============================================================================

#[test]
fn display_conflict_names_every_verb() {
    let vocab = Vocabulary::standard().unwrap();
    let (reduction, errors) = reduce(
        &vocab,
        Category::Display,
        "print a // output b // display c // print d",
        Scope::Statement,
    );
    assert_eq!(reduction.scope, Scope::Undefined);
    assert!(reduction.verb.is_none());
    assert_eq!(
        errors,
        vec![NormalizeError::multiple_verbs(
            Category::Display,
            vec!["print".to_string(), "output".to_string(), "display".to_string()]
        )]
    );
}

// =============================================================================
// CollectiveAllowed
// =============================================================================

#[test]
fn collective_verb_spans_phrases() {
    let vocab = synthetic();
    let (reduction, errors) = reduce(
        &vocab,
        Category::Removal,
        "#clear span // #clear host",
        Scope::System,
    );
    assert_eq!(reduction.verb.as_deref(), Some("clear"));
    assert_eq!(reduction.scope, Scope::System);
    assert_eq!(reduction.phrases.len(), 2);
    assert!(errors.is_empty());
}

#[test]
fn single_non_collective_phrase_is_accepted() {
    let vocab = synthetic();
    let (reduction, errors) = reduce(&vocab, Category::Removal, "remove span", Scope::System);
    assert_eq!(reduction.verb.as_deref(), Some("remove"));
    assert_eq!(reduction.scope, Scope::System);
    assert!(errors.is_empty());
}

#[test]
fn mixed_removal_verbs_conflict() {
    let vocab = synthetic();
    let (reduction, errors) = reduce(
        &vocab,
        Category::Removal,
        "#clear span // remove host",
        Scope::System,
    );
    assert!(!reduction.is_defined());
    assert_eq!(
        errors,
        vec![NormalizeError::multiple_verbs(
            Category::Removal,
            vec!["clear".to_string(), "remove".to_string()]
        )]
    );
}

// =============================================================================
// Sigil Scope
// =============================================================================

#[test]
fn bare_verb_keeps_system_seed() {
    let vocab = Vocabulary::standard().unwrap();
    let (reduction, _) = reduce(&vocab, Category::Removal, "#clear a // clear b", Scope::System);
    assert_eq!(reduction.verb.as_deref(), Some("clear"));
    assert_eq!(reduction.scope, Scope::System);
}

#[test]
fn sigiled_verb_keeps_system() {
    let vocab = Vocabulary::standard().unwrap();
    let (reduction, _) = reduce(&vocab, Category::Status, "#get span", Scope::System);
    assert_eq!(reduction.verb.as_deref(), Some("get"));
    assert_eq!(reduction.scope, Scope::System);
}

#[test]
fn sigil_raises_statement_seed() {
    let vocab = Vocabulary::standard().unwrap();
    let (reduction, _) = reduce(&vocab, Category::Persistence, "#set span=7", Scope::Statement);
    assert_eq!(reduction.verb.as_deref(), Some("set"));
    assert_eq!(reduction.scope, Scope::System);
}

#[test]
fn bare_verb_under_statement_seed() {
    let vocab = Vocabulary::standard().unwrap();
    let (reduction, _) = reduce(
        &vocab,
        Category::Persistence,
        "set span=7 // set host=a",
        Scope::Statement,
    );
    assert_eq!(reduction.scope, Scope::Statement);

    let (reduction, _) = reduce(
        &vocab,
        Category::Persistence,
        "set span=7 // #set host=a",
        Scope::Statement,
    );
    assert_eq!(reduction.scope, Scope::System);
}
