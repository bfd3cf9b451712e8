//! End-to-end scenarios against a small synthetic vocabulary.

use verbline_foundation::{Category, NormalizeError, Scope};
use verbline_parser::{ParseContext, ParserConfig, Statement};

use crate::common::synthetic;

#[test]
fn search_promotes_to_canonical_verb() {
    let vocab = synthetic();
    let config = ParserConfig::default();
    let ctx = ParseContext::new(&vocab, &config);

    let out = Statement::new("search light // find dark", &ctx).normalize(&ctx);
    let search = out.reduction(Category::Search).unwrap();
    assert_eq!(search.scope, Scope::Statement);
    assert_eq!(search.verb.as_deref(), Some("find"));
    assert!(out.errors().is_none());
}

#[test]
fn search_without_canonical_verb_conflicts() {
    let vocab = synthetic();
    let config = ParserConfig::default();
    let ctx = ParseContext::new(&vocab, &config);

    let out = Statement::new("search light // seek dark", &ctx).normalize(&ctx);
    let search = out.reduction(Category::Search).unwrap();
    assert_eq!(search.scope, Scope::Undefined);
    assert!(search.verb.is_none());
    assert_eq!(
        out.errors(),
        Some(
            &[NormalizeError::search_multiple_verbs(
                "find",
                vec!["search".to_string(), "seek".to_string()]
            )][..]
        )
    );
}

#[test]
fn repeated_non_collective_removal_conflicts() {
    let vocab = synthetic();
    let config = ParserConfig::default();
    let ctx = ParseContext::new(&vocab, &config);

    let out = Statement::new("remove span // remove host", &ctx).normalize(&ctx);
    let removal = out.reduction(Category::Removal).unwrap();
    assert_eq!(removal.scope, Scope::Undefined);
    assert!(removal.verb.is_none());
    assert_eq!(
        out.errors(),
        Some(&[NormalizeError::collective_violation(Category::Removal, "clear", "remove")][..])
    );
    assert_eq!(
        out.messages()[0],
        "Only the verb 'clear' can be combined into multiple removal segments. Other verbs such as 'remove' cannot be combined"
    );
}

#[test]
fn search_and_display_are_exclusive() {
    let vocab = synthetic();
    let config = ParserConfig::default();
    let ctx = ParseContext::new(&vocab, &config);

    let out = Statement::new("find light // print dark", &ctx).normalize(&ctx);
    assert_eq!(out.scope(), Scope::Undefined);
    assert!(
        out.errors()
            .unwrap()
            .contains(&NormalizeError::SearchWithDisplay)
    );
}

#[test]
fn unrecognized_verbs_leave_system_scope() {
    let vocab = synthetic();
    let config = ParserConfig::default();
    let ctx = ParseContext::new(&vocab, &config);

    let out = Statement::new("locate light // output dark", &ctx).normalize(&ctx);
    assert_eq!(out.scope(), Scope::System);
    assert!(out.errors().is_none());
    assert!(out.commands().is_empty());
}
