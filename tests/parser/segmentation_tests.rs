//! Segmentation tests.
//!
//! Tests for splitting statements into ordered positive and negative
//! segments.

use verbline_foundation::Polarity;
use verbline_parser::{ParserConfig, Segment, Segmentation, Segmenter};

fn segment(input: &str) -> Segmentation {
    Segmenter::new(&ParserConfig::default()).segment(input)
}

fn pairs(segments: &[Segment]) -> Vec<(u32, &str)> {
    segments.iter().map(|s| (s.order, s.text.as_str())).collect()
}

#[test]
fn negative_marker_switches_bucket() {
    let out = segment("alpha/-beta");
    assert_eq!(pairs(&out.positives), vec![(1, "alpha")]);
    assert_eq!(pairs(&out.negatives), vec![(2, "beta")]);
}

#[test]
fn positive_marker_keeps_bucket() {
    let out = segment("alpha//beta");
    assert_eq!(pairs(&out.positives), vec![(1, "alpha"), (2, "beta")]);
    assert!(out.negatives.is_empty());
}

#[test]
fn negative_cancels_matching_positive() {
    let out = segment("alpha//beta/-beta");
    assert_eq!(pairs(&out.positives), vec![(1, "alpha")]);
    assert_eq!(pairs(&out.negatives), vec![(3, "beta")]);
    assert_eq!(out.cancelled, 1);
}

#[test]
fn cancellation_ignores_case() {
    let out = segment("find Light /- light");
    assert_eq!(pairs(&out.positives), vec![(1, "find Light")]);

    let out = segment("Light // find dark /- LIGHT");
    assert_eq!(pairs(&out.positives), vec![(2, "find dark")]);
    assert_eq!(pairs(&out.negatives), vec![(3, "LIGHT")]);
}

#[test]
fn quoted_markers_are_inert() {
    let out = segment(r#"find "a//b /- c" // d"#);
    assert_eq!(pairs(&out.positives), vec![(1, r#"find "a//b /- c""#), (2, "d")]);
    assert!(out.negatives.is_empty());
    assert!(!out.unterminated_quote);
}

#[test]
fn escaped_slash_is_not_a_marker() {
    let out = segment(r"find a\//b\/-c");
    assert_eq!(out.len(), 1);
    assert_eq!(out.positives[0].text, r"find a\//b\/-c");
}

#[test]
fn lone_slash_is_text() {
    let out = segment("find a/b // /x");
    assert_eq!(pairs(&out.positives), vec![(1, "find a/b"), (2, "/x")]);
}

#[test]
fn unterminated_quote_runs_to_end() {
    let out = segment("find \"open // ended");
    assert_eq!(out.len(), 1);
    assert!(out.unterminated_quote);
}

#[test]
fn empty_runs_consume_order() {
    let out = segment("// alpha //   // beta /-");
    assert_eq!(pairs(&out.positives), vec![(1, "alpha"), (3, "beta")]);
    assert!(out.negatives.is_empty());
}

#[test]
fn iteration_lists_positives_first() {
    let out = segment("a /- b // c");
    let polarities: Vec<_> = out.iter().map(|s| s.polarity).collect();
    assert_eq!(
        polarities,
        vec![Polarity::Positive, Polarity::Positive, Polarity::Negative]
    );
    let orders: Vec<_> = out.iter().map(|s| s.order).collect();
    assert_eq!(orders, vec![1, 3, 2]);
}

#[test]
fn custom_markers() {
    let config = ParserConfig::default().with_markers('|', '+', '~');
    let out = Segmenter::new(&config).segment("alpha|+beta|~gamma // delta");
    assert_eq!(pairs(&out.positives), vec![(1, "alpha"), (2, "beta")]);
    assert_eq!(pairs(&out.negatives), vec![(3, "gamma // delta")]);
}
