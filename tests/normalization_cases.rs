//! Table-driven tests for the full normalization policy.
//!
//! Each case feeds a raw token sequence through [totext::normalization::normalize]
//! and renders the result, checking the policy end to end: normalizer
//! selection, interleaved collapsing and the individual passes.

use rstest::rstest;
use totext::normalization::normalize;
use totext::rendering::render_token_sequence;
use totext::tokens::{Token, TokenType};

fn text(s: &str) -> Token {
    Token::new(TokenType::Text, Some(s.to_string()))
}

fn ws() -> Token {
    Token::new(TokenType::Whitespace, Some(" ".to_string()))
}

fn minus() -> Token {
    Token::new(TokenType::PossibleHyphenation, Some("-".to_string()))
}

fn hyphenation() -> Token {
    Token::new(TokenType::Hyphenation, Some("\u{ac}".to_string()))
}

fn line_break() -> Token {
    Token::new(TokenType::ImplicitLineBreak, None)
}

fn normalize_to_string(tokens: Vec<Token>) -> String {
    render_token_sequence(&normalize(tokens)).expect("normalized sequences should render")
}

#[rstest]
#[case::lowercase_follower_joins_the_word(
    vec![text("herum"), minus(), line_break(), text("lagen")],
    "herumlagen"
)]
#[case::und_follower_keeps_hyphen_and_space(
    vec![text("Wein"), minus(), line_break(), text("und"), ws(), text("Spielnacht")],
    "Wein- und Spielnacht"
)]
#[case::oder_follower_keeps_hyphen_and_space(
    vec![text("gleich"), minus(), line_break(), text("oder")],
    "gleich- oder"
)]
#[case::capitalized_follower_keeps_the_hyphen(
    vec![text("Cigaretten"), minus(), line_break(), text("Parf\u{fc}m")],
    "Cigaretten-Parf\u{fc}m"
)]
#[case::acronym_follower_joins_the_word(
    vec![text("a"), minus(), line_break(), text("UND")],
    "aUND"
)]
#[case::hyphen_inside_a_line_is_untouched(
    vec![text("far"), minus(), text("fetched")],
    "far-fetched"
)]
fn resolves_line_final_hyphens(#[case] tokens: Vec<Token>, #[case] expected: &str) {
    assert_eq!(normalize_to_string(tokens), expected);
}

#[rstest]
#[case::hyphenation_mark_joins_unconditionally(
    vec![text("her"), hyphenation(), line_break(), text("um")],
    "herum"
)]
#[case::plain_hyphens_are_kept_in_marked_documents(
    vec![
        text("her"), hyphenation(), line_break(), text("um"), ws(),
        text("far"), minus(), line_break(), text("fetched"),
    ],
    "herum far-fetched"
)]
fn documents_with_hyphenation_marks_disable_the_heuristic(
    #[case] tokens: Vec<Token>,
    #[case] expected: &str,
) {
    assert_eq!(normalize_to_string(tokens), expected);
}

#[rstest]
#[case::dotted_ellipsis(vec![text("dann...")], "dann\u{2026}")]
#[case::spaced_ellipsis(vec![text("And then . . .")], "And then \u{2026}")]
#[case::sentence_ends_are_untouched(
    vec![text("one."), ws(), text("two.")],
    "one. two."
)]
fn replaces_ellipses(#[case] tokens: Vec<Token>, #[case] expected: &str) {
    assert_eq!(normalize_to_string(tokens), expected);
}

#[rstest]
#[case::page_break_between_paragraphs(
    vec![
        text("a"),
        Token::PARAGRAPH_BOUNDARY,
        Token::PAGE_BREAK,
        Token::PARAGRAPH_BOUNDARY,
        text("b"),
    ],
    "a\n\nb"
)]
#[case::lone_page_break_degrades_to_a_line_break(
    vec![text("a"), Token::PAGE_BREAK, text("b")],
    "a\nb"
)]
#[case::boundary_breaks_are_trimmed(
    vec![Token::EXPLICIT_LINE_BREAK, text("a"), Token::EXPLICIT_LINE_BREAK],
    "a"
)]
fn merges_and_trims_breaks(#[case] tokens: Vec<Token>, #[case] expected: &str) {
    assert_eq!(normalize_to_string(tokens), expected);
}
