//! Heuristics for hyphens at the end of lines.
//!
//! In digitized-book corpora, line breaks after hyphens are usually not
//! whitespace; they are breaks that were present in the original document
//! for layout (typesetting) reasons, like:
//!
//! ```text
//! that this is a far-
//! fetched assumption
//! ```
//!
//! This pass therefore discards line break tokens that follow a
//! [TokenType::PossibleHyphenation] token. While most such hyphens are part
//! of the spelling (as in *far-fetched*), some sources also break inside
//! hyphenated words, as in:
//!
//! ```text
//! auf dem Tische und den nächsten Stühlen herum-
//! lagen, bückte sich nach einem Journal
//! ```
//!
//! where *herumlagen* is one word. Whether to resolve those too is decided
//! by the `no_hyphens` flag. When the heuristic is active, a possible
//! hyphenation at the end of a line is kept or dropped by looking at the
//! first word of the next line (designed for German orthography):
//!
//! - If it starts with a capital letter that is not followed by a second
//!   capital (a capitalized word, not an acronym), the hyphen is preserved
//!   (*Cigaretten-Parfüm*, *Bibel-Capitel*).
//! - If the first full word is "und" or "oder", the hyphen is preserved and
//!   whitespace is inserted after it (*Wein- und Spielnacht*, *gleich- oder
//!   mehrwerthigen*). This rule applies even with the heuristic turned off.
//! - Otherwise, the hyphen is removed.

use crate::normalization::TokenSequenceNormalizer;
use crate::tokens::{Token, TokenType};

/// A [TokenSequenceNormalizer] that resolves possible hyphenations at line
/// ends. See the module docs for the heuristic.
pub struct ImplicitHyphensNormalizer {
    /// Turn off the hyphenation heuristic and keep every
    /// [TokenType::PossibleHyphenation] token in the output.
    no_hyphens: bool,
}

impl ImplicitHyphensNormalizer {
    pub fn new(no_hyphens: bool) -> ImplicitHyphensNormalizer {
        ImplicitHyphensNormalizer { no_hyphens }
    }
}

impl TokenSequenceNormalizer for ImplicitHyphensNormalizer {
    fn normalize_token_sequence(&self, token_sequence: Vec<Token>) -> Vec<Token> {
        let mut result = Vec::with_capacity(token_sequence.len());

        let mut after_line_break = false;
        let mut pending_minus: Option<Token> = None;
        for token in token_sequence {
            match token.token_type() {
                TokenType::ExplicitLineBreak | TokenType::ImplicitLineBreak => {
                    after_line_break = true;
                    if pending_minus.is_some() {
                        // The break behind a line-final hyphen is layout.
                        continue;
                    }
                }
                TokenType::PossibleHyphenation => {
                    pending_minus = Some(token);
                    after_line_break = false;
                    continue;
                }
                TokenType::Text if after_line_break && pending_minus.is_some() => {
                    if let Some(pending) = pending_minus.take() {
                        let text = token.text().unwrap_or("");
                        if starts_with_und_or_oder(text) {
                            result.push(pending);
                            result.push(Token::new(TokenType::Whitespace, None));
                        } else if self.no_hyphens || starts_with_uppercase(text) {
                            result.push(pending);
                        }
                    }
                }
                _ => {
                    // Any other token flushes a pending hyphen unchanged.
                    if let Some(pending) = pending_minus.take() {
                        result.push(pending);
                    }
                    after_line_break = false;
                }
            }
            result.push(token);
        }

        result
    }
}

fn starts_with_und_or_oder(text: &str) -> bool {
    starts_with_word(text, "und") || starts_with_word(text, "oder")
}

/// Whether `text` begins with `word` as a whole word: the character after
/// it, if any, must not be a letter.
fn starts_with_word(text: &str, word: &str) -> bool {
    match text.strip_prefix(word) {
        Some(rest) => !rest.chars().next().is_some_and(|c| c.is_alphabetic()),
        None => false,
    }
}

/// Whether `text` starts with an uppercase letter that is not immediately
/// followed by a second one, i.e. looks like a capitalized word rather than
/// an acronym.
fn starts_with_uppercase(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => !chars.next().is_some_and(|c| c.is_uppercase()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Token {
        Token::new(TokenType::Text, Some(s.to_string()))
    }

    fn minus() -> Token {
        Token::new(TokenType::PossibleHyphenation, Some("-".to_string()))
    }

    fn line_break() -> Token {
        Token::new(TokenType::ImplicitLineBreak, None)
    }

    fn run(no_hyphens: bool, tokens: Vec<Token>) -> Vec<Token> {
        ImplicitHyphensNormalizer::new(no_hyphens).normalize_token_sequence(tokens)
    }

    #[test]
    fn lowercase_follower_drops_the_hyphen() {
        let tokens = vec![text("herum"), minus(), line_break(), text("lagen")];
        assert_eq!(run(false, tokens), vec![text("herum"), text("lagen")]);
    }

    #[test]
    fn capitalized_follower_keeps_the_hyphen() {
        let tokens = vec![text("Cigaretten"), minus(), line_break(), text("Parfüm")];
        assert_eq!(
            run(false, tokens),
            vec![text("Cigaretten"), minus(), text("Parfüm")]
        );
    }

    #[test]
    fn acronym_follower_drops_the_hyphen() {
        let tokens = vec![text("a"), minus(), line_break(), text("UND")];
        assert_eq!(run(false, tokens), vec![text("a"), text("UND")]);
    }

    #[test]
    fn und_follower_keeps_hyphen_and_inserts_whitespace() {
        let tokens = vec![text("Wein"), minus(), line_break(), text("und")];
        assert_eq!(
            run(false, tokens),
            vec![
                text("Wein"),
                minus(),
                Token::new(TokenType::Whitespace, None),
                text("und"),
            ]
        );
    }

    #[test]
    fn oder_rule_applies_even_without_the_heuristic() {
        let tokens = vec![text("gleich"), minus(), line_break(), text("oder")];
        assert_eq!(
            run(true, tokens),
            vec![
                text("gleich"),
                minus(),
                Token::new(TokenType::Whitespace, None),
                text("oder"),
            ]
        );
    }

    #[test]
    fn und_must_be_a_whole_word() {
        // "undurchsichtig" starts with "und" but continues with letters.
        let tokens = vec![text("herum"), minus(), line_break(), text("undurchsichtig")];
        assert_eq!(
            run(false, tokens),
            vec![text("herum"), text("undurchsichtig")]
        );
    }

    #[test]
    fn heuristic_off_keeps_every_hyphen() {
        let tokens = vec![text("herum"), minus(), line_break(), text("lagen")];
        assert_eq!(
            run(true, tokens),
            vec![text("herum"), minus(), text("lagen")]
        );
    }

    #[test]
    fn pending_hyphen_without_line_break_is_flushed_unchanged() {
        let tokens = vec![text("far"), minus(), text("fetched")];
        assert_eq!(
            run(false, tokens.clone()),
            vec![text("far"), minus(), text("fetched")]
        );
    }

    #[test]
    fn multiple_line_breaks_after_the_hyphen_are_consumed() {
        let tokens = vec![
            text("herum"),
            minus(),
            line_break(),
            Token::EXPLICIT_LINE_BREAK,
            text("lagen"),
        ];
        assert_eq!(run(false, tokens), vec![text("herum"), text("lagen")]);
    }

    #[test]
    fn single_capital_letter_follower_keeps_the_hyphen() {
        let tokens = vec![text("a"), minus(), line_break(), text("A")];
        assert_eq!(run(false, tokens), vec![text("a"), minus(), text("A")]);
    }
}
