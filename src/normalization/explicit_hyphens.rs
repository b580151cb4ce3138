//! Merging of words explicitly hyphenated in the source markup.

use crate::normalization::TokenSequenceNormalizer;
use crate::tokens::{Token, TokenType};

/// A [TokenSequenceNormalizer] that merges words explicitly hyphenated with
/// a [TokenType::Hyphenation] token.
///
/// All [TokenType::Hyphenation] tokens and all immediately subsequent
/// whitespace and line break tokens (until, not including, the first token
/// of any other type) are discarded: the hyphen and the layout break behind
/// it are a pure rendering artifact, and dropping both joins the word.
pub struct ExplicitHyphensNormalizer;

impl TokenSequenceNormalizer for ExplicitHyphensNormalizer {
    fn normalize_token_sequence(&self, token_sequence: Vec<Token>) -> Vec<Token> {
        let mut result = Vec::with_capacity(token_sequence.len());

        let mut after_separated_word = false;
        for token in token_sequence {
            match token.token_type() {
                TokenType::ExplicitLineBreak
                | TokenType::ImplicitLineBreak
                | TokenType::Whitespace => {
                    if after_separated_word {
                        continue;
                    }
                }
                TokenType::Hyphenation => {
                    after_separated_word = true;
                    continue;
                }
                _ => after_separated_word = false,
            }
            result.push(token);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Token {
        Token::new(TokenType::Text, Some(s.to_string()))
    }

    fn hyphenation() -> Token {
        Token::new(TokenType::Hyphenation, Some("\u{ac}".to_string()))
    }

    #[test]
    fn hyphen_and_following_break_are_discarded() {
        let tokens = vec![
            text("far"),
            hyphenation(),
            Token::new(TokenType::ImplicitLineBreak, None),
            text("fetched"),
        ];
        assert_eq!(
            ExplicitHyphensNormalizer.normalize_token_sequence(tokens),
            vec![text("far"), text("fetched")]
        );
    }

    #[test]
    fn whitespace_after_the_break_is_discarded_too() {
        let tokens = vec![
            text("far"),
            hyphenation(),
            Token::EXPLICIT_LINE_BREAK,
            Token::new(TokenType::Whitespace, None),
            text("fetched"),
        ];
        assert_eq!(
            ExplicitHyphensNormalizer.normalize_token_sequence(tokens),
            vec![text("far"), text("fetched")]
        );
    }

    #[test]
    fn breaks_without_preceding_hyphenation_survive() {
        let tokens = vec![
            text("a"),
            Token::new(TokenType::ImplicitLineBreak, None),
            text("b"),
        ];
        assert_eq!(
            ExplicitHyphensNormalizer.normalize_token_sequence(tokens.clone()),
            tokens
        );
    }

    #[test]
    fn discarding_stops_at_the_next_text_token() {
        let tokens = vec![
            text("far"),
            hyphenation(),
            Token::new(TokenType::ImplicitLineBreak, None),
            text("fetched"),
            Token::new(TokenType::Whitespace, None),
            text("idea"),
        ];
        assert_eq!(
            ExplicitHyphensNormalizer.normalize_token_sequence(tokens),
            vec![
                text("far"),
                text("fetched"),
                Token::new(TokenType::Whitespace, None),
                text("idea"),
            ]
        );
    }
}
