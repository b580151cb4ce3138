//! Folding of ASCII ellipsis replacements into U+2026.

use crate::normalization::TokenSequenceNormalizer;
use crate::tokens::Token;
use once_cell::sync::Lazy;
use regex::Regex;

/// Two or more stops, each possibly trailed by whitespace.
static ELLIPSIS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\.\s*){2,}").expect("ellipsis pattern is valid")
});

const ELLIPSIS: &str = "\u{2026}";

/// A [TokenSequenceNormalizer] that substitutes U+2026 HORIZONTAL ELLIPSIS
/// for ASCII replacements of that character.
///
/// Substrings of at least two stop (`.`) characters, possibly separated by
/// arbitrary whitespace, are replaced: `"And then . . ."` becomes
/// `"And then …"`. Tokens without text pass through unchanged.
pub struct EllipsisCharacterNormalizer;

impl TokenSequenceNormalizer for EllipsisCharacterNormalizer {
    fn normalize_token_sequence(&self, token_sequence: Vec<Token>) -> Vec<Token> {
        let mut result = Vec::with_capacity(token_sequence.len());

        for token in token_sequence {
            if let Some(text) = token.text() {
                let new_text = ELLIPSIS_PATTERN.replace_all(text, ELLIPSIS);
                if new_text != text {
                    result.push(Token::with_conversions(
                        token.token_type(),
                        Some(new_text.into_owned()),
                        token.conversions(),
                    ));
                    continue;
                }
            }
            result.push(token);
        }

        result
    }
}
