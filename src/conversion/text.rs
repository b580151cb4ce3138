//! Generic code-point-wise processing of DOM text content.
//!
//! Converters map individual characters to tokens (line breaks, whitespace,
//! hyphen candidates) or accumulate them in a shared text builder. Whenever
//! a non-text token interrupts the accumulation, the builder is flushed as a
//! [TokenType::Text] token, normalized to NFC.

use crate::tokens::{Token, TokenType};
use unicode_normalization::UnicodeNormalization;

/// Processes a single character of DOM text.
///
/// Receives the surrounding text with the byte range of the character, the
/// character itself, the shared text builder and the token sink. The
/// implementation may append to the builder, flush it and emit tokens, or
/// drop the character.
pub type CodePointProcessor =
    fn(text: &str, start: usize, end: usize, c: char, builder: &mut String, sink: &mut dyn FnMut(Token));

/// Iterates over the characters of `text`, calling `process` for each one.
///
/// If any characters are left in the builder after the last one, they are
/// flushed as a final [TokenType::Text] token.
pub fn process_text(text: &str, process: CodePointProcessor, sink: &mut dyn FnMut(Token)) {
    let mut builder = String::new();
    for (start, c) in text.char_indices() {
        let end = start + c.len_utf8();
        process(text, start, end, c, &mut builder, sink);
    }
    if !builder.is_empty() {
        add_text_token(&builder, sink);
    }
}

/// Emits the builder contents as a [TokenType::Text] token (NFC-normalized)
/// and clears the builder. Emits an empty text token if the builder is
/// empty; the collapser drops those.
pub fn flush_text_builder(builder: &mut String, sink: &mut dyn FnMut(Token)) {
    add_text_token(builder, sink);
    builder.clear();
}

fn add_text_token(builder: &str, sink: &mut dyn FnMut(Token)) {
    sink(Token::new(
        TokenType::Text,
        Some(builder.nfc().collect::<String>()),
    ));
}

/// Whether `c` is in Unicode general category Zs (SPACE SEPARATOR).
///
/// `char::is_whitespace` also covers the line and paragraph separators and
/// some control characters, which the converters treat differently, so they
/// are carved out here.
pub fn is_space_separator(c: char) -> bool {
    c.is_whitespace()
        && !matches!(
            c,
            '\t' | '\n' | '\x0b' | '\x0c' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'
        )
}

/// Whether `c` is in Unicode general category Cc (CONTROL).
pub fn is_control(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{1f}' | '\u{7f}'..='\u{9f}')
}
