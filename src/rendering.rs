//! Rendering of a token sequence into a plain text string.

use crate::tokens::{Token, TokenType};
use std::fmt;

/// Errors raised while rendering a token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A token type outside the fallback table reached the renderer without
    /// text. This is a contract violation by the converter that produced the
    /// token, and it aborts the document's conversion.
    MissingText(TokenType),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingText(token_type) => {
                write!(f, "token of type {:?} has no text and no default rendering", token_type)
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Concatenates the texts of `token_sequence`, in order.
///
/// Tokens with text contribute it verbatim. Tokens without text are rendered
/// through a per-type fallback table:
///
/// - [TokenType::Whitespace] becomes a single U+0020 SPACE
/// - [TokenType::ExplicitLineBreak] and [TokenType::ImplicitLineBreak]
///   become a single U+000A LINE FEED
/// - [TokenType::ParagraphBoundary] becomes two U+000A LINE FEED characters
///
/// Any other type without text is a [RenderError].
pub fn render_token_sequence(token_sequence: &[Token]) -> Result<String, RenderError> {
    let mut out = String::new();

    for token in token_sequence {
        match token.text() {
            Some(text) => out.push_str(text),
            None => render_special_token(token.token_type(), &mut out)?,
        }
    }

    Ok(out)
}

fn render_special_token(token_type: TokenType, out: &mut String) -> Result<(), RenderError> {
    match token_type {
        TokenType::ParagraphBoundary => out.push_str("\n\n"),
        TokenType::ExplicitLineBreak | TokenType::ImplicitLineBreak => out.push('\n'),
        TokenType::Whitespace => out.push(' '),
        other => return Err(RenderError::MissingText(other)),
    }
    Ok(())
}
