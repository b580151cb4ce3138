//! Collapsing of token sequences: run merging and boundary trimming.
//!
//! Collapsing happens in three steps, in order:
//!
//! 1. Adjacent tokens whose types share a [TokenTypeClass] other than
//!    [TokenTypeClass::Text] are merged into a single token, following the
//!    precedence rules below. Text-class tokens are never merged; text-class
//!    tokens with an empty string are dropped.
//! 2. Whitespace-class tokens adjacent to linebreak-class tokens, or at the
//!    start or end of the sequence, are removed.
//! 3. Linebreak-class tokens at the start or end of the sequence are
//!    removed.
//!
//! # Merge precedence
//!
//! For linebreak runs: any [TokenType::ParagraphBoundary] wins, else any
//! [TokenType::ExplicitLineBreak] wins, else the merged token is an
//! [TokenType::ImplicitLineBreak]. The last rule applies even when every
//! token in the run is a [TokenType::PageBreak]: page breaks alone are not
//! considered meaningful line separation, and never survive a collapse.
//! Token texts are ignored.
//!
//! For whitespace runs: if any token's text is a single tab, the merged
//! token's text is a single tab; otherwise the first token's text is kept.
//!
//! The merged token keeps the first token's conversion mask.

use crate::tokens::{Token, TokenType, TokenTypeClass};

/// An open run of same-class tokens being merged.
struct Run {
    run_type: TokenType,
    run_class: TokenTypeClass,
    run_text: Option<String>,
    run_conversions: crate::tokens::Conversions,
}

impl Run {
    fn start(token: &Token) -> Run {
        Run {
            run_type: token.token_type(),
            run_class: token.class(),
            run_text: token.text().map(str::to_string),
            run_conversions: token.conversions(),
        }
    }

    fn into_token(self) -> Token {
        Token::with_conversions(self.run_type, self.run_text, self.run_conversions)
    }
}

/// Collapses a token sequence.
///
/// A single pass is not always a fixpoint: removing whitespace in step 2 can
/// leave two linebreak tokens adjacent, which only the next pass merges. The
/// normalization pipeline collapses between every pass, so this converges.
pub fn collapse_token_sequence(token_sequence: Vec<Token>) -> Vec<Token> {
    remove_boundary_linebreaks(remove_boundary_spaces(collapse_runs(token_sequence)))
}

fn collapse_runs(token_sequence: Vec<Token>) -> Vec<Token> {
    let mut result = Vec::with_capacity(token_sequence.len());

    let mut run: Option<Run> = None;
    for token in token_sequence {
        let token_type = token.token_type();
        let token_class = token_type.class();

        if let Some(open) = run.take() {
            if open.run_class == token_class {
                run = Some(open);
            } else {
                result.push(open.into_token());
            }
        }

        if token_class == TokenTypeClass::Text {
            if token.text() == Some("") {
                continue;
            }
            result.push(token);
            continue;
        }

        let open = run.get_or_insert_with(|| Run::start(&token));
        match open.run_class {
            TokenTypeClass::Linebreaks => {
                open.run_type = line_break_precedence(open.run_type, token_type);
            }
            TokenTypeClass::Whitespace => {
                if token.text() == Some("\t") {
                    open.run_text = Some("\t".to_string());
                }
            }
            TokenTypeClass::Text => unreachable!(),
        }
    }

    if let Some(open) = run {
        result.push(open.into_token());
    }

    result
}

/// Folds one more linebreak token into a run. Note that a run of a single
/// page break also hits the `PageBreak`/`PageBreak` case (the first token is
/// folded against itself), so a lone page break already degrades to an
/// implicit line break.
fn line_break_precedence(run_type: TokenType, token_type: TokenType) -> TokenType {
    match run_type {
        TokenType::PageBreak => {
            if token_type == TokenType::PageBreak {
                TokenType::ImplicitLineBreak
            } else {
                token_type
            }
        }
        TokenType::ImplicitLineBreak => match token_type {
            TokenType::ExplicitLineBreak => TokenType::ExplicitLineBreak,
            TokenType::ParagraphBoundary => TokenType::ParagraphBoundary,
            _ => run_type,
        },
        TokenType::ExplicitLineBreak => {
            if token_type == TokenType::ParagraphBoundary {
                token_type
            } else {
                run_type
            }
        }
        TokenType::ParagraphBoundary => TokenType::ParagraphBoundary,
        _ => unreachable!("run type is always linebreak-class here"),
    }
}

fn remove_boundary_spaces(token_sequence: Vec<Token>) -> Vec<Token> {
    remove_boundary_items(
        token_sequence,
        Some(TokenTypeClass::Linebreaks),
        TokenTypeClass::Whitespace,
    )
}

fn remove_boundary_linebreaks(token_sequence: Vec<Token>) -> Vec<Token> {
    remove_boundary_items(token_sequence, None, TokenTypeClass::Linebreaks)
}

/// Removes tokens of `class_to_remove` that touch the sequence boundary or a
/// token of `boundary_class`. A buffered run of removable tokens is kept
/// only when a token of some third class follows it (and one preceded it).
fn remove_boundary_items(
    token_sequence: Vec<Token>,
    boundary_class: Option<TokenTypeClass>,
    class_to_remove: TokenTypeClass,
) -> Vec<Token> {
    let n = token_sequence.len();
    let mut result = Vec::with_capacity(n);

    // Index of the first buffered removable token, or None while the buffer
    // is poisoned by a boundary (or the sequence start).
    let mut start: Option<usize> = None;
    for (i, token) in token_sequence.iter().enumerate() {
        let token_class = token.class();
        if Some(token_class) == boundary_class {
            start = None;
            result.push(token.clone());
        } else if token_class != class_to_remove {
            if let Some(s) = start {
                result.extend(token_sequence[s..i].iter().cloned());
            }
            result.push(token.clone());
            start = Some(i + 1);
        }
    }

    result
}
