//! Token sequence normalization.
//!
//! This module provides:
//! - The sequence collapser ([collapse::collapse_token_sequence]): run
//!   merging with precedence rules and boundary trimming
//! - The [TokenSequenceNormalizer] trait and the three rewriters behind it
//!   ([explicit_hyphens], [implicit_hyphens], [ellipsis])
//! - [normalize_token_sequence], which runs a list of normalizers with
//!   collapsing interleaved, and [normalize], the standard selection policy
//!
//! # Pass ordering
//!
//! A collapse runs before every normalizer and once more after the last, so
//! every rewriter sees a sequence with merged runs and trimmed boundaries,
//! and the pipeline ends on one.

pub mod collapse;
pub mod ellipsis;
pub mod explicit_hyphens;
pub mod implicit_hyphens;

pub use collapse::collapse_token_sequence;
pub use ellipsis::EllipsisCharacterNormalizer;
pub use explicit_hyphens::ExplicitHyphensNormalizer;
pub use implicit_hyphens::ImplicitHyphensNormalizer;

use crate::tokens::{Token, TokenType};

/// Normalizes token sequences with respect to one criterion.
///
/// Implementations are pure functions from sequence to sequence; they hold
/// configuration, never per-call state.
pub trait TokenSequenceNormalizer {
    fn normalize_token_sequence(&self, token_sequence: Vec<Token>) -> Vec<Token>;
}

/// Applies `normalizers` in order, collapsing the sequence before each one
/// and after the last.
pub fn normalize_token_sequence(
    mut token_sequence: Vec<Token>,
    normalizers: &[&dyn TokenSequenceNormalizer],
) -> Vec<Token> {
    for normalizer in normalizers {
        token_sequence =
            normalizer.normalize_token_sequence(collapse_token_sequence(token_sequence));
    }
    collapse_token_sequence(token_sequence)
}

/// Normalizes a token sequence with the standard set of normalizers.
///
/// Sequences that contain any [TokenType::Hyphenation] token come from
/// sources with explicit hyphenation markup, so every end-of-line hyphen can
/// be trusted and the implicit heuristic is turned off:
/// [ExplicitHyphensNormalizer], then [ImplicitHyphensNormalizer] without the
/// heuristic, then [EllipsisCharacterNormalizer]. All other sequences get
/// [ImplicitHyphensNormalizer] with the heuristic and the ellipsis pass.
pub fn normalize(token_sequence: Vec<Token>) -> Vec<Token> {
    let ellipsis = EllipsisCharacterNormalizer;
    if contains_explicit_hyphens(&token_sequence) {
        let explicit = ExplicitHyphensNormalizer;
        let implicit = ImplicitHyphensNormalizer::new(true);
        normalize_token_sequence(token_sequence, &[&explicit, &implicit, &ellipsis])
    } else {
        let implicit = ImplicitHyphensNormalizer::new(false);
        normalize_token_sequence(token_sequence, &[&implicit, &ellipsis])
    }
}

fn contains_explicit_hyphens(tokens: &[Token]) -> bool {
    tokens
        .iter()
        .any(|token| token.token_type() == TokenType::Hyphenation)
}
