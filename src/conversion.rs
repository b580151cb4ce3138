//! Conversion of a DOM tree into a token sequence.
//!
//! This module provides:
//! - The generic traversal engine ([extract::extract_token_sequence]) that
//!   walks a document in order and drives a per-format converter
//! - The [NodeConverter] trait, the seam between the generic engine and the
//!   per-format tag tables
//! - Code-point-wise text processing shared by the converters ([text])
//! - The TEI and XHTML converters ([tei], [xhtml])

pub mod action;
pub mod extract;
pub mod tei;
pub mod text;
pub mod xhtml;

pub use action::{ActionType, NodeAction};
pub use extract::extract_token_sequence;
pub use tei::TeiConverter;
pub use xhtml::XhtmlConverter;

use crate::tokens::{Conversions, Token, TokenType};
use roxmltree::Node;

/// Converts single DOM nodes into [Token]s.
///
/// The processing is shallow: the tree below the node is not visited here.
/// Depending on the returned [NodeAction], the traversal engine may call this
/// again for the nodes of that tree.
///
/// Implementations may push an arbitrary number of tokens through `sink`
/// before returning; those tokens are appended to the output immediately,
/// ahead of anything the subtree produces.
pub trait NodeConverter {
    fn action(&self, node: Node, sink: &mut dyn FnMut(Token)) -> NodeAction;
}

/// Emits a placeholder for an image or other non-textual material: the
/// notification text surrounded by paragraph boundaries. The text token (but
/// not the boundaries) is marked [Conversions::HUMAN] so that tool-oriented
/// output does not include it.
pub(crate) fn put_skip_notification(notification_text: &str, sink: &mut dyn FnMut(Token)) {
    sink(Token::PARAGRAPH_BOUNDARY);
    sink(Token::with_conversions(
        TokenType::Text,
        Some(notification_text.to_string()),
        Conversions::HUMAN,
    ));
    sink(Token::PARAGRAPH_BOUNDARY);
}

/// Emits the opening tokens of a footnote bracket and returns the
/// [NodeAction] whose postponed token closes it. All bracket tokens are
/// marked [Conversions::HUMAN].
pub(crate) fn put_footnote(sink: &mut dyn FnMut(Token)) -> NodeAction {
    sink(Token::HUMAN_ONLY_WHITESPACE);
    sink(Token::with_conversions(
        TokenType::Text,
        Some("[Fu\u{df}note:".to_string()),
        Conversions::HUMAN,
    ));
    sink(Token::HUMAN_ONLY_WHITESPACE);
    NodeAction::new(
        ActionType::Recurse,
        Some(Token::with_conversions(
            TokenType::Text,
            Some("]".to_string()),
            Conversions::HUMAN,
        )),
    )
}

/// Whether `node` has an attribute with the given name whose value equals
/// `value` exactly.
pub(crate) fn has_attribute(node: Node, name: &str, value: &str) -> bool {
    node.attribute(name) == Some(value)
}
