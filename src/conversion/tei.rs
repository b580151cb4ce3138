//! A [NodeConverter] for TEI documents.
//!
//! Implements shallow node processing for the TEI elements present in
//! digitized-book corpora. Some elements (for example `teiHeader`) are
//! skipped, others insert special tokens such as line breaks or paragraph
//! boundaries. At the character level, line break characters become line
//! break tokens, whitespace characters become whitespace tokens, the long s
//! (U+017F) becomes a plain `s`, `¬` (U+00AC) marks explicit hyphenation and
//! `-` a possible one.

use crate::conversion::text::{self, flush_text_builder, process_text};
use crate::conversion::{has_attribute, put_footnote, put_skip_notification};
use crate::conversion::{ActionType, NodeAction, NodeConverter};
use crate::tokens::{Conversions, Token, TokenType};
use roxmltree::Node;
use std::collections::HashSet;

const TAGS_TO_SKIP: &[&str] = &[
    "teiHeader",
    "front",
    "back",
    "date",
    "sic",
    "fw",
    "ptr",
    "milestone",
    "title",
];

/// Shallow TEI node processing with tag tables built once at construction.
pub struct TeiConverter {
    tags_to_skip: HashSet<&'static str>,
}

impl TeiConverter {
    pub fn new() -> TeiConverter {
        TeiConverter {
            tags_to_skip: TAGS_TO_SKIP.iter().copied().collect(),
        }
    }

    fn process_element(&self, node: Node, sink: &mut dyn FnMut(Token)) -> NodeAction {
        let name = node.tag_name().name();
        if self.tags_to_skip.contains(name) {
            return NodeAction::SKIP;
        }
        match name {
            "space" => {
                sink(Token::new(TokenType::Whitespace, None));
                NodeAction::SKIP
            }
            "lb" => {
                sink(Token::EXPLICIT_LINE_BREAK);
                NodeAction::SIMPLY_RECURSE
            }
            "pb" => {
                sink(Token::PAGE_BREAK);
                NodeAction::SIMPLY_RECURSE
            }
            // Line-shaped elements: an explicit line break before the content
            // and the same break again as the postponed token, so that the
            // items come out symmetrically separated.
            "l" | "row" | "item" => {
                sink(Token::EXPLICIT_LINE_BREAK);
                NodeAction::new(ActionType::Recurse, Some(Token::EXPLICIT_LINE_BREAK))
            }
            "div" if has_attribute(node, "type", "contents") => NodeAction::SKIP,
            "div" | "p" | "list" | "dateline" | "postscript" | "salute" | "table" | "head" => {
                sink(Token::PARAGRAPH_BOUNDARY);
                NodeAction::RECURSE_PARAGRAPH
            }
            "cell" => {
                sink(Token::new(TokenType::Whitespace, Some("\t".to_string())));
                NodeAction::SIMPLY_RECURSE
            }
            "note" => process_note(node, sink),
            "gap" => {
                sink(Token::with_conversions(
                    TokenType::Text,
                    Some("[\u{2026}]".to_string()),
                    Conversions::HUMAN,
                ));
                NodeAction::SKIP
            }
            "figure" | "graphic" => {
                put_skip_notification("[Bild]", sink);
                NodeAction::SKIP
            }
            "formula" => {
                put_skip_notification("[Formel]", sink);
                NodeAction::SKIP
            }
            _ => NodeAction::SIMPLY_RECURSE,
        }
    }
}

impl Default for TeiConverter {
    fn default() -> TeiConverter {
        TeiConverter::new()
    }
}

impl NodeConverter for TeiConverter {
    fn action(&self, node: Node, sink: &mut dyn FnMut(Token)) -> NodeAction {
        if node.is_element() {
            return self.process_element(node, sink);
        }
        if node.is_text() {
            process_text(node.text().unwrap_or(""), process_code_point, sink);
            // text nodes have no children anyway
            return NodeAction::SKIP;
        }
        NodeAction::SIMPLY_RECURSE
    }
}

fn process_note(node: Node, sink: &mut dyn FnMut(Token)) -> NodeAction {
    match node.attribute("place") {
        Some("foot") => put_footnote(sink),
        Some(_) => NodeAction::SKIP,
        None => NodeAction::SIMPLY_RECURSE,
    }
}

fn process_code_point(
    text: &str,
    start: usize,
    end: usize,
    c: char,
    builder: &mut String,
    sink: &mut dyn FnMut(Token),
) {
    match c {
        '\n' | '\r' => {
            flush_text_builder(builder, sink);
            sink(Token::new(
                TokenType::ImplicitLineBreak,
                Some(text[start..end].to_string()),
            ));
        }
        // U+017F LATIN SMALL LETTER LONG S
        '\u{17f}' => builder.push('s'),
        // U+00AC NOT SIGN, used as an explicit hyphenation mark
        '\u{ac}' => {
            flush_text_builder(builder, sink);
            sink(Token::new(TokenType::Hyphenation, Some("\u{ac}".to_string())));
        }
        '-' => {
            flush_text_builder(builder, sink);
            sink(Token::new(
                TokenType::PossibleHyphenation,
                Some("-".to_string()),
            ));
        }
        // U+2028 LINE SEPARATOR
        '\u{2028}' => {
            flush_text_builder(builder, sink);
            sink(Token::new(
                TokenType::ImplicitLineBreak,
                Some(text[start..end].to_string()),
            ));
        }
        // U+2029 PARAGRAPH SEPARATOR
        '\u{2029}' => {
            flush_text_builder(builder, sink);
            sink(Token::new(
                TokenType::ParagraphBoundary,
                Some(text[start..end].to_string()),
            ));
        }
        c if text::is_space_separator(c) => {
            flush_text_builder(builder, sink);
            sink(Token::new(
                TokenType::Whitespace,
                Some(text[start..end].to_string()),
            ));
        }
        c => builder.push(c),
    }
}
