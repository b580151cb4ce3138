//! A [NodeConverter] for XHTML documents.
//!
//! Implements shallow node processing for the XHTML elements present in
//! digitized-book corpora. The `head` element is skipped, block elements
//! insert paragraph boundaries, `br` and table rows insert explicit line
//! breaks. Unlike in TEI, line break characters in the document text are
//! soft-wrapped source formatting and become whitespace, and a `-` counts
//! as a possible hyphenation only at the very end of a text node.

use crate::conversion::text::{self, flush_text_builder, process_text};
use crate::conversion::{has_attribute, put_footnote, put_skip_notification};
use crate::conversion::{ActionType, NodeAction, NodeConverter};
use crate::tokens::{Token, TokenType};
use roxmltree::Node;
use std::collections::HashSet;

const TAGS_TO_SKIP: &[&str] = &["head"];

const BLOCK_ELEMENTS: &[&str] = &[
    "div",
    "p",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "ol",
    "ul",
    "blockquote",
];

/// Shallow XHTML node processing with tag tables built once at construction.
pub struct XhtmlConverter {
    tags_to_skip: HashSet<&'static str>,
    block_elements: HashSet<&'static str>,
}

impl XhtmlConverter {
    pub fn new() -> XhtmlConverter {
        XhtmlConverter {
            tags_to_skip: TAGS_TO_SKIP.iter().copied().collect(),
            block_elements: BLOCK_ELEMENTS.iter().copied().collect(),
        }
    }

    fn process_element(&self, node: Node, sink: &mut dyn FnMut(Token)) -> NodeAction {
        let name = node.tag_name().name();
        if self.tags_to_skip.contains(name) {
            return NodeAction::SKIP;
        }
        match name {
            "br" | "tr" => {
                sink(Token::EXPLICIT_LINE_BREAK);
                NodeAction::SIMPLY_RECURSE
            }
            "img" => {
                put_skip_notification("[Bild]", sink);
                NodeAction::SKIP
            }
            "a" if has_attribute(node, "class", "pageref") => NodeAction::SKIP,
            "a" => NodeAction::SIMPLY_RECURSE,
            "div" | "table" if has_attribute(node, "class", "toc") => NodeAction::SKIP,
            "div" | "table" => {
                sink(Token::PARAGRAPH_BOUNDARY);
                NodeAction::RECURSE_PARAGRAPH
            }
            "span" if has_attribute(node, "class", "footnote") => put_footnote(sink),
            "span" => NodeAction::SIMPLY_RECURSE,
            "td" => {
                sink(Token::new(TokenType::Whitespace, Some("\t".to_string())));
                NodeAction::SIMPLY_RECURSE
            }
            "hr" => {
                sink(Token::PARAGRAPH_BOUNDARY);
                NodeAction::SIMPLY_RECURSE
            }
            "li" => {
                sink(Token::EXPLICIT_LINE_BREAK);
                NodeAction::new(ActionType::Recurse, Some(Token::EXPLICIT_LINE_BREAK))
            }
            _ if self.block_elements.contains(name) => {
                sink(Token::PARAGRAPH_BOUNDARY);
                NodeAction::RECURSE_PARAGRAPH
            }
            _ => NodeAction::SIMPLY_RECURSE,
        }
    }
}

impl Default for XhtmlConverter {
    fn default() -> XhtmlConverter {
        XhtmlConverter::new()
    }
}

impl NodeConverter for XhtmlConverter {
    fn action(&self, node: Node, sink: &mut dyn FnMut(Token)) -> NodeAction {
        if node.is_element() {
            return self.process_element(node, sink);
        }
        if node.is_text() {
            process_text(node.text().unwrap_or(""), process_code_point, sink);
            // text nodes have no children anyway
            return NodeAction::SKIP;
        }
        if node.is_comment() {
            return NodeAction::SKIP;
        }
        NodeAction::SIMPLY_RECURSE
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
        // Line breaks in XHTML source are soft wraps, not document breaks.
        '\n' | '\r' => {
            flush_text_builder(builder, sink);
            sink(Token::new(
                TokenType::Whitespace,
                Some(text[start..end].to_string()),
            ));
        }
        // U+017F LATIN SMALL LETTER LONG S
        '\u{17f}' => builder.push('s'),
        // U+00A4: an OCR artifact standing in for n with tilde
        '\u{a4}' => builder.push('\u{f1}'),
        // U+0303 COMBINING TILDE: the sources mean U+0342 here
        '\u{303}' => builder.push('\u{342}'),
        // Stray typography with no textual value
        '\u{2cd}' | '\u{a6}' | '\u{bf}' => {}
        '-' if end == text.len() => {
            flush_text_builder(builder, sink);
            sink(Token::new(
                TokenType::PossibleHyphenation,
                Some("-".to_string()),
            ));
        }
        c if text::is_space_separator(c) || text::is_control(c) => {
            flush_text_builder(builder, sink);
            sink(Token::new(
                TokenType::Whitespace,
                Some(text[start..end].to_string()),
            ));
        }
        c => builder.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::extract_token_sequence;
    use roxmltree::Document;

    fn extract(xml: &str) -> Vec<Token> {
        let doc = Document::parse(xml).unwrap();
        extract_token_sequence(Some(doc.root_element()), &XhtmlConverter::new())
    }

    #[test]
    fn newlines_become_whitespace() {
        let tokens = extract("<html><body>a\nb</body></html>");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenType::Text, Some("a".into())),
                Token::new(TokenType::Whitespace, Some("\n".into())),
                Token::new(TokenType::Text, Some("b".into())),
            ]
        );
    }

    #[test]
    fn hyphen_is_possible_hyphenation_only_at_text_end() {
        let tokens = extract("<html><body>far-fetched</body></html>");
        assert_eq!(
            tokens,
            vec![Token::new(TokenType::Text, Some("far-fetched".into()))]
        );

        let tokens = extract("<html><body>far-</body></html>");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenType::Text, Some("far".into())),
                Token::new(TokenType::PossibleHyphenation, Some("-".into())),
            ]
        );
    }

    #[test]
    fn pageref_links_and_toc_tables_are_skipped() {
        let tokens = extract(
            "<html><body><a class=\"pageref\">12</a><table class=\"toc\"><tr><td>x</td></tr></table></body></html>",
        );
        assert!(tokens.is_empty());
    }

    #[test]
    fn list_items_are_bracketed_by_line_breaks() {
        let tokens = extract("<html><body><ul><li>a</li></ul></body></html>");
        assert_eq!(
            tokens,
            vec![
                Token::PARAGRAPH_BOUNDARY,
                Token::EXPLICIT_LINE_BREAK,
                Token::new(TokenType::Text, Some("a".into())),
                Token::EXPLICIT_LINE_BREAK,
                Token::PARAGRAPH_BOUNDARY,
            ]
        );
    }

    #[test]
    fn table_cells_separate_with_tabs() {
        let tokens = extract("<html><body><table><tr><td>a</td><td>b</td></tr></table></body></html>");
        assert_eq!(
            tokens,
            vec![
                Token::PARAGRAPH_BOUNDARY,
                Token::EXPLICIT_LINE_BREAK,
                Token::new(TokenType::Whitespace, Some("\t".into())),
                Token::new(TokenType::Text, Some("a".into())),
                Token::new(TokenType::Whitespace, Some("\t".into())),
                Token::new(TokenType::Text, Some("b".into())),
                Token::PARAGRAPH_BOUNDARY,
            ]
        );
    }
}
