//! Splitting a TEI document into its body-level divisions.
//!
//! Corpus tooling sometimes wants one output per chapter instead of one per
//! document. TEI documents keep their chapters as `div` children of
//! `TEI/text/body`; each division here carries its heading (the text of its
//! first `head` child, if any) and the subtree root to convert.

use roxmltree::{Document, Node};

/// One body-level division of a TEI document.
pub struct TeiSplit<'a, 'input> {
    heading: Option<String>,
    subtree_root: Node<'a, 'input>,
}

impl<'a, 'input> TeiSplit<'a, 'input> {
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    pub fn subtree_root(&self) -> Node<'a, 'input> {
        self.subtree_root
    }
}

/// Collects the body-level `div` elements of a TEI document, in document
/// order. Documents without a `text`/`body` structure yield nothing.
pub fn split<'a, 'input>(tei_document: &'a Document<'input>) -> Vec<TeiSplit<'a, 'input>> {
    let mut result = Vec::new();

    for text in element_children(tei_document.root_element(), "text") {
        for body in element_children(text, "body") {
            for div in element_children(body, "div") {
                result.push(TeiSplit {
                    heading: find_heading(div),
                    subtree_root: div,
                });
            }
        }
    }

    result
}

fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == name)
}

fn find_heading(div: Node) -> Option<String> {
    element_children(div, "head")
        .next()
        .map(|head| collect_text(head).trim().to_string())
}

/// The concatenated text content of a subtree.
fn collect_text(node: Node) -> String {
    let mut out = String::new();
    for descendant in node.descendants() {
        if descendant.is_text() {
            if let Some(text) = descendant.text() {
                out.push_str(text);
            }
        }
    }
    out
}
