//! The generic traversal engine: DOM tree in, token sequence out.
//!
//! The walk is iterative with an explicit frame stack. Postponed tokens must
//! be emitted after an entire subtree has been processed, at arbitrary
//! depth, so they are pushed as frames of their own instead of being tied to
//! the call stack.

use crate::conversion::{ActionType, NodeConverter};
use crate::tokens::Token;
use roxmltree::Node;

/// A unit of pending work: either a node still to be visited, or a postponed
/// token whose subtree has been fully processed by the time the frame is
/// popped.
enum Frame<'a, 'input> {
    Visit(Node<'a, 'input>),
    Emit(Token),
}

/// Converts a DOM node and the tree below it into a token sequence using the
/// given [NodeConverter].
///
/// `converter` is called for the nodes of the tree in document order,
/// skipping the trees below nodes for which it returns an action of
/// [ActionType::Skip]. For a tree `<a><b><c/><d/></b><e/></a>` with a
/// converter that always recurses, the call order is `a`, `b`, `c`, `d`,
/// `e`.
///
/// For every node, the output contains, in this order: the tokens the
/// converter pushed through its sink, the fully processed output of the
/// node's children (each following the same rule), and the node's postponed
/// token, if any. A `None` root yields an empty sequence.
pub fn extract_token_sequence(
    subtree_root: Option<Node>,
    converter: &dyn NodeConverter,
) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    if let Some(root) = subtree_root {
        stack.push(Frame::Visit(root));
    }

    while let Some(frame) = stack.pop() {
        let node = match frame {
            Frame::Emit(token) => {
                tokens.push(token);
                continue;
            }
            Frame::Visit(node) => node,
        };

        let action = converter.action(node, &mut |token| tokens.push(token));
        match action.action_type() {
            ActionType::Skip => {
                // No subtree to wait for; the postponed token goes out now.
                if let Some(token) = action.into_postponed_token() {
                    tokens.push(token);
                }
            }
            ActionType::Recurse => {
                // The deferred-token frame goes on first so that it is
                // popped only after all child frames are done.
                if let Some(token) = action.into_postponed_token() {
                    stack.push(Frame::Emit(token));
                }
                // Children in reverse, so that LIFO popping restores
                // document order.
                let mut child = node.last_child();
                while let Some(c) = child {
                    stack.push(Frame::Visit(c));
                    child = c.prev_sibling();
                }
            }
        }
    }

    tokens
}
