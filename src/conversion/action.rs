//! Instructions returned by converters for single DOM nodes.

use crate::tokens::Token;

/// Primary actions the traversal engine can take upon encountering a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    /// Skip the node. Continue with the next sibling.
    Skip,
    /// Recurse into the tree below this node. Its children are processed
    /// before its next sibling.
    Recurse,
}

/// Instructions for the traversal engine on what to do with a node.
///
/// The instructions consist of the primary [ActionType] and optionally a
/// token, called the *postponed token*, to be appended to the output after
/// the tree below the node has been processed. For a [ActionType::Skip]
/// there is no subtree to wait for, so the postponed token is appended
/// right away.
///
/// The prebuilt actions cover the typical cases so that converters rarely
/// construct one by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAction {
    action_type: ActionType,
    postponed_token: Option<Token>,
}

impl NodeAction {
    /// Skip any tree below this node, appending no token afterwards.
    pub const SKIP: NodeAction = NodeAction {
        action_type: ActionType::Skip,
        postponed_token: None,
    };

    /// Process the tree below this node, appending no token afterwards.
    pub const SIMPLY_RECURSE: NodeAction = NodeAction {
        action_type: ActionType::Recurse,
        postponed_token: None,
    };

    /// Process the tree below this node, then append a paragraph boundary.
    pub const RECURSE_PARAGRAPH: NodeAction = NodeAction {
        action_type: ActionType::Recurse,
        postponed_token: Some(Token::PARAGRAPH_BOUNDARY),
    };

    pub fn new(action_type: ActionType, postponed_token: Option<Token>) -> NodeAction {
        NodeAction {
            action_type,
            postponed_token,
        }
    }

    pub fn action_type(&self) -> ActionType {
        self.action_type
    }

    /// The token to be appended to the output after the tree below the node,
    /// if any.
    pub fn postponed_token(&self) -> Option<&Token> {
        self.postponed_token.as_ref()
    }

    /// Consumes the action, returning the postponed token.
    pub fn into_postponed_token(self) -> Option<Token> {
        self.postponed_token
    }
}
