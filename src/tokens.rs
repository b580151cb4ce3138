//! Core token types shared across conversion, normalization and rendering.
//!
//!     A converted document is represented as a flat sequence of tokens
//!     between DOM traversal and the final rendered string. Keeping the
//!     intermediate representation this small is what makes the
//!     normalization passes simple: every pass is a plain function from
//!     one token sequence to another.
//!
//! Token Layers
//!
//!     Token types ([TokenType]) are the fine-grained vocabulary: which kind
//!     of line break, whether a hyphen was explicit markup or a guess, and
//!     so on. Some types are not treated differently by the current passes
//!     but represent distinctions in the input that could matter to future
//!     passes, so they are kept apart.
//!
//!     Token type classes ([TokenTypeClass]) are the coarse grouping the
//!     collapser and the boundary trims operate on: line breaks of any kind,
//!     intra-line whitespace, and text. The class of a type is fixed at
//!     definition time and never overridden per token.
//!
//! Conversion Masks
//!
//!     Every token carries a [Conversions] bit mask naming the output
//!     variants it belongs to. Placeholders such as footnote brackets are
//!     marked [Conversions::HUMAN] so that tool-oriented output never sees
//!     them; almost everything else is [Conversions::ALL].

use serde::Serialize;
use std::ops::BitOr;

/// Output variants a token is intended for, used as bit flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Conversions(u8);

impl Conversions {
    /// Conversion to a textual representation for use by humans.
    /// Images and other non-textual material become placeholders.
    pub const HUMAN: Conversions = Conversions(0b01);

    /// Conversion to a textual representation for text-processing tools.
    /// Non-textual material is left out entirely.
    pub const TOOLS: Conversions = Conversions(0b10);

    /// Material that appears in the output of any conversion.
    pub const ALL: Conversions = Conversions(0b11);

    /// Whether this mask and `variant` share at least one bit.
    pub fn includes(self, variant: Conversions) -> bool {
        self.0 & variant.0 != 0
    }
}

impl BitOr for Conversions {
    type Output = Conversions;

    fn bitor(self, rhs: Conversions) -> Conversions {
        Conversions(self.0 | rhs.0)
    }
}

/// Coarse classes of token types, used by the collapser and boundary trims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenTypeClass {
    /// Some kind of line break.
    Linebreaks,
    /// Some kind of whitespace, excluding line breaks.
    Whitespace,
    /// Some kind of text, possibly needing special treatment.
    Text,
}

/// Basic types of output tokens.
///
/// Every type has exactly one associated [TokenTypeClass], retrievable with
/// [TokenType::class].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenType {
    /// A line break explicitly expressed by markup,
    /// such as `<lb/>` in TEI or `<br/>` in XHTML.
    ExplicitLineBreak,
    /// A line break found in the document text (such as U+000A LINE FEED).
    ImplicitLineBreak,
    /// A page break such as `<pb/>` in TEI.
    PageBreak,
    /// The boundary of a paragraph, such as `<p>...</p>`.
    ParagraphBoundary,
    /// Syllabification hyphenation explicitly expressed by markup.
    Hyphenation,
    /// A character of the document text (usually a hyphen at the end of a
    /// line) that possibly represents syllabification hyphenation.
    PossibleHyphenation,
    /// Whitespace inside text lines, such as U+0020 SPACE.
    Whitespace,
    /// Text with no need for special treatment during conversion.
    Text,
}

impl TokenType {
    /// The [TokenTypeClass] of this type. Total and fixed.
    pub fn class(self) -> TokenTypeClass {
        match self {
            TokenType::ExplicitLineBreak
            | TokenType::ImplicitLineBreak
            | TokenType::PageBreak
            | TokenType::ParagraphBoundary => TokenTypeClass::Linebreaks,
            TokenType::Whitespace => TokenTypeClass::Whitespace,
            TokenType::Hyphenation | TokenType::PossibleHyphenation | TokenType::Text => {
                TokenTypeClass::Text
            }
        }
    }
}

/// An output token.
///
/// A token consists of its [TokenType], the conversion types whose output it
/// is supposed to appear in, and optionally a text. Tokens are immutable:
/// normalization passes replace them wholesale instead of editing them.
///
/// Tokens without text are rendered through a per-type fallback table, see
/// [crate::rendering].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    token_type: TokenType,
    text: Option<String>,
    conversions: Conversions,
}

impl Token {
    /// An explicit line break, no text, all conversions.
    pub const EXPLICIT_LINE_BREAK: Token = Token {
        token_type: TokenType::ExplicitLineBreak,
        text: None,
        conversions: Conversions::ALL,
    };

    /// An explicit page break, no text, all conversions.
    pub const PAGE_BREAK: Token = Token {
        token_type: TokenType::PageBreak,
        text: None,
        conversions: Conversions::ALL,
    };

    /// A paragraph boundary, no text, all conversions.
    pub const PARAGRAPH_BOUNDARY: Token = Token {
        token_type: TokenType::ParagraphBoundary,
        text: None,
        conversions: Conversions::ALL,
    };

    /// Whitespace to be included only in conversions for humans. Used to
    /// bracket human-readable annotations such as footnote markers so they
    /// stay invisible to tool-oriented output.
    pub const HUMAN_ONLY_WHITESPACE: Token = Token {
        token_type: TokenType::Whitespace,
        text: None,
        conversions: Conversions::HUMAN,
    };

    /// Creates a token intended for all conversions.
    pub fn new(token_type: TokenType, text: Option<String>) -> Token {
        Token::with_conversions(token_type, text, Conversions::ALL)
    }

    /// Creates a token intended for the given conversions.
    pub fn with_conversions(
        token_type: TokenType,
        text: Option<String>,
        conversions: Conversions,
    ) -> Token {
        Token {
            token_type,
            text,
            conversions,
        }
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// The class of this token's type.
    pub fn class(&self) -> TokenTypeClass {
        self.token_type.class()
    }

    /// The text of this token, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The conversion types whose output this token appears in.
    pub fn conversions(&self) -> Conversions {
        self.conversions
    }
}
