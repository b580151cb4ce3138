//! High-level document-to-text pipeline.
//!
//! This module ties the stages together: parse the XML, pick the converter
//! for the document's root element, extract the token sequence, filter it by
//! conversion mask, normalize, render. Named conversion profiles and their
//! registry live in [config].

pub mod config;

pub use config::{FormatSpec, ProfileRegistry, ConversionProfile, VariantSpec};

use crate::conversion::{extract_token_sequence, NodeConverter, TeiConverter, XhtmlConverter};
use crate::normalization::normalize;
use crate::rendering::{render_token_sequence, RenderError};
use crate::tokens::{Conversions, Token};
use roxmltree::Document;
use std::fmt;

/// Errors that can occur while converting a document.
#[derive(Debug)]
pub enum ConversionError {
    /// The input is not well-formed XML.
    Xml(roxmltree::Error),
    /// No converter is registered for the document's root element.
    UnsupportedRoot(String),
    /// A token reached the renderer in violation of its contract.
    Render(RenderError),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::Xml(e) => write!(f, "XML error: {}", e),
            ConversionError::UnsupportedRoot(name) => {
                write!(f, "no converter for root element \"{}\"", name)
            }
            ConversionError::Render(e) => write!(f, "rendering error: {}", e),
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<roxmltree::Error> for ConversionError {
    fn from(err: roxmltree::Error) -> Self {
        ConversionError::Xml(err)
    }
}

impl From<RenderError> for ConversionError {
    fn from(err: RenderError) -> Self {
        ConversionError::Render(err)
    }
}

/// The document formats the pipeline can convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Tei,
    Xhtml,
}

impl DocumentFormat {
    /// Picks the format from a document's root element name, `TEI` or
    /// `html`.
    pub fn detect(root_name: &str) -> Option<DocumentFormat> {
        match root_name {
            "TEI" => Some(DocumentFormat::Tei),
            "html" => Some(DocumentFormat::Xhtml),
            _ => None,
        }
    }
}

/// Converts one XML document into plain text.
///
/// The stages run in a fixed order: extract, filter by conversion mask,
/// normalize, render.
pub struct ConversionPipeline {
    tei: TeiConverter,
    xhtml: XhtmlConverter,
}

impl ConversionPipeline {
    pub fn new() -> ConversionPipeline {
        ConversionPipeline {
            tei: TeiConverter::new(),
            xhtml: XhtmlConverter::new(),
        }
    }

    fn converter_for(&self, format: DocumentFormat) -> &dyn NodeConverter {
        match format {
            DocumentFormat::Tei => &self.tei,
            DocumentFormat::Xhtml => &self.xhtml,
        }
    }

    /// Extracts the raw (unnormalized, unfiltered) token sequence of a
    /// parsed document.
    pub fn extract(&self, document: &Document, format: DocumentFormat) -> Vec<Token> {
        extract_token_sequence(Some(document.root_element()), self.converter_for(format))
    }

    /// Converts a parsed document, detecting the format from its root
    /// element.
    pub fn convert_document(
        &self,
        document: &Document,
        variant: Conversions,
    ) -> Result<String, ConversionError> {
        let root_name = document.root_element().tag_name().name().to_string();
        let format = DocumentFormat::detect(&root_name)
            .ok_or(ConversionError::UnsupportedRoot(root_name))?;
        self.convert_document_as(document, format, variant)
    }

    /// Converts a parsed document with an explicitly chosen format.
    pub fn convert_document_as(
        &self,
        document: &Document,
        format: DocumentFormat,
        variant: Conversions,
    ) -> Result<String, ConversionError> {
        let mut tokens = self.extract(document, format);
        tokens.retain(|token| token.conversions().includes(variant));
        let tokens = normalize(tokens);
        Ok(render_token_sequence(&tokens)?)
    }

    /// Parses and converts an XML string, detecting the format from the root
    /// element.
    pub fn convert_str(&self, xml: &str, variant: Conversions) -> Result<String, ConversionError> {
        let document = Document::parse(xml)?;
        self.convert_document(&document, variant)
    }

    /// Parses and converts an XML string with an explicitly chosen format.
    pub fn convert_str_as(
        &self,
        xml: &str,
        format: DocumentFormat,
        variant: Conversions,
    ) -> Result<String, ConversionError> {
        let document = Document::parse(xml)?;
        self.convert_document_as(&document, format, variant)
    }
}

impl Default for ConversionPipeline {
    fn default() -> ConversionPipeline {
        ConversionPipeline::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_format_from_root_element() {
        assert_eq!(DocumentFormat::detect("TEI"), Some(DocumentFormat::Tei));
        assert_eq!(DocumentFormat::detect("html"), Some(DocumentFormat::Xhtml));
        assert_eq!(DocumentFormat::detect("svg"), None);
    }

    #[test]
    fn unsupported_root_is_an_error() {
        let pipeline = ConversionPipeline::new();
        let err = pipeline
            .convert_str("<svg/>", Conversions::TOOLS)
            .unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedRoot(name) if name == "svg"));
    }

    #[test]
    fn malformed_xml_is_an_error() {
        let pipeline = ConversionPipeline::new();
        let err = pipeline
            .convert_str("<TEI><p>", Conversions::TOOLS)
            .unwrap_err();
        assert!(matches!(err, ConversionError::Xml(_)));
    }

    #[test]
    fn human_variant_sees_placeholders_tools_does_not() {
        let pipeline = ConversionPipeline::new();
        let xml = "<TEI><p>before</p><figure/><p>after</p></TEI>";
        let human = pipeline.convert_str(xml, Conversions::HUMAN).unwrap();
        let tools = pipeline.convert_str(xml, Conversions::TOOLS).unwrap();
        assert_eq!(human, "before\n\n[Bild]\n\nafter");
        assert_eq!(tools, "before\n\nafter");
    }
}
