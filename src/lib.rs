//! # totext
//!
//! Plain text extraction from TEI and XHTML documents.
//!
//! A document is converted in two stages. First the DOM tree is flattened
//! into a sequence of typed tokens (line breaks, whitespace, text runs) by
//! the generic traversal engine in [conversion], driven by a per-format
//! converter. Then the sequence is rewritten by the normalization pipeline
//! in [normalization] (run collapsing, hyphenation merging, ellipsis
//! folding) and finally rendered to a string by [rendering].
//!
//! The easiest entry point is [pipeline::ConversionPipeline]:
//!
//! ```ignore
//! use totext::pipeline::ConversionPipeline;
//! use totext::tokens::Conversions;
//!
//! let pipeline = ConversionPipeline::new();
//! let text = pipeline.convert_str(xml, Conversions::TOOLS)?;
//! ```

pub mod conversion;
pub mod normalization;
pub mod pipeline;
pub mod rendering;
pub mod split;
pub mod tokens;
