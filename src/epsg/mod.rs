//! Readers for the EPSG registry's source document formats.

/// The GML concept extractor.
pub mod concept;
/// The index-listing extractor.
pub mod index;

use libxml::parser::XmlParseError;
use thiserror::Error;

/// Failures raised while pulling fields out of a source document.
///
/// Every variant is unrecoverable where it occurs: the pipeline prints no
/// partial graph.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The source document is not well-formed XML.
    #[error("failed to parse GML document: {0}")]
    Malformed(#[from] XmlParseError),
    /// An XPath context could not be constructed over the parsed tree.
    #[error("failed to prepare XPath context for the GML document")]
    Context,
    /// An XPath query could not be run against the tree.
    #[error("failed to evaluate `{0}` against the GML document")]
    Query(&'static str),
    /// A required single-valued field has no match in the document.
    #[error("missing expected field `{0}`")]
    MissingField(&'static str),
    /// The revision date is not a calendar date.
    #[error("invalid revision date `{value}`: {source}")]
    InvalidRevisionDate {
        /// Raw text of the offending `epsg:revisionDate` element.
        value: String,
        /// Underlying parse failure.
        source: chrono::ParseError,
    },
}
