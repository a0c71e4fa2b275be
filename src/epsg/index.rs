//! Extraction of concept identifiers from the register index listing.

use lazy_static::lazy_static;
use regex::Regex;

/// The concept identifiers discovered in a register index document.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConceptSchemeRecord {
    /// Concept URIs, in order of first appearance, duplicates retained.
    pub identifiers: Vec<String>,
}

/// Extract every `<identifier>` tag's inner text from raw index text.
///
/// The index format is tightly controlled, so a tag-delimited scan is
/// sufficient; no field is mandatory and an index without identifiers is
/// an unusual but valid result.
#[must_use]
pub fn extract(index: &str) -> ConceptSchemeRecord {
    lazy_static! {
        static ref IDENTIFIER: Regex =
            Regex::new("<identifier>(.*)</identifier>").expect("Failed to compile regex!?!");
    }
    let identifiers = IDENTIFIER
        .captures_iter(index)
        .filter_map(|captures| captures.get(1))
        .map(|matching| matching.as_str().to_owned())
        .collect();
    ConceptSchemeRecord { identifiers }
}
