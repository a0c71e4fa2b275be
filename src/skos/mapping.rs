//! Mapping of extracted registry records onto SKOS descriptions.
//!
//! Two instantiations of the same pattern: a `ConceptRecord` becomes the
//! triples of a single `skos:Concept`, and a `ConceptSchemeRecord` becomes
//! the triples of the register's `skos:ConceptScheme`.

use crate::epsg::concept::{ConceptRecord, RegistryStatus};
use crate::epsg::index::ConceptSchemeRecord;
use crate::skos::graph::SkosGraph;
use crate::skos::namespaces::{dcterms, reg, reg_status, skos};

/// Subject IRI under which the register's concept scheme is described.
pub const CONCEPT_SCHEME_URI: &str = "http://www.opengis.net/def/crs/EPSG/0/";

/// Fixed label of the register's concept scheme.
const CONCEPT_SCHEME_LABEL: &str = "Coordinate Reference Systems";

const SKOS_NS: &str = "http://www.w3.org/2004/02/skos/core#";
const DCT_NS: &str = "http://purl.org/dc/terms/";
const REG_NS: &str = "http://purl.org/linked-data/registry#";
const REG_STATUS_NS: &str = "http://linked.data.gov.au/def/reg-status/";
const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";
const XSD_TOKEN: &str = "http://www.w3.org/2001/XMLSchema#token";

/// Prefixes bound in the Turtle rendering of a concept description.
pub const CONCEPT_PREFIXES: &[(&str, &str)] = &[
    ("skos", SKOS_NS),
    ("dct", DCT_NS),
    ("reg", REG_NS),
    ("status", REG_STATUS_NS),
    ("xsd", XSD_NS),
];

/// Prefixes bound in the Turtle rendering of a concept-scheme description.
pub const SCHEME_PREFIXES: &[(&str, &str)] = &[("skos", SKOS_NS), ("dct", DCT_NS)];

/// Build the SKOS description of a single CRS concept.
///
/// `concept_uri` is the concept's own URI and becomes the subject of every
/// triple. Each single-valued field is asserted exactly once.
///
/// # Errors
/// Errors if a triple cannot be added to the graph.
pub fn concept_graph(concept_uri: &str, record: &ConceptRecord) -> anyhow::Result<SkosGraph> {
    let mut graph = SkosGraph::new();
    let subject = SkosGraph::iri(concept_uri);

    graph.insert_type(&subject, &skos::Concept)?;
    graph.insert_literal(&subject, &dcterms::source, &record.source)?;
    graph.insert_lang_literal(
        &subject,
        &skos::historyNote,
        &history_note(&record.history_refs),
        "en",
    )?;
    let status = match record.status {
        RegistryStatus::Stable => &reg_status::stable,
        RegistryStatus::Deprecated => &reg_status::deprecated,
    };
    graph.insert_iri(&subject, &reg::status, status)?;
    graph.insert_typed_literal(&subject, &skos::notation, &record.notation, XSD_TOKEN)?;
    graph.insert_literal(&subject, &skos::prefLabel, &record.pref_label)?;
    graph.insert_lang_literal(&subject, &skos::scopeNote, &record.scope_note, "en")?;
    Ok(graph)
}

/// Build the SKOS description of the register's concept scheme.
///
/// Adds one `skos:hasTopConcept` per identifier; identical duplicates
/// collapse because the underlying graph is a triple set.
///
/// # Errors
/// Errors if a triple cannot be added to the graph.
pub fn scheme_graph(record: &ConceptSchemeRecord) -> anyhow::Result<SkosGraph> {
    let mut graph = SkosGraph::new();
    let subject = SkosGraph::iri(CONCEPT_SCHEME_URI);

    graph.insert_type(&subject, &skos::ConceptScheme)?;
    graph.insert_literal(&subject, &skos::prefLabel, CONCEPT_SCHEME_LABEL)?;
    for identifier in &record.identifiers {
        graph.insert_iri(&subject, &skos::hasTopConcept, &SkosGraph::iri(identifier))?;
    }
    Ok(graph)
}

/// The fixed English sentence carrying the change-request history.
fn history_note(history_refs: &[String]) -> String {
    format!(
        "Edits to this entry have the following OGC Change Request IDs: {}",
        history_refs.join(", ")
    )
}
