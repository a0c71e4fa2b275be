/// This module contains the RDF namespaces used by the converters.
use sophia::api::namespace;

/// Simple Knowledge Organization System core vocabulary.
pub mod skos {
    use super::namespace;
    namespace! {
        "http://www.w3.org/2004/02/skos/core#",
        Concept,
        ConceptScheme,
        prefLabel,
        notation,
        scopeNote,
        historyNote,
        hasTopConcept
    }
}

/// Dublin Core Terms ontology.
pub mod dcterms {
    use super::namespace;

    namespace! {
        "http://purl.org/dc/terms/",
        source
    }
}

/// Registry ontology.
pub mod reg {
    use super::namespace;

    namespace! {
        "http://purl.org/linked-data/registry#",
        status
    }
}

/// Registry lifecycle status vocabulary.
pub mod reg_status {
    use super::namespace;

    namespace! {
        "http://linked.data.gov.au/def/reg-status/",
        stable,
        deprecated
    }
}
