/// The helper methods for building SKOS graphs and rendering them as Turtle.
use sophia::api::ns::{rdf, NsTerm};
use sophia::api::prefix::Prefix;
use sophia::api::serializer::{Stringifier, TripleSerializer};
use sophia::api::term::LanguageTag;
use sophia::api::{prelude::*, term::SimpleTerm, MownStr};
use sophia::inmem::graph::FastGraph;
use sophia::turtle::serializer::turtle::{TurtleConfig, TurtleSerializer};

/// A SKOS output graph under construction.
pub struct SkosGraph {
    /// The underlying graph.
    pub g: FastGraph,
}

impl SkosGraph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            g: FastGraph::new(),
        }
    }

    /// Term for an IRI held as a plain string.
    #[must_use]
    pub fn iri(value: &str) -> SimpleTerm<'_> {
        SimpleTerm::Iri(IriRef::new_unchecked(MownStr::from_str(value)))
    }

    /// Declare `subject` an instance of `class`.
    ///
    /// # Errors
    /// Errors if the triple cannot be indexed into the graph.
    pub fn insert_type(&mut self, subject: &SimpleTerm, class: &NsTerm<'_>) -> anyhow::Result<()> {
        self.g.insert(subject, &rdf::type_, class)?;
        Ok(())
    }

    /// Add a plain literal triple.
    ///
    /// # Errors
    /// Errors if the triple cannot be indexed into the graph.
    pub fn insert_literal(
        &mut self,
        subject: &SimpleTerm,
        predicate: &NsTerm<'_>,
        value: &str,
    ) -> anyhow::Result<()> {
        self.g.insert(subject, predicate, value)?;
        Ok(())
    }

    /// Add a language-tagged literal triple.
    ///
    /// # Errors
    /// Errors if the triple cannot be indexed into the graph.
    pub fn insert_lang_literal(
        &mut self,
        subject: &SimpleTerm,
        predicate: &NsTerm<'_>,
        value: &str,
        tag: &str,
    ) -> anyhow::Result<()> {
        let object = SimpleTerm::LiteralLanguage(
            MownStr::from_str(value),
            LanguageTag::new_unchecked(MownStr::from_str(tag)),
        );
        self.g.insert(subject, predicate, &object)?;
        Ok(())
    }

    /// Add a literal triple typed with `datatype`.
    ///
    /// # Errors
    /// Errors if the triple cannot be indexed into the graph.
    pub fn insert_typed_literal(
        &mut self,
        subject: &SimpleTerm,
        predicate: &NsTerm<'_>,
        value: &str,
        datatype: &str,
    ) -> anyhow::Result<()> {
        let object = SimpleTerm::LiteralDatatype(
            MownStr::from_str(value),
            IriRef::new_unchecked(MownStr::from_str(datatype)),
        );
        self.g.insert(subject, predicate, &object)?;
        Ok(())
    }

    /// Add a triple whose object is an IRI term.
    ///
    /// # Errors
    /// Errors if the triple cannot be indexed into the graph.
    pub fn insert_iri(
        &mut self,
        subject: &SimpleTerm,
        predicate: &NsTerm<'_>,
        object: impl Term,
    ) -> anyhow::Result<()> {
        self.g.insert(subject, predicate, object)?;
        Ok(())
    }

    /// Render the graph as pretty Turtle with the given prefix bindings.
    ///
    /// # Errors
    /// Errors if the graph cannot be serialized.
    pub fn to_turtle(&self, prefixes: &[(&str, &str)]) -> anyhow::Result<String> {
        let prefix_map = prefixes
            .iter()
            .map(|&(prefix, namespace)| {
                (
                    Prefix::new_unchecked(prefix.into()),
                    Iri::new_unchecked(namespace.into()),
                )
            })
            .collect();
        let config = TurtleConfig::new()
            .with_pretty(true)
            .with_own_prefix_map(prefix_map);
        let mut serializer = TurtleSerializer::new_stringifier_with_config(config);
        let turtle = serializer.serialize_graph(&self.g)?.to_string();
        Ok(turtle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skos::namespaces::skos;
    use sophia::api::graph::Graph;

    #[test]
    fn test_insert_type_when_repeated_expect_single_triple() {
        let mut graph = SkosGraph::new();
        let subject = SkosGraph::iri("urn:x-test:subject");
        graph
            .insert_type(&subject, &skos::Concept)
            .expect("insert should succeed");
        graph
            .insert_type(&subject, &skos::Concept)
            .expect("insert should succeed");
        assert_eq!(1, graph.g.triples().count());
    }

    #[test]
    fn test_to_turtle_when_prefix_bound_expect_prefixed_names() {
        let mut graph = SkosGraph::new();
        let subject = SkosGraph::iri("urn:x-test:subject");
        graph
            .insert_type(&subject, &skos::Concept)
            .expect("insert should succeed");
        let turtle = graph
            .to_turtle(&[("skos", "http://www.w3.org/2004/02/skos/core#")])
            .expect("serialization should succeed");
        assert!(
            turtle.contains("skos:Concept"),
            "\"{turtle}\" doesn't contain skos:Concept"
        );
    }

    #[test]
    fn test_to_turtle_when_lang_literal_expect_language_tag() {
        let mut graph = SkosGraph::new();
        let subject = SkosGraph::iri("urn:x-test:subject");
        graph
            .insert_lang_literal(&subject, &skos::scopeNote, "Scope of the entry.", "en")
            .expect("insert should succeed");
        let turtle = graph
            .to_turtle(&[("skos", "http://www.w3.org/2004/02/skos/core#")])
            .expect("serialization should succeed");
        assert!(
            turtle.contains("\"Scope of the entry.\"@en"),
            "\"{turtle}\" doesn't contain the tagged literal"
        );
    }
}
