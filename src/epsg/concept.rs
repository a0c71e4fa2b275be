//! Extraction of SKOS concept fields from EPSG GML documents.

use super::ExtractionError;
use chrono::NaiveDate;
use libxml::parser::Parser;
use libxml::tree::Node;
use libxml::xpath::Context;

/// GML 3.2 namespace of the CRS definition elements.
const GML_NS: &str = "http://www.opengis.net/gml/3.2";
/// XLink namespace of the reference attributes.
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
/// EPSG dataset namespace of the registry metadata elements.
const EPSG_NS: &str = "urn:x-ogp:spec:schema-xsd:EPSG:1.0:dataset";

// The fixed query sequence run against every CRS document.
const SOURCE: &str = "//epsg:informationSource/text()";
const REVISION_DATE: &str = "//epsg:revisionDate/text()";
const CHANGE_IDS: &str = "//epsg:changeID/@xlink:href";
const DEPRECATION_FLAG: &str = "//epsg:sourceGeographicCRS/@xlink:href";
const NOTATION: &str = "//gml:identifier/text()";
const PREF_LABEL: &str = "//gml:name/text()";
const SCOPE_NOTE: &str = "//gml:scope/text()";

/// Registry lifecycle status of a CRS entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegistryStatus {
    /// The entry is current.
    Stable,
    /// The entry has been withdrawn or superseded.
    Deprecated,
}

/// The fields read from a single CRS definition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConceptRecord {
    /// Informational provenance of the registry entry.
    pub source: String,
    /// Revision date of the entry. Extracted for parity with the upstream
    /// mapping; not emitted into the output graph.
    pub modified: NaiveDate,
    /// Change-request hrefs, in document order, duplicates retained.
    pub history_refs: Vec<String>,
    /// Registry lifecycle status.
    pub status: RegistryStatus,
    /// Unique identifier of the CRS.
    pub notation: String,
    /// Human-readable name of the CRS.
    pub pref_label: String,
    /// Usage description of the CRS.
    pub scope_note: String,
}

/// Extract the SKOS concept fields from a GML document.
///
/// Runs a fixed sequence of namespace-qualified XPath queries against the
/// parsed tree. Single-valued fields take the first match; the change-ID
/// query collects every match in document order.
///
/// # Errors
/// Errors if the document is not well-formed XML, if a required
/// single-valued field has no match, or if the revision date is not a
/// calendar date.
pub fn extract(gml: &str) -> Result<ConceptRecord, ExtractionError> {
    let parser = Parser::default();
    let doc = parser.parse_string(gml)?;
    let ctx = Context::new(&doc).map_err(|()| ExtractionError::Context)?;
    for (prefix, href) in [("gml", GML_NS), ("xlink", XLINK_NS), ("epsg", EPSG_NS)] {
        ctx.register_namespace(prefix, href)
            .map_err(|()| ExtractionError::Context)?;
    }

    let revision_date = first_text(&ctx, REVISION_DATE)?;
    let modified =
        NaiveDate::parse_from_str(&revision_date, "%Y-%m-%d").map_err(|source| {
            ExtractionError::InvalidRevisionDate {
                value: revision_date.clone(),
                source,
            }
        })?;

    // Deprecation is signalled by the literal string "true"; any other
    // value, or no attribute at all, leaves the entry stable. The attribute
    // queried here is named like a source-CRS reference in the EPSG schema,
    // so whether it is the right deprecation signal is an open question
    // with the registry. Kept as-is pending domain clarification.
    let deprecated = all_matches(&ctx, DEPRECATION_FLAG)?
        .first()
        .is_some_and(|flag| flag == "true");
    let status = if deprecated {
        RegistryStatus::Deprecated
    } else {
        RegistryStatus::Stable
    };

    Ok(ConceptRecord {
        source: first_text(&ctx, SOURCE)?,
        modified,
        history_refs: all_matches(&ctx, CHANGE_IDS)?,
        status,
        notation: first_text(&ctx, NOTATION)?,
        pref_label: first_text(&ctx, PREF_LABEL)?,
        scope_note: first_text(&ctx, SCOPE_NOTE)?,
    })
}

/// First match of a required single-valued query.
fn first_text(ctx: &Context, query: &'static str) -> Result<String, ExtractionError> {
    all_matches(ctx, query)?
        .into_iter()
        .next()
        .ok_or(ExtractionError::MissingField(query))
}

/// Every match of a query, in document order.
fn all_matches(ctx: &Context, query: &'static str) -> Result<Vec<String>, ExtractionError> {
    let matches = ctx
        .evaluate(query)
        .map_err(|()| ExtractionError::Query(query))?;
    Ok(matches
        .get_nodes_as_vec()
        .iter()
        .map(Node::get_content)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gda94_gml(deprecation_flag: Option<&str>, change_ids: &[&str]) -> String {
        let flag = deprecation_flag
            .map(|value| format!(r#"<epsg:sourceGeographicCRS xlink:href="{value}"/>"#))
            .unwrap_or_default();
        let changes = change_ids
            .iter()
            .map(|href| format!(r#"<epsg:changeID xlink:href="{href}"/>"#))
            .collect::<String>();
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<gml:GeodeticCRS xmlns:gml="http://www.opengis.net/gml/3.2"
                 xmlns:xlink="http://www.w3.org/1999/xlink"
                 xmlns:epsg="urn:x-ogp:spec:schema-xsd:EPSG:1.0:dataset"
                 gml:id="epsg-crs-4283">
  <gml:metaDataProperty>
    <epsg:CommonMetaData>
      <epsg:informationSource>ICSM</epsg:informationSource>
      <epsg:revisionDate>2006-11-13</epsg:revisionDate>
      {changes}
      {flag}
    </epsg:CommonMetaData>
  </gml:metaDataProperty>
  <gml:identifier codeSpace="OGP">4283</gml:identifier>
  <gml:name>GDA94</gml:name>
  <gml:scope>Horizontal component of 3D system.</gml:scope>
</gml:GeodeticCRS>"#
        )
    }

    #[test]
    fn test_extract_when_document_complete_expect_all_fields() {
        let gml = gda94_gml(None, &["CR1", "CR2"]);
        let actual = extract(&gml).expect("extraction should succeed");
        assert_eq!("ICSM", actual.source);
        assert_eq!(
            NaiveDate::from_ymd_opt(2006, 11, 13).expect("valid date"),
            actual.modified
        );
        assert_eq!(vec!["CR1", "CR2"], actual.history_refs);
        assert_eq!(RegistryStatus::Stable, actual.status);
        assert_eq!("4283", actual.notation);
        assert_eq!("GDA94", actual.pref_label);
        assert_eq!("Horizontal component of 3D system.", actual.scope_note);
    }

    #[test]
    fn test_extract_when_flag_true_expect_deprecated() {
        let gml = gda94_gml(Some("true"), &["CR1"]);
        let actual = extract(&gml).expect("extraction should succeed");
        assert_eq!(RegistryStatus::Deprecated, actual.status);
    }

    #[test]
    fn test_extract_when_flag_false_expect_stable() {
        let gml = gda94_gml(Some("false"), &["CR1"]);
        let actual = extract(&gml).expect("extraction should succeed");
        assert_eq!(RegistryStatus::Stable, actual.status);
    }

    #[test]
    fn test_extract_when_flag_malformed_expect_stable() {
        // Only the literal string "true" marks deprecation.
        let gml = gda94_gml(Some("TRUE"), &["CR1"]);
        let actual = extract(&gml).expect("extraction should succeed");
        assert_eq!(RegistryStatus::Stable, actual.status);
    }

    #[test]
    fn test_extract_when_flag_absent_expect_stable() {
        let gml = gda94_gml(None, &["CR1"]);
        let actual = extract(&gml).expect("extraction should succeed");
        assert_eq!(RegistryStatus::Stable, actual.status);
    }

    #[test]
    fn test_extract_when_change_ids_duplicated_expect_order_and_duplicates() {
        let gml = gda94_gml(None, &["CR2", "CR1", "CR2"]);
        let actual = extract(&gml).expect("extraction should succeed");
        assert_eq!(vec!["CR2", "CR1", "CR2"], actual.history_refs);
    }

    #[test]
    fn test_extract_when_no_change_ids_expect_empty_history() {
        let gml = gda94_gml(None, &[]);
        let actual = extract(&gml).expect("extraction should succeed");
        assert!(actual.history_refs.is_empty());
    }

    #[test]
    fn test_extract_when_identifier_missing_expect_missing_field_error() {
        let gml = gda94_gml(None, &["CR1"])
            .replace(r#"<gml:identifier codeSpace="OGP">4283</gml:identifier>"#, "");
        let actual = extract(&gml).unwrap_err();
        assert!(matches!(actual, ExtractionError::MissingField(NOTATION)));
        let expected = "missing expected field";
        assert!(
            actual.to_string().contains(expected),
            "\"{actual}\" doesn't contain {expected}"
        );
    }

    #[test]
    fn test_extract_when_source_missing_expect_missing_field_error() {
        let gml = gda94_gml(None, &["CR1"])
            .replace("<epsg:informationSource>ICSM</epsg:informationSource>", "");
        let actual = extract(&gml).unwrap_err();
        assert!(matches!(actual, ExtractionError::MissingField(SOURCE)));
    }

    #[test]
    fn test_extract_when_revision_date_malformed_expect_invalid_date_error() {
        let gml = gda94_gml(None, &["CR1"]).replace("2006-11-13", "13 November 2006");
        let actual = extract(&gml).unwrap_err();
        assert!(matches!(
            actual,
            ExtractionError::InvalidRevisionDate { .. }
        ));
    }

    #[test]
    fn test_extract_when_document_malformed_expect_parse_error() {
        let actual = extract("<gml:GeodeticCRS").unwrap_err();
        assert!(matches!(actual, ExtractionError::Malformed(_)));
    }
}
