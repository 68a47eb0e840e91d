#![forbid(unsafe_code)]

//! Element identifier resolution.
//!
//! Elements referenced from a signature are identified by one of three
//! attribute conventions, tried in this order:
//!
//! 1. `wsu:Id` from the WS-Security utility namespace
//! 2. `xml:id`
//! 3. the first attribute that the document schema declares to be of type ID

use crate::idschema::IdSchema;
use sundbyberg_core::ns;

/// Get the identifier of `element`, or `None` if none of the conventions
/// gives a non-empty value.
pub fn resolve_id<'a>(element: roxmltree::Node<'a, '_>, schema: &IdSchema) -> Option<&'a str> {
    let non_empty = |v: &&str| !v.is_empty();

    element
        .attribute((ns::WSU, ns::attr::WSU_ID))
        .filter(non_empty)
        .or_else(|| element.attribute((ns::XML, ns::attr::XML_ID)).filter(non_empty))
        .or_else(|| {
            element
                .attributes()
                .filter(|a| schema.is_id_attribute(element, a))
                .map(|a| a.value())
                .find(non_empty)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WSU_DECL: &str = r#"xmlns:wsu="http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-utility-1.0.xsd""#;

    fn resolve(xml: &str, schema: &IdSchema) -> Option<String> {
        let doc = roxmltree::Document::parse_with_options(xml, crate::parsing_options()).unwrap();
        resolve_id(doc.root_element(), schema).map(str::to_owned)
    }

    #[test]
    fn test_wsu_id_wins_over_xml_id() {
        let xml = format!(r#"<el {WSU_DECL} xml:id="B" wsu:Id="A"/>"#);
        assert_eq!(resolve(&xml, &IdSchema::new()).as_deref(), Some("A"));
    }

    #[test]
    fn test_xml_id_when_wsu_id_empty() {
        let xml = format!(r#"<el {WSU_DECL} wsu:Id="" xml:id="B"/>"#);
        assert_eq!(resolve(&xml, &IdSchema::new()).as_deref(), Some("B"));
    }

    #[test]
    fn test_unprefixed_id_is_not_wsu_id() {
        // A plain `Id` attribute is only an identifier when declared as one
        assert_eq!(resolve(r#"<el Id="A"/>"#, &IdSchema::new()), None);
    }

    #[test]
    fn test_schema_typed_id_from_dtd() {
        let xml = r#"<!DOCTYPE el [ <!ATTLIST el name CDATA #IMPLIED ref ID #IMPLIED> ]>
            <el name="n" ref="C"/>"#;
        let schema = IdSchema::from_prolog(xml);
        assert_eq!(resolve(xml, &schema).as_deref(), Some("C"));
    }

    #[test]
    fn test_schema_typed_id_first_in_document_order() {
        let mut schema = IdSchema::new();
        schema.add_id_attr("second");
        schema.add_id_attr("first");
        let xml = r#"<el first="X" second="Y"/>"#;
        assert_eq!(resolve(xml, &schema).as_deref(), Some("X"));
    }

    #[test]
    fn test_no_identifier() {
        let mut schema = IdSchema::new();
        schema.add_id_attr("ref");
        assert_eq!(resolve(r#"<el ref="" other="x"/>"#, &schema), None);
    }
}
