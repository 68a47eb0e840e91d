#![forbid(unsafe_code)]

//! Owned SOAP envelope with its ID attribute schema.

use crate::idschema::IdSchema;
use sundbyberg_core::{Error, Result};

/// An owned SOAP envelope.  Stores the text and the ID attribute schema
/// that applies to it.
///
/// To work with the parsed tree, call [`Envelope::parse_doc`] which
/// returns a temporary `roxmltree::Document` borrowing from the text.
#[derive(Debug, Clone)]
pub struct Envelope {
    text: String,
    id_schema: IdSchema,
}

impl Envelope {
    /// Parse and validate XML from a string, taking ownership.
    ///
    /// `ID` typed attributes declared in the internal DTD subset are
    /// registered with the envelope's schema.  Only the prolog is read for
    /// declarations.
    pub fn parse(text: String) -> Result<Self> {
        let id_schema = {
            let doc = roxmltree::Document::parse_with_options(&text, crate::parsing_options())
                .map_err(|e| Error::XmlParse(e.to_string()))?;
            IdSchema::from_prolog(&text[..doc.root_element().range().start])
        };
        Ok(Self { text, id_schema })
    }

    /// Parse and validate XML from bytes.
    pub fn parse_bytes(data: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(data)
            .map_err(|e| Error::XmlParse(format!("invalid UTF-8: {e}")))?
            .to_owned();
        Self::parse(text)
    }

    /// Register an attribute name (e.g. `"ID"` or `"wsu:Id"`) as being of
    /// type ID on every element.
    pub fn add_id_attr(&mut self, name: &str) {
        self.id_schema.add_id_attr(name);
    }

    /// The ID attribute schema of this envelope.
    pub fn id_schema(&self) -> &IdSchema {
        &self.id_schema
    }

    /// Parse the document and return a temporary `roxmltree::Document`.
    ///
    /// This re-parses the XML from the stored text.  Call this once at the
    /// top of a processing pipeline and pass the resulting document
    /// reference down through the call chain.
    pub fn parse_doc(&self) -> Result<roxmltree::Document<'_>> {
        roxmltree::Document::parse_with_options(&self.text, crate::parsing_options())
            .map_err(|e| Error::XmlParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_malformed_xml() {
        let err = Envelope::parse("<a><b></a>".to_owned()).unwrap_err();
        assert!(matches!(err, Error::XmlParse(_)));
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let err = Envelope::parse_bytes(&[0x3c, 0xff, 0x3e]).unwrap_err();
        assert!(matches!(err, Error::XmlParse(msg) if msg.contains("UTF-8")));
    }

    #[test]
    fn test_dtd_declarations_registered_on_parse() {
        let xml = r#"<!DOCTYPE doc [
            <!ATTLIST doc ref ID #IMPLIED>
        ]>
        <doc ref="r1"/>"#;
        let env = Envelope::parse(xml.to_owned()).unwrap();
        assert!(!env.id_schema().is_empty());
        let doc = env.parse_doc().unwrap();
        assert_eq!(doc.root_element().attribute("ref"), Some("r1"));
    }

    #[test]
    fn test_body_markup_not_registered_on_parse() {
        let xml = r#"<!DOCTYPE doc SYSTEM "doc.dtd">
        <doc ref="r1">
            <!-- <!DOCTYPE doc [ <!ATTLIST doc ref ID #IMPLIED> ]> -->
            <![CDATA[ ]]>
        </doc>"#;
        let env = Envelope::parse(xml.to_owned()).unwrap();
        assert!(env.id_schema().is_empty());
    }

    #[test]
    fn test_add_id_attr() {
        let mut env = Envelope::parse("<doc/>".to_owned()).unwrap();
        assert!(env.id_schema().is_empty());
        env.add_id_attr("ID");
        assert!(!env.id_schema().is_empty());
    }
}
