#![forbid(unsafe_code)]

//! SOAP envelope structure: version detection, `Header` and `Body` lookup.

use sundbyberg_core::ns;

/// The SOAP version of an envelope, taken from the namespace of its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoapVersion {
    Soap11,
    Soap12,
}

impl SoapVersion {
    /// Detect the version of a parsed document.  Returns `None` when the
    /// root element is not a SOAP `Envelope`.
    pub fn of(doc: &roxmltree::Document<'_>) -> Option<Self> {
        let root = doc.root_element();
        if root.tag_name().name() != ns::node::ENVELOPE {
            return None;
        }
        match root.tag_name().namespace()? {
            ns::SOAP11 => Some(SoapVersion::Soap11),
            ns::SOAP12 => Some(SoapVersion::Soap12),
            _ => None,
        }
    }

    /// The envelope namespace URI.
    pub fn namespace(self) -> &'static str {
        match self {
            SoapVersion::Soap11 => ns::SOAP11,
            SoapVersion::Soap12 => ns::SOAP12,
        }
    }

    /// Local name of the attribute that targets a header block at a
    /// node: `actor` in SOAP 1.1, `role` in SOAP 1.2.
    pub fn target_attribute(self) -> &'static str {
        match self {
            SoapVersion::Soap11 => ns::attr::ACTOR,
            SoapVersion::Soap12 => ns::attr::ROLE,
        }
    }
}

/// The SOAP `Header` element of the envelope, if present.
pub fn soap_header<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
) -> Option<roxmltree::Node<'a, 'input>> {
    let version = SoapVersion::of(doc)?;
    crate::find_child_element(doc.root_element(), version.namespace(), ns::node::HEADER)
}

/// The SOAP `Body` element of the envelope, if present.
pub fn soap_body<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
) -> Option<roxmltree::Node<'a, 'input>> {
    let version = SoapVersion::of(doc)?;
    crate::find_child_element(doc.root_element(), version.namespace(), ns::node::BODY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soap11() {
        let xml = r#"<S:Envelope xmlns:S="http://schemas.xmlsoap.org/soap/envelope/">
            <S:Header/><S:Body/></S:Envelope>"#;
        let doc = roxmltree::Document::parse(xml).unwrap();
        assert_eq!(SoapVersion::of(&doc), Some(SoapVersion::Soap11));
        assert!(soap_header(&doc).is_some());
        assert!(soap_body(&doc).is_some());
    }

    #[test]
    fn test_soap12_target_attribute() {
        let xml = r#"<env:Envelope xmlns:env="http://www.w3.org/2003/05/soap-envelope">
            <env:Body/></env:Envelope>"#;
        let doc = roxmltree::Document::parse(xml).unwrap();
        let version = SoapVersion::of(&doc).unwrap();
        assert_eq!(version.target_attribute(), "role");
        assert!(soap_header(&doc).is_none());
        assert!(soap_body(&doc).is_some());
    }

    #[test]
    fn test_not_an_envelope() {
        let doc = roxmltree::Document::parse("<Envelope><Body/></Envelope>").unwrap();
        assert_eq!(SoapVersion::of(&doc), None);
        assert!(soap_body(&doc).is_none());
    }
}
