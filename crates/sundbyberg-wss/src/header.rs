#![forbid(unsafe_code)]

//! Lookup of the `wsse:Security` header block targeted at a role/actor.

use std::fmt;
use sundbyberg_core::{ns, Error, Result};
use sundbyberg_xml::{soap, SoapVersion};

/// The role/actor a WS-Security header is targeted at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SecurityHeaderTarget {
    /// The header without an actor/role, meant for the ultimate receiver.
    #[default]
    Default,
    /// The header targeted at the `ebms` role.
    Ebms,
    /// Any other role or actor URI.
    Role(String),
}

impl SecurityHeaderTarget {
    /// The actor/role value identifying this target, `None` for the default header.
    pub fn role(&self) -> Option<&str> {
        match self {
            SecurityHeaderTarget::Default => None,
            SecurityHeaderTarget::Ebms => Some(ns::EBMS_ROLE),
            SecurityHeaderTarget::Role(r) if r.is_empty() => None,
            SecurityHeaderTarget::Role(r) => Some(r.as_str()),
        }
    }

    /// Whether a header carrying `header_role` as actor/role is targeted here.
    /// An empty actor/role counts as no actor/role.
    fn matches(&self, header_role: Option<&str>) -> bool {
        header_role.filter(|r| !r.is_empty()) == self.role()
    }
}

impl fmt::Display for SecurityHeaderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.role().unwrap_or("default"))
    }
}

/// Find the `wsse:Security` element of the header block targeted at `target`.
///
/// Returns `Ok(None)` when the envelope has no SOAP header or no security
/// header for the target.  More than one security header for the same
/// target makes the envelope invalid.
pub fn find_security_header<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
    target: &SecurityHeaderTarget,
) -> Result<Option<roxmltree::Node<'a, 'input>>> {
    let version = SoapVersion::of(doc)
        .ok_or_else(|| Error::XmlStructure("document is not a SOAP envelope".into()))?;
    let Some(header) = soap::soap_header(doc) else {
        return Ok(None);
    };

    let mut found = None;
    for block in header.children() {
        if !sundbyberg_xml::is_element_named(block, ns::WSSE, ns::node::SECURITY) {
            continue;
        }
        let role = block.attribute((version.namespace(), version.target_attribute()));
        if !target.matches(role) {
            continue;
        }
        if found.is_some() {
            return Err(Error::DuplicateSecurityHeader(target.to_string()));
        }
        found = Some(block);
    }
    Ok(found)
}

/// Like [`find_security_header`], but a structurally invalid envelope is
/// treated as not having the header.
pub fn security_header<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
    target: &SecurityHeaderTarget,
) -> Option<roxmltree::Node<'a, 'input>> {
    match find_security_header(doc, target) {
        Ok(header) => header,
        Err(e) => {
            tracing::warn!(%target, error = %e, "security header lookup failed, treating as absent");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(headers: &str) -> String {
        format!(
            r#"<S:Envelope xmlns:S="http://schemas.xmlsoap.org/soap/envelope/"
                xmlns:wsse="http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-secext-1.0.xsd">
                <S:Header>{headers}</S:Header><S:Body/></S:Envelope>"#
        )
    }

    fn mark<'a>(node: Option<roxmltree::Node<'a, '_>>) -> Option<&'a str> {
        node.and_then(|n| n.attribute("mark"))
    }

    #[test]
    fn test_default_and_ebms_targets() {
        let xml = envelope(
            r#"<wsse:Security S:actor="ebms" mark="ebms"/>
               <wsse:Security mark="default"/>"#,
        );
        let doc = roxmltree::Document::parse(&xml).unwrap();
        assert_eq!(mark(security_header(&doc, &SecurityHeaderTarget::Default)), Some("default"));
        assert_eq!(mark(security_header(&doc, &SecurityHeaderTarget::Ebms)), Some("ebms"));
        assert!(security_header(&doc, &SecurityHeaderTarget::Role("urn:other".into())).is_none());
    }

    #[test]
    fn test_empty_actor_is_default() {
        let xml = envelope(r#"<wsse:Security S:actor="" mark="default"/>"#);
        let doc = roxmltree::Document::parse(&xml).unwrap();
        assert_eq!(mark(security_header(&doc, &SecurityHeaderTarget::Default)), Some("default"));
    }

    #[test]
    fn test_soap12_role() {
        let xml = r#"<env:Envelope xmlns:env="http://www.w3.org/2003/05/soap-envelope"
                xmlns:wsse="http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-secext-1.0.xsd">
                <env:Header><wsse:Security env:role="ebms" mark="ebms"/></env:Header>
                <env:Body/></env:Envelope>"#;
        let doc = roxmltree::Document::parse(xml).unwrap();
        assert_eq!(mark(security_header(&doc, &SecurityHeaderTarget::Ebms)), Some("ebms"));
        assert!(security_header(&doc, &SecurityHeaderTarget::Default).is_none());
    }

    #[test]
    fn test_duplicate_default_header() {
        let xml = envelope("<wsse:Security/><wsse:Security/>");
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let err = find_security_header(&doc, &SecurityHeaderTarget::Default).unwrap_err();
        assert!(matches!(err, Error::DuplicateSecurityHeader(_)));
        assert!(security_header(&doc, &SecurityHeaderTarget::Default).is_none());
    }

    #[test]
    fn test_not_soap() {
        let doc = roxmltree::Document::parse("<Envelope/>").unwrap();
        assert!(find_security_header(&doc, &SecurityHeaderTarget::Default).is_err());
        assert!(security_header(&doc, &SecurityHeaderTarget::Default).is_none());
    }

    #[test]
    fn test_target_display() {
        assert_eq!(SecurityHeaderTarget::Default.to_string(), "default");
        assert_eq!(SecurityHeaderTarget::Ebms.to_string(), "ebms");
        assert_eq!(SecurityHeaderTarget::Role(String::new()).role(), None);
    }
}
