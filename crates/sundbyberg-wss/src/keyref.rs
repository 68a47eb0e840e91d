#![forbid(unsafe_code)]

//! How a signature refers to the X.509 certificate of its signing key.

use std::fmt;
use std::str::FromStr;
use sundbyberg_core::{ns, Error};
use sundbyberg_xml::{find_child_element, first_child_element, is_element_named};

/// The form of `wsse:SecurityTokenReference` used to point at an X.509
/// certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum X509ReferenceType {
    /// `wsse:Reference` to a BinarySecurityToken in the message.
    BstReference,
    /// `wsse:KeyIdentifier` holding the subject key identifier.
    KeyIdentifier,
    /// `ds:X509Data/ds:X509IssuerSerial`.
    IssuerAndSerial,
}

impl X509ReferenceType {
    /// The key identifier name used when configuring token references.
    pub fn key_identifier_name(self) -> &'static str {
        match self {
            X509ReferenceType::BstReference => "DirectReference",
            X509ReferenceType::KeyIdentifier => "SKIKeyIdentifier",
            X509ReferenceType::IssuerAndSerial => "IssuerSerial",
        }
    }

    /// Classify a `wsse:SecurityTokenReference` element by its content.
    pub fn of_token_reference(str_node: roxmltree::Node<'_, '_>) -> Option<Self> {
        let child = first_child_element(str_node)?;
        if is_element_named(child, ns::WSSE, ns::node::TOKEN_REFERENCE) {
            Some(X509ReferenceType::BstReference)
        } else if is_element_named(child, ns::WSSE, ns::node::KEY_IDENTIFIER) {
            Some(X509ReferenceType::KeyIdentifier)
        } else if is_element_named(child, ns::DSIG, ns::node::X509_DATA)
            && find_child_element(child, ns::DSIG, ns::node::X509_ISSUER_SERIAL).is_some()
        {
            Some(X509ReferenceType::IssuerAndSerial)
        } else {
            None
        }
    }

    /// The reference type used in the `<ds:KeyInfo>` of a `<ds:Signature>`.
    pub fn of_signature(signature: roxmltree::Node<'_, '_>) -> Option<Self> {
        let key_info = find_child_element(signature, ns::DSIG, ns::node::KEY_INFO)?;
        let str_node = find_child_element(key_info, ns::WSSE, ns::node::SECURITY_TOKEN_REFERENCE)?;
        Self::of_token_reference(str_node)
    }
}

impl fmt::Display for X509ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_identifier_name())
    }
}

impl FromStr for X509ReferenceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DirectReference" | "BSTReference" => Ok(X509ReferenceType::BstReference),
            "SKIKeyIdentifier" | "KeyIdentifier" => Ok(X509ReferenceType::KeyIdentifier),
            "IssuerSerial" | "IssuerAndSerial" => Ok(X509ReferenceType::IssuerAndSerial),
            _ => Err(Error::Other(format!("unknown X.509 reference type: {s}"))),
        }
    }
}
