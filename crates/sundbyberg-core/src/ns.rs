#![forbid(unsafe_code)]

//! XML namespace constants used across the library.

/// SOAP 1.1 envelope namespace
pub const SOAP11: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// SOAP 1.2 envelope namespace
pub const SOAP12: &str = "http://www.w3.org/2003/05/soap-envelope";

/// WS-Security extension namespace (`wsse`)
pub const WSSE: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-secext-1.0.xsd";

/// WS-Security utility namespace (`wsu`)
pub const WSU: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-utility-1.0.xsd";

/// XML Digital Signature namespace
pub const DSIG: &str = "http://www.w3.org/2000/09/xmldsig#";

/// XML namespace (`xml:id`)
pub const XML: &str = "http://www.w3.org/XML/1998/namespace";

/// ebMS 3 core namespace
pub const EBMS3: &str = "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/";

/// Role of the WS-Security header targeted at the ebMS processor.
pub const EBMS_ROLE: &str = "ebms";

// ── Element names ────────────────────────────────────────────────────

pub mod node {
    // SOAP elements
    pub const ENVELOPE: &str = "Envelope";
    pub const HEADER: &str = "Header";
    pub const BODY: &str = "Body";

    // WS-Security elements
    pub const SECURITY: &str = "Security";
    pub const SECURITY_TOKEN_REFERENCE: &str = "SecurityTokenReference";
    pub const KEY_IDENTIFIER: &str = "KeyIdentifier";
    /// `wsse:Reference`, a direct reference to a security token
    pub const TOKEN_REFERENCE: &str = "Reference";

    // DSig elements
    pub const SIGNATURE: &str = "Signature";
    pub const REFERENCE: &str = "Reference";
    pub const DIGEST_METHOD: &str = "DigestMethod";
    pub const DIGEST_VALUE: &str = "DigestValue";
    pub const TRANSFORMS: &str = "Transforms";
    pub const TRANSFORM: &str = "Transform";
    pub const KEY_INFO: &str = "KeyInfo";
    pub const X509_DATA: &str = "X509Data";
    pub const X509_ISSUER_SERIAL: &str = "X509IssuerSerial";

    // ebMS elements
    pub const MESSAGING: &str = "Messaging";
}

// ── Attribute names ──────────────────────────────────────────────────

pub mod attr {
    /// `wsu:Id`
    pub const WSU_ID: &str = "Id";
    /// `xml:id`
    pub const XML_ID: &str = "id";
    pub const URI: &str = "URI";
    pub const ALGORITHM: &str = "Algorithm";
    /// SOAP 1.1 header target
    pub const ACTOR: &str = "actor";
    /// SOAP 1.2 header target
    pub const ROLE: &str = "role";
}
