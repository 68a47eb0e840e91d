#![forbid(unsafe_code)]

/// Errors produced by the Sundbyberg crates.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    #[error("invalid XML structure: {0}")]
    XmlStructure(String),

    /// The envelope does not carry exactly one ebMS message header.
    #[error("invalid ebMS message structure: {0}")]
    ProtocolStructure(String),

    #[error("duplicate WS-Security header for target: {0}")]
    DuplicateSecurityHeader(String),

    #[error("missing required element: {0}")]
    MissingElement(String),

    #[error("missing required attribute: {0}")]
    MissingAttribute(String),

    #[error("base64 decode error: {0}")]
    Base64(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
