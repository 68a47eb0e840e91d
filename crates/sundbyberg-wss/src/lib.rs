#![forbid(unsafe_code)]

//! WS-Security processing for the Sundbyberg library.
//!
//! Locates the `wsse:Security` header targeted at a given role and reads
//! the `ds:Reference` elements of the signature it carries.

pub mod header;
pub mod keyref;
pub mod locate;
pub mod password;
pub mod reference;

pub use header::{find_security_header, security_header, SecurityHeaderTarget};
pub use keyref::X509ReferenceType;
pub use locate::{default_signature, locate_signature_references};
pub use password::generate_password;
pub use reference::ReferenceDescriptor;
