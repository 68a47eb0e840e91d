#![forbid(unsafe_code)]

//! ebMS 3 message parts and their signatures.
//!
//! Given a SOAP envelope and the message units it carries, finds the
//! `ds:Reference` of the default signature that covers the ebMS header
//! and each payload, and exposes their digest metadata.

pub mod message;
pub mod parts;

pub use message::{Containment, MessageUnit, Payload, SignalKind, SignalMessage, UserMessage};
pub use parts::{
    ebms_header_id, is_payload_referenced, match_signed_parts, match_signed_parts_in,
    SignedMessagePartsInfo, SignedPartMetadata,
};
