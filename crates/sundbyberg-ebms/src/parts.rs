#![forbid(unsafe_code)]

//! Resolution of the signed parts of an ebMS message.
//!
//! Each `<ds:Reference>` of the default signature names the part it covers
//! by URI.  The URI carries a transport specific prefix (`cid:`, `#`) that
//! the ids of the ebMS header, the SOAP body and the payloads do not, so a
//! reference covers a part when its URI ends with the part's id.
//!
//! The ebMS header is covered by the first reference that matches it.  A
//! payload matched by several references gets the metadata of the last one.

use crate::message::{Containment, MessageUnit, Payload};
use std::ptr;
use sundbyberg_core::{ns, Error, Result};
use sundbyberg_wss::{locate_signature_references, ReferenceDescriptor};
use sundbyberg_xml::{find_elements, resolve_id, soap, Envelope, IdSchema};

/// Digest information of a signed message part, as given by its reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPartMetadata {
    /// Digest algorithm URI.
    pub digest_method: String,
    pub digest_value: Vec<u8>,
    /// Transform algorithm URIs, in the order they are applied.
    pub transforms: Vec<String>,
}

impl From<&ReferenceDescriptor> for SignedPartMetadata {
    fn from(reference: &ReferenceDescriptor) -> Self {
        Self {
            digest_method: reference.digest_method.clone(),
            digest_value: reference.digest_value.clone(),
            transforms: reference.transforms.clone(),
        }
    }
}

/// The signed parts of a message: the ebMS header and the payloads of the
/// message units.  Payloads not covered by the signature have no entry.
#[derive(Debug, Clone, Default)]
pub struct SignedMessagePartsInfo<'u> {
    header: Option<SignedPartMetadata>,
    payloads: Vec<(&'u Payload, SignedPartMetadata)>,
}

impl<'u> SignedMessagePartsInfo<'u> {
    /// Digest information of the ebMS header, if signed.
    pub fn header(&self) -> Option<&SignedPartMetadata> {
        self.header.as_ref()
    }

    /// Digest information of `payload`, if signed.  Payloads are looked up
    /// by identity, so `payload` must come from the message units the
    /// information was resolved for.
    pub fn payload(&self, payload: &Payload) -> Option<&SignedPartMetadata> {
        self.payloads
            .iter()
            .find(|(p, _)| ptr::eq(*p, payload))
            .map(|(_, meta)| meta)
    }

    /// All signed payloads with their digest information.
    pub fn payloads(&self) -> impl Iterator<Item = (&'u Payload, &SignedPartMetadata)> + '_ {
        self.payloads.iter().map(|(p, meta)| (*p, meta))
    }

    /// Whether neither the header nor any payload is covered.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.payloads.is_empty()
    }
}

/// Check whether a reference URI ends with the id of a part.
///
/// The id must either be the whole URI or follow a URI delimiter, so
/// `cid:att1` and `#att1` cover `att1` but `other-att1` does not.
fn uri_ends_with_id(ref_uri: &str, id: &str) -> bool {
    if id.is_empty() {
        return false;
    }
    match ref_uri.strip_suffix(id) {
        Some(rest) => rest.is_empty() || rest.ends_with(|c| matches!(c, '#' | ':' | '/')),
        None => false,
    }
}

/// Get the id of the ebMS header (`eb:Messaging`).
///
/// Returns `Ok(None)` when the header has no id.  An envelope that does not
/// contain exactly one ebMS header is not a valid ebMS message.
pub fn ebms_header_id<'a>(
    doc: &'a roxmltree::Document<'_>,
    schema: &IdSchema,
) -> Result<Option<&'a str>> {
    let headers = find_elements(doc, ns::EBMS3, ns::node::MESSAGING);
    match headers.as_slice() {
        [header] => Ok(resolve_id(*header, schema)),
        [] => Err(Error::ProtocolStructure(
            "no ebMS header present in SOAP envelope".into(),
        )),
        _ => Err(Error::ProtocolStructure(format!(
            "{} ebMS headers present in SOAP envelope",
            headers.len()
        ))),
    }
}

/// Check whether the reference with URI `ref_uri` covers `payload`.
///
/// A payload with a declared URI is matched on that URI.  A payload in the
/// SOAP body without one is covered by the reference to the body element.
pub fn is_payload_referenced(
    payload: &Payload,
    ref_uri: &str,
    doc: &roxmltree::Document<'_>,
    schema: &IdSchema,
) -> bool {
    if let Some(uri) = payload.declared_uri() {
        return uri_ends_with_id(ref_uri, uri);
    }
    match payload.containment {
        Containment::Body => soap::soap_body(doc)
            .and_then(|body| resolve_id(body, schema))
            .is_some_and(|body_id| uri_ends_with_id(ref_uri, body_id)),
        Containment::Attachment => false,
    }
}

/// Resolve the signed parts of the message in `envelope`.
///
/// Returns `Ok(None)` when the message is not signed.  A signature
/// reference that cannot be read fails the whole resolution.
pub fn match_signed_parts<'u>(
    envelope: &Envelope,
    units: &'u [MessageUnit],
) -> Result<Option<SignedMessagePartsInfo<'u>>> {
    let doc = envelope.parse_doc()?;
    match_signed_parts_in(&doc, envelope.id_schema(), units)
}

/// Resolve the signed parts of the message in an already parsed document.
pub fn match_signed_parts_in<'u>(
    doc: &roxmltree::Document<'_>,
    schema: &IdSchema,
    units: &'u [MessageUnit],
) -> Result<Option<SignedMessagePartsInfo<'u>>> {
    let Some(refs) = locate_signature_references(doc)? else {
        tracing::debug!("no signature references in default security header");
        return Ok(None);
    };

    let header = match ebms_header_id(doc, schema)? {
        Some(header_id) => refs
            .iter()
            .find(|r| uri_ends_with_id(&r.uri, header_id))
            .map(SignedPartMetadata::from),
        None => {
            tracing::debug!("ebMS header has no id, it cannot be referenced");
            None
        }
    };

    let refs = &refs;
    let payloads = units
        .iter()
        .filter_map(MessageUnit::payloads)
        .flatten()
        .flat_map(|payload| refs.iter().map(move |reference| (payload, reference)))
        .filter(|(payload, reference)| is_payload_referenced(payload, &reference.uri, doc, schema))
        .fold(
            Vec::new(),
            |mut matched: Vec<(&'u Payload, SignedPartMetadata)>, (payload, reference)| {
                let meta = SignedPartMetadata::from(reference);
                // Later references replace earlier matches
                match matched.iter_mut().find(|(p, _)| ptr::eq(*p, payload)) {
                    Some(entry) => entry.1 = meta,
                    None => matched.push((payload, meta)),
                }
                matched
            },
        );

    tracing::debug!(
        references = refs.len(),
        header_signed = header.is_some(),
        signed_payloads = payloads.len(),
        "resolved signed message parts"
    );
    Ok(Some(SignedMessagePartsInfo { header, payloads }))
}
