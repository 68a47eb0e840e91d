#![forbid(unsafe_code)]

//! Location of the signature references in the default security header.

use crate::header::{security_header, SecurityHeaderTarget};
use crate::reference::ReferenceDescriptor;
use sundbyberg_core::{ns, Result};
use sundbyberg_xml::{find_descendants, first_child_element};

/// The `<ds:Signature>` of the default WS-Security header.
///
/// An ebMS message has at most one signature in the default header, so
/// only the first one found is used.
pub fn default_signature<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
) -> Option<roxmltree::Node<'a, 'input>> {
    let header = security_header(doc, &SecurityHeaderTarget::Default)?;

    let signatures = find_descendants(header, ns::DSIG, ns::node::SIGNATURE);
    if signatures.len() > 1 {
        tracing::debug!(
            count = signatures.len(),
            "default security header has multiple signatures, using the first"
        );
    }
    signatures.into_iter().next()
}

/// Get the references of the signature in the default WS-Security header.
///
/// The first child of the [`default_signature`] is its `<ds:SignedInfo>`;
/// all `<ds:Reference>` descendants of that are returned, in document
/// order.
///
/// Returns `Ok(None)` when the message is unsigned: there is no (valid)
/// default security header, it holds no signature, or the signature has no
/// references.  A reference that cannot be read is an error, since leaving
/// it out would change which reference comes first or last for a part.
pub fn locate_signature_references(
    doc: &roxmltree::Document<'_>,
) -> Result<Option<Vec<ReferenceDescriptor>>> {
    let Some(signed_info) = default_signature(doc).and_then(first_child_element) else {
        return Ok(None);
    };
    let references = find_descendants(signed_info, ns::DSIG, ns::node::REFERENCE);
    if references.is_empty() {
        return Ok(None);
    }

    let descriptors = references
        .into_iter()
        .map(ReferenceDescriptor::from_node)
        .collect::<Result<Vec<_>>>()?;
    Ok(Some(descriptors))
}
