#![forbid(unsafe_code)]

//! SOAP envelope documents for the Sundbyberg library.
//!
//! Provides an owned envelope over `roxmltree`, the ID-attribute schema
//! of a document, element identifier resolution and the namespace-aware
//! lookup helpers used by the WS-Security and ebMS layers.

pub mod document;
pub mod id;
pub mod idschema;
pub mod soap;

pub use document::Envelope;
pub use id::resolve_id;
pub use idschema::IdSchema;
pub use soap::SoapVersion;

/// Return roxmltree parsing options that allow DTD.
///
/// DTD is allowed because roxmltree does not expand external entities or
/// perform entity substitution beyond the five predefined XML entities,
/// so it is safe. An internal subset is also where `ID` typed attributes
/// get declared.
pub fn parsing_options() -> roxmltree::ParsingOptions {
    roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    }
}

/// Check whether a node is an element with the given namespace and local name.
pub fn is_element_named(node: roxmltree::Node<'_, '_>, ns_uri: &str, local_name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == local_name
        && node.tag_name().namespace().unwrap_or("") == ns_uri
}

/// Find all elements in the document with the given namespace and local name,
/// in document order.
pub fn find_elements<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
    ns_uri: &str,
    local_name: &str,
) -> Vec<roxmltree::Node<'a, 'input>> {
    doc.descendants()
        .filter(|n| is_element_named(*n, ns_uri, local_name))
        .collect()
}

/// Find all descendant elements of `parent` (excluding `parent` itself)
/// with the given namespace and local name, in document order.
pub fn find_descendants<'a, 'input>(
    parent: roxmltree::Node<'a, 'input>,
    ns_uri: &str,
    local_name: &str,
) -> Vec<roxmltree::Node<'a, 'input>> {
    parent
        .descendants()
        .skip(1)
        .filter(|n| is_element_named(*n, ns_uri, local_name))
        .collect()
}

/// Find the first child element with the given namespace and local name.
pub fn find_child_element<'a, 'input>(
    parent: roxmltree::Node<'a, 'input>,
    ns_uri: &str,
    local_name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    parent
        .children()
        .find(|n| is_element_named(*n, ns_uri, local_name))
}

/// The first child of `parent` that is an element, skipping text and comments.
pub fn first_child_element<'a, 'input>(
    parent: roxmltree::Node<'a, 'input>,
) -> Option<roxmltree::Node<'a, 'input>> {
    parent.children().find(|n| n.is_element())
}
