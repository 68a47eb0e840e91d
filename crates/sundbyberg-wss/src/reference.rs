#![forbid(unsafe_code)]

//! Reading of `<ds:Reference>` elements.

use base64::Engine;
use sundbyberg_core::{ns, Error, Result};
use sundbyberg_xml::{find_child_element, is_element_named};

/// What a single `<ds:Reference>` says about the part it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDescriptor {
    /// The raw `URI` attribute, empty when absent.
    pub uri: String,
    /// `Algorithm` of the `<ds:DigestMethod>`.
    pub digest_method: String,
    /// Decoded `<ds:DigestValue>`.
    pub digest_value: Vec<u8>,
    /// `Algorithm` of each `<ds:Transform>`, in document order.
    pub transforms: Vec<String>,
}

impl ReferenceDescriptor {
    /// Read a `<ds:Reference>` element.
    pub fn from_node(reference: roxmltree::Node<'_, '_>) -> Result<Self> {
        let uri = reference.attribute(ns::attr::URI).unwrap_or("");

        // Read DigestMethod
        let digest_method_node =
            find_child_element(reference, ns::DSIG, ns::node::DIGEST_METHOD)
                .ok_or_else(|| Error::MissingElement("DigestMethod".into()))?;
        let digest_method = digest_method_node
            .attribute(ns::attr::ALGORITHM)
            .ok_or_else(|| Error::MissingAttribute("Algorithm on DigestMethod".into()))?;

        // Read DigestValue
        let digest_value_node = find_child_element(reference, ns::DSIG, ns::node::DIGEST_VALUE)
            .ok_or_else(|| Error::MissingElement("DigestValue".into()))?;
        let digest_b64: String = digest_value_node
            .text()
            .unwrap_or("")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let digest_value = base64::engine::general_purpose::STANDARD
            .decode(&digest_b64)
            .map_err(|e| Error::Base64(format!("DigestValue of {uri}: {e}")))?;

        let mut transforms = Vec::new();
        if let Some(transforms_node) = find_child_element(reference, ns::DSIG, ns::node::TRANSFORMS) {
            for transform in transforms_node.children() {
                if !is_element_named(transform, ns::DSIG, ns::node::TRANSFORM) {
                    continue;
                }
                let algorithm = transform
                    .attribute(ns::attr::ALGORITHM)
                    .ok_or_else(|| Error::MissingAttribute("Algorithm on Transform".into()))?;
                transforms.push(algorithm.to_owned());
            }
        }

        Ok(Self {
            uri: uri.to_owned(),
            digest_method: digest_method.to_owned(),
            digest_value,
            transforms,
        })
    }
}
