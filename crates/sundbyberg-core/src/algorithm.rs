#![forbid(unsafe_code)]

//! Digest algorithm URIs found in `ds:DigestMethod` elements.

// ── Digest algorithms ────────────────────────────────────────────────

pub const SHA1: &str = "http://www.w3.org/2000/09/xmldsig#sha1";
pub const SHA224: &str = "http://www.w3.org/2001/04/xmldsig-more#sha224";
pub const SHA256: &str = "http://www.w3.org/2001/04/xmlenc#sha256";
pub const SHA384: &str = "http://www.w3.org/2001/04/xmldsig-more#sha384";
pub const SHA512: &str = "http://www.w3.org/2001/04/xmlenc#sha512";
pub const SHA3_224: &str = "http://www.w3.org/2007/05/xmldsig-more#sha3-224";
pub const SHA3_256: &str = "http://www.w3.org/2007/05/xmldsig-more#sha3-256";
pub const SHA3_384: &str = "http://www.w3.org/2007/05/xmldsig-more#sha3-384";
pub const SHA3_512: &str = "http://www.w3.org/2007/05/xmldsig-more#sha3-512";

/// Short display name of a digest algorithm URI.
pub fn digest_name(uri: &str) -> Option<&'static str> {
    match uri {
        SHA1 => Some("SHA-1"),
        SHA224 => Some("SHA-224"),
        SHA256 => Some("SHA-256"),
        SHA384 => Some("SHA-384"),
        SHA512 => Some("SHA-512"),
        SHA3_224 => Some("SHA3-224"),
        SHA3_256 => Some("SHA3-256"),
        SHA3_384 => Some("SHA3-384"),
        SHA3_512 => Some("SHA3-512"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_name() {
        assert_eq!(digest_name(SHA256), Some("SHA-256"));
        assert_eq!(digest_name(SHA3_512), Some("SHA3-512"));
        assert_eq!(digest_name("urn:example:not-a-digest"), None);
    }
}
