#![forbid(unsafe_code)]

//! Random passwords for outbound token credentials.

use rand::Rng;

/// Length of a generated password.
pub const PASSWORD_LEN: usize = 16;

/// Generate a random password of [`PASSWORD_LEN`] lowercase hex characters.
pub fn generate_password() -> String {
    let value: u64 = rand::thread_rng().gen();
    format!("{value:016x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_password() {
        let pw = generate_password();
        assert_eq!(pw.len(), PASSWORD_LEN);
        assert!(pw.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        // 64 random bits; a collision here means the generator is broken
        assert_ne!(pw, generate_password());
    }
}
