//! Password hashing and verification for login accounts using Argon2id.
//!
//! Hashes are stored in a PHC-style string:
//! `$argon2id$v=19$m=<memory>,t=<time>,p=<lanes>$<salt_b64>$<hash_b64>`.

use argon2::{Algorithm, Argon2, Params, Version};
use base64::prelude::*;
use rand::{RngCore, rng};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Errors that can occur during password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    #[error("Verification failed: password does not match")]
    VerificationFailed,

    #[error("Invalid hash format")]
    InvalidHashFormat,

    #[error("Base64 decoding failed: {0}")]
    DecodingFailed(#[from] base64::DecodeError),
}

/// Configuration for Argon2id password hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordConfig {
    /// Memory cost in KiB (default: 15 MiB = 15360 KiB)
    pub memory_cost: u32,
    /// Number of iterations (default: 3)
    pub time_cost:   u32,
    /// Number of lanes (default: 2)
    pub parallelism: u32,
    /// Length of the generated hash (default: 32 bytes)
    pub hash_length: u32,
    /// Length of the salt (default: 16 bytes)
    pub salt_length: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_cost: 15360, // 15 MiB
            time_cost:   3,
            parallelism: 2,
            hash_length: 32,
            salt_length: 16,
        }
    }
}

impl PasswordConfig {
    /// Minimal Argon2 parameters, for throwaway fixture accounts and tests.
    #[must_use]
    pub fn fast() -> Self {
        Self {
            memory_cost: 64,
            time_cost:   1,
            parallelism: 1,
            hash_length: 32,
            salt_length: 16,
        }
    }

    fn argon2(&self, hash_length: usize) -> Result<Argon2<'static>, PasswordError> {
        let params = Params::new(
            self.memory_cost,
            self.time_cost,
            self.parallelism,
            Some(hash_length),
        )
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Hashes a password using Argon2id.
///
/// # Example
///
/// ```
/// use auth::password::{PasswordConfig, hash_password};
/// use secrecy::SecretString;
///
/// let password = SecretString::from("1234".to_string());
/// let hash = hash_password(&password, Some(PasswordConfig::fast())).unwrap();
/// ```
pub fn hash_password(password: &SecretString, config: Option<PasswordConfig>) -> Result<SecretString, PasswordError> {
    let config = config.unwrap_or_default();

    let mut salt = vec![0u8; config.salt_length as usize];
    rng().fill_bytes(&mut salt);

    let mut output = vec![0u8; config.hash_length as usize];
    config
        .argon2(output.len())?
        .hash_password_into(password.expose_secret().as_bytes(), &salt, &mut output)
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

    Ok(SecretString::from(format!(
        "$argon2id$v=19$m={},t={},p={}${}${}",
        config.memory_cost,
        config.time_cost,
        config.parallelism,
        BASE64_STANDARD.encode(&salt),
        BASE64_STANDARD.encode(&output)
    )))
}

/// Verifies a password against a stored hash.
///
/// # Example
///
/// ```
/// use auth::password::{PasswordConfig, hash_password, verify_password};
/// use secrecy::{ExposeSecret, SecretString};
///
/// let password = SecretString::from("1234".to_string());
/// let hash = hash_password(&password, Some(PasswordConfig::fast())).unwrap();
///
/// assert!(verify_password(&password, hash.expose_secret()).is_ok());
/// ```
pub fn verify_password(password: &SecretString, expected_hash: &str) -> Result<(), PasswordError> {
    // ["", "argon2id", "v=19", "m=..,t=..,p=..", "<salt>", "<hash>"]
    let parts: Vec<&str> = expected_hash.split('$').collect();
    let [empty, algorithm, version, params, salt_b64, hash_b64] = parts.as_slice()
    else {
        return Err(PasswordError::InvalidHashFormat);
    };
    if !empty.is_empty() || *algorithm != "argon2id" || *version != "v=19" {
        return Err(PasswordError::InvalidHashFormat);
    }

    let config = parse_params(params)?;
    let salt = BASE64_STANDARD.decode(salt_b64)?;
    let stored_hash = BASE64_STANDARD.decode(hash_b64)?;

    let mut computed_hash = vec![0u8; stored_hash.len()];
    config
        .argon2(stored_hash.len())?
        .hash_password_into(
            password.expose_secret().as_bytes(),
            &salt,
            &mut computed_hash,
        )
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

    use subtle::ConstantTimeEq;
    if computed_hash.as_slice().ct_eq(&stored_hash).into() {
        Ok(())
    }
    else {
        Err(PasswordError::VerificationFailed)
    }
}

/// Parses the `m=..,t=..,p=..` segment of a stored hash.
fn parse_params(segment: &str) -> Result<PasswordConfig, PasswordError> {
    let mut config = PasswordConfig::default();
    for pair in segment.split(',') {
        let (key, value) = pair.split_once('=').ok_or(PasswordError::InvalidHashFormat)?;
        let value: u32 = value.parse().map_err(|_| PasswordError::InvalidHashFormat)?;
        match key {
            "m" => config.memory_cost = value,
            "t" => config.time_cost = value,
            "p" => config.parallelism = value,
            _ => return Err(PasswordError::InvalidHashFormat),
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = SecretString::from("1234".to_string());
        let hash = hash_password(&password, Some(PasswordConfig::fast())).unwrap();
        let result = verify_password(&password, hash.expose_secret());
        assert!(result.is_ok(), "Verification failed: {:?}", result);
    }

    #[test]
    fn test_wrong_password_fails() {
        let password = SecretString::from("1234".to_string());
        let wrong_password = SecretString::from("4321".to_string());
        let hash = hash_password(&password, Some(PasswordConfig::fast())).unwrap();
        assert!(matches!(
            verify_password(&wrong_password, hash.expose_secret()),
            Err(PasswordError::VerificationFailed)
        ));
    }

    #[test]
    fn test_hash_encodes_params() {
        let password = SecretString::from("1234".to_string());
        let hash = hash_password(&password, Some(PasswordConfig::fast())).unwrap();
        assert!(hash.expose_secret().starts_with("$argon2id$v=19$m=64,t=1,p=1$"));
    }

    #[test]
    fn test_salts_differ() {
        let password = SecretString::from("1234".to_string());
        let a = hash_password(&password, Some(PasswordConfig::fast())).unwrap();
        let b = hash_password(&password, Some(PasswordConfig::fast())).unwrap();
        assert_ne!(a.expose_secret(), b.expose_secret());
    }

    #[test]
    fn test_malformed_hash_is_rejected() {
        let password = SecretString::from("1234".to_string());
        assert!(matches!(
            verify_password(&password, "plaintext"),
            Err(PasswordError::InvalidHashFormat)
        ));
        assert!(matches!(
            verify_password(&password, "$bcrypt$v=19$m=64,t=1,p=1$AAAA$AAAA"),
            Err(PasswordError::InvalidHashFormat)
        ));
        assert!(matches!(
            verify_password(&password, "$argon2id$v=19$m=x,t=1,p=1$AAAA$AAAA"),
            Err(PasswordError::InvalidHashFormat)
        ));
    }
}
