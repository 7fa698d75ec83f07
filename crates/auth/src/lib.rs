//! # Account Credentials
//!
//! Password hashing for the login accounts attached to seeded customers.

pub mod password;

pub use password::{PasswordConfig, PasswordError, hash_password, verify_password};
pub use secrecy;
