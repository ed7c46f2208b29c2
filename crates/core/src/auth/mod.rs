//! Authentication helpers.
//!
//! This module provides password hashing and verification with Argon2id.

mod password;

pub use password::{PasswordError, hash_password, verify_password};
