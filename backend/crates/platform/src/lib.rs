//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id with optional pepper, zeroized secrets)
//! - Bearer tokens (HS256 JWT with a fixed lifetime)

pub mod password;
pub mod token;
