//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (bcrypt) with zeroized clear text
//! - Cookie management

pub mod cookie;
pub mod password;
