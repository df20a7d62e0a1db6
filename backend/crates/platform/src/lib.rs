//! Platform Infrastructure
//!
//! Cross-cutting utilities with no domain knowledge:
//! - `crypto` - byte/base64 codecs, HMAC signing, constant-time compare
//! - `cookie` - cookie building and extraction

pub mod cookie;
pub mod crypto;
