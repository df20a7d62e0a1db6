//! Domain Layer
//!
//! Content schema, session token signing/verification, repository trait.

pub mod content;
pub mod repository;
pub mod session;
