//! Infrastructure Layer
//!
//! External service implementations of the domain traits.

pub mod github;
