//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the access-gate middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
