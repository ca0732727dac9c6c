//! Session API client for the remote identity service.
//!
//! DESIGN
//! ======
//! `types` holds the wire DTOs, `error` the normalized failure signal,
//! and `api` the four HTTP operations. Response normalization is pure so
//! the success/failure contract is testable without a browser.

pub mod api;
pub mod error;
pub mod types;
