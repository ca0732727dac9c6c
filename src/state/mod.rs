//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Session state is a plain value with an explicit transition function,
//! so the login/signup/logout flow is testable in isolation from
//! rendering. Components hold it in an `RwSignal` provided via context.

pub mod auth;
