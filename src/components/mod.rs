//! Shared presentation components.

pub mod form_switch;
