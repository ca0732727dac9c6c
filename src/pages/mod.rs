//! Page modules for the three presentation states.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form fields and submission orchestration and
//! reaches the shared session state through context. Pure helpers
//! (validation, outcome mapping) sit next to the components so they test
//! natively.

pub mod dashboard;
pub mod login;
pub mod signup;
