//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - form: field specifications and form variants
//! - feedback: submission outcomes and presentation state

pub mod feedback;
pub mod form;

pub use feedback::*;
pub use form::*;
