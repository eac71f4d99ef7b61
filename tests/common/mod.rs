//! Shared test utilities for folio integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod builders;
pub mod fake_site;
pub mod fixtures;
pub mod recording;

pub use builders::*;
pub use fixtures::*;
pub use recording::*;
