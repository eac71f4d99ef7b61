//! folio: interactive core of a personal portfolio site.
//!
//! The workspace splits into three crates that this one re-exports so that
//! integration tests and benches can import them from one place:
//!
//! ```text
//! folio-core ──► folio-transport
//!     │               │
//!     └──► folio-tui ◄┘
//! ```
//!
//! The binary adds a headless mode ([`headless`]) that prints the suggestion
//! rows for a query as JSON lines.

pub mod headless;

pub use folio_core as core;
pub use folio_transport as transport;
pub use folio_tui as tui;
