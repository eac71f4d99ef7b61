//! folio-core: interactive core of the portfolio site.
//!
//! This crate holds the browser-free state machines behind every widget on
//! the page. Hosts (a DOM binding, or the terminal shell in `folio-tui`)
//! translate platform events into calls on these types and implement the
//! small collaborator traits they need.
//!
//! # Architecture
//!
//! ```text
//! SearchIndex ──► filter ──► DropdownController ──► Renderer
//!                                   │
//!                                   └──────────────► Navigator
//! ```
//!
//! The remaining modules are independent leaves: theme preference, toasts,
//! forms, lightbox, carousel, slider, share buttons, reveal effects and a11y
//! helpers.

pub mod a11y;
pub mod carousel;
pub mod config;
pub mod dropdown;
pub mod forms;
pub mod lightbox;
pub mod preference;
pub mod reveal;
pub mod search;
pub mod share;
pub mod slider;
pub mod toast;
pub mod types;

pub use dropdown::{DropdownController, DropdownState, Focus, Navigator, Renderer};
pub use search::SearchIndex;
pub use types::{NavTarget, SearchEntry};
