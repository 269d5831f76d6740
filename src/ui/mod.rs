//! Rendering layer: widget construction and theming.
//!
//! Everything here is declarative setup; interaction flows back to the
//! application layer as `Message`s over the FLTK channel.

pub mod page;
pub mod theme;

pub use page::{build_page, PageWidgets, ScrollFeed};
pub use theme::apply_theme;
