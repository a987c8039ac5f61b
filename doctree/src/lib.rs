//! Accessible navigation trees for documentation pages.
//!
//! Builds a WAI-ARIA treeview over the nested link lists of a [`docdom`]
//! document: a table of contents generated from the page headings and a
//! site outline. See [`Page`] for the page-level entry point and
//! [`TreeIndex`] for the widget itself.

pub mod config;
pub mod debounce;
pub mod error;
pub mod observer;
pub mod outline;
pub mod page;
pub mod render;
pub mod toc;
pub mod toggle;
pub mod tree;

pub use config::{ActivationOrder, Location, TreeConfig};
pub use debounce::Debounce;
pub use error::{OutlineError, TreeError};
pub use observer::{IntersectionEntry, IntersectionTracker};
pub use outline::{Outline, OutlineEntry};
pub use page::Page;
pub use render::render_lines;
pub use toc::{add_links_to_toc, add_links_to_toc_with, TocNesting};
pub use toggle::ExpandToggle;
pub use tree::{ActivationCallback, EventResult, ItemState, TreeIndex, TreeNode};
