//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source code display with syntax highlighting and line numbers
//! - [`tree`]: Collapsible outline of the syntax tree
//! - [`status`]: Status bar with keybindings and selection info
//!
//! Each pane module exports a `render_*` function that takes the frame, its
//! area, and whatever state it draws from.

pub mod source;
pub mod status;
pub mod tree;

// Re-export render functions for convenience
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use tree::{render_tree_pane, TreeRenderData};
