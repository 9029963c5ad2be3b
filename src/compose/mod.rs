//! Compositing module for shadowpaste.
//!
//! Resizes the overlay, resolves where it goes, and flattens it onto the
//! base image.

mod merge;
mod paste;
mod placement;
mod resize;

pub use merge::{load_rgba, CompositeOptions, Compositor, MergeReport};
pub use paste::{composite, paste_masked};
pub use placement::{centered_on, check_bounds};
pub use resize::{resize_overlay, DEFAULT_OVERLAY_SIZE};
