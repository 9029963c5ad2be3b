//! shadowpaste - Paste an icon onto the shadow of a base image
//!
//! Finds the centroid of the darkest region of a base image, centers a
//! resized overlay on it, and writes the flattened result as PNG.

pub mod cli;
pub mod compose;
pub mod config;
pub mod detect;
pub mod error;
pub mod output;
pub mod types;

pub use compose::{
    centered_on, check_bounds, composite, load_rgba, paste_masked, resize_overlay,
    CompositeOptions, Compositor, MergeReport, DEFAULT_OVERLAY_SIZE,
};
pub use config::{Config, CONFIG_FILENAME};
pub use detect::{detect, locate, scan, Detection, GrayscaleView, DEFAULT_THRESHOLD};
pub use error::{PasteError, Result};
pub use output::Printer;
pub use types::{Point, Size};
