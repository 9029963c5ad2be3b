//! Shadow detection.
//!
//! Converts a base image to grayscale and finds the centroid of its
//! darkest region.

mod grayscale;
mod locator;

pub use grayscale::{luma, GrayscaleView};
pub use locator::{detect, locate, scan, Detection, DEFAULT_THRESHOLD};
