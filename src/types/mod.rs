//! Core domain types for shadowpaste.
//!
//! - `Point` - signed pixel coordinates (detections and paste positions)
//! - `Size` - image dimensions

mod point;
mod size;

pub use point::Point;
pub use size::Size;
