//! Shadow centroid detection.
//!
//! Finds the mean position of every pixel darker than a threshold.

use image::RgbaImage;

use crate::output::Printer;
use crate::types::Point;

use super::GrayscaleView;

/// Default brightness threshold on the 0-255 scale.
pub const DEFAULT_THRESHOLD: u8 = 50;

/// Result of a successful shadow scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    /// Truncated centroid of the dark pixels.
    pub center: Point,
    /// Number of pixels strictly below the threshold.
    pub dark_pixels: usize,
}

/// Scan a grayscale view for pixels strictly below `threshold`.
///
/// Returns `None` when no pixel qualifies.
pub fn scan(gray: &GrayscaleView, threshold: u8) -> Option<Detection> {
    let mut row_sum: u64 = 0;
    let mut col_sum: u64 = 0;
    let mut count: u64 = 0;

    for (row, col, value) in gray.rows() {
        if value < threshold {
            row_sum += u64::from(row);
            col_sum += u64::from(col);
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }

    Some(Detection {
        center: centroid_to_point(row_sum / count, col_sum / count),
        dark_pixels: count as usize,
    })
}

/// Convert a `(row, col)` centroid into an `(x, y)` point.
///
/// The only place the mask's row-major indexing is swapped into image coordinates.
fn centroid_to_point(mean_row: u64, mean_col: u64) -> Point {
    Point::new(mean_col as i64, mean_row as i64)
}

/// Scan `image` for its shadow, reporting an empty detection at the origin.
///
/// Emits a warning when nothing is darker than `threshold`.
pub fn detect(image: &RgbaImage, threshold: u8, printer: &Printer) -> Detection {
    let gray = GrayscaleView::new(image);

    scan(&gray, threshold).unwrap_or_else(|| {
        printer.warning(
            "Fallback",
            &format!(
                "No pixels darker than {} found; using default position {}",
                threshold,
                Point::ORIGIN
            ),
        );
        Detection {
            center: Point::ORIGIN,
            dark_pixels: 0,
        }
    })
}

/// Locate the shadow center of `image`, falling back to the origin.
pub fn locate(image: &RgbaImage, threshold: u8, printer: &Printer) -> Point {
    detect(image, threshold, printer).center
}
