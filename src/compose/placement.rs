//! Paste position arithmetic and bounds validation.

use crate::error::{PasteError, Result};
use crate::types::{Point, Size};

/// Top-left corner that centers an overlay of `overlay` size on `center`.
///
/// The offset is half of the actual overlay dimensions, rounded down.
pub fn centered_on(center: Point, overlay: Size) -> Point {
    let (half_w, half_h) = overlay.half();
    center.offset_back(half_w, half_h)
}

/// Check that an overlay placed at `position` lies entirely inside `base`.
pub fn check_bounds(position: Point, overlay: Size, base: Size) -> Result<()> {
    let right = position.x.checked_add(i64::from(overlay.width));
    let bottom = position.y.checked_add(i64::from(overlay.height));

    let fits = position.x >= 0
        && position.y >= 0
        && right.is_some_and(|r| r <= i64::from(base.width))
        && bottom.is_some_and(|b| b <= i64::from(base.height));

    if fits {
        Ok(())
    } else {
        Err(PasteError::OutOfBounds {
            position,
            overlay,
            base,
        })
    }
}
