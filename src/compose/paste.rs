//! Alpha-masked pasting of one RGBA buffer onto another.

use image::{imageops, Rgba, RgbaImage};

use crate::error::Result;
use crate::types::{Point, Size};

use super::check_bounds;

/// Blend `source` onto `dest` at `(offset_x, offset_y)` using the source alpha as mask.
///
/// Every channel, alpha included, moves from the destination value towards the
/// source value in proportion to the source alpha. Pixels falling outside
/// `dest` are skipped.
pub fn paste_masked(dest: &mut RgbaImage, source: &RgbaImage, offset_x: u32, offset_y: u32) {
    for (sx, sy, pixel) in source.enumerate_pixels() {
        let dx = offset_x + sx;
        let dy = offset_y + sy;
        if dx >= dest.width() || dy >= dest.height() {
            continue;
        }

        let mask = pixel.0[3];
        if mask == 0 {
            continue;
        }

        let under = dest.get_pixel_mut(dx, dy);
        *under = blend(*under, *pixel, mask);
    }
}

fn blend(under: Rgba<u8>, over: Rgba<u8>, mask: u8) -> Rgba<u8> {
    let m = u32::from(mask);
    let mut out = [0u8; 4];
    for (i, channel) in out.iter_mut().enumerate() {
        let s = u32::from(over.0[i]);
        let d = u32::from(under.0[i]);
        *channel = ((s * m + d * (255 - m) + 127) / 255) as u8;
    }
    Rgba(out)
}

/// Flatten `overlay` onto a copy of `base` at `position`.
///
/// The result has the base's dimensions and starts fully transparent before
/// the base is copied in. Fails without allocating when the overlay would not
/// fit inside the base.
pub fn composite(base: &RgbaImage, overlay: &RgbaImage, position: Point) -> Result<RgbaImage> {
    check_bounds(position, Size::of(overlay), Size::of(base))?;

    let mut canvas = RgbaImage::new(base.width(), base.height());
    imageops::replace(&mut canvas, base, 0, 0);
    // Bounds check guarantees a non-negative position.
    paste_masked(&mut canvas, overlay, position.x as u32, position.y as u32);

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PasteError;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    #[test]
    fn test_paste_opaque_replaces() {
        let mut dest = RgbaImage::from_pixel(4, 4, BLUE);
        let source = RgbaImage::from_pixel(2, 2, RED);

        paste_masked(&mut dest, &source, 1, 1);

        assert_eq!(*dest.get_pixel(0, 0), BLUE);
        assert_eq!(*dest.get_pixel(1, 1), RED);
        assert_eq!(*dest.get_pixel(2, 2), RED);
        assert_eq!(*dest.get_pixel(3, 3), BLUE);
    }

    #[test]
    fn test_paste_transparent_keeps_base() {
        let mut dest = RgbaImage::from_pixel(2, 2, BLUE);
        let source = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 0]));

        paste_masked(&mut dest, &source, 0, 0);

        assert!(dest.pixels().all(|p| *p == BLUE));
    }

    #[test]
    fn test_paste_half_alpha_blends_every_channel() {
        let mut dest = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 200, 255]));
        let source = RgbaImage::from_pixel(1, 1, Rgba([200, 0, 0, 128]));

        paste_masked(&mut dest, &source, 0, 0);

        // (200*128 + 0*127 + 127) / 255 = 100, (200*127 + 127) / 255 = 100,
        // alpha: (128*128 + 255*127 + 127) / 255 = 191
        assert_eq!(*dest.get_pixel(0, 0), Rgba([100, 0, 100, 191]));
    }

    #[test]
    fn test_paste_clips_at_edges() {
        let mut dest = RgbaImage::from_pixel(3, 3, BLUE);
        let source = RgbaImage::from_pixel(2, 2, RED);

        paste_masked(&mut dest, &source, 2, 2);

        assert_eq!(*dest.get_pixel(2, 2), RED);
        assert_eq!(*dest.get_pixel(1, 1), BLUE);
    }

    #[test]
    fn test_composite_on_blank_base() {
        let base = RgbaImage::from_pixel(50, 50, CLEAR);
        let overlay = RgbaImage::from_pixel(30, 30, RED);

        let out = composite(&base, &overlay, Point::new(10, 10)).unwrap();

        assert_eq!(out.dimensions(), (50, 50));
        assert_eq!(*out.get_pixel(25, 25), RED);
        assert_eq!(*out.get_pixel(5, 5), CLEAR);
        assert_eq!(*out.get_pixel(40, 40), CLEAR);
    }

    #[test]
    fn test_composite_preserves_base_outside_overlay() {
        let mut base = RgbaImage::from_pixel(10, 10, BLUE);
        base.put_pixel(9, 9, Rgba([1, 2, 3, 4]));
        let overlay = RgbaImage::from_pixel(3, 3, RED);

        let out = composite(&base, &overlay, Point::new(0, 0)).unwrap();

        assert_eq!(*out.get_pixel(9, 9), Rgba([1, 2, 3, 4]));
        assert_eq!(*out.get_pixel(5, 5), BLUE);
        assert_eq!(*out.get_pixel(2, 2), RED);
    }

    #[test]
    fn test_composite_rejects_out_of_bounds() {
        let base = RgbaImage::new(100, 100);
        let overlay = RgbaImage::new(30, 30);

        let err = composite(&base, &overlay, Point::new(90, 90)).unwrap_err();
        assert!(matches!(err, PasteError::OutOfBounds { .. }));
    }
}
