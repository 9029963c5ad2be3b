//! Overlay resizing.

use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

use crate::types::Size;

/// Default footprint of the pasted overlay.
pub const DEFAULT_OVERLAY_SIZE: Size = Size::new(30, 30);

/// Resize the overlay to exactly `size`, ignoring its aspect ratio.
///
/// Always uses bicubic (Catmull-Rom) sampling on premultiplied alpha, so the
/// colour of fully transparent pixels never bleeds into visible edges.
pub fn resize_overlay(overlay: &RgbaImage, size: Size) -> RgbaImage {
    if overlay.dimensions() == (size.width, size.height) {
        return overlay.clone();
    }

    let premultiplied = premultiply(overlay);
    let resized = imageops::resize(&premultiplied, size.width, size.height, FilterType::CatmullRom);
    unpremultiply(&resized)
}

/// Normalize to `0.0..=1.0` and scale colour channels by alpha.
fn premultiply(image: &RgbaImage) -> Rgba32FImage {
    Rgba32FImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0.map(|c| f32::from(c) / 255.0);
        Rgba([r * a, g * a, b * a, a])
    })
}

fn unpremultiply(image: &Rgba32FImage) -> RgbaImage {
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        if a <= 0.0 {
            return Rgba([0, 0, 0, 0]);
        }
        let to_byte = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgba([to_byte(r / a), to_byte(g / a), to_byte(b / a), to_byte(a)])
    })
}
