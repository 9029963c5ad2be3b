//! Single-channel brightness view used for shadow thresholding.

use image::{GrayImage, Luma, RgbaImage};

/// ITU-R 601-2 luma weights in 16.16 fixed point.
const R_WEIGHT: u32 = 19595;
const G_WEIGHT: u32 = 38470;
const B_WEIGHT: u32 = 7471;

/// Read-only grayscale rendition of an RGBA image.
///
/// Alpha is ignored: a fully transparent black pixel reads as black.
pub struct GrayscaleView {
    luma: GrayImage,
}

impl GrayscaleView {
    pub fn new(image: &RgbaImage) -> Self {
        let luma = GrayImage::from_fn(image.width(), image.height(), |x, y| {
            let [r, g, b, _] = image.get_pixel(x, y).0;
            Luma([luma(r, g, b)])
        });
        Self { luma }
    }

    /// Iterate `(row, col, value)` in row-major order.
    pub fn rows(&self) -> impl Iterator<Item = (u32, u32, u8)> + '_ {
        self.luma
            .enumerate_pixels()
            .map(|(col, row, px)| (row, col, px.0[0]))
    }
}

/// Rounded `0.299 R + 0.587 G + 0.114 B`.
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let sum = u32::from(r) * R_WEIGHT + u32::from(g) * G_WEIGHT + u32::from(b) * B_WEIGHT;
    ((sum + 0x8000) >> 16) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
    }

    #[test]
    fn test_luma_primaries() {
        assert_eq!(luma(255, 0, 0), 76);
        assert_eq!(luma(0, 255, 0), 150);
        assert_eq!(luma(0, 0, 255), 29);
    }

    #[test]
    fn test_view_ignores_alpha() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        img.put_pixel(1, 0, Rgba([200, 200, 200, 0]));

        let view = GrayscaleView::new(&img);
        let values: Vec<u8> = view.rows().map(|(_, _, v)| v).collect();
        assert_eq!(values, vec![0, 200]);
    }

    #[test]
    fn test_rows_reports_row_then_col() {
        let mut img = RgbaImage::from_pixel(3, 2, Rgba([255, 255, 255, 255]));
        img.put_pixel(2, 1, Rgba([0, 0, 0, 255]));

        let view = GrayscaleView::new(&img);
        let dark: Vec<_> = view.rows().filter(|&(_, _, v)| v == 0).collect();
        assert_eq!(dark, vec![(1, 2, 0)]);
    }
}
