//! End-to-end merge: load, locate, resize, paste, save.

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::detect::{locate, DEFAULT_THRESHOLD};
use crate::error::{PasteError, Result};
use crate::output::{display_path, Printer};
use crate::types::{Point, Size};

use super::{centered_on, check_bounds, composite, resize_overlay, DEFAULT_OVERLAY_SIZE};

/// Tunables for a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeOptions {
    /// Pixels with brightness strictly below this count as shadow.
    pub threshold: u8,
    /// Size the overlay is resized to before pasting.
    pub overlay_size: Size,
}

impl Default for CompositeOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            overlay_size: DEFAULT_OVERLAY_SIZE,
        }
    }
}

/// What a successful merge did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub output: PathBuf,
    /// Top-left corner the overlay was pasted at.
    pub position: Point,
    /// Shadow center, when the position was detected rather than given.
    pub detected: Option<Point>,
    pub base_size: Size,
    pub overlay_size: Size,
}

/// Pastes an overlay onto a base image, centering it on the base's shadow
/// unless an explicit position is given.
pub struct Compositor<'a> {
    options: CompositeOptions,
    printer: &'a Printer,
}

impl<'a> Compositor<'a> {
    pub fn new(options: CompositeOptions, printer: &'a Printer) -> Self {
        Self { options, printer }
    }

    /// Merge the images at `base_path` and `overlay_path` into a PNG at `output_path`.
    ///
    /// Nothing is written when the placement falls outside the base image.
    pub fn merge(
        &self,
        base_path: &Path,
        overlay_path: &Path,
        output_path: &Path,
        position: Option<Point>,
    ) -> Result<MergeReport> {
        let base = load_rgba(base_path)?;
        let overlay = load_rgba(overlay_path)?;

        let (merged, mut report) = self.merge_images(&base, &overlay, position)?;

        merged
            .save_with_format(output_path, ImageFormat::Png)
            .map_err(|e| PasteError::Encode {
                path: output_path.to_path_buf(),
                message: e.to_string(),
            })?;

        self.printer.status(
            "Saved",
            &self.printer.cyan(&display_path(output_path)),
        );

        report.output = output_path.to_path_buf();
        Ok(report)
    }

    /// In-memory half of [`merge`](Self::merge); the returned report has an empty output path.
    pub fn merge_images(
        &self,
        base: &RgbaImage,
        overlay: &RgbaImage,
        position: Option<Point>,
    ) -> Result<(RgbaImage, MergeReport)> {
        let overlay = resize_overlay(overlay, self.options.overlay_size);
        let overlay_size = Size::of(&overlay);
        let base_size = Size::of(base);

        let (position, detected) = match position {
            Some(position) => (position, None),
            None => {
                let center = locate(base, self.options.threshold, self.printer);
                let position = centered_on(center, overlay_size);
                self.printer.info(
                    "Detected",
                    &format!("shadow center {}, pasting overlay at {}", center, position),
                );
                (position, Some(center))
            }
        };

        if let Err(err) = check_bounds(position, overlay_size, base_size) {
            self.printer.warning(
                "Skipped",
                &format!(
                    "overlay of {} at {} falls outside the {} base image",
                    overlay_size, position, base_size
                ),
            );
            return Err(err);
        }

        let merged = composite(base, &overlay, position)?;

        Ok((
            merged,
            MergeReport {
                output: PathBuf::new(),
                position,
                detected,
                base_size,
                overlay_size,
            },
        ))
    }
}

/// Open and decode an image file as RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|e| PasteError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(image.to_rgba8())
}
