//! Merge command implementation.
//!
//! Pastes the overlay onto the base image, at an explicit position or
//! centered on the detected shadow, and writes the result as PNG.

use std::path::PathBuf;

use clap::Args;

use crate::compose::{CompositeOptions, Compositor, MergeReport};
use crate::config::Config;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::types::{Point, Size};

/// Paste an overlay onto a base image and write a PNG
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Base image (default: 1.png)
    pub base: Option<PathBuf>,

    /// Overlay image (default: 2.png)
    pub overlay: Option<PathBuf>,

    /// Output PNG path (default: 3.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Paste position as X,Y (default: centered on the detected shadow)
    #[arg(long, allow_hyphen_values = true)]
    pub at: Option<Point>,

    /// Shadow brightness threshold (0-255)
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Overlay size as WxH
    #[arg(long)]
    pub size: Option<Size>,
}

impl MergeArgs {
    /// Compositing options: flags first, then config, then defaults.
    pub fn options(&self, config: &Config) -> CompositeOptions {
        let from_config = config.options();
        CompositeOptions {
            threshold: self.threshold.unwrap_or(from_config.threshold),
            overlay_size: self.size.unwrap_or(from_config.overlay_size),
        }
    }
}

pub fn run(args: MergeArgs, config: &Config, printer: &Printer) -> Result<MergeReport> {
    let base = args.base.clone().unwrap_or_else(|| config.effective_base());
    let overlay = args
        .overlay
        .clone()
        .unwrap_or_else(|| config.effective_overlay());
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.effective_output());

    printer.status(
        "Merging",
        &format!("{} onto {}", display_path(&overlay), display_path(&base)),
    );

    let compositor = Compositor::new(args.options(config), printer);
    compositor.merge(&base, &overlay, &output, args.at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PasteError;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn args(dir: &std::path::Path) -> MergeArgs {
        MergeArgs {
            base: Some(dir.join("base.png")),
            overlay: Some(dir.join("icon.png")),
            output: Some(dir.join("out.png")),
            at: None,
            threshold: None,
            size: None,
        }
    }

    fn write_inputs(dir: &std::path::Path) {
        let mut base = RgbaImage::from_pixel(80, 60, Rgba([240, 240, 240, 255]));
        for y in 20..30 {
            for x in 30..40 {
                base.put_pixel(x, y, Rgba([10, 10, 10, 255]));
            }
        }
        base.save(dir.join("base.png")).unwrap();
        RgbaImage::from_pixel(8, 8, Rgba([0, 200, 0, 255]))
            .save(dir.join("icon.png"))
            .unwrap();
    }

    #[test]
    fn test_run_detects_and_writes() {
        let dir = tempdir().unwrap();
        write_inputs(dir.path());

        let report = run(args(dir.path()), &Config::default(), &Printer::quiet()).unwrap();

        // Shadow spans 30..40 x 20..30, centroid (34, 24)
        assert_eq!(report.detected, Some(Point::new(34, 24)));
        assert_eq!(report.position, Point::new(19, 9));

        let out = image::open(dir.path().join("out.png")).unwrap().to_rgba8();
        assert_eq!(out.dimensions(), (80, 60));
        assert_eq!(*out.get_pixel(34, 24), Rgba([0, 200, 0, 255]));
    }

    #[test]
    fn test_run_flags_override_config() {
        let dir = tempdir().unwrap();
        write_inputs(dir.path());

        let config = Config {
            overlay_size: Some(Size::new(40, 40)),
            threshold: Some(5),
            ..Default::default()
        };
        let merge_args = MergeArgs {
            size: Some(Size::new(10, 10)),
            threshold: Some(50),
            ..args(dir.path())
        };

        let report = run(merge_args, &config, &Printer::quiet()).unwrap();
        assert_eq!(report.overlay_size, Size::new(10, 10));
        assert_eq!(report.position, Point::new(29, 19));
    }

    #[test]
    fn test_run_explicit_position_out_of_bounds() {
        let dir = tempdir().unwrap();
        write_inputs(dir.path());

        let merge_args = MergeArgs {
            at: Some(Point::new(70, 10)),
            ..args(dir.path())
        };

        let result = run(merge_args, &Config::default(), &Printer::quiet());
        assert!(matches!(result, Err(PasteError::OutOfBounds { .. })));
        assert!(!dir.path().join("out.png").exists());
    }

    #[test]
    fn test_options_fall_back_to_config() {
        let config = Config {
            threshold: Some(90),
            ..Default::default()
        };
        let merge_args = MergeArgs {
            base: None,
            overlay: None,
            output: None,
            at: None,
            threshold: None,
            size: None,
        };

        let options = merge_args.options(&config);
        assert_eq!(options.threshold, 90);
        assert_eq!(options.overlay_size, Size::new(30, 30));
    }
}
