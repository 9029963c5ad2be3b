//! Locate command implementation.
//!
//! Prints the shadow center of an image to stdout.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::compose::load_rgba;
use crate::config::Config;
use crate::detect::detect;
use crate::error::Result;
use crate::output::{display_path, Printer};

/// Print the shadow center of an image
#[derive(Args, Debug)]
pub struct LocateArgs {
    /// Image to scan
    #[arg(required = true)]
    pub image: PathBuf,

    /// Shadow brightness threshold (0-255)
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Emit JSON instead of X,Y
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable result of `shadowpaste locate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocateReport {
    pub x: i64,
    pub y: i64,
    pub dark_pixels: usize,
    pub threshold: u8,
}

/// Scan the image and build a report, falling back to the origin when nothing is dark.
pub fn analyze(args: &LocateArgs, config: &Config, printer: &Printer) -> Result<LocateReport> {
    let threshold = args.threshold.unwrap_or(config.options().threshold);
    let image = load_rgba(&args.image)?;

    printer.status(
        "Scanning",
        &format!("{} (threshold {})", display_path(&args.image), threshold),
    );

    let detection = detect(&image, threshold, printer);

    Ok(LocateReport {
        x: detection.center.x,
        y: detection.center.y,
        dark_pixels: detection.dark_pixels,
        threshold,
    })
}

/// Render a report the way `locate` prints it.
pub fn format_report(report: &LocateReport, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(report).map_err(std::io::Error::from)?)
    } else {
        Ok(format!("{},{}", report.x, report.y))
    }
}

pub fn run(args: LocateArgs, config: &Config, printer: &Printer) -> Result<()> {
    let report = analyze(&args, config, printer)?;
    let line = format_report(&report, args.json)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", line)?;
    Ok(())
}
