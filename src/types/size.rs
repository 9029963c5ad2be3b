//! Pixel dimensions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PasteError, Result};

/// Width and height of an image in pixels.
///
/// Serialized as a `WxH` string so it reads naturally in `shadowpaste.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size of an existing image buffer.
    pub fn of<I: image::GenericImageView>(image: &I) -> Self {
        let (width, height) = image.dimensions();
        Self { width, height }
    }

    /// Half of each dimension, rounded down.
    pub fn half(self) -> (i64, i64) {
        (i64::from(self.width / 2), i64::from(self.height / 2))
    }
}

/// Parse a `WxH` dimension string (e.g. `30x30`).
impl FromStr for Size {
    type Err = PasteError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.splitn(2, |c| c == 'x' || c == 'X').collect();
        if parts.len() != 2 {
            return Err(PasteError::Parse {
                message: format!("Invalid size '{}': expected WxH (e.g. 30x30)", s),
                help: Some("Use the format WxH, for example: 30x30, 24x32".to_string()),
            });
        }

        let w: u32 = parts[0].trim().parse().map_err(|_| PasteError::Parse {
            message: format!("Invalid width '{}' in size '{}'", parts[0], s),
            help: Some("Width must be a positive integer".to_string()),
        })?;

        let h: u32 = parts[1].trim().parse().map_err(|_| PasteError::Parse {
            message: format!("Invalid height '{}' in size '{}'", parts[1], s),
            help: Some("Height must be a positive integer".to_string()),
        })?;

        if w == 0 || h == 0 {
            return Err(PasteError::Parse {
                message: format!("Size must be non-zero, got {}x{}", w, h),
                help: Some("Both width and height must be at least 1".to_string()),
            });
        }

        Ok(Self::new(w, h))
    }
}

impl TryFrom<String> for Size {
    type Error = PasteError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Size> for String {
    fn from(size: Size) -> Self {
        size.to_string()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!("30x30".parse::<Size>().unwrap(), Size::new(30, 30));
        assert_eq!("24X32".parse::<Size>().unwrap(), Size::new(24, 32));
    }

    #[test]
    fn test_parse_size_invalid() {
        assert!("30".parse::<Size>().is_err());
        assert!("ax30".parse::<Size>().is_err());
        assert!("0x30".parse::<Size>().is_err());
        assert!("30x-1".parse::<Size>().is_err());
    }

    #[test]
    fn test_half_rounds_down() {
        assert_eq!(Size::new(30, 30).half(), (15, 15));
        assert_eq!(Size::new(31, 9).half(), (15, 4));
    }

    #[test]
    fn test_of_image() {
        let img = image::RgbaImage::new(7, 3);
        assert_eq!(Size::of(&img), Size::new(7, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Size::new(30, 20).to_string(), "30x20");
    }
}
