//! Integer pixel coordinates.

use std::fmt;
use std::str::FromStr;

use crate::error::{PasteError, Result};

/// An `(x, y)` pixel coordinate.
///
/// May be negative: centering an overlay near the image edge yields a
/// corner outside the image, which the bounds check rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Shift this point by `(-dx, -dy)`.
    pub const fn offset_back(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x - dx, self.y - dy)
    }
}

/// Parse an `X,Y` coordinate string (e.g. `35,35` or `-4,12`).
impl FromStr for Point {
    type Err = PasteError;

    fn from_str(s: &str) -> Result<Self> {
        let Some((x, y)) = s.split_once(',') else {
            return Err(PasteError::Parse {
                message: format!("Invalid position '{}': expected X,Y (e.g. 35,35)", s),
                help: Some("Use the format X,Y, for example: 10,20".to_string()),
            });
        };

        let x: i64 = x.trim().parse().map_err(|_| PasteError::Parse {
            message: format!("Invalid x coordinate '{}' in position '{}'", x, s),
            help: Some("Coordinates must be integers".to_string()),
        })?;

        let y: i64 = y.trim().parse().map_err(|_| PasteError::Parse {
            message: format!("Invalid y coordinate '{}' in position '{}'", y, s),
            help: Some("Coordinates must be integers".to_string()),
        })?;

        Ok(Self::new(x, y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
