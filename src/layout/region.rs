//! Region: Caller-supplied rectangular sub-areas of the grid.
//!
//! Region arguments are deliberately loose: callers computing bounds during
//! animation or scrolling may hand in coordinates partially or entirely off
//! the grid. Resolution clips to grid bounds, and a region with nothing left
//! on the grid resolves to `None`, a documented no-op for every region
//! operation, never an error. Contradictory *partial* arguments (width/height
//! without an origin, or half of a pair) are a contract violation and fail
//! before any mutation happens.

use super::rect::Rect;
use crate::error::{Error, Result};

/// A partially-specified region, resolved against grid bounds at use time.
///
/// Mirrors the optional-argument addressing scheme of classic console
/// libraries:
///
/// - an explicit [`Rect`] overrides the discrete fields;
/// - only `x` and `y` given → a 1×1 region at that cell;
/// - nothing given → the full grid;
/// - `width`/`height` without `x`/`y`, or half of either pair → invalid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegionSpec {
    x: Option<i32>,
    y: Option<i32>,
    width: Option<u16>,
    height: Option<u16>,
    rect: Option<Rect>,
}

impl RegionSpec {
    /// The full grid.
    #[inline]
    pub const fn full() -> Self {
        Self {
            x: None,
            y: None,
            width: None,
            height: None,
            rect: None,
        }
    }

    /// A 1×1 region at (x, y).
    #[inline]
    pub const fn at(x: i32, y: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: None,
            height: None,
            rect: None,
        }
    }

    /// A fully-specified region.
    #[inline]
    pub const fn sized(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            rect: None,
        }
    }

    /// A region from an explicit rectangle (overrides the discrete fields).
    #[inline]
    pub const fn from_rect(rect: Rect) -> Self {
        Self {
            x: None,
            y: None,
            width: None,
            height: None,
            rect: Some(rect),
        }
    }

    /// Set the x origin.
    #[must_use]
    pub const fn with_x(mut self, x: i32) -> Self {
        self.x = Some(x);
        self
    }

    /// Set the y origin.
    #[must_use]
    pub const fn with_y(mut self, y: i32) -> Self {
        self.y = Some(y);
        self
    }

    /// Set the width.
    #[must_use]
    pub const fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the height.
    #[must_use]
    pub const fn with_height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    /// Resolve against a grid of the given dimensions.
    ///
    /// Returns `Ok(None)` when the region lies entirely outside the grid;
    /// callers treat that as a no-op. Returns [`Error::InvalidRegion`] for
    /// contradictory partial arguments, before anything is mutated.
    pub fn resolve(&self, grid_width: u16, grid_height: u16) -> Result<Option<Rect>> {
        if let Some(rect) = self.rect {
            return Ok(rect.clipped_to(grid_width, grid_height));
        }

        let (x, y, width, height) = match (self.x, self.y, self.width, self.height) {
            (None, None, None, None) => {
                return Ok(Some(Rect::from_size(grid_width, grid_height)))
            }
            (Some(x), Some(y), None, None) => (x, y, 1, 1),
            (Some(x), Some(y), Some(w), Some(h)) => (x, y, w, h),
            (None, None, Some(_), Some(_)) => {
                return Err(Error::InvalidRegion(
                    "width/height supplied without x/y",
                ))
            }
            _ => {
                return Err(Error::InvalidRegion(
                    "x/y and width/height must each be supplied as a pair",
                ))
            }
        };

        // Clip in signed space: a negative origin shrinks the region, and a
        // right/bottom edge at or left of zero leaves nothing on the grid.
        let mut left = i64::from(x);
        let mut top = i64::from(y);
        let mut w = i64::from(width);
        let mut h = i64::from(height);
        if left < 0 {
            w += left;
            left = 0;
        }
        if top < 0 {
            h += top;
            top = 0;
        }
        if w <= 0 || h <= 0 || left >= i64::from(grid_width) || top >= i64::from(grid_height) {
            return Ok(None);
        }
        w = w.min(i64::from(grid_width) - left);
        h = h.min(i64::from(grid_height) - top);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rect = Rect::new(left as u16, top as u16, w as u16, h as u16);
        Ok(Some(rect))
    }
}

impl From<Rect> for RegionSpec {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

impl From<(i32, i32)> for RegionSpec {
    /// A bare coordinate pair addresses a single cell.
    fn from((x, y): (i32, i32)) -> Self {
        Self::at(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_full_grid() {
        let region = RegionSpec::full().resolve(80, 25).unwrap();
        assert_eq!(region, Some(Rect::from_size(80, 25)));
    }

    #[test]
    fn test_resolve_single_cell() {
        let region = RegionSpec::at(3, 4).resolve(80, 25).unwrap();
        assert_eq!(region, Some(Rect::new(3, 4, 1, 1)));
    }

    #[test]
    fn test_resolve_clips_right_edge() {
        // Ten columns requested starting at the last one: one column remains
        let region = RegionSpec::sized(79, 0, 10, 1).resolve(80, 25).unwrap();
        assert_eq!(region, Some(Rect::new(79, 0, 1, 1)));
    }

    #[test]
    fn test_resolve_negative_origin_clips() {
        let region = RegionSpec::sized(-2, -1, 5, 4).resolve(80, 25).unwrap();
        assert_eq!(region, Some(Rect::new(0, 0, 3, 3)));
    }

    #[test]
    fn test_resolve_entirely_off_grid() {
        // Right edge never reaches column 0
        assert_eq!(RegionSpec::sized(-10, 0, 5, 5).resolve(80, 25).unwrap(), None);
        // Left edge past the grid
        assert_eq!(RegionSpec::sized(80, 0, 5, 5).resolve(80, 25).unwrap(), None);
        // Top edge past the grid
        assert_eq!(RegionSpec::sized(0, 25, 5, 5).resolve(80, 25).unwrap(), None);
        // Single cell below the grid
        assert_eq!(RegionSpec::at(0, 30).resolve(80, 25).unwrap(), None);
    }

    #[test]
    fn test_resolve_rect_overrides_fields() {
        let spec = RegionSpec::from_rect(Rect::new(1, 1, 2, 2))
            .with_x(50)
            .with_y(50)
            .with_width(9)
            .with_height(9);
        assert_eq!(spec.resolve(80, 25).unwrap(), Some(Rect::new(1, 1, 2, 2)));
    }

    #[test]
    fn test_resolve_invalid_partial_pairs() {
        // width/height without an origin
        let spec = RegionSpec::full().with_width(5).with_height(5);
        assert!(matches!(
            spec.resolve(80, 25),
            Err(Error::InvalidRegion(_))
        ));

        // half of the origin pair
        let spec = RegionSpec::full().with_x(3);
        assert!(matches!(
            spec.resolve(80, 25),
            Err(Error::InvalidRegion(_))
        ));

        // half of the size pair
        let spec = RegionSpec::at(1, 1).with_width(4);
        assert!(matches!(
            spec.resolve(80, 25),
            Err(Error::InvalidRegion(_))
        ));
    }

    #[test]
    fn test_resolve_zero_sized() {
        assert_eq!(RegionSpec::sized(4, 4, 0, 3).resolve(80, 25).unwrap(), None);
    }

    #[test]
    fn test_conversions() {
        let spec: RegionSpec = Rect::new(0, 0, 2, 2).into();
        assert_eq!(spec.resolve(10, 10).unwrap(), Some(Rect::new(0, 0, 2, 2)));
        let spec: RegionSpec = (3, 3).into();
        assert_eq!(spec.resolve(10, 10).unwrap(), Some(Rect::new(3, 3, 1, 1)));
    }
}
