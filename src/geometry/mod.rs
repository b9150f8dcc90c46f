//! .
//!
//! The origin of coordinate system is in top-left corner, `y` grows downwards. Points are
//! addressed as `(y, x)` throughout the crate, matching the row-major layout of a raster;
//! pixel `(y, x)` is sampled at its integer coordinate.

use {
  crate::error::{Error, Result},
  euclid::{Point2D, Size2D}
};


/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type P2 = Point2D<f64, PixelSpace>;

/// Construct a point from row-major `(y, x)` coordinates.
#[inline]
pub fn point(y: f64, x: f64) -> P2 {
  P2::new(x, y)
}

#[inline]
pub fn distance_sqr(a: P2, b: P2) -> f64 {
  (a - b).square_length()
}

/// Axis-aligned rectangle `[0, height) × [0, width)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Domain {
  size: Size2D<f64, PixelSpace>
}

impl Domain {
  pub fn new(width: f64, height: f64) -> Result<Self> {
    if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
      return Err(Error::invalid_input(format!(
        "domain must have positive finite extent, got {width}x{height}"
      )));
    }
    Ok(Self { size: Size2D::new(width, height) })
  }

  pub fn width(&self) -> f64 { self.size.width }
  pub fn height(&self) -> f64 { self.size.height }

  pub fn diagonal(&self) -> f64 {
    self.size.to_vector().length()
  }

  /// Interior test, edges excluded.
  pub fn contains(&self, p: P2) -> bool {
    0.0 < p.y && p.y < self.size.height &&
    0.0 < p.x && p.x < self.size.width
  }

  /// Closed test, edges included.
  pub fn contains_closed(&self, p: P2) -> bool {
    0.0 <= p.y && p.y <= self.size.height &&
    0.0 <= p.x && p.x <= self.size.width
  }
}
