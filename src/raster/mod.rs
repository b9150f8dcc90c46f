//! Row-major interleaved pixel buffers.
//!
//! The core only ever sums and divides samples, so it treats the channel count and sample range
//! opaquely. Accumulation always happens in `f64`, regardless of how narrow `T` is.

use {
  crate::{
    error::{Error, Result},
    geometry::Domain
  },
  num_traits::{Bounded, NumCast}
};

#[cfg(feature = "image")]
mod impl_dynamic_image;
#[cfg(test)] mod tests;

/// A numeric channel value.
pub trait Sample: Copy + Default + PartialOrd + Send + Sync + NumCast + Bounded + 'static {
  /// Whether means are rounded to the nearest integer before conversion.
  const INTEGER: bool;

  fn widen(self) -> f64 {
    <f64 as NumCast>::from(self).unwrap_or(0.0)
  }

  /// Convert a per-channel mean back into the sample type, saturating at its bounds.
  fn from_mean(mean: f64) -> Self {
    let mean = if Self::INTEGER { mean.round() } else { mean };
    <Self as NumCast>::from(mean).unwrap_or_else(||
      if mean < 0.0 { Self::min_value() } else { Self::max_value() }
    )
  }
}

impl Sample for u8 { const INTEGER: bool = true; }
impl Sample for u16 { const INTEGER: bool = true; }
impl Sample for u32 { const INTEGER: bool = true; }
impl Sample for f32 { const INTEGER: bool = false; }
impl Sample for f64 { const INTEGER: bool = false; }

#[derive(Debug, Clone, PartialEq)]
pub struct Raster<T> {
  width: usize,
  height: usize,
  channels: usize,
  data: Vec<T>
}

impl<T: Sample> Raster<T> {
  pub fn new(width: usize, height: usize, channels: usize, data: Vec<T>) -> Result<Self> {
    if width == 0 || height == 0 {
      return Err(Error::invalid_input(format!("raster must not be empty, got {width}x{height}")));
    }
    if channels == 0 {
      return Err(Error::invalid_input("raster must have at least one channel"));
    }
    let expected = width.checked_mul(height)
      .and_then(|area| area.checked_mul(channels));
    if expected != Some(data.len()) {
      return Err(Error::invalid_input(format!(
        "buffer of {} samples does not match {width}x{height}x{channels}", data.len()
      )));
    }
    Ok(Self { width, height, channels, data })
  }

  /// Build a raster from a per-pixel function of `(y, x)` returning `channels` samples.
  pub fn from_fn(
    width: usize,
    height: usize,
    channels: usize,
    mut f: impl FnMut(usize, usize) -> Vec<T>
  ) -> Result<Self> {
    let mut data = Vec::with_capacity(width * height * channels);
    itertools::iproduct!(0..height, 0..width)
      .try_for_each(|(y, x)| {
        let pixel = f(y, x);
        if pixel.len() != channels {
          return Err(Error::invalid_input(format!(
            "pixel ({y}, {x}) has {} samples, expected {channels}", pixel.len()
          )));
        }
        data.extend(pixel);
        Ok(())
      })?;
    Self::new(width, height, channels, data)
  }

  /// A fresh raster of identical shape, every sample zeroed.
  pub(crate) fn zeroed_like(&self) -> Self {
    Self {
      width: self.width,
      height: self.height,
      channels: self.channels,
      data: vec![T::default(); self.data.len()]
    }
  }

  pub fn width(&self) -> usize { self.width }
  pub fn height(&self) -> usize { self.height }
  pub fn channels(&self) -> usize { self.channels }
  pub fn pixel_count(&self) -> usize { self.width * self.height }

  /// The continuous extent `[0, height) × [0, width)` covered by this raster.
  pub fn domain(&self) -> Result<Domain> {
    Domain::new(self.width as f64, self.height as f64)
  }

  pub fn pixel(&self, y: usize, x: usize) -> &[T] {
    let offset = (y * self.width + x) * self.channels;
    &self.data[offset .. offset + self.channels]
  }

  pub fn pixels(&self) -> impl Iterator<Item = &[T]> {
    self.data.chunks_exact(self.channels)
  }

  pub fn as_slice(&self) -> &[T] {
    &self.data
  }

  pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
    &mut self.data
  }

  pub fn into_raw(self) -> Vec<T> {
    self.data
  }
}
