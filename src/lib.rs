//! Stained-glass stylization of raster images.
//!
//! A set of well-spaced seeds is generated with Poisson-disc sampling ([`sampler`]), every pixel
//! is labeled with its nearest seed, and each such Voronoi region is replaced by its mean color
//! ([`compositor`]). Decoding and encoding images is left to the caller; the core consumes and
//! produces plain [`Raster`](raster::Raster) buffers. With the `drawing` feature, rasters convert
//! from and into `image::DynamicImage`.
//!
//! # Basic usage
//! ```
//! # use stained_glass::{
//! #   compositor::Compositor,
//! #   error::Result,
//! #   raster::Raster,
//! #   sampler::PoissonDisc,
//! # };
//! # fn main() -> Result<()> {
//! // any row-major buffer works, here a 64x48 RGB gradient
//! let image = Raster::from_fn(64, 48, 3, |y, x| vec![(x * 4) as u8, (y * 5) as u8, 128])?;
//!
//! // seeds at least 6.4px apart, reproducible for a given seed
//! let points = PoissonDisc::new(image.width() as f64 / 10.0)
//!   .sample_seeded(image.domain()?, 0)?;
//!
//! // every pixel replaced by the mean of its region
//! let output = Compositor::default().composite(&points, &image)?;
//! assert_eq!(output.as_slice().len(), image.as_slice().len());
//! # Ok(())
//! # }
//! ```
//!
//! # Memory
//! [`Strategy::Bulk`](compositor::Strategy::Bulk) needs `pixels × seeds × 8` bytes for its
//! distance table; above the compositor's memory budget it reports
//! [`ResourceExhaustion`](error::ErrorKind::ResourceExhaustion).
//! [`Strategy::Streaming`](compositor::Strategy::Streaming) has a flat memory profile, and
//! [`Strategy::Auto`](compositor::Strategy::Auto), the default, picks whichever fits.

pub mod error;
pub mod geometry;
pub mod sampler;
pub mod raster;
pub mod compositor;
pub mod progress;
