//! Voronoi compositing: label every pixel with its nearest seed, then fill each region with its
//! mean color.
//!
//! Label assignment comes in two flavours with identical results. [`Strategy::Bulk`]
//! materializes the whole `pixels × points` distance table, [`Strategy::Streaming`] scans the
//! points per pixel and needs no table at all. A pixel equidistant from several seeds takes the
//! lowest index in both.
//!
//! ```
//! # use stained_glass::{
//! #   compositor::Compositor, geometry::point, raster::Raster, error::Result
//! # };
//! # fn main() -> Result<()> {
//! let image = Raster::new(4, 1, 1, vec![10u8, 10, 90, 90])?;
//! let points = [point(0.0, 0.0), point(0.0, 3.0)];
//! let output = Compositor::default().composite(&points, &image)?;
//! assert_eq!(output.as_slice(), &[10, 10, 90, 90]);
//! # Ok(())
//! # }
//! ```

use {
  crate::{
    error::{Error, ErrorKind, Result},
    geometry::P2,
    progress::{Progress, Silent, Stage},
    raster::{Raster, Sample}
  },
  log::debug
};

mod aggregate;
mod labels;

pub use {
  aggregate::Regions,
  labels::{LabelMap, bulk_working_set}
};

/// Default ceiling of the bulk distance table, 512 MiB.
pub const DEFAULT_MEMORY_BUDGET: usize = 512 << 20;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Strategy {
  /// Full distance table; fails with `ResourceExhaustion` above the memory budget.
  Bulk,
  /// Point-by-point scan with flat memory cost.
  Streaming,
  /// `Bulk` when the table fits the budget, `Streaming` otherwise.
  #[default]
  Auto
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Compositor {
  pub strategy: Strategy,
  /// Upper bound, in bytes, on the bulk distance table.
  pub memory_budget: usize
}

impl Default for Compositor {
  fn default() -> Self {
    Self {
      strategy: Strategy::default(),
      memory_budget: DEFAULT_MEMORY_BUDGET
    }
  }
}

impl Compositor {
  pub fn new(strategy: Strategy) -> Self {
    Self { strategy, ..Default::default() }
  }

  pub fn with_memory_budget(self, memory_budget: usize) -> Self {
    Self { memory_budget, ..self }
  }

  /// The strategy `Auto` resolves to for an image of `pixels` and `points` seeds.
  pub fn resolve(&self, pixels: usize, points: usize) -> Strategy {
    match self.strategy {
      Strategy::Auto => match bulk_working_set(pixels, points) {
        Some(required) if required <= self.memory_budget => Strategy::Bulk,
        _ => Strategy::Streaming
      },
      other => other
    }
  }

  pub fn assign_labels<T: Sample>(&self, points: &[P2], raster: &Raster<T>) -> Result<LabelMap> {
    validate_points(points, raster)?;
    self.assign_labels_unchecked(points, raster).map(|(labels, _)| labels)
  }

  fn assign_labels_unchecked<T: Sample>(&self, points: &[P2], raster: &Raster<T>) -> Result<(LabelMap, Strategy)> {
    let (width, height) = (raster.width(), raster.height());
    let strategy = self.resolve(raster.pixel_count(), points.len());
    debug!(
      "assigning {}x{} pixels to {} seeds, {:?} strategy",
      width, height, points.len(), strategy
    );

    match strategy {
      Strategy::Bulk => match labels::assign_bulk(points, width, height, self.memory_budget) {
        Err(Error(ErrorKind::ResourceExhaustion { required, .. })) if self.strategy == Strategy::Auto => {
          debug!("bulk table of {} bytes could not be reserved, streaming instead", required);
          Ok((labels::assign_streaming(points, width, height), Strategy::Streaming))
        }
        result => result.map(|labels| (labels, Strategy::Bulk))
      },
      _ => Ok((labels::assign_streaming(points, width, height), Strategy::Streaming))
    }
  }

  /// Sum the pixels of every region of `labels`.
  pub fn aggregate<T: Sample>(&self, labels: &LabelMap, raster: &Raster<T>) -> Result<Regions> {
    if (labels.width(), labels.height()) != (raster.width(), raster.height()) {
      return Err(Error::invalid_input(format!(
        "label map of {}x{} does not match raster of {}x{}",
        labels.width(), labels.height(), raster.width(), raster.height()
      )));
    }
    Ok(Regions::accumulate(labels, raster))
  }

  pub fn composite<T: Sample>(&self, points: &[P2], raster: &Raster<T>) -> Result<Raster<T>> {
    self.composite_with(points, raster, &mut Silent)
  }

  /// Like [`composite`](Self::composite), reporting each finished phase to `progress`.
  pub fn composite_with<T: Sample>(
    &self,
    points: &[P2],
    raster: &Raster<T>,
    progress: &mut impl Progress
  ) -> Result<Raster<T>> {
    validate_points(points, raster)?;

    let (labels, strategy) = self.assign_labels_unchecked(points, raster)?;
    progress.checkpoint(Stage::LabelsAssigned { strategy });

    let regions = self.aggregate(&labels, raster)?;
    let empty = regions.empty();
    if empty > 0 {
      debug!("{} of {} seeds are nearest to no pixel", empty, regions.len());
    }
    progress.checkpoint(Stage::RegionsAggregated { regions: regions.len(), empty });

    let output = regions.paint(&labels, raster)?;
    progress.checkpoint(Stage::Painted);
    Ok(output)
  }
}

/// Seeds must be finite and lie within the closed extent of the raster.
fn validate_points<T: Sample>(points: &[P2], raster: &Raster<T>) -> Result<()> {
  if points.is_empty() {
    return Err(Error::invalid_input("at least one seed point is required"));
  }
  let domain = raster.domain()?;
  match points.iter().position(|&p| !(p.x.is_finite() && p.y.is_finite() && domain.contains_closed(p))) {
    Some(i) => Err(Error::invalid_input(format!(
      "seed {} at (y: {}, x: {}) lies outside the {}x{} image",
      i, points[i].y, points[i].x, raster.width(), raster.height()
    ))),
    None => Ok(())
  }
}
