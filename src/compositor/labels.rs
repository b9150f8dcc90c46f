use {
  crate::{
    error::{ErrorKind, Result},
    geometry::{self, P2}
  },
  rayon::prelude::*
};

/// Nearest-seed label of every pixel, row-major. Label `i` names point `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
  width: usize,
  height: usize,
  regions: usize,
  labels: Vec<usize>
}

impl LabelMap {
  pub fn width(&self) -> usize { self.width }
  pub fn height(&self) -> usize { self.height }
  /// Number of seed points, i.e. the exclusive upper bound of every label.
  pub fn regions(&self) -> usize { self.regions }

  pub fn get(&self, y: usize, x: usize) -> usize {
    self.labels[y * self.width + x]
  }

  pub fn as_slice(&self) -> &[usize] {
    &self.labels
  }
}

/// Working memory of the distance table used by [`assign_bulk`], `None` on overflow.
pub fn bulk_working_set(pixels: usize, points: usize) -> Option<usize> {
  pixels.checked_mul(points)?
    .checked_mul(std::mem::size_of::<f64>())
}

#[inline]
fn pixel_coord(i: usize, width: usize) -> P2 {
  geometry::point((i / width) as f64, (i % width) as f64)
}

/// Index of the first minimum; strict comparison keeps the lowest index on ties.
#[inline]
fn first_argmin(distances: impl Iterator<Item = f64>) -> usize {
  distances.enumerate()
    .fold((0, f64::INFINITY), |(best, best_d), (i, d)|
      if d < best_d { (i, d) } else { (best, best_d) }
    ).0
}

/// Materialize the full `pixels × points` squared-distance table, then reduce each row.
pub(super) fn assign_bulk(points: &[P2], width: usize, height: usize, budget: usize) -> Result<LabelMap> {
  let pixels = width * height;
  let n = points.len();
  let required = bulk_working_set(pixels, n).unwrap_or(usize::MAX);
  if required > budget {
    return Err(ErrorKind::ResourceExhaustion { required, budget }.into());
  }

  let mut table: Vec<f64> = vec![];
  table.try_reserve_exact(pixels * n)
    .map_err(|_| ErrorKind::ResourceExhaustion { required, budget })?;
  table.resize(pixels * n, 0.0);

  table.par_chunks_mut(n)
    .enumerate()
    .for_each(|(i, row)| {
      let pixel = pixel_coord(i, width);
      row.iter_mut()
        .zip(points)
        .for_each(|(d, &p)| *d = geometry::distance_sqr(pixel, p));
    });

  let labels = table.par_chunks(n)
    .map(|row| first_argmin(row.iter().copied()))
    .collect();

  Ok(LabelMap { width, height, regions: n, labels })
}

/// Scan every point for each pixel independently, `O(points)` transient memory.
pub(super) fn assign_streaming(points: &[P2], width: usize, height: usize) -> LabelMap {
  let labels = (0 .. width * height)
    .into_par_iter()
    .map(|i| {
      let pixel = pixel_coord(i, width);
      first_argmin(points.iter().map(|&p| geometry::distance_sqr(pixel, p)))
    })
    .collect();

  LabelMap { width, height, regions: points.len(), labels }
}
