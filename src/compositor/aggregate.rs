use {
  super::LabelMap,
  crate::{
    error::{Error, ErrorKind, Result},
    raster::{Raster, Sample}
  },
  rayon::prelude::*
};

/// Per-region channel sums and pixel counts, accumulated in `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Regions {
  channels: usize,
  sums: Vec<f64>,
  counts: Vec<usize>
}

impl Regions {
  fn zeroed(regions: usize, channels: usize) -> Self {
    Self {
      channels,
      sums: vec![0.0; regions * channels],
      counts: vec![0; regions]
    }
  }

  fn merge(mut self, other: Self) -> Self {
    self.sums.iter_mut().zip(other.sums).for_each(|(a, b)| *a += b);
    self.counts.iter_mut().zip(other.counts).for_each(|(a, b)| *a += b);
    self
  }

  /// Grouped reduction over all pixels. Rows are folded into per-worker partial sums,
  /// which are merged pairwise at the end.
  pub(super) fn accumulate<T: Sample>(labels: &LabelMap, raster: &Raster<T>) -> Self {
    let (regions, channels, width) = (labels.regions(), raster.channels(), raster.width());

    raster.as_slice()
      .par_chunks(width * channels)
      .zip(labels.as_slice().par_chunks(width))
      .fold(
        || Self::zeroed(regions, channels),
        |mut acc, (row, row_labels)| {
          row.chunks_exact(channels)
            .zip(row_labels)
            .for_each(|(pixel, &label)| {
              acc.counts[label] += 1;
              acc.sums[label * channels .. (label + 1) * channels].iter_mut()
                .zip(pixel)
                .for_each(|(sum, &v)| *sum += v.widen());
            });
          acc
        })
      .reduce(|| Self::zeroed(regions, channels), Self::merge)
  }

  pub fn len(&self) -> usize {
    self.counts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.counts.is_empty()
  }

  pub fn count(&self, label: usize) -> usize {
    self.counts[label]
  }

  pub fn sums(&self, label: usize) -> &[f64] {
    &self.sums[label * self.channels .. (label + 1) * self.channels]
  }

  /// Per-channel mean of region `label`, `None` when it owns no pixel.
  pub fn mean(&self, label: usize) -> Option<Vec<f64>> {
    let count = self.counts[label];
    (count > 0).then(|| self.sums(label).iter()
      .map(|sum| sum / count as f64)
      .collect())
  }

  /// Regions whose seed is nearest to no pixel at all.
  pub fn empty(&self) -> usize {
    self.counts.iter().filter(|&&c| c == 0).count()
  }

  /// Write every region's mean into a fresh raster shaped like `source`.
  pub(super) fn paint<T: Sample>(&self, labels: &LabelMap, source: &Raster<T>) -> Result<Raster<T>> {
    let channels = self.channels;
    let palette = (0..self.len())
      .flat_map(|label| match self.mean(label) {
        Some(mean) => mean.into_iter().map(T::from_mean).collect::<Vec<_>>(),
        None => vec![T::default(); channels]
      })
      .collect::<Vec<T>>();

    let mut output = source.zeroed_like();
    output.as_mut_slice()
      .par_chunks_mut(channels)
      .zip(labels.as_slice().par_iter())
      .try_for_each(|(pixel, &label)| {
        if self.counts[label] == 0 {
          return Err(Error::from(ErrorKind::DegenerateRegion { label }));
        }
        pixel.copy_from_slice(&palette[label * channels .. (label + 1) * channels]);
        Ok(())
      })?;
    Ok(output)
  }
}
