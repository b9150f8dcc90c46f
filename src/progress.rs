//! Coarse-grained progress checkpoints of the compositor.

use crate::compositor::Strategy;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stage {
  /// Every pixel carries a label. `strategy` is the one actually used, never `Auto`.
  LabelsAssigned { strategy: Strategy },
  /// Per-region sums are known; `empty` regions own no pixel.
  RegionsAggregated { regions: usize, empty: usize },
  /// The output raster is complete.
  Painted
}

pub trait Progress {
  fn checkpoint(&mut self, stage: Stage);
}

/// Discards every checkpoint.
#[derive(Debug, Copy, Clone, Default)]
pub struct Silent;

impl Progress for Silent {
  fn checkpoint(&mut self, _: Stage) {}
}

impl<F: FnMut(Stage)> Progress for F {
  fn checkpoint(&mut self, stage: Stage) {
    self(stage)
  }
}

/// Forwards checkpoints to the `log` facade at `info` level.
#[derive(Debug, Copy, Clone, Default)]
pub struct LogProgress;

impl Progress for LogProgress {
  fn checkpoint(&mut self, stage: Stage) {
    match stage {
      Stage::LabelsAssigned { strategy } =>
        log::info!("labels assigned ({:?} strategy)", strategy),
      Stage::RegionsAggregated { regions, empty } =>
        log::info!("{} regions aggregated, {} empty", regions, empty),
      Stage::Painted => log::info!("output painted"),
    }
  }
}
