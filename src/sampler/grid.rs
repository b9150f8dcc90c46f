use {
  crate::{
    error::{ErrorKind, Result},
    geometry::{Domain, P2}
  },
  euclid::Point2D,
  rand::Rng
};

/// Cell coordinate basis of the acceleration grid.
#[derive(Debug, Copy, Clone)]
pub struct CellSpace;

/// Uniform grid over the domain, each cell holding at most one index into the point arena.
pub(crate) struct Grid {
  cell_size: f64,
  rows: usize,
  cols: usize,
  cells: Vec<Option<usize>>
}

impl Grid {
  /// Fails with `ResourceExhaustion` when the cells would take more than `budget` bytes.
  pub fn new(domain: &Domain, cell_size: f64, budget: usize) -> Result<Self> {
    let extent = |len: f64| (len / cell_size).ceil().max(1.0);
    let (rows, cols) = (extent(domain.height()), extent(domain.width()));
    // sized in f64, the cell count may not fit a usize
    let required = rows * cols * std::mem::size_of::<Option<usize>>() as f64;
    if !(required <= budget as f64) {
      return Err(ErrorKind::ResourceExhaustion { required: required as usize, budget }.into());
    }

    let (rows, cols) = (rows as usize, cols as usize);
    let mut cells = vec![];
    cells.try_reserve_exact(rows * cols)
      .map_err(|_| ErrorKind::ResourceExhaustion { required: required as usize, budget })?;
    cells.resize(rows * cols, None);
    Ok(Self { cell_size, rows, cols, cells })
  }

  pub fn rows(&self) -> usize { self.rows }
  pub fn cols(&self) -> usize { self.cols }

  /// Cell containing `p`, clamped into the grid for coordinates that round onto the far edge.
  pub fn cell_of(&self, p: P2) -> Point2D<usize, CellSpace> {
    let cell = (p.to_vector() / self.cell_size).floor();
    Point2D::new(
      (cell.x.max(0.0) as usize).min(self.cols - 1),
      (cell.y.max(0.0) as usize).min(self.rows - 1)
    )
  }

  #[cfg(test)]
  pub fn get(&self, cell: Point2D<usize, CellSpace>) -> Option<usize> {
    self.cells[cell.y * self.cols + cell.x]
  }

  pub fn insert(&mut self, p: P2, index: usize) {
    let cell = self.cell_of(p);
    let slot = &mut self.cells[cell.y * self.cols + cell.x];
    debug_assert!(slot.is_none(), "grid cell {cell:?} is already occupied");
    *slot = Some(index);
  }

  /// Occupants of the `(2 * reach + 1)²` block of cells centered on the cell of `p`.
  pub fn neighbourhood(&self, p: P2, reach: usize) -> impl Iterator<Item = usize> + '_ {
    let c = self.cell_of(p);
    let ys = c.y.saturating_sub(reach) .. (c.y + reach + 1).min(self.rows);
    let xs = c.x.saturating_sub(reach) .. (c.x + reach + 1).min(self.cols);
    itertools::iproduct!(ys, xs)
      .filter_map(move |(y, x)| self.cells[y * self.cols + x])
  }
}

/// Indices still eligible for spawning neighbours. Order is irrelevant, removal is a swap-remove.
#[derive(Debug, Default)]
pub(crate) struct ActiveSet(Vec<usize>);

impl ActiveSet {
  pub fn push(&mut self, index: usize) {
    self.0.push(index);
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  #[cfg(test)]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Uniformly random `(slot, index)` pair, `None` once drained.
  pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(usize, usize)> {
    if self.is_empty() {
      return None;
    }
    let slot = rng.gen_range(0..self.0.len());
    Some((slot, self.0[slot]))
  }

  pub fn deactivate(&mut self, slot: usize) -> usize {
    self.0.swap_remove(slot)
  }
}
