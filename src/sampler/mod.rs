//! Blue-noise seed generation.
//!
//! Poisson-disc sampling after Bridson, "Fast Poisson Disk Sampling in Arbitrary Dimensions"
//! (SIGGRAPH 2007). New points are drawn uniformly from the annulus `[r, 2r]` around a random
//! active point; a point which fails to spawn a valid neighbour within `attempts` tries is
//! retired. Neighbour queries go through a uniform grid of cell size `r / √2`, so that every
//! cell holds at most one point.
//!
//! ```
//! # use stained_glass::{geometry::Domain, sampler::PoissonDisc, error::Result};
//! # fn main() -> Result<()> {
//! let domain = Domain::new(320.0, 200.0)?;
//! let points = PoissonDisc::new(16.0).sample_seeded(domain, 0)?;
//! assert!(points.iter().all(|&p| domain.contains(p)));
//! # Ok(())
//! # }
//! ```

use {
  crate::{
    error::{Error, Result},
    geometry::{self, Domain, P2}
  },
  grid::{ActiveSet, Grid},
  log::debug,
  rand::Rng,
  std::f64::consts::{SQRT_2, TAU}
};

pub(crate) mod grid;
#[cfg(test)] mod tests;

pub const DEFAULT_ATTEMPTS: u32 = 30;

/// Ceiling on the acceleration grid, 1 GiB. Radii tiny relative to the domain hit it first.
pub const GRID_MEMORY_BUDGET: usize = 1 << 30;

/// With cells of side `r / √2`, a point closer than `r` may sit up to two cells away.
const NEIGHBOURHOOD_REACH: usize = 2;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PoissonDisc {
  /// Minimum distance between any two points.
  pub radius: f64,
  /// Candidates drawn around an active point before it is retired.
  pub attempts: u32
}

impl PoissonDisc {
  pub fn new(radius: f64) -> Self {
    Self { radius, attempts: DEFAULT_ATTEMPTS }
  }

  pub fn with_attempts(self, attempts: u32) -> Self {
    Self { attempts, ..self }
  }

  fn validate(&self) -> Result<()> {
    if !(self.radius.is_finite() && self.radius > 0.0) {
      return Err(Error::invalid_input(format!("radius must be positive, got {}", self.radius)));
    }
    if self.attempts == 0 {
      return Err(Error::invalid_input("attempt limit must be positive"));
    }
    Ok(())
  }

  /// Reproducible sampling, driven by `Pcg64` seeded from `seed`.
  pub fn sample_seeded(&self, domain: Domain, seed: u64) -> Result<Vec<P2>> {
    use rand::SeedableRng;
    self.sample(domain, &mut rand_pcg::Pcg64::seed_from_u64(seed))
  }

  /// Point `i` of the returned sequence is the seed of region `i`.
  pub fn sample<R: Rng + ?Sized>(&self, domain: Domain, rng: &mut R) -> Result<Vec<P2>> {
    self.validate()?;

    let r_sqr = self.radius * self.radius;
    // ρ² uniform over [r², 4r²] gives points uniform over the annulus area
    let annulus = 3.0 * r_sqr;

    let mut sampling = Sampling {
      points: vec![],
      grid: Grid::new(&domain, self.radius / SQRT_2, GRID_MEMORY_BUDGET)?,
      active: ActiveSet::default()
    };

    let initial = loop {
      let p = geometry::point(
        rng.gen::<f64>() * domain.height(),
        rng.gen::<f64>() * domain.width()
      );
      if domain.contains(p) { break p; }
    };
    sampling.emit(initial);

    while let Some((slot, i)) = sampling.active.pick(rng) {
      let parent = sampling.points[i];
      let candidate = (0..self.attempts)
        .map(|_| {
          let theta = rng.gen::<f64>() * TAU;
          let rho = (rng.gen::<f64>() * annulus + r_sqr).sqrt();
          parent + euclid::vec2(rho * theta.cos(), rho * theta.sin())
        })
        .find(|&candidate| domain.contains(candidate) && sampling.is_free(candidate, r_sqr));

      match candidate {
        Some(p) => sampling.emit(p),
        None => { sampling.active.deactivate(slot); }
      }
    }

    debug!(
      "poisson disc: {} points over {}x{}, radius {}, {}x{} grid",
      sampling.points.len(), domain.width(), domain.height(), self.radius,
      sampling.grid.cols(), sampling.grid.rows()
    );
    Ok(sampling.points)
  }
}

struct Sampling {
  points: Vec<P2>,
  grid: Grid,
  active: ActiveSet
}

impl Sampling {
  fn emit(&mut self, p: P2) {
    let index = self.points.len();
    self.points.push(p);
    self.grid.insert(p, index);
    self.active.push(index);
  }

  fn is_free(&self, candidate: P2, r_sqr: f64) -> bool {
    self.grid.neighbourhood(candidate, NEIGHBOURHOOD_REACH)
      .all(|j| geometry::distance_sqr(self.points[j], candidate) >= r_sqr)
  }
}
