use {
  super::*,
  crate::{
    error::ErrorKind,
    geometry::point
  },
  rand::SeedableRng,
  rand_pcg::Pcg64
};

fn min_pairwise_distance(points: &[P2]) -> f64 {
  use itertools::Itertools;
  points.iter()
    .tuple_combinations::<(_, _)>()
    .map(|(a, b)| a.distance_to(*b))
    .fold(f64::INFINITY, f64::min)
}

#[test_log::test] fn minimum_spacing() -> Result<()> {
  let domain = Domain::new(200.0, 120.0)?;
  for seed in 0..4 {
    let points = PoissonDisc::new(9.5).sample_seeded(domain, seed)?;
    assert!(points.len() > 50, "only {} points", points.len());
    assert!(min_pairwise_distance(&points) >= 9.5);
  }
  Ok(())
}

#[test] fn points_stay_inside_domain() -> Result<()> {
  let domain = Domain::new(37.0, 53.0)?;
  let points = PoissonDisc::new(3.0).sample_seeded(domain, 7)?;
  for p in points {
    assert!(0.0 < p.y && p.y < 53.0, "{p:?}");
    assert!(0.0 < p.x && p.x < 37.0, "{p:?}");
  }
  Ok(())
}

#[test] fn no_large_holes() -> Result<()> {
  // a lattice point far from every sample marks a hole the sampler should have filled
  let domain = Domain::new(100.0, 100.0)?;
  let r = 8.0;
  let points = PoissonDisc::new(r).sample_seeded(domain, 3)?;
  itertools::iproduct!(1..100, 1..100)
    .map(|(y, x)| point(y as f64, x as f64))
    .for_each(|at| {
      let nearest = points.iter()
        .map(|p| p.distance_to(at))
        .fold(f64::INFINITY, f64::min);
      assert!(nearest < 2.5 * r, "hole at {at:?}, nearest seed at {nearest}");
    });
  Ok(())
}

#[test] fn deterministic_under_fixed_seed() -> Result<()> {
  let domain = Domain::new(64.0, 48.0)?;
  let sampler = PoissonDisc::new(4.0);
  let a = sampler.sample(domain, &mut Pcg64::seed_from_u64(42))?;
  let b = sampler.sample(domain, &mut Pcg64::seed_from_u64(42))?;
  assert_eq!(a, b);
  let c = sampler.sample_seeded(domain, 43)?;
  assert_ne!(a, c);
  Ok(())
}

#[test] fn oversized_radius_yields_single_point() -> Result<()> {
  let domain = Domain::new(10.0, 5.0)?;
  let points = PoissonDisc::new(domain.diagonal() * 1.01)
    .with_attempts(1)
    .sample_seeded(domain, 0)?;
  assert_eq!(points.len(), 1);
  assert!(domain.contains(points[0]));
  Ok(())
}

#[test] fn single_attempt_terminates() -> Result<()> {
  let domain = Domain::new(3.0, 3.0)?;
  let points = PoissonDisc::new(50.0).with_attempts(1).sample_seeded(domain, 11)?;
  assert!(!points.is_empty());
  let points = PoissonDisc::new(0.8).with_attempts(1).sample_seeded(domain, 11)?;
  assert!(min_pairwise_distance(&points) >= 0.8);
  Ok(())
}

#[test] fn invalid_parameters_fail_fast() -> Result<()> {
  let domain = Domain::new(10.0, 10.0)?;
  for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
    let err = PoissonDisc::new(radius).sample_seeded(domain, 0).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidInput(_)), "radius {radius}");
  }
  let err = PoissonDisc::new(1.0).with_attempts(0).sample_seeded(domain, 0).unwrap_err();
  assert!(matches!(err.kind(), ErrorKind::InvalidInput(_)));
  Ok(())
}

#[test] fn tiny_radius_exceeds_grid_budget() -> Result<()> {
  for (radius, side) in [(1e-200, 10.0), (1e-4, 1000.0)] {
    let domain = Domain::new(side, side)?;
    let err = PoissonDisc::new(radius).sample_seeded(domain, 0).unwrap_err();
    match err.kind() {
      ErrorKind::ResourceExhaustion { required, budget } => {
        assert!(*required > GRID_MEMORY_BUDGET, "radius {radius}");
        assert_eq!(*budget, GRID_MEMORY_BUDGET);
      }
      other => panic!("radius {radius}: unexpected {other:?}")
    }
  }
  let domain = Domain::new(10.0, 10.0)?;
  let cell = std::mem::size_of::<Option<usize>>();
  assert!(Grid::new(&domain, 1.0, 99 * cell).is_err());
  assert!(Grid::new(&domain, 1.0, 100 * cell).is_ok());
  Ok(())
}

#[test] fn grid_cells_are_clamped() -> Result<()> {
  let domain = Domain::new(10.0, 10.0)?;
  let grid = Grid::new(&domain, 10.0 / SQRT_2, GRID_MEMORY_BUDGET)?;
  assert_eq!((grid.rows(), grid.cols()), (2, 2));
  let far = grid.cell_of(point(10.0 - f64::EPSILON, 10.0));
  assert_eq!((far.y, far.x), (1, 1));
  let near = grid.cell_of(point(0.1, 7.5));
  assert_eq!((near.y, near.x), (0, 1));
  assert_eq!(grid.get(near), None);
  Ok(())
}

#[test] fn grid_neighbourhood_is_bounded() -> Result<()> {
  let domain = Domain::new(10.0, 10.0)?;
  let mut grid = Grid::new(&domain, 1.0, GRID_MEMORY_BUDGET)?;
  grid.insert(point(0.5, 0.5), 0);
  grid.insert(point(2.5, 2.5), 1);
  grid.insert(point(3.5, 0.5), 2);
  grid.insert(point(9.5, 9.5), 3);
  let mut found = grid.neighbourhood(point(1.5, 1.5), 1).collect::<Vec<_>>();
  found.sort();
  assert_eq!(found, vec![0, 1]);
  let mut found = grid.neighbourhood(point(1.5, 1.5), 2).collect::<Vec<_>>();
  found.sort();
  assert_eq!(found, vec![0, 1, 2]);
  Ok(())
}

#[test] fn active_set_swap_removes() {
  let mut rng = Pcg64::seed_from_u64(0);
  let mut active = ActiveSet::default();
  (0..5).for_each(|i| active.push(i));
  assert_eq!(active.deactivate(1), 1);
  assert_eq!(active.len(), 4);
  while let Some((slot, index)) = active.pick(&mut rng) {
    assert_eq!(active.deactivate(slot), index);
    assert_ne!(index, 1);
  }
  assert!(active.is_empty());
}
