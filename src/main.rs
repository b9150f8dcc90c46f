use {
  stained_glass::{
    compositor::{Compositor, Strategy, DEFAULT_MEMORY_BUDGET},
    error::ErrorKind,
    progress::LogProgress,
    raster::Raster,
    sampler::{PoissonDisc, DEFAULT_ATTEMPTS}
  },
  anyhow::{Context, Result},
  clap::{Parser, ValueEnum},
  log::{info, warn},
  std::path::PathBuf
};

macro_rules! profile(
  ($title: literal, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    info!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);

/// Render a stained-glass version of an image.
#[derive(Parser)]
#[command(name = "stained-glass", version, about, long_about = None)]
struct Cli {
  /// Path to image file.
  image: PathBuf,

  /// Point radius for Poisson-disc sampling, a tenth of the image width by default.
  #[arg(long)]
  point_radius: Option<f64>,

  /// Attempts to place a neighbour around each point before it is retired.
  #[arg(long, default_value_t = DEFAULT_ATTEMPTS)]
  attempts: u32,

  /// Seed of the sampler, drawn at random when absent.
  #[arg(long)]
  seed: Option<u64>,

  /// Label assignment strategy.
  #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
  strategy: StrategyArg,

  /// Memory budget of the bulk strategy, in bytes.
  #[arg(long, default_value_t = DEFAULT_MEMORY_BUDGET)]
  memory_budget: usize,

  /// Output image path.
  #[arg(short, long, default_value = "voronoi.png")]
  output: PathBuf,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
  Bulk,
  Streaming,
  Auto,
}

impl From<StrategyArg> for Strategy {
  fn from(arg: StrategyArg) -> Self {
    match arg {
      StrategyArg::Bulk => Strategy::Bulk,
      StrategyArg::Streaming => Strategy::Streaming,
      StrategyArg::Auto => Strategy::Auto,
    }
  }
}

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
  let cli = Cli::parse();

  let image = image::open(&cli.image)
    .with_context(|| format!("unable to open {:?}", cli.image))?;
  let raster = Raster::<u8>::from(image);
  info!(
    "{:?}: {}x{}, {} channels",
    cli.image, raster.width(), raster.height(), raster.channels()
  );

  let radius = cli.point_radius.unwrap_or(raster.width() as f64 / 10.0);
  let seed = cli.seed.unwrap_or_else(rand::random);
  info!("sampling with radius {}, seed {}", radius, seed);
  let points = profile!("sampling", PoissonDisc::new(radius)
    .with_attempts(cli.attempts)
    .sample_seeded(raster.domain()?, seed)?);
  info!("{} seeds", points.len());

  let compositor = Compositor::new(cli.strategy.into())
    .with_memory_budget(cli.memory_budget);
  let output = profile!("compositing", match compositor.composite_with(&points, &raster, &mut LogProgress) {
    Err(err) if matches!(err.kind(), ErrorKind::ResourceExhaustion { .. }) => {
      warn!("{}, falling back to streaming", err);
      Compositor { strategy: Strategy::Streaming, ..compositor }
        .composite_with(&points, &raster, &mut LogProgress)
    }
    result => result
  })?;

  output.into_dynamic()?
    .save(&cli.output)
    .with_context(|| format!("unable to save {:?}", cli.output))?;
  info!("saved {:?}", cli.output);
  Ok(())
}
