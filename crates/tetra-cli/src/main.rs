//! Tetra CLI
//!
//! Command-line driver for the lattice simulation: seeds a lattice,
//! advances it frame by frame, and optionally dumps PPM rasters.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;
use tetra_core::prelude::*;
use tetra_render::{render, FrameRaster};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "tetra")]
#[command(version = "0.1.0")]
#[command(about = "Tetra - 4D quaternary particle lattice simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation for a number of frames
    Run {
        /// Configuration file path (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of frames to simulate
        #[arg(short, long)]
        frames: Option<u64>,

        /// RNG seed; omit for a random seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Lattice extent on the x axis
        #[arg(long)]
        x: Option<usize>,

        /// Lattice extent on the y axis
        #[arg(long)]
        y: Option<usize>,

        /// Lattice extent on the z axis
        #[arg(long)]
        z: Option<usize>,

        /// Lattice extent on the tau axis
        #[arg(long)]
        tau: Option<usize>,

        /// Directory for PPM frame dumps; omit to skip rendering
        #[arg(long)]
        dump_dir: Option<PathBuf>,

        /// Dump every Nth frame
        #[arg(long, default_value = "1")]
        dump_every: u64,
    },

    /// Version information
    Version,
}

/// Simulation settings, loadable from TOML. CLI flags override.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct SimConfig {
    extents: Extents,
    frames: u64,
    seed: Option<u64>,
    raster_width: usize,
    raster_height: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            extents: DEFAULT_EXTENTS,
            frames: 100,
            seed: None,
            raster_width: 1000,
            raster_height: 1000,
        }
    }
}

impl SimConfig {
    fn load(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("parsing config {:?}", path))
    }
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            config,
            frames,
            seed,
            x,
            y,
            z,
            tau,
            dump_dir,
            dump_every,
        } => {
            let mut cfg = match config {
                Some(path) => SimConfig::load(&path)?,
                None => SimConfig::default(),
            };
            if let Some(frames) = frames {
                cfg.frames = frames;
            }
            if let Some(seed) = seed {
                cfg.seed = Some(seed);
            }
            if let Some(x) = x {
                cfg.extents.x = x;
            }
            if let Some(y) = y {
                cfg.extents.y = y;
            }
            if let Some(z) = z {
                cfg.extents.z = z;
            }
            if let Some(tau) = tau {
                cfg.extents.tau = tau;
            }

            let seed = cfg.seed.unwrap_or_else(rand::random);
            tracing::info!(
                x = cfg.extents.x,
                y = cfg.extents.y,
                z = cfg.extents.z,
                tau = cfg.extents.tau,
                frames = cfg.frames,
                seed,
                "starting simulation"
            );

            let mut lattice = Lattice::new(cfg.extents)?;
            randomize(&mut lattice, &mut ChaCha8Rng::seed_from_u64(seed));

            let mut raster = dump_dir
                .as_ref()
                .map(|_| FrameRaster::new(cfg.raster_width, cfg.raster_height));
            if let Some(dir) = &dump_dir {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("creating dump dir {:?}", dir))?;
            }

            for frame in 0..cfg.frames {
                advance_frame(&mut lattice);

                if let (Some(dir), Some(raster)) = (&dump_dir, raster.as_mut()) {
                    if dump_every != 0 && frame % dump_every == 0 {
                        render(&lattice, raster);
                        let path = dir.join(format!("frame_{:05}.ppm", frame));
                        let mut out = BufWriter::new(
                            File::create(&path)
                                .with_context(|| format!("creating {:?}", path))?,
                        );
                        raster.write_ppm(&mut out)?;
                        tracing::info!(frame, path = ?path, "frame dumped");
                    }
                }
            }

            tracing::info!(frames = cfg.frames, "simulation finished");
        }

        Commands::Version => {
            println!("Tetra v0.1.0");
            println!("4D quaternary particle lattice simulation");
            println!();
            println!("Features:");
            println!("  - Signed-zero quaternary digit arithmetic");
            println!("  - Bit-packed A/C/T/G particle codec");
            println!("  - Toroidal 4D frame engine (3^4 neighborhood)");
            println!("  - PPM raster export");
        }
    }

    Ok(())
}
