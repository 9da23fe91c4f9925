use clap::{Parser, Subcommand};
use glam::Vec3;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use voxtex_builder::BuildConfig;
use voxtex_common::{Rgba, VolumeDims};
use voxtex_pipeline::{BuildPipeline, PipelineConfig};
use voxtex_publish::Publisher;
use voxtex_store::VoxelStore;
use voxtex_tools::BuildInspector;

#[derive(Parser)]
#[command(name = "voxtex-cli", about = "CLI tool for voxtex operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Build a volume texture from a demo voxel sphere
    Build {
        /// Edge length of the demo volume in voxels
        #[arg(short, long, default_value = "16")]
        size: u32,
        /// Round texture dimensions up to powers of two
        #[arg(short, long)]
        power_of_two: bool,
        /// Samples consumed per tick
        #[arg(short, long, default_value = "10")]
        batch: usize,
        /// Write the finished texture to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Load a texture file, verify integrity, print a summary
    Inspect {
        /// Path to a texture file written by `build --output`
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("voxtex-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", voxtex_common::crate_info());
            println!("store: {}", voxtex_store::crate_info());
            println!("builder: {}", voxtex_builder::crate_info());
            println!("publish: {}", voxtex_publish::crate_info());
            println!("pipeline: {}", voxtex_pipeline::crate_info());
            println!("tools: {}", voxtex_tools::crate_info());
        }
        Commands::Build {
            size,
            power_of_two,
            batch,
            output,
        } => {
            let store = demo_sphere(size);
            println!("{}", BuildInspector::store_summary(&store));

            let config = PipelineConfig {
                build: BuildConfig {
                    power_of_two,
                    batch_size: batch,
                },
                name: format!("sphere_{size}"),
                destination: output,
                store_file: true,
            };
            let mut pipeline = BuildPipeline::new(config, Publisher::with_undo())
                .on_completion(|outcome| match outcome.texture_id {
                    Some(id) => println!("Published texture {id:?} ({:?})", outcome.dims),
                    None => println!("Build produced no texture"),
                });

            // Cooperative tick loop: one bounded step per iteration, the way
            // a frame-stepped host would drive it.
            let mut ticks = 0_u64;
            loop {
                let progress = pipeline.tick(Some(&store));
                ticks += 1;
                tracing::debug!("{}", BuildInspector::summary(pipeline.builder()));
                if progress >= 1.0 {
                    break;
                }
            }

            println!(
                "Session {} finished after {ticks} ticks; library holds {} texture(s)",
                pipeline.session(),
                pipeline.publisher().library().len()
            );
        }
        Commands::Inspect { file } => {
            let texture = voxtex_publish::load_texture(&file)?;
            let dims = texture.dims();
            println!(
                "Texture {}x{}x{}: {} texels, {} populated",
                dims.width,
                dims.height,
                dims.depth,
                texture.len(),
                texture.populated()
            );
        }
    }

    Ok(())
}

/// Fill a store with a solid sphere, colored by normalized position.
fn demo_sphere(size: u32) -> VoxelStore {
    let extent = VolumeDims::new(size, size, size);
    let mut store = VoxelStore::new(extent);
    let center = Vec3::splat((size as f32 - 1.0) / 2.0);
    let radius = size as f32 / 2.0;

    for z in 0..size {
        for y in 0..size {
            for x in 0..size {
                let p = Vec3::new(x as f32, y as f32, z as f32);
                if p.distance(center) <= radius {
                    let c = p / size as f32;
                    store.set(x, y, z, Rgba::new(c.x, c.y, c.z, 1.0));
                }
            }
        }
    }
    store
}
