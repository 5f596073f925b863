//! CLI frontend for the falling-sand simulation.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::simulate::SimulateOptions;

#[derive(Parser)]
#[command(
    name = "sand",
    about = "Falling-sand simulation: run scenes headless and inspect materials",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scene for a number of frames and report what is left
    Simulate {
        /// Starting layout: empty, floor, basin, hourglass
        #[arg(long, default_value = "floor")]
        scene: String,

        /// Number of frames to step
        #[arg(short, long, default_value = "100")]
        frames: u64,

        /// RNG seed (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Grid width in cells (overrides the config file)
        #[arg(long)]
        width: Option<u32>,

        /// Grid height in cells (overrides the config file)
        #[arg(long)]
        height: Option<u32>,

        /// Pour this material from the top center every frame
        #[arg(short, long)]
        pour: Option<String>,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the final frame as text
        #[arg(long)]
        show: bool,

        /// Print the effective configuration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the gradient stops a material is colored from
    Palette {
        /// Material name (e.g. sand, peachy, ice-cream)
        material: String,

        /// Number of gradient stops
        #[arg(long, default_value = "10")]
        stops: usize,
    },

    /// List the available brushes
    Materials,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            scene,
            frames,
            seed,
            width,
            height,
            pour,
            config,
            show,
            json,
        } => commands::simulate::run(&SimulateOptions {
            scene,
            frames,
            seed,
            width,
            height,
            pour,
            config,
            show,
            json,
        }),
        Commands::Palette { material, stops } => commands::palette::run(&material, stops),
        Commands::Materials => commands::materials::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
