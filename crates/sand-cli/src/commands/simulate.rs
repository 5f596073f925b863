use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use sand_core::{Emitter, MaterialKind, SandConfig, Scene, Simulation};

/// Arguments of `sand simulate`.
pub struct SimulateOptions {
    pub scene: String,
    pub frames: u64,
    pub seed: Option<u64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub pour: Option<String>,
    pub config: Option<PathBuf>,
    pub show: bool,
    pub json: bool,
}

pub fn run(opts: &SimulateOptions) -> Result<(), String> {
    let config = load_config(opts)?;
    let scene: Scene = opts.scene.parse().map_err(|e| format!("{e}"))?;
    let pour = opts
        .pour
        .as_deref()
        .map(str::parse::<MaterialKind>)
        .transpose()
        .map_err(|e| format!("{e}"))?;

    let mut sim =
        Simulation::new(config).map_err(|e| format!("simulation init failed: {e}"))?;
    let blocks = scene.apply(&mut sim);
    let emitter = pour.map(|kind| Emitter::top_center(kind, &sim));

    for _ in 0..opts.frames {
        if let Some(emitter) = &emitter {
            emitter.emit(&mut sim);
        }
        sim.step();
    }

    // Header
    println!(
        "  {} '{}' {}",
        "Simulation".bold(),
        scene,
        format!(
            "({} frames, seed={}, {}x{})",
            sim.frame(),
            sim.config().seed,
            sim.config().width,
            sim.config().height
        )
        .dimmed()
    );
    println!(
        "  {} cells live, {} blocks placed by the scene",
        sim.grid().len(),
        blocks
    );
    if let Some(kind) = pour {
        println!("  Pouring {} from the top center", kind.name().cyan());
    }
    println!();

    println!("  {}", "Material Counts".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Material", "Behavior", "Cells"]);
    for (kind, count) in sim.counts() {
        table.add_row(vec![
            kind.name().to_string(),
            kind.behavior().to_string(),
            count.to_string(),
        ]);
    }
    println!("{table}");
    println!();

    if opts.show {
        println!("  {}", "Final Frame".bold().underline());
        println!();
        println!("{}", sim.ascii());
        println!();
    }

    if opts.json {
        let json = serde_json::to_string_pretty(sim.config())
            .map_err(|e| format!("failed to serialize config: {e}"))?;
        println!("{json}");
    }

    Ok(())
}

/// Read the config file if given, then apply command-line overrides.
fn load_config(opts: &SimulateOptions) -> Result<SandConfig, String> {
    let mut config = match &opts.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            SandConfig::from_json(&text).map_err(|e| format!("{e}"))?
        }
        None => SandConfig::default(),
    };

    if let Some(seed) = opts.seed {
        config = config.with_seed(seed);
    }
    let width = opts.width.unwrap_or(config.width);
    let height = opts.height.unwrap_or(config.height);
    config = config.with_size(width, height);

    config.validate().map_err(|e| format!("{e}"))?;
    Ok(config)
}
