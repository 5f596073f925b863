use colored::Colorize;
use sand_core::{Color, MaterialFactory, MaterialKind, SandConfig};

use super::swatch;

pub fn run(material: &str, stops: usize) -> Result<(), String> {
    let kind: MaterialKind = material.parse().map_err(|e| format!("{e}"))?;
    let config = SandConfig::default().with_gradient_stops(stops);
    config.validate().map_err(|e| format!("{e}"))?;
    let factory = MaterialFactory::new(config.gradient_stops, config.dither_step)
        .map_err(|e| format!("{e}"))?;

    println!(
        "  {} {}",
        kind.name().bold(),
        format!("({})", kind.behavior()).dimmed()
    );
    println!();

    for (i, color) in factory.swatches(kind).into_iter().enumerate() {
        println!("  {i:>2}  {}  {}", swatch(color), color.hex());
    }

    if kind == MaterialKind::Block {
        println!();
        println!(
            "  {}",
            format!("dark mode: {}", Color::WHITE_SMOKE.hex()).dimmed()
        );
    }

    Ok(())
}
