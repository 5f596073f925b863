use comfy_table::{ContentArrangement, Table};
use sand_core::Brush;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Brush", "Behavior"]);

    for (key, brush) in (1..).zip(Brush::ALL) {
        let behavior = match brush {
            Brush::Material(kind) => kind.behavior().to_string(),
            Brush::Erase => "tool".to_string(),
        };
        table.add_row(vec![key.to_string(), brush.to_string(), behavior]);
    }

    println!("{table}");
    println!();
    println!("  {} brushes", Brush::ALL.len());

    Ok(())
}
