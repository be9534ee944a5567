use comfy_table::{ContentArrangement, Table};

use tw_core::World;

pub fn run() -> Result<(), String> {
    let session = super::load_story()?;
    render(session.world());
    Ok(())
}

fn render(world: &World) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Location", "Exits", "Items"]);

    for (_, location) in world.locations() {
        let exits: Vec<String> = location
            .exits()
            .iter()
            .map(|e| format!("{} -> {}", e.verb, world.get(e.to).name))
            .collect();
        let exits = if exits.is_empty() {
            "—".to_string()
        } else {
            exits.join("\n")
        };

        let items: Vec<&str> = location.items().iter().map(|i| i.name.as_str()).collect();
        let items = if items.is_empty() {
            "—".to_string()
        } else {
            items.join(", ")
        };

        table.add_row(vec![location.name.clone(), exits, items]);
    }

    println!("{table}");
    println!();
    println!("  {} locations", world.len());
}
