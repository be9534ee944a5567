use tw_core::World;

pub fn run() -> Result<(), String> {
    let session = super::load_story()?;
    let world = session.world();
    let (exits, actions, items) = totals(world);

    println!("  Compiled '{}' successfully.", session.scenario().title);
    println!();
    println!("  {} locations, {exits} exits", world.len());
    println!("  {actions} actions, {items} items");
    println!();
    println!("  All checks passed.");

    Ok(())
}

fn totals(world: &World) -> (usize, usize, usize) {
    let mut exits = 0;
    let mut actions = 0;
    let mut items = 0;
    for (_, location) in world.locations() {
        exits += location.exits().len();
        actions += location.actions().len();
        items += location.items().len();
    }
    (exits, actions, items)
}
