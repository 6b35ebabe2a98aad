use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(dir: &Path) -> Result<(), String> {
    let world = super::load_world(dir)?;

    let mut rows: Vec<Vec<String>> = world
        .maps()
        .iter()
        .map(|(id, data)| {
            let record = data.record();
            let entities = world
                .entities()
                .iter()
                .filter(|e| &e.location().map == id)
                .count();
            vec![
                record.name.clone(),
                id.clone(),
                format!("{:?}", record.light_mode),
                data.stored_tiles().to_string(),
                data.spawns().len().to_string(),
                entities.to_string(),
            ]
        })
        .collect();
    rows.sort();

    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Name", "File", "Light", "Tiles", "Spawns", "Entities"]);
    for row in rows {
        table.add_row(row);
    }
    println!("{table}");
    Ok(())
}
