//! Example: Assign regions to the cells of a small world
//!
//! Builds a 16x16 cell world with a hole of open water in the middle, tags it
//! with a few regions and prints the resulting coverage map. Per-region
//! progress is logged through tracing at INFO level.
//!
//! ```text
//! cargo run --example assign_regions
//! ```

use std::collections::BTreeSet;

use rust_region_grid::*;

const WORLD: &str = "Tamriel";
const SIZE: i32 = 16;

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    println!("Region Grid Assignment Example");
    println!("==============================\n");

    let config = GridConfigBuilder::new()
        .sample_mode(SampleMode::Overlap)
        .build();

    println!("Configuration:");
    println!("  Cell Size: {}", config.cell_size);
    println!("  Sample Mode: {}", config.sample_mode.name());
    println!();

    // Exterior cells only; the lake in the middle has no cell records
    let mut index: WorldPartitionIndex<&str, BTreeSet<&str>> = WorldPartitionIndex::new();
    for col in 0..SIZE {
        for row in 0..SIZE {
            let lake = (6..9).contains(&col) && (6..9).contains(&row);
            if !lake {
                index.insert_cell(WORLD, GridCellIndex::new(col, row), BTreeSet::new());
            }
        }
    }
    println!("Indexed {} cells in {} world(s)\n", index.cell_count(), index.world_count());

    let cell = config.cell_size;
    let regions = vec![
        Region::new("Marsh", WORLD).with_area(PolygonArea::from_coords([
            (0.0, 0.0),
            (7.5 * cell, 0.0),
            (0.0, 7.5 * cell),
        ])),
        Region::new("Highlands", WORLD)
            .with_area(PolygonArea::rectangle(
                Point2D::new(10.0 * cell, 10.0 * cell),
                Point2D::new(16.0 * cell, 16.0 * cell),
            ))
            .with_area(PolygonArea::from_coords([
                (12.0 * cell, 2.0 * cell),
                (15.0 * cell, 5.0 * cell),
                (12.0 * cell, 8.0 * cell),
                (9.0 * cell, 5.0 * cell),
            ])),
        Region::new("Lakeshore", WORLD).with_area(PolygonArea::rectangle(
            Point2D::new(5.0 * cell, 5.0 * cell),
            Point2D::new(10.0 * cell, 10.0 * cell),
        )),
        Region::new("Atmora", "Atmora").with_area(PolygonArea::rectangle(
            Point2D::new(0.0, 0.0),
            Point2D::new(cell, cell),
        )),
    ];

    let report = assign_all(&regions, &mut index, &config);

    println!("\nNewly tagged cells:");
    for region in &regions {
        println!("  {:<10} {}", region.id, report.get(&region.id).unwrap_or(0));
    }
    println!("  {:<10} {}", "total", report.total());
    println!();

    // Coverage map, top row first: one letter per region, '+' for several
    let Some(partition) = index.world(&WORLD) else {
        return;
    };
    println!("Coverage map:");
    for row in (0..SIZE).rev() {
        let line: String = (0..SIZE)
            .map(|col| match partition.get(&GridCellIndex::new(col, row)) {
                None => '~',
                Some(tags) if tags.is_empty() => '.',
                Some(tags) if tags.len() > 1 => '+',
                Some(tags) => tags.iter().next().and_then(|t| t.chars().next()).unwrap_or('?'),
            })
            .collect();
        println!("  {}", line);
    }
}
