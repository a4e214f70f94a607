//! Region-to-cell assignment
//!
//! Tags every existing cell a region covers with the region's identifier.
//! Tagging is idempotent: cells already carrying the tag are left alone and
//! not counted, so re-running an assignment is harmless.
//!
//! Nothing here fails. A region whose world is not loaded tags zero cells,
//! covered grid coordinates without a cell are skipped, and malformed areas are
//! logged and ignored.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, info, warn};

use crate::config::GridConfig;
use crate::containment::CellSet;
use crate::partition::{CellTags, WorldPartition, WorldPartitionIndex};
use crate::region::Region;

/// Newly tagged cell counts per region
///
/// Purely informational; meant for logging and reporting.
#[derive(Debug, Clone)]
pub struct AssignmentReport<R> {
    counts: HashMap<R, usize>,
}

impl<R: Eq + Hash> AssignmentReport<R> {
    /// Create an empty report
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Add `count` newly tagged cells to `region`'s total
    pub fn record(&mut self, region: R, count: usize) {
        *self.counts.entry(region).or_insert(0) += count;
    }

    /// Newly tagged cells for `region`, `None` if it was never processed
    #[inline]
    pub fn get(&self, region: &R) -> Option<usize> {
        self.counts.get(region).copied()
    }

    /// Newly tagged cells across all regions
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct regions processed
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether no region was processed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(region, count)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&R, usize)> + '_ {
        self.counts.iter().map(|(region, &count)| (region, count))
    }
}

impl<R: Eq + Hash> Default for AssignmentReport<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Tag every cell covered by `region` and return how many were newly tagged
///
/// Returns 0 without touching any cell handle when the region has no world
/// reference or its world is missing from `index`.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use rust_region_grid::*;
///
/// let mut index: WorldPartitionIndex<&str, HashSet<u32>> = WorldPartitionIndex::new();
/// for col in 0..4 {
///     index.insert_cell("Tamriel", GridCellIndex::new(col, 0), HashSet::new());
/// }
///
/// let region = Region::new(42u32, "Tamriel").with_area(PolygonArea::rectangle(
///     Point2D::new(0.0, 0.0),
///     Point2D::new(8192.0, 4096.0),
/// ));
///
/// let config = GridConfig::default();
/// assert_eq!(assign(&region, &mut index, &config), 2);
/// // Running again tags nothing new
/// assert_eq!(assign(&region, &mut index, &config), 0);
/// ```
pub fn assign<R, W, H>(
    region: &Region<R, W>,
    index: &mut WorldPartitionIndex<W, H>,
    config: &GridConfig,
) -> usize
where
    R: Clone + Debug,
    W: Eq + Hash + Debug,
    H: CellTags<R>,
{
    let Some(partition) = resolve_world(region, index) else {
        return 0;
    };

    report_malformed_areas(region);
    let cells = region.covered_cells(config);
    tag_in_partition(&region.id, &cells, partition)
}

/// Tag precomputed cells for `region`
///
/// The tagging half of [`assign`], for callers that computed coverage
/// themselves. Same world resolution and skip rules apply.
pub fn tag_cells<R, W, H>(
    region: &Region<R, W>,
    cells: &CellSet,
    index: &mut WorldPartitionIndex<W, H>,
) -> usize
where
    R: Clone + Debug,
    W: Eq + Hash + Debug,
    H: CellTags<R>,
{
    match resolve_world(region, index) {
        Some(partition) => tag_in_partition(&region.id, cells, partition),
        None => 0,
    }
}

/// Run [`assign`] for every region in order and collect the counts
///
/// Regions sharing an identifier accumulate into one report entry. Regions
/// that were skipped appear with a count of 0.
pub fn assign_all<'a, R, W, H, I>(
    regions: I,
    index: &mut WorldPartitionIndex<W, H>,
    config: &GridConfig,
) -> AssignmentReport<R>
where
    I: IntoIterator<Item = &'a Region<R, W>>,
    R: Clone + Eq + Hash + Debug + 'a,
    W: Eq + Hash + Debug + 'a,
    H: CellTags<R>,
{
    let mut report = AssignmentReport::new();
    for region in regions {
        let count = assign(region, index, config);
        record(&mut report, region, count);
    }
    report
}

/// Parallel variant of [`assign_all`]
///
/// Coverage is computed for all regions on the rayon thread pool; tagging then
/// runs on the calling thread in input order, so a cell shared by overlapping
/// regions is never written concurrently. The result matches [`assign_all`].
#[cfg(feature = "parallel")]
pub fn assign_all_par<R, W, H>(
    regions: &[Region<R, W>],
    index: &mut WorldPartitionIndex<W, H>,
    config: &GridConfig,
) -> AssignmentReport<R>
where
    R: Clone + Eq + Hash + Debug + Send + Sync,
    W: Eq + Hash + Debug + Send + Sync,
    H: CellTags<R>,
{
    use rayon::prelude::*;

    let loaded: Vec<bool> = regions
        .iter()
        .map(|region| {
            region
                .world
                .as_ref()
                .is_some_and(|world| index.contains_world(world))
        })
        .collect();

    let coverage: Vec<Option<CellSet>> = regions
        .par_iter()
        .zip(loaded.par_iter())
        .map(|(region, &loaded)| loaded.then(|| region.covered_cells(config)))
        .collect();

    let mut report = AssignmentReport::new();
    for (region, cells) in regions.iter().zip(coverage) {
        let count = match cells {
            Some(cells) => {
                report_malformed_areas(region);
                tag_cells(region, &cells, index)
            }
            None => tag_cells(region, &CellSet::new(), index),
        };
        record(&mut report, region, count);
    }
    report
}

fn record<R, W>(report: &mut AssignmentReport<R>, region: &Region<R, W>, count: usize)
where
    R: Clone + Eq + Hash + Debug,
{
    info!(region = ?region.id, count, "added region to {count} cell(s)");
    report.record(region.id.clone(), count);
}

fn resolve_world<'a, R, W, H>(
    region: &Region<R, W>,
    index: &'a mut WorldPartitionIndex<W, H>,
) -> Option<&'a mut WorldPartition<H>>
where
    R: Debug,
    W: Eq + Hash + Debug,
{
    let Some(world) = region.world.as_ref() else {
        debug!(region = ?region.id, "region has no world reference, skipping");
        return None;
    };

    let partition = index.world_mut(world);
    if partition.is_none() {
        debug!(region = ?region.id, world = ?world, "region world is not loaded, skipping");
    }
    partition
}

fn report_malformed_areas<R: Debug, W>(region: &Region<R, W>) {
    for (area, polygon) in region.areas.iter().enumerate() {
        if let Err(err) = polygon.validate() {
            warn!(region = ?region.id, area, error = %err, "ignoring malformed polygon area");
        }
    }
}

fn tag_in_partition<R, H>(region: &R, cells: &CellSet, partition: &mut WorldPartition<H>) -> usize
where
    R: Clone,
    H: CellTags<R>,
{
    let mut count = 0;
    for cell in cells {
        let Some(handle) = partition.get_mut(cell) else {
            continue;
        };
        if !handle.has_tag(region) {
            handle.add_tag(region.clone());
            count += 1;
        }
    }
    count
}
