//! World partition index and the cell tagging capability
//!
//! The index maps each world to its cells, keyed by grid coordinate. Cell
//! handles are owned by the caller's world model; the only thing this crate
//! ever asks of one is "do you carry this tag" and "add this tag".

use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::Hash;

use crate::config::GridConfig;
use crate::geometry::Point2D;
use crate::grid::GridCellIndex;

/// Per-cell region tag set, as exposed by the external world model
///
/// Implementations must make `add_tag` idempotent; the orchestrator also
/// checks `has_tag` first and only counts cells it actually tagged.
pub trait CellTags<R> {
    /// Check whether the cell already belongs to `region`
    fn has_tag(&self, region: &R) -> bool;

    /// Record that the cell belongs to `region`
    fn add_tag(&mut self, region: R);
}

impl<R: Eq + Hash> CellTags<R> for HashSet<R> {
    fn has_tag(&self, region: &R) -> bool {
        self.contains(region)
    }

    fn add_tag(&mut self, region: R) {
        self.insert(region);
    }
}

impl<R: Ord> CellTags<R> for BTreeSet<R> {
    fn has_tag(&self, region: &R) -> bool {
        self.contains(region)
    }

    fn add_tag(&mut self, region: R) {
        self.insert(region);
    }
}

/// Ordered region list, kept free of duplicates
impl<R: PartialEq> CellTags<R> for Vec<R> {
    fn has_tag(&self, region: &R) -> bool {
        self.contains(region)
    }

    fn add_tag(&mut self, region: R) {
        if !self.contains(&region) {
            self.push(region);
        }
    }
}

/// Cells of one world, keyed by grid coordinate
///
/// Grid coordinates without a cell (ocean, void) are simply absent.
#[derive(Debug, Clone)]
pub struct WorldPartition<H> {
    cells: HashMap<GridCellIndex, H>,
}

impl<H> WorldPartition<H> {
    /// Create an empty partition
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Insert a cell handle, returning the handle it replaced
    pub fn insert(&mut self, index: GridCellIndex, handle: H) -> Option<H> {
        self.cells.insert(index, handle)
    }

    /// Look up a cell
    #[inline]
    pub fn get(&self, index: &GridCellIndex) -> Option<&H> {
        self.cells.get(index)
    }

    /// Look up a cell for tagging
    #[inline]
    pub fn get_mut(&mut self, index: &GridCellIndex) -> Option<&mut H> {
        self.cells.get_mut(index)
    }

    /// Check whether a cell exists at `index`
    #[inline]
    pub fn contains(&self, index: &GridCellIndex) -> bool {
        self.cells.contains_key(index)
    }

    /// Number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check whether the partition has no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Grid coordinates of all cells, in no particular order
    pub fn indices(&self) -> impl Iterator<Item = &GridCellIndex> + '_ {
        self.cells.keys()
    }
}

impl<H> Default for WorldPartition<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> FromIterator<(GridCellIndex, H)> for WorldPartition<H> {
    fn from_iter<I: IntoIterator<Item = (GridCellIndex, H)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Cells of every loaded world: `world -> grid coordinate -> handle`
///
/// Built once by the caller's loader, which is expected to enumerate only
/// exterior, non-persistent cells. Rebuild it whenever the grid cell size
/// changes.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use rust_region_grid::*;
///
/// let mut index: WorldPartitionIndex<&str, HashSet<u32>> = WorldPartitionIndex::new();
/// index.insert_cell("Tamriel", GridCellIndex::new(0, 0), HashSet::new());
///
/// assert!(index.contains_world(&"Tamriel"));
/// assert_eq!(index.world(&"Tamriel").map(|w| w.len()), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct WorldPartitionIndex<W, H> {
    worlds: HashMap<W, WorldPartition<H>>,
}

impl<W: Eq + Hash, H> WorldPartitionIndex<W, H> {
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            worlds: HashMap::new(),
        }
    }

    /// Create an index with empty partitions for the given worlds
    ///
    /// Pair with [`try_insert_cell`](Self::try_insert_cell) to index only the
    /// worlds some region actually refers to.
    pub fn with_worlds<I>(worlds: I) -> Self
    where
        I: IntoIterator<Item = W>,
    {
        let mut index = Self::new();
        for world in worlds {
            index.register_world(world);
        }
        index
    }

    /// Make sure a (possibly empty) partition exists for `world`
    pub fn register_world(&mut self, world: W) -> &mut WorldPartition<H> {
        self.worlds.entry(world).or_default()
    }

    /// Insert a cell, creating the world's partition if needed
    ///
    /// Returns the handle previously stored at that coordinate, if any.
    pub fn insert_cell(&mut self, world: W, index: GridCellIndex, handle: H) -> Option<H> {
        self.register_world(world).insert(index, handle)
    }

    /// Insert a cell only if its world has been registered
    ///
    /// Returns `false` (and drops the handle) for unknown worlds.
    pub fn try_insert_cell(&mut self, world: &W, index: GridCellIndex, handle: H) -> bool {
        match self.worlds.get_mut(world) {
            Some(partition) => {
                partition.insert(index, handle);
                true
            }
            None => false,
        }
    }

    /// Insert a cell by any world position inside it
    pub fn insert_at(
        &mut self,
        world: W,
        position: Point2D,
        handle: H,
        config: &GridConfig,
    ) -> Option<H> {
        self.insert_cell(world, GridCellIndex::of(position, config.cell_size), handle)
    }

    /// Partition of `world`
    #[inline]
    pub fn world(&self, world: &W) -> Option<&WorldPartition<H>> {
        self.worlds.get(world)
    }

    /// Partition of `world`, for tagging
    #[inline]
    pub fn world_mut(&mut self, world: &W) -> Option<&mut WorldPartition<H>> {
        self.worlds.get_mut(world)
    }

    /// Check whether `world` has a partition
    #[inline]
    pub fn contains_world(&self, world: &W) -> bool {
        self.worlds.contains_key(world)
    }

    /// Number of worlds
    #[inline]
    pub fn world_count(&self) -> usize {
        self.worlds.len()
    }

    /// Total number of cells across all worlds
    pub fn cell_count(&self) -> usize {
        self.worlds.values().map(WorldPartition::len).sum()
    }
}

impl<W: Eq + Hash, H> Default for WorldPartitionIndex<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_set_tags() {
        let mut tags: HashSet<u32> = HashSet::new();
        assert!(!tags.has_tag(&1));
        tags.add_tag(1);
        tags.add_tag(1);
        assert!(tags.has_tag(&1));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_btree_set_tags() {
        let mut tags: BTreeSet<&str> = BTreeSet::new();
        tags.add_tag("Reach");
        assert!(tags.has_tag(&"Reach"));
        assert!(!tags.has_tag(&"Rift"));
    }

    #[test]
    fn test_vec_tags_stay_unique() {
        let mut tags: Vec<u32> = vec![3];
        tags.add_tag(5);
        tags.add_tag(3);
        tags.add_tag(5);
        assert_eq!(tags, vec![3, 5]);
    }

    #[test]
    fn test_world_partition() {
        let mut partition: WorldPartition<Vec<u32>> = WorldPartition::new();
        assert!(partition.is_empty());

        assert!(partition.insert(GridCellIndex::new(1, 2), vec![]).is_none());
        assert!(partition.insert(GridCellIndex::new(1, 2), vec![9]).is_some());
        assert_eq!(partition.len(), 1);
        assert!(partition.contains(&GridCellIndex::new(1, 2)));
        assert_eq!(partition.get(&GridCellIndex::new(1, 2)), Some(&vec![9]));
        assert!(partition.get(&GridCellIndex::new(0, 0)).is_none());

        partition.get_mut(&GridCellIndex::new(1, 2)).unwrap().push(10);
        assert_eq!(partition.get(&GridCellIndex::new(1, 2)), Some(&vec![9, 10]));
        assert_eq!(partition.indices().count(), 1);
    }

    #[test]
    fn test_world_partition_from_iter() {
        let partition: WorldPartition<u8> = (0..3).map(|i| (GridCellIndex::new(i, 0), 0)).collect();
        assert_eq!(partition.len(), 3);
    }

    #[test]
    fn test_index_insert_and_lookup() {
        let mut index: WorldPartitionIndex<&str, Vec<u32>> = WorldPartitionIndex::new();
        index.insert_cell("Tamriel", GridCellIndex::new(0, 0), vec![]);
        index.insert_cell("Tamriel", GridCellIndex::new(1, 0), vec![]);
        index.insert_cell("Solstheim", GridCellIndex::new(0, 0), vec![]);

        assert_eq!(index.world_count(), 2);
        assert_eq!(index.cell_count(), 3);
        assert!(index.contains_world(&"Solstheim"));
        assert!(!index.contains_world(&"Blackreach"));
        assert!(index.world(&"Blackreach").is_none());
        assert_eq!(index.world(&"Tamriel").map(WorldPartition::len), Some(2));
    }

    #[test]
    fn test_index_registered_worlds_only() {
        let mut index: WorldPartitionIndex<u32, Vec<u32>> = WorldPartitionIndex::with_worlds([60]);
        assert_eq!(index.world_count(), 1);
        assert!(index.world(&60).unwrap().is_empty());

        assert!(index.try_insert_cell(&60, GridCellIndex::new(0, 0), vec![]));
        assert!(!index.try_insert_cell(&61, GridCellIndex::new(0, 0), vec![]));
        assert_eq!(index.world_count(), 1);
        assert_eq!(index.cell_count(), 1);
    }

    #[test]
    fn test_index_insert_at_position() {
        let config = GridConfig::default();
        let mut index: WorldPartitionIndex<u8, Vec<u32>> = WorldPartitionIndex::new();
        index.insert_at(0, Point2D::new(-100.0, 5000.0), vec![], &config);

        let partition = index.world(&0).unwrap();
        assert!(partition.contains(&GridCellIndex::new(-1, 1)));
    }
}
