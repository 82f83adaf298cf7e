//! Garden abstractions consumed by the planner.

mod vec_garden;

pub use vec_garden::{VecGarden, VecGardenBuilder, VecGardenError};

/// Amount of raked material held by one cell, and the unit of cluster
/// capacity.
pub type Load = u64;

/// Precomputed adjacency graph over the cells of a garden.
///
/// Cells are indexed `0..cell_count()` in row-major order. A cell is workable
/// when [`Garden::load`] returns `Some`; blocked cells return `None`, have no
/// neighbours, and never appear in any other cell's neighbour list.
/// Implementations own these invariants: the planner does not validate them.
///
/// # Examples
/// ```
/// use windrow_core::{Garden, Load};
///
/// struct Strip(Vec<Load>);
///
/// impl Garden for Strip {
///     fn name(&self) -> &str { "strip" }
///     fn cell_count(&self) -> usize { self.0.len() }
///     fn load(&self, cell: usize) -> Option<Load> { self.0.get(cell).copied() }
///     fn neighbours(&self, cell: usize) -> Vec<usize> {
///         let mut out = Vec::new();
///         if cell > 0 { out.push(cell - 1); }
///         if cell + 1 < self.0.len() { out.push(cell + 1); }
///         out
///     }
///     fn capacity(&self) -> Load { 2 }
/// }
///
/// let strip = Strip(vec![1, 1, 1]);
/// assert_eq!(strip.workable_count(), 3);
/// assert_eq!(strip.neighbours(1), [0, 2]);
/// assert_eq!(strip.sink_distance(0), None);
/// ```
pub trait Garden {
    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the number of cells, blocked ones included.
    fn cell_count(&self) -> usize;

    /// Returns the load of `cell`, or `None` when the cell is blocked or out
    /// of range.
    fn load(&self, cell: usize) -> Option<Load>;

    /// Returns the workable neighbours of `cell`.
    fn neighbours(&self, cell: usize) -> Vec<usize>;

    /// Returns the maximum total load a single cluster may accumulate.
    fn capacity(&self) -> Load;

    /// Returns the shortest-path distance from the sink to `cell`.
    ///
    /// Only consulted by [`crate::HubSelection::KpMin`]. The default
    /// implementation reports no distances.
    fn sink_distance(&self, cell: usize) -> Option<u64> {
        let _ = cell;
        None
    }

    /// Returns whether `cell` is workable.
    #[must_use]
    fn is_workable(&self, cell: usize) -> bool {
        self.load(cell).is_some()
    }

    /// Counts the workable cells.
    #[must_use]
    fn workable_count(&self) -> usize {
        (0..self.cell_count())
            .filter(|&cell| self.is_workable(cell))
            .count()
    }
}
