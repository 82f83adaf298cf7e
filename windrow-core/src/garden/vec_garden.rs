//! In-memory [`Garden`] backed by per-cell vectors.

use thiserror::Error;

use super::{Garden, Load};

/// Errors raised while assembling a [`VecGarden`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum VecGardenError {
    /// An edge referenced a cell beyond the garden.
    #[error("edge ({left}, {right}) references a cell outside 0..{cell_count}")]
    UnknownCell {
        /// First endpoint as supplied.
        left: usize,
        /// Second endpoint as supplied.
        right: usize,
        /// Number of cells in the garden.
        cell_count: usize,
    },
    /// An edge touched a blocked cell.
    #[error("edge ({left}, {right}) touches blocked cell {blocked}")]
    BlockedEndpoint {
        /// First endpoint as supplied.
        left: usize,
        /// Second endpoint as supplied.
        right: usize,
        /// The blocked endpoint.
        blocked: usize,
    },
    /// The sink-distance table did not cover every cell.
    #[error("sink distances cover {actual} cells but the garden has {expected}")]
    SinkDistanceLength {
        /// Number of cells in the garden.
        expected: usize,
        /// Length of the supplied table.
        actual: usize,
    },
}

/// Garden held entirely in memory.
///
/// # Examples
/// ```
/// use windrow_core::{Garden, VecGarden};
///
/// let garden = VecGarden::builder("path")
///     .cells([1, 1, 1, 1])
///     .edge(0, 1)
///     .edge(1, 2)
///     .edge(2, 3)
///     .capacity(2)
///     .build()?;
/// assert_eq!(garden.cell_count(), 4);
/// assert_eq!(garden.neighbours(1), [0, 2]);
/// # Ok::<(), windrow_core::VecGardenError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecGarden {
    name: String,
    loads: Vec<Option<Load>>,
    adjacency: Vec<Vec<usize>>,
    sink_distances: Option<Vec<u64>>,
    capacity: Load,
}

impl VecGarden {
    /// Starts assembling a garden called `name`.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> VecGardenBuilder {
        VecGardenBuilder {
            name: name.into(),
            loads: Vec::new(),
            edges: Vec::new(),
            sink_distances: None,
            capacity: 0,
        }
    }

    /// Returns a copy of this garden with a different capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: Load) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Garden for VecGarden {
    fn name(&self) -> &str {
        &self.name
    }

    fn cell_count(&self) -> usize {
        self.loads.len()
    }

    fn load(&self, cell: usize) -> Option<Load> {
        self.loads.get(cell).copied().flatten()
    }

    fn neighbours(&self, cell: usize) -> Vec<usize> {
        self.adjacency.get(cell).cloned().unwrap_or_default()
    }

    fn capacity(&self) -> Load {
        self.capacity
    }

    fn sink_distance(&self, cell: usize) -> Option<u64> {
        self.sink_distances.as_ref()?.get(cell).copied()
    }
}

/// Builder returned by [`VecGarden::builder`].
#[derive(Debug, Clone)]
pub struct VecGardenBuilder {
    name: String,
    loads: Vec<Option<Load>>,
    edges: Vec<(usize, usize)>,
    sink_distances: Option<Vec<u64>>,
    capacity: Load,
}

impl VecGardenBuilder {
    /// Appends a workable cell.
    #[must_use]
    pub fn cell(mut self, load: Load) -> Self {
        self.loads.push(Some(load));
        self
    }

    /// Appends several workable cells in order.
    #[must_use]
    pub fn cells(mut self, loads: impl IntoIterator<Item = Load>) -> Self {
        self.loads.extend(loads.into_iter().map(Some));
        self
    }

    /// Appends a blocked cell.
    #[must_use]
    pub fn blocked(mut self) -> Self {
        self.loads.push(None);
        self
    }

    /// Connects two cells. Edges are undirected; self-loops and repeats are
    /// dropped when the garden is built.
    #[must_use]
    pub fn edge(mut self, left: usize, right: usize) -> Self {
        self.edges.push((left, right));
        self
    }

    /// Supplies the distance from the sink to every cell, blocked ones
    /// included.
    #[must_use]
    pub fn sink_distances(mut self, distances: Vec<u64>) -> Self {
        self.sink_distances = Some(distances);
        self
    }

    /// Sets the cluster capacity.
    #[must_use]
    pub fn capacity(mut self, capacity: Load) -> Self {
        self.capacity = capacity;
        self
    }

    /// Validates the edges and produces the garden.
    ///
    /// # Errors
    /// Returns [`VecGardenError::UnknownCell`] or
    /// [`VecGardenError::BlockedEndpoint`] for edges that leave the workable
    /// set, and [`VecGardenError::SinkDistanceLength`] when the distance table
    /// does not match the cell count.
    pub fn build(self) -> Result<VecGarden, VecGardenError> {
        let cell_count = self.loads.len();
        if let Some(distances) = &self.sink_distances
            && distances.len() != cell_count
        {
            return Err(VecGardenError::SinkDistanceLength {
                expected: cell_count,
                actual: distances.len(),
            });
        }

        let mut adjacency = vec![Vec::new(); cell_count];
        for &(left, right) in &self.edges {
            if left >= cell_count || right >= cell_count {
                return Err(VecGardenError::UnknownCell {
                    left,
                    right,
                    cell_count,
                });
            }
            for endpoint in [left, right] {
                if self.loads.get(endpoint).copied().flatten().is_none() {
                    return Err(VecGardenError::BlockedEndpoint {
                        left,
                        right,
                        blocked: endpoint,
                    });
                }
            }
            if left == right {
                continue;
            }
            if let Some(list) = adjacency.get_mut(left) {
                list.push(right);
            }
            if let Some(list) = adjacency.get_mut(right) {
                list.push(left);
            }
        }
        for list in &mut adjacency {
            list.sort_unstable();
            list.dedup();
        }

        Ok(VecGarden {
            name: self.name,
            loads: self.loads,
            adjacency,
            sink_distances: self.sink_distances,
            capacity: self.capacity,
        })
    }
}
