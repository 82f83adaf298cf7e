//! Successor table: where every cell's material is raked.

use std::fmt;

/// Successor entry for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Successor {
    /// The neighbour the cell rakes toward; a hub names itself.
    Cell(usize),
    /// Sentinel for blocked cells.
    Blocked,
}

impl Successor {
    /// Returns the target cell, or `None` for blocked cells.
    #[must_use]
    pub const fn cell(self) -> Option<usize> {
        match self {
            Self::Cell(cell) => Some(cell),
            Self::Blocked => None,
        }
    }
}

impl fmt::Display for Successor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cell(cell) => write!(f, "{cell}"),
            Self::Blocked => f.write_str("-"),
        }
    }
}

/// Per-cell successor pointers produced by [`crate::Planner::run`].
///
/// Following successors from any workable cell reaches that cell's hub in at
/// most `len()` hops; the hub points at itself.
///
/// # Examples
/// ```
/// use windrow_core::{Successor, SuccessorTable};
///
/// let table = SuccessorTable::from_entries(vec![
///     Successor::Cell(0),
///     Successor::Cell(0),
///     Successor::Blocked,
///     Successor::Cell(1),
/// ]);
/// assert!(table.is_hub(0));
/// assert_eq!(table.hub_of(3), Some(0));
/// assert_eq!(table.hub_of(2), None);
/// assert_eq!(table.hubs().collect::<Vec<_>>(), [0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SuccessorTable {
    entries: Vec<Successor>,
}

impl SuccessorTable {
    /// Wraps explicit entries, one per cell.
    #[must_use]
    pub fn from_entries(entries: Vec<Successor>) -> Self {
        Self { entries }
    }

    /// Returns the number of cells, blocked ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry for `cell`.
    #[must_use]
    pub fn get(&self, cell: usize) -> Option<Successor> {
        self.entries.get(cell).copied()
    }

    /// Returns the entries in cell order.
    #[must_use]
    pub fn entries(&self) -> &[Successor] {
        &self.entries
    }

    /// Iterates `(cell, successor)` rows in cell order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, Successor)> + '_ {
        self.entries.iter().copied().enumerate()
    }

    /// Returns whether `cell` is the hub of its cluster.
    #[must_use]
    pub fn is_hub(&self, cell: usize) -> bool {
        self.get(cell) == Some(Successor::Cell(cell))
    }

    /// Iterates hubs in ascending index order.
    pub fn hubs(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows()
            .filter(|&(cell, successor)| successor == Successor::Cell(cell))
            .map(|(cell, _)| cell)
    }

    /// Follows successors from `cell` to its hub.
    ///
    /// Returns `None` for blocked or unknown cells, and for chains that do not
    /// settle on a self-loop within `len()` hops.
    #[must_use]
    pub fn hub_of(&self, cell: usize) -> Option<usize> {
        let mut current = cell;
        for _ in 0..=self.entries.len() {
            let next = self.get(current)?.cell()?;
            if next == current {
                return Some(current);
            }
            current = next;
        }
        None
    }
}
