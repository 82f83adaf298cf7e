use thiserror::Error;

/// Errors raised while loading a garden document.
#[derive(Debug, Error)]
pub enum JsonGardenError {
    /// The document is not valid JSON or does not match the garden schema.
    #[error("invalid garden document: {0}")]
    Json(#[from] serde_json::Error),
    /// The document could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The document lists no cells.
    #[error("garden has no cells")]
    NoCells,
    /// A neighbour index does not name a cell.
    #[error("cell {cell} lists neighbour {neighbour} but the garden has {cell_count} cells")]
    NeighbourOutOfRange {
        /// Cell whose neighbour list is invalid.
        cell: usize,
        /// Offending neighbour index.
        neighbour: usize,
        /// Number of cells in the document.
        cell_count: usize,
    },
    /// A cell lists itself as a neighbour.
    #[error("cell {cell} lists itself as a neighbour")]
    SelfLoop {
        /// Offending cell.
        cell: usize,
    },
    /// A blocked cell carries a neighbour list.
    #[error("blocked cell {cell} must not list neighbours")]
    BlockedWithNeighbours {
        /// Offending cell.
        cell: usize,
    },
    /// A workable cell lists a blocked neighbour.
    #[error("cell {cell} lists blocked cell {neighbour} as a neighbour")]
    EdgeToBlocked {
        /// Workable cell.
        cell: usize,
        /// Blocked neighbour.
        neighbour: usize,
    },
    /// Adjacency is one-sided.
    #[error("cell {cell} lists {neighbour} as a neighbour but not the reverse")]
    Asymmetric {
        /// Cell listing the edge.
        cell: usize,
        /// Cell missing the reverse edge.
        neighbour: usize,
    },
}
