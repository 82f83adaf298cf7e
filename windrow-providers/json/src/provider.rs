//! Garden provider backed by a parsed JSON document.
use std::{fs::File, io::BufReader, io::Read, path::Path};

use serde::Deserialize;
use tracing::debug;
use windrow_core::{Garden, Load};

use crate::errors::JsonGardenError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Document {
    capacity: Load,
    cells: Vec<CellEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CellEntry {
    #[serde(default)]
    blocked: bool,
    load: Option<Load>,
    #[serde(default)]
    neighbours: Vec<usize>,
    sink_distance: Option<u64>,
}

impl CellEntry {
    const fn load(&self) -> Option<Load> {
        if self.blocked { None } else { self.load }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Cell {
    load: Option<Load>,
    neighbours: Vec<usize>,
    sink_distance: Option<u64>,
}

/// A validated garden loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonGardenProvider {
    name: String,
    capacity: Load,
    cells: Vec<Cell>,
}

impl JsonGardenProvider {
    /// Parses and validates a garden document from `reader`.
    ///
    /// # Errors
    /// Returns [`JsonGardenError::Json`] for malformed documents and one of
    /// the structural variants when the adjacency is inconsistent.
    ///
    /// # Examples
    /// ```
    /// use windrow_core::Garden;
    /// use windrow_providers_json::JsonGardenProvider;
    ///
    /// let doc = r#"{"capacity": 3, "cells": [
    ///     {"load": 1, "neighbours": [1]},
    ///     {"load": 2, "neighbours": [0]},
    ///     {"blocked": true}
    /// ]}"#;
    /// let garden = JsonGardenProvider::try_from_reader("demo", doc.as_bytes())?;
    /// assert_eq!(garden.cell_count(), 3);
    /// assert_eq!(garden.load(2), None);
    /// # Ok::<(), windrow_providers_json::JsonGardenError>(())
    /// ```
    pub fn try_from_reader<R: Read>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, JsonGardenError> {
        let document: Document = serde_json::from_reader(reader)?;
        let provider = Self::try_from_document(name.into(), document)?;
        debug!(
            garden = %provider.name,
            cells = provider.cells.len(),
            workable = provider.workable_count(),
            capacity = provider.capacity,
            "loaded garden document"
        );
        Ok(provider)
    }

    /// Opens `path` and parses it with [`Self::try_from_reader`].
    ///
    /// # Errors
    /// Returns [`JsonGardenError::Io`] when the file cannot be opened, plus
    /// every error [`Self::try_from_reader`] can produce.
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, JsonGardenError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file))
    }

    /// Replaces the document's capacity.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: Load) -> Self {
        self.capacity = capacity;
        self
    }

    fn try_from_document(name: String, document: Document) -> Result<Self, JsonGardenError> {
        let Document { capacity, cells } = document;
        if cells.is_empty() {
            return Err(JsonGardenError::NoCells);
        }
        validate(&cells)?;
        let cells = cells
            .into_iter()
            .map(|entry| {
                let load = entry.load();
                let mut neighbours = entry.neighbours;
                neighbours.sort_unstable();
                neighbours.dedup();
                Cell {
                    load,
                    neighbours,
                    sink_distance: entry.sink_distance,
                }
            })
            .collect();
        Ok(Self {
            name,
            capacity,
            cells,
        })
    }
}

fn validate(cells: &[CellEntry]) -> Result<(), JsonGardenError> {
    let cell_count = cells.len();
    for (cell, entry) in cells.iter().enumerate() {
        if entry.load().is_none() {
            if !entry.neighbours.is_empty() {
                return Err(JsonGardenError::BlockedWithNeighbours { cell });
            }
            continue;
        }
        for &neighbour in &entry.neighbours {
            let Some(other) = cells.get(neighbour) else {
                return Err(JsonGardenError::NeighbourOutOfRange {
                    cell,
                    neighbour,
                    cell_count,
                });
            };
            if neighbour == cell {
                return Err(JsonGardenError::SelfLoop { cell });
            }
            if other.load().is_none() {
                return Err(JsonGardenError::EdgeToBlocked { cell, neighbour });
            }
            if !other.neighbours.contains(&cell) {
                return Err(JsonGardenError::Asymmetric { cell, neighbour });
            }
        }
    }
    Ok(())
}

impl Garden for JsonGardenProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn load(&self, cell: usize) -> Option<Load> {
        self.cells.get(cell)?.load
    }

    fn neighbours(&self, cell: usize) -> Vec<usize> {
        self.cells
            .get(cell)
            .map(|entry| entry.neighbours.clone())
            .unwrap_or_default()
    }

    fn capacity(&self) -> Load {
        self.capacity
    }

    fn sink_distance(&self, cell: usize) -> Option<u64> {
        self.cells.get(cell)?.sink_distance
    }
}
