//! Candidate ordering: the priority in which a node's neighbours are offered.

use std::{cmp::Reverse, fmt, str::FromStr};

use crate::{error::ConfigurationError, garden::Garden};

/// Policy for ordering the unassigned neighbours of the node being expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CandidateOrder {
    /// Ascending index.
    #[default]
    Nw,
    /// Descending load, ties by ascending index.
    LmMax,
    /// Ascending load, ties by ascending index.
    LmMin,
}

impl CandidateOrder {
    /// Returns the canonical policy name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nw => "NW",
            Self::LmMax => "LM_max",
            Self::LmMin => "LM_min",
        }
    }

    /// Keeps the neighbours of `node` that are still unassigned and sorts
    /// them by priority, dropping repeats.
    pub(crate) fn candidates<G: Garden + ?Sized>(
        self,
        garden: &G,
        node: usize,
        unassigned: &[bool],
    ) -> Vec<usize> {
        let mut candidates: Vec<usize> = garden
            .neighbours(node)
            .into_iter()
            .filter(|&cell| unassigned.get(cell).copied().unwrap_or(false))
            .collect();
        candidates.sort_unstable();
        candidates.dedup();

        let load = |cell: usize| garden.load(cell).unwrap_or(0);
        match self {
            Self::Nw => {}
            Self::LmMax => candidates.sort_by_key(|&cell| (Reverse(load(cell)), cell)),
            Self::LmMin => candidates.sort_by_key(|&cell| (load(cell), cell)),
        }
        candidates
    }
}

impl fmt::Display for CandidateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandidateOrder {
    type Err = ConfigurationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "NW" => Ok(Self::Nw),
            "LM_max" => Ok(Self::LmMax),
            "LM_min" => Ok(Self::LmMin),
            other => Err(ConfigurationError::UnknownCandidateOrder {
                name: other.to_owned(),
            }),
        }
    }
}
