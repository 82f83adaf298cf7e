//! Successive cluster formation.
//!
//! Provides the [`Planner`] entry point. Clusters are grown one at a time:
//! a hub opens the cluster, accepted cells are queued, and each dequeued
//! cell offers its unassigned neighbours to the cluster until either the
//! queue drains or the garden has no unassigned cells left.

mod formation;

use std::sync::Arc;

use tracing::{info, instrument};

use crate::{Result, error::PlanError, garden::Garden, policy::PolicySet, result::RakingPlan};

use self::formation::Formation;

/// Entry point for forming clusters over a [`Garden`].
///
/// A planner holds nothing but its validated [`PolicySet`]; it is cheap to
/// clone and may be shared across threads running independent gardens.
///
/// # Examples
/// ```
/// use windrow_core::{PlannerBuilder, Successor, VecGarden};
///
/// let garden = VecGarden::builder("path")
///     .cells([1, 1, 1, 1])
///     .edge(0, 1)
///     .edge(1, 2)
///     .edge(2, 3)
///     .capacity(2)
///     .build()?;
/// let plan = PlannerBuilder::new().build().run(&garden)?;
/// let table: Vec<Successor> = plan.successors().entries().to_vec();
/// assert_eq!(
///     table,
///     [Successor::Cell(0), Successor::Cell(0), Successor::Cell(2), Successor::Cell(2)]
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    policies: PolicySet,
}

impl Planner {
    pub(crate) fn new(policies: PolicySet) -> Self {
        Self { policies }
    }

    /// Returns the policies this planner applies.
    #[must_use]
    pub fn policies(&self) -> PolicySet {
        self.policies
    }

    /// Partitions the workable cells of `garden` into clusters.
    ///
    /// Every workable cell ends up in exactly one cluster; blocked cells map
    /// to [`crate::Successor::Blocked`].
    ///
    /// # Errors
    /// Returns [`PlanError::MissingSinkDistance`] when `KP_min` hub selection
    /// is configured and the garden lacks a distance for some workable cell.
    /// The check happens before any cluster is formed.
    #[instrument(
        name = "core.run",
        err,
        skip(self, garden),
        fields(
            garden = %garden.name(),
            cells = garden.cell_count(),
            capacity = garden.capacity(),
            policies = %self.policies,
        ),
    )]
    pub fn run<G: Garden + ?Sized>(&self, garden: &G) -> Result<RakingPlan> {
        if self.policies.hub_selection().needs_sink_distance() {
            check_sink_distances(garden)?;
        }

        let plan = Formation::new(garden, self.policies).run();
        info!(
            clusters = plan.cluster_count(),
            "cluster formation completed"
        );
        Ok(plan)
    }
}

fn check_sink_distances<G: Garden + ?Sized>(garden: &G) -> Result<()> {
    let missing = (0..garden.cell_count())
        .find(|&cell| garden.is_workable(cell) && garden.sink_distance(cell).is_none());
    match missing {
        Some(cell) => Err(PlanError::MissingSinkDistance {
            garden: Arc::from(garden.name()),
            cell,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests;
