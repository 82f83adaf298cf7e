//! Result types for cluster formation.
//!
//! A [`RakingPlan`] couples the successor table with the clusters in the
//! order they were opened, so callers can inspect membership and load
//! without walking successor chains themselves.

use crate::{
    garden::Load,
    policy::PolicySet,
    successor::{Successor, SuccessorTable},
};

/// Identifier assigned to a cluster, counting up from zero in opening order.
///
/// # Examples
/// ```
/// use windrow_core::ClusterId;
///
/// let id = ClusterId::new(4);
/// assert_eq!(id.get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(u64);

impl ClusterId {
    /// Creates a new cluster identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }
}

/// One capacity-bounded cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    id: ClusterId,
    members: Vec<usize>,
    load: Load,
}

impl Cluster {
    pub(crate) fn open(id: ClusterId, hub: usize, load: Load) -> Self {
        Self {
            id,
            members: vec![hub],
            load,
        }
    }

    pub(crate) fn accept(&mut self, cell: usize, accumulated: Load) {
        self.members.push(cell);
        self.load = accumulated;
    }

    /// Returns the cluster identifier.
    #[must_use]
    pub const fn id(&self) -> ClusterId {
        self.id
    }

    /// Returns the hub that opened the cluster.
    #[must_use]
    pub fn hub(&self) -> usize {
        self.members.first().copied().unwrap_or_default()
    }

    /// Returns the members in acceptance order, hub first.
    #[must_use]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Returns the accumulated load of all members.
    #[must_use]
    pub const fn load(&self) -> Load {
        self.load
    }
}

/// Output of [`crate::Planner::run`].
///
/// # Examples
/// ```
/// use windrow_core::{ClusterId, PlannerBuilder, Successor, VecGarden};
///
/// let garden = VecGarden::builder("pair")
///     .cells([1, 1])
///     .blocked()
///     .edge(0, 1)
///     .capacity(5)
///     .build()?;
/// let plan = PlannerBuilder::new().build().run(&garden)?;
/// assert_eq!(plan.cluster_count(), 1);
/// assert_eq!(plan.successors().get(1), Some(Successor::Cell(0)));
/// assert_eq!(plan.assignments(), [Some(ClusterId::new(0)), Some(ClusterId::new(0)), None]);
/// assert_eq!(plan.clusters()[0].load(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RakingPlan {
    policies: PolicySet,
    capacity: Load,
    successors: SuccessorTable,
    clusters: Vec<Cluster>,
    assignments: Vec<Option<ClusterId>>,
}

impl RakingPlan {
    pub(crate) fn new(
        policies: PolicySet,
        capacity: Load,
        successors: Vec<Option<usize>>,
        clusters: Vec<Cluster>,
    ) -> Self {
        let mut assignments = vec![None; successors.len()];
        for cluster in &clusters {
            for &member in cluster.members() {
                if let Some(slot) = assignments.get_mut(member) {
                    *slot = Some(cluster.id());
                }
            }
        }
        let entries = successors
            .into_iter()
            .map(|entry| entry.map_or(Successor::Blocked, Successor::Cell))
            .collect();
        Self {
            policies,
            capacity,
            successors: SuccessorTable::from_entries(entries),
            clusters,
            assignments,
        }
    }

    /// Returns the policies the plan was formed with.
    #[must_use]
    pub const fn policies(&self) -> PolicySet {
        self.policies
    }

    /// Returns the capacity the plan was formed against.
    #[must_use]
    pub const fn capacity(&self) -> Load {
        self.capacity
    }

    /// Returns the successor table.
    #[must_use]
    pub const fn successors(&self) -> &SuccessorTable {
        &self.successors
    }

    /// Consumes the plan, keeping only the successor table.
    #[must_use]
    pub fn into_successors(self) -> SuccessorTable {
        self.successors
    }

    /// Returns the clusters in opening order.
    #[must_use]
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Returns each cell's cluster, `None` for blocked cells.
    #[must_use]
    pub fn assignments(&self) -> &[Option<ClusterId>] {
        &self.assignments
    }

    /// Counts the clusters.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }
}
