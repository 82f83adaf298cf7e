//! Cluster formation state machine.
//!
//! `Formation` owns every piece of mutable state for one run: the unassigned
//! flags, the successor pointers, the candidate queue, and the clusters
//! formed so far. Nothing outlives [`Formation::run`].

use tracing::{debug, trace};

use crate::{
    garden::{Garden, Load},
    policy::{CandidateQueue, PolicySet},
    result::{Cluster, ClusterId, RakingPlan},
};

pub(super) struct Formation<'g, G: Garden + ?Sized> {
    garden: &'g G,
    policies: PolicySet,
    capacity: Load,
    unassigned: Vec<bool>,
    remaining: usize,
    successors: Vec<Option<usize>>,
    queue: CandidateQueue,
    clusters: Vec<Cluster>,
}

impl<'g, G: Garden + ?Sized> Formation<'g, G> {
    pub(super) fn new(garden: &'g G, policies: PolicySet) -> Self {
        let cell_count = garden.cell_count();
        let unassigned: Vec<bool> = (0..cell_count)
            .map(|cell| garden.is_workable(cell))
            .collect();
        let remaining = unassigned.iter().filter(|&&free| free).count();
        Self {
            garden,
            policies,
            capacity: garden.capacity(),
            unassigned,
            remaining,
            successors: vec![None; cell_count],
            queue: CandidateQueue::new(policies.queue_discipline()),
            clusters: Vec::new(),
        }
    }

    pub(super) fn run(mut self) -> RakingPlan {
        while let Some(hub) = self.open_cluster() {
            self.grow(hub);
        }
        RakingPlan::new(self.policies, self.capacity, self.successors, self.clusters)
    }

    /// Picks a hub, assigns it to itself, and starts a fresh cluster.
    fn open_cluster(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let hub = self
            .policies
            .hub_selection()
            .select(self.garden, &self.unassigned)?;
        self.assign(hub, hub);

        let load = self.load(hub);
        let id = ClusterId::new(u64::try_from(self.clusters.len()).unwrap_or(u64::MAX));
        self.clusters.push(Cluster::open(id, hub, load));
        self.queue.clear();
        debug!(cluster = id.get(), hub, load, "opened cluster");
        Some(hub)
    }

    /// Expands queued cells until the queue drains or no cell is left.
    fn grow(&mut self, hub: usize) {
        let mut accumulated = self.load(hub);
        let mut node = hub;
        while self.remaining > 0 {
            accumulated = self.expand(node, accumulated);
            match self.queue.dequeue() {
                Some(next) => node = next,
                None => break,
            }
        }
    }

    /// Offers the unassigned neighbours of `node` to the open cluster and
    /// returns the updated accumulated load.
    ///
    /// Scanning stops as soon as an acceptance fills the cluster exactly,
    /// even if a later candidate has zero load.
    fn expand(&mut self, node: usize, mut accumulated: Load) -> Load {
        let candidates = self
            .policies
            .candidate_order()
            .candidates(self.garden, node, &self.unassigned);
        for cell in candidates {
            let Some(trial) = accumulated
                .checked_add(self.load(cell))
                .filter(|&sum| sum <= self.capacity)
            else {
                trace!(node, cell, accumulated, "candidate rejected");
                continue;
            };
            self.queue.enqueue(cell);
            self.assign(cell, node);
            accumulated = trial;
            if let Some(cluster) = self.clusters.last_mut() {
                cluster.accept(cell, accumulated);
            }
            if accumulated == self.capacity {
                break;
            }
        }
        accumulated
    }

    fn assign(&mut self, cell: usize, successor: usize) {
        if let Some(free) = self.unassigned.get_mut(cell)
            && *free
        {
            *free = false;
            self.remaining -= 1;
        }
        if let Some(slot) = self.successors.get_mut(cell) {
            *slot = Some(successor);
        }
    }

    fn load(&self, cell: usize) -> Load {
        self.garden.load(cell).unwrap_or(0)
    }
}
