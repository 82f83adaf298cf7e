//! Windrow core library.
//!
//! Partitions the workable cells of a garden into capacity-bounded clusters
//! one cluster at a time and records, for every cell, the neighbour its
//! material is raked toward.
//!
//! # Tie-breaking
//!
//! Every policy that ranks cells by a metric (load or distance to the sink)
//! resolves equal metrics in favour of the lower cell index, so two runs over
//! the same garden with the same [`PolicySet`] produce identical tables.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod garden;
mod planner;
mod policy;
mod result;
mod successor;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::PlannerBuilder,
    error::{ConfigurationError, ConfigurationErrorCode, PlanError, PlanErrorCode, Result},
    garden::{Garden, Load, VecGarden, VecGardenBuilder, VecGardenError},
    planner::Planner,
    policy::{CandidateOrder, CandidateQueue, HubSelection, PolicySet, QueueDiscipline},
    result::{Cluster, ClusterId, RakingPlan},
    successor::{Successor, SuccessorTable},
};
