//! Policies steering cluster formation.
//!
//! A [`PolicySet`] bundles the three independent choices: how a new cluster's
//! hub is picked, in which order a node's unassigned neighbours are offered
//! to the cluster, and whether accepted cells are expanded breadth-first or
//! depth-first.

mod hub;
mod order;
mod queue;

use std::fmt;

pub use hub::HubSelection;
pub use order::CandidateOrder;
pub use queue::{CandidateQueue, QueueDiscipline};

use crate::error::ConfigurationError;

/// Validated policy triple.
///
/// # Examples
/// ```
/// use windrow_core::{CandidateOrder, HubSelection, PolicySet, QueueDiscipline};
///
/// let policies = PolicySet::from_names("KP_min", "LM_max", "LIFO")?;
/// assert_eq!(policies.hub_selection(), HubSelection::KpMin);
/// assert_eq!(policies.candidate_order(), CandidateOrder::LmMax);
/// assert_eq!(policies.queue_discipline(), QueueDiscipline::Lifo);
/// assert_eq!(policies.to_string(), "KP_min/LM_max/LIFO");
/// # Ok::<(), windrow_core::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PolicySet {
    hub_selection: HubSelection,
    candidate_order: CandidateOrder,
    queue_discipline: QueueDiscipline,
}

impl PolicySet {
    /// Bundles already-parsed policies.
    #[must_use]
    pub const fn new(
        hub_selection: HubSelection,
        candidate_order: CandidateOrder,
        queue_discipline: QueueDiscipline,
    ) -> Self {
        Self {
            hub_selection,
            candidate_order,
            queue_discipline,
        }
    }

    /// Parses all three policy names.
    ///
    /// # Errors
    /// Returns the [`ConfigurationError`] of the first name, in argument
    /// order, that is not an allowed value.
    pub fn from_names(
        hub_selection: &str,
        candidate_order: &str,
        queue_discipline: &str,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::new(
            hub_selection.parse()?,
            candidate_order.parse()?,
            queue_discipline.parse()?,
        ))
    }

    /// Returns the hub selection policy.
    #[must_use]
    pub const fn hub_selection(&self) -> HubSelection {
        self.hub_selection
    }

    /// Returns the candidate order policy.
    #[must_use]
    pub const fn candidate_order(&self) -> CandidateOrder {
        self.candidate_order
    }

    /// Returns the queue discipline.
    #[must_use]
    pub const fn queue_discipline(&self) -> QueueDiscipline {
        self.queue_discipline
    }
}

impl fmt::Display for PolicySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.hub_selection, self.candidate_order, self.queue_discipline
        )
    }
}
