//! Builder utilities for configuring cluster formation.
//!
//! Exposes the policy selection surface used before constructing [`Planner`]
//! instances.

use crate::{
    Result,
    planner::Planner,
    policy::{CandidateOrder, HubSelection, PolicySet, QueueDiscipline},
};

/// Configures and constructs [`Planner`] instances.
///
/// # Examples
/// ```
/// use windrow_core::{HubSelection, PlannerBuilder, QueueDiscipline};
///
/// let planner = PlannerBuilder::new()
///     .with_hub_selection(HubSelection::LmMax)
///     .with_queue_discipline(QueueDiscipline::Lifo)
///     .build();
/// assert_eq!(planner.policies().to_string(), "LM_max/NW/LIFO");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    policies: PolicySet,
}

impl PlannerBuilder {
    /// Creates a builder populated with the default `NW/NW/FIFO` policies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from policy names, failing before any garden is
    /// touched when a name is not recognised.
    ///
    /// # Errors
    /// Returns [`crate::PlanError::Configuration`] for unknown names.
    ///
    /// # Examples
    /// ```
    /// use windrow_core::{PlanError, PlannerBuilder};
    ///
    /// let builder = PlannerBuilder::from_names("KP_min", "LM_min", "FIFO")?;
    /// assert_eq!(builder.policies().to_string(), "KP_min/LM_min/FIFO");
    ///
    /// let err = PlannerBuilder::from_names("NW", "NW", "deque").unwrap_err();
    /// assert!(matches!(err, PlanError::Configuration(_)));
    /// # Ok::<(), PlanError>(())
    /// ```
    pub fn from_names(
        hub_selection: &str,
        candidate_order: &str,
        queue_discipline: &str,
    ) -> Result<Self> {
        let policies = PolicySet::from_names(hub_selection, candidate_order, queue_discipline)?;
        Ok(Self::new().with_policies(policies))
    }

    /// Replaces all three policies at once.
    #[must_use]
    pub fn with_policies(mut self, policies: PolicySet) -> Self {
        self.policies = policies;
        self
    }

    /// Overrides the hub selection policy.
    #[must_use]
    pub fn with_hub_selection(mut self, hub_selection: HubSelection) -> Self {
        self.policies = PolicySet::new(
            hub_selection,
            self.policies.candidate_order(),
            self.policies.queue_discipline(),
        );
        self
    }

    /// Overrides the candidate order policy.
    #[must_use]
    pub fn with_candidate_order(mut self, candidate_order: CandidateOrder) -> Self {
        self.policies = PolicySet::new(
            self.policies.hub_selection(),
            candidate_order,
            self.policies.queue_discipline(),
        );
        self
    }

    /// Overrides the queue discipline.
    #[must_use]
    pub fn with_queue_discipline(mut self, queue_discipline: QueueDiscipline) -> Self {
        self.policies = PolicySet::new(
            self.policies.hub_selection(),
            self.policies.candidate_order(),
            queue_discipline,
        );
        self
    }

    /// Returns the currently configured policies.
    #[must_use]
    pub fn policies(&self) -> PolicySet {
        self.policies
    }

    /// Constructs the [`Planner`].
    #[must_use]
    pub fn build(self) -> Planner {
        Planner::new(self.policies)
    }
}
