//! Shared test utilities for `windrow-core`.

use proptest::test_runner::Config as ProptestConfig;
use windrow_test_support::proptest_profile::ProptestRunProfile;

use crate::{CandidateOrder, HubSelection, Load, PolicySet, QueueDiscipline, VecGarden};

/// Builds a proptest configuration from the shared run profile.
///
/// Keeps property suites aligned on the same `PROPTEST_CASES` and
/// `WINDROW_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Every legal policy triple, in a fixed order.
pub(crate) fn all_policy_sets() -> Vec<PolicySet> {
    let hubs = [HubSelection::Nw, HubSelection::LmMax, HubSelection::KpMin];
    let orders = [CandidateOrder::Nw, CandidateOrder::LmMax, CandidateOrder::LmMin];
    let queues = [QueueDiscipline::Fifo, QueueDiscipline::Lifo];
    hubs.into_iter()
        .flat_map(|hub| {
            orders.into_iter().flat_map(move |order| {
                queues
                    .into_iter()
                    .map(move |queue| PolicySet::new(hub, order, queue))
            })
        })
        .collect()
}

/// Builds a rectangular garden with four-neighbour adjacency.
///
/// `loads` is row-major; `None` marks a blocked cell. The sink sits at the
/// top-left corner and distances are Manhattan distances from it, so every
/// cell (blocked ones included) has one.
pub(crate) fn grid_garden(
    rows: usize,
    cols: usize,
    loads: &[Option<Load>],
    capacity: Load,
) -> VecGarden {
    assert_eq!(loads.len(), rows * cols, "one load per grid cell");
    let name = format!("grid{rows}x{cols}");
    let mut builder = VecGarden::builder(name).capacity(capacity);
    let mut distances = Vec::with_capacity(loads.len());
    for (index, load) in loads.iter().enumerate() {
        builder = match load {
            Some(load) => builder.cell(*load),
            None => builder.blocked(),
        };
        let (row, col) = (index / cols, index % cols);
        distances.push((row + col) as u64);
    }
    for (index, load) in loads.iter().enumerate() {
        if load.is_none() {
            continue;
        }
        let col = index % cols;
        let right = index + 1;
        if col + 1 < cols && loads[right].is_some() {
            builder = builder.edge(index, right);
        }
        let below = index + cols;
        if below < loads.len() && loads[below].is_some() {
            builder = builder.edge(index, below);
        }
    }
    builder
        .sink_distances(distances)
        .build()
        .expect("grid edges only join workable cells")
}

/// Builds a path `0 - 1 - ... - n-1` over the given loads.
pub(crate) fn path_garden(loads: &[Load], capacity: Load) -> VecGarden {
    let options: Vec<Option<Load>> = loads.iter().copied().map(Some).collect();
    grid_garden(1, loads.len(), &options, capacity)
}
