//! Hub selection: which unassigned cell opens the next cluster.

use std::{cmp::Reverse, fmt, str::FromStr};

use crate::{error::ConfigurationError, garden::Garden};

/// Policy for picking the hub of a new cluster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HubSelection {
    /// North-west rule: the smallest unassigned index.
    #[default]
    Nw,
    /// The unassigned cell with the largest load.
    LmMax,
    /// The unassigned cell closest to the sink.
    KpMin,
}

impl HubSelection {
    /// Returns the canonical policy name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nw => "NW",
            Self::LmMax => "LM_max",
            Self::KpMin => "KP_min",
        }
    }

    /// Returns whether the policy reads distances to the sink.
    #[must_use]
    pub const fn needs_sink_distance(self) -> bool {
        matches!(self, Self::KpMin)
    }

    /// Picks a hub among the cells flagged in `unassigned`.
    ///
    /// Ties on the metric go to the smallest index. Returns `None` only when
    /// no cell is flagged.
    pub(crate) fn select<G: Garden + ?Sized>(
        self,
        garden: &G,
        unassigned: &[bool],
    ) -> Option<usize> {
        let mut remaining = unassigned
            .iter()
            .enumerate()
            .filter_map(|(cell, &free)| free.then_some(cell));
        let load = |cell: usize| garden.load(cell).unwrap_or(0);
        let distance = |cell: usize| garden.sink_distance(cell).unwrap_or(u64::MAX);
        match self {
            Self::Nw => remaining.next(),
            Self::LmMax => remaining.min_by_key(|&cell| (Reverse(load(cell)), cell)),
            Self::KpMin => remaining.min_by_key(|&cell| (distance(cell), cell)),
        }
    }
}

impl fmt::Display for HubSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HubSelection {
    type Err = ConfigurationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "NW" => Ok(Self::Nw),
            "LM_max" => Ok(Self::LmMax),
            "KP_min" => Ok(Self::KpMin),
            other => Err(ConfigurationError::UnknownHubSelection {
                name: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VecGarden;
    use rstest::rstest;

    fn garden() -> VecGarden {
        VecGarden::builder("hubs")
            .cells([2, 5, 1, 5, 0])
            .sink_distances(vec![3, 1, 2, 1, 4])
            .build()
            .expect("garden is valid")
    }

    #[rstest]
    #[case::nw_smallest_index(HubSelection::Nw, [true; 5], Some(0))]
    #[case::nw_skips_assigned(HubSelection::Nw, [false, false, true, true, true], Some(2))]
    #[case::lm_max_tie_goes_low(HubSelection::LmMax, [true; 5], Some(1))]
    #[case::lm_max_after_removal(HubSelection::LmMax, [true, false, true, true, true], Some(3))]
    #[case::kp_min_tie_goes_low(HubSelection::KpMin, [true; 5], Some(1))]
    #[case::kp_min_after_removal(HubSelection::KpMin, [true, false, true, false, true], Some(2))]
    #[case::nothing_left(HubSelection::LmMax, [false; 5], None)]
    fn selects_expected_hub(
        #[case] policy: HubSelection,
        #[case] unassigned: [bool; 5],
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(policy.select(&garden(), &unassigned), expected);
    }

    #[rstest]
    #[case("NW", HubSelection::Nw)]
    #[case("LM_max", HubSelection::LmMax)]
    #[case("KP_min", HubSelection::KpMin)]
    fn parses_and_renders_canonical_names(#[case] name: &str, #[case] expected: HubSelection) {
        let parsed: HubSelection = name.parse().expect("name is canonical");
        assert_eq!(parsed, expected);
        assert_eq!(parsed.to_string(), name);
    }

    #[rstest]
    #[case("nw")]
    #[case("LM_MAX")]
    #[case("LM_min")]
    #[case("")]
    fn rejects_other_names(#[case] name: &str) {
        let err = name
            .parse::<HubSelection>()
            .expect_err("name is not a hub policy");
        assert_eq!(
            err,
            ConfigurationError::UnknownHubSelection {
                name: name.to_owned()
            }
        );
    }
}
