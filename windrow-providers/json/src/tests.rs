//! Tests covering document validation and the `Garden` view.
use rstest::rstest;
use windrow_core::Garden;

use super::{JsonGardenError, JsonGardenProvider};

fn parse(doc: &str) -> Result<JsonGardenProvider, JsonGardenError> {
    JsonGardenProvider::try_from_reader("doc", doc.as_bytes())
}

#[rstest]
fn blocked_flag_and_missing_load_both_block() {
    let garden = parse(
        r#"{"capacity": 4, "cells": [
            {"load": 2, "neighbours": [3]},
            {"blocked": true, "load": 7},
            {},
            {"load": 0, "neighbours": [0], "sink_distance": 5}
        ]}"#,
    )
    .expect("document is valid");

    assert_eq!(garden.name(), "doc");
    assert_eq!(garden.capacity(), 4);
    assert_eq!(garden.load(0), Some(2));
    assert_eq!(garden.load(1), None);
    assert_eq!(garden.load(2), None);
    assert_eq!(garden.load(3), Some(0));
    assert_eq!(garden.workable_count(), 2);
    assert_eq!(garden.sink_distance(0), None);
    assert_eq!(garden.sink_distance(3), Some(5));
}

#[rstest]
fn neighbours_are_sorted_and_deduplicated() {
    let garden = parse(
        r#"{"capacity": 1, "cells": [
            {"load": 1, "neighbours": [2, 1, 2]},
            {"load": 1, "neighbours": [0]},
            {"load": 1, "neighbours": [0]}
        ]}"#,
    )
    .expect("document is valid");
    assert_eq!(garden.neighbours(0), [1, 2]);
    assert!(garden.neighbours(9).is_empty());
}

#[rstest]
fn capacity_override_replaces_document_value() {
    let garden = parse(r#"{"capacity": 1, "cells": [{"load": 1}]}"#)
        .expect("document is valid")
        .with_capacity(9);
    assert_eq!(garden.capacity(), 9);
}

#[rstest]
#[case::no_cells(r#"{"capacity": 1, "cells": []}"#)]
fn empty_documents_are_rejected(#[case] doc: &str) {
    assert!(matches!(parse(doc), Err(JsonGardenError::NoCells)));
}

#[rstest]
#[case::not_json("capacity: 1")]
#[case::missing_capacity(r#"{"cells": [{"load": 1}]}"#)]
#[case::negative_load(r#"{"capacity": 1, "cells": [{"load": -1}]}"#)]
#[case::unknown_field(r#"{"capacity": 1, "cells": [{"load": 1, "weight": 2}]}"#)]
fn malformed_documents_report_json_errors(#[case] doc: &str) {
    assert!(matches!(parse(doc), Err(JsonGardenError::Json(_))));
}

#[rstest]
fn out_of_range_neighbours_are_rejected() {
    let err = parse(r#"{"capacity": 1, "cells": [{"load": 1, "neighbours": [4]}]}"#)
        .expect_err("neighbour 4 does not exist");
    assert!(matches!(
        err,
        JsonGardenError::NeighbourOutOfRange {
            cell: 0,
            neighbour: 4,
            cell_count: 1
        }
    ));
}

#[rstest]
fn self_loops_are_rejected() {
    let err = parse(r#"{"capacity": 1, "cells": [{"load": 1, "neighbours": [0]}]}"#)
        .expect_err("self loop");
    assert!(matches!(err, JsonGardenError::SelfLoop { cell: 0 }));
}

#[rstest]
fn blocked_cells_cannot_list_neighbours() {
    let err = parse(
        r#"{"capacity": 1, "cells": [{"load": 1}, {"blocked": true, "neighbours": [0]}]}"#,
    )
    .expect_err("blocked cell with neighbours");
    assert!(matches!(err, JsonGardenError::BlockedWithNeighbours { cell: 1 }));
}

#[rstest]
fn edges_into_blocked_cells_are_rejected() {
    let err = parse(r#"{"capacity": 1, "cells": [{"load": 1, "neighbours": [1]}, {}]}"#)
        .expect_err("edge to blocked cell");
    assert!(matches!(
        err,
        JsonGardenError::EdgeToBlocked {
            cell: 0,
            neighbour: 1
        }
    ));
}

#[rstest]
fn one_sided_edges_are_rejected() {
    let err = parse(
        r#"{"capacity": 1, "cells": [{"load": 1, "neighbours": [1]}, {"load": 1}]}"#,
    )
    .expect_err("asymmetric adjacency");
    assert!(matches!(
        err,
        JsonGardenError::Asymmetric {
            cell: 0,
            neighbour: 1
        }
    ));
}
