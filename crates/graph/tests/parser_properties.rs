//! Property-based tests for the edge-list parser.
//!
//! Uses proptest to validate:
//! - Well-formed lines never warn and give one edge per distinct pair
//! - Every label appears exactly once as a node
//! - Malformed lines never abort the parse

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::collections::HashSet;

use edgeviz_graph::model::{EdgeGraph, EdgeWeightMap};
use edgeviz_graph::parser::{parse_into, WarningKind};
use proptest::prelude::*;

fn label() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,3}"
}

fn edge_line() -> impl Strategy<Value = (String, String, Option<i32>)> {
    (label(), label(), proptest::option::of(-50i32..50))
}

fn unordered(u: &str, v: &str) -> (String, String) {
    if u <= v {
        (u.to_string(), v.to_string())
    } else {
        (v.to_string(), u.to_string())
    }
}

proptest! {
    /// Property: edge count equals the number of distinct unordered pairs
    #[test]
    fn prop_well_formed_lines_become_edges(lines in prop::collection::vec(edge_line(), 1..30)) {
        let text: String = lines
            .iter()
            .map(|(u, v, w)| match w {
                Some(w) => format!("{u} {v} {w}\n"),
                None => format!("{u} {v}\n"),
            })
            .collect();

        let mut graph = EdgeGraph::new();
        let mut weights = EdgeWeightMap::new();
        let warnings = parse_into(&text, &mut graph, &mut weights);
        prop_assert!(warnings.is_ok(), "parse should not fail: {:?}", warnings);
        prop_assert!(warnings.map(|w| w.is_empty()).unwrap_or(false));

        let pairs: HashSet<(String, String)> =
            lines.iter().map(|(u, v, _)| unordered(u, v)).collect();
        prop_assert_eq!(graph.edge_count(), pairs.len());

        let labels: HashSet<&String> =
            lines.iter().flat_map(|(u, v, _)| [u, v]).collect();
        prop_assert_eq!(graph.node_count(), labels.len());
        let nodes: Vec<&String> = graph.nodes().collect();
        let unique: HashSet<&String> = nodes.iter().copied().collect();
        prop_assert_eq!(nodes.len(), unique.len());
    }

    /// Property: a malformed line only warns and never drops good lines
    #[test]
    fn prop_malformed_lines_only_warn(
        good in prop::collection::vec((label(), label()), 1..10),
        junk in prop::collection::vec(label(), 4..6),
        position in 0usize..10,
    ) {
        let mut lines: Vec<String> = good.iter().map(|(u, v)| format!("{u} {v}")).collect();
        let at = position.min(lines.len());
        lines.insert(at, junk.join(" "));
        let text = lines.join("\n");

        let mut graph = EdgeGraph::new();
        let mut weights = EdgeWeightMap::new();
        let warnings = parse_into(&text, &mut graph, &mut weights);
        prop_assert!(warnings.is_ok());
        let warnings = warnings.unwrap_or_default();

        prop_assert_eq!(warnings.len(), 1);
        prop_assert_eq!(warnings[0].kind, WarningKind::Malformed);
        prop_assert_eq!(warnings[0].line_number, at + 1);

        let pairs: HashSet<(String, String)> =
            good.iter().map(|(u, v)| unordered(u, v)).collect();
        prop_assert_eq!(graph.edge_count(), pairs.len());
    }
}
