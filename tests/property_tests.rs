//! Property-based tests for graphwalk using proptest.
//!
//! These tests check the graph and traversal invariants over randomly
//! generated graphs.

use std::collections::{BTreeSet, HashMap, VecDeque};

use proptest::prelude::*;

use graphwalk::graph::{bfs, bfs_path, dfs, dfs_path, is_connected, reachable_from, Graph};
use graphwalk::io::{dict_to_graph, graph_to_dict};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Strategy for a small node id drawn from a fixed alphabet, so that random
/// edges frequently share endpoints.
fn arb_node_id() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"])
        .prop_map(str::to_string)
}

/// Strategy for a graph with some isolated nodes and some edges.
fn arb_graph() -> impl Strategy<Value = Graph> {
    (
        prop::collection::vec(arb_node_id(), 0..5),
        prop::collection::vec((arb_node_id(), arb_node_id()), 0..20),
    )
        .prop_map(|(nodes, edges)| {
            let mut g = Graph::new();
            for n in &nodes {
                g.add_node(n);
            }
            for (a, b) in &edges {
                g.add_edge(a, b);
            }
            g
        })
}

/// Reference BFS distances from `start`, independent of the crate's traversals.
fn distances(g: &Graph, start: &str) -> HashMap<String, usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start.to_string(), 0);
    queue.push_back(start.to_string());
    while let Some(current) = queue.pop_front() {
        let d = dist[&current];
        for n in g.neighbors(&current).unwrap() {
            if !dist.contains_key(&n) {
                dist.insert(n.clone(), d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

fn is_valid_path(g: &Graph, path: &[String], start: &str, goal: &str) -> bool {
    path.first().map(String::as_str) == Some(start)
        && path.last().map(String::as_str) == Some(goal)
        && path.windows(2).all(|w| g.has_edge(&w[0], &w[1]))
}

// ---------------------------------------------------------------------------
// Graph invariants
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn edges_are_symmetric(g in arb_graph()) {
        for a in g.nodes() {
            for b in g.nodes() {
                prop_assert_eq!(g.has_edge(&a, &b), g.has_edge(&b, &a));
            }
        }
    }

    #[test]
    fn neighbors_strictly_ascending(g in arb_graph()) {
        for n in g.nodes() {
            let ns = g.neighbors(&n).unwrap();
            prop_assert!(ns.windows(2).all(|w| w[0] < w[1]), "{:?}", ns);
            for m in &ns {
                prop_assert!(g.has_node(m), "dangling neighbor {}", m);
            }
        }
    }

    #[test]
    fn edges_normalized_sorted_unique(g in arb_graph()) {
        let edges = g.edges();
        prop_assert!(edges.iter().all(|(a, b)| a <= b));
        prop_assert!(edges.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(edges.len(), g.edge_count());
    }

    #[test]
    fn remove_node_clears_adjacency(g in arb_graph(), victim in arb_node_id()) {
        let mut g = g;
        let existed = g.has_node(&victim);
        prop_assert_eq!(g.remove_node(&victim).is_ok(), existed);
        prop_assert!(!g.has_node(&victim));
        for n in g.nodes() {
            prop_assert!(!g.neighbors(&n).unwrap().contains(&victim));
        }
    }

    // -----------------------------------------------------------------------
    // Traversal invariants
    // -----------------------------------------------------------------------

    #[test]
    fn traversals_visit_reachable_set_once(g in arb_graph()) {
        for start in g.nodes() {
            let reachable = reachable_from(&g, &start).unwrap();
            for order in [dfs(&g, &start).unwrap(), bfs(&g, &start).unwrap()] {
                prop_assert_eq!(order.first(), Some(&start));
                let visited: BTreeSet<String> = order.iter().cloned().collect();
                prop_assert_eq!(visited.len(), order.len(), "duplicate visit");
                prop_assert_eq!(&visited, &reachable);
            }
        }
    }

    #[test]
    fn bfs_visits_by_distance(g in arb_graph()) {
        for start in g.nodes() {
            let dist = distances(&g, &start);
            let order = bfs(&g, &start).unwrap();
            prop_assert!(order.windows(2).all(|w| dist[&w[0]] <= dist[&w[1]]));
        }
    }

    #[test]
    fn bfs_path_is_shortest(g in arb_graph()) {
        for start in g.nodes() {
            let dist = distances(&g, &start);
            for goal in g.nodes() {
                match bfs_path(&g, &start, &goal).unwrap() {
                    Some(path) => {
                        prop_assert!(is_valid_path(&g, &path, &start, &goal));
                        prop_assert_eq!(Some(&(path.len() - 1)), dist.get(&goal));
                    }
                    None => prop_assert!(!dist.contains_key(&goal)),
                }
            }
        }
    }

    #[test]
    fn dfs_path_is_valid(g in arb_graph()) {
        for start in g.nodes() {
            let reachable = reachable_from(&g, &start).unwrap();
            for goal in g.nodes() {
                match dfs_path(&g, &start, &goal).unwrap() {
                    Some(path) => {
                        prop_assert!(is_valid_path(&g, &path, &start, &goal));
                        let distinct: BTreeSet<&String> = path.iter().collect();
                        prop_assert_eq!(distinct.len(), path.len(), "path revisits a node");
                    }
                    None => prop_assert!(!reachable.contains(&goal)),
                }
            }
        }
    }

    #[test]
    fn connected_iff_smallest_reaches_all(g in arb_graph()) {
        let expected = match g.nodes().first() {
            None => true,
            Some(root) => reachable_from(&g, root).unwrap().len() == g.size(),
        };
        prop_assert_eq!(is_connected(&g), expected);
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    #[test]
    fn dict_roundtrip_preserves_graph(g in arb_graph()) {
        let value = serde_json::to_value(graph_to_dict(&g)).unwrap();
        let back = dict_to_graph(&value).unwrap();
        prop_assert_eq!(back.nodes(), g.nodes());
        prop_assert_eq!(back.edges(), g.edges());
    }
}
