use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::errors::{GraphError, Result};
use crate::graph::Graph;
use crate::types::GraphPath;

/// Performs read-only traversals over a [`Graph`].
///
/// Every call allocates its own visited set and frontier, so a single
/// `GraphTraverser` (or several sharing the same graph) can be reused freely
/// as long as the graph is not mutated in between.
pub struct GraphTraverser<'a> {
    graph: &'a Graph,
}

impl<'a> GraphTraverser<'a> {
    /// Creates a new `GraphTraverser` over the given graph.
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Performs a depth-first traversal starting from `start`.
    ///
    /// Returns nodes in first-visit order. Among unvisited neighbors the
    /// smallest id is always explored first, so a tree is walked in
    /// ascending child order before backtracking.
    pub fn dfs(&self, start: &str) -> Result<Vec<String>> {
        self.ensure_node(start)?;

        let mut visited: HashSet<&str> = HashSet::new();
        let mut order: Vec<String> = Vec::new();
        let mut stack: Vec<&str> = vec![start];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            order.push(current.to_string());

            // Pushed in descending order so the smallest is popped next.
            for neighbor in self.sorted_neighbors(current).rev() {
                if !visited.contains(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        debug!(start, visited = order.len(), "dfs complete");
        Ok(order)
    }

    /// Finds a path from `start` to `goal` along the DFS visitation tree.
    ///
    /// The path is not necessarily the shortest. Returns `None` if `goal` is
    /// unreachable or not in the graph.
    pub fn dfs_path(&self, start: &str, goal: &str) -> Result<Option<GraphPath>> {
        self.ensure_node(start)?;
        if start == goal {
            return Ok(Some(vec![start.to_string()]));
        }

        let mut visited: HashSet<&str> = HashSet::new();
        // Each frontier entry carries the path that led to it.
        let mut stack: Vec<(&str, Vec<&str>)> = vec![(start, vec![start])];

        while let Some((current, path)) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            if current == goal {
                return Ok(Some(path.into_iter().map(str::to_string).collect()));
            }

            for neighbor in self.sorted_neighbors(current).rev() {
                if !visited.contains(neighbor) {
                    let mut next = path.clone();
                    next.push(neighbor);
                    stack.push((neighbor, next));
                }
            }
        }

        Ok(None)
    }

    /// Performs a breadth-first traversal starting from `start`.
    ///
    /// Nodes are returned in non-decreasing distance from `start`. Each
    /// dequeued node enqueues its unvisited neighbors in ascending order.
    pub fn bfs(&self, start: &str) -> Result<Vec<String>> {
        self.ensure_node(start)?;

        let mut visited: HashSet<&str> = HashSet::new();
        let mut order: Vec<String> = Vec::new();
        let mut queue: VecDeque<&str> = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            order.push(current.to_string());

            for neighbor in self.sorted_neighbors(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        debug!(start, visited = order.len(), "bfs complete");
        Ok(order)
    }

    /// Finds the shortest path (fewest edges) from `start` to `goal` using BFS.
    ///
    /// Each node's predecessor is fixed when it is first discovered, so among
    /// several shortest paths the one found through the smallest neighbors
    /// wins. Returns `None` if `goal` is unreachable or not in the graph.
    pub fn bfs_path(&self, start: &str, goal: &str) -> Result<Option<GraphPath>> {
        self.ensure_node(start)?;
        if start == goal {
            return Ok(Some(vec![start.to_string()]));
        }
        if !self.graph.has_node(goal) {
            return Ok(None);
        }

        // parent_map: child -> node it was discovered from
        let mut parent_map: HashMap<&str, &str> = HashMap::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        let mut found = false;

        'search: while let Some(current) = queue.pop_front() {
            for neighbor in self.sorted_neighbors(current) {
                if !visited.insert(neighbor) {
                    continue;
                }
                parent_map.insert(neighbor, current);
                if neighbor == goal {
                    found = true;
                    break 'search;
                }
                queue.push_back(neighbor);
            }
        }

        if !found {
            return Ok(None);
        }

        // Reconstruct path from goal back to start.
        let mut path: Vec<String> = vec![goal.to_string()];
        let mut current = goal;
        while current != start {
            match parent_map.get(current) {
                Some(parent) => {
                    path.push(parent.to_string());
                    current = *parent;
                }
                None => return Ok(None),
            }
        }
        path.reverse();

        Ok(Some(path))
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Fails with `NodeNotFound` unless `id` is in the graph.
    fn ensure_node(&self, id: &str) -> Result<()> {
        if self.graph.has_node(id) {
            Ok(())
        } else {
            Err(GraphError::node_not_found(id))
        }
    }

    /// Ascending neighbors of `id`, borrowed from the graph.
    fn sorted_neighbors(&self, id: &str) -> impl DoubleEndedIterator<Item = &'a str> {
        self.graph
            .neighbor_set(id)
            .into_iter()
            .flat_map(|ns| ns.iter().map(String::as_str))
    }
}
