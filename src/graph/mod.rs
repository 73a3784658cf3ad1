pub mod geometric;

use std::{fmt::Debug, hash::Hash};
use num_traits::Float;

use crate::collections::FxIndexMap;
use crate::errors::{PathPlannerError, Result};


/// Attribute key used by `add_weighted_edge`
pub const DEFAULT_WEIGHT_KEY: &str = "weight";

/// Named numeric attributes on an edge
pub type EdgeAttrs<C> = FxIndexMap<String, C>;


/// Edge weight provider used by the incremental planners
/// N: Node - space on a graph
/// C: Cost of traversing an edge
///
/// Edges are treated as undirected: `neighbors` must be symmetric and
/// `set_edge_weight` is expected to be called for both directions.
pub trait WeightedGraph<N, C> {

    /// True if the node exists in the graph
    fn contains_node(&self, node: &N) -> bool;

    /// Nodes sharing an edge with `node`, empty for unknown nodes
    fn neighbors(&self, node: &N) -> Vec<N>;

    /// Weight of edge u -> v under attribute `key`
    /// None if there is no such edge, one if the edge exists without the attribute
    fn edge_weight(&self, u: &N, v: &N, key: &str) -> Option<C>;

    /// Overwrite the weight of an existing edge u -> v
    fn set_edge_weight(&mut self, u: &N, v: &N, key: &str, weight: C) -> Result<()>;
}

impl<N, C, G> WeightedGraph<N, C> for &mut G
where
    G: WeightedGraph<N, C> + ?Sized,
{
    fn contains_node(&self, node: &N) -> bool {
        (**self).contains_node(node)
    }

    fn neighbors(&self, node: &N) -> Vec<N> {
        (**self).neighbors(node)
    }

    fn edge_weight(&self, u: &N, v: &N, key: &str) -> Option<C> {
        (**self).edge_weight(u, v, key)
    }

    fn set_edge_weight(&mut self, u: &N, v: &N, key: &str, weight: C) -> Result<()> {
        (**self).set_edge_weight(u, v, key, weight)
    }
}


/// Undirected graph with named edge attributes
/// Adjacency is stored in both directions, attributes are mirrored
#[derive(Clone, Debug)]
pub struct UndirectedGraph<N, C> {
    adjacency: FxIndexMap<N, FxIndexMap<N, EdgeAttrs<C>>>,
}

impl<N, C> Default for UndirectedGraph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Float,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, C> UndirectedGraph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Float,
{

    pub fn new() -> Self {
        Self { adjacency: FxIndexMap::default() }
    }

    /// Add a node with no edges, no-op if it already exists
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Add an edge without attributes - it will cost one under any key
    pub fn add_edge(&mut self, u: N, v: N) {
        self.adjacency.entry(u.clone()).or_default().entry(v.clone()).or_default();
        self.adjacency.entry(v).or_default().entry(u).or_default();
    }

    /// Add an edge (or update it) with the default "weight" attribute
    pub fn add_weighted_edge(&mut self, u: N, v: N, weight: C) {
        self.add_edge(u.clone(), v.clone());
        self.mirror_attr(&u, &v, DEFAULT_WEIGHT_KEY, weight);
    }

    /// Set a named attribute on an existing edge
    pub fn set_edge_attr(&mut self, u: &N, v: &N, key: &str, value: C) -> Result<()> {
        if !self.contains_edge(u, v) {
            return Err(PathPlannerError::EdgeNotFound {
                from: format!("{u:?}"),
                to: format!("{v:?}"),
            });
        }
        self.mirror_attr(u, v, key, value);
        Ok(())
    }

    /// Remove an edge, returns its attributes if it existed
    pub fn remove_edge(&mut self, u: &N, v: &N) -> Option<EdgeAttrs<C>> {
        let attrs = self.adjacency.get_mut(u)?.shift_remove(v)?;
        if let Some(edges) = self.adjacency.get_mut(v) {
            edges.shift_remove(u);
        }
        Some(attrs)
    }

    pub fn contains_edge(&self, u: &N, v: &N) -> bool {
        self.adjacency.get(u).is_some_and(|edges| edges.contains_key(v))
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges, self loops count once
    pub fn edge_count(&self) -> usize {
        let mut loops = 0;
        let mut ends = 0;
        for (node, edges) in &self.adjacency {
            ends += edges.len();
            if edges.contains_key(node) {
                loops += 1;
            }
        }
        (ends - loops) / 2 + loops
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Edges as (u, v, attributes), each undirected edge reported once
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, &EdgeAttrs<C>)> {
        self.adjacency.iter().enumerate().flat_map(move |(i, (u, edges))| {
            edges.iter().filter_map(move |(v, attrs)| {
                // report from the endpoint inserted first
                let j = self.adjacency.get_index_of(v)?;
                (j >= i).then_some((u, v, attrs))
            })
        })
    }

    fn mirror_attr(&mut self, u: &N, v: &N, key: &str, value: C) {
        if let Some(attrs) = self.adjacency.get_mut(u).and_then(|edges| edges.get_mut(v)) {
            attrs.insert(key.to_string(), value);
        }
        if let Some(attrs) = self.adjacency.get_mut(v).and_then(|edges| edges.get_mut(u)) {
            attrs.insert(key.to_string(), value);
        }
    }
}

impl<N, C> WeightedGraph<N, C> for UndirectedGraph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Float,
{
    fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn neighbors(&self, node: &N) -> Vec<N> {
        self.adjacency
            .get(node)
            .map(|edges| edges.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn edge_weight(&self, u: &N, v: &N, key: &str) -> Option<C> {
        let attrs = self.adjacency.get(u)?.get(v)?;
        Some(attrs.get(key).copied().unwrap_or_else(C::one))
    }

    fn set_edge_weight(&mut self, u: &N, v: &N, key: &str, weight: C) -> Result<()> {
        let Some(attrs) = self.adjacency.get_mut(u).and_then(|edges| edges.get_mut(v)) else {
            return Err(PathPlannerError::EdgeNotFound {
                from: format!("{u:?}"),
                to: format!("{v:?}"),
            });
        };
        attrs.insert(key.to_string(), weight);
        Ok(())
    }
}
