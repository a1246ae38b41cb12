//! Edges keyed by their string id, in insertion order.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::arena::NodeArena;
use crate::path::EdgePath;
use crate::{Edge, Result};
use turbolizer_graph::{Geometry, NodeId};

#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    edges: IndexMap<String, Edge, FxBuildHasher>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `edge`, replacing (and returning) any edge with the same identity.
    pub fn insert<A: NodeArena>(&mut self, edge: Edge, graph: &A) -> Result<Option<Edge>> {
        let key = edge.string_id(graph)?;
        Ok(self.edges.insert(key, edge))
    }

    pub fn get(&self, string_id: &str) -> Option<&Edge> {
        self.edges.get(string_id)
    }

    pub fn get_mut(&mut self, string_id: &str) -> Option<&mut Edge> {
        self.edges.get_mut(string_id)
    }

    pub fn contains(&self, string_id: &str) -> bool {
        self.edges.contains_key(string_id)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Edge)> {
        self.edges.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Edge> {
        self.edges.values_mut()
    }

    /// Edges whose own flag and both endpoints are visible, in insertion order.
    pub fn visible<A: NodeArena>(&self, graph: &A) -> Result<Vec<&Edge>> {
        let mut out = Vec::new();
        for edge in self.edges.values() {
            if edge.is_visible(graph)? {
                out.push(edge);
            }
        }
        Ok(out)
    }

    pub fn back_edges<A: NodeArena>(&self, graph: &A) -> Result<Vec<&Edge>> {
        let mut out = Vec::new();
        for edge in self.edges.values() {
            if edge.is_back_edge(graph)? {
                out.push(edge);
            }
        }
        Ok(out)
    }

    /// Edges feeding `target`, in insertion order.
    pub fn edges_into(&self, target: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges.values().filter(move |e| e.target() == target)
    }

    /// Highest lane number handed out by layout; sizes the back-edge margin.
    pub fn max_back_edge_number(&self) -> u32 {
        self.edges
            .values()
            .map(|e| e.back_edge_number)
            .max()
            .unwrap_or(0)
    }

    /// Routes every visible edge.
    pub fn paths<A: NodeArena>(
        &self,
        graph: &A,
        geometry: &Geometry,
        show_types: bool,
    ) -> Result<Vec<(&str, EdgePath)>> {
        let mut out = Vec::new();
        for (key, edge) in &self.edges {
            if !edge.is_visible(graph)? {
                continue;
            }
            out.push((key.as_str(), edge.generate_path(graph, geometry, show_types)?));
        }
        Ok(out)
    }
}
