//! Node arena plus the global extents that edge routing reads.

use rustc_hash::FxHashMap;
use std::ops::{Index, IndexMut};

use crate::{Error, GNode, Geometry, NodeId, Result};

/// Bounding box of the visible graph content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Extents {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            max_x: 1.0,
            min_y: 0.0,
            max_y: 1.0,
        }
    }
}

impl Extents {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<GNode>,
    node_index: FxHashMap<u32, NodeId>,
    max_graph_node_x: f64,
    extents: Extents,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: FxHashMap::default(),
            max_graph_node_x: 1.0,
            extents: Extents::default(),
        }
    }

    pub fn add_node(&mut self, node: GNode) -> Result<NodeId> {
        if self.node_index.contains_key(&node.id) {
            return Err(Error::DuplicateNode { id: node.id });
        }
        let handle = NodeId::new(self.nodes.len());
        self.node_index.insert(node.id, handle);
        self.nodes.push(node);
        Ok(handle)
    }

    pub fn node(&self, handle: NodeId) -> Option<&GNode> {
        self.nodes.get(handle.index())
    }

    pub fn node_mut(&mut self, handle: NodeId) -> Option<&mut GNode> {
        self.nodes.get_mut(handle.index())
    }

    /// Resolves an IR node id to its arena handle.
    pub fn handle(&self, id: u32) -> Result<NodeId> {
        self.node_index
            .get(&id)
            .copied()
            .ok_or(Error::UnknownNode { id })
    }

    pub fn node_by_id(&self, id: u32) -> Option<&GNode> {
        self.node_index.get(&id).map(|&h| &self.nodes[h.index()])
    }

    pub fn has_node(&self, id: u32) -> bool {
        self.node_index.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &GNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, n)| (NodeId::new(idx), n))
    }

    pub fn for_each_node_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(NodeId, &mut GNode),
    {
        for (idx, n) in self.nodes.iter_mut().enumerate() {
            f(NodeId::new(idx), n);
        }
    }

    /// Rightmost extent of the node boxes, as of the last [`Graph::update_extents`] call.
    pub fn max_graph_node_x(&self) -> f64 {
        self.max_graph_node_x
    }

    /// Overrides the node extent, for callers that track it in their own layout pass.
    pub fn set_max_graph_node_x(&mut self, x: f64) {
        self.max_graph_node_x = x;
    }

    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Recomputes the bounding box over visible nodes.
    ///
    /// The right edge is widened by one lane per back edge so back-edge routes stay inside the
    /// box. Vertical bounds are padded by one input width on each side for the port bubbles and
    /// approach runs.
    pub fn update_extents(
        &mut self,
        geometry: &Geometry,
        show_types: bool,
        max_back_edge_number: u32,
    ) -> Extents {
        let mut extents = Extents::default();
        let mut max_node_x: f64 = 1.0;
        for node in self.nodes.iter().filter(|n| n.visible) {
            extents.min_x = extents.min_x.min(node.x);
            max_node_x = max_node_x.max(node.x + node.total_node_width(geometry));
            extents.min_y = extents.min_y.min(node.y - geometry.node_input_width);
            extents.max_y = extents
                .max_y
                .max(node.y + node.node_height(show_types) + geometry.node_input_width);
        }
        extents.max_x =
            max_node_x + f64::from(max_back_edge_number) * geometry.minimum_edge_separation;

        tracing::debug!(
            max_graph_node_x = max_node_x,
            min_x = extents.min_x,
            max_x = extents.max_x,
            min_y = extents.min_y,
            max_y = extents.max_y,
            "recomputed graph extents"
        );

        self.max_graph_node_x = max_node_x;
        self.extents = extents;
        extents
    }
}

impl Index<NodeId> for Graph {
    type Output = GNode;

    fn index(&self, handle: NodeId) -> &GNode {
        &self.nodes[handle.index()]
    }
}

impl IndexMut<NodeId> for Graph {
    fn index_mut(&mut self, handle: NodeId) -> &mut GNode {
        &mut self.nodes[handle.index()]
    }
}
