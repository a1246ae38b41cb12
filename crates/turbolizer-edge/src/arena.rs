//! The node-side geometry that edge routing consumes.
//!
//! Routing never owns nodes. It resolves [`NodeId`] handles through a [`NodeArena`] on every call,
//! so a re-layout is picked up by simply routing again.

use turbolizer_graph::{GNode, Geometry, Graph, NodeId};

pub trait PortNode {
    fn id(&self) -> u32;
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn rank(&self) -> i32;
    fn visible(&self) -> bool;

    /// Input port offset relative to `x`.
    fn input_x(&self, index: usize, geometry: &Geometry) -> f64;
    /// Output port offset relative to `x`.
    fn output_x(&self, geometry: &Geometry) -> f64;
    /// Absolute y where an edge turns towards input `index`.
    fn input_approach(&self, index: usize, geometry: &Geometry) -> f64;
    /// Absolute y where edges leaving the node turn sideways.
    fn output_approach(&self, show_types: bool, geometry: &Geometry) -> f64;
    fn total_node_width(&self, geometry: &Geometry) -> f64;
    fn node_height(&self, show_types: bool) -> f64;
    fn has_back_edges(&self) -> bool;
}

pub trait NodeArena {
    type Node: PortNode;

    fn node(&self, handle: NodeId) -> Option<&Self::Node>;

    /// Rightmost extent of all node boxes; back-edge lanes start past it.
    fn max_graph_node_x(&self) -> f64;
}

impl PortNode for GNode {
    fn id(&self) -> u32 {
        self.id
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn rank(&self) -> i32 {
        self.rank
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn input_x(&self, index: usize, geometry: &Geometry) -> f64 {
        GNode::input_x(self, index, geometry)
    }

    fn output_x(&self, geometry: &Geometry) -> f64 {
        GNode::output_x(self, geometry)
    }

    fn input_approach(&self, index: usize, geometry: &Geometry) -> f64 {
        GNode::input_approach(self, index, geometry)
    }

    fn output_approach(&self, show_types: bool, geometry: &Geometry) -> f64 {
        GNode::output_approach(self, show_types, geometry)
    }

    fn total_node_width(&self, geometry: &Geometry) -> f64 {
        GNode::total_node_width(self, geometry)
    }

    fn node_height(&self, show_types: bool) -> f64 {
        GNode::node_height(self, show_types)
    }

    fn has_back_edges(&self) -> bool {
        GNode::has_back_edges(self)
    }
}

impl NodeArena for Graph {
    type Node = GNode;

    fn node(&self, handle: NodeId) -> Option<&GNode> {
        Graph::node(self, handle)
    }

    fn max_graph_node_x(&self) -> f64 {
        Graph::max_graph_node_x(self)
    }
}
