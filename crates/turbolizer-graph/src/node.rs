//! Node records and their port geometry.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Geometry;

/// Opaque handle into a [`crate::Graph`]'s node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A laid-out IR node.
///
/// `x`/`y` are the top-left corner of the node box. All other measurements come from the
/// external sizing pass and are stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GNode {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub rank: i32,
    pub visible: bool,
    pub input_count: usize,
    pub label_width: f64,
    pub normal_height: f64,
    /// Extra height taken by the type label when types are shown.
    pub label_height: f64,
    /// Vertical space below the node reserved by layout for outgoing edges to turn.
    pub output_approach: f64,
    /// Loop header, or a phi hanging off one.
    pub back_edge_target: bool,
}

impl GNode {
    pub fn total_node_width(&self, g: &Geometry) -> f64 {
        (self.input_count as f64 * g.node_input_width).max(self.label_width)
    }

    /// Horizontal offset of input port `index`, relative to `x`.
    ///
    /// Inputs are right-aligned: the last input sits under the output port.
    pub fn input_x(&self, index: usize, g: &Geometry) -> f64 {
        let slot = index as f64 - self.input_count as f64 + 1.0;
        self.total_node_width(g) - g.node_input_width / 2.0 + slot * g.node_input_width
    }

    pub fn output_x(&self, g: &Geometry) -> f64 {
        self.total_node_width(g) - g.node_input_width / 2.0
    }

    pub fn node_height(&self, show_types: bool) -> f64 {
        if show_types {
            self.normal_height + self.label_height
        } else {
            self.normal_height
        }
    }

    /// Absolute y at which edges entering input `index` turn towards the port.
    ///
    /// Inputs cycle through four staggered levels so neighbouring edges do not share a
    /// horizontal run.
    pub fn input_approach(&self, index: usize, g: &Geometry) -> f64 {
        self.y
            - g.minimum_node_input_approach
            - (index % 4) as f64 * g.minimum_edge_separation
            - g.bubble_radius
    }

    /// Absolute y at which edges leaving this node turn sideways.
    pub fn output_approach(&self, show_types: bool, g: &Geometry) -> f64 {
        self.y + self.output_approach + self.node_height(show_types) + g.bubble_radius
    }

    pub fn has_back_edges(&self) -> bool {
        self.back_edge_target
    }
}
