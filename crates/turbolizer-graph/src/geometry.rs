//! Rendering constants shared by node port geometry and edge routing.

use serde::{Deserialize, Serialize};

/// Fixed visual parameters of the graph view.
///
/// Defaults match the stock Turbolizer look. The value is passed explicitly into every geometry
/// query so alternative skins (and tests) can swap it without touching global state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Geometry {
    /// Gap between parallel edge lanes.
    pub minimum_edge_separation: f64,
    pub arrowhead_height: f64,
    /// Radius of the port bubbles drawn above inputs and below outputs.
    pub bubble_radius: f64,
    /// Horizontal space reserved per input port.
    pub node_input_width: f64,
    pub minimum_node_output_approach: f64,
    pub minimum_node_input_approach: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        let bubble_radius = 12.0;
        Self {
            minimum_edge_separation: 20.0,
            arrowhead_height: 7.0,
            bubble_radius,
            node_input_width: 50.0,
            minimum_node_output_approach: 15.0,
            minimum_node_input_approach: 15.0 + 2.0 * bubble_radius,
        }
    }
}

impl Geometry {
    /// Parses a (possibly partial) JSON override; missing fields keep their defaults.
    pub fn from_json(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
