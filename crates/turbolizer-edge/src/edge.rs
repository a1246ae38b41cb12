//! Edge identity, visibility and connector routing.

use serde::{Deserialize, Serialize};

use crate::arena::{NodeArena, PortNode};
use crate::path::EdgePath;
use crate::{Error, Result};
use turbolizer_graph::{Geometry, NodeId};

/// A directed connection from `source`'s output to input slot `index` of `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    /// Input slot on `target`, zero-based.
    index: usize,
    /// Display-only classification (`"value"`, `"control"`, `"effect"`, ...).
    #[serde(rename = "type")]
    pub edge_type: String,
    /// 1-based back-edge lane, or 0 for a normally routed edge. Assigned by layout.
    #[serde(default)]
    pub back_edge_number: u32,
    #[serde(default)]
    pub visible: bool,
}

impl Edge {
    /// Creates a hidden, normally routed edge.
    pub fn new(source: NodeId, target: NodeId, index: usize, edge_type: impl Into<String>) -> Self {
        Self {
            source,
            target,
            index,
            edge_type: edge_type.into(),
            back_edge_number: 0,
            visible: false,
        }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_back_edge_number(&mut self, number: u32) {
        self.back_edge_number = number;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn endpoints<'a, A: NodeArena>(&self, graph: &'a A) -> Result<(&'a A::Node, &'a A::Node)> {
        match (graph.node(self.source), graph.node(self.target)) {
            (Some(source), Some(target)) => Ok((source, target)),
            _ => Err(Error::MissingEndpoint {
                edge_id: format!("{},{},{}", self.source, self.index, self.target),
            }),
        }
    }

    /// `"{source id},{index},{target id}"`, the key edges are looked up by.
    pub fn string_id<A: NodeArena>(&self, graph: &A) -> Result<String> {
        let (source, target) = self.endpoints(graph)?;
        Ok(format!("{},{},{}", source.id(), self.index, target.id()))
    }

    /// Shown only when the edge and both of its endpoints are shown.
    pub fn is_visible<A: NodeArena>(&self, graph: &A) -> Result<bool> {
        let (source, target) = self.endpoints(graph)?;
        Ok(self.visible && source.visible() && target.visible())
    }

    /// Points against the rank order into a node that layout marked as a back-edge target.
    pub fn is_back_edge<A: NodeArena>(&self, graph: &A) -> Result<bool> {
        let (source, target) = self.endpoints(graph)?;
        Ok(target.has_back_edges() && target.rank() < source.rank())
    }

    /// The x of the vertical run that brings the edge down to its target's turn level.
    pub fn input_horizontal_position<A: NodeArena>(
        &self,
        graph: &A,
        geometry: &Geometry,
        show_types: bool,
    ) -> Result<f64> {
        let (source, target) = self.endpoints(graph)?;
        Ok(self.trunk_x(source, target, graph.max_graph_node_x(), geometry, show_types))
    }

    fn trunk_x<N: PortNode>(
        &self,
        source: &N,
        target: &N,
        max_graph_node_x: f64,
        geometry: &Geometry,
        show_types: bool,
    ) -> f64 {
        if self.back_edge_number > 0 {
            let lane = max_graph_node_x
                + f64::from(self.back_edge_number) * geometry.minimum_edge_separation;
            tracing::trace!(
                source = source.id(),
                target = target.id(),
                back_edge_number = self.back_edge_number,
                lane,
                "routing back edge through dedicated lane"
            );
            return lane;
        }

        let input_x = target.x() + target.input_x(self.index, geometry);
        let input_approach = target.input_approach(self.index, geometry);
        let output_approach = source.output_approach(show_types, geometry);
        if input_approach > output_approach {
            tracing::trace!(
                source = source.id(),
                target = target.id(),
                index = self.index,
                input_x,
                "straight drop into target input column"
            );
            return input_x;
        }

        let input_offset = geometry.minimum_edge_separation * (self.index as f64 + 1.0);
        let trunk = if target.x() < source.x() {
            target.x() + target.total_node_width(geometry) + input_offset
        } else {
            target.x() - input_offset
        };
        tracing::trace!(
            source = source.id(),
            target = target.id(),
            index = self.index,
            input_approach,
            output_approach,
            trunk,
            "target turn level is above source; routing around target"
        );
        trunk
    }

    /// Builds the connector from the source's output bubble to just above the target's input
    /// arrowhead.
    ///
    /// The path is at most six points: down out of the source, across to the trunk, down the
    /// trunk, across to the port column, and down onto the port.
    pub fn generate_path<A: NodeArena>(
        &self,
        graph: &A,
        geometry: &Geometry,
        show_types: bool,
    ) -> Result<EdgePath> {
        let (source, target) = self.endpoints(graph)?;

        let input_x = target.x() + target.input_x(self.index, geometry);
        let input_y = target.y() - 2.0 * geometry.bubble_radius - geometry.arrowhead_height;
        let output_x = source.x() + source.output_x(geometry);
        let output_y = source.y() + source.node_height(show_types) + geometry.bubble_radius;
        let mut input_approach = target.input_approach(self.index, geometry);
        let output_approach = source.output_approach(show_types, geometry);
        let horizontal_pos = self.trunk_x(
            source,
            target,
            graph.max_graph_node_x(),
            geometry,
            show_types,
        );

        let mut path = EdgePath::new(output_x, output_y);
        path.line_to(output_x, output_approach)
            .line_to(horizontal_pos, output_approach);

        if horizontal_pos != input_x {
            path.line_to(horizontal_pos, input_approach);
        } else if input_approach < output_approach {
            // Straight drop with the target turn level above the source one: keep the
            // horizontal run on the source level instead of doubling back up.
            tracing::trace!(
                source = source.id(),
                target = target.id(),
                index = self.index,
                input_approach,
                output_approach,
                "clamping target turn level to source turn level"
            );
            input_approach = output_approach;
        }

        path.line_to(input_x, input_approach)
            .line_to(input_x, input_y);
        Ok(path)
    }
}

/// Key function for maps and sets of edges.
pub fn edge_to_str<A: NodeArena>(edge: &Edge, graph: &A) -> Result<String> {
    edge.string_id(graph)
}
