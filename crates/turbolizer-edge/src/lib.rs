#![forbid(unsafe_code)]

//! Orthogonal edge routing for Turbolizer-style IR graph views.
//!
//! An [`Edge`] connects an output port at the bottom of its source node to one input port at the
//! top of its target node. Routing reads node positions from any [`NodeArena`] (the
//! [`turbolizer_graph::Graph`] arena implements it) and produces an [`EdgePath`]: a short list of
//! waypoints that is only turned into SVG path syntax at the rendering boundary.
//!
//! Back edges (loop back-branches) leave the normal lane and run down a dedicated column to the
//! right of every node, one column per back edge.

pub use turbolizer_graph as graph;

pub mod arena;
pub mod edge;
pub mod error;
pub mod path;
pub mod set;

pub use arena::{NodeArena, PortNode};
pub use edge::{Edge, edge_to_str};
pub use error::{Error, Result};
pub use path::{EdgePath, PathCommand, Point};
pub use set::EdgeSet;
pub use turbolizer_graph::{Geometry, NodeId};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
