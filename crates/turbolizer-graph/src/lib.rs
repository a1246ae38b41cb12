#![forbid(unsafe_code)]

//! Node arena and port geometry for Turbolizer-style IR graph views.
//!
//! Nodes are owned by a [`Graph`] and addressed through [`NodeId`] handles. Positions, ranks and
//! back-edge flags are assigned by an external layout pass; this crate only stores them and
//! derives port locations from them.

pub mod error;
pub mod geometry;
pub mod graph;
pub mod node;

pub use error::{Error, Result};
pub use geometry::Geometry;
pub use graph::{Extents, Graph};
pub use node::{GNode, NodeId};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
