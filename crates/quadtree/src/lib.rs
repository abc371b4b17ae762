//! Quadtree spatial index of anchored rectangles.
//!
//! This crate contains:
//! - Integer bounding boxes and quadrant routing
//! - The rectangle record
//! - Leaf and internal tree nodes
//! - The [`QuadTree`] facade

mod bounds;
mod node;
mod rectangle;
mod tree;

pub use bounds::{Bounds, Quadrant};
pub use node::{Internal, LEAF_CAPACITY, Leaf, Node};
pub use rectangle::Rectangle;
pub use tree::QuadTree;

/// Anchor coordinates of a rectangle.
pub type Anchor = glam::IVec2;
