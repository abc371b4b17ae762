//! The index facade.

use tracing::debug;

use crate::{Bounds, Node, Rectangle};

/// Spatial index over a fixed plane.
///
/// Owns a single root node for its whole lifetime. Every operation starts at
/// the root and recurses through whatever node shape is present.
#[derive(Debug, Clone)]
pub struct QuadTree {
    root: Node,
}

impl QuadTree {
    /// Create an index whose root is an empty leaf over [`Bounds::UNIVERSE`].
    pub fn new() -> Self {
        Self::with_root(Node::leaf(Bounds::UNIVERSE))
    }

    /// Create an index around a caller-built root.
    pub fn with_root(root: Node) -> Self {
        debug!(
            "New index, {} root over {}",
            if root.is_leaf() { "leaf" } else { "internal" },
            root.bounds()
        );
        Self { root }
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.root.bounds()
    }

    /// Store a rectangle. Returns `false` if the leaf it lands in is full.
    pub fn insert(&mut self, rect: Rectangle) -> bool {
        self.root.insert(rect)
    }

    /// Remove the first rectangle anchored at `(x, y)`.
    pub fn delete(&mut self, x: i32, y: i32) -> bool {
        self.root.delete(x, y)
    }

    /// Find the first rectangle anchored at `(x, y)`.
    pub fn find(&self, x: i32, y: i32) -> Option<&Rectangle> {
        self.root.find(x, y)
    }

    pub fn find_mut(&mut self, x: i32, y: i32) -> Option<&mut Rectangle> {
        self.root.find_mut(x, y)
    }

    /// Resize the rectangle anchored at `(x, y)` in place.
    pub fn update(&mut self, x: i32, y: i32, length: i32, width: i32) -> bool {
        match self.find_mut(x, y) {
            Some(rect) => {
                rect.resize(length, width);
                true
            }
            None => false,
        }
    }

    /// Visit every rectangle with its depth-based indentation level.
    pub fn dump<F>(&self, mut f: F)
    where
        F: FnMut(usize, &Rectangle),
    {
        self.root.visit(0, &mut f);
    }

    /// Render the tree as lines, each rectangle prefixed by one `indent`
    /// per level.
    pub fn dump_lines(&self, indent: &str) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.len());
        self.dump(|level, rect| lines.push(format!("{}{}", indent.repeat(level), rect)));
        lines
    }

    /// Number of stored rectangles.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl Default for QuadTree {
    fn default() -> Self {
        Self::new()
    }
}
