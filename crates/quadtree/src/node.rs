//! Tree nodes.
//!
//! A node is either a [`Leaf`] holding up to [`LEAF_CAPACITY`] rectangles or
//! an [`Internal`] router with four lazily created quadrant children.

use tracing::trace;

use crate::{Bounds, Quadrant, Rectangle};

/// Maximum number of rectangles a leaf holds.
pub const LEAF_CAPACITY: usize = 5;

/// A node of the tree.
#[derive(Debug, Clone)]
pub enum Node {
    Leaf(Leaf),
    Internal(Internal),
}

impl Node {
    /// Create an empty leaf over `bounds`.
    pub fn leaf(bounds: Bounds) -> Self {
        Node::Leaf(Leaf::new(bounds))
    }

    /// Create an internal node over `bounds` with no children yet.
    pub fn internal(bounds: Bounds) -> Self {
        Node::Internal(Internal::new(bounds))
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        match self {
            Node::Leaf(leaf) => leaf.bounds(),
            Node::Internal(internal) => internal.bounds(),
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Store a rectangle. Returns `false` when the target leaf is full.
    pub fn insert(&mut self, rect: Rectangle) -> bool {
        match self {
            Node::Leaf(leaf) => leaf.insert(rect),
            Node::Internal(internal) => internal.insert(rect),
        }
    }

    /// Remove the first rectangle anchored at `(x, y)`.
    pub fn delete(&mut self, x: i32, y: i32) -> bool {
        match self {
            Node::Leaf(leaf) => leaf.delete(x, y),
            Node::Internal(internal) => internal.delete(x, y),
        }
    }

    /// Find the first rectangle anchored at `(x, y)`.
    pub fn find(&self, x: i32, y: i32) -> Option<&Rectangle> {
        match self {
            Node::Leaf(leaf) => leaf.find(x, y),
            Node::Internal(internal) => internal.find(x, y),
        }
    }

    /// Mutable variant of [`Node::find`], used to resize in place.
    pub fn find_mut(&mut self, x: i32, y: i32) -> Option<&mut Rectangle> {
        match self {
            Node::Leaf(leaf) => leaf.find_mut(x, y),
            Node::Internal(internal) => internal.find_mut(x, y),
        }
    }

    /// Walk every stored rectangle depth-first, passing its indentation level.
    ///
    /// A leaf reports its rectangles at `level`; an internal node visits its
    /// children at `level + 1` in slot order.
    pub fn visit<F>(&self, level: usize, f: &mut F)
    where
        F: FnMut(usize, &Rectangle),
    {
        match self {
            Node::Leaf(leaf) => {
                for rect in &leaf.rects {
                    f(level, rect);
                }
            }
            Node::Internal(internal) => {
                for child in internal.children.iter().flatten() {
                    child.visit(level + 1, f);
                }
            }
        }
    }

    /// Number of rectangles stored under this node.
    pub fn len(&self) -> usize {
        match self {
            Node::Leaf(leaf) => leaf.len(),
            Node::Internal(internal) => internal.children.iter().flatten().map(|c| c.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Bounded, unordered collection of rectangles.
///
/// Insertion order is kept and is the order rectangles are visited in.
/// The leaf does not check that rectangles lie inside its box.
#[derive(Debug, Clone)]
pub struct Leaf {
    bounds: Bounds,
    rects: Vec<Rectangle>,
}

impl Leaf {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            rects: Vec::with_capacity(LEAF_CAPACITY),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rects(&self) -> &[Rectangle] {
        &self.rects
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.rects.len() >= LEAF_CAPACITY
    }

    /// Append a rectangle unless the leaf is full.
    ///
    /// Duplicate anchors are accepted; only the capacity is checked.
    pub fn insert(&mut self, rect: Rectangle) -> bool {
        if self.is_full() {
            trace!("Leaf {} full, rejecting {}", self.bounds, rect);
            return false;
        }
        self.rects.push(rect);
        true
    }

    pub fn delete(&mut self, x: i32, y: i32) -> bool {
        match self.rects.iter().position(|r| r.is_at(x, y)) {
            Some(idx) => {
                // Preserve order for dump.
                self.rects.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn find(&self, x: i32, y: i32) -> Option<&Rectangle> {
        self.rects.iter().find(|r| r.is_at(x, y))
    }

    pub fn find_mut(&mut self, x: i32, y: i32) -> Option<&mut Rectangle> {
        self.rects.iter_mut().find(|r| r.is_at(x, y))
    }
}

/// Four-way quadrant router.
///
/// Children start absent and are created as leaves covering their quadrant
/// the first time a rectangle routes to them.
#[derive(Debug, Clone)]
pub struct Internal {
    bounds: Bounds,
    children: [Option<Box<Node>>; 4],
}

impl Internal {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            children: [None, None, None, None],
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The child in `quadrant`, if it has been created.
    #[inline]
    pub fn child(&self, quadrant: Quadrant) -> Option<&Node> {
        self.children[quadrant.index()].as_deref()
    }

    /// Route a rectangle to the quadrant holding its anchor.
    pub fn insert(&mut self, rect: Rectangle) -> bool {
        let quadrant = self.bounds.quadrant_of(rect.x(), rect.y());
        let bounds = self.bounds;
        let child = self.children[quadrant.index()].get_or_insert_with(|| {
            let child_bounds = bounds.quadrant(quadrant);
            trace!("Creating {:?} leaf {} under {}", quadrant, child_bounds, bounds);
            Box::new(Node::leaf(child_bounds))
        });
        trace!("Routing {} to {:?}", rect, quadrant);
        child.insert(rect)
    }

    // Lookups probe every present child in slot order rather than
    // descending into the quadrant the anchor maps to.

    pub fn delete(&mut self, x: i32, y: i32) -> bool {
        self.children
            .iter_mut()
            .flatten()
            .any(|child| child.delete(x, y))
    }

    pub fn find(&self, x: i32, y: i32) -> Option<&Rectangle> {
        self.children
            .iter()
            .flatten()
            .find_map(|child| child.find(x, y))
    }

    pub fn find_mut(&mut self, x: i32, y: i32) -> Option<&mut Rectangle> {
        for child in self.children.iter_mut().flatten() {
            if let Some(rect) = child.find_mut(x, y) {
                return Some(rect);
            }
        }
        None
    }
}
