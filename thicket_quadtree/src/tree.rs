// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: subdivision, insertion, removal, queries.

use alloc::boxed::Box;
use alloc::vec::Vec;
use kurbo::Point;
use thicket_set::OrderSet;

use crate::types::{Quad, QuadTreeOptions, Shape};

/// A region quadtree over 2D points.
///
/// Every node covers a fixed [`Quad`] and is either a leaf holding resident
/// points, or an internal node owning exactly four quadrants in NE, NW, SE,
/// SW order. A leaf splits when an insertion would push it past
/// [`QuadTreeOptions::max_points_per_node`] while depth budget remains;
/// with [`QuadTreeOptions::collapse_empty`] set, removals that empty all
/// four quadrants merge them back into a leaf.
///
/// Points are de-duplicated per leaf by exact coordinate equality, so the
/// same location is stored at most once per node.
pub struct QuadTree {
    bounds: Quad,
    opts: QuadTreeOptions,
    resident: OrderSet<Point>,
    quadrants: Option<Box<[QuadTree; 4]>>,
}

impl core::fmt::Debug for QuadTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.bounds)
            .field("divided", &self.is_divided())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl QuadTree {
    /// Create an empty tree over `bounds` with default options.
    pub fn new(bounds: Quad) -> Self {
        Self::with_options(bounds, QuadTreeOptions::default())
    }

    /// Create an empty tree over `bounds` with explicit options.
    pub fn with_options(bounds: Quad, opts: QuadTreeOptions) -> Self {
        Self {
            bounds,
            opts,
            resident: OrderSet::new(),
            quadrants: None,
        }
    }

    /// The region this node covers, fixed at construction.
    pub fn bounds(&self) -> Quad {
        self.bounds
    }

    /// The options this node was built with.
    pub fn options(&self) -> QuadTreeOptions {
        self.opts
    }

    /// Whether this node has subdivided.
    pub fn is_divided(&self) -> bool {
        self.quadrants.is_some()
    }

    /// The four quadrants in NE, NW, SE, SW order, if subdivided.
    pub fn quadrants(&self) -> Option<&[Self; 4]> {
        self.quadrants.as_deref()
    }

    /// Total number of points stored in this subtree.
    pub fn len(&self) -> usize {
        match self.quadrants.as_deref() {
            Some(quadrants) => quadrants.iter().map(Self::len).sum(),
            None => self.resident.len(),
        }
    }

    /// Whether the subtree stores no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a single point.
    ///
    /// Returns whether the point was accepted somewhere under this node.
    /// A point outside [`QuadTree::bounds`] is rejected with `false`; a
    /// point equal to one already resident reports `true` without growing
    /// the tree.
    pub fn insert(&mut self, point: Point) -> bool {
        if !self.bounds.contains(point) {
            return false;
        }

        if self.quadrants.is_none() {
            if self.resident.len() < self.opts.max_points_per_node || self.is_forced_leaf() {
                self.resident.insert(point);
                return true;
            }
            self.divide();
        }

        if let Some(quadrants) = self.quadrants.as_deref_mut() {
            for child in quadrants {
                if child.insert(point) {
                    return true;
                }
            }
        }

        false
    }

    /// Insert every point from `points`; true if at least one was placed.
    pub fn insert_all<I>(&mut self, points: I) -> bool
    where
        I: IntoIterator<Item = Point>,
    {
        let mut any = false;
        for point in points {
            if self.insert(point) {
                any = true;
            }
        }
        any
    }

    /// Remove the point with exactly these coordinates, if stored.
    ///
    /// Internal nodes scan all four quadrants rather than stopping at the
    /// first hit: seam-adjacent duplicates may live in more than one child.
    /// With [`QuadTreeOptions::collapse_empty`] set, a pass that leaves all
    /// four quadrants empty merges them back into this node.
    pub fn remove(&mut self, point: Point) -> bool {
        if !self.bounds.contains(point) {
            return false;
        }

        let Some(quadrants) = self.quadrants.as_deref_mut() else {
            return self.resident.remove(&point);
        };

        let mut removed = false;
        for child in quadrants.iter_mut() {
            if child.remove(point) {
                removed = true;
            }
        }

        if self.opts.collapse_empty && quadrants.iter().all(Self::is_empty_leaf) {
            self.quadrants = None;
        }

        removed
    }

    /// Remove every point in `points`; true if at least one was removed.
    pub fn remove_all<I>(&mut self, points: I) -> bool
    where
        I: IntoIterator<Item = Point>,
    {
        let mut any = false;
        for point in points {
            if self.remove(point) {
                any = true;
            }
        }
        any
    }

    /// All stored points whose location falls within `range`.
    ///
    /// Subtrees whose bounds do not intersect `range` are pruned without
    /// being visited. No ordering is guaranteed across leaves.
    pub fn query<S: Shape + ?Sized>(&self, range: &S) -> Vec<Point> {
        let mut found = Vec::new();
        self.query_into(range, &mut found);
        found
    }

    /// All stored points, flattened depth-first.
    pub fn points(&self) -> Vec<Point> {
        let mut out = Vec::new();
        self.points_into(&mut out);
        out
    }

    /// A plain description of the current topology; a snapshot, not a live
    /// view.
    pub fn snapshot(&self) -> TreeSnapshot {
        match self.quadrants.as_deref() {
            Some([ne, nw, se, sw]) => TreeSnapshot::Divided(Box::new([
                ne.snapshot(),
                nw.snapshot(),
                se.snapshot(),
                sw.snapshot(),
            ])),
            None => TreeSnapshot::Leaf(self.resident.as_slice().to_vec()),
        }
    }

    // --- internals ---

    /// A leaf that may no longer subdivide: the depth budget is spent, or
    /// the cell is too small to halve into non-degenerate quadrants. Such
    /// a leaf absorbs points beyond capacity.
    fn is_forced_leaf(&self) -> bool {
        self.opts.max_depth == Some(0)
            || self.bounds.width / 2.0 <= 0.0
            || self.bounds.height / 2.0 <= 0.0
    }

    fn is_empty_leaf(&self) -> bool {
        self.resident.is_empty() && self.quadrants.is_none()
    }

    /// Split into four equal quadrants and redistribute resident points.
    ///
    /// A redistributed point lands in the first quadrant in NE, NW, SE, SW
    /// order whose inclusive bounds accept it, so seam points get exactly
    /// one owner.
    fn divide(&mut self) {
        let opts = self.opts.child();
        let Quad {
            x,
            y,
            width,
            height,
        } = self.bounds;
        let w = width / 2.0;
        let h = height / 2.0;

        let ne = Quad::new(x + w / 2.0, y - h / 2.0, w, h);
        let nw = Quad::new(x - w / 2.0, y - h / 2.0, w, h);
        let se = Quad::new(x + w / 2.0, y + h / 2.0, w, h);
        let sw = Quad::new(x - w / 2.0, y + h / 2.0, w, h);

        let mut quadrants = Box::new([
            Self::with_options(ne, opts),
            Self::with_options(nw, opts),
            Self::with_options(se, opts),
            Self::with_options(sw, opts),
        ]);

        for &point in self.resident.iter() {
            for child in quadrants.iter_mut() {
                if child.insert(point) {
                    break;
                }
            }
        }

        self.resident.clear();
        self.quadrants = Some(quadrants);
    }

    fn query_into<S: Shape + ?Sized>(&self, range: &S, found: &mut Vec<Point>) {
        if !range.intersects(&self.bounds) {
            return;
        }
        match self.quadrants.as_deref() {
            Some(quadrants) => {
                for child in quadrants {
                    child.query_into(range, found);
                }
            }
            None => {
                for &point in self.resident.iter() {
                    if range.contains(point) {
                        found.push(point);
                    }
                }
            }
        };
    }

    fn points_into(&self, out: &mut Vec<Point>) {
        match self.quadrants.as_deref() {
            Some(quadrants) => {
                for child in quadrants {
                    child.points_into(out);
                }
            }
            None => out.extend_from_slice(self.resident.as_slice()),
        };
    }
}

/// Recursive topology description produced by [`QuadTree::snapshot`].
#[derive(Clone, Debug, PartialEq)]
pub enum TreeSnapshot {
    /// The node has subdivided; quadrants in NE, NW, SE, SW order.
    Divided(Box<[TreeSnapshot; 4]>),
    /// The node is a leaf; resident points in insertion order.
    Leaf(Vec<Point>),
}

impl TreeSnapshot {
    /// Whether this node had subdivided when the snapshot was taken.
    pub fn is_divided(&self) -> bool {
        matches!(self, Self::Divided(_))
    }

    /// Total points recorded under this snapshot node.
    pub fn len(&self) -> usize {
        match self {
            Self::Divided(quadrants) => quadrants.iter().map(Self::len).sum(),
            Self::Leaf(points) => points.len(),
        }
    }

    /// Whether no points were recorded under this snapshot node.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
