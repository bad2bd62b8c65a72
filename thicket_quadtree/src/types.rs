// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: the `Quad` region, the `Shape` query capability, and tree
//! options.

use kurbo::{Circle, Point, Rect};

/// An axis-aligned region stored as a center point plus full extent.
///
/// Tree cells use this representation because subdivision is a pure
/// halving of the extents around quadrant centers. The y axis points down,
/// matching Kurbo's convention: [`Quad::top`] is the smaller y edge.
///
/// Containment is inclusive on all four edges, so a point exactly on a
/// boundary belongs to the region. Use [`Quad::from_rect`] /
/// [`Quad::to_rect`] to move between this and [`kurbo::Rect`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quad {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Full width.
    pub width: f64,
    /// Full height.
    pub height: f64,
}

impl Quad {
    /// Create a region from its center and full extents.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a region centered on `center`.
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        Self::new(center.x, center.y, width, height)
    }

    /// Convert a corner-based [`kurbo::Rect`] into a center-based region.
    pub fn from_rect(rect: Rect) -> Self {
        Self::from_center(rect.center(), rect.width(), rect.height())
    }

    /// Convert back to a corner-based [`kurbo::Rect`].
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left(), self.top(), self.right(), self.bottom())
    }

    /// The center point.
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The smaller y edge.
    pub fn top(&self) -> f64 {
        self.y - self.height / 2.0
    }

    /// The larger y edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// The smaller x edge.
    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    /// The larger x edge.
    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Whether the point lies inside the region, boundaries included.
    ///
    /// A NaN coordinate fails every comparison and is never contained.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Whether two regions overlap.
    ///
    /// True unless one region is strictly outside the other on some axis;
    /// regions that merely share an edge still intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.left() > self.right()
            || other.right() < self.left()
            || other.top() > self.bottom()
            || other.bottom() < self.top())
    }
}

/// Capability required of a query range: point containment plus overlap
/// with a tree cell.
///
/// This is deliberately minimal so callers can query with their own
/// region types. It is unrelated to [`kurbo::Shape`], which describes
/// paths; a range here only ever answers the two predicates the tree
/// asks during traversal.
pub trait Shape {
    /// Whether `point` lies inside the range (boundary inclusive).
    fn contains(&self, point: Point) -> bool;

    /// Whether the range overlaps the cell `quad`. Used for pruning, so a
    /// conservative `true` is acceptable; a false negative loses results.
    fn intersects(&self, quad: &Quad) -> bool;
}

impl Shape for Quad {
    fn contains(&self, point: Point) -> bool {
        Self::contains(self, point)
    }

    fn intersects(&self, quad: &Quad) -> bool {
        Self::intersects(self, quad)
    }
}

impl Shape for Rect {
    // Not `Rect::contains`: Kurbo's test is half-open and query ranges are
    // inclusive on all four edges.
    fn contains(&self, point: Point) -> bool {
        point.x >= self.x0 && point.x <= self.x1 && point.y >= self.y0 && point.y <= self.y1
    }

    fn intersects(&self, quad: &Quad) -> bool {
        !(self.x0 > quad.right()
            || self.x1 < quad.left()
            || self.y0 > quad.bottom()
            || self.y1 < quad.top())
    }
}

impl Shape for Circle {
    fn contains(&self, point: Point) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    fn intersects(&self, quad: &Quad) -> bool {
        // Closest point on the cell to the circle's center, compared by
        // squared distance.
        let nx = self.center.x.clamp(quad.left(), quad.right());
        let ny = self.center.y.clamp(quad.top(), quad.bottom());
        let dx = self.center.x - nx;
        let dy = self.center.y - ny;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Subdivision and maintenance policy for a [`QuadTree`](crate::QuadTree).
///
/// Options are taken as-is; nothing is validated at construction. A
/// degenerate configuration such as `max_points_per_node == 0` makes every
/// insert subdivide until the depth budget or the minimum-cell guard stops
/// it, which is allowed but rarely what you want.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuadTreeOptions {
    /// Subdivision levels still allowed below this node. `None` is
    /// unlimited; `Some(0)` pins the node as a leaf regardless of how many
    /// points it accumulates.
    pub max_depth: Option<u32>,
    /// Resident points a leaf holds before an insertion splits it.
    pub max_points_per_node: usize,
    /// Collapse an internal node back to an empty leaf when a removal pass
    /// finds all four children simultaneously empty.
    pub collapse_empty: bool,
}

impl Default for QuadTreeOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            max_points_per_node: 4,
            collapse_empty: false,
        }
    }
}

impl QuadTreeOptions {
    /// Options inherited by a quadrant: one less level of depth budget.
    pub(crate) fn child(self) -> Self {
        Self {
            max_depth: self.max_depth.map(|d| d.saturating_sub(1)),
            ..self
        }
    }
}
