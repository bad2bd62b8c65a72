// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Quadtree: a Kurbo-native region quadtree over 2D points.
//!
//! Thicket Quadtree is a reusable spatial index for point data.
//!
//! - Insert and remove [`kurbo::Point`]s; out-of-bounds inserts and missing
//!   removals report `false` rather than failing loudly.
//! - Query with any range implementing [`Shape`]; [`Quad`],
//!   [`kurbo::Rect`], and [`kurbo::Circle`] work out of the box.
//! - Leaves split adaptively once they exceed
//!   [`QuadTreeOptions::max_points_per_node`], bounded by an optional depth
//!   budget; [`QuadTreeOptions::collapse_empty`] merges emptied quadrants
//!   back into their parent on removal.
//!
//! Query pruning is the point of the structure: a subtree is visited only
//! when the range overlaps its cell, so queries touch a small corner of a
//! large tree.
//!
//! ## API overview
//!
//! - [`QuadTree`]: the tree itself; every node covers a fixed [`Quad`].
//! - [`Quad`]: axis-aligned region as center plus full extent, inclusive on
//!   all four edges, with [`kurbo::Rect`] conversions.
//! - [`Shape`]: the two-predicate capability a query range must offer.
//! - [`QuadTreeOptions`]: capacity, depth budget, and collapse policy.
//! - [`TreeSnapshot`]: plain recursive topology description from
//!   [`QuadTree::snapshot`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Circle, Point};
//! use thicket_quadtree::{Quad, QuadTree};
//!
//! // A 200x200 region centered on the origin.
//! let mut tree = QuadTree::new(Quad::new(0.0, 0.0, 200.0, 200.0));
//!
//! assert!(tree.insert(Point::new(10.0, -35.0)));
//! assert!(tree.insert(Point::new(-60.0, 40.0)));
//! assert!(!tree.insert(Point::new(400.0, 0.0))); // outside the root
//!
//! // Range queries take anything implementing `Shape`.
//! let near = tree.query(&Circle::new((10.0, -35.0), 5.0));
//! assert_eq!(near, [Point::new(10.0, -35.0)]);
//!
//! // The full-bounds query returns everything stored.
//! assert_eq!(tree.query(&tree.bounds()).len(), tree.len());
//! ```
//!
//! ### Watching the topology
//!
//! ```rust
//! use kurbo::Point;
//! use thicket_quadtree::{Quad, QuadTree, QuadTreeOptions};
//!
//! let mut tree = QuadTree::with_options(
//!     Quad::new(0.0, 0.0, 100.0, 100.0),
//!     QuadTreeOptions { max_points_per_node: 1, collapse_empty: true, ..Default::default() },
//! );
//!
//! let a = Point::new(25.0, -25.0);
//! let b = Point::new(-25.0, 25.0);
//! tree.insert_all([a, b]);
//! assert!(tree.snapshot().is_divided());
//!
//! // Removing everything collapses the subdivision again.
//! tree.remove_all([a, b]);
//! assert!(!tree.snapshot().is_divided());
//! ```
//!
//! ## Float semantics
//!
//! Coordinates are assumed finite. A NaN coordinate fails every containment
//! test, so such points are silently rejected on insert and never matched
//! on remove. Point equality is exact `f64` equality.
//!
//! ## Concurrency
//!
//! All operations are synchronous depth-first recursion; mutation takes
//! `&mut self`, so the borrow checker already enforces a single writer. The
//! tree has no interior mutability; to share one across threads, put it
//! behind a lock.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod tree;
pub mod types;

pub use tree::{QuadTree, TreeSnapshot};
pub use types::{Quad, QuadTreeOptions, Shape};
