// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Topology walk.
//!
//! Watch a node subdivide as it passes capacity, then collapse again as
//! removals empty its quadrants.
//!
//! Run:
//! - `cargo run -p thicket_demos --example quadtree_topology`

use kurbo::Point;
use thicket_quadtree::{Quad, QuadTree, QuadTreeOptions, TreeSnapshot};

/// Render a snapshot as an indented outline.
fn describe(snapshot: &TreeSnapshot, label: &str, depth: usize) {
    let indent = "  ".repeat(depth);
    match snapshot {
        TreeSnapshot::Divided(quadrants) => {
            println!("{indent}{label}: divided");
            for (quadrant, name) in quadrants.iter().zip(["NE", "NW", "SE", "SW"]) {
                describe(quadrant, name, depth + 1);
            }
        }
        TreeSnapshot::Leaf(points) => {
            println!("{indent}{label}: leaf with {} point(s)", points.len());
        }
    }
}

fn main() {
    let mut tree = QuadTree::with_options(
        Quad::new(0.0, 0.0, 100.0, 100.0),
        QuadTreeOptions {
            max_points_per_node: 2,
            collapse_empty: true,
            ..Default::default()
        },
    );

    // Three points in the same quadrant force a split there.
    let points = [
        Point::new(30.0, -30.0),
        Point::new(35.0, -35.0),
        Point::new(40.0, -40.0),
    ];
    tree.insert_all(points);

    println!("after {} inserts:", points.len());
    describe(&tree.snapshot(), "root", 0);

    tree.remove_all(points);
    println!("\nafter removing everything:");
    describe(&tree.snapshot(), "root", 0);
    assert!(!tree.is_divided(), "collapse should have merged the quadrants");
}
