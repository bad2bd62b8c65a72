// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Build a small tree, run rectangle and circle queries, and remove a
//! point.
//!
//! Run:
//! - `cargo run -p thicket_demos --example quadtree_basics`

use kurbo::{Circle, Point};
use thicket_quadtree::{Quad, QuadTree};

fn main() {
    // A 200x200 world centered on the origin.
    let mut tree = QuadTree::new(Quad::new(0.0, 0.0, 200.0, 200.0));

    let points = [
        Point::new(10.0, -35.0),
        Point::new(-60.0, 40.0),
        Point::new(99.0, 99.0),
        Point::new(-100.0, -100.0),
        Point::new(12.0, -30.0),
    ];
    tree.insert_all(points);
    println!("stored {} points", tree.len());

    // Outside the root: rejected, not an error.
    let accepted = tree.insert(Point::new(400.0, 0.0));
    println!("inserting (400, 0): accepted = {accepted}");

    // Rectangle query around the north-east corner of the world.
    let window = Quad::new(55.0, -55.0, 90.0, 90.0);
    println!("window {:?} -> {:?}", window.to_rect(), tree.query(&window));

    // Circle query; any `Shape` works as a range.
    let probe = Circle::new((11.0, -33.0), 5.0);
    println!("circle probe -> {:?}", tree.query(&probe));

    let removed = tree.remove(Point::new(99.0, 99.0));
    assert!(removed, "the corner point should have been stored");
    println!("after removal: {} points", tree.len());
}
