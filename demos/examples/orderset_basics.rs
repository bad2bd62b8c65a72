// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `OrderSet` contract tour.
//!
//! Insertion order, de-duplication, and first-match removal.
//!
//! Run:
//! - `cargo run -p thicket_demos --example orderset_basics`

use thicket_set::OrderSet;

fn main() {
    let mut visited = OrderSet::new();
    for stop in ["larch", "alder", "fir", "alder", "rowan", "fir"] {
        if !visited.insert(stop) {
            println!("already visited {stop}");
        }
    }

    println!("route: {visited:?}");
    assert_eq!(visited.as_slice(), &["larch", "alder", "fir", "rowan"]);

    visited.remove(&"alder");
    println!("after dropping alder: {visited:?}");

    // All-satisfy checks are plain iterator calls.
    let all_short = visited.iter().all(|stop| stop.len() <= 5);
    println!("all stops short names: {all_short}");
}
