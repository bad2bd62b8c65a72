// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Circle, Point};
use thicket_quadtree::{Quad, QuadTree, QuadTreeOptions};

const WORLD: f64 = 2000.0;

fn world_bounds() -> Quad {
    Quad::new(WORLD / 2.0, WORLD / 2.0, WORLD, WORLD)
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_uniform_points(count: usize) -> Vec<Point> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        out.push(Point::new(rng.next_f64() * WORLD, rng.next_f64() * WORLD));
    }
    out
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * WORLD, rng.next_f64() * WORLD));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(
                (cx + dx).clamp(0.0, WORLD),
                (cy + dy).clamp(0.0, WORLD),
            ));
        }
    }
    out
}

fn build_tree(points: &[Point]) -> QuadTree {
    let mut tree = QuadTree::new(world_bounds());
    tree.insert_all(points.iter().copied());
    tree
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_build");
    for &n in &[1024_usize, 4096, 16384] {
        let points = gen_uniform_points(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("insert_uniform_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(world_bounds()),
                |mut tree| {
                    tree.insert_all(points.iter().copied());
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let points = gen_clustered_points(16, 1024, 128.0);
    group.bench_function("insert_clustered", |b| {
        b.iter_batched(
            || QuadTree::new(world_bounds()),
            |mut tree| {
                tree.insert_all(points.iter().copied());
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_query_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query_rect");
    for &n in &[4096_usize, 16384] {
        let points = gen_uniform_points(n);
        group.bench_function(format!("window_queries_n{}", n), |b| {
            b.iter_batched(
                || build_tree(&points),
                |tree| {
                    let mut total = 0_usize;
                    for q in 0..256 {
                        let x = (q % 16) as f64 * 120.0 + 64.0;
                        let y = (q / 16) as f64 * 120.0 + 64.0;
                        total += tree.query(&Quad::new(x, y, 128.0, 128.0)).len();
                    }
                    black_box(total);
                },
                BatchSize::SmallInput,
            )
        });

        // Baseline: the same windows over a flat scan, to keep the pruning
        // win honest.
        group.bench_function(format!("linear_scan_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let mut total = 0_usize;
                    for q in 0..256 {
                        let x = (q % 16) as f64 * 120.0 + 64.0;
                        let y = (q / 16) as f64 * 120.0 + 64.0;
                        let window = Quad::new(x, y, 128.0, 128.0);
                        total += points.iter().filter(|&&p| window.contains(p)).count();
                    }
                    black_box(total);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query_circle");
    let points = gen_clustered_points(16, 512, 96.0);
    group.bench_function("probe_clusters", |b| {
        b.iter_batched(
            || build_tree(&points),
            |tree| {
                let mut total = 0_usize;
                for q in 0..128 {
                    let x = (q % 16) as f64 * 120.0 + 64.0;
                    let y = (q / 16) as f64 * 240.0 + 64.0;
                    total += tree.query(&Circle::new((x, y), 48.0)).len();
                }
                black_box(total);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_remove_collapse(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_remove");
    let points = gen_uniform_points(4096);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("remove_all_with_collapse", |b| {
        b.iter_batched(
            || {
                let mut tree = QuadTree::with_options(
                    world_bounds(),
                    QuadTreeOptions {
                        collapse_empty: true,
                        ..Default::default()
                    },
                );
                tree.insert_all(points.iter().copied());
                tree
            },
            |mut tree| {
                tree.remove_all(points.iter().copied());
                black_box(tree.is_divided());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_query_rect,
    bench_query_circle,
    bench_remove_collapse,
);
criterion_main!(benches);
