use std::hint::black_box;
use std::time::Instant;

use mazewalk_common::CellCoord;
use mazewalk_kernel::maze::plaza_center;
use mazewalk_kernel::{ClearMode, MazeGenerator, topology};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_generate(size: usize, iterations: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(MazeGenerator::generate(black_box(size), &mut rng));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  generate ({size}x{size}, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_clear_region(size: usize, radius: usize, iterations: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let base = MazeGenerator::generate(size, &mut rng).expect("valid size");
    let center = plaza_center(size);

    let start = Instant::now();
    for _ in 0..iterations {
        let mut grid = base.clone();
        MazeGenerator::clear_region(&mut grid, black_box(center), radius, ClearMode::Clamped);
        black_box(&grid);
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  clear_region ({size}x{size}, r={radius}, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}"
    );
}

fn bench_facing_edits(size: usize, iterations: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut grid = MazeGenerator::generate(size, &mut rng).expect("valid size");

    let start = Instant::now();
    for i in 0..iterations {
        let c = CellCoord::new((i % size) as i32, ((i / size) % size) as i32);
        if !grid.place(black_box(c)) {
            grid.remove(black_box(c));
        }
        black_box(grid.drain_events());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  place/remove ({size}x{size}, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_topology(size: usize, iterations: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let grid = MazeGenerator::generate(size, &mut rng).expect("valid size");

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(topology::is_perfect(black_box(&grid)));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  is_perfect ({size}x{size}, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn main() {
    println!("=== Maze Generation Benchmarks ===\n");

    println!("Generate:");
    bench_generate(31, 1000);
    bench_generate(101, 100);
    bench_generate(501, 10);

    println!("\nPlaza clear:");
    bench_clear_region(31, 3, 10000);
    bench_clear_region(101, 20, 1000);

    println!("\nGrid edits:");
    bench_facing_edits(31, 100000);

    println!("\nTopology check:");
    bench_topology(31, 1000);
    bench_topology(101, 100);

    println!("\n=== Done ===");
}
