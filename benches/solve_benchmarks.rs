use PuzzleEngine::core::{NUM_SHUFFLE_STEPS, TileGrid};
use PuzzleEngine::state_graph::{BoardState, StateCache, neighbors, shuffle, solve};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

const BOARD_SIZES: &[usize] = &[3, 4, 5];

fn seeded_cache(size: usize) -> (StateCache, usize) {
    let mut cache = StateCache::new();
    let root = cache.lookup_or_insert(BoardState {
        grid: TileGrid::solved(size),
        depth: 0,
    });
    (cache, root)
}

pub fn bench_shuffle_and_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle_and_solve");

    for &size in BOARD_SIZES {
        group.bench_with_input(BenchmarkId::new("full_round", size), &size, |b, &size| {
            b.iter_with_setup(
                || seeded_cache(size),
                |(mut cache, goal)| {
                    let mut rng = StdRng::seed_from_u64(42);
                    let scrambled =
                        shuffle(black_box(&mut cache), goal, NUM_SHUFFLE_STEPS, &mut rng);
                    let path = solve(black_box(&mut cache), scrambled, goal);
                    black_box(path)
                },
            );
        });
    }
    group.finish();
}

pub fn bench_neighbor_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbor_expansion");

    for &size in BOARD_SIZES {
        group.bench_with_input(BenchmarkId::new("single_state", size), &size, |b, &size| {
            b.iter_with_setup(
                || seeded_cache(size),
                |(mut cache, root)| {
                    let generated = neighbors(black_box(&mut cache), root);
                    black_box(generated)
                },
            );
        });
    }
    group.finish();
}

criterion_group!(solve_benches, bench_shuffle_and_solve, bench_neighbor_expansion);
criterion_main!(solve_benches);
