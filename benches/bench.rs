use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sudoku_solver::solver::grid::parse_grid;
use sudoku_solver::solver::propagation::reduce;
use sudoku_solver::solver::search::{Engine, FirstOpen, MinimumRemaining};
use sudoku_solver::solver::topology::Topology;

const DIAGONAL_PUZZLE: &str =
    "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";

fn bench_topology(c: &mut Criterion) {
    c.bench_function("topology_new", |b| b.iter(|| black_box(Topology::new())));
}

fn bench_reduce(c: &mut Criterion) {
    let topology = Topology::new();
    let board = parse_grid(DIAGONAL_PUZZLE).unwrap();

    c.bench_function("reduce_diagonal_puzzle", |b| {
        b.iter(|| black_box(reduce(&topology, black_box(board))));
    });
}

fn bench_solve(c: &mut Criterion) {
    let board = parse_grid(DIAGONAL_PUZZLE).unwrap();
    let empty = parse_grid(&".".repeat(81)).unwrap();

    let mut group = c.benchmark_group("solve");
    group.bench_function("diagonal_puzzle_min_remaining", |b| {
        b.iter(|| {
            let mut engine = Engine::with_selector(MinimumRemaining);
            black_box(engine.solve(black_box(board)))
        });
    });
    group.bench_function("diagonal_puzzle_first_open", |b| {
        b.iter(|| {
            let mut engine = Engine::with_selector(FirstOpen);
            black_box(engine.solve(black_box(board)))
        });
    });
    group.bench_function("empty_grid", |b| {
        b.iter(|| {
            let mut engine = Engine::with_selector(MinimumRemaining);
            black_box(engine.solve(black_box(empty)))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_topology, bench_reduce, bench_solve);
criterion_main!(benches);
