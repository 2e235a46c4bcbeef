use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use minefield::{Board, Level, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for level in [Level::Easy, Level::Medium, Level::Hard] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{level:?}")), &level, |b, &level| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(Board::seeded(level.rows(), level.cols(), level.mines(), seed).unwrap())
            });
        });
    }
    group.finish();
}

fn bench_cascade(c: &mut Criterion) {
    // Single mine in a corner: one reveal floods the whole grid.
    let mut group = c.benchmark_group("cascade");
    for size in [32usize, 128, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || {
                    Board::with_mines(size, size, [Position::new(0, 0)], StdRng::seed_from_u64(1))
                        .unwrap()
                },
                |mut board| {
                    board.reveal(Position::new(size - 1, size - 1), false).unwrap();
                    black_box(board.has_won())
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_first_click_relocation(c: &mut Criterion) {
    let level = Level::Hard;
    c.bench_function("first_click_relocation", |b| {
        b.iter_batched(
            || {
                let board = Board::seeded(level.rows(), level.cols(), level.mines(), 7).unwrap();
                let mine = board.mine_positions().next().unwrap();
                (board, mine)
            },
            |(mut board, mine)| black_box(board.reveal(mine, true).unwrap()),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_cascade,
    bench_first_click_relocation
);
criterion_main!(benches);
