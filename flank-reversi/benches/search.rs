use criterion::*;

use flank_reversi::test_utils::{positions, random_board};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn criterion_best_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_move");

    let opening = positions::standard_opening();
    group.bench_function("opening", |b| b.iter(|| black_box(&opening).best_move()));

    let mut rng = StdRng::seed_from_u64(0);
    for &edge in [8, 16, 25].iter() {
        let board = random_board(&mut rng, edge, edge, 0.5);
        group.bench_with_input(BenchmarkId::new("random", edge), &board, |b, board| {
            b.iter(|| black_box(board).best_move())
        });
    }

    group.finish();
}

criterion_group!(search, criterion_best_move);
criterion_main!(search);
