use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use minesweeper_core::*;
use std::hint::black_box;

fn open_board(c: &mut Criterion) {
    let layout = MineLayout::from_mine_coords((BOARD_SIDE, BOARD_SIDE), &[(8, 8)]).unwrap();

    c.bench_function("reveal_flood_classic", |b| {
        b.iter_batched(
            || Board::from_layout(&layout),
            |mut board| black_box(board.reveal((0, 0)).unwrap()),
            BatchSize::SmallInput,
        )
    });
}

fn wide_board(c: &mut Criterion) {
    let layout = MineLayout::from_mine_coords((200, 200), &[(199, 199)]).unwrap();

    c.bench_function("reveal_flood_200x200", |b| {
        b.iter_batched(
            || Board::from_layout(&layout),
            |mut board| black_box(board.reveal((0, 0)).unwrap()),
            BatchSize::LargeInput,
        )
    });
}

fn seeded_generation(c: &mut Criterion) {
    c.bench_function("generate_classic", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            black_box(Board::random(GameConfig::default(), seed).unwrap())
        })
    });
}

criterion_group!(benches, open_board, wide_board, seeded_generation);
criterion_main!(benches);
