use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_rules::core::{Board, Grid};
use tetris_rules::types::{Command, Shape};

fn bench_tick(c: &mut Criterion) {
    let mut board = Board::new(12345);
    board.start();

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            if board.game_over() {
                board.start();
            }
            board.tick();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for y in 0..4 {
                grid.fill_row_except(y, Shape::Line, &[]);
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut board = Board::new(12345);
    board.start();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if board.game_over() {
                board.start();
            }
            board.apply(black_box(Command::DropDown));
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut board = Board::new(12345);
    board.start();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            board.move_left();
            board.move_right();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut board = Board::new(12345);
    board.start();
    for _ in 0..4 {
        board.tick();
    }

    c.bench_function("rotate_right", |b| {
        b.iter(|| {
            board.rotate_right();
        })
    });
}

fn bench_ghost(c: &mut Criterion) {
    let mut board = Board::new(12345);
    board.start();

    c.bench_function("ghost_y", |b| b.iter(|| black_box(board.ghost_y())));
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_move,
    bench_rotate,
    bench_ghost
);
criterion_main!(benches);
