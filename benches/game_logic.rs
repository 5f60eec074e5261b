use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reaction_tetris::core::{hard_drop, Board, GameState, Piece};
use reaction_tetris::term::render_view;
use reaction_tetris::types::{PieceKind, PlayerMove};

fn bench_tick(c: &mut Criterion) {
    c.bench_function("game_tick", |b| {
        let mut state = GameState::new(12345);
        b.iter(|| {
            if state.game_over() {
                state = GameState::new(12345);
            }
            black_box(state.tick(None));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 18..22 {
                board.fill_row(row, PieceKind::I);
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("hard_drop_empty_board", |b| {
        b.iter(|| {
            let mut piece = Piece::spawn(black_box(PieceKind::T));
            black_box(hard_drop(&mut piece, &board));
        })
    });
}

fn bench_drop_game(c: &mut Criterion) {
    c.bench_function("hard_drop_until_stack_out", |b| {
        b.iter(|| {
            let mut state = GameState::new(black_box(7));
            while !state.game_over() {
                state.tick(Some(PlayerMove::HardDrop));
            }
            black_box(state.score())
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut board = Board::new();
    board.fill_row(21, PieceKind::S);
    let piece = Piece::at(PieceKind::L, 0, 10, 3);

    c.bench_function("render_view", |b| {
        b.iter(|| black_box(render_view(&board, &piece, 120)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_drop_game,
    bench_render
);
criterion_main!(benches);
