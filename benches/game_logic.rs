use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tick_tetris::core::{clear_lines, Grid, Rules, SpawnOrder, State};
use tick_tetris::engine::Session;
use tick_tetris::types::{Command, PieceKind};

fn running() -> State {
    State::with_rules(Rules {
        spawn_order: SpawnOrder::Bag { seed: 12345 },
        ..Rules::default()
    })
    .start()
    .new_tetramino()
    .unwrap()
}

fn bench_gravity(c: &mut Criterion) {
    c.bench_function("gravity_tick", |b| {
        let mut session = Session::default();
        session.apply(Command::Start);
        b.iter(|| {
            if !session.state().is_running() {
                session.apply(Command::Start);
            }
            black_box(session.apply(Command::Tick));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let grid = Grid::new().with_cells_set(
        (16..20).flat_map(|row| (0..10).map(move |col| (row, col, Some(PieceKind::I)))),
    );

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| clear_lines(black_box(&grid)))
    });
}

fn bench_new_tetramino(c: &mut Criterion) {
    let mut rested = running();
    while let Some(next) = rested.try_move_down() {
        rested = next;
    }

    c.bench_function("lock_and_spawn", |b| {
        b.iter(|| black_box(&rested).new_tetramino())
    });
}

fn bench_try_move(c: &mut Criterion) {
    let state = running();

    c.bench_function("try_move_left", |b| {
        b.iter(|| black_box(&state).try_move_left())
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let state = running().try_move_down().unwrap();

    c.bench_function("try_rotate", |b| {
        b.iter(|| black_box(&state).try_rotate())
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = running();

    c.bench_function("snapshot", |b| b.iter(|| black_box(&state).snapshot()));
}

criterion_group!(
    benches,
    bench_gravity,
    bench_line_clear,
    bench_new_tetramino,
    bench_try_move,
    bench_try_rotate,
    bench_snapshot
);
criterion_main!(benches);
