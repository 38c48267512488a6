use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_pong::core::{GameSnapshot, GameState};
use tui_pong::term::{FrameBuffer, GameView, Viewport};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    state.keys_mut().key_down("w");
    state.keys_mut().key_down("ArrowDown");

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            black_box(state.tick());
            if !state.is_playing() {
                state.start();
            }
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let vp = Viewport::new(162, 64);

    c.bench_function("render_frame_162x64", |b| {
        b.iter(|| {
            state.tick();
            if !state.is_playing() {
                state.start();
            }
            view.render_into(&state.snapshot(), black_box(vp), &mut fb);
        })
    });
}

criterion_group!(benches, bench_tick, bench_snapshot, bench_render);
criterion_main!(benches);
