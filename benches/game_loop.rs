use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_arena::core::{Game, InputEvent, Key};
use tui_arena::term::{FrameBuffer, SceneView, Viewport};
use tui_arena::types::{Loc, Size, SCREEN_HEIGHT, SCREEN_WIDTH};

fn demo() -> Game {
    let mut game = Game::new();
    game.setup_demo_scene();
    game
}

fn bench_update(c: &mut Criterion) {
    let mut game = demo();
    game.handle_event(InputEvent::key_down(Key::D));

    c.bench_function("update_tick", |b| {
        b.iter(|| {
            game.update();
            black_box(&game);
            // Keep the position from overflowing over long runs.
            if let Some(p) = game.player_mut() {
                p.loc = Loc::ORIGIN;
            }
        })
    });
}

fn bench_handle_event(c: &mut Criterion) {
    let mut game = demo();

    c.bench_function("handle_key_event", |b| {
        b.iter(|| {
            game.handle_event(black_box(InputEvent::key_down(Key::W)));
            game.handle_event(black_box(InputEvent::key_up(Key::W)));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut game = demo();
    for _ in 0..50 {
        game.new_entity();
    }
    let screen = Size::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    game.fit_backdrop(screen);
    let view = SceneView::new().with_status_line(true);
    let viewport = Viewport::new(200, 60);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_scene_200x60", |b| {
        b.iter(|| {
            view.render_into(black_box(&game), screen, viewport, &mut fb);
        })
    });
}

criterion_group!(benches, bench_update, bench_handle_event, bench_render);
criterion_main!(benches);
