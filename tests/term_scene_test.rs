use tui_arena::core::Game;
use tui_arena::term::{display_rect, FrameBuffer, Rect, Rgb, SceneView, Viewport};
use tui_arena::types::{Color, Loc, Size};

const SCREEN: Size = Size::new(640, 480);

fn demo() -> Game {
    let mut game = Game::new();
    game.setup_demo_scene();
    game.fit_backdrop(SCREEN);
    game
}

fn bg(fb: &FrameBuffer, x: u16, y: u16) -> Rgb {
    fb.get(x, y).unwrap().style.bg
}

#[test]
fn player_at_center_maps_to_screen_center() {
    let game = demo();
    let rect = display_rect(game.player().unwrap(), game.center, SCREEN);
    assert_eq!(
        rect,
        Rect {
            x: 320 - 25,
            y: 240 - 50,
            w: 50,
            h: 100
        }
    );
}

#[test]
fn scene_draws_backdrop_player_and_reference() {
    let game = demo();
    // 640x480 onto 64x24: 10 px per column, 20 px per row.
    let fb = SceneView::new().render(&game, SCREEN, Viewport::new(64, 24));

    let grey = Rgb::from(Color::GREY);
    let red = Rgb::from(Color::RED);
    let blue = Rgb::from(Color::BLUE);

    assert_eq!(bg(&fb, 0, 0), grey);
    assert_eq!(bg(&fb, 63, 23), grey);

    // Player covers columns 29..34, rows 9..14.
    assert_eq!(bg(&fb, 29, 9), red);
    assert_eq!(bg(&fb, 33, 13), red);
    assert_eq!(bg(&fb, 34, 13), grey);
    assert_eq!(bg(&fb, 33, 14), grey);

    // Reference block at world (100, 100) is up and right: columns 37..47, rows 2..12.
    assert_eq!(bg(&fb, 37, 2), blue);
    assert_eq!(bg(&fb, 46, 11), blue);
    assert_eq!(bg(&fb, 47, 11), grey);
    assert_eq!(bg(&fb, 37, 1), grey);
}

#[test]
fn moving_the_center_recenters_the_view() {
    let mut game = demo();
    game.center = Loc::new(100, 100);
    game.fit_backdrop(SCREEN);
    let fb = SceneView::new().render(&game, SCREEN, Viewport::new(64, 24));

    let blue = Rgb::from(Color::BLUE);
    // Reference is now centered: pixels (270, 140)..(370, 340).
    assert_eq!(bg(&fb, 27, 7), blue);
    assert_eq!(bg(&fb, 36, 16), blue);
    assert_eq!(bg(&fb, 32, 12), blue);
}

#[test]
fn later_entities_draw_over_earlier_ones() {
    let mut game = demo();
    let cover = game.new_entity();
    cover.color = Color::rgb(0, 0xFF, 0);
    cover.size = Size::new(50, 100);

    let fb = SceneView::new().render(&game, SCREEN, Viewport::new(64, 24));
    assert_eq!(bg(&fb, 30, 10), Rgb::new(0, 0xFF, 0));
}

#[test]
fn offscreen_entities_are_clipped() {
    let mut game = demo();
    let far = game.new_entity();
    far.loc = Loc::new(10_000, -10_000);
    far.color = Color::rgb(1, 2, 3);

    let fb = SceneView::new().render(&game, SCREEN, Viewport::new(64, 24));
    assert!(fb.cells().iter().all(|c| c.style.bg != Rgb::new(1, 2, 3)));
}

#[test]
fn status_line_shows_loop_and_latches() {
    let mut game = demo();
    game.loop_count = 42;
    game.controller.up = true;
    game.controller.mouse_right = true;

    let fb = SceneView::new()
        .with_status_line(true)
        .render(&game, SCREEN, Viewport::new(64, 24));

    let mut row = String::new();
    for x in 0..fb.width() {
        row.push(fb.get(x, 0).unwrap().ch);
    }
    assert!(row.starts_with("LOOP 42"));
    assert!(row.contains("POS 0,0"));
    assert!(row.contains("W....R"));
}

#[test]
fn resizing_viewport_resizes_framebuffer() {
    let game = demo();
    let view = SceneView::new();
    let mut fb = FrameBuffer::new(10, 10);
    view.render_into(&game, SCREEN, Viewport::new(32, 12), &mut fb);
    assert_eq!((fb.width(), fb.height()), (32, 12));
    assert_eq!(bg(&fb, 16, 6), Rgb::from(Color::RED));
}
