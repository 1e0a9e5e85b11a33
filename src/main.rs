//! Terminal arena runner (default binary).
//!
//! `tui-arena` runs the game; `tui-arena --test` runs the built-in checks.
//! Other arguments are ignored.
//! Set `RUST_LOG` to raise verbosity; redirect stderr while the game is
//! running since the terminal is in raw mode.

use std::env;

use anyhow::{bail, Context, Result};

use tui_arena::core::Game;
use tui_arena::game_loop::{advance, event_buffer};
use tui_arena::input::{EventSource, TerminalEvents};
use tui_arena::self_test;
use tui_arena::term::{Display, DisplayConfig, SessionTimer};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    log::debug!("argc={}", args.len());

    match args.get(1).map(String::as_str) {
        None => game(),
        Some("--test") => tests(),
        Some(other) => {
            log::warn!("ignoring argument {other:?}; usage: tui-arena [--test]");
            game()
        }
    }
}

fn tests() -> Result<()> {
    println!("Running tests");
    let mut failed = 0;
    for result in self_test::run_all() {
        println!("## Running check_{}", result.name);
        for failure in &result.failures {
            println!("FAIL! {failure}");
        }
        if !result.passed() {
            failed += 1;
        }
    }
    if failed > 0 {
        bail!("{failed} self-test check(s) failed");
    }
    println!("All checks passed");
    Ok(())
}

fn game() -> Result<()> {
    let _timer = SessionTimer::new("game");

    let config = DisplayConfig::from_env();
    let mut display = Display::init(config).context("could not initialize display")?;

    if let Err(e) = display.load_media() {
        log::warn!("{e}");
    }

    let mut game = Game::new();
    game.setup_demo_scene();

    let mut events = match display.key_release_timeout() {
        Some(timeout) => TerminalEvents::new().with_key_release_timeout(timeout),
        None => TerminalEvents::new(),
    };
    let result = run(&mut display, &mut game, &mut events);

    // Always try to restore terminal state.
    let closed = display.close();
    result?;
    closed?;
    Ok(())
}

fn run(display: &mut Display, game: &mut Game, events: &mut impl EventSource) -> Result<()> {
    let mut scratch = event_buffer();
    display.start_frame();

    while !game.quit {
        advance(game, events, &mut scratch)?;
        display.paint(game)?;
        display.frame_delay();
        game.loop_count += 1;
    }

    log::info!("quit after {} loops", game.loop_count);
    Ok(())
}
