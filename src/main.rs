//! Terminal snake.
//!
//! One single-threaded loop folds the fixed 10 Hz tick and the key/resize
//! events into an ordered sequence: input is polled with a timeout that
//! expires exactly at the next tick deadline, so updates and input can
//! never race over the game state.

mod game;
mod grid;
mod input;
mod snake;
mod term;
mod view;

use std::time::{Duration, Instant};

use anyhow::{ensure, Result};
use crossterm::event::{self, Event, KeyEventKind};

use game::{GameData, TICK_MS};
use grid::Bounds;
use term::{Frame, Screen};

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 12;

fn main() -> Result<()> {
    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always hand the terminal back, whatever the loop returned.
    let _ = screen.restore();
    result
}

fn run(screen: &mut Screen) -> Result<()> {
    let (w, h) = screen.size()?;
    ensure!(
        w >= MIN_WIDTH && h >= MIN_HEIGHT,
        "terminal too small: need at least {}x{}, got {}x{}",
        MIN_WIDTH,
        MIN_HEIGHT,
        w,
        h
    );

    let mut game = GameData::new(Bounds::new(w, h));
    let mut frame = Frame::new(w, h);

    let tick = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        frame.reset();
        view::render(&game, &mut frame);
        screen.draw(&frame)?;

        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if input::is_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = input::map_key(key) {
                        game.apply(command);
                    }
                }
                Event::Resize(new_w, new_h) => {
                    game.set_bounds(Bounds::new(new_w, new_h));
                    frame = Frame::new(new_w, new_h);
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            game.tick();
        }
    }
}
