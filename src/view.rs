//! Render adapter: projects the game state onto a frame. Stateless; all
//! the drawing primitives live here, the terminal I/O in `term`.

use crate::game::{GameData, GameStatus};
use crate::term::Frame;

const HEAD_GLYPH: char = '@';
const TAIL_GLYPH: char = '·';
const FOOD_GLYPH: char = '+';

const HELP_TEXT: &str = "Arrows/WASD move  P pause  Esc quit";

const PAUSED_LINES: [&str; 2] = ["Game paused.", "Press P to unpause."];
const GAME_OVER_LINES: [&str; 2] = ["Game over!", "Press R to restart."];

pub fn render(game: &GameData, frame: &mut Frame) {
    let snake = game.snake();
    frame.set(snake.head().x, snake.head().y, HEAD_GLYPH);
    for p in snake.tail() {
        frame.set(p.x, p.y, TAIL_GLYPH);
    }

    let food = game.food();
    frame.set(food.x, food.y, FOOD_GLYPH);

    draw_box(frame, 0, 0, frame.width(), frame.height());
    draw_help(frame);

    match game.status() {
        GameStatus::Running => {}
        GameStatus::Paused => draw_message(frame, &PAUSED_LINES),
        GameStatus::GameOver => draw_message(frame, &GAME_OVER_LINES),
    }
}

/// Help line, right-aligned on the reserved header row inside the border.
fn draw_help(frame: &mut Frame) {
    let x0 = frame.width() - HELP_TEXT.chars().count() as i32 - 2;
    for (i, ch) in HELP_TEXT.chars().enumerate() {
        frame.set(x0 + i as i32, 1, ch);
    }
}

/// Centered message box sized from the longest line plus padding, with
/// the interior blanked so the playfield does not show through.
fn draw_message(frame: &mut Frame, lines: &[&str]) {
    let max_len = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;
    let box_w = max_len + 4;
    let box_h = lines.len() as i32 + 2;
    let left = (frame.width() - box_w) / 2;
    let top = (frame.height() - box_h) / 2;

    for y in top..top + box_h {
        for x in left..left + box_w {
            frame.set(x, y, ' ');
        }
    }
    draw_box(frame, left, top, box_w, box_h);

    for (i, line) in lines.iter().enumerate() {
        for (j, ch) in line.chars().enumerate() {
            frame.set(left + 2 + j as i32, top + 1 + i as i32, ch);
        }
    }
}

fn draw_box(frame: &mut Frame, left: i32, top: i32, width: i32, height: i32) {
    let right = left + width - 1;
    let bottom = top + height - 1;

    frame.set(left, top, '┌');
    frame.set(right, top, '┐');
    frame.set(left, bottom, '└');
    frame.set(right, bottom, '┘');

    for x in left + 1..right {
        frame.set(x, top, '─');
        frame.set(x, bottom, '─');
    }
    for y in top + 1..bottom {
        frame.set(left, y, '│');
        frame.set(right, y, '│');
    }
}
