use rand::seq::SliceRandom;

use crate::grid::{self, Bounds, Point};
use crate::input::Command;
use crate::snake::{Direction, Snake};

/// Game updates run at 10 Hz, independent of input timing.
pub const TICK_MS: u64 = 100;

const INITIAL_TAIL_LEN: usize = 5;
const INITIAL_DIRECTION: Direction = Direction::Right;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// Aggregate root for the whole game state. The tick loop and the input
/// mapper both funnel into this struct; nothing else mutates the snake,
/// the direction, the food or the status.
pub struct GameData {
    bounds: Bounds,
    snake: Snake,
    direction: Direction,
    food: Point,
    status: GameStatus,
}

impl GameData {
    pub fn new(bounds: Bounds) -> Self {
        let mut game = GameData {
            bounds,
            snake: Snake::new(bounds.center(), INITIAL_TAIL_LEN, INITIAL_DIRECTION),
            direction: INITIAL_DIRECTION,
            food: bounds.center(),
            status: GameStatus::Running,
        };
        game.spawn_food();
        game
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The terminal was resized. Game state is untouched; only the area
    /// the next ticks and renders work against changes.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// One fixed-rate update: advance, eat, collide. Does nothing unless
    /// the game is running, which is also what stops the clock after a
    /// game over until a restart flips the status back.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        let displaced = self.snake.advance(self.direction);

        if self.snake.head() == self.food {
            self.snake.grow(displaced);
            self.spawn_food();
        }

        if grid::is_wall_collision(self.snake.head(), &self.bounds)
            || grid::is_self_collision(self.snake.head(), self.snake.tail())
        {
            self.status = GameStatus::GameOver;
        }
    }

    /// Applies one input command. Illegal transitions are silently
    /// ignored; that is policy, not an error.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Turn(dir) => {
                if self.status == GameStatus::Running && dir != self.direction.opposite() {
                    self.direction = dir;
                }
            }
            Command::TogglePause => match self.status {
                GameStatus::Running => self.status = GameStatus::Paused,
                GameStatus::Paused => self.status = GameStatus::Running,
                GameStatus::GameOver => {}
            },
            Command::Restart => {
                if self.status == GameStatus::GameOver {
                    self.restart();
                }
            }
        }
    }

    fn restart(&mut self) {
        self.snake = Snake::new(self.bounds.center(), INITIAL_TAIL_LEN, INITIAL_DIRECTION);
        self.direction = INITIAL_DIRECTION;
        self.status = GameStatus::Running;
        self.spawn_food();
    }

    /// Places food uniformly on a free odd-column interior cell, never on
    /// the snake. A board with no free cell left means the snake has won
    /// all there is to win; treated as a game over.
    fn spawn_food(&mut self) {
        let choices: Vec<Point> = self
            .bounds
            .food_cells()
            .into_iter()
            .filter(|p| *p != self.snake.head() && !self.snake.tail().contains(p))
            .collect();

        match choices.choose(&mut rand::thread_rng()) {
            Some(p) => self.food = *p,
            None => self.status = GameStatus::GameOver,
        }
    }

    #[cfg(test)]
    pub fn place_food(&mut self, p: Point) {
        self.food = p;
    }
}
