use crate::grid::{Point, STEP_X};
use Direction::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Step vector for one tick of movement. Horizontal steps span two
    /// columns to compensate for the terminal cell aspect ratio.
    pub fn step(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-STEP_X, 0),
            Right => (STEP_X, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

pub struct Snake {
    head: Point,
    tail: Vec<Point>,
}

impl Snake {
    /// Builds a snake at `head` whose tail extends `tail_len` segments
    /// opposite `direction`, in head-to-tail order.
    pub fn new(head: Point, tail_len: usize, direction: Direction) -> Self {
        let (dx, dy) = direction.step();
        let tail = (1..=tail_len as i32)
            .map(|i| Point::new(head.x - dx * i, head.y - dy * i))
            .collect();
        Snake { head, tail }
    }

    pub fn head(&self) -> Point {
        self.head
    }

    pub fn tail(&self) -> &[Point] {
        &self.tail
    }

    /// Shifts every tail segment to its predecessor's position, moves the
    /// head one step along `direction`, and returns the position the last
    /// segment vacated. Growing re-occupies that position on the same tick.
    pub fn advance(&mut self, direction: Direction) -> Point {
        let displaced = self.tail.last().copied().unwrap_or(self.head);

        for i in (1..self.tail.len()).rev() {
            self.tail[i] = self.tail[i - 1];
        }
        if let Some(first) = self.tail.first_mut() {
            *first = self.head;
        }

        let (dx, dy) = direction.step();
        self.head = Point::new(self.head.x + dx, self.head.y + dy);
        displaced
    }

    /// Appends one segment at the position returned by this tick's
    /// `advance`. The only way the tail ever gets longer.
    pub fn grow(&mut self, segment: Point) {
        self.tail.push(segment);
    }
}
