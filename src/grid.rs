//! Grid geometry: coordinates, playable bounds and collision predicates.

/// Horizontal step size. Terminal cells are about twice as tall as they are
/// wide, so the snake moves two columns per horizontal step and food only
/// spawns on the matching odd columns.
pub const STEP_X: i32 = 2;

/// Width of the frame border on every side.
const BORDER: i32 = 1;
/// Rows reserved above the play area: the top border plus the help line.
const TOP_MARGIN: i32 = 2;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Terminal dimensions plus the playable interior derived from them.
///
/// The same interior is used for wall collisions and for food placement,
/// so the two can never disagree.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    pub fn new(width: u16, height: u16) -> Self {
        Bounds { width: width as i32, height: height as i32 }
    }

    /// True if `p` lies within the playable interior, border and header
    /// row excluded. Cells exactly on the interior edge count as inside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= BORDER
            && p.x <= self.width - 1 - BORDER
            && p.y >= TOP_MARGIN
            && p.y <= self.height - 1 - BORDER
    }

    /// The snake's spawn point, x aligned to the odd column grid that
    /// horizontal movement (and food placement) stays on.
    pub fn center(&self) -> Point {
        let half = self.width / 2;
        Point::new(half + half % 2 - 1, self.height / 2)
    }

    /// Every interior cell food may occupy: odd x only, so the snake can
    /// always line up with it.
    pub fn food_cells(&self) -> Vec<Point> {
        let mut cells = vec![];
        for y in TOP_MARGIN..=self.height - 1 - BORDER {
            let mut x = BORDER;
            while x <= self.width - 1 - BORDER {
                cells.push(Point::new(x, y));
                x += STEP_X;
            }
        }
        cells
    }
}

pub fn is_wall_collision(head: Point, bounds: &Bounds) -> bool {
    !bounds.contains(head)
}

pub fn is_self_collision(head: Point, tail: &[Point]) -> bool {
    tail.contains(&head)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(40, 20)
    }

    #[test]
    fn interior_edges_are_not_collisions() {
        let b = bounds();
        assert!(!is_wall_collision(Point::new(1, 10), &b));
        assert!(!is_wall_collision(Point::new(38, 10), &b));
        assert!(!is_wall_collision(Point::new(10, 2), &b));
        assert!(!is_wall_collision(Point::new(10, 18), &b));
    }

    #[test]
    fn one_step_beyond_each_edge_is_a_collision() {
        let b = bounds();
        assert!(is_wall_collision(Point::new(0, 10), &b));
        assert!(is_wall_collision(Point::new(-1, 10), &b));
        assert!(is_wall_collision(Point::new(39, 10), &b));
        assert!(is_wall_collision(Point::new(10, 1), &b));
        assert!(is_wall_collision(Point::new(10, 19), &b));
    }

    #[test]
    fn self_collision_requires_exact_match() {
        let tail = [Point::new(8, 10), Point::new(6, 10), Point::new(4, 10)];
        assert!(is_self_collision(Point::new(6, 10), &tail));
        assert!(!is_self_collision(Point::new(10, 10), &tail));
        assert!(!is_self_collision(Point::new(6, 11), &tail));
        assert!(!is_self_collision(Point::new(6, 10), &[]));
    }

    #[test]
    fn food_cells_are_interior_with_odd_x() {
        let b = bounds();
        let cells = b.food_cells();
        assert!(!cells.is_empty());
        for p in &cells {
            assert!(b.contains(*p), "{:?} outside interior", p);
            assert_eq!(p.x % 2, 1, "{:?} not on the odd column grid", p);
        }
    }

    #[test]
    fn food_cells_cover_the_full_interior_range() {
        let cells = bounds().food_cells();
        assert!(cells.contains(&Point::new(1, 2)));
        assert!(cells.contains(&Point::new(37, 18)));
        assert!(!cells.iter().any(|p| p.x == 39 || p.y == 19));
    }

    #[test]
    fn center_is_on_the_odd_column_grid() {
        for w in [39, 40, 41, 42, 80] {
            let c = Bounds::new(w, 24).center();
            assert_eq!(c.x % 2, 1, "width {}: center {:?}", w, c);
        }
    }
}
