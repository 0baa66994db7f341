//! Grid coordinates and movement directions.

use serde::{Deserialize, Serialize};

/// A cell on the snake grid. `(0, 0)` is the top-left corner.
///
/// Signed so that a step off the edge is representable before the
/// boundary rule decides what happens to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction`, unbounded.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the point lies inside a `size` x `size` grid.
    #[must_use]
    pub const fn in_grid(self, size: i32) -> bool {
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }

    /// Wrap onto a `size` x `size` torus.
    #[must_use]
    pub const fn wrapped(self, size: i32) -> Self {
        Self {
            x: self.x.rem_euclid(size),
            y: self.y.rem_euclid(size),
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction of travel. Up decreases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(dx, dy)` for one step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    #[must_use]
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step() {
        let p = Point::new(5, 5);
        assert_eq!(p.step(Direction::Up), Point::new(5, 4));
        assert_eq!(p.step(Direction::Down), Point::new(5, 6));
        assert_eq!(p.step(Direction::Left), Point::new(4, 5));
        assert_eq!(p.step(Direction::Right), Point::new(6, 5));
    }

    #[test]
    fn test_wrapped() {
        assert_eq!(Point::new(15, 3).wrapped(15), Point::new(0, 3));
        assert_eq!(Point::new(-1, 3).wrapped(15), Point::new(14, 3));
        assert_eq!(Point::new(4, -1).wrapped(15), Point::new(4, 14));
        assert_eq!(Point::new(4, 15).wrapped(15), Point::new(4, 0));
        assert_eq!(Point::new(4, 7).wrapped(15), Point::new(4, 7));
    }

    #[test]
    fn test_in_grid() {
        assert!(Point::new(0, 0).in_grid(15));
        assert!(Point::new(14, 14).in_grid(15));
        assert!(!Point::new(15, 0).in_grid(15));
        assert!(!Point::new(0, -1).in_grid(15));
    }

    #[test]
    fn test_opposites() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }
}
