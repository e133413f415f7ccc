use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates, 1-indexed on both axes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the 1-indexed bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 1
            && self.y >= 1
            && self.x <= i32::from(bounds.width)
            && self.y <= i32::from(bounds.height)
    }

    /// Returns the neighboring position one cell away in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// Snake body segments (head first) plus the current travel direction.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body, direction }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
        }
    }

    /// Stores the direction applied on the next movement step.
    ///
    /// Any cardinal direction is accepted, including the reverse of the
    /// current travel direction.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Returns the current travel direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the head position for the next movement step.
    #[must_use]
    pub fn next_head_position(&self) -> Position {
        self.head().stepped(self.direction)
    }

    /// Prepends the next head position, leaving the tail in place.
    pub fn push_head(&mut self) {
        let next = self.next_head_position();
        self.body.push_front(next);
    }

    /// Removes the tail segment.
    pub fn drop_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn bounds_are_one_indexed_and_inclusive() {
        let bounds = GridSize {
            width: 20,
            height: 20,
        };

        assert!(Position { x: 1, y: 1 }.is_within_bounds(bounds));
        assert!(Position { x: 20, y: 20 }.is_within_bounds(bounds));
        assert!(!Position { x: 0, y: 10 }.is_within_bounds(bounds));
        assert!(!Position { x: 21, y: 10 }.is_within_bounds(bounds));
        assert!(!Position { x: 10, y: 0 }.is_within_bounds(bounds));
        assert!(!Position { x: 10, y: 21 }.is_within_bounds(bounds));
    }

    #[test]
    fn snake_moves_one_cell_per_step() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.push_head();
        snake.drop_tail();

        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn skipping_the_tail_drop_grows_by_one() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Down);

        snake.push_head();

        assert_eq!(snake.head(), Position { x: 5, y: 6 });
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn reversal_is_accepted_unconditionally() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.set_direction(Direction::Left);
        snake.push_head();
        snake.drop_tail();

        assert_eq!(snake.head(), Position { x: 4, y: 5 });
    }

    #[test]
    fn head_overlap_ignores_the_head_itself() {
        let snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 3, y: 2 },
                Position { x: 3, y: 3 },
                Position { x: 2, y: 3 },
                Position { x: 2, y: 2 },
            ],
            Direction::Up,
        );

        assert!(snake.head_overlaps_body());

        let straight = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 3, y: 2 },
                Position { x: 4, y: 2 },
            ],
            Direction::Left,
        );
        assert!(!straight.head_overlaps_body());
    }
}
