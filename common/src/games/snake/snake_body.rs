use std::collections::VecDeque;

use super::settings::{AI_START_BODY, AI_START_DIRECTION, PLAYER_START_BODY, PLAYER_START_DIRECTION};
use super::types::{Direction, Point};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub direction: Direction,
}

impl Snake {
    pub fn new(body: impl IntoIterator<Item = Point>, direction: Direction) -> Self {
        let body: VecDeque<Point> = body.into_iter().collect();
        assert!(!body.is_empty(), "Snake needs at least one segment");
        Self { body, direction }
    }

    pub fn initial_player() -> Self {
        Self::new(PLAYER_START_BODY, PLAYER_START_DIRECTION)
    }

    pub fn initial_ai() -> Self {
        Self::new(AI_START_BODY, AI_START_DIRECTION)
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    /// Whether moving the head onto `point` bites the body. The current tail
    /// is left out because it vacates the cell this step.
    pub fn blocks_own_head(&self, point: Point) -> bool {
        let last = self.body.len() - 1;
        self.body.iter().take(last).any(|p| *p == point)
    }

    pub fn cells(&self) -> Vec<Point> {
        self.body.iter().copied().collect()
    }
}
