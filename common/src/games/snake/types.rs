use serde::{Deserialize, Serialize};

use super::settings::GRID_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn is_on_grid(&self) -> bool {
        self.x < GRID_SIZE && self.y < GRID_SIZE
    }

    /// The neighbouring cell in `direction`, or `None` when it would leave the grid.
    pub fn step(&self, direction: Direction) -> Option<Point> {
        match direction {
            Direction::Up if self.y > 0 => Some(Point::new(self.x, self.y - 1)),
            Direction::Down if self.y + 1 < GRID_SIZE => Some(Point::new(self.x, self.y + 1)),
            Direction::Left if self.x > 0 => Some(Point::new(self.x - 1, self.y)),
            Direction::Right if self.x + 1 < GRID_SIZE => Some(Point::new(self.x + 1, self.y)),
            _ => None,
        }
    }

    pub fn manhattan_distance(&self, other: Point) -> u32 {
        (self.x.abs_diff(other.x) + self.y.abs_diff(other.y)) as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Enumeration order used wherever directions are compared, e.g. tie breaking.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }

    /// Directions a snake heading `current` may turn into this step.
    pub fn turns_from(current: Direction) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| !d.is_opposite(&current))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionReason {
    Wall,
    SelfCollision,
    OpponentCollision,
}

impl std::fmt::Display for CollisionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollisionReason::Wall => write!(f, "hit the wall"),
            CollisionReason::SelfCollision => write!(f, "bit itself"),
            CollisionReason::OpponentCollision => write!(f, "ran into the opponent"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    Win,
    Lose,
    Draw,
}

impl RoundResult {
    pub fn from_scores(player_score: u32, ai_score: u32) -> Self {
        match player_score.cmp(&ai_score) {
            std::cmp::Ordering::Greater => RoundResult::Win,
            std::cmp::Ordering::Less => RoundResult::Lose,
            std::cmp::Ordering::Equal => RoundResult::Draw,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    Running,
    Paused,
    Over(RoundResult),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEndReason {
    TimeUp,
    PlayerCollision(CollisionReason),
}
