//! Fixed rule constants. None of these are runtime-configurable.

use std::time::Duration;

use super::types::{Direction, Point};

pub const GRID_SIZE: usize = 20;
pub const CELL_PIXEL_SIZE: usize = 20;

pub const ROUND_DURATION_SECS: u32 = 180;
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

pub const INITIAL_TICK_INTERVAL: Duration = Duration::from_millis(300);
pub const TICK_INTERVAL_DECREMENT: Duration = Duration::from_millis(5);
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(100);

pub const AI_MOVE_PROBABILITY: f64 = 0.75;
pub const AI_GREEDY_PROBABILITY: f64 = 0.7;
pub const AI_COLLISION_PENALTY: u32 = 2;

pub const DANGER_RADIUS: u32 = 2;
pub const FOOD_DISTANCE_WEIGHT: i32 = 20;
pub const DANGER_WEIGHT: i32 = 100;
pub const OPENNESS_WEIGHT: i32 = 2;
pub const DISQUALIFIED_SCORE: i32 = -1000;

pub const PLAYER_START_BODY: [Point; 2] = [Point::new(4, 4), Point::new(3, 4)];
pub const PLAYER_START_DIRECTION: Direction = Direction::Right;
pub const AI_START_BODY: [Point; 2] = [Point::new(15, 15), Point::new(16, 15)];
pub const AI_START_DIRECTION: Direction = Direction::Left;
pub const FOOD_START: Point = Point::new(10, 10);

/// Tick period after one more player meal.
pub fn faster_tick_interval(current: Duration) -> Duration {
    current.saturating_sub(TICK_INTERVAL_DECREMENT).max(MIN_TICK_INTERVAL)
}
