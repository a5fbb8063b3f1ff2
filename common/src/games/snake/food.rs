use crate::games::SessionRng;
use crate::log;
use super::settings::GRID_SIZE;
use super::snake_body::Snake;
use super::types::Point;

/// Every cell not covered by one of `snakes`, in row-major order.
pub fn free_cells(snakes: &[&Snake]) -> Vec<Point> {
    let mut cells = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let pos = Point::new(x, y);
            if !snakes.iter().any(|s| s.occupies(pos)) {
                cells.push(pos);
            }
        }
    }
    cells
}

/// Picks a uniformly random free cell. Returns `None` only when the snakes
/// cover the whole board.
pub fn place_food(snakes: &[&Snake], rng: &mut SessionRng) -> Option<Point> {
    let candidates = free_cells(snakes);
    let food = rng.pick(&candidates).copied();
    match food {
        Some(pos) => log!("Food placed at ({}, {})", pos.x, pos.y),
        None => log!("No free cell left for food"),
    }
    food
}
