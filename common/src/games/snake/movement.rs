use super::snake_body::Snake;
use super::types::{CollisionReason, Direction, Point};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved { snake: Snake, ate: bool },
    Collided(CollisionReason),
}

/// The direction a snake actually takes: the pending request unless it would
/// reverse the snake onto itself.
pub fn resolve_direction(current: Direction, pending: Option<Direction>) -> Direction {
    match pending {
        Some(requested) if !requested.is_opposite(&current) => requested,
        _ => current,
    }
}

/// Advances `snake` one cell. Collisions are checked against the pre-move
/// body, so the head may enter the cell the tail is leaving but nothing else.
pub fn step(
    snake: &Snake,
    pending: Option<Direction>,
    opponent: &Snake,
    food: Option<Point>,
) -> StepOutcome {
    let direction = resolve_direction(snake.direction, pending);

    let Some(next_head) = snake.head().step(direction) else {
        return StepOutcome::Collided(CollisionReason::Wall);
    };

    if opponent.occupies(next_head) {
        return StepOutcome::Collided(CollisionReason::OpponentCollision);
    }

    if snake.blocks_own_head(next_head) {
        return StepOutcome::Collided(CollisionReason::SelfCollision);
    }

    let mut moved = snake.clone();
    moved.direction = direction;
    moved.body.push_front(next_head);

    let ate = food == Some(next_head);
    if !ate {
        moved.body.pop_back();
    }

    StepOutcome::Moved { snake: moved, ate }
}
