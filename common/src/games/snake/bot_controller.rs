use crate::games::SessionRng;
use super::settings::{
    AI_GREEDY_PROBABILITY, DANGER_RADIUS, DANGER_WEIGHT, DISQUALIFIED_SCORE, FOOD_DISTANCE_WEIGHT,
    OPENNESS_WEIGHT,
};
use super::snake_body::Snake;
use super::types::{Direction, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotMode {
    Explore,
    Greedy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectionScore {
    pub direction: Direction,
    pub score: i32,
    pub safe: bool,
}

pub struct BotController;

impl BotController {
    pub fn pick_mode(rng: &mut SessionRng) -> BotMode {
        if rng.chance(AI_GREEDY_PROBABILITY) {
            BotMode::Greedy
        } else {
            BotMode::Explore
        }
    }

    pub fn calculate_move(
        ai: &Snake,
        player: &Snake,
        food: Option<Point>,
        rng: &mut SessionRng,
    ) -> Direction {
        let mode = Self::pick_mode(rng);
        Self::calculate_move_with_mode(mode, ai, player, food, rng)
    }

    pub fn calculate_move_with_mode(
        mode: BotMode,
        ai: &Snake,
        player: &Snake,
        food: Option<Point>,
        rng: &mut SessionRng,
    ) -> Direction {
        match mode {
            BotMode::Explore => Self::random_safe_move(ai, player, rng),
            BotMode::Greedy => Self::greedy_move(ai, player, food),
        }
    }

    fn random_safe_move(ai: &Snake, player: &Snake, rng: &mut SessionRng) -> Direction {
        let head = ai.head();
        let safe_directions: Vec<Direction> = Direction::turns_from(ai.direction)
            .filter(|&dir| {
                head.step(dir)
                    .is_some_and(|next_pos| Self::is_safe_position(next_pos, ai, player))
            })
            .collect();

        rng.pick(&safe_directions).copied().unwrap_or(ai.direction)
    }

    /// Highest-scoring direction, first one wins on ties. Keeps the current
    /// heading when every candidate is disqualified.
    pub fn greedy_move(ai: &Snake, player: &Snake, food: Option<Point>) -> Direction {
        let mut best: Option<DirectionScore> = None;
        for candidate in Self::score_directions(ai, player, food) {
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }

        match best {
            Some(b) if b.safe => b.direction,
            _ => ai.direction,
        }
    }

    pub fn score_directions(ai: &Snake, player: &Snake, food: Option<Point>) -> Vec<DirectionScore> {
        let head = ai.head();
        Direction::turns_from(ai.direction)
            .map(|direction| match head.step(direction) {
                Some(next_pos) if Self::is_safe_position(next_pos, ai, player) => DirectionScore {
                    direction,
                    score: Self::score_cell(next_pos, ai, player, food),
                    safe: true,
                },
                _ => DirectionScore {
                    direction,
                    score: DISQUALIFIED_SCORE,
                    safe: false,
                },
            })
            .collect()
    }

    fn score_cell(pos: Point, ai: &Snake, player: &Snake, food: Option<Point>) -> i32 {
        let food_term = food
            .map(|f| FOOD_DISTANCE_WEIGHT * pos.manhattan_distance(f) as i32)
            .unwrap_or(0);

        -food_term - Self::danger_penalty(pos, player)
            + OPENNESS_WEIGHT * Self::open_neighbours(pos, ai, player)
    }

    fn danger_penalty(pos: Point, player: &Snake) -> i32 {
        let nearest = player
            .body
            .iter()
            .map(|p| pos.manhattan_distance(*p))
            .min();

        match nearest {
            Some(d) if d <= DANGER_RADIUS => DANGER_WEIGHT * (DANGER_RADIUS - d + 1) as i32,
            _ => 0,
        }
    }

    fn open_neighbours(pos: Point, ai: &Snake, player: &Snake) -> i32 {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| pos.step(dir))
            .filter(|n| !ai.occupies(*n) && !player.occupies(*n))
            .count() as i32
    }

    fn is_safe_position(pos: Point, ai: &Snake, player: &Snake) -> bool {
        !ai.blocks_own_head(pos) && !player.occupies(pos)
    }
}
