use std::time::Duration;

use crate::games::SessionRng;
use crate::log;
use super::bot_controller::BotController;
use super::food::place_food;
use super::movement::{self, StepOutcome};
use super::settings::{
    AI_COLLISION_PENALTY, AI_MOVE_PROBABILITY, FOOD_START, INITIAL_TICK_INTERVAL,
    ROUND_DURATION_SECS, faster_tick_interval,
};
use super::snake_body::Snake;
use super::types::{CollisionReason, Direction, Point, RoundEndReason, RoundResult, RoundStatus};

/// Something that happened during one transition, for logs and the HUD.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundEvent {
    PlayerAte { at: Point, score: u32 },
    AiAte { at: Point, score: u32 },
    AiCrashed { reason: CollisionReason, player_score: u32 },
    PlayerCrashed { reason: CollisionReason },
    Paused,
    Resumed,
    Reset,
    Over { result: RoundResult, reason: RoundEndReason },
}

/// Post-transition view of the round handed to the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundSnapshot {
    pub player: Vec<Point>,
    pub player_direction: Direction,
    pub ai: Vec<Point>,
    pub ai_direction: Direction,
    pub food: Option<Point>,
    pub player_score: u32,
    pub ai_score: u32,
    pub time_remaining: u32,
    pub status: RoundStatus,
    pub tick_interval: Duration,
    pub events: Vec<RoundEvent>,
}

impl RoundSnapshot {
    pub fn is_paused(&self) -> bool {
        self.status == RoundStatus::Paused
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub result: RoundResult,
    pub reason: RoundEndReason,
    pub player_score: u32,
    pub ai_score: u32,
}

#[derive(Clone, Debug)]
pub struct Round {
    player: Snake,
    ai: Snake,
    food: Option<Point>,
    player_score: u32,
    ai_score: u32,
    pending_direction: Option<Direction>,
    time_remaining: u32,
    paused: bool,
    result: Option<RoundResult>,
    end_reason: Option<RoundEndReason>,
    tick_interval: Duration,
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

impl Round {
    pub fn new() -> Self {
        Self {
            player: Snake::initial_player(),
            ai: Snake::initial_ai(),
            food: Some(FOOD_START),
            player_score: 0,
            ai_score: 0,
            pending_direction: None,
            time_remaining: ROUND_DURATION_SECS,
            paused: false,
            result: None,
            end_reason: None,
            tick_interval: INITIAL_TICK_INTERVAL,
        }
    }

    pub fn reset(&mut self) -> Vec<RoundEvent> {
        *self = Self::new();
        log!("Round reset");
        vec![RoundEvent::Reset]
    }

    pub fn status(&self) -> RoundStatus {
        match self.result {
            Some(result) => RoundStatus::Over(result),
            None if self.paused => RoundStatus::Paused,
            None => RoundStatus::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status() == RoundStatus::Running
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.player_score, self.ai_score)
    }

    pub fn player(&self) -> &Snake {
        &self.player
    }

    pub fn ai(&self) -> &Snake {
        &self.ai
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn summary(&self) -> Option<RoundSummary> {
        let result = self.result?;
        let reason = self.end_reason?;
        Some(RoundSummary {
            result,
            reason,
            player_score: self.player_score,
            ai_score: self.ai_score,
        })
    }

    /// Buffers a direction for the next player step. Later requests replace
    /// earlier unconsumed ones.
    pub fn set_player_direction(&mut self, direction: Direction) -> Result<(), String> {
        match self.status() {
            RoundStatus::Over(_) => return Err("Round is over".to_string()),
            RoundStatus::Paused => return Err("Round is paused".to_string()),
            RoundStatus::Running => {}
        }
        if direction.is_opposite(&self.player.direction) {
            return Err(format!(
                "Cannot reverse from {:?} to {:?}",
                self.player.direction, direction
            ));
        }
        self.pending_direction = Some(direction);
        Ok(())
    }

    pub fn toggle_pause(&mut self) -> Result<Vec<RoundEvent>, String> {
        if self.is_over() {
            return Err("Round is over".to_string());
        }
        self.paused = !self.paused;
        log!("Round {}", if self.paused { "paused" } else { "resumed" });
        Ok(vec![if self.paused { RoundEvent::Paused } else { RoundEvent::Resumed }])
    }

    /// One firing of the movement timer: a player step, then an AI step with
    /// fixed probability.
    pub fn on_move_tick(&mut self, rng: &mut SessionRng) -> Vec<RoundEvent> {
        let mut events = Vec::new();
        if !self.is_running() {
            return events;
        }

        if self.food.is_none() {
            self.food = place_food(&[&self.player, &self.ai], rng);
        }

        self.step_player(rng, &mut events);
        if self.is_over() {
            return events;
        }

        if rng.chance(AI_MOVE_PROBABILITY) {
            self.step_ai(rng, &mut events);
        }

        events
    }

    /// One firing of the 1 Hz countdown.
    pub fn on_clock_tick(&mut self) -> Vec<RoundEvent> {
        let mut events = Vec::new();
        if !self.is_running() {
            return events;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            let result = RoundResult::from_scores(self.player_score, self.ai_score);
            self.finish(result, RoundEndReason::TimeUp, &mut events);
        }
        events
    }

    pub fn snapshot(&self, events: Vec<RoundEvent>) -> RoundSnapshot {
        RoundSnapshot {
            player: self.player.cells(),
            player_direction: self.player.direction,
            ai: self.ai.cells(),
            ai_direction: self.ai.direction,
            food: self.food,
            player_score: self.player_score,
            ai_score: self.ai_score,
            time_remaining: self.time_remaining,
            status: self.status(),
            tick_interval: self.tick_interval,
            events,
        }
    }

    fn step_player(&mut self, rng: &mut SessionRng, events: &mut Vec<RoundEvent>) {
        let pending = self.pending_direction.take();
        match movement::step(&self.player, pending, &self.ai, self.food) {
            StepOutcome::Moved { snake, ate } => {
                self.player = snake;
                if ate {
                    let at = self.player.head();
                    self.player_score += 1;
                    self.tick_interval = faster_tick_interval(self.tick_interval);
                    log!(
                        "Player ate food at ({}, {}). Score: {}, tick {}ms",
                        at.x,
                        at.y,
                        self.player_score,
                        self.tick_interval.as_millis()
                    );
                    events.push(RoundEvent::PlayerAte { at, score: self.player_score });
                    self.food = place_food(&[&self.player, &self.ai], rng);
                }
            }
            StepOutcome::Collided(reason) => {
                log!("Player {}", reason);
                events.push(RoundEvent::PlayerCrashed { reason });
                self.finish(RoundResult::Lose, RoundEndReason::PlayerCollision(reason), events);
            }
        }
    }

    fn step_ai(&mut self, rng: &mut SessionRng, events: &mut Vec<RoundEvent>) {
        let direction = BotController::calculate_move(&self.ai, &self.player, self.food, rng);
        match movement::step(&self.ai, Some(direction), &self.player, self.food) {
            StepOutcome::Moved { snake, ate } => {
                self.ai = snake;
                if ate {
                    let at = self.ai.head();
                    self.ai_score += 1;
                    log!("AI ate food at ({}, {}). Score: {}", at.x, at.y, self.ai_score);
                    events.push(RoundEvent::AiAte { at, score: self.ai_score });
                    self.food = place_food(&[&self.player, &self.ai], rng);
                }
            }
            StepOutcome::Collided(reason) => {
                self.ai = Snake::initial_ai();
                if self.food.is_some_and(|food| self.ai.occupies(food)) {
                    self.food = place_food(&[&self.player, &self.ai], rng);
                }
                self.player_score += AI_COLLISION_PENALTY;
                log!(
                    "AI {} and respawned. Player score: {}",
                    reason,
                    self.player_score
                );
                events.push(RoundEvent::AiCrashed { reason, player_score: self.player_score });
            }
        }
    }

    fn finish(&mut self, result: RoundResult, reason: RoundEndReason, events: &mut Vec<RoundEvent>) {
        self.result = Some(result);
        self.end_reason = Some(reason);
        self.paused = false;
        self.pending_direction = None;
        log!(
            "Round over: {:?} ({:?}), {} - {}",
            result,
            reason,
            self.player_score,
            self.ai_score
        );
        events.push(RoundEvent::Over { result, reason });
    }

    #[cfg(test)]
    pub(super) fn set_player(&mut self, snake: Snake) {
        self.player = snake;
    }

    #[cfg(test)]
    pub(super) fn set_ai(&mut self, snake: Snake) {
        self.ai = snake;
    }

    #[cfg(test)]
    pub(super) fn set_food(&mut self, food: Option<Point>) {
        self.food = food;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::settings::{AI_START_BODY, AI_START_DIRECTION, MIN_TICK_INTERVAL};

    fn run_clock_out(round: &mut Round) -> Vec<RoundEvent> {
        let mut events = Vec::new();
        for _ in 0..ROUND_DURATION_SECS {
            events.extend(round.on_clock_tick());
        }
        events
    }

    #[test]
    fn test_new_round_initial_values() {
        let round = Round::new();
        assert_eq!(round.status(), RoundStatus::Running);
        assert_eq!(round.scores(), (0, 0));
        assert_eq!(round.time_remaining(), ROUND_DURATION_SECS);
        assert_eq!(round.tick_interval(), INITIAL_TICK_INTERVAL);
        assert_eq!(round.food(), Some(FOOD_START));
        assert_eq!(round.player(), &Snake::initial_player());
        assert_eq!(round.ai(), &Snake::initial_ai());
        assert!(round.summary().is_none());
    }

    #[test]
    fn test_player_three_meals_then_timeout_wins() {
        let mut rng = SessionRng::new(42);
        let mut round = Round::new();

        for expected in 1..=3 {
            let next = round.player().head().step(round.player().direction).unwrap();
            round.set_food(Some(next));
            let events = round.on_move_tick(&mut rng);
            assert!(events.contains(&RoundEvent::PlayerAte { at: next, score: expected }));
        }
        assert_eq!(round.player().len(), 5);
        let (player_score, ai_score) = round.scores();
        assert_eq!(player_score, 3);
        assert!(ai_score < player_score);

        let events = run_clock_out(&mut round);
        assert_eq!(round.status(), RoundStatus::Over(RoundResult::Win));
        assert!(events.contains(&RoundEvent::Over {
            result: RoundResult::Win,
            reason: RoundEndReason::TimeUp
        }));
        assert_eq!(round.summary().unwrap().result, RoundResult::Win);
    }

    #[test]
    fn test_timeout_resolves_draw_and_lose() {
        let mut round = Round::new();
        run_clock_out(&mut round);
        assert_eq!(round.status(), RoundStatus::Over(RoundResult::Draw));

        let mut round = Round::new();
        round.ai_score = 2;
        run_clock_out(&mut round);
        assert_eq!(round.status(), RoundStatus::Over(RoundResult::Lose));
    }

    #[test]
    fn test_player_meal_speeds_up_tick() {
        let mut rng = SessionRng::new(1);
        let mut round = Round::new();
        let next = round.player().head().step(Direction::Right).unwrap();
        round.set_food(Some(next));
        round.on_move_tick(&mut rng);
        assert_eq!(round.tick_interval(), Duration::from_millis(295));

        round.tick_interval = MIN_TICK_INTERVAL;
        let next = round.player().head().step(round.player().direction).unwrap();
        round.set_food(Some(next));
        round.on_move_tick(&mut rng);
        assert_eq!(round.tick_interval(), MIN_TICK_INTERVAL);
    }

    #[test]
    fn test_relocated_food_is_free() {
        let mut rng = SessionRng::new(77);
        let mut round = Round::new();
        for _ in 0..20 {
            if round.is_over() {
                break;
            }
            let next = round.player().head().step(round.player().direction);
            round.set_food(next);
            round.on_move_tick(&mut rng);
            if let Some(food) = round.food() {
                assert!(!round.player().occupies(food));
                assert!(!round.ai().occupies(food));
            }
        }
    }

    #[test]
    fn test_ai_out_of_bounds_awards_player_and_respawns() {
        let mut rng = SessionRng::new(8);
        let mut round = Round::new();
        round.set_ai(Snake::new([Point::new(0, 0), Point::new(0, 1)], Direction::Up));
        round.set_player(Snake::new([Point::new(1, 0), Point::new(1, 1)], Direction::Down));

        let mut events = Vec::new();
        round.step_ai(&mut rng, &mut events);

        assert_eq!(round.scores(), (2, 0));
        assert_eq!(round.ai().cells(), AI_START_BODY.to_vec());
        assert_eq!(round.ai().direction, AI_START_DIRECTION);
        assert_eq!(round.status(), RoundStatus::Running);
        assert!(matches!(events.as_slice(), [RoundEvent::AiCrashed { player_score: 2, .. }]));
    }

    #[test]
    fn test_ai_respawn_moves_food_off_start_cells() {
        let mut rng = SessionRng::new(8);
        let mut round = Round::new();
        round.set_ai(Snake::new([Point::new(0, 0), Point::new(0, 1)], Direction::Up));
        round.set_player(Snake::new([Point::new(1, 0), Point::new(1, 1)], Direction::Down));
        round.set_food(Some(AI_START_BODY[0]));

        let mut events = Vec::new();
        round.step_ai(&mut rng, &mut events);

        assert_eq!(round.ai().cells(), AI_START_BODY.to_vec());
        let food = round.food().unwrap();
        assert!(!round.ai().occupies(food));
        assert!(!round.player().occupies(food));
    }

    #[test]
    fn test_ai_meal_scores_without_speeding_up() {
        let mut rng = SessionRng::new(9);
        let mut round = Round::new();
        // Up onto the food is the only move that is neither reversed, off grid nor into the player.
        round.set_ai(Snake::new([Point::new(0, 1), Point::new(1, 1)], Direction::Left));
        round.set_player(Snake::new(
            [Point::new(0, 2), Point::new(0, 3), Point::new(0, 4)],
            Direction::Down,
        ));
        round.set_food(Some(Point::new(0, 0)));

        let mut events = Vec::new();
        round.step_ai(&mut rng, &mut events);

        assert_eq!(events, vec![RoundEvent::AiAte { at: Point::new(0, 0), score: 1 }]);
        assert_eq!(round.scores(), (0, 1));
        assert_eq!(round.ai().len(), 3);
        assert_eq!(round.tick_interval(), INITIAL_TICK_INTERVAL);

        let food = round.food().unwrap();
        assert_ne!(food, Point::new(0, 0));
        assert!(!round.ai().occupies(food));
        assert!(!round.player().occupies(food));
    }

    #[test]
    fn test_ai_steps_on_roughly_three_of_four_ticks() {
        let mut rng = SessionRng::new(2025);
        let start = Snake::initial_ai().head();
        let moved = (0..10_000)
            .filter(|_| {
                let mut round = Round::new();
                round.on_move_tick(&mut rng);
                round.ai().head() != start
            })
            .count();
        assert!((7_000..8_000).contains(&moved), "AI moved on {} ticks", moved);
    }

    #[test]
    fn test_player_collision_loses_immediately() {
        let mut rng = SessionRng::new(8);
        let mut round = Round::new();
        round.set_player(Snake::new([Point::new(19, 4), Point::new(18, 4)], Direction::Right));
        round.player_score = 5;

        let events = round.on_move_tick(&mut rng);

        assert_eq!(round.status(), RoundStatus::Over(RoundResult::Lose));
        assert_eq!(
            round.summary().unwrap().reason,
            RoundEndReason::PlayerCollision(CollisionReason::Wall)
        );
        assert!(events.contains(&RoundEvent::PlayerCrashed { reason: CollisionReason::Wall }));
        assert!(round.on_move_tick(&mut rng).is_empty());
        assert!(round.on_clock_tick().is_empty());
    }

    #[test]
    fn test_pause_freezes_state() {
        let mut rng = SessionRng::new(3);
        let mut round = Round::new();
        round.on_move_tick(&mut rng);
        round.on_clock_tick();
        let before = round.snapshot(vec![]);

        assert_eq!(round.toggle_pause().unwrap(), vec![RoundEvent::Paused]);
        assert!(round.set_player_direction(Direction::Down).is_err());
        for _ in 0..50 {
            assert!(round.on_move_tick(&mut rng).is_empty());
            assert!(round.on_clock_tick().is_empty());
        }
        let paused = round.snapshot(vec![]);
        assert_eq!(paused.status, RoundStatus::Paused);
        assert_eq!(RoundSnapshot { status: RoundStatus::Running, ..paused }, before);

        assert_eq!(round.toggle_pause().unwrap(), vec![RoundEvent::Resumed]);
        assert_eq!(round.snapshot(vec![]), before);
        round.on_clock_tick();
        assert_eq!(round.time_remaining(), before.time_remaining - 1);
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut rng = SessionRng::new(12);
        let mut round = Round::new();
        for _ in 0..5 {
            round.on_move_tick(&mut rng);
            round.on_clock_tick();
        }
        round.player_score = 4;
        round.set_player_direction(Direction::Down).unwrap();
        round.toggle_pause().unwrap();

        assert_eq!(round.reset(), vec![RoundEvent::Reset]);
        assert_eq!(round.snapshot(vec![]), Round::new().snapshot(vec![]));
        assert_eq!(round.pending_direction(), None);
    }

    #[test]
    fn test_reverse_direction_request_rejected() {
        let mut round = Round::new();
        assert!(round.set_player_direction(Direction::Left).is_err());
        assert_eq!(round.pending_direction(), None);
        round.set_player_direction(Direction::Up).unwrap();
        round.set_player_direction(Direction::Down).unwrap();
        assert_eq!(round.pending_direction(), Some(Direction::Down));
    }

    #[test]
    fn test_pending_direction_consumed_by_tick() {
        let mut rng = SessionRng::new(4);
        let mut round = Round::new();
        round.set_player_direction(Direction::Down).unwrap();
        round.on_move_tick(&mut rng);
        assert_eq!(round.pending_direction(), None);
        assert_eq!(round.player().direction, Direction::Down);
        assert_eq!(round.player().head(), Point::new(4, 5));
    }

    #[test]
    fn test_missing_food_is_placed_on_next_tick() {
        let mut rng = SessionRng::new(6);
        let mut round = Round::new();
        round.set_food(None);
        round.on_move_tick(&mut rng);
        assert!(round.food().is_some());
    }

    #[test]
    fn test_lengths_only_grow_on_meals() {
        let mut rng = SessionRng::new(99);
        let mut round = Round::new();
        for _ in 0..40 {
            if round.is_over() {
                break;
            }
            let player_len = round.player().len();
            let events = round.on_move_tick(&mut rng);
            if round.is_over() {
                break;
            }
            let ate = events.iter().any(|e| matches!(e, RoundEvent::PlayerAte { .. }));
            assert_eq!(round.player().len(), player_len + usize::from(ate));
            assert!(round.player().head().is_on_grid());
        }
    }
}
