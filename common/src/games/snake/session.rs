use std::pin::Pin;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior, Sleep, interval_at, sleep};

use crate::games::{RoundBroadcaster, SessionRng};
use crate::log;
use super::round::{Round, RoundEvent, RoundSnapshot};
use super::settings::CLOCK_PERIOD;
use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundCommand {
    Turn(Direction),
    TogglePause,
    Reset,
    Shutdown,
}

/// The two scheduled tasks of a round. Dropping or replacing them cancels
/// anything still pending.
struct RoundTimers {
    movement: Pin<Box<Sleep>>,
    clock: Interval,
}

impl RoundTimers {
    fn start(tick_interval: Duration) -> Self {
        let mut clock = interval_at(Instant::now() + CLOCK_PERIOD, CLOCK_PERIOD);
        clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            movement: Box::pin(sleep(tick_interval)),
            clock,
        }
    }

    fn rearm_movement(&mut self, tick_interval: Duration) {
        self.movement.as_mut().reset(Instant::now() + tick_interval);
    }
}

pub struct RoundSession;

impl RoundSession {
    /// Drives one round until the command channel closes or `Shutdown`
    /// arrives. Returns the last state.
    pub async fn run(
        rng: SessionRng,
        commands: mpsc::UnboundedReceiver<RoundCommand>,
        broadcaster: impl RoundBroadcaster,
    ) -> RoundSnapshot {
        Self::run_round(Round::new(), rng, commands, broadcaster).await
    }

    async fn run_round(
        mut round: Round,
        mut rng: SessionRng,
        mut commands: mpsc::UnboundedReceiver<RoundCommand>,
        broadcaster: impl RoundBroadcaster,
    ) -> RoundSnapshot {
        let mut timers = RoundTimers::start(round.tick_interval());

        log!("Round session started, seed {}", rng.seed());
        broadcaster.broadcast_state(round.snapshot(vec![])).await;

        loop {
            let update = tokio::select! {
                _ = timers.movement.as_mut() => {
                    let was_running = round.is_running();
                    let events = round.on_move_tick(&mut rng);
                    timers.rearm_movement(round.tick_interval());
                    was_running.then_some(events)
                }
                _ = timers.clock.tick() => {
                    let was_running = round.is_running();
                    let events = round.on_clock_tick();
                    was_running.then_some(events)
                }
                command = commands.recv() => match command {
                    Some(RoundCommand::Shutdown) | None => break,
                    Some(command) => Self::handle_command(&mut round, &mut timers, command),
                },
            };

            let Some(events) = update else {
                continue;
            };

            let ended = events.iter().any(|e| matches!(e, RoundEvent::Over { .. }));
            broadcaster.broadcast_state(round.snapshot(events)).await;

            if ended && let Some(summary) = round.summary() {
                broadcaster.broadcast_round_over(summary).await;
            }
        }

        log!("Round session stopped");
        round.snapshot(vec![])
    }

    fn handle_command(
        round: &mut Round,
        timers: &mut RoundTimers,
        command: RoundCommand,
    ) -> Option<Vec<RoundEvent>> {
        match command {
            RoundCommand::Turn(direction) => {
                if let Err(e) = round.set_player_direction(direction) {
                    log!("Turn {:?} ignored: {}", direction, e);
                }
                None
            }
            RoundCommand::TogglePause => match round.toggle_pause() {
                Ok(events) => Some(events),
                Err(e) => {
                    log!("Pause toggle ignored: {}", e);
                    None
                }
            },
            RoundCommand::Reset => {
                let events = round.reset();
                *timers = RoundTimers::start(round.tick_interval());
                Some(events)
            }
            RoundCommand::Shutdown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use crate::games::snake::settings::ROUND_DURATION_SECS;
    use crate::games::snake::types::{Point, RoundEndReason, RoundResult, RoundStatus};
    use crate::games::snake::{RoundSummary, Snake};

    #[derive(Clone, Default)]
    struct RecordingBroadcaster {
        states: Arc<Mutex<Vec<RoundSnapshot>>>,
        summaries: Arc<Mutex<Vec<RoundSummary>>>,
    }

    impl RoundBroadcaster for RecordingBroadcaster {
        async fn broadcast_state(&self, snapshot: RoundSnapshot) {
            self.states.lock().unwrap().push(snapshot);
        }

        async fn broadcast_round_over(&self, summary: RoundSummary) {
            self.summaries.lock().unwrap().push(summary);
        }
    }

    fn start_session(
        seed: u64,
    ) -> (
        mpsc::UnboundedSender<RoundCommand>,
        tokio::task::JoinHandle<RoundSnapshot>,
        RecordingBroadcaster,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let broadcaster = RecordingBroadcaster::default();
        let handle = tokio::spawn(RoundSession::run(SessionRng::new(seed), rx, broadcaster.clone()));
        (tx, handle, broadcaster)
    }

    async fn wait(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_moves_player_and_counts_down() {
        let (tx, handle, broadcaster) = start_session(1);

        wait(2500).await;
        tx.send(RoundCommand::Shutdown).unwrap();
        let last = handle.await.unwrap();

        assert_eq!(last.time_remaining, ROUND_DURATION_SECS - 2);
        assert_eq!(last.player[0], Point::new(12, 4));
        assert_eq!(last.status, RoundStatus::Running);

        let states = broadcaster.states.lock().unwrap();
        assert_eq!(states[0], crate::games::snake::Round::new().snapshot(vec![]));
        assert!(states.len() >= 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_turn_command_is_applied_on_next_tick() {
        let (tx, handle, _) = start_session(2);

        tx.send(RoundCommand::Turn(Direction::Down)).unwrap();
        wait(400).await;
        tx.send(RoundCommand::Shutdown).unwrap();
        let last = handle.await.unwrap();

        assert_eq!(last.player_direction, Direction::Down);
        assert_eq!(last.player[0], Point::new(4, 5));
    }

    fn last_state(broadcaster: &RecordingBroadcaster) -> RoundSnapshot {
        broadcaster.states.lock().unwrap().last().cloned().unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_movement_timer_uses_faster_period_after_meal() {
        let mut round = Round::new();
        round.set_food(Some(Point::new(5, 4)));
        let (tx, rx) = mpsc::unbounded_channel();
        let broadcaster = RecordingBroadcaster::default();
        let handle = tokio::spawn(RoundSession::run_round(
            round,
            SessionRng::new(11),
            rx,
            broadcaster.clone(),
        ));

        // Meal at 300ms, so the next move is due at 595ms instead of 600ms.
        wait(590).await;
        let state = last_state(&broadcaster);
        assert_eq!(state.player_score, 1);
        assert_eq!(state.player[0], Point::new(5, 4));
        assert_eq!(state.tick_interval, Duration::from_millis(295));

        wait(7).await;
        assert_eq!(last_state(&broadcaster).player[0], Point::new(6, 4));

        tx.send(RoundCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_paused_session_changes_nothing() {
        let (tx, handle, broadcaster) = start_session(3);

        tx.send(RoundCommand::TogglePause).unwrap();
        wait(5000).await;
        tx.send(RoundCommand::Shutdown).unwrap();
        let last = handle.await.unwrap();

        assert_eq!(last.status, RoundStatus::Paused);
        assert_eq!(last.time_remaining, ROUND_DURATION_SECS);
        assert_eq!(last.player, Snake::initial_player().cells());
        assert_eq!(last.ai, Snake::initial_ai().cells());

        let states = broadcaster.states.lock().unwrap();
        assert_eq!(states.len(), 2);
        assert_eq!(states[1].events, vec![RoundEvent::Paused]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resume_continues_from_paused_state() {
        let (tx, handle, _) = start_session(4);

        wait(650).await;
        tx.send(RoundCommand::TogglePause).unwrap();
        wait(3000).await;
        tx.send(RoundCommand::TogglePause).unwrap();
        wait(10).await;
        tx.send(RoundCommand::Shutdown).unwrap();
        let last = handle.await.unwrap();

        // Two moves before the pause, none during it.
        assert_eq!(last.player[0], Point::new(6, 4));
        assert_eq!(last.time_remaining, ROUND_DURATION_SECS);
        assert_eq!(last.status, RoundStatus::Running);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_restarts_round_and_timers() {
        let (tx, handle, broadcaster) = start_session(5);

        wait(2500).await;
        tx.send(RoundCommand::Reset).unwrap();
        wait(500).await;
        tx.send(RoundCommand::Shutdown).unwrap();
        let last = handle.await.unwrap();

        assert_eq!(last.time_remaining, ROUND_DURATION_SECS);
        assert_eq!(last.player[0], Point::new(5, 4));
        assert_eq!(last.player_score, 0);

        let states = broadcaster.states.lock().unwrap();
        let reset = states
            .iter()
            .find(|s| s.events.contains(&RoundEvent::Reset))
            .unwrap();
        assert_eq!(*reset, crate::games::snake::Round::new().snapshot(vec![RoundEvent::Reset]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wall_crash_ends_round_with_summary() {
        let (tx, handle, broadcaster) = start_session(6);

        wait(6000).await;
        {
            let summaries = broadcaster.summaries.lock().unwrap();
            assert_eq!(summaries.len(), 1);
            assert_eq!(summaries[0].result, RoundResult::Lose);
            assert!(matches!(summaries[0].reason, RoundEndReason::PlayerCollision(_)));
        }

        tx.send(RoundCommand::Reset).unwrap();
        wait(10).await;
        drop(tx);
        let last = handle.await.unwrap();
        assert_eq!(last.status, RoundStatus::Running);
    }
}
