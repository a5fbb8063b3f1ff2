use tokio::sync::mpsc;
use common::games::SessionRng;
use common::games::snake::{RoundCommand, RoundSession};
use common::log;
use crate::state::SharedState;

use super::LocalBroadcaster;

/// Runs rounds against the local AI until the UI drops its command sender.
pub async fn run_round_session(
    shared_state: SharedState,
    command_rx: mpsc::UnboundedReceiver<RoundCommand>,
    seed: Option<u64>,
) {
    let rng = match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting offline round, seed {}", rng.seed());

    let broadcaster = LocalBroadcaster::new(shared_state);
    let last = RoundSession::run(rng, command_rx, broadcaster).await;

    log!(
        "Session closed at {} - {} with {}s left",
        last.player_score,
        last.ai_score,
        last.time_remaining
    );
}
