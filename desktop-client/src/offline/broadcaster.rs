use common::games::RoundBroadcaster;
use common::games::snake::{RoundSnapshot, RoundSummary};
use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl RoundBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: RoundSnapshot) {
        self.shared_state.update_snapshot(snapshot);
    }

    async fn broadcast_round_over(&self, summary: RoundSummary) {
        self.shared_state.set_summary(summary);
    }
}
