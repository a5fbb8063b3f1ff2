use std::future::Future;

use super::snake::{RoundSnapshot, RoundSummary};

/// Receives round state after each transition. Implemented by front ends.
pub trait RoundBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: RoundSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_round_over(&self, summary: RoundSummary) -> impl Future<Output = ()> + Send;
}
