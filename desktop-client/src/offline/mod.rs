mod broadcaster;
mod round_runner;

pub use broadcaster::LocalBroadcaster;
pub use round_runner::run_round_session;
