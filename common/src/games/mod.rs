mod broadcaster;
mod session_rng;

pub mod snake;

pub use broadcaster::RoundBroadcaster;
pub use session_rng::SessionRng;
