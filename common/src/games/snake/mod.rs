mod bot_controller;
mod food;
mod movement;
mod round;
mod session;
pub mod settings;
mod snake_body;
mod types;

pub use bot_controller::{BotController, BotMode, DirectionScore};
pub use food::{free_cells, place_food};
pub use movement::{StepOutcome, resolve_direction, step};
pub use round::{Round, RoundEvent, RoundSnapshot, RoundSummary};
pub use session::{RoundCommand, RoundSession};
pub use snake_body::Snake;
pub use types::{CollisionReason, Direction, Point, RoundEndReason, RoundResult, RoundStatus};
