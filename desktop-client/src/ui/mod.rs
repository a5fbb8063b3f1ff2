mod app;
mod board;
mod celebration;
mod input;
mod theme;

pub use app::DuelSnakeApp;
