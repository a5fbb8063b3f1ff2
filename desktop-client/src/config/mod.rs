mod client_config;
mod theme;

pub use client_config::{Config, get_config_manager};
pub use theme::ThemeName;
