use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::ThemeName;

const CONFIG_FILE_NAME: &str = "duel_snake_config.yaml";
pub const MAX_EVENT_LOG_LINES: usize = 32;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub theme: ThemeName,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_show_event_log")]
    pub show_event_log: bool,
    #[serde(default = "default_event_log_lines")]
    pub event_log_lines: usize,
    #[serde(default)]
    pub use_log_prefix: bool,
}

fn default_show_event_log() -> bool {
    true
}

fn default_event_log_lines() -> usize {
    8
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.event_log_lines == 0 {
            return Err("event_log_lines must be at least 1".to_string());
        }
        if self.event_log_lines > MAX_EVENT_LOG_LINES {
            return Err(format!("event_log_lines must not exceed {}", MAX_EVENT_LOG_LINES));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::Classic,
            seed: None,
            show_event_log: default_show_event_log(),
            event_log_lines: default_event_log_lines(),
            use_log_prefix: false,
        }
    }
}
