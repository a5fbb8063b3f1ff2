use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    quiet: bool,
}

impl Logger {
    fn new(prefix: Option<String>, quiet: bool) -> Self {
        Self { prefix, quiet }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        if self.quiet {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => println!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => println!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix, false));
}

/// Installs a logger that swallows every message.
pub fn init_quiet_logger() {
    LOGGER.get_or_init(|| Logger::new(None, true));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
