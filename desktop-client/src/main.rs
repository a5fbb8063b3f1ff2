mod command_sender;
mod config;
mod offline;
mod state;
mod ui;

use clap::Parser;
use common::logger::{init_logger, init_quiet_logger};
use common::log;
use common::version::VERSION;
use eframe::egui;
use tokio::sync::mpsc;

use command_sender::CommandSender;
use config::{Config, ThemeName, get_config_manager};
use offline::run_round_session;
use state::SharedState;
use ui::DuelSnakeApp;

#[derive(Parser, Debug)]
#[command(name = "duel_snake", version = VERSION, about = "Snake duel against a heuristic AI")]
struct Args {
    /// Prefix every log line with the application name
    #[arg(long)]
    use_log_prefix: bool,

    /// Disable logging
    #[arg(long)]
    quiet: bool,

    /// Fixed RNG seed, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme, overrides the config file
    #[arg(long, value_enum)]
    theme: Option<ThemeName>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager();
    let (config, config_error) = match config_manager.get_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    if args.quiet {
        init_quiet_logger();
    } else if args.use_log_prefix || config.use_log_prefix {
        init_logger(Some("duel_snake".to_string()));
    } else {
        init_logger(None);
    }
    if let Some(e) = config_error {
        log!("Failed to load config, using defaults: {}", e);
    }

    let theme = args.theme.unwrap_or(config.theme);
    let seed = args.seed.or(config.seed);
    log!("Duel Snake {} starting, theme {}", VERSION, theme.label());

    let shared_state = SharedState::new(config.event_log_lines);
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let session_state = shared_state.clone();
    std::thread::spawn(move || {
        runtime.block_on(run_round_session(session_state, command_rx, seed));
    });

    let app = DuelSnakeApp::new(
        shared_state,
        CommandSender::new(command_tx),
        config_manager,
        theme,
        config.show_event_log,
        seed.unwrap_or_else(rand::random),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([460.0, 700.0])
            .with_title(format!("Duel Snake {}", VERSION)),
        ..Default::default()
    };

    eframe::run_native("Duel Snake", options, Box::new(|_cc| Ok(Box::new(app))))?;
    Ok(())
}
