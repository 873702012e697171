use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use ex_snake::app::App;
use ex_snake::config::{
    DEFAULT_FPS, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_THEME_ID, Settings,
};
use ex_snake::error::Error;
use ex_snake::grid::GridSize;
use ex_snake::input::poll_command;
use ex_snake::label::Label;
use ex_snake::logging;
use ex_snake::message::Toxicity;
use ex_snake::renderer;
use ex_snake::score::ScoreStore;
use ex_snake::speed::Speed;
use ex_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use ex_snake::theme::ThemeCatalog;
use ex_snake::ui::menu::SURFACE_UNAVAILABLE_MESSAGE;
use log::{LevelFilter, error, info};

/// Longest wait for input before the loop redraws.
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Parser)]
#[command(version, about = "Watch your Ex hunt down all your partners")]
struct Cli {
    /// Board width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Board height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Ticks per second at normal speed.
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Starting speed.
    #[arg(long, value_enum, default_value_t = Speed::Normal)]
    speed: Speed,

    /// Theme id (built-in or a file stem from the user theme directory).
    #[arg(long, default_value = DEFAULT_THEME_ID)]
    theme: String,

    /// Whose Ex is hunting.
    #[arg(long, value_enum, default_value_t = Label::ExBoyfriend)]
    label: Label,

    /// How harsh the motivational messages are.
    #[arg(long, value_enum, default_value_t = Toxicity::Medium)]
    toxicity: Toxicity,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Do not read or write the stored high score.
    #[arg(long = "no-persist")]
    no_persist: bool,

    /// Show the decision debug row.
    #[arg(long)]
    debug: bool,

    /// Log file verbosity.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            bounds: GridSize {
                width: self.width,
                height: self.height,
            },
            fps: self.fps,
            speed: self.speed,
            theme_id: self.theme.clone(),
            label: self.label,
            toxicity: self.toxicity,
            seed: self.seed,
            persist_high_score: !self.no_persist,
            debug: self.debug,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = cli.settings();

    if let Err(error) = settings.validate() {
        eprintln!("{}", Error::from(error));
        return ExitCode::from(2);
    }

    let log_path = logging::log_path();
    if let Err(error) = logging::init(cli.log_level.into(), &log_path) {
        eprintln!("Warning: {error}; continuing without a log file");
    }

    install_panic_hook();

    match run(&settings) {
        Ok(()) => {
            info!("session ended");
            ExitCode::SUCCESS
        }
        Err(Error::Terminal(source)) => {
            error!("terminal failure: {source}");
            eprintln!("{SURFACE_UNAVAILABLE_MESSAGE} ({source})");
            ExitCode::FAILURE
        }
        Err(other) => {
            error!("{other}");
            eprintln!("{other}");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> Result<(), Error> {
    let store = settings.persist_high_score.then(ScoreStore::in_data_dir);
    let mut app = App::new(settings, ThemeCatalog::load(), store, Instant::now());
    let mut session = TerminalSession::enter()?;

    loop {
        let area = session.area()?;

        let now = Instant::now();
        if renderer::fits(area, app.session.bounds(), app.debug()) {
            let _ = app.tick_if_due(now);
        } else {
            app.hold(now);
        }

        let scene = app.scene();
        let hud = app.hud_info();
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &scene, &hud))?;

        let timeout = app
            .scheduler
            .time_until_due(Instant::now())
            .min(MAX_POLL_INTERVAL);
        if let Some(command) = poll_command(timeout)? {
            if !app.handle_command(command, Instant::now()) {
                break;
            }
        }
    }

    Ok(())
}
