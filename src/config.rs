use crate::error::ConfigError;
use crate::grid::GridSize;
use crate::label::Label;
use crate::message::Toxicity;
use crate::speed::Speed;

/// Default board width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 30;

/// Default board height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Base tick rate at normal speed.
pub const DEFAULT_FPS: u32 = 10;

/// Target length of a freshly reset snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Smallest accepted board edge.
pub const MIN_GRID_EDGE: u16 = 2;

/// Directory name used under the platform data and config dirs.
pub const APP_DIR_NAME: &str = "ex-snake";

/// Theme selected when none is requested.
pub const DEFAULT_THEME_ID: &str = "classic";

/// Terminal columns used to draw one logical cell.
pub const CELL_WIDTH: u16 = 2;

/// Resolved runtime settings for one session.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Settings {
    pub bounds: GridSize,
    pub fps: u32,
    pub speed: Speed,
    pub theme_id: String,
    pub label: Label,
    pub toxicity: Toxicity,
    pub seed: Option<u64>,
    pub persist_high_score: bool,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bounds: GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            },
            fps: DEFAULT_FPS,
            speed: Speed::Normal,
            theme_id: DEFAULT_THEME_ID.to_owned(),
            label: Label::default(),
            toxicity: Toxicity::default(),
            seed: None,
            persist_high_score: true,
            debug: false,
        }
    }
}

impl Settings {
    /// Rejects boards and rates the game cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bounds.width < MIN_GRID_EDGE || self.bounds.height < MIN_GRID_EDGE {
            return Err(ConfigError::GridTooSmall {
                width: self.bounds.width,
                height: self.bounds.height,
                min: MIN_GRID_EDGE,
            });
        }

        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }

        Ok(())
    }
}
