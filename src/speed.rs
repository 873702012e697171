use std::time::Duration;

use clap::ValueEnum;

/// Discrete speed setting applied on top of the base tick rate.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum Speed {
    #[default]
    Normal,
    Fast,
    Slow,
}

impl Speed {
    /// Returns the next setting in the normal → fast → slow cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Normal => Self::Fast,
            Self::Fast => Self::Slow,
            Self::Slow => Self::Normal,
        }
    }

    /// Rate scalar applied to the base FPS.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Normal => 1.0,
            Self::Fast => 1.5,
            Self::Slow => 0.7,
        }
    }

    /// Returns the tick period for `fps` at this speed.
    #[must_use]
    pub fn tick_interval(self, fps: u32) -> Duration {
        let rate = f64::from(fps.max(1)) * self.multiplier();
        Duration::from_secs_f64(1.0 / rate)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Fast => "Fast",
            Self::Slow => "Slow",
        }
    }
}
