use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{APP_DIR_NAME, DEFAULT_THEME_ID};

/// Render colors for the snake and the food. Themes never affect gameplay.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Theme {
    pub name: String,
    pub snake: Color,
    pub food: Color,
}

/// Built-in palettes as `(id, snake, food)`, in cycling order.
const BUILTIN_THEMES: [(&str, Color, Color); 5] = [
    ("classic", Color::Rgb(0x00, 0xFF, 0x00), Color::Rgb(0xFF, 0x00, 0x00)),
    ("pink", Color::Rgb(0xFF, 0x40, 0x81), Color::Rgb(0xC2, 0x18, 0x5B)),
    ("blue", Color::Rgb(0x21, 0x96, 0xF3), Color::Rgb(0x19, 0x76, 0xD2)),
    ("purple", Color::Rgb(0x9C, 0x27, 0xB0), Color::Rgb(0x7B, 0x1F, 0xA2)),
    ("green", Color::Rgb(0x4C, 0xAF, 0x50), Color::Rgb(0x38, 0x8E, 0x3C)),
];

/// Ordered, cyclable list of themes with one selected entry.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    entries: Vec<(String, Theme)>,
    selected: usize,
}

impl ThemeCatalog {
    /// Built-in themes, overlaid with `*.json` files from the user theme directory.
    #[must_use]
    pub fn load() -> Self {
        let mut catalog = Self::builtin();
        if let Some(dir) = user_theme_dir() {
            catalog.overlay_dir(&dir);
        }
        catalog.reset_selection();
        catalog
    }

    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN_THEMES
            .iter()
            .map(|&(id, snake, food)| {
                let theme = Theme {
                    name: display_name(id),
                    snake,
                    food,
                };
                (id.to_owned(), theme)
            })
            .collect();

        let mut catalog = Self {
            entries,
            selected: 0,
        };
        catalog.reset_selection();
        catalog
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> &Theme {
        &self.entries[self.selected].1
    }

    #[must_use]
    pub fn current_id(&self) -> &str {
        &self.entries[self.selected].0
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.entries.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.entries.len() - 1);
    }

    /// Selects the theme named `id`. Leaves the selection alone and returns
    /// false when no such theme exists.
    #[must_use]
    pub fn select_by_id(&mut self, id: &str) -> bool {
        match self.entries.iter().position(|(entry_id, _)| entry_id == id) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    fn reset_selection(&mut self) {
        self.selected = self
            .entries
            .iter()
            .position(|(id, _)| id == DEFAULT_THEME_ID)
            .unwrap_or(0);
    }

    /// Replaces the theme with the same id, or appends a new one.
    fn overlay(&mut self, id: String, theme: Theme) {
        match self.entries.iter_mut().find(|(entry_id, _)| *entry_id == id) {
            Some(entry) => entry.1 = theme,
            None => self.entries.push((id, theme)),
        }
    }

    /// Overlays every readable theme file in `dir`, sorted by file name.
    /// Broken files are logged and skipped.
    fn overlay_dir(&mut self, dir: &Path) {
        let Ok(read_dir) = fs::read_dir(dir) else {
            debug!("no user themes at {}", dir.display());
            return;
        };

        let mut files: Vec<PathBuf> = read_dir
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| has_json_extension(path))
            .collect();
        files.sort();

        for file in files {
            let Some(id) = file.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let loaded = fs::read_to_string(&file)
                .map_err(ThemeFileError::from)
                .and_then(|raw| parse_theme_file(id, &raw));
            match loaded {
                Ok(theme) => {
                    debug!("loaded theme '{id}' from {}", file.display());
                    self.overlay(id.to_owned(), theme);
                }
                Err(error) => warn!("skipping theme file {}: {error}", file.display()),
            }
        }
    }
}

/// On-disk theme shape. `name` defaults to a title-cased file stem.
#[derive(Debug, Deserialize)]
struct ThemeFile {
    #[serde(default)]
    name: Option<String>,
    snake: String,
    food: String,
}

#[derive(Debug, Error)]
enum ThemeFileError {
    #[error("unreadable: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unrecognized color '{0}'")]
    Color(String),
}

fn parse_theme_file(id: &str, raw: &str) -> Result<Theme, ThemeFileError> {
    let file: ThemeFile = serde_json::from_str(raw)?;
    let color = |value: &str| parse_color(value).ok_or_else(|| ThemeFileError::Color(value.to_owned()));

    Ok(Theme {
        snake: color(&file.snake)?,
        food: color(&file.food)?,
        name: file.name.unwrap_or_else(|| display_name(id)),
    })
}

/// Accepts `#RRGGBB` or a basic terminal color name such as `light-green`.
fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_rgb_hex(hex);
    }

    let color = match value.to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" => Color::DarkGray,
        "light_red" => Color::LightRed,
        "light_green" => Color::LightGreen,
        "light_blue" => Color::LightBlue,
        "light_magenta" => Color::LightMagenta,
        "white" => Color::White,
        _ => return None,
    };
    Some(color)
}

fn parse_rgb_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// `night-mode` becomes `Night Mode`.
fn display_name(id: &str) -> String {
    id.split(['-', '_'])
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn user_theme_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("themes"))
}
