use std::time::Instant;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Settings;
use crate::game::{GameSession, TickReport};
use crate::input::Command;
use crate::label::Label;
use crate::message::{DEFAULT_MESSAGE, Toxicity, pick_message};
use crate::renderer::Scene;
use crate::scheduler::TickScheduler;
use crate::score::ScoreStore;
use crate::theme::ThemeCatalog;
use crate::ui::hud::HudInfo;

/// Top-level driver state: the game session plus everything the player can
/// change around it.
#[derive(Debug)]
pub struct App {
    pub session: GameSession,
    pub scheduler: TickScheduler,
    pub themes: ThemeCatalog,
    pub label: Label,
    pub toxicity: Toxicity,
    message: &'static str,
    store: Option<ScoreStore>,
    debug: bool,
    last_report: Option<TickReport>,
    rng: StdRng,
}

impl App {
    /// Builds the driver from resolved settings. A failing score store is
    /// logged and the game starts from a zero high score.
    #[must_use]
    pub fn new(
        settings: &Settings,
        themes: ThemeCatalog,
        store: Option<ScoreStore>,
        now: Instant,
    ) -> Self {
        let high_score = match &store {
            Some(store) => match store.load() {
                Ok(score) => {
                    debug!("high score store at {}", store.path().display());
                    score
                }
                Err(error) => {
                    warn!("high score unavailable: {error}");
                    0
                }
            },
            None => 0,
        };

        let session = match settings.seed {
            Some(seed) => GameSession::new_with_seed(settings.bounds, seed),
            None => GameSession::new(settings.bounds),
        }
        .with_high_score(high_score);

        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };

        let mut themes = themes;
        if !themes.select_by_id(&settings.theme_id) {
            warn!("unknown theme '{}'; using {}", settings.theme_id, themes.current_id());
        }

        let mut app = Self {
            session,
            scheduler: TickScheduler::new(settings.fps, settings.speed, now),
            themes,
            label: settings.label,
            toxicity: settings.toxicity,
            message: DEFAULT_MESSAGE,
            store,
            debug: settings.debug,
            last_report: None,
            rng,
        };
        app.refresh_message();
        info!(
            "session started on {}x{} grid, high score {high_score}",
            settings.bounds.width, settings.bounds.height
        );
        app
    }

    /// Applies one player command. Returns `false` when the player quits.
    pub fn handle_command(&mut self, command: Command, now: Instant) -> bool {
        match command {
            Command::Reset => {
                self.session.reset();
                self.last_report = None;
            }
            Command::CycleSpeed => {
                let speed = self.scheduler.cycle_speed(now);
                info!("speed set to {}", speed.label());
            }
            Command::NextTheme => {
                self.themes.select_next();
                info!("theme set to {}", self.themes.current_id());
            }
            Command::PreviousTheme => {
                self.themes.select_previous();
                info!("theme set to {}", self.themes.current_id());
            }
            Command::CycleLabel => {
                self.label = self.label.next();
                self.refresh_message();
            }
            Command::CycleToxicity => {
                self.toxicity = self.toxicity.next();
                self.refresh_message();
            }
            Command::Quit => return false,
        }
        true
    }

    /// Runs one tick when the scheduler says it is due. The next deadline is
    /// installed only after the tick and its persistence step finished.
    pub fn tick_if_due(&mut self, now: Instant) -> Option<TickReport> {
        if !self.scheduler.is_due(now) {
            return None;
        }

        let report = self.session.tick();
        if report.high_score_changed {
            self.persist_high_score();
        }

        self.last_report = Some(report);
        self.scheduler.complete(Instant::now().max(now));
        Some(report)
    }

    /// Pushes the deadline back without ticking, used while the board cannot
    /// be shown.
    pub fn hold(&mut self, now: Instant) {
        self.scheduler.complete(now);
    }

    fn persist_high_score(&self) {
        let Some(store) = &self.store else {
            return;
        };

        if let Err(error) = store.save(self.session.high_score()) {
            warn!("could not save high score: {error}");
        }
    }

    fn refresh_message(&mut self) {
        self.message = pick_message(self.label, self.toxicity, &mut self.rng);
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message
    }

    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug
    }

    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene::capture(&self.session, self.themes.current())
    }

    #[must_use]
    pub fn hud_info(&self) -> HudInfo<'_> {
        HudInfo {
            label: self.label,
            speed: self.scheduler.speed(),
            toxicity: self.toxicity,
            score: self.session.score(),
            high_score: self.session.high_score(),
            theme_name: &self.themes.current().name,
            message: self.message,
            debug_line: self.debug.then(|| self.debug_line()),
        }
    }

    fn debug_line(&self) -> String {
        let decision = self
            .last_report
            .map(|report| format!("{:?} {:?}", report.decision.direction, report.decision.kind))
            .unwrap_or_else(|| "-".to_owned());

        format!(
            "tick {}  len {}/{}  {}",
            self.session.tick_count,
            self.session.snake.len(),
            self.session.snake.target_length(),
            decision
        )
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{Duration, Instant};

    use crate::config::Settings;
    use crate::food::Food;
    use crate::grid::{Direction, Position};
    use crate::input::Command;
    use crate::label::Label;
    use crate::message::messages;
    use crate::score::scratch::ScratchStore;
    use crate::snake::Snake;
    use crate::speed::Speed;
    use crate::theme::ThemeCatalog;

    use super::App;

    fn seeded_settings() -> Settings {
        Settings {
            seed: Some(12),
            ..Settings::default()
        }
    }

    #[test]
    fn ticks_only_when_due() {
        let start = Instant::now();
        let mut app = App::new(&seeded_settings(), ThemeCatalog::builtin(), None, start);

        assert!(app.tick_if_due(start).is_none());
        assert!(app.tick_if_due(start + Duration::from_millis(100)).is_some());
        assert_eq!(app.session.tick_count, 1);
    }

    #[test]
    fn hold_slides_the_deadline_without_ticking() {
        let start = Instant::now();
        let mut app = App::new(&seeded_settings(), ThemeCatalog::builtin(), None, start);

        app.hold(start + Duration::from_millis(90));

        assert!(app.tick_if_due(start + Duration::from_millis(100)).is_none());
        assert!(app.tick_if_due(start + Duration::from_millis(190)).is_some());
        assert_eq!(app.session.tick_count, 1);
    }

    #[test]
    fn speed_command_reinstalls_the_deadline() {
        let start = Instant::now();
        let mut app = App::new(&seeded_settings(), ThemeCatalog::builtin(), None, start);

        let pressed = start + Duration::from_millis(80);
        assert!(app.handle_command(Command::CycleSpeed, pressed));

        assert_eq!(app.scheduler.speed(), Speed::Fast);
        assert!(app.tick_if_due(start + Duration::from_millis(100)).is_none());
    }

    #[test]
    fn label_change_updates_texts_and_message() {
        let start = Instant::now();
        let mut app = App::new(&seeded_settings(), ThemeCatalog::builtin(), None, start);

        app.handle_command(Command::CycleLabel, start);

        assert_eq!(app.label, Label::ExGirlfriend);
        assert!(messages(app.label, app.toxicity).contains(&app.message()));
        assert_eq!(app.hud_info().label, Label::ExGirlfriend);
    }

    #[test]
    fn theme_command_changes_colors_only() {
        let start = Instant::now();
        let mut app = App::new(&seeded_settings(), ThemeCatalog::builtin(), None, start);
        let before = app.scene();

        app.handle_command(Command::NextTheme, start);
        let after = app.scene();

        assert_ne!(before.snake.color, after.snake.color);
        assert_eq!(before.snake.cells, after.snake.cells);
        assert_eq!(before.food.position, after.food.position);
    }

    #[test]
    fn quit_command_stops_the_loop() {
        let start = Instant::now();
        let mut app = App::new(&seeded_settings(), ThemeCatalog::builtin(), None, start);

        assert!(!app.handle_command(Command::Quit, start));
    }

    #[test]
    fn new_high_score_is_persisted() {
        let scratch = ScratchStore::new();
        let start = Instant::now();
        let mut app = App::new(
            &seeded_settings(),
            ThemeCatalog::builtin(),
            Some(scratch.store.clone()),
            start,
        );
        app.session.snake = Snake::from_segments(vec![Position::new(2, 2)], Direction::Right);
        app.session.food = Food::new(Position::new(3, 2));

        let report = app
            .tick_if_due(start + Duration::from_millis(100))
            .expect("tick should run");

        assert!(report.high_score_changed);
        assert_eq!(scratch.store.load().ok(), Some(1));
    }

    #[test]
    fn stored_high_score_survives_reset() {
        let scratch = ScratchStore::new();
        scratch.store.save(17).expect("seed score should save");

        let start = Instant::now();
        let mut app = App::new(
            &seeded_settings(),
            ThemeCatalog::builtin(),
            Some(scratch.store.clone()),
            start,
        );
        app.handle_command(Command::Reset, start);

        assert_eq!(app.session.high_score(), 17);
        assert_eq!(app.session.score(), 0);
    }

    #[test]
    fn unreadable_store_starts_from_zero() {
        let scratch = ScratchStore::new();
        scratch.store.save(5).expect("seed score should save");
        fs::write(scratch.store.path(), "{ broken").expect("overwrite should succeed");

        let app = App::new(
            &seeded_settings(),
            ThemeCatalog::builtin(),
            Some(scratch.store.clone()),
            Instant::now(),
        );

        assert_eq!(app.session.high_score(), 0);
    }

    #[test]
    fn debug_row_only_with_debug_setting() {
        let start = Instant::now();
        let quiet = App::new(&seeded_settings(), ThemeCatalog::builtin(), None, start);
        assert!(quiet.hud_info().debug_line.is_none());

        let settings = Settings {
            debug: true,
            ..seeded_settings()
        };
        let loud = App::new(&settings, ThemeCatalog::builtin(), None, start);
        assert!(loud
            .hud_info()
            .debug_line
            .is_some_and(|line| line.starts_with("tick 0")));
    }
}
