use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::agent::{Decision, PathfindingAgent};
use crate::food::Food;
use crate::grid::GridSize;
use crate::score::HighScore;
use crate::snake::{MoveOutcome, Snake};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickReport {
    pub decision: Decision,
    /// The head reached the food this tick.
    pub captured: bool,
    /// The snake ran into itself; carries the score it had before the reset.
    pub collision: Option<u32>,
    /// The high score was raised this tick and should be persisted.
    pub high_score_changed: bool,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    pub food: Food,
    pub tick_count: u64,
    high_score: HighScore,
    agent: PathfindingAgent,
    bounds: GridSize,
    rng: StdRng,
}

impl GameSession {
    /// Creates a new session seeded from OS entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::from_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::from_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn from_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let snake = Snake::new(&mut rng, bounds);
        let food = Food::random(&mut rng, bounds);

        let mut session = Self {
            snake,
            food,
            tick_count: 0,
            high_score: HighScore::default(),
            agent: PathfindingAgent,
            bounds,
            rng,
        };
        session.place_food();
        session
    }

    /// Starts the session with a previously stored best score.
    #[must_use]
    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = HighScore::new(high_score);
        self
    }

    /// Advances the simulation by one tick: steer, move, then resolve
    /// collision and capture.
    pub fn tick(&mut self) -> TickReport {
        self.tick_count += 1;

        let decision = self
            .agent
            .plan(&self.snake, &self.food, self.bounds, &mut self.rng);
        debug!(
            "tick {}: head {:?} -> {:?} ({:?})",
            self.tick_count,
            self.snake.head(),
            decision.direction,
            decision.kind
        );

        self.snake.turn(decision.direction);

        let mut high_score_changed = false;
        let collision = match self.snake.move_forward(&mut self.rng, self.bounds) {
            MoveOutcome::Moved => None,
            MoveOutcome::Collided { final_score } => {
                info!("self-collision at tick {} with score {final_score}", self.tick_count);
                high_score_changed |= self.high_score.record(final_score);
                Some(final_score)
            }
        };

        let captured = self.snake.head() == self.food.position;
        if captured {
            self.snake.grow();
            high_score_changed |= self.high_score.record(self.snake.score());
            self.place_food();
        }

        if high_score_changed {
            info!("new high score {}", self.high_score.get());
        }

        TickReport {
            decision,
            captured,
            collision,
            high_score_changed,
        }
    }

    /// Starts over with a fresh snake and food. The high score is kept.
    pub fn reset(&mut self) {
        let _ = self.high_score.record(self.snake.score());
        self.snake.reset(&mut self.rng, self.bounds);
        self.place_food();
        self.tick_count = 0;
        info!("session reset");
    }

    /// Moves the food to a random cell clear of every snake segment.
    pub fn place_food(&mut self) {
        if self.snake.len() >= self.bounds.total_cells() {
            warn!("no free cell left for food; leaving it at {:?}", self.food.position);
            return;
        }

        self.food.randomize(&mut self.rng, self.bounds);
        while self.snake.occupies(self.food.position) {
            self.food.randomize(&mut self.rng, self.bounds);
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.snake.score()
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score.get()
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use crate::agent::DecisionKind;
    use crate::food::Food;
    use crate::grid::{Direction, GridSize, Position};
    use crate::snake::Snake;

    use super::GameSession;

    const BOUNDS: GridSize = GridSize {
        width: 30,
        height: 20,
    };

    #[test]
    fn new_session_places_food_off_the_snake() {
        for seed in 0..50 {
            let session = GameSession::new_with_seed(BOUNDS, seed);
            assert!(!session.snake.occupies(session.food.position));
            assert_eq!(session.snake.head(), Position::new(15, 10));
        }
    }

    #[test]
    fn snake_grows_after_eating_food() {
        let mut session = GameSession::new_with_seed(BOUNDS, 1);
        session.snake = Snake::from_segments(vec![Position::new(1, 1)], Direction::Right);
        session.food = Food::new(Position::new(2, 1));

        let report = session.tick();

        assert!(report.captured);
        assert_eq!(session.score(), 1);
        assert_eq!(session.snake.target_length(), 2);
        assert!(!session.snake.occupies(session.food.position));

        let _ = session.tick();
        assert_eq!(session.snake.len(), 2);
    }

    #[test]
    fn capture_raises_high_score() {
        let mut session = GameSession::new_with_seed(BOUNDS, 2).with_high_score(0);
        session.snake = Snake::from_segments(vec![Position::new(4, 4)], Direction::Up);
        session.food = Food::new(Position::new(4, 3));

        let report = session.tick();

        assert!(report.high_score_changed);
        assert_eq!(session.high_score(), 1);
    }

    #[test]
    fn capture_below_stored_best_leaves_it_alone() {
        let mut session = GameSession::new_with_seed(BOUNDS, 2).with_high_score(9);
        session.snake = Snake::from_segments(vec![Position::new(4, 4)], Direction::Up);
        session.food = Food::new(Position::new(4, 3));

        let report = session.tick();

        assert!(report.captured);
        assert!(!report.high_score_changed);
        assert_eq!(session.high_score(), 9);
    }

    #[test]
    fn trapped_snake_collides_and_resets() {
        let mut session = GameSession::new_with_seed(BOUNDS, 3);
        session.snake = Snake::from_segments(
            vec![
                Position::new(5, 5),
                Position::new(5, 4),
                Position::new(6, 4),
                Position::new(6, 5),
                Position::new(6, 6),
                Position::new(5, 6),
                Position::new(4, 6),
                Position::new(4, 5),
            ],
            Direction::Down,
        );
        session.food = Food::new(Position::new(20, 2));

        let report = session.tick();

        assert_eq!(report.decision.kind, DecisionKind::Forced);
        assert_eq!(report.decision.direction, Direction::Down);
        assert_eq!(report.collision, Some(0));
        assert_eq!(session.snake.len(), 1);
        assert_eq!(session.snake.head(), BOUNDS.center());
        assert_eq!(session.snake.target_length(), 3);
    }

    #[test]
    fn reset_keeps_high_score_and_clears_score() {
        let mut session = GameSession::new_with_seed(BOUNDS, 4).with_high_score(5);
        session.snake = Snake::from_segments(vec![Position::new(8, 8)], Direction::Left);
        session.food = Food::new(Position::new(7, 8));
        let _ = session.tick();

        session.reset();

        assert_eq!(session.score(), 0);
        assert_eq!(session.high_score(), 5);
        assert_eq!(session.tick_count, 0);
        assert!(!session.snake.occupies(session.food.position));
    }

    #[test]
    fn food_never_lands_on_snake_over_a_long_run() {
        let bounds = GridSize {
            width: 10,
            height: 8,
        };
        let mut session = GameSession::new_with_seed(bounds, 17);

        for _ in 0..3_000 {
            let _ = session.tick();
            if session.snake.len() < bounds.total_cells() {
                assert!(!session.snake.occupies(session.food.position));
            }
            assert!(session.snake.len() <= session.snake.target_length());
        }
    }
}
