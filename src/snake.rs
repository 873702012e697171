use std::collections::VecDeque;

use rand::Rng;

use crate::config::INITIAL_SNAKE_LENGTH;
use crate::grid::{Direction, GridSize, Position, wrap};

/// Result of one movement step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MoveOutcome {
    Moved,
    /// The head ran into the body. The snake has already been reset and
    /// `final_score` is the score it held before the reset.
    Collided { final_score: u32 },
}

/// Mutable snake state: body, heading, target length and score.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Direction,
    target_length: usize,
    score: u32,
}

impl Snake {
    /// Creates a fresh snake at the grid center with a random heading.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        let mut snake = Self {
            body: VecDeque::new(),
            heading: Direction::Right,
            target_length: INITIAL_SNAKE_LENGTH,
            score: 0,
        };
        snake.reset(rng, bounds);
        snake
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// The target length equals the segment count, so the snake keeps its
    /// size until it grows.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, heading: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");
        let target_length = segments.len();

        Self {
            body: VecDeque::from(segments),
            heading,
            target_length,
            score: 0,
        }
    }

    /// Restores the starting state: one cell at the center, random heading.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: GridSize) {
        self.body.clear();
        self.body.push_front(bounds.center());
        self.heading = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        self.target_length = INITIAL_SNAKE_LENGTH;
        self.score = 0;
    }

    /// Changes heading, ignoring 180° reversals once the body has more than one cell.
    pub fn turn(&mut self, direction: Direction) {
        if self.body.len() > 1 && direction == self.heading.opposite() {
            return;
        }
        self.heading = direction;
    }

    /// Advances the head one cell along the heading.
    ///
    /// Runs into `body[1..]` reset the snake instead of moving it.
    pub fn move_forward<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: GridSize) -> MoveOutcome {
        let next_head = self.next_head_position(bounds);

        if self.body_contains(next_head) {
            let final_score = self.score;
            self.reset(rng, bounds);
            return MoveOutcome::Collided { final_score };
        }

        self.body.push_front(next_head);
        if self.body.len() > self.target_length {
            let _ = self.body.pop_back();
        }

        MoveOutcome::Moved
    }

    /// Extends the target length by one and scores a capture.
    pub fn grow(&mut self) {
        self.target_length += 1;
        self.score += 1;
    }

    /// Returns the head position for the next movement tick.
    #[must_use]
    pub fn next_head_position(&self, bounds: GridSize) -> Position {
        wrap(self.head(), self.heading, bounds)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        // `reset` and `from_segments` never leave the body empty.
        self.body[0]
    }

    /// Returns true if any non-head segment occupies `position`.
    #[must_use]
    pub fn body_contains(&self, position: Position) -> bool {
        self.body.iter().skip(1).any(|segment| *segment == position)
    }

    /// Returns true if any segment, head included, occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::grid::{Direction, GridSize, Position};

    use super::{MoveOutcome, Snake};

    const BOUNDS: GridSize = GridSize {
        width: 30,
        height: 20,
    };

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    fn straight_snake() -> Snake {
        Snake::from_segments(
            vec![
                Position::new(15, 10),
                Position::new(14, 10),
                Position::new(13, 10),
            ],
            Direction::Right,
        )
    }

    #[test]
    fn new_snake_starts_at_center_with_target_three() {
        let snake = Snake::new(&mut rng(), BOUNDS);

        assert_eq!(snake.head(), Position::new(15, 10));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.target_length(), 3);
        assert_eq!(snake.score(), 0);
    }

    #[test]
    fn reset_heading_covers_every_direction() {
        let mut rng = rng();
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(Snake::new(&mut rng, BOUNDS).heading());
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = Snake::from_segments(vec![Position::new(5, 5)], Direction::Right);

        let outcome = snake.move_forward(&mut rng(), BOUNDS);

        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn fresh_snake_grows_to_target_length_then_holds() {
        let mut rng = rng();
        let mut snake = Snake::new(&mut rng, BOUNDS);

        let mut lengths = Vec::new();
        for _ in 0..4 {
            let before = snake.len();
            assert_eq!(snake.move_forward(&mut rng, BOUNDS), MoveOutcome::Moved);
            assert_eq!(snake.len(), (before + 1).min(snake.target_length()));
            lengths.push(snake.len());
        }

        assert_eq!(lengths, vec![2, 3, 3, 3]);
    }

    #[test]
    fn grow_raises_target_and_score() {
        let mut snake = straight_snake();

        snake.grow();
        assert_eq!(snake.target_length(), 4);
        assert_eq!(snake.score(), 1);

        let _ = snake.move_forward(&mut rng(), BOUNDS);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.segments().last(), Some(&Position::new(13, 10)));
    }

    #[test]
    fn turn_rejects_reverse_when_longer_than_one() {
        let mut snake = straight_snake();

        snake.turn(Direction::Left);
        assert_eq!(snake.heading(), Direction::Right);

        snake.turn(Direction::Up);
        assert_eq!(snake.heading(), Direction::Up);
    }

    #[test]
    fn turn_allows_reverse_for_single_cell() {
        let mut snake = Snake::from_segments(vec![Position::new(3, 3)], Direction::Up);

        snake.turn(Direction::Down);

        assert_eq!(snake.heading(), Direction::Down);
    }

    #[test]
    fn movement_wraps_around_edges() {
        let mut snake = Snake::from_segments(vec![Position::new(29, 0)], Direction::Right);
        let _ = snake.move_forward(&mut rng(), BOUNDS);
        assert_eq!(snake.head(), Position::new(0, 0));

        snake.turn(Direction::Up);
        let _ = snake.move_forward(&mut rng(), BOUNDS);
        assert_eq!(snake.head(), Position::new(0, 19));
    }

    #[test]
    fn self_collision_resets_snake_fully() {
        let mut snake = Snake::from_segments(
            vec![
                Position::new(2, 2),
                Position::new(1, 2),
                Position::new(1, 3),
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(3, 2),
            ],
            Direction::Down,
        );
        snake.grow();
        snake.grow();

        let outcome = snake.move_forward(&mut rng(), BOUNDS);

        assert_eq!(outcome, MoveOutcome::Collided { final_score: 2 });
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), BOUNDS.center());
        assert_eq!(snake.target_length(), 3);
        assert_eq!(snake.score(), 0);
    }

    #[test]
    fn body_contains_excludes_head() {
        let snake = straight_snake();

        assert!(!snake.body_contains(Position::new(15, 10)));
        assert!(snake.body_contains(Position::new(14, 10)));
        assert!(snake.occupies(Position::new(15, 10)));
        assert!(!snake.occupies(Position::new(16, 10)));
    }
}
