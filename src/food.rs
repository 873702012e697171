use rand::Rng;

use crate::grid::{GridSize, Position};

/// The partner currently waiting on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Creates food at a uniformly random cell.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        Self::new(random_position(rng, bounds))
    }

    /// Moves the food to a uniformly random cell.
    ///
    /// The cell may overlap the snake; callers resample until it does not.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: GridSize) {
        self.position = random_position(rng, bounds);
    }
}

fn random_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}
