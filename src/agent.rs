//! Autoplay steering.
//!
//! Every tick the agent runs a breadth-first search from the head to the food
//! over the wrapped grid, treating every non-head body segment as a wall. The
//! body is taken as it is right now; the search does not account for the tail
//! moving out of the way while the head travels.

use std::collections::{HashSet, VecDeque};

use rand::Rng;

use crate::food::Food;
use crate::grid::{Direction, GridSize, Position, wrap};
use crate::snake::Snake;

/// Which policy produced a steering decision.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DecisionKind {
    /// A shortest path to the food exists; `distance` is its length in moves.
    Path { distance: usize },
    /// The head already sits on the food; the direction is random.
    AlreadyAtTarget,
    /// The food is walled off; the direction is a random safe step.
    Fallback,
    /// Nothing is safe; the snake keeps its heading.
    Forced,
}

/// A steering decision for one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Decision {
    pub direction: Direction,
    pub kind: DecisionKind,
}

/// Stateless pathfinding agent. Recomputes from scratch on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathfindingAgent;

impl PathfindingAgent {
    /// Returns the direction the snake should take this tick.
    #[must_use]
    pub fn next_move<R: Rng + ?Sized>(
        &self,
        snake: &Snake,
        food: &Food,
        bounds: GridSize,
        rng: &mut R,
    ) -> Direction {
        self.plan(snake, food, bounds, rng).direction
    }

    /// Returns the steering decision together with the policy that made it.
    #[must_use]
    pub fn plan<R: Rng + ?Sized>(
        &self,
        snake: &Snake,
        food: &Food,
        bounds: GridSize,
        rng: &mut R,
    ) -> Decision {
        let head = snake.head();

        // Entries carry only the first step taken from the head.
        let mut queue: VecDeque<(Position, Option<Direction>, usize)> = VecDeque::new();
        let mut visited: HashSet<Position> = HashSet::new();
        queue.push_back((head, None, 0));
        visited.insert(head);

        while let Some((position, first_move, distance)) = queue.pop_front() {
            if position == food.position {
                return match first_move {
                    Some(direction) => Decision {
                        direction,
                        kind: DecisionKind::Path { distance },
                    },
                    None => Decision {
                        direction: random_direction(rng),
                        kind: DecisionKind::AlreadyAtTarget,
                    },
                };
            }

            for direction in Direction::ALL {
                let next = wrap(position, direction, bounds);
                if visited.contains(&next) || snake.body_contains(next) {
                    continue;
                }

                visited.insert(next);
                queue.push_back((next, Some(first_move.unwrap_or(direction)), distance + 1));
            }
        }

        self.avoid_collision(snake, bounds, rng)
    }

    /// Picks a random step that does not land on the body, or keeps the
    /// current heading when every neighbor is blocked.
    #[must_use]
    pub fn avoid_collision<R: Rng + ?Sized>(
        &self,
        snake: &Snake,
        bounds: GridSize,
        rng: &mut R,
    ) -> Decision {
        let safe: Vec<Direction> = safe_directions(snake, bounds).collect();

        if safe.is_empty() {
            return Decision {
                direction: snake.heading(),
                kind: DecisionKind::Forced,
            };
        }

        Decision {
            direction: safe[rng.gen_range(0..safe.len())],
            kind: DecisionKind::Fallback,
        }
    }
}

/// Directions whose wrapped step from the head avoids every non-head segment.
pub fn safe_directions(snake: &Snake, bounds: GridSize) -> impl Iterator<Item = Direction> + '_ {
    let head = snake.head();
    Direction::ALL
        .into_iter()
        .filter(move |direction| !snake.body_contains(wrap(head, *direction, bounds)))
}

fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
}
