use clap::ValueEnum;
use rand::Rng;

use crate::label::Label;

/// How harsh the motivational messages are.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum Toxicity {
    Mild,
    #[default]
    Medium,
    Savage,
}

impl Toxicity {
    /// Returns the next level, wrapping from savage back to mild.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Mild => Self::Medium,
            Self::Medium => Self::Savage,
            Self::Savage => Self::Mild,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Medium => "Medium",
            Self::Savage => "Savage",
        }
    }
}

/// Shown before the first message is picked.
pub const DEFAULT_MESSAGE: &str = "You deserve better! This game is therapeutic.";

/// Returns the canned messages for one label and toxicity level.
#[must_use]
pub fn messages(label: Label, toxicity: Toxicity) -> &'static [&'static str] {
    match (label, toxicity) {
        (Label::ExBoyfriend, Toxicity::Mild) => &[
            "You're on a journey to better relationships!",
            "Every game is a step toward healing.",
            "You deserve someone who treats you right!",
        ],
        (Label::ExBoyfriend, Toxicity::Medium) => &[
            "That ex wasn't worth your tears anyway!",
            "Look how hungry they are for attention!",
            "You've upgraded your standards since then!",
        ],
        (Label::ExBoyfriend, Toxicity::Savage) => &[
            "Watch your toxic ex devour everything in sight!",
            "They were always this greedy, weren't they?",
            "This is literally how they treated your heart!",
        ],
        (Label::ExGirlfriend, Toxicity::Mild) => &[
            "Better days are ahead of you!",
            "You're learning and growing from past experiences.",
            "The right person is out there waiting!",
        ],
        (Label::ExGirlfriend, Toxicity::Medium) => &[
            "She never appreciated what she had!",
            "Notice how she's always chasing the next thing?",
            "You're so much better off now!",
        ],
        (Label::ExGirlfriend, Toxicity::Savage) => &[
            "See how she consumes everything in her path?",
            "This is exactly how she treated your feelings!",
            "At least the snake is honest about being cold-blooded!",
        ],
        (Label::Neutral, Toxicity::Mild) => &[
            "Every ending is a new beginning!",
            "You're doing great moving forward!",
            "Self-care is the best care!",
        ],
        (Label::Neutral, Toxicity::Medium) => &[
            "Some people just can't be satisfied!",
            "Their loss is someone else's gain!",
            "You've outgrown that relationship!",
        ],
        (Label::Neutral, Toxicity::Savage) => &[
            "Toxic is as toxic does!",
            "They're showing their true colors now!",
            "This is exactly why you're better off without them!",
        ],
    }
}

/// Picks one message for the label and toxicity uniformly at random.
#[must_use]
pub fn pick_message<R: Rng + ?Sized>(label: Label, toxicity: Toxicity, rng: &mut R) -> &'static str {
    let pool = messages(label, toxicity);
    pool[rng.gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::label::Label;

    use super::{Toxicity, messages, pick_message};

    #[test]
    fn every_combination_has_three_messages() {
        for label in [Label::ExBoyfriend, Label::ExGirlfriend, Label::Neutral] {
            for toxicity in [Toxicity::Mild, Toxicity::Medium, Toxicity::Savage] {
                assert_eq!(messages(label, toxicity).len(), 3);
            }
        }
    }

    #[test]
    fn picked_message_comes_from_matching_pool() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..30 {
            let message = pick_message(Label::Neutral, Toxicity::Savage, &mut rng);
            assert!(messages(Label::Neutral, Toxicity::Savage).contains(&message));
        }
    }

    #[test]
    fn toxicity_wraps_after_savage() {
        assert_eq!(Toxicity::Savage.next(), Toxicity::Mild);
        assert_eq!(Toxicity::default(), Toxicity::Medium);
    }
}
