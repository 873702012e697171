use clap::ValueEnum;

use crate::speed::Speed;

/// Who the Ex is, which decides every piece of display text.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum Label {
    #[default]
    ExBoyfriend,
    ExGirlfriend,
    Neutral,
}

impl Label {
    /// Returns the next label in display order.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::ExBoyfriend => Self::ExGirlfriend,
            Self::ExGirlfriend => Self::Neutral,
            Self::Neutral => Self::ExBoyfriend,
        }
    }

    /// Noun used in the score lines.
    #[must_use]
    pub fn score_prefix(self) -> &'static str {
        match self {
            Self::ExBoyfriend => "Boyfriends",
            Self::ExGirlfriend => "Girlfriends",
            Self::Neutral => "Partners",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::ExBoyfriend => "Ex-Boyfriend Eats Girlfriends",
            Self::ExGirlfriend => "Ex-Girlfriend Eats Boyfriends",
            Self::Neutral => "Ex Eats Partners",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::ExBoyfriend => "Watch your Ex hunt down all your boyfriends",
            Self::ExGirlfriend => "Watch your Ex hunt down all your girlfriends",
            Self::Neutral => "Watch your Ex hunt down all your partners",
        }
    }

    /// Caption of the reset control.
    #[must_use]
    pub fn reset_text(self) -> &'static str {
        match self {
            Self::ExBoyfriend => "New Ex-Boyfriend",
            Self::ExGirlfriend => "New Ex-Girlfriend",
            Self::Neutral => "New Ex",
        }
    }

    /// Caption prefix of the speed control.
    #[must_use]
    pub fn speed_prefix(self) -> &'static str {
        match self {
            Self::ExBoyfriend => "Ex-Boyfriend Speed",
            Self::ExGirlfriend => "Ex-Girlfriend Speed",
            Self::Neutral => "Ex Speed",
        }
    }

    #[must_use]
    pub fn footer(self) -> &'static str {
        match self {
            Self::ExBoyfriend => {
                "Watch as your Ex-Boyfriend hunts down all your boyfriends with scary precision!"
            }
            Self::ExGirlfriend => {
                "Watch as your Ex-Girlfriend hunts down all your girlfriends with scary precision!"
            }
            Self::Neutral => "Watch as your Ex hunts down all your partners with scary precision!",
        }
    }
}

/// Formats the current score line, e.g. `Boyfriends Eaten: 3`.
#[must_use]
pub fn score_text(label: Label, score: u32) -> String {
    format!("{} Eaten: {score}", label.score_prefix())
}

/// Formats the best score line, e.g. `Most Boyfriends Eaten: 12`.
#[must_use]
pub fn high_score_text(label: Label, high_score: u32) -> String {
    format!("Most {} Eaten: {high_score}", label.score_prefix())
}

/// Formats the speed control caption, e.g. `Ex Speed: Fast`.
#[must_use]
pub fn speed_text(label: Label, speed: Speed) -> String {
    format!("{}: {}", label.speed_prefix(), speed.label())
}

#[cfg(test)]
mod tests {
    use crate::speed::Speed;

    use super::{Label, high_score_text, score_text, speed_text};

    #[test]
    fn score_lines_follow_the_label() {
        assert_eq!(score_text(Label::ExBoyfriend, 3), "Boyfriends Eaten: 3");
        assert_eq!(score_text(Label::ExGirlfriend, 0), "Girlfriends Eaten: 0");
        assert_eq!(
            high_score_text(Label::Neutral, 12),
            "Most Partners Eaten: 12"
        );
    }

    #[test]
    fn speed_caption_combines_label_and_speed() {
        assert_eq!(speed_text(Label::Neutral, Speed::Fast), "Ex Speed: Fast");
        assert_eq!(
            speed_text(Label::ExGirlfriend, Speed::Slow),
            "Ex-Girlfriend Speed: Slow"
        );
    }

    #[test]
    fn labels_cycle_through_all_three() {
        let start = Label::default();
        assert_eq!(start.next().next().next(), start);
        assert_ne!(start.next(), start);
    }
}
