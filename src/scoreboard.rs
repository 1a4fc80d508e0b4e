use crate::stats::GameStats;

/// Display text for the heads-up scoreboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub score_text: String,
    pub high_score_text: String,
    pub level_text: String,
    pub ships_left: u32,
}

impl Scoreboard {
    pub fn from_stats(stats: &GameStats) -> Self {
        Self {
            score_text: format_score(stats.score),
            high_score_text: format_score(stats.high_score),
            level_text: stats.level.to_string(),
            ships_left: stats.ships_left,
        }
    }
}

/// Round to the nearest ten and group thousands with commas
///
/// A score exactly halfway between two tens goes to the one with an even
/// tens digit, so 65 shows as 60 and 75 as 80.
pub fn format_score(score: u32) -> String {
    let (tens, ones) = (score as u64 / 10, score as u64 % 10);
    let rounded = if ones > 5 || (ones == 5 && tens % 2 == 1) {
        (tens + 1) * 10
    } else {
        tens * 10
    };
    let digits = rounded.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
