/// Statistics tracked for the current game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    /// Best score seen, loaded at startup
    pub high_score: u32,
    /// Set once a game in this session beats the stored high score
    pub new_high_score: bool,
}

impl GameStats {
    pub fn new(ship_limit: u32, high_score: u32) -> Self {
        Self {
            ships_left: ship_limit,
            score: 0,
            level: 1,
            high_score,
            new_high_score: false,
        }
    }

    /// Reset the per-game counters; the high score survives
    pub fn reset_stats(&mut self, ship_limit: u32) {
        self.ships_left = ship_limit;
        self.score = 0;
        self.level = 1;
    }

    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Promote the current score to high score if it beats it
    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            self.new_high_score = true;
            true
        } else {
            false
        }
    }

    /// Take away one ship, returning true if any remain
    pub fn lose_ship(&mut self) -> bool {
        self.ships_left = self.ships_left.saturating_sub(1);
        self.ships_left > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = GameStats::new(3, 1200);
        assert_eq!(stats.ships_left, 3);
        assert_eq!(stats.score, 0);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.high_score, 1200);
        assert!(!stats.new_high_score);
    }

    #[test]
    fn test_reset_keeps_high_score() {
        let mut stats = GameStats::new(3, 0);
        stats.add_points(500);
        stats.check_high_score();
        stats.level = 4;
        stats.ships_left = 1;

        stats.reset_stats(3);
        assert_eq!(stats.ships_left, 3);
        assert_eq!(stats.score, 0);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.high_score, 500);
        assert!(stats.new_high_score);
    }

    #[test]
    fn test_check_high_score() {
        let mut stats = GameStats::new(3, 100);
        stats.add_points(50);
        assert!(!stats.check_high_score());
        assert_eq!(stats.high_score, 100);

        stats.add_points(75);
        assert!(stats.check_high_score());
        assert_eq!(stats.high_score, 125);
        assert!(stats.new_high_score);
    }

    #[test]
    fn test_equal_score_is_not_a_new_high_score() {
        let mut stats = GameStats::new(3, 100);
        stats.add_points(100);
        assert!(!stats.check_high_score());
        assert!(!stats.new_high_score);
    }

    #[test]
    fn test_lose_ship() {
        let mut stats = GameStats::new(2, 0);
        assert!(stats.lose_ship());
        assert_eq!(stats.ships_left, 1);
        assert!(!stats.lose_ship());
        assert_eq!(stats.ships_left, 0);
        assert!(!stats.lose_ship());
        assert_eq!(stats.ships_left, 0);
    }

    // Property-based tests
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_high_score_never_below_score(
                start in 0u32..10_000,
                awards in prop::collection::vec(0u32..500, 0..50)
            ) {
                let mut stats = GameStats::new(3, start);
                for points in awards {
                    stats.add_points(points);
                    stats.check_high_score();
                    prop_assert!(stats.high_score >= stats.score);
                    prop_assert!(stats.high_score >= start);
                }
            }
        }
    }
}
