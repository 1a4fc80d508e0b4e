use rand::Rng;

use super::alien::{Alien, AlienKind};
use crate::geometry::Rect;
use crate::settings::Settings;

/// Grid dimensions for a fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetLayout {
    pub columns: usize,
    pub rows: usize,
}

impl FleetLayout {
    /// Columns fill the screen width with one alien-width gap between
    /// neighbours. Rows fill the space above the ship, but a level only
    /// unlocks as many rows as its number.
    pub fn for_level(settings: &Settings, level: u32) -> Self {
        let rows = Self::available_rows(settings).min(level as usize);
        Self {
            columns: Self::available_columns(settings),
            rows,
        }
    }

    pub fn available_columns(settings: &Settings) -> usize {
        let alien_width = settings.alien_width.max(1);
        let space_x = settings.screen_width - 2 * alien_width;
        (space_x / (2 * alien_width)).max(0) as usize
    }

    pub fn available_rows(settings: &Settings) -> usize {
        let alien_height = settings.alien_height.max(1);
        let space_y = settings.screen_height - 3 * alien_height - settings.ship_height;
        (space_y / (2 * alien_height) - 1).max(0) as usize
    }

    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The grid of aliens for the current level
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    pub aliens: Vec<Alien>,
}

impl Fleet {
    pub fn new() -> Self {
        Self { aliens: Vec::new() }
    }

    /// Lay out a fresh fleet, rolling each slot for a shooter
    pub fn build<R: Rng + ?Sized>(settings: &Settings, level: u32, rng: &mut R) -> Self {
        let layout = FleetLayout::for_level(settings, level);
        let (width, height) = (settings.alien_width, settings.alien_height);

        let mut aliens = Vec::with_capacity(layout.len());
        for row in 0..layout.rows as i32 {
            for column in 0..layout.columns as i32 {
                let kind = if settings.shooter_chance > 0
                    && rng.random_range(0..settings.shooter_chance) == 0
                {
                    AlienKind::Shooter
                } else {
                    AlienKind::Standard
                };
                let x = width + 2 * width * column;
                let y = height + 2 * height * row;
                aliens.push(Alien::new(kind, x, y, width, height));
            }
        }

        Self { aliens }
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    pub fn clear(&mut self) {
        self.aliens.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alien> {
        self.aliens.iter()
    }

    /// The aliens that return fire
    pub fn shooters(&self) -> impl Iterator<Item = &Alien> {
        self.aliens.iter().filter(|alien| alien.can_shoot())
    }

    pub fn has_shooters(&self) -> bool {
        self.shooters().next().is_some()
    }

    /// True if any alien touches a side of the screen
    pub fn check_edges(&self, screen_width: i32) -> bool {
        self.aliens
            .iter()
            .any(|alien| alien.check_edges(screen_width))
    }

    pub fn drop_down(&mut self, distance: i32) {
        for alien in &mut self.aliens {
            alien.drop_down(distance);
        }
    }

    pub fn update(&mut self, speed: f32, direction: f32) {
        for alien in &mut self.aliens {
            alien.update(speed, direction);
        }
    }

    pub fn reached_bottom(&self, screen_height: i32) -> bool {
        self.aliens
            .iter()
            .any(|alien| alien.rect.bottom() >= screen_height)
    }

    pub fn collides_with(&self, rect: &Rect) -> bool {
        self.aliens.iter().any(|alien| alien.rect.collides_with(rect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_layout_default_screen() {
        let settings = Settings::default();
        assert_eq!(FleetLayout::available_columns(&settings), 9);
        assert_eq!(FleetLayout::available_rows(&settings), 3);
    }

    #[test]
    fn test_layout_rows_capped_by_level() {
        let settings = Settings::default();
        assert_eq!(FleetLayout::for_level(&settings, 1).rows, 1);
        assert_eq!(FleetLayout::for_level(&settings, 2).rows, 2);
        assert_eq!(FleetLayout::for_level(&settings, 3).rows, 3);
        assert_eq!(FleetLayout::for_level(&settings, 9).rows, 3);
    }

    #[test]
    fn test_layout_tiny_screen_is_empty() {
        let settings = Settings {
            screen_width: 100,
            screen_height: 100,
            ..Settings::default()
        };
        let layout = FleetLayout::for_level(&settings, 5);
        assert!(layout.is_empty());
        assert!(Fleet::build(&settings, 5, &mut rng()).is_empty());
    }

    #[test]
    fn test_build_positions() {
        let settings = Settings::default();
        let fleet = Fleet::build(&settings, 2, &mut rng());
        assert_eq!(fleet.len(), 18);

        let first = &fleet.aliens[0];
        assert_eq!((first.rect.x, first.rect.y), (60, 58));
        let second = &fleet.aliens[1];
        assert_eq!((second.rect.x, second.rect.y), (180, 58));
        let second_row = &fleet.aliens[9];
        assert_eq!((second_row.rect.x, second_row.rect.y), (60, 174));
    }

    #[test]
    fn test_build_no_shooters_when_disabled() {
        let settings = Settings {
            shooter_chance: 0,
            ..Settings::default()
        };
        let fleet = Fleet::build(&settings, 3, &mut rng());
        assert!(!fleet.has_shooters());
    }

    #[test]
    fn test_build_all_shooters_when_chance_is_one() {
        let settings = Settings {
            shooter_chance: 1,
            ..Settings::default()
        };
        let fleet = Fleet::build(&settings, 3, &mut rng());
        assert_eq!(fleet.shooters().count(), fleet.len());
    }

    #[test]
    fn test_shooter_share_is_roughly_one_in_ten() {
        let settings = Settings::default();
        let mut rng = rng();
        let mut shooters = 0;
        let mut total = 0;
        for _ in 0..200 {
            let fleet = Fleet::build(&settings, 3, &mut rng);
            shooters += fleet.shooters().count();
            total += fleet.len();
        }
        let share = shooters as f64 / total as f64;
        assert!(share > 0.05 && share < 0.15, "share was {share}");
    }

    #[test]
    fn test_check_edges_and_drop() {
        let settings = Settings::default();
        let mut fleet = Fleet::build(&settings, 1, &mut rng());
        assert!(!fleet.check_edges(settings.screen_width));

        fleet.aliens[0].rect.x = 0;
        assert!(fleet.check_edges(settings.screen_width));

        fleet.drop_down(10);
        assert!(fleet.iter().all(|alien| alien.rect.y == 68));
    }

    #[test]
    fn test_reached_bottom() {
        let settings = Settings::default();
        let mut fleet = Fleet::build(&settings, 1, &mut rng());
        assert!(!fleet.reached_bottom(800));
        fleet.aliens[3].rect.y = 800 - 58;
        assert!(fleet.reached_bottom(800));
    }

    #[test]
    fn test_collides_with() {
        let settings = Settings::default();
        let fleet = Fleet::build(&settings, 1, &mut rng());
        assert!(fleet.collides_with(&Rect::new(70, 60, 3, 15)));
        assert!(!fleet.collides_with(&Rect::new(130, 60, 3, 15)));
    }

    // Property-based tests
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_fleet_never_shrinks_with_level(level in 1u32..20, seed in any::<u64>()) {
                let settings = Settings::default();
                let mut rng = StdRng::seed_from_u64(seed);
                let current = Fleet::build(&settings, level, &mut rng);
                let next = Fleet::build(&settings, level + 1, &mut rng);
                prop_assert!(next.len() >= current.len());
            }

            #[test]
            fn test_fleet_fits_on_screen(
                screen_width in 300i32..2000,
                screen_height in 300i32..1500,
                level in 1u32..10
            ) {
                let settings = Settings {
                    screen_width,
                    screen_height,
                    ..Settings::default()
                };
                let fleet = Fleet::build(&settings, level, &mut StdRng::seed_from_u64(1));
                for alien in fleet.iter() {
                    prop_assert!(alien.rect.left() > 0);
                    prop_assert!(alien.rect.right() < screen_width);
                    prop_assert!(alien.rect.bottom() < screen_height - settings.ship_height);
                }
            }

            #[test]
            fn test_aliens_do_not_overlap(level in 1u32..5) {
                let settings = Settings::default();
                let fleet = Fleet::build(&settings, level, &mut StdRng::seed_from_u64(3));
                for (i, a) in fleet.iter().enumerate() {
                    for b in fleet.iter().skip(i + 1) {
                        prop_assert!(!a.rect.collides_with(&b.rect));
                    }
                }
            }
        }
    }
}
