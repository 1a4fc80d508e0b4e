use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use crate::entities::{Bullet, Fleet, GameState, Ship};
use crate::geometry::Rect;
use crate::settings::Settings;
use crate::stats::GameStats;

const PLAY_BUTTON_WIDTH: i32 = 200;
const PLAY_BUTTON_HEIGHT: i32 = 50;

/// Owns every entity and runs the per-tick simulation.
///
/// Nothing here touches the terminal: the caller feeds input in, calls
/// [`Game::update`] once per tick, honours [`Game::take_pause`], and reads the
/// state back out for drawing.
pub struct Game {
    settings: Settings,
    stats: GameStats,
    state: GameState,
    ship: Ship,
    bullets: Vec<Bullet>,
    alien_bullets: Vec<Bullet>,
    fleet: Fleet,
    /// Seconds until the shooters fire their next volley
    alien_timer: f32,
    play_button: Rect,
    cursor_visible: bool,
    pending_pause: Option<Duration>,
    rng: StdRng,
}

impl Game {
    pub fn new(settings: Settings, high_score: u32) -> Self {
        Self::with_rng(settings, high_score, StdRng::from_rng(&mut rand::rng()))
    }

    /// Construct with a caller-supplied RNG so fleets and timers are reproducible
    pub fn with_rng(settings: Settings, high_score: u32, rng: StdRng) -> Self {
        let ship = Ship::new(
            settings.ship_width,
            settings.ship_height,
            settings.screen_width,
            settings.screen_height,
        );
        let play_button = Rect::new(
            settings.screen_width / 2 - PLAY_BUTTON_WIDTH / 2,
            settings.screen_height / 2 - PLAY_BUTTON_HEIGHT / 2,
            PLAY_BUTTON_WIDTH,
            PLAY_BUTTON_HEIGHT,
        );

        Self {
            stats: GameStats::new(settings.ship_limit, high_score),
            settings,
            state: GameState::Inactive,
            ship,
            bullets: Vec::new(),
            alien_bullets: Vec::new(),
            fleet: Fleet::new(),
            alien_timer: 0.0,
            play_button,
            cursor_visible: true,
            pending_pause: None,
            rng,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == GameState::Active
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn alien_bullets(&self) -> &[Bullet] {
        &self.alien_bullets
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn alien_timer(&self) -> f32 {
        self.alien_timer
    }

    pub fn play_button(&self) -> Rect {
        self.play_button
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Real-time pause requested by a ship hit, if any; clears the request
    pub fn take_pause(&mut self) -> Option<Duration> {
        self.pending_pause.take()
    }

    /// Start a new game when the Play control is clicked
    pub fn click(&mut self, point: (i32, i32)) {
        if self.state == GameState::Inactive && self.play_button.contains_point(point) {
            self.start_game();
        }
    }

    /// Start a new game from the menu without the mouse
    pub fn restart(&mut self) {
        if self.state == GameState::Inactive {
            self.start_game();
        }
    }

    pub fn set_movement(&mut self, left: bool, right: bool) {
        self.ship.moving_left = left;
        self.ship.moving_right = right;
    }

    /// Fire a bullet unless the on-screen cap is reached
    pub fn fire_bullet(&mut self) {
        if self.state != GameState::Active {
            return;
        }
        if self.bullets.len() < self.settings.bullets_allowed {
            self.bullets.push(Bullet::from_ship(
                &self.ship.rect,
                self.settings.bullet_width,
                self.settings.bullet_height,
            ));
        }
    }

    /// Advance the simulation by one tick
    pub fn update(&mut self) {
        if self.state != GameState::Active {
            return;
        }

        self.ship
            .update(self.settings.dynamic.ship_speed, self.settings.screen_width);
        self.update_bullets();
        self.update_aliens();
        if self.state != GameState::Active {
            return;
        }
        self.update_alien_bullets();
        if self.state != GameState::Active {
            return;
        }

        if self.fleet.has_shooters() {
            self.update_alien_timer();
        }
    }

    fn start_game(&mut self) {
        self.settings.initialize_dynamic_settings();
        self.stats.reset_stats(self.settings.ship_limit);
        self.state = GameState::Active;

        self.fleet.clear();
        self.bullets.clear();
        self.alien_bullets.clear();

        self.create_fleet();
        self.ship
            .center(self.settings.screen_width, self.settings.screen_height);

        self.cursor_visible = false;
        self.pending_pause = None;
        self.reset_alien_timer();

        log::info!("New game started with {} aliens", self.fleet.len());
    }

    fn create_fleet(&mut self) {
        self.fleet = Fleet::build(&self.settings, self.stats.level, &mut self.rng);
    }

    fn update_bullets(&mut self) {
        let speed = self.settings.dynamic.bullet_speed;
        for bullet in &mut self.bullets {
            bullet.update(speed);
        }

        let screen_height = self.settings.screen_height;
        self.bullets
            .retain(|bullet| !bullet.is_off_screen(screen_height));

        self.check_bullet_collisions();
    }

    /// Remove bullet/alien pairs that overlap and score them
    fn check_bullet_collisions(&mut self) {
        let aliens = &mut self.fleet.aliens;
        let mut destroyed = 0u32;

        self.bullets.retain(|bullet| {
            match aliens
                .iter()
                .position(|alien| alien.rect.collides_with(&bullet.rect))
            {
                Some(idx) => {
                    aliens.remove(idx);
                    destroyed += 1;
                    false
                }
                None => true,
            }
        });

        if destroyed > 0 {
            for _ in 0..destroyed {
                self.stats.add_points(self.settings.dynamic.alien_points);
            }
            if self.stats.check_high_score() {
                log::debug!("New high score {}", self.stats.high_score);
            }

            if self.fleet.is_empty() {
                self.start_new_level();
            }
        }
    }

    fn start_new_level(&mut self) {
        self.stats.level += 1;
        self.bullets.clear();
        self.create_fleet();
        self.settings.increase_speed();

        log::info!(
            "Level {} reached, {} aliens worth {} points each",
            self.stats.level,
            self.fleet.len(),
            self.settings.dynamic.alien_points
        );
    }

    fn update_aliens(&mut self) {
        self.check_fleet_edges();
        self.fleet.update(
            self.settings.dynamic.alien_speed,
            self.settings.dynamic.fleet_direction,
        );

        if self.fleet.collides_with(&self.ship.rect) {
            log::info!("Ship hit by an alien");
            self.ship_hit();
            return;
        }

        if self.fleet.reached_bottom(self.settings.screen_height) {
            log::info!("An alien reached the bottom of the screen");
            self.ship_hit();
        }
    }

    fn check_fleet_edges(&mut self) {
        if self.fleet.check_edges(self.settings.screen_width) {
            self.fleet.drop_down(self.settings.fleet_drop_speed);
            self.settings.change_fleet_direction();
        }
    }

    fn update_alien_bullets(&mut self) {
        let speed = self.settings.dynamic.alien_bullet_speed;
        for bullet in &mut self.alien_bullets {
            bullet.update(speed);
        }

        let screen_height = self.settings.screen_height;
        self.alien_bullets
            .retain(|bullet| !bullet.is_off_screen(screen_height));

        if self.settings.alien_bullets_hit_ship {
            let ship_rect = self.ship.rect;
            if let Some(idx) = self
                .alien_bullets
                .iter()
                .position(|bullet| bullet.rect.collides_with(&ship_rect))
            {
                self.alien_bullets.remove(idx);
                log::info!("Ship hit by alien fire");
                self.ship_hit();
            }
        }
    }

    /// Lose a life, then either reset the board or end the game
    fn ship_hit(&mut self) {
        if self.stats.lose_ship() {
            self.fleet.clear();
            self.bullets.clear();
            self.alien_bullets.clear();

            self.create_fleet();
            self.ship
                .center(self.settings.screen_width, self.settings.screen_height);

            self.pending_pause = Some(Duration::from_millis(self.settings.ship_hit_pause_ms));
            log::info!("{} ships left", self.stats.ships_left);
        } else {
            self.state = GameState::Inactive;
            self.cursor_visible = true;
            log::info!(
                "Game over at level {} with {} points",
                self.stats.level,
                self.stats.score
            );
        }
    }

    fn update_alien_timer(&mut self) {
        self.alien_timer -= self.settings.dt();
        if self.alien_timer <= 0.0 {
            self.fire_alien_bullets();
            self.reset_alien_timer();
        }
    }

    /// Every shooter fires at once
    fn fire_alien_bullets(&mut self) {
        let (width, height) = (self.settings.bullet_width, self.settings.bullet_height);
        let volley: Vec<Bullet> = self
            .fleet
            .shooters()
            .map(|shooter| Bullet::from_alien(&shooter.rect, width, height))
            .collect();

        log::debug!("{} shooters fire", volley.len());
        self.alien_bullets.extend(volley);
    }

    fn reset_alien_timer(&mut self) {
        let (min, max) = (self.settings.alien_timer_min, self.settings.alien_timer_max);
        self.alien_timer = if max > min {
            self.rng.random_range(min..=max)
        } else {
            min
        };
    }
}
