// Library exports for testing
pub use entities::{Alien, AlienKind, Bullet, BulletOwner, Fleet, FleetLayout, GameState, Ship};
pub use game::Game;
pub use geometry::Rect;
pub use high_score::HighScoreFile;
pub use settings::{DynamicSettings, Settings};
pub use stats::GameStats;

pub mod app;
pub mod entities;
pub mod game;
pub mod geometry;
pub mod high_score;
pub mod input;
pub mod renderer;
pub mod scoreboard;
pub mod settings;
pub mod stats;
