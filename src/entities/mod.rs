mod alien;
mod bullet;
mod fleet;
mod game_state;
mod ship;

// Re-export all public types
pub use alien::{Alien, AlienKind};
pub use bullet::{Bullet, BulletOwner};
pub use fleet::{Fleet, FleetLayout};
pub use game_state::GameState;
pub use ship::Ship;
