use crate::geometry::Rect;

/// The player's ship, pinned to the bottom of the screen
#[derive(Debug, Clone)]
pub struct Ship {
    pub rect: Rect,
    /// Exact horizontal position; `rect.x` holds the truncated value
    pub x: f32,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    pub fn new(width: i32, height: i32, screen_width: i32, screen_height: i32) -> Self {
        let mut ship = Self {
            rect: Rect::new(0, 0, width, height),
            x: 0.0,
            moving_left: false,
            moving_right: false,
        };
        ship.center(screen_width, screen_height);
        ship
    }

    /// Move according to the held movement flags, staying on screen
    pub fn update(&mut self, speed: f32, screen_width: i32) {
        if self.moving_right && self.rect.right() < screen_width {
            self.x += speed;
        }
        if self.moving_left && self.rect.left() > 0 {
            self.x -= speed;
        }
        self.rect.x = self.x as i32;
    }

    /// Put the ship back at the bottom centre of the screen
    pub fn center(&mut self, screen_width: i32, screen_height: i32) {
        self.rect.set_midbottom((screen_width / 2, screen_height));
        self.x = self.rect.x as f32;
    }

    pub fn get_sprite_lines(&self) -> Vec<&'static str> {
        vec![" /^\\ ", "<|#|>", "/_|_\\"]
    }
}
