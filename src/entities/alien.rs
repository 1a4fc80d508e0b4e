use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlienKind {
    Standard,
    /// Returns fire whenever the fleet's fire timer runs out
    Shooter,
}

#[derive(Debug, Clone)]
pub struct Alien {
    pub rect: Rect,
    /// Exact horizontal position; `rect.x` holds the truncated value
    pub x: f32,
    pub kind: AlienKind,
}

impl Alien {
    pub fn new(kind: AlienKind, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            x: x as f32,
            kind,
        }
    }

    pub fn can_shoot(&self) -> bool {
        self.kind == AlienKind::Shooter
    }

    /// Slide sideways; `direction` is +1.0 for right, -1.0 for left
    pub fn update(&mut self, speed: f32, direction: f32) {
        self.x += speed * direction;
        self.rect.x = self.x as i32;
    }

    /// True if the alien touches either side of the screen
    pub fn check_edges(&self, screen_width: i32) -> bool {
        self.rect.right() >= screen_width || self.rect.left() <= 0
    }

    pub fn drop_down(&mut self, distance: i32) {
        self.rect.y += distance;
    }

    pub fn get_sprite_lines(&self) -> Vec<&'static str> {
        match self.kind {
            AlienKind::Standard => vec![" /oo\\ ", "<|##|>", " /  \\ "],
            AlienKind::Shooter => vec![" {@@} ", "<[##]>", " \\vv/ "],
        }
    }
}
