use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BulletOwner {
    Ship,
    Alien,
}

#[derive(Debug, Clone)]
pub struct Bullet {
    pub rect: Rect,
    /// Exact vertical position; `rect.y` holds the truncated value
    pub y: f32,
    pub owner: BulletOwner,
}

impl Bullet {
    /// A bullet leaving the top of the ship
    pub fn from_ship(ship: &Rect, width: i32, height: i32) -> Self {
        let mut rect = Rect::new(0, 0, width, height);
        rect.set_midtop(ship.midtop());
        Self {
            rect,
            y: rect.y as f32,
            owner: BulletOwner::Ship,
        }
    }

    /// A bullet dropped from the middle of a shooter alien
    pub fn from_alien(alien: &Rect, width: i32, height: i32) -> Self {
        let mut rect = Rect::new(0, 0, width, height);
        rect.set_midtop(alien.center());
        Self {
            rect,
            y: rect.y as f32,
            owner: BulletOwner::Alien,
        }
    }

    pub fn update(&mut self, speed: f32) {
        match self.owner {
            BulletOwner::Ship => self.y -= speed,
            BulletOwner::Alien => self.y += speed,
        }
        self.rect.y = self.y as i32;
    }

    /// Ship bullets leave through the top, alien bullets through the bottom
    pub fn is_off_screen(&self, screen_height: i32) -> bool {
        match self.owner {
            BulletOwner::Ship => self.rect.bottom() <= 0,
            BulletOwner::Alien => self.rect.top() >= screen_height,
        }
    }

    pub fn get_char(&self) -> char {
        match self.owner {
            BulletOwner::Ship => '|',
            BulletOwner::Alien => '!',
        }
    }
}
