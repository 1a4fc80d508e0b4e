/// Axis-aligned bounding box in world units.
///
/// Positions are integers; entities that need sub-unit motion keep their own
/// float coordinate and write the truncated value back into the rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn midtop(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y)
    }

    pub fn midbottom(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.bottom())
    }

    /// Moves the rect so its top edge is centred on `(x, y)`
    pub fn set_midtop(&mut self, (x, y): (i32, i32)) {
        self.x = x - self.width / 2;
        self.y = y;
    }

    /// Moves the rect so its bottom edge is centred on `(x, y)`
    pub fn set_midbottom(&mut self, (x, y): (i32, i32)) {
        self.x = x - self.width / 2;
        self.y = y - self.height;
    }

    /// Strict overlap test; rects that only share an edge do not collide
    pub fn collides_with(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    pub fn contains_point(&self, (x, y): (i32, i32)) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(rect.left(), 10);
        assert_eq!(rect.right(), 40);
        assert_eq!(rect.top(), 20);
        assert_eq!(rect.bottom(), 60);
        assert_eq!(rect.center(), (25, 40));
        assert_eq!(rect.midtop(), (25, 20));
        assert_eq!(rect.midbottom(), (25, 60));
    }

    #[test]
    fn test_set_midbottom() {
        let mut rect = Rect::new(0, 0, 60, 48);
        rect.set_midbottom((600, 800));
        assert_eq!(rect.x, 570);
        assert_eq!(rect.y, 752);
        assert_eq!(rect.midbottom(), (600, 800));
    }

    #[test]
    fn test_set_midtop() {
        let mut rect = Rect::new(0, 0, 3, 15);
        rect.set_midtop((600, 752));
        assert_eq!(rect.x, 599);
        assert_eq!(rect.top(), 752);
    }

    #[test]
    fn test_overlapping_rects_collide() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.collides_with(&b));
        assert!(b.collides_with(&a));
    }

    #[test]
    fn test_touching_rects_do_not_collide() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(!a.collides_with(&b));

        let c = Rect::new(0, 10, 10, 10);
        assert!(!a.collides_with(&c));
    }

    #[test]
    fn test_contains_point() {
        let button = Rect::new(500, 375, 200, 50);
        assert!(button.contains_point((600, 400)));
        assert!(button.contains_point((500, 375)));
        assert!(!button.contains_point((700, 400)));
        assert!(!button.contains_point((600, 425)));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_collision_is_symmetric(
                ax in -100i32..100, ay in -100i32..100, aw in 1i32..50, ah in 1i32..50,
                bx in -100i32..100, by in -100i32..100, bw in 1i32..50, bh in 1i32..50,
            ) {
                let a = Rect::new(ax, ay, aw, ah);
                let b = Rect::new(bx, by, bw, bh);
                prop_assert_eq!(a.collides_with(&b), b.collides_with(&a));
            }

            #[test]
            fn test_rect_collides_with_itself(
                x in -100i32..100, y in -100i32..100, w in 1i32..50, h in 1i32..50,
            ) {
                let rect = Rect::new(x, y, w, h);
                prop_assert!(rect.collides_with(&rect));
                prop_assert!(rect.contains_point(rect.center()));
            }
        }
    }
}
