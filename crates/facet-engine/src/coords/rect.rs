use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin, +Y down).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { origin: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < self.origin.x + self.size.x
            && p.y < self.origin.y + self.size.y
    }

    /// Shrinks the rect by `d` on every side. Collapses to a point rect when
    /// the inset exceeds the half-extent.
    pub fn inset(self, d: f32) -> Self {
        let w = (self.size.x - 2.0 * d).max(0.0);
        let h = (self.size.y - 2.0 * d).max(0.0);
        Self { origin: Vec2::new(self.origin.x + d, self.origin.y + d), size: Vec2::new(w, h) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(!r.contains(Vec2::new(30.0, 30.0)));
    }

    #[test]
    fn inset_never_goes_negative() {
        let r = Rect::new(0.0, 0.0, 4.0, 4.0).inset(10.0);
        assert!(r.is_empty() || r.size == Vec2::ZERO);
    }
}
