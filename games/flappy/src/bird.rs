use flap_engine::approach;
use glam::Vec2;

use crate::collision::Rect;

/// The player avatar. `pos` is the bottom-left corner; angles are in degrees,
/// counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub pos: Vec2,
    pub size: Vec2,
    pub velocity: f32,
    pub angle: f32,
    pub target_angle: f32,
}

impl Bird {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            velocity: 0.0,
            angle: 0.0,
            target_angle: 0.0,
        }
    }

    /// Put the bird back at `pos`, motionless and level.
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.velocity = 0.0;
        self.angle = 0.0;
        self.target_angle = 0.0;
    }

    /// One integration step: gravity first, then position.
    pub fn advance(&mut self, gravity: f32) {
        self.velocity -= gravity;
        self.pos.y += self.velocity;
    }

    /// Flap. Replaces the current velocity.
    pub fn impulse(&mut self, magnitude: f32) {
        self.velocity = magnitude;
    }

    /// Point the target angle along the current velocity, clamped to
    /// `[min, max]` degrees.
    pub fn aim(&mut self, degrees_per_velocity: f32, min: f32, max: f32) {
        self.target_angle = (self.velocity * degrees_per_velocity).clamp(min, max);
    }

    pub fn smooth_rotate(&mut self, lerp_factor: f32) {
        self.angle = approach(self.angle, self.target_angle, lerp_factor);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird() -> Bird {
        Bird::new(Vec2::new(100.0, 300.0), Vec2::splat(80.0))
    }

    #[test]
    fn velocity_strictly_decreases_without_flaps() {
        let mut b = bird();
        let mut last = b.velocity;
        for _ in 0..120 {
            b.advance(0.5);
            assert!(b.velocity < last);
            last = b.velocity;
        }
    }

    #[test]
    fn advance_applies_gravity_before_moving() {
        let mut b = bird();
        b.advance(0.5);
        assert_eq!(b.velocity, -0.5);
        assert_eq!(b.pos.y, 299.5);
    }

    #[test]
    fn flap_overrides_velocity() {
        let mut b = bird();
        b.velocity = -37.0;
        b.impulse(10.0);
        assert_eq!(b.velocity, 10.0);
        b.velocity = 4.0;
        b.impulse(10.0);
        assert_eq!(b.velocity, 10.0);
    }

    #[test]
    fn target_angle_is_clamped() {
        let mut b = bird();
        b.velocity = 10.0;
        b.aim(3.0, -90.0, 30.0);
        assert_eq!(b.target_angle, 30.0);
        b.velocity = -100.0;
        b.aim(3.0, -90.0, 30.0);
        assert_eq!(b.target_angle, -90.0);
        b.velocity = -2.0;
        b.aim(3.0, -90.0, 30.0);
        assert_eq!(b.target_angle, -6.0);
    }

    #[test]
    fn angle_smooths_toward_target() {
        let mut b = bird();
        b.target_angle = 30.0;
        b.smooth_rotate(0.2);
        assert!((b.angle - 6.0).abs() < 1e-5);
        b.smooth_rotate(0.2);
        assert!((b.angle - 10.8).abs() < 1e-4);
        for _ in 0..200 {
            b.smooth_rotate(0.2);
        }
        assert!((b.angle - 30.0).abs() < 1e-3);
        assert!(b.angle <= 30.0);
    }

    #[test]
    fn reset_keeps_size() {
        let mut b = bird();
        b.velocity = 5.0;
        b.angle = 12.0;
        b.target_angle = 15.0;
        b.reset(Vec2::new(50.0, 60.0));
        assert_eq!(b, Bird::new(Vec2::new(50.0, 60.0), Vec2::splat(80.0)));
    }

    #[test]
    fn geometry() {
        let b = bird();
        assert_eq!(b.top(), 380.0);
        assert_eq!(b.center(), Vec2::new(140.0, 340.0));
        assert_eq!(b.rect().right(), 180.0);
    }
}
