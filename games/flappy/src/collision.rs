use glam::Vec2;

use crate::bird::Bird;
use crate::pipes::PipeField;

/// Axis-aligned rectangle, bottom-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.min.y
    }

    pub fn top(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Inclusive overlap: rectangles that only touch along an edge collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() < other.left()
            || self.left() > other.right()
            || self.top() < other.bottom()
            || self.bottom() > other.top())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    Pipe,
    Floor,
    Ceiling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    GameOver(Cause),
}

impl Verdict {
    pub fn is_over(&self) -> bool {
        matches!(self, Verdict::GameOver(_))
    }
}

/// Test the bird against every pipe and the playfield's floor and ceiling.
pub fn check(bird: &Bird, pipes: &PipeField, playfield_height: f32) -> Verdict {
    let body = bird.rect();
    if pipes.iter().any(|pipe| body.overlaps(&pipe.rect())) {
        return Verdict::GameOver(Cause::Pipe);
    }
    if bird.pos.y < 0.0 {
        return Verdict::GameOver(Cause::Floor);
    }
    if bird.top() > playfield_height {
        return Verdict::GameOver(Cause::Ceiling);
    }
    Verdict::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipes::{GapLayout, PipePair};

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn touching_edges_collide() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&rect(10.0, 0.0, 5.0, 5.0)));
        assert!(a.overlaps(&rect(0.0, 10.0, 5.0, 5.0)));
        assert!(!a.overlaps(&rect(10.01, 0.0, 5.0, 5.0)));
        assert!(!a.overlaps(&rect(0.0, -5.01, 5.0, 5.0)));
    }

    #[test]
    fn contained_rect_overlaps() {
        assert!(rect(0.0, 0.0, 100.0, 100.0).overlaps(&rect(40.0, 40.0, 1.0, 1.0)));
    }

    #[test]
    fn below_floor_is_game_over() {
        let bird = Bird::new(Vec2::new(100.0, -1.0), Vec2::splat(80.0));
        assert_eq!(
            check(&bird, &PipeField::new(), 600.0),
            Verdict::GameOver(Cause::Floor)
        );
    }

    #[test]
    fn above_ceiling_is_game_over() {
        let bird = Bird::new(Vec2::new(100.0, 521.0), Vec2::splat(80.0));
        assert_eq!(
            check(&bird, &PipeField::new(), 600.0),
            Verdict::GameOver(Cause::Ceiling)
        );
        // Exactly flush with the ceiling is still in bounds.
        let bird = Bird::new(Vec2::new(100.0, 520.0), Vec2::splat(80.0));
        assert_eq!(check(&bird, &PipeField::new(), 600.0), Verdict::Continue);
    }

    #[test]
    fn pipe_hit_is_game_over() {
        let mut field = PipeField::new();
        let layout = GapLayout {
            top_height: 150.0,
            gap: 250.0,
            bottom_height: 200.0,
        };
        field.push(PipePair::place(&layout, 150.0, 150.0, 600.0));
        let clear = Bird::new(Vec2::new(100.0, 300.0), Vec2::splat(80.0));
        assert_eq!(check(&clear, &field, 600.0), Verdict::Continue);

        let grazing = Bird::new(Vec2::new(100.0, 200.0), Vec2::splat(80.0));
        assert_eq!(check(&grazing, &field, 600.0), Verdict::GameOver(Cause::Pipe));

        let under_top = Bird::new(Vec2::new(100.0, 371.0), Vec2::splat(80.0));
        assert!(check(&under_top, &field, 600.0).is_over());
    }
}
