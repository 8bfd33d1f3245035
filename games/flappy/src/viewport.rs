use flap_engine::{text_width, FontConfig, Viewport};
use glam::Vec2;

use crate::bird::Bird;
use crate::collision::Rect;
use crate::config::FlappyConfig;

/// Design constants converted to pixels for the current window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleAdapter {
    scale: f32,
    gravity: f32,
}

impl ScaleAdapter {
    pub fn new(scale: f32, cfg: &FlappyConfig) -> Self {
        Self {
            scale,
            gravity: cfg.gravity * scale,
        }
    }

    pub fn from_viewport(viewport: &Viewport, cfg: &FlappyConfig) -> Self {
        Self::new(viewport.scale(), cfg)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn flap_velocity(&self, cfg: &FlappyConfig) -> f32 {
        cfg.flap_velocity * self.scale
    }

    pub fn pipe_speed(&self, cfg: &FlappyConfig) -> f32 {
        cfg.pipe_speed * self.scale
    }

    pub fn pipe_width(&self, cfg: &FlappyConfig) -> f32 {
        cfg.pipe_width * self.scale
    }

    pub fn bird_size(&self, cfg: &FlappyConfig) -> Vec2 {
        Vec2::splat(cfg.bird_size * self.scale)
    }

    /// Where a run starts: a fixed distance from the left edge, halfway up.
    pub fn bird_home(&self, viewport: &Viewport, cfg: &FlappyConfig) -> Vec2 {
        Vec2::new(cfg.bird_x * self.scale, viewport.height() / 2.0)
    }

    /// Move the bird back home at the current size. Velocity and angle carry over.
    pub fn reproject(&self, bird: &mut Bird, viewport: &Viewport, cfg: &FlappyConfig) {
        bird.size = self.bird_size(cfg);
        bird.pos = self.bird_home(viewport, cfg);
    }

    /// Full-width band along the bottom edge. Its height is in pixels.
    pub fn score_box(&self, viewport: &Viewport, cfg: &FlappyConfig) -> Rect {
        Rect::new(Vec2::ZERO, Vec2::new(viewport.width(), cfg.score_box_height))
    }

    /// Bottom-left origin of the score label, centered in the score box.
    pub fn score_label_origin(
        &self,
        text: &str,
        viewport: &Viewport,
        cfg: &FlappyConfig,
        font: &FontConfig,
    ) -> Vec2 {
        let size = cfg.score_font_size;
        let width = text_width(text, size, font);
        Vec2::new(
            (viewport.width() - width) / 2.0,
            (cfg.score_box_height - size) / 2.0,
        )
    }

    pub fn game_over_rect(&self, viewport: &Viewport, cfg: &FlappyConfig) -> Rect {
        let size = Vec2::new(cfg.game_over_width, cfg.game_over_height) * self.scale;
        Rect::new(viewport.center() - size * 0.5, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(w: f32, h: f32) -> Viewport {
        let mut vp = Viewport::new(400.0, 600.0);
        vp.resize(w, h);
        vp
    }

    #[test]
    fn height_limited_window_keeps_unit_scale() {
        let cfg = FlappyConfig::default();
        let s = ScaleAdapter::from_viewport(&viewport(800.0, 600.0), &cfg);
        assert_eq!(s.scale(), 1.0);
        assert_eq!(s.gravity(), 0.5);
    }

    #[test]
    fn doubled_window_doubles_everything() {
        let cfg = FlappyConfig::default();
        let vp = viewport(800.0, 1200.0);
        let s = ScaleAdapter::from_viewport(&vp, &cfg);
        assert_eq!(s.scale(), 2.0);
        assert_eq!(s.gravity(), 1.0);
        assert_eq!(s.flap_velocity(&cfg), 20.0);
        assert_eq!(s.pipe_speed(&cfg), 6.0);
        assert_eq!(s.pipe_width(&cfg), 300.0);
        assert_eq!(s.bird_size(&cfg), Vec2::splat(160.0));
        assert_eq!(s.bird_home(&vp, &cfg), Vec2::new(200.0, 600.0));
    }

    #[test]
    fn reproject_keeps_motion() {
        let cfg = FlappyConfig::default();
        let mut bird = Bird::new(Vec2::new(100.0, 123.0), Vec2::splat(80.0));
        bird.velocity = -4.0;
        bird.angle = -12.0;

        let vp = viewport(800.0, 1200.0);
        ScaleAdapter::from_viewport(&vp, &cfg).reproject(&mut bird, &vp, &cfg);

        assert_eq!(bird.pos, Vec2::new(200.0, 600.0));
        assert_eq!(bird.size, Vec2::splat(160.0));
        assert_eq!(bird.velocity, -4.0);
        assert_eq!(bird.angle, -12.0);
    }

    #[test]
    fn score_box_height_is_unscaled() {
        let cfg = FlappyConfig::default();
        let vp = viewport(800.0, 1200.0);
        let s = ScaleAdapter::from_viewport(&vp, &cfg);
        let band = s.score_box(&vp, &cfg);
        assert_eq!(band.size, Vec2::new(800.0, 50.0));
        assert_eq!(band.min, Vec2::ZERO);

        let origin = s.score_label_origin("7", &vp, &cfg, &FontConfig::default());
        assert_eq!(origin, Vec2::new(385.0, 10.0));
    }

    #[test]
    fn game_over_is_centered() {
        let cfg = FlappyConfig::default();
        let vp = viewport(400.0, 600.0);
        let r = ScaleAdapter::from_viewport(&vp, &cfg).game_over_rect(&vp, &cfg);
        assert_eq!(r.min, Vec2::new(50.0, 250.0));
        assert_eq!(r.size, Vec2::new(300.0, 100.0));
    }
}
