use glam::Vec2;
use rand::Rng;

use crate::collision::Rect;
use crate::config::FlappyConfig;
use crate::error::FlappyError;

/// Vertical split of the playfield for one pipe pair, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapLayout {
    pub top_height: f32,
    pub gap: f32,
    pub bottom_height: f32,
}

/// Pick a random top pipe height so both pipes are at least the minimum
/// height and the gap between them is fixed.
///
/// The top height is drawn from the whole-pixel range
/// `[ceil(min), floor(height - gap - min)]`.
pub fn plan_gap<R: Rng + ?Sized>(
    playfield_height: f32,
    scale: f32,
    cfg: &FlappyConfig,
    rng: &mut R,
) -> Result<GapLayout, FlappyError> {
    let gap = cfg.gap_height * scale;
    let min = cfg.min_pipe_height * scale;
    let max = playfield_height - gap - min;

    let lo = min.ceil();
    let hi = max.floor();
    let has_room = lo <= hi;
    if !has_room {
        return Err(FlappyError::InvalidSpawnRange {
            min,
            max,
            playfield_height,
        });
    }

    let top_height = rng.gen_range(lo as i64..=hi as i64) as f32;
    Ok(GapLayout {
        top_height,
        gap,
        bottom_height: playfield_height - top_height - gap,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Hangs from the ceiling, drawn upside down.
    Top,
    /// Stands on the floor.
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Bottom-left corner.
    pub pos: Vec2,
    pub size: Vec2,
    pub orientation: Orientation,
}

impl Pipe {
    pub fn new(pos: Vec2, size: Vec2, orientation: Orientation) -> Self {
        Self { pos, size, orientation }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Two pipes sharing an x position with a gap between them.
#[derive(Debug, Clone, PartialEq)]
pub struct PipePair {
    pub top: Pipe,
    pub bottom: Pipe,
}

impl PipePair {
    /// Top pipe flush with the ceiling, bottom pipe flush with the floor.
    pub fn place(layout: &GapLayout, x: f32, width: f32, playfield_height: f32) -> Self {
        Self {
            top: Pipe::new(
                Vec2::new(x, playfield_height - layout.top_height),
                Vec2::new(width, layout.top_height),
                Orientation::Top,
            ),
            bottom: Pipe::new(
                Vec2::new(x, 0.0),
                Vec2::new(width, layout.bottom_height),
                Orientation::Bottom,
            ),
        }
    }

    pub fn scroll(&mut self, dx: f32) {
        self.top.pos.x -= dx;
        self.bottom.pos.x -= dx;
    }

    /// Whether the pair has fully left the playfield on the left.
    pub fn is_off_screen(&self) -> bool {
        self.top.pos.x + self.top.size.x <= 0.0
    }

    pub fn pipes(&self) -> [&Pipe; 2] {
        [&self.top, &self.bottom]
    }
}

/// Active pipe pairs, oldest first.
#[derive(Debug, Clone, Default)]
pub struct PipeField {
    pairs: Vec<PipePair>,
}

impl PipeField {
    pub fn new() -> Self {
        Self {
            pairs: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, pair: PipePair) {
        self.pairs.push(pair);
    }

    /// Move every pair left by `dx`.
    pub fn scroll(&mut self, dx: f32) {
        for pair in &mut self.pairs {
            pair.scroll(dx);
        }
    }

    /// Drop pairs that scrolled off the left edge, keeping the rest in order.
    /// Compacts in place. Returns how many were dropped.
    pub fn prune(&mut self) -> usize {
        let mut kept = 0;
        for i in 0..self.pairs.len() {
            if !self.pairs[i].is_off_screen() {
                self.pairs.swap(kept, i);
                kept += 1;
            }
        }
        let removed = self.pairs.len() - kept;
        self.pairs.truncate(kept);
        removed
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[PipePair] {
        &self.pairs
    }

    /// Every pipe, pair by pair, top before bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.pairs.iter().flat_map(|pair| pair.pipes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn layout(top: f32, bottom: f32) -> GapLayout {
        GapLayout {
            top_height: top,
            gap: 250.0,
            bottom_height: bottom,
        }
    }

    #[test]
    fn heights_fill_the_playfield() {
        let cfg = FlappyConfig::default();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let g = plan_gap(600.0, 1.0, &cfg, &mut rng).unwrap();
            assert_eq!(g.top_height + g.gap + g.bottom_height, 600.0);
            assert!(g.top_height >= 80.0 && g.top_height <= 270.0);
            assert!(g.bottom_height >= 80.0 && g.bottom_height <= 270.0);
            assert_eq!(g.top_height.fract(), 0.0);
        }
    }

    #[test]
    fn both_range_ends_are_reachable() {
        let cfg = FlappyConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let tops: Vec<f32> = (0..5000)
            .map(|_| plan_gap(600.0, 1.0, &cfg, &mut rng).unwrap().top_height)
            .collect();
        assert!(tops.contains(&80.0));
        assert!(tops.contains(&270.0));
    }

    #[test]
    fn scaled_heights_respect_scaled_minimum() {
        let cfg = FlappyConfig::default();
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let g = plan_gap(1200.0, 2.0, &cfg, &mut rng).unwrap();
            assert_eq!(g.gap, 500.0);
            assert!(g.top_height >= 160.0);
            assert!(g.bottom_height >= 160.0);
            assert_eq!(g.top_height + g.gap + g.bottom_height, 1200.0);
        }
    }

    fn window_scale(w: f32, h: f32) -> f32 {
        (w / 400.0).min(h / 600.0)
    }

    #[test]
    fn extreme_aspect_ratios_still_fit() {
        let cfg = FlappyConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        for (w, h) in [(4000.0, 100.0), (100.0, 4000.0), (10000.0, 600.0), (0.0, 0.0)] {
            let g = plan_gap(h, window_scale(w, h), &cfg, &mut rng).unwrap();
            assert!((g.top_height + g.gap + g.bottom_height - h).abs() < 1e-3);
        }
    }

    #[test]
    fn tiny_window_has_no_whole_pixel_room() {
        let cfg = FlappyConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let err = plan_gap(1.0, window_scale(1.0, 1.0), &cfg, &mut rng).unwrap_err();
        assert!(matches!(err, FlappyError::InvalidSpawnRange { .. }));
    }

    #[test]
    fn oversized_gap_is_rejected() {
        let cfg = FlappyConfig {
            gap_height: 500.0,
            ..FlappyConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!(plan_gap(600.0, 1.0, &cfg, &mut rng).is_err());
        assert!(plan_gap(400.0, 1.0, &FlappyConfig::default(), &mut rng).is_err());
    }

    #[test]
    fn single_value_range_is_valid() {
        let cfg = FlappyConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let g = plan_gap(410.0, 1.0, &cfg, &mut rng).unwrap();
        assert_eq!(g.top_height, 80.0);
        assert_eq!(g.bottom_height, 80.0);
    }

    #[test]
    fn place_pins_pipes_to_edges() {
        let pair = PipePair::place(&layout(80.0, 270.0), 400.0, 150.0, 600.0);
        assert_eq!(pair.top.pos, Vec2::new(400.0, 520.0));
        assert_eq!(pair.top.size, Vec2::new(150.0, 80.0));
        assert_eq!(pair.top.orientation, Orientation::Top);
        assert_eq!(pair.bottom.pos, Vec2::new(400.0, 0.0));
        assert_eq!(pair.bottom.size, Vec2::new(150.0, 270.0));
        assert_eq!(pair.top.rect().bottom() - pair.bottom.rect().top(), 250.0);
    }

    #[test]
    fn prune_drops_only_offscreen_pairs_in_order() {
        let mut field = PipeField::new();
        for x in [-150.0, 10.0, -200.0, 50.0, -149.0] {
            field.push(PipePair::place(&layout(100.0, 250.0), x, 150.0, 600.0));
        }
        assert_eq!(field.prune(), 2);
        let xs: Vec<f32> = field.pairs().iter().map(|p| p.top.pos.x).collect();
        assert_eq!(xs, vec![10.0, 50.0, -149.0]);
    }

    #[test]
    fn scroll_moves_both_pipes() {
        let mut field = PipeField::new();
        field.push(PipePair::place(&layout(100.0, 250.0), 400.0, 150.0, 600.0));
        field.scroll(3.0);
        assert!(field.iter().all(|p| p.pos.x == 397.0));
        assert_eq!(field.iter().count(), 2);
    }
}
