/// Survival score: one point per score tick while a run is live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score(u64);

impl Score {
    pub fn tick(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn text(&self) -> String {
        self.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_counts_up_from_zero() {
        let mut s = Score::default();
        assert_eq!(s.value(), 0);
        assert_eq!(s.tick(), 1);
        assert_eq!(s.tick(), 2);
        assert_eq!(s.text(), "2");
        s.reset();
        assert_eq!(s.value(), 0);
        assert_eq!(s.text(), "0");
    }
}
