use crate::segment::Segment;
use bincode::{Decode, Encode};
use rand::{SeedableRng, rngs::StdRng};

/// Everything needed to build a [`Segment`]. Nothing is validated here, a bad value surfaces as an
/// error on the first `step`.
#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub struct SegmentConfig {
    pub num_actions: usize,
    pub start: usize,
    pub left_bias: f64,
    pub terminal: usize,
    pub done: bool,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            num_actions: 2,
            start: 5,
            left_bias: 0.5,
            terminal: 5,
            done: false,
        }
    }
}

impl SegmentConfig {
    /// A two action walk that starts in the middle of the segment.
    pub fn centered(terminal: usize, left_bias: f64) -> Self {
        Self {
            start: terminal,
            left_bias,
            terminal,
            ..Default::default()
        }
    }

    pub fn with_num_actions(mut self, num_actions: usize) -> Self {
        self.num_actions = num_actions;
        self
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    pub fn with_left_bias(mut self, left_bias: f64) -> Self {
        self.left_bias = left_bias;
        self
    }

    pub fn with_terminal(mut self, terminal: usize) -> Self {
        self.terminal = terminal;
        self
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    pub fn build(&self) -> Segment {
        Segment::from_config(self)
    }

    pub fn build_seeded(&self, seed: u64) -> Segment {
        Segment::with_rng(self, StdRng::seed_from_u64(seed))
    }
}
