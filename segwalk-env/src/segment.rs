use crate::config::SegmentConfig;
use anyhow::Result;
use rand::{Rng, SeedableRng, distr::Bernoulli, rngs::StdRng};
use segwalk_core::{
    env::{Env, EnvironmentDescription, SnapShot, Space},
    error::EnvError,
};
use tracing::{debug, trace};

pub const GOAL_REWARD: f32 = 1.0;
pub const FALL_REWARD: f32 = -1.0;
pub const STEP_REWARD: f32 = -0.05;

/// A walk on the positions `0..=2 * terminal`. Both ends absorb the walker.
///
/// Action 0 asks to go left, action 1 asks to go right. A coin with bias `left_bias` decides
/// whether the move goes the asked way: action 0 moves left with probability `left_bias`, action 1
/// moves right with probability `left_bias`.
#[derive(Debug, Clone)]
pub struct Segment<R = StdRng> {
    num_actions: usize,
    start: usize,
    position: usize,
    left_bias: f64,
    terminal: usize,
    finished: bool,
    rng: R,
}

impl Segment<StdRng> {
    pub fn new(
        num_actions: usize,
        start: usize,
        left_bias: f64,
        terminal: usize,
        done: bool,
    ) -> Self {
        Self::from_config(&SegmentConfig {
            num_actions,
            start,
            left_bias,
            terminal,
            done,
        })
    }

    pub fn from_config(config: &SegmentConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> Segment<R> {
    pub fn with_rng(config: &SegmentConfig, rng: R) -> Self {
        Self {
            num_actions: config.num_actions,
            start: config.start,
            position: config.start,
            left_bias: config.left_bias,
            terminal: config.terminal,
            finished: config.done,
            rng,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn left_bias(&self) -> f64 {
        self.left_bias
    }

    pub fn terminal(&self) -> usize {
        self.terminal
    }

    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    pub fn action_space(&self) -> Space {
        Space::Discrete(self.num_actions)
    }

    pub fn observation_space(&self) -> Space {
        Space::Discrete(2 * self.terminal + 1)
    }

    /// True for the two absorbing ends, 0 and 2T.
    pub fn is_terminal(&self, position: usize) -> bool {
        position == 0 || position == 2 * self.terminal
    }

    /// The reward only depends on where the walker lands.
    pub fn reward(&self, _position: usize, next_position: usize, _action: usize) -> f32 {
        if next_position == 2 * self.terminal {
            GOAL_REWARD
        } else if next_position == 0 {
            FALL_REWARD
        } else {
            STEP_REWARD
        }
    }

    fn check_step(&self, action: usize) -> Result<Bernoulli, EnvError> {
        let action_space = self.action_space();
        if !action_space.contains(action) {
            return Err(EnvError::InvalidAction {
                action,
                size: action_space.size(),
            });
        }
        let observation_space = self.observation_space();
        if !observation_space.contains(self.position) {
            return Err(EnvError::ObservationOutOfRange {
                observation: self.position,
                size: observation_space.size(),
            });
        }
        if self.num_actions != 2 {
            return Err(EnvError::ActionSpaceSize {
                expected: 2,
                actual: self.num_actions,
            });
        }
        if self.is_terminal(self.position) {
            return Err(EnvError::TerminalState {
                position: self.position,
            });
        }
        Bernoulli::new(self.left_bias).map_err(|_| EnvError::InvalidProbability(self.left_bias))
    }

    /// Moves the walker one position and returns `(position, reward, finished)`. Nothing changes
    /// when a precondition fails.
    pub fn step(&mut self, action: usize) -> Result<(usize, f32, bool), EnvError> {
        let coin = self.check_step(action)?;
        let position = self.position;
        let with_bias = self.rng.sample(coin);
        let moves_left = if action == 0 { with_bias } else { !with_bias };
        let next_position = if moves_left {
            position - 1
        } else {
            position + 1
        };
        if self.is_terminal(next_position) {
            self.finished = true;
        }
        let reward = self.reward(position, next_position, action);
        self.position = next_position;
        trace!(position, action, next_position, reward, "segment step");
        if self.finished {
            debug!(position = next_position, reward, "segment finished");
        }
        Ok((self.position, reward, self.finished))
    }

    /// Puts the walker back on the start position it was built with.
    pub fn reset(&mut self) -> usize {
        self.position = self.start;
        self.finished = false;
        self.position
    }
}

impl<R: Rng + SeedableRng> Segment<R> {
    pub fn reseed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
    }
}

impl<R: Rng + SeedableRng> Env for Segment<R> {
    type Obs = usize;
    type Action = usize;

    fn reset(&mut self, seed: u64) -> Result<usize> {
        self.reseed(seed);
        Ok(Segment::reset(self))
    }

    fn step(&mut self, action: usize) -> Result<SnapShot<usize>> {
        let (state, reward, terminated) = Segment::step(self, action)?;
        Ok(SnapShot {
            state,
            reward,
            terminated,
            truncated: false,
        })
    }

    fn env_description(&self) -> EnvironmentDescription {
        EnvironmentDescription::new(self.observation_space(), self.action_space())
    }
}
