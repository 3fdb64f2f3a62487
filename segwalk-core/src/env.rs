use anyhow::Result;
use bincode::{Decode, Encode};
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    Discrete(usize),
}

impl Space {
    pub fn size(&self) -> usize {
        match self {
            Self::Discrete(size) => *size,
        }
    }

    /// Whether `value` is one of `0..size`.
    pub fn contains(&self, value: usize) -> bool {
        match self {
            Self::Discrete(size) => value < *size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentDescription {
    pub observation_space: Space,
    pub action_space: Space,
}

impl EnvironmentDescription {
    pub fn new(observation_space: Space, action_space: Space) -> Self {
        Self {
            observation_space,
            action_space,
        }
    }

    pub fn action_size(&self) -> usize {
        self.action_space.size()
    }

    pub fn observation_size(&self) -> usize {
        self.observation_space.size()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnapShot<T> {
    pub state: T,
    pub reward: f32,
    pub terminated: bool,
    pub truncated: bool,
}

impl<T> SnapShot<T> {
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// The contract a driver loop relies on. Implementors own their random source, `reset` reseeds
/// it so that a seed fully determines the following episode.
pub trait Env {
    type Obs: Clone + Debug + Send + 'static;
    type Action: Clone + Debug + Send + 'static;

    fn reset(&mut self, seed: u64) -> Result<Self::Obs>;
    fn step(&mut self, action: Self::Action) -> Result<SnapShot<Self::Obs>>;
    fn env_description(&self) -> EnvironmentDescription;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub enum RolloutMode {
    EpisodeBound { n_episodes: usize },
    StepBound { n_steps: usize },
}
