use crate::{
    env::{Env, RolloutMode, SnapShot},
    policies::Policy,
    rng::{next_seed, seeded_rng},
    utils::rollout_buffer::RolloutBuffer,
};
use anyhow::Result;
use rand::rngs::StdRng;
use tracing::{debug, trace};

/// Drives a single environment with a policy and records every transition. Episodes can have any
/// length, the environment is reset with a fresh seed as soon as one terminates.
///
/// Collection only stops on episode ends or step counts, so a policy that never reaches a
/// terminal state makes `run_episodes` loop forever.
pub struct VariableSizedTrajectoryBuffer<E: Env> {
    pub env: E,
    buffer: RolloutBuffer<E::Obs, E::Action>,
    last_state: Option<E::Obs>,
    seed_rng: StdRng,
}

impl<E: Env> VariableSizedTrajectoryBuffer<E> {
    pub fn new(env: E, seed: Option<u64>) -> Self {
        Self {
            env,
            buffer: RolloutBuffer::default(),
            last_state: None,
            seed_rng: seeded_rng(seed),
        }
    }

    fn reset_env(&mut self) -> Result<E::Obs> {
        let seed = next_seed(&mut self.seed_rng);
        let state = self.env.reset(seed)?;
        debug!(seed, ?state, "environment reset");
        Ok(state)
    }

    /// Takes one step and returns whether it ended an episode.
    pub fn step<P>(&mut self, policy: &mut P) -> Result<bool>
    where
        P: Policy<Obs = E::Obs, Action = E::Action> + ?Sized,
    {
        let state = match self.last_state.take() {
            Some(state) => state,
            None => self.reset_env()?,
        };
        let action = match policy.get_action(state.clone()) {
            Ok(action) => action,
            Err(err) => {
                self.last_state = Some(state);
                return Err(err);
            }
        };
        let snapshot = match self.env.step(action.clone()) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                self.last_state = Some(state);
                return Err(err);
            }
        };
        let done = snapshot.done();
        let SnapShot {
            state: next_state,
            reward,
            ..
        } = snapshot;
        trace!(?state, ?action, ?next_state, reward, done, "transition");
        self.buffer.push_step(state, action, reward, done);
        self.last_state = if done {
            debug!(?next_state, reward, "episode finished");
            Some(self.reset_env()?)
        } else {
            Some(next_state)
        };
        Ok(done)
    }

    pub fn run_steps<P>(&mut self, policy: &mut P, n_steps: usize) -> Result<()>
    where
        P: Policy<Obs = E::Obs, Action = E::Action> + ?Sized,
    {
        for _ in 0..n_steps {
            self.step(policy)?;
        }
        Ok(())
    }

    pub fn run_episodes<P>(&mut self, policy: &mut P, n_episodes: usize) -> Result<()>
    where
        P: Policy<Obs = E::Obs, Action = E::Action> + ?Sized,
    {
        let mut finished = 0;
        while finished < n_episodes {
            if self.step(policy)? {
                finished += 1;
            }
        }
        Ok(())
    }

    pub fn collect<P>(&mut self, policy: &mut P, mode: RolloutMode) -> Result<()>
    where
        P: Policy<Obs = E::Obs, Action = E::Action> + ?Sized,
    {
        match mode {
            RolloutMode::EpisodeBound { n_episodes } => self.run_episodes(policy, n_episodes),
            RolloutMode::StepBound { n_steps } => self.run_steps(policy, n_steps),
        }
    }

    /// Hands out the transitions gathered so far, closed with the state the next step would act
    /// from. The environment keeps its current episode.
    pub fn take_rollout_buffer(&mut self) -> RolloutBuffer<E::Obs, E::Action> {
        let mut rb = std::mem::take(&mut self.buffer);
        if let Some(state) = &self.last_state {
            rb.set_last_state(state.clone());
        }
        rb
    }
}
