use crate::{
    env::{Env, EnvironmentDescription, RolloutMode},
    policies::Policy,
    rng::{next_seed, seeded_rng},
    sampler::trajectory_buffers::VariableSizedTrajectoryBuffer,
    utils::rollout_buffer::RolloutBuffer,
};
use anyhow::Result;
use rayon::prelude::*;
use tracing::info;

/// Independent environments stepped in parallel. Every environment gets its own seed stream
/// derived from the pool seed and its own copy of the policy.
pub struct VecEnvPool<E: Env> {
    pub buffers: Vec<VariableSizedTrajectoryBuffer<E>>,
}

impl<E: Env + Send> VecEnvPool<E> {
    pub fn new(envs: Vec<E>, seed: Option<u64>) -> Self {
        let mut seeder = seeded_rng(seed);
        let buffers = envs
            .into_iter()
            .map(|env| VariableSizedTrajectoryBuffer::new(env, Some(next_seed(&mut seeder))))
            .collect();
        Self { buffers }
    }

    pub fn num_envs(&self) -> usize {
        self.buffers.len()
    }

    pub fn env_description(&self) -> Option<EnvironmentDescription> {
        self.buffers.first().map(|b| b.env.env_description())
    }

    pub fn collect_rollouts<P>(
        &mut self,
        policy: &P,
        mode: RolloutMode,
    ) -> Result<Vec<RolloutBuffer<E::Obs, E::Action>>>
    where
        P: Policy<Obs = E::Obs, Action = E::Action> + Clone + Sync,
    {
        info!(n_envs = self.num_envs(), ?mode, "collecting rollouts");
        self.buffers
            .par_iter_mut()
            .map(|buffer| -> Result<RolloutBuffer<E::Obs, E::Action>> {
                let mut policy = policy.clone();
                buffer.collect(&mut policy, mode)?;
                Ok(buffer.take_rollout_buffer())
            })
            .collect()
    }
}
