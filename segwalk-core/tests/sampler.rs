use anyhow::{Result, ensure};
use segwalk_core::{
    env::{Env, EnvironmentDescription, RolloutMode, SnapShot, Space},
    policies::{ConstantPolicy, RandomPolicy},
    sampler::{env_pools::VecEnvPool, trajectory_buffers::VariableSizedTrajectoryBuffer},
};

/// Every episode lasts exactly `length` steps and pays 1 per step.
#[derive(Debug)]
struct Countdown {
    length: usize,
    remaining: usize,
}

impl Countdown {
    fn new(length: usize) -> Self {
        Self {
            length,
            remaining: length,
        }
    }
}

impl Env for Countdown {
    type Obs = usize;
    type Action = usize;

    fn reset(&mut self, _seed: u64) -> Result<usize> {
        self.remaining = self.length;
        Ok(self.remaining)
    }

    fn step(&mut self, action: usize) -> Result<SnapShot<usize>> {
        ensure!(action == 0, "countdown only knows action 0");
        ensure!(self.remaining > 0, "countdown already finished");
        self.remaining -= 1;
        Ok(SnapShot {
            state: self.remaining,
            reward: 1.0,
            terminated: self.remaining == 0,
            truncated: false,
        })
    }

    fn env_description(&self) -> EnvironmentDescription {
        EnvironmentDescription::new(Space::Discrete(self.length + 1), Space::Discrete(1))
    }
}

#[test]
fn episode_bound_collection() -> Result<()> {
    let mut buffer = VariableSizedTrajectoryBuffer::new(Countdown::new(3), Some(0));
    let mut policy = ConstantPolicy::new(0);
    buffer.collect(&mut policy, RolloutMode::EpisodeBound { n_episodes: 2 })?;
    let rb = buffer.take_rollout_buffer();
    assert_eq!(rb.len(), 6);
    assert_eq!(rb.states, vec![3, 2, 1, 3, 2, 1, 3]);
    assert_eq!(rb.dones, vec![false, false, true, false, false, true]);
    assert_eq!(*rb.episode_returns(), vec![3.0, 3.0]);
    Ok(())
}

#[test]
fn step_bound_collection_continues_the_episode() -> Result<()> {
    let mut buffer = VariableSizedTrajectoryBuffer::new(Countdown::new(3), Some(0));
    let mut policy = ConstantPolicy::new(0);
    buffer.collect(&mut policy, RolloutMode::StepBound { n_steps: 4 })?;
    let rb = buffer.take_rollout_buffer();
    assert_eq!(rb.completed_episodes(), 1);
    assert_eq!(rb.states.last(), Some(&2));

    buffer.run_steps(&mut policy, 2)?;
    let rb = buffer.take_rollout_buffer();
    assert_eq!(rb.states, vec![2, 1, 3]);
    assert_eq!(rb.dones, vec![false, true]);
    Ok(())
}

#[test]
fn failed_step_keeps_the_pending_state() -> Result<()> {
    let mut buffer = VariableSizedTrajectoryBuffer::new(Countdown::new(3), Some(0));
    let mut good = ConstantPolicy::new(0);
    let mut bad = ConstantPolicy::new(1);
    buffer.step(&mut good)?;
    assert!(buffer.step(&mut bad).is_err());
    assert!(!buffer.step(&mut good)?);
    let rb = buffer.take_rollout_buffer();
    assert_eq!(rb.states, vec![3, 2, 1]);
    Ok(())
}

#[test]
fn pool_collects_from_every_env() -> Result<()> {
    let envs = (0..4).map(|_| Countdown::new(2)).collect();
    let mut pool = VecEnvPool::new(envs, Some(42));
    assert_eq!(pool.num_envs(), 4);
    assert_eq!(
        pool.env_description().map(|d| d.observation_size()),
        Some(3)
    );

    let rollouts = pool.collect_rollouts(
        &ConstantPolicy::new(0),
        RolloutMode::EpisodeBound { n_episodes: 3 },
    )?;
    assert_eq!(rollouts.len(), 4);
    for rb in rollouts {
        assert_eq!(*rb.episode_returns(), vec![2.0, 2.0, 2.0]);
        assert_eq!(rb.dones.last(), Some(&true));
    }
    Ok(())
}

#[test]
fn pool_surfaces_env_errors() {
    let envs = (0..2).map(|_| Countdown::new(2)).collect();
    let mut pool = VecEnvPool::new(envs, Some(1));
    // actions 0 and 1 are both possible, so some env fails within a few steps
    let result = pool.collect_rollouts(
        &RandomPolicy::new(2, Some(3)),
        RolloutMode::StepBound { n_steps: 64 },
    );
    assert!(result.is_err());
}
