use crate::rng::seeded_rng;
use anyhow::Result;
use rand::{Rng, rngs::StdRng};
use std::{fmt::Debug, marker::PhantomData};

/// Picks an action for an observation. `get_action` takes `&mut self` so that stochastic policies
/// can own their random source.
pub trait Policy: Send + Debug {
    type Obs;
    type Action;

    fn get_action(&mut self, observation: Self::Obs) -> Result<Self::Action>;
}

/// Ignores the observation and always plays the same action.
#[derive(Debug, Clone)]
pub struct ConstantPolicy<O, A> {
    action: A,
    obs: PhantomData<fn(O)>,
}

impl<O, A> ConstantPolicy<O, A> {
    pub fn new(action: A) -> Self {
        Self {
            action,
            obs: PhantomData,
        }
    }
}

impl<O: Debug, A: Clone + Send + Debug> Policy for ConstantPolicy<O, A> {
    type Obs = O;
    type Action = A;

    fn get_action(&mut self, _observation: O) -> Result<A> {
        Ok(self.action.clone())
    }
}

/// Uniform over `0..n_actions`.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    n_actions: usize,
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(n_actions: usize, seed: Option<u64>) -> Self {
        Self {
            n_actions,
            rng: seeded_rng(seed),
        }
    }

    pub fn n_actions(&self) -> usize {
        self.n_actions
    }
}

impl Policy for RandomPolicy {
    type Obs = usize;
    type Action = usize;

    fn get_action(&mut self, _observation: usize) -> Result<usize> {
        anyhow::ensure!(self.n_actions > 0, "random policy needs at least one action");
        Ok(self.rng.random_range(0..self.n_actions))
    }
}

#[cfg(test)]
mod test {
    use super::{ConstantPolicy, Policy, RandomPolicy};
    use anyhow::Result;

    #[test]
    fn constant_policy_repeats_itself() -> Result<()> {
        let mut policy = ConstantPolicy::<usize, usize>::new(1);
        for obs in 0..10 {
            assert_eq!(policy.get_action(obs)?, 1);
        }
        Ok(())
    }

    #[test]
    fn random_policy_stays_in_range_and_is_seedable() -> Result<()> {
        let mut a = RandomPolicy::new(2, Some(7));
        let mut b = RandomPolicy::new(2, Some(7));
        for _ in 0..100 {
            let action = a.get_action(0)?;
            assert!(action < 2);
            assert_eq!(action, b.get_action(0)?);
        }
        Ok(())
    }

    #[test]
    fn random_policy_without_actions_fails() {
        let mut policy = RandomPolicy::new(0, Some(0));
        assert!(policy.get_action(0).is_err());
    }
}
