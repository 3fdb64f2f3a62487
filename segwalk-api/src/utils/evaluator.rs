use anyhow::Result;
use segwalk_core::{
    env::Env, policies::Policy, sampler::trajectory_buffers::VariableSizedTrajectoryBuffer,
    utils::rollout_buffer::EpisodeReturns,
};
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub returns: EpisodeReturns,
    pub episode_lengths: Vec<usize>,
    pub mean_return: f32,
}

/// Plays full episodes with a policy on a dedicated environment. `maybe_evaluate` only evaluates
/// once `eval_freq` training steps have been reported since the last evaluation.
pub struct Evaluator<E: Env> {
    pub trajectory_buffer: VariableSizedTrajectoryBuffer<E>,
    pub eval_episodes: usize,
    pub eval_freq: usize,
    pub eval_step: usize,
    pub evaluation_results: Vec<Vec<f32>>,
}

impl<E: Env> Evaluator<E> {
    pub fn new(env: E, eval_episodes: usize, eval_freq: usize, seed: Option<u64>) -> Self {
        Self {
            trajectory_buffer: VariableSizedTrajectoryBuffer::new(env, seed),
            eval_episodes,
            eval_freq,
            eval_step: 0,
            evaluation_results: vec![],
        }
    }

    pub fn evaluate<P>(&mut self, policy: &mut P) -> Result<Evaluation>
    where
        P: Policy<Obs = E::Obs, Action = E::Action> + ?Sized,
    {
        // drop whatever a previous, interrupted run left behind
        self.trajectory_buffer.take_rollout_buffer();
        self.trajectory_buffer.run_episodes(policy, self.eval_episodes)?;
        let rb = self.trajectory_buffer.take_rollout_buffer();
        let returns = rb.episode_returns();
        let mut episode_lengths = vec![];
        let mut current = 0;
        for done in rb.dones.iter() {
            current += 1;
            if *done {
                episode_lengths.push(current);
                current = 0;
            }
        }
        let mean_return = returns.mean().unwrap_or(0.);
        info!(
            episodes = self.eval_episodes,
            mean_return, "evaluation finished"
        );
        self.evaluation_results.push(returns.0.clone());
        Ok(Evaluation {
            returns,
            episode_lengths,
            mean_return,
        })
    }

    pub fn maybe_evaluate<P>(&mut self, policy: &mut P, n_steps: usize) -> Result<Option<Evaluation>>
    where
        P: Policy<Obs = E::Obs, Action = E::Action> + ?Sized,
    {
        if self.eval_step < self.eval_freq {
            self.eval_step += n_steps;
            Ok(None)
        } else {
            self.eval_step = 0;
            self.evaluate(policy).map(Some)
        }
    }
}

#[cfg(test)]
mod test {
    use super::Evaluator;
    use anyhow::Result;
    use segwalk_core::policies::ConstantPolicy;
    use segwalk_env::SegmentConfig;

    #[test]
    fn deterministic_walk_evaluation() -> Result<()> {
        // with full bias, always asking right walks 3 -> 4 -> 5 -> 6
        let env = SegmentConfig::centered(3, 1.0).build_seeded(0);
        let mut evaluator = Evaluator::new(env, 4, 0, Some(0));
        let evaluation = evaluator.evaluate(&mut ConstantPolicy::new(1))?;
        assert_eq!(evaluation.episode_lengths, vec![3; 4]);
        assert!((evaluation.mean_return - 0.9).abs() < 1e-6);
        assert_eq!(evaluator.evaluation_results.len(), 1);
        Ok(())
    }

    #[test]
    fn evaluation_waits_for_enough_steps() -> Result<()> {
        let env = SegmentConfig::centered(2, 1.0).build_seeded(0);
        let mut evaluator = Evaluator::new(env, 1, 10, Some(0));
        let mut policy = ConstantPolicy::new(0);
        assert!(evaluator.maybe_evaluate(&mut policy, 6)?.is_none());
        assert!(evaluator.maybe_evaluate(&mut policy, 6)?.is_none());
        let evaluation = evaluator.maybe_evaluate(&mut policy, 6)?;
        let mean_return = evaluation.map(|e| e.mean_return).unwrap();
        assert!((mean_return + 1.05).abs() < 1e-6);
        assert_eq!(evaluator.eval_step, 0);
        Ok(())
    }
}
