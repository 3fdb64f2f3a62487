use derive_more::Deref;

/// Transitions collected from a single environment. When closed with `set_last_state`, `states`
/// holds one more entry than `actions`.
#[derive(Debug, Clone)]
pub struct RolloutBuffer<O: Clone, A: Clone> {
    pub states: Vec<O>,
    pub actions: Vec<A>,
    pub rewards: Vec<f32>,
    pub dones: Vec<bool>,
}

impl<O: Clone, A: Clone> Default for RolloutBuffer<O, A> {
    fn default() -> Self {
        Self {
            states: vec![],
            actions: vec![],
            rewards: vec![],
            dones: vec![],
        }
    }
}

impl<O: Clone, A: Clone> RolloutBuffer<O, A> {
    pub fn push_step(&mut self, state: O, action: A, reward: f32, done: bool) {
        self.states.push(state);
        self.actions.push(action);
        self.rewards.push(reward);
        self.dones.push(done);
    }

    pub fn set_last_state(&mut self, state: O) {
        self.states.push(state);
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn sample_point(&self, index: usize) -> (&O, &A) {
        (&self.states[index], &self.actions[index])
    }

    pub fn completed_episodes(&self) -> usize {
        self.dones.iter().filter(|done| **done).count()
    }

    /// Sums of rewards per finished episode. A trailing unfinished episode is left out.
    pub fn episode_returns(&self) -> EpisodeReturns {
        let mut returns = vec![];
        let mut current = 0f32;
        for (reward, done) in self.rewards.iter().zip(self.dones.iter()) {
            current += *reward;
            if *done {
                returns.push(current);
                current = 0.;
            }
        }
        EpisodeReturns(returns)
    }
}

#[derive(Deref, Debug, Clone, PartialEq)]
pub struct EpisodeReturns(pub Vec<f32>);

impl EpisodeReturns {
    pub fn mean(&self) -> Option<f32> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.iter().sum::<f32>() / self.0.len() as f32)
        }
    }
}
