use anyhow::Result;
use segwalk_core::{
    env::{Env, SnapShot},
    policies::Policy,
};
use segwalk_env::{Segment, SegmentConfig};

/// Plays `ep_count` full episodes on a fresh walk and returns the rewards of each episode.
pub fn run_segment_episodes(
    config: &SegmentConfig,
    ep_count: usize,
    policy: &mut impl Policy<Obs = usize, Action = usize>,
) -> Result<Vec<Vec<f32>>> {
    let mut env: Segment = config.build();
    let mut episodes = vec![];
    for _ in 0..ep_count {
        let seed = rand::random();
        let mut state = Env::reset(&mut env, seed)?;
        let mut rewards = vec![];
        loop {
            let action = policy.get_action(state)?;
            let SnapShot {
                state: next_state,
                reward,
                terminated,
                truncated,
            } = Env::step(&mut env, action)?;
            rewards.push(reward);
            if terminated || truncated {
                break;
            }
            state = next_state;
        }
        episodes.push(rewards);
    }
    Ok(episodes)
}
