#![allow(dead_code)]

use fridge_gym::environment::fridge_environment::{FridgeEnvironment, FridgeObservation};
use fridge_gym::environment::policy::Policy;
use fridge_gym::gym::prelude::Environment;

pub const MAX_STEPS: usize = 1000;

#[ctor::ctor]
fn init() { fridge_gym::util::init_logging_at(log::LevelFilter::Debug) }

/// Outcome of one played episode
pub struct Episode {
    pub observations: Vec<FridgeObservation>,
    pub rewards: Vec<f32>,
    pub done: bool,
}

impl Episode {
    pub fn total_reward(&self) -> f32 { self.rewards.iter().sum() }
}

pub fn play_episode(
    env: &mut FridgeEnvironment,
    policy: &mut dyn Policy,
    max_steps: usize,
) -> Episode {
    let (mut observation, _) = env.reset(None);
    let mut episode = Episode {
        observations: vec![observation],
        rewards: vec![],
        done: false,
    };
    for _ in 0..max_steps {
        let (next, reward, done, truncated, _) = env.step(policy.act(&observation));
        assert!(!truncated);
        episode.observations.push(next);
        episode.rewards.push(reward);
        observation = next;
        if done {
            episode.done = true;
            break;
        }
    }
    episode
}
