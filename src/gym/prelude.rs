use std::fmt::Display;
use std::hash::Hash;
use std::path::PathBuf;

/// Data type we use to encode an `Action` as a plain number (as an agent or a model sees it).
pub type ModelActionType = u8;

/// Result of one environment step: `(observation, reward, done, truncated, info)`
pub type StepResult<S, I> = (S, f32, bool, bool, I);

pub trait Action: Display + Sized + Clone + Copy + Hash + PartialEq + Eq {
    /// Number of possible actions
    const ACTION_SPACE: ModelActionType;
    /// Identifying the Action as a unique value in range (0..Self::ACTION_SPACE)
    fn numeric(&self) -> ModelActionType;
    fn try_from_numeric(value: ModelActionType) -> Result<Self, GymError>;
}

/// Learning environment, modeling the world of a learning agent
pub trait Environment {
    /// Observation as seen by the agent
    type S: Clone + DebugVisualizer;
    type A: Action;
    /// Additional (non-observation) information about the current state
    type I: Clone;

    /// Resets the environment to its defined starting point.
    ///
    /// `seed` is accepted for interface compatibility; environments with a fixed layout ignore it.
    fn reset(
        &mut self,
        seed: Option<u64>,
    ) -> (Self::S, Self::I);

    /// Current observation
    fn observation(&self) -> Self::S;

    fn info(&self) -> Self::I;

    /// Performs one action-step.
    ///
    /// Applies the given `action` to the environment and returns:
    ///   - next observation
    ///   - immediate reward earned during performing that step
    ///   - done flag (episode reached a terminal state)
    ///   - truncated flag (episode cut off by a time limit)
    ///   - info
    ///
    fn step(
        &mut self,
        action: Self::A,
    ) -> StepResult<Self::S, Self::I>;

    /// Convenience wrapper around [Self::step] for callers speaking raw action codes.
    /// Fails with [GymError::InvalidAction] for codes outside the action space.
    fn step_numeric(
        &mut self,
        value: ModelActionType,
    ) -> Result<StepResult<Self::S, Self::I>, GymError> {
        let action = Self::A::try_from_numeric(value)?;
        Ok(self.step(action))
    }

    /// Reward per episode considering the task solved
    /// (expected to be a constant - not a moving target)
    fn episode_reward_goal_mean(&self) -> f32;
}

pub trait DebugVisualizer {
    fn one_line_info(&self) -> String;
}

#[derive(thiserror::Error, Debug)]
pub enum GymError {
    #[error("action value {value} out of range 0..{action_space}")]
    InvalidAction {
        value: ModelActionType,
        action_space: ModelActionType,
    },
    #[error("asset '{}' could not be loaded", path.display())]
    AssetMissing {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
