use std::fmt::{Display, Formatter};

use emath::Pos2;

use crate::environment::fridge::mechanics::{Direction, FridgeMechanics, GameInput, GamePhase, Transition, MODEL_LEN_X, MODEL_LEN_Y};
use crate::gym::prelude::{Action, DebugVisualizer, Environment, GymError, ModelActionType, StepResult};
use crate::gym::spaces::{BoxSpace, Discrete};

pub const REWARD_MOVE: f32 = 0.1;
pub const REWARD_MOVE_BLOCKED: f32 = 0.0;
pub const REWARD_VALID_DOOR_ACTION: f32 = 1.0;
pub const REWARD_REDUNDANT_DOOR_ACTION: f32 = -0.1;
pub const REWARD_TASK_COMPLETE: f32 = 20.0;

pub const OBSERVATION_DIMS: usize = 5;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum FridgeAction {
    Up,
    Down,
    Left,
    Right,
    OpenFridge,
    CloseFridge,
}

impl Action for FridgeAction {
    const ACTION_SPACE: ModelActionType = 6;

    fn numeric(&self) -> ModelActionType {
        use FridgeAction::*;
        match self {
            Up => 0,
            Down => 1,
            Left => 2,
            Right => 3,
            OpenFridge => 4,
            CloseFridge => 5,
        }
    }

    fn try_from_numeric(value: ModelActionType) -> Result<Self, GymError> {
        use FridgeAction::*;
        match value {
            0 => Ok(Up),
            1 => Ok(Down),
            2 => Ok(Left),
            3 => Ok(Right),
            4 => Ok(OpenFridge),
            5 => Ok(CloseFridge),
            _ => Err(GymError::InvalidAction {
                value,
                action_space: Self::ACTION_SPACE,
            }),
        }
    }
}

impl Display for FridgeAction {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// `[fridge_open, fridge_x, fridge_y, elephant_x, elephant_y]` - positions in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FridgeObservation(pub [f32; OBSERVATION_DIMS]);

impl FridgeObservation {
    fn of(mechanics: &FridgeMechanics) -> Self {
        FridgeObservation([
            if mechanics.fridge().is_open { 1.0 } else { 0.0 },
            mechanics.fridge().center.x,
            mechanics.fridge().center.y,
            mechanics.elephant().center.x,
            mechanics.elephant().center.y,
        ])
    }

    pub fn fridge_open(&self) -> bool { self.0[0] > 0.5 }

    pub fn fridge_pos(&self) -> Pos2 { Pos2::new(self.0[1], self.0[2]) }

    pub fn elephant_pos(&self) -> Pos2 { Pos2::new(self.0[3], self.0[4]) }
}

impl DebugVisualizer for FridgeObservation {
    fn one_line_info(&self) -> String {
        format!(
            "fridge {} at ({:.0},{:.0}), elephant at ({:.0},{:.0})",
            if self.fridge_open() { "open" } else { "closed" },
            self.0[1],
            self.0[2],
            self.0[3],
            self.0[4]
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FridgeInfo {
    pub game_phase: GamePhase,
    pub done: bool,
    pub elephant_inside: bool,
    pub task_complete: bool,
}

/// Put the elephant into the fridge.
///
/// Actions: `0` up, `1` down, `2` left, `3` right, `4` open fridge, `5` close fridge.
/// The episode ends (successfully) when the fridge gets closed with the elephant completely inside.
/// There is no time limit, so `truncated` is always `false`.
///
/// Rewards:
/// - move: `0.1`; move blocked by the screen edge: `0.0`
/// - open a closed / close an open fridge: `1.0`; redundant open or close: `-0.1`
/// - close the fridge with the elephant inside: `20.0`
/// - any step after the episode ended: `0.0` (no-op until reset)
#[derive(Clone, Debug, Default)]
pub struct FridgeEnvironment {
    mechanics: FridgeMechanics,
}

impl FridgeEnvironment {
    pub fn new() -> Self {
        Self {
            mechanics: FridgeMechanics::new(),
        }
    }

    pub fn mechanics(&self) -> &FridgeMechanics { &self.mechanics }

    pub fn observation_space() -> BoxSpace<OBSERVATION_DIMS> {
        BoxSpace::new(
            [0.0; OBSERVATION_DIMS],
            [1.0, MODEL_LEN_X, MODEL_LEN_Y, MODEL_LEN_X, MODEL_LEN_Y],
        )
    }

    pub fn action_space() -> Discrete { Discrete(FridgeAction::ACTION_SPACE) }

    fn map_model_action_to_game_input(action: FridgeAction) -> GameInput {
        match action {
            FridgeAction::Up => GameInput::Move(Direction::Up),
            FridgeAction::Down => GameInput::Move(Direction::Down),
            FridgeAction::Left => GameInput::Move(Direction::Left),
            FridgeAction::Right => GameInput::Move(Direction::Right),
            FridgeAction::OpenFridge => GameInput::OpenFridge,
            FridgeAction::CloseFridge => GameInput::CloseFridge,
        }
    }

    fn reward(transition: Transition) -> f32 {
        match transition {
            Transition::Moved => REWARD_MOVE,
            Transition::MoveBlocked => REWARD_MOVE_BLOCKED,
            Transition::FridgeOpened | Transition::FridgeClosed => REWARD_VALID_DOOR_ACTION,
            Transition::FridgeAlreadyOpen | Transition::FridgeAlreadyClosed => REWARD_REDUNDANT_DOOR_ACTION,
            Transition::ElephantLockedIn => REWARD_TASK_COMPLETE,
            Transition::EpisodeOver => 0.0,
        }
    }
}

impl Environment for FridgeEnvironment {
    type S = FridgeObservation;
    type A = FridgeAction;
    type I = FridgeInfo;

    fn reset(
        &mut self,
        _seed: Option<u64>,
    ) -> (Self::S, Self::I) {
        self.mechanics.reset();
        log::debug!("reset: {}", self.observation().one_line_info());
        (self.observation(), self.info())
    }

    fn observation(&self) -> Self::S { FridgeObservation::of(&self.mechanics) }

    fn info(&self) -> Self::I {
        FridgeInfo {
            game_phase: self.mechanics.game_phase(),
            done: self.mechanics.done(),
            elephant_inside: self.mechanics.elephant_inside(),
            task_complete: self.mechanics.task_complete(),
        }
    }

    fn step(
        &mut self,
        action: Self::A,
    ) -> StepResult<Self::S, Self::I> {
        let transition = self.mechanics.apply(Self::map_model_action_to_game_input(action));
        let reward = Self::reward(transition);
        (self.observation(), reward, self.mechanics.done(), false, self.info())
    }

    fn episode_reward_goal_mean(&self) -> f32 {
        // open + ten steps + close, a bit lower because of float calc / compare blur effects
        REWARD_VALID_DOOR_ACTION + 10.0 * REWARD_MOVE + REWARD_TASK_COMPLETE - 0.01
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const INITIAL_OBSERVATION: [f32; 5] = [0.0, 300.0, 300.0, 150.0, 300.0];

    fn assert_eq_roughly(
        what: &str,
        a: f32,
        b: f32,
    ) {
        assert!((a - b).abs() <= 0.0001, "'{what}' difference between {a} and {b}");
    }

    #[rstest]
    #[case(0, FridgeAction::Up)]
    #[case(1, FridgeAction::Down)]
    #[case(2, FridgeAction::Left)]
    #[case(3, FridgeAction::Right)]
    #[case(4, FridgeAction::OpenFridge)]
    #[case(5, FridgeAction::CloseFridge)]
    fn test_action_numeric_mapping(
        #[case] value: ModelActionType,
        #[case] action: FridgeAction,
    ) {
        assert_eq!(FridgeAction::try_from_numeric(value).unwrap(), action);
        assert_eq!(action.numeric(), value);
        assert!(FridgeEnvironment::action_space().contains(value));
    }

    #[rstest]
    #[case(6)]
    #[case(42)]
    #[case(255)]
    fn test_invalid_action(#[case] value: ModelActionType) {
        let mut env = FridgeEnvironment::new();
        let before = env.observation();
        match env.step_numeric(value) {
            Err(GymError::InvalidAction { value: v, action_space }) => {
                assert_eq!(v, value);
                assert_eq!(action_space, 6);
            }
            other => panic!("expected InvalidAction, got {:?}", other.map(|(o, r, d, _, _)| (o, r, d))),
        }
        assert_eq!(env.observation(), before);
    }

    #[test]
    fn test_reset() {
        let mut env = FridgeEnvironment::new();
        let (obs, info) = env.reset(Some(7));
        assert_eq!(obs.0, INITIAL_OBSERVATION);
        assert_eq!(info, FridgeInfo {
            game_phase: GamePhase::OpenFridge,
            done: false,
            elephant_inside: false,
            task_complete: false,
        });
        assert_eq!(env.reset(None).0, obs);
        assert!(FridgeEnvironment::observation_space().contains(&obs.0));
    }

    #[test]
    fn test_open_fridge() {
        let mut env = FridgeEnvironment::new();
        env.reset(None);
        let (obs, reward, done, truncated, info) = env.step(FridgeAction::OpenFridge);
        assert_eq!(reward, 1.0);
        assert_eq!(obs.0[0], 1.0);
        assert!(!done);
        assert!(!truncated);
        assert_eq!(info.game_phase, GamePhase::PutElephantIn);

        // repeated open
        let (obs2, reward, done, _, info2) = env.step(FridgeAction::OpenFridge);
        assert_eq!(reward, -0.1);
        assert_eq!(obs2, obs);
        assert_eq!(info2, info);
        assert!(!done);
    }

    #[test]
    fn test_close_with_elephant_outside() {
        let mut env = FridgeEnvironment::new();
        let (_, reward, _, _, _) = env.step(FridgeAction::CloseFridge);
        assert_eq!(reward, -0.1);

        env.step(FridgeAction::OpenFridge);
        let (obs, reward, done, _, info) = env.step(FridgeAction::CloseFridge);
        assert_eq!(reward, 1.0);
        assert!(!done);
        assert!(!obs.fridge_open());
        assert!(!info.task_complete);
        assert_eq!(info.game_phase, GamePhase::OpenFridge);
    }

    #[test]
    fn test_move_rewards() {
        let mut env = FridgeEnvironment::new();
        let (obs, reward, ..) = env.step(FridgeAction::Up);
        assert_eq!(reward, 0.1);
        assert_eq!(obs.elephant_pos(), Pos2::new(150.0, 290.0));

        let mut last_reward = reward;
        for _ in 0..7 {
            (_, last_reward, ..) = env.step(FridgeAction::Down);
        }
        assert_eq!(last_reward, 0.0);
        assert_eq!(env.observation().elephant_pos(), Pos2::new(150.0, 350.0));
    }

    #[test]
    fn test_complete_episode_and_reset() {
        let mut env = FridgeEnvironment::new();
        let mut episode_reward = 0.0;
        let (_, reward, ..) = env.step(FridgeAction::OpenFridge);
        episode_reward += reward;
        for _ in 0..10 {
            let (_, reward, done, _, _) = env.step(FridgeAction::Right);
            episode_reward += reward;
            assert!(!done);
        }
        assert!(env.info().elephant_inside);
        assert_eq!(env.info().game_phase, GamePhase::CloseFridge);

        let (obs, reward, done, truncated, info) = env.step(FridgeAction::CloseFridge);
        episode_reward += reward;
        assert_eq!(reward, 20.0);
        assert!(done);
        assert!(!truncated);
        assert!(info.done);
        assert!(info.task_complete);
        assert_eq!(info.game_phase, GamePhase::Complete);
        assert!(episode_reward >= env.episode_reward_goal_mean());
        assert_eq_roughly("episode reward", episode_reward, 22.0);

        // frozen after terminal step
        for value in 0..FridgeAction::ACTION_SPACE {
            let (obs2, reward, done, _, info2) = env.step_numeric(value).unwrap();
            assert_eq!(obs2, obs);
            assert_eq!(reward, 0.0);
            assert!(done);
            assert_eq!(info2, info);
        }

        let (obs, info) = env.reset(None);
        assert_eq!(obs.0, INITIAL_OBSERVATION);
        assert!(!info.done);
        assert!(!info.task_complete);
    }

    #[test]
    fn test_reward_is_function_of_state_and_action() {
        let mut env = FridgeEnvironment::new();
        env.step(FridgeAction::OpenFridge);
        env.step(FridgeAction::Left);
        for value in 0..FridgeAction::ACTION_SPACE {
            let mut a = env.clone();
            let mut b = env.clone();
            let (obs_a, reward_a, done_a, _, _) = a.step_numeric(value).unwrap();
            let (obs_b, reward_b, done_b, _, _) = b.step_numeric(value).unwrap();
            assert_eq!(reward_a, reward_b);
            assert_eq!(obs_a, obs_b);
            assert_eq!(done_a, done_b);
        }
    }

    #[test]
    fn test_one_line_info() {
        let env = FridgeEnvironment::new();
        assert_eq!(
            env.observation().one_line_info(),
            "fridge closed at (300,300), elephant at (150,300)"
        );
    }
}
