use emath::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::environment::fridge::algebra_2d::AaBB;
use crate::environment::fridge::mechanics::{ELEPHANT_LEN_X, ELEPHANT_LEN_Y, FRIDGE_LEN_X, FRIDGE_LEN_Y, STEP_DELTA};
use crate::environment::fridge_environment::{FridgeAction, FridgeObservation};
use crate::gym::prelude::Action;

/// Picks the next action from an observation
pub trait Policy {
    fn act(
        &mut self,
        observation: &FridgeObservation,
    ) -> FridgeAction;
}

/// Solves the task: open the fridge, walk the elephant towards the fridge center, close the fridge.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptedPolicy;

impl Policy for ScriptedPolicy {
    fn act(
        &mut self,
        observation: &FridgeObservation,
    ) -> FridgeAction {
        if !observation.fridge_open() {
            return FridgeAction::OpenFridge;
        }

        let fridge = AaBB::from_center_size(observation.fridge_pos(), Vec2::new(FRIDGE_LEN_X, FRIDGE_LEN_Y));
        let elephant = AaBB::from_center_size(observation.elephant_pos(), Vec2::new(ELEPHANT_LEN_X, ELEPHANT_LEN_Y));
        if fridge.contains(&elephant) {
            return FridgeAction::CloseFridge;
        }

        let way = observation.fridge_pos() - observation.elephant_pos();
        if way.x.abs() >= STEP_DELTA && way.x.abs() >= way.y.abs() {
            if way.x > 0.0 { FridgeAction::Right } else { FridgeAction::Left }
        } else if way.y > 0.0 {
            FridgeAction::Down
        } else {
            FridgeAction::Up
        }
    }
}

/// Uniformly random actions from a seeded generator
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn act(
        &mut self,
        _observation: &FridgeObservation,
    ) -> FridgeAction {
        let value = self.rng.gen_range(0..FridgeAction::ACTION_SPACE);
        FridgeAction::try_from_numeric(value).expect("value in action space")
    }
}
