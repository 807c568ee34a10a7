use emath::{Pos2, Vec2};

use super::algebra_2d::AaBB;
use super::elements::{Elephant, Fridge};

/// TOP / LEFT corner is 0/0
pub const MODEL_LEN_X: f32 = 600.0;
pub const MODEL_LEN_Y: f32 = 400.0;

pub const FRIDGE_LEN_X: f32 = 200.0;
pub const FRIDGE_LEN_Y: f32 = 180.0;
pub const ELEPHANT_LEN_X: f32 = 100.0;
pub const ELEPHANT_LEN_Y: f32 = 100.0;

/// distance of both initial center points from the floor (bottom edge)
const INITIAL_POS_FLOOR_OFFSET_Y: f32 = 100.0;
const FRIDGE_INITIAL_POS_X: f32 = MODEL_LEN_X / 2.0;
const ELEPHANT_INITIAL_POS_X: f32 = 150.0;

/// elephant move per step
pub const STEP_DELTA: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -STEP_DELTA),
            Direction::Down => Vec2::new(0.0, STEP_DELTA),
            Direction::Left => Vec2::new(-STEP_DELTA, 0.0),
            Direction::Right => Vec2::new(STEP_DELTA, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameInput {
    Move(Direction),
    OpenFridge,
    CloseFridge,
}

/// What a [GameInput] did to the world
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    Moved,
    /// move rejected: the elephant would have left the screen
    MoveBlocked,
    FridgeOpened,
    FridgeAlreadyOpen,
    /// closed with the elephant still outside
    FridgeClosed,
    /// closed with the elephant inside - task complete
    ElephantLockedIn,
    FridgeAlreadyClosed,
    /// input arrived after the episode ended; nothing changed
    EpisodeOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EpisodeStatus {
    Running,
    /// terminal: elephant locked in the fridge
    Complete,
}

/// Task progress as a player would describe it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GamePhase {
    OpenFridge,
    PutElephantIn,
    CloseFridge,
    Complete,
}

impl GamePhase {
    pub fn prompt(&self) -> &'static str {
        match self {
            GamePhase::OpenFridge => "Step 1: press O to open the fridge",
            GamePhase::PutElephantIn => "Step 2: walk the elephant into the fridge (arrow keys)",
            GamePhase::CloseFridge => "Step 3: press C to close the fridge",
            GamePhase::Complete => "Done! Press R to play again",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FridgeMechanics {
    fridge: Fridge,
    elephant: Elephant,
    elephant_inside: bool,
    status: EpisodeStatus,
}

impl Default for FridgeMechanics {
    fn default() -> Self { Self::new() }
}

impl FridgeMechanics {
    pub fn new() -> Self {
        Self {
            fridge: Fridge::new(Self::fridge_initial_pos(), Vec2::new(FRIDGE_LEN_X, FRIDGE_LEN_Y)),
            elephant: Elephant::new(Self::elephant_initial_pos(), Vec2::new(ELEPHANT_LEN_X, ELEPHANT_LEN_Y)),
            elephant_inside: false,
            status: EpisodeStatus::Running,
        }
    }

    pub fn fridge_initial_pos() -> Pos2 { Pos2::new(FRIDGE_INITIAL_POS_X, MODEL_LEN_Y - INITIAL_POS_FLOOR_OFFSET_Y) }

    pub fn elephant_initial_pos() -> Pos2 { Pos2::new(ELEPHANT_INITIAL_POS_X, MODEL_LEN_Y - INITIAL_POS_FLOOR_OFFSET_Y) }

    pub fn reset(&mut self) {
        self.fridge.is_open = false;
        self.fridge.update_pos(Self::fridge_initial_pos());
        self.elephant.update_pos(Self::elephant_initial_pos());
        self.status = EpisodeStatus::Running;
        self.update_elephant_inside();
    }

    pub fn fridge(&self) -> &Fridge { &self.fridge }

    pub fn elephant(&self) -> &Elephant { &self.elephant }

    pub fn elephant_inside(&self) -> bool { self.elephant_inside }

    pub fn status(&self) -> EpisodeStatus { self.status }

    pub fn done(&self) -> bool { self.status == EpisodeStatus::Complete }

    pub fn task_complete(&self) -> bool { self.status == EpisodeStatus::Complete }

    pub fn game_phase(&self) -> GamePhase {
        match (self.status, self.fridge.is_open, self.elephant_inside) {
            (EpisodeStatus::Complete, _, _) => GamePhase::Complete,
            (EpisodeStatus::Running, false, _) => GamePhase::OpenFridge,
            (EpisodeStatus::Running, true, false) => GamePhase::PutElephantIn,
            (EpisodeStatus::Running, true, true) => GamePhase::CloseFridge,
        }
    }

    /// Applies one input. After the episode ended, inputs are ignored until [Self::reset].
    pub fn apply(
        &mut self,
        input: GameInput,
    ) -> Transition {
        if self.done() {
            return Transition::EpisodeOver;
        }
        let transition = match input {
            GameInput::Move(direction) => self.move_elephant(direction),
            GameInput::OpenFridge => self.open_fridge(),
            GameInput::CloseFridge => self.close_fridge(),
        };
        self.update_elephant_inside();
        log::debug!("{:?} -> {:?} (phase: {:?})", input, transition, self.game_phase());
        transition
    }

    fn move_elephant(
        &mut self,
        direction: Direction,
    ) -> Transition {
        let candidate = self.elephant.shape().translate(direction.delta());
        if candidate.within(MODEL_LEN_X, MODEL_LEN_Y) {
            self.elephant.update_pos(candidate.center());
            Transition::Moved
        } else {
            Transition::MoveBlocked
        }
    }

    fn open_fridge(&mut self) -> Transition {
        if self.fridge.is_open {
            Transition::FridgeAlreadyOpen
        } else {
            self.fridge.is_open = true;
            Transition::FridgeOpened
        }
    }

    fn close_fridge(&mut self) -> Transition {
        if !self.fridge.is_open {
            return Transition::FridgeAlreadyClosed;
        }
        self.fridge.is_open = false;
        if self.elephant_inside {
            self.status = EpisodeStatus::Complete;
            log::info!("elephant is in the fridge - task complete");
            Transition::ElephantLockedIn
        } else {
            Transition::FridgeClosed
        }
    }

    fn update_elephant_inside(&mut self) {
        self.elephant_inside = self.fridge.is_open && self.fridge.shape().contains(&self.elephant.shape());
    }

    /// Places the elephant anywhere on screen, keeping the derived state in sync
    #[cfg(test)]
    pub(crate) fn place_elephant(
        &mut self,
        center: Pos2,
    ) {
        self.elephant.update_pos(center);
        self.update_elephant_inside();
    }
}

pub trait Assert {
    fn assert(&self);
}

impl Assert for Elephant {
    fn assert(&self) {
        assert!(self.shape().within(MODEL_LEN_X, MODEL_LEN_Y));
    }
}

impl Assert for FridgeMechanics {
    fn assert(&self) {
        self.elephant.assert();
        assert_eq!(
            self.elephant_inside,
            self.fridge.is_open && self.fridge.shape().contains(&self.elephant.shape())
        );
    }
}
