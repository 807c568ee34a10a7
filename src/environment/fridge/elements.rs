use emath::{Pos2, Vec2};

use super::algebra_2d::AaBB;

/// The fridge. Position is the center point.
#[derive(Clone, Debug, PartialEq)]
pub struct Fridge {
    pub center: Pos2,
    pub size: Vec2,
    pub is_open: bool,
}

impl Fridge {
    pub fn new(
        center: Pos2,
        size: Vec2,
    ) -> Self {
        Self {
            center,
            size,
            is_open: false,
        }
    }

    pub fn update_pos(
        &mut self,
        center: Pos2,
    ) {
        self.center = center;
    }

    pub fn shape(&self) -> AaBB { AaBB::from_center_size(self.center, self.size) }
}

/// The elephant. Position is the center point.
#[derive(Clone, Debug, PartialEq)]
pub struct Elephant {
    pub center: Pos2,
    pub size: Vec2,
}

impl Elephant {
    pub fn new(
        center: Pos2,
        size: Vec2,
    ) -> Self {
        Self { center, size }
    }

    pub fn update_pos(
        &mut self,
        center: Pos2,
    ) {
        self.center = center;
    }

    pub fn shape(&self) -> AaBB { AaBB::from_center_size(self.center, self.size) }
}
