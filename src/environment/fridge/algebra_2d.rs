use emath::{Pos2, Vec2};

/// Axis-aligned Bounding Box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AaBB {
    pub min: Pos2,
    pub max: Pos2,
}

impl AaBB {
    pub fn from_center_size(
        center: Pos2,
        size: Vec2,
    ) -> Self {
        let half = size / 2.0;
        AaBB {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Pos2 {
        Pos2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn size(&self) -> Vec2 { self.max - self.min }

    pub fn translate(
        &self,
        value: Vec2,
    ) -> Self {
        AaBB {
            min: self.min + value,
            max: self.max + value,
        }
    }

    /// `other` lies completely within `self` (touching edges count as inside)
    pub fn contains(
        &self,
        other: &AaBB,
    ) -> bool {
        other.min.x >= self.min.x && other.min.y >= self.min.y && other.max.x <= self.max.x && other.max.y <= self.max.y
    }

    /// Lies within the rectangle `[0, len_x] x [0, len_y]`
    pub fn within(
        &self,
        len_x: f32,
        len_y: f32,
    ) -> bool {
        AaBB {
            min: Pos2::ZERO,
            max: Pos2::new(len_x, len_y),
        }
        .contains(self)
    }
}
