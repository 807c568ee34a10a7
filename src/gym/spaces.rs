use crate::gym::prelude::ModelActionType;

/// Continuous box of `N` dimensions with per-component inclusive bounds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxSpace<const N: usize> {
    pub low: [f32; N],
    pub high: [f32; N],
}

impl<const N: usize> BoxSpace<N> {
    pub fn new(
        low: [f32; N],
        high: [f32; N],
    ) -> Self {
        debug_assert!(low.iter().zip(high.iter()).all(|(l, h)| l <= h));
        Self { low, high }
    }

    pub fn dims(&self) -> usize { N }

    pub fn contains(
        &self,
        value: &[f32; N],
    ) -> bool {
        value
            .iter()
            .zip(self.low.iter().zip(self.high.iter()))
            .all(|(v, (l, h))| v >= l && v <= h)
    }
}

/// Discrete space `{0, 1, .., n-1}`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Discrete(pub ModelActionType);

impl Discrete {
    pub fn n(&self) -> ModelActionType { self.0 }

    pub fn contains(
        &self,
        value: ModelActionType,
    ) -> bool {
        value < self.0
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case([0.0, 0.0], true)]
    #[case([1.0, 10.0], true)]
    #[case([0.5, 10.1], false)]
    #[case([-0.1, 5.0], false)]
    fn test_box_space_contains(
        #[case] value: [f32; 2],
        #[case] expected: bool,
    ) {
        let space = BoxSpace::new([0.0, 0.0], [1.0, 10.0]);
        assert_eq!(space.contains(&value), expected);
        assert_eq!(space.dims(), 2);
    }

    #[test]
    fn test_discrete_contains() {
        let space = Discrete(6);
        assert!(space.contains(0));
        assert!(space.contains(5));
        assert!(!space.contains(6));
        assert_eq!(space.n(), 6);
    }
}
