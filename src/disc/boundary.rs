pub mod scalar1d;

/// Largest physical density; free-flow inflow on the left is clamped to it.
pub const DENSITY_MAX: f64 = 1.0;
/// Smallest physical density; free-flow outflow on the right is clamped to it.
pub const DENSITY_MIN: f64 = 0.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundaryPosition {
    Left,
    Right,
}

/// Policy for one end of the domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundaryValue {
    Fixed(f64),
    /// Zero-gradient extrapolation from the adjacent cell.
    FreeFlow,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryCondition {
    pub left: BoundaryValue,
    pub right: BoundaryValue,
}
impl BoundaryCondition {
    pub fn new(left: BoundaryValue, right: BoundaryValue) -> Self {
        Self { left, right }
    }
    pub fn free_flow() -> Self {
        Self::new(BoundaryValue::FreeFlow, BoundaryValue::FreeFlow)
    }
    pub fn fixed(left: f64, right: f64) -> Self {
        Self::new(BoundaryValue::Fixed(left), BoundaryValue::Fixed(right))
    }
    pub fn side(&self, position: BoundaryPosition) -> BoundaryValue {
        match position {
            BoundaryPosition::Left => self.left,
            BoundaryPosition::Right => self.right,
        }
    }
}
