use ndarray::{Array1, ArrayView1, s};
use tracing::trace;

use super::{BoundaryCondition, BoundaryPosition, BoundaryValue, DENSITY_MAX, DENSITY_MIN};
use crate::error::{ConlawError, Result};

/// Ghost value for one side of the Godunov scheme. Free flow copies the
/// adjacent cell, clamped to at most `DENSITY_MAX` on the left and at least
/// `DENSITY_MIN` on the right.
pub fn ghost_value(value: BoundaryValue, position: BoundaryPosition, adjacent: f64) -> f64 {
    match (value, position) {
        (BoundaryValue::Fixed(v), _) => v,
        (BoundaryValue::FreeFlow, BoundaryPosition::Left) => DENSITY_MAX.min(adjacent),
        (BoundaryValue::FreeFlow, BoundaryPosition::Right) => DENSITY_MIN.max(adjacent),
    }
}

/// Interior state padded with one ghost cell on each side.
pub fn apply_boundary(interior: ArrayView1<f64>, boundary: &BoundaryCondition) -> Result<Array1<f64>> {
    let n = interior.len();
    if n == 0 {
        return Err(ConlawError::shape("interior state", "at least 1", 0));
    }
    let mut augmented = Array1::<f64>::zeros(n + 2);
    augmented.slice_mut(s![1..=n]).assign(&interior);
    augmented[0] = ghost_value(boundary.left, BoundaryPosition::Left, interior[0]);
    augmented[n + 1] = ghost_value(boundary.right, BoundaryPosition::Right, interior[n - 1]);
    trace!(left = augmented[0], right = augmented[n + 1], "ghost cells");
    Ok(augmented)
}
