use ndarray::{Array1, ArrayView1, Zip, s};
use tracing::debug;

use super::{
    boundary::{BoundaryCondition, BoundaryValue},
    flux::Flux,
};
use crate::{
    error::{ConlawError, Result},
    solver::check_ratio,
};

/// `u` carries one ghost cell on each side and at least two interior cells.
/// The result has the same layout, ghosts refilled; free flow extrapolates
/// linearly.
pub fn c_step<F: Flux + ?Sized>(
    u: ArrayView1<f64>,
    boundary: &BoundaryCondition,
    flux: &F,
    dt_dx: f64,
) -> Result<Array1<f64>> {
    let len = u.len();
    if len < 4 {
        return Err(ConlawError::shape("lax-friedrichs state", "at least 4", len));
    }
    check_ratio(dt_dx)?;
    let flow = flux.flux_array(u);
    let mut unew = Array1::<f64>::zeros(len);
    Zip::from(unew.slice_mut(s![1..-1]))
        .and(u.slice(s![..-2]))
        .and(u.slice(s![2..]))
        .and(flow.slice(s![..-2]))
        .and(flow.slice(s![2..]))
        .for_each(|un, &ul, &ur, &fl, &fr| *un = 0.5 * (ul + ur + dt_dx * (fl - fr)));

    unew[0] = match boundary.left {
        BoundaryValue::Fixed(v) => v,
        BoundaryValue::FreeFlow => 2.0 * unew[1] - unew[2],
    };
    unew[len - 1] = match boundary.right {
        BoundaryValue::Fixed(v) => v,
        BoundaryValue::FreeFlow => 2.0 * unew[len - 2] - unew[len - 3],
    };
    debug!(cells = len - 2, dt_dx, "lax-friedrichs step");
    Ok(unew)
}
