use ndarray::ArrayView1;
use ndarray_stats::{QuantileExt, errors::MinMaxError};
use serde::Deserialize;
use tracing::warn;

use crate::{
    disc::flux::Flux,
    error::{ConlawError, Result},
};

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SolverParameters {
    pub cfl: f64,
    pub final_time: f64,
    #[serde(default = "default_final_step")]
    pub final_step: usize,
    pub cell_num: usize,
    pub left_coord: f64,
    pub right_coord: f64,
}
fn default_final_step() -> usize {
    usize::MAX
}
impl SolverParameters {
    pub fn validate(&self) -> Result<()> {
        if !(self.cfl > 0.0 && self.cfl <= 1.0) {
            return Err(invalid("cfl", format!("must lie in (0, 1], got {}", self.cfl)));
        }
        if !(self.final_time >= 0.0 && self.final_time.is_finite()) {
            return Err(invalid(
                "final_time",
                format!("must be finite and non-negative, got {}", self.final_time),
            ));
        }
        if self.cell_num == 0 {
            return Err(invalid("cell_num", "must be at least 1".to_string()));
        }
        if !(self.left_coord < self.right_coord) {
            return Err(invalid(
                "left_coord",
                format!("must be below right_coord ({} >= {})", self.left_coord, self.right_coord),
            ));
        }
        Ok(())
    }
    pub fn dx(&self) -> f64 {
        (self.right_coord - self.left_coord) / self.cell_num as f64
    }
    pub fn dt_dx<F: Flux + ?Sized>(&self, u: ArrayView1<f64>, flux: &F) -> Result<f64> {
        stable_dt_over_dx(u, flux, self.cfl)
    }
}

fn invalid(name: &'static str, reason: String) -> ConlawError {
    ConlawError::InvalidParameter { name, reason }
}

pub(crate) fn check_ratio(dt_dx: f64) -> Result<()> {
    if dt_dx.is_finite() && dt_dx >= 0.0 {
        Ok(())
    } else {
        Err(ConlawError::InvalidRatio(dt_dx))
    }
}

/// cfl / max |f'(u)| over the state. Pass the state with its ghost cells so
/// the boundary data enter the bound. A state where every wave speed
/// vanishes gives an unbounded ratio.
pub fn stable_dt_over_dx<F: Flux + ?Sized>(u: ArrayView1<f64>, flux: &F, cfl: f64) -> Result<f64> {
    if !(cfl > 0.0 && cfl <= 1.0) {
        return Err(invalid("cfl", format!("must lie in (0, 1], got {cfl}")));
    }
    let speeds = u.mapv(|v| flux.derivative(v).abs());
    let max_speed = *speeds.max().map_err(|err| match err {
        MinMaxError::EmptyInput => ConlawError::shape("state", "at least 1", 0),
        MinMaxError::UndefinedOrder => ConlawError::NonFiniteState,
    })?;
    if !max_speed.is_finite() {
        return Err(ConlawError::NonFiniteState);
    }
    if max_speed == 0.0 {
        warn!("all wave speeds vanish, dt/dx is unbounded");
        return Ok(f64::INFINITY);
    }
    Ok(cfl / max_speed)
}
