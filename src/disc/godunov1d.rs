use ndarray::{Array1, ArrayView1, s};
use tracing::debug;

use super::{
    boundary::{BoundaryCondition, scalar1d::apply_boundary},
    flux::ConcaveFlux,
    interface_flux::compute_flux,
};
use crate::{
    error::{ConlawError, Result},
    solver::{check_ratio, stable_dt_over_dx},
};

/// One Godunov step on the interior cells. The caller's array is left
/// untouched; the result has the same length as `interior`.
///
/// `dt_dx` has to satisfy max |f'| dt/dx <= 1 for the update to stay
/// monotone. This is not checked. An infinite `dt_dx` is only accepted when
/// every interface carries the same flux.
pub fn c_step<F: ConcaveFlux + ?Sized>(
    interior: ArrayView1<f64>,
    boundary: &BoundaryCondition,
    flux: &F,
    dt_dx: f64,
) -> Result<Array1<f64>> {
    let unbounded = dt_dx == f64::INFINITY;
    if !unbounded {
        check_ratio(dt_dx)?;
    }
    let u_aug = apply_boundary(interior, boundary)?;
    let flow = compute_flux(u_aug.view(), flux)?;
    debug!(cells = interior.len(), dt_dx, "godunov step");
    if unbounded {
        if flow.iter().any(|&v| v != flow[0]) {
            return Err(ConlawError::InvalidRatio(dt_dx));
        }
        return Ok(u_aug.slice(s![1..-1]).to_owned());
    }
    Ok(conservative_update(u_aug.view(), flow.view(), dt_dx))
}

/// Finite-volume update of the cells between the ghosts of `u_aug`, given
/// the flux on its `len - 1` interfaces.
pub(crate) fn conservative_update(u_aug: ArrayView1<f64>, flow: ArrayView1<f64>, dt_dx: f64) -> Array1<f64> {
    let jump = &flow.slice(s![1..]) - &flow.slice(s![..-1]);
    &u_aug.slice(s![1..-1]) - &(jump * dt_dx)
}

/// Godunov discretisation bound to a flux model and boundary policy.
pub struct Disc1dGodunov<'a, F: ConcaveFlux + ?Sized> {
    pub flux: &'a F,
    pub boundary: BoundaryCondition,
    pub current_step: usize,
}
impl<'a, F: ConcaveFlux + ?Sized> Disc1dGodunov<'a, F> {
    pub fn new(flux: &'a F, boundary: BoundaryCondition) -> Self {
        Self {
            flux,
            boundary,
            current_step: 0,
        }
    }
    pub fn c_step(&mut self, interior: ArrayView1<f64>, dt_dx: f64) -> Result<Array1<f64>> {
        let unew = c_step(interior, &self.boundary, self.flux, dt_dx)?;
        self.current_step += 1;
        Ok(unew)
    }
    /// Largest dt/dx allowed by `cfl` for the current state, ghost cells included.
    pub fn compute_dt_dx(&self, interior: ArrayView1<f64>, cfl: f64) -> Result<f64> {
        let u_aug = apply_boundary(interior, &self.boundary)?;
        stable_dt_over_dx(u_aug.view(), self.flux, cfl)
    }
}
