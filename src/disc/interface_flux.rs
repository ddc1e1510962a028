use ndarray::{Array1, ArrayView1, Zip, s};

use super::{flux::ConcaveFlux, riemann_solver::godunov_flux_pair};
use crate::error::{ConlawError, Result};

/// Godunov flux F_{i+1/2} for i = 0..len(u)-1, computed by classifying all
/// interfaces at once.
///
/// An interface takes f at its left state when the wave moves right (shock
/// with f(a) <= f(b), or a rarefaction with a <= theta), f at its right state
/// when it moves left, and the flux maximum otherwise. This gives the same
/// bits as [`godunov_flux_pair`] applied pairwise.
pub fn compute_flux<F: ConcaveFlux + ?Sized>(u: ArrayView1<f64>, flux: &F) -> Result<Array1<f64>> {
    if u.len() < 2 {
        return Err(ConlawError::shape("interface flux state", "at least 2", u.len()));
    }
    let theta = flux.theta();
    let maximum = flux.maximum();
    let f = flux.flux_array(u);
    let (ul, ur) = (u.slice(s![..-1]), u.slice(s![1..]));
    let (fl, fr) = (f.slice(s![..-1]), f.slice(s![1..]));

    let mask_pos = Zip::from(&ul)
        .and(&ur)
        .and(&fl)
        .and(&fr)
        .map_collect(|&a, &b, &fa, &fb| (a <= b && fa <= fb) || (a > b && a <= theta));
    let mask_neg = Zip::from(&ul)
        .and(&ur)
        .and(&fl)
        .and(&fr)
        .map_collect(|&a, &b, &fa, &fb| (a <= b && fa > fb) || (a > b && b >= theta));

    Ok(Zip::from(&mask_pos)
        .and(&mask_neg)
        .and(&fl)
        .and(&fr)
        .map_collect(|&pos, &neg, &fa, &fb| {
            if pos {
                fa
            } else if neg {
                fb
            } else {
                maximum
            }
        }))
}

/// Pairwise reference for [`compute_flux`], one Riemann problem per interface.
pub fn compute_flux_scalar<F: ConcaveFlux + ?Sized>(
    u: ArrayView1<f64>,
    flux: &F,
) -> Result<Array1<f64>> {
    if u.len() < 2 {
        return Err(ConlawError::shape("interface flux state", "at least 2", u.len()));
    }
    Ok(u.windows(2)
        .into_iter()
        .map(|w| godunov_flux_pair(w[0], w[1], flux))
        .collect())
}
