use ndarray::{Array1, ArrayView1};

pub trait Flux {
    fn flux(&self, u: f64) -> f64;
    /// Wave speed f'(u). Falls back to a central difference scaled by the
    /// magnitude of `u`.
    fn derivative(&self, u: f64) -> f64 {
        let h = u.abs().max(1.0) * f64::EPSILON.sqrt();
        (self.flux(u + h) - self.flux(u - h)) / (2.0 * h)
    }
    fn flux_array(&self, u: ArrayView1<f64>) -> Array1<f64> {
        u.mapv(|v| self.flux(v))
    }
}

/// Strict concavity is assumed, never checked.
pub trait ConcaveFlux: Flux {
    /// Unique maximiser of the flux.
    fn theta(&self) -> f64;
    /// Value of the flux at `theta`. Must be bit-identical to `flux(theta)`,
    /// otherwise the vectorised and scalar interface fluxes can disagree.
    fn maximum(&self) -> f64 {
        self.flux(self.theta())
    }
}

/// Greenshields traffic flux f(u) = v_max u (1 - u / rho_max).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Greenshields {
    pub v_max: f64,
    pub rho_max: f64,
}
impl Default for Greenshields {
    fn default() -> Self {
        Self {
            v_max: 1.0,
            rho_max: 1.0,
        }
    }
}
impl Greenshields {
    pub fn new(v_max: f64, rho_max: f64) -> Self {
        Self { v_max, rho_max }
    }
}
impl Flux for Greenshields {
    fn flux(&self, u: f64) -> f64 {
        self.v_max * u * (1.0 - u / self.rho_max)
    }
    fn derivative(&self, u: f64) -> f64 {
        self.v_max * (1.0 - 2.0 * u / self.rho_max)
    }
}
impl ConcaveFlux for Greenshields {
    fn theta(&self) -> f64 {
        0.5 * self.rho_max
    }
}

/// Concave flux given by a closure and its maximiser.
#[derive(Clone, Copy)]
pub struct ConcaveFluxFn<F> {
    func: F,
    theta: f64,
}
impl<F: Fn(f64) -> f64> ConcaveFluxFn<F> {
    pub fn new(func: F, theta: f64) -> Self {
        Self { func, theta }
    }
}
impl<F: Fn(f64) -> f64> Flux for ConcaveFluxFn<F> {
    fn flux(&self, u: f64) -> f64 {
        (self.func)(u)
    }
}
impl<F: Fn(f64) -> f64> ConcaveFlux for ConcaveFluxFn<F> {
    fn theta(&self) -> f64 {
        self.theta
    }
}
