use super::flux::ConcaveFlux;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WaveCase {
    /// a < b, f(a) < f(b)
    ShockPositive,
    /// a < b, f(a) > f(b)
    ShockNegative,
    /// a < b, f(a) == f(b)
    StationaryShock,
    /// a == b
    Constant,
    /// a > b, a < theta
    RarefactionPositive,
    /// a > b, b > theta
    RarefactionNegative,
    /// a > b, fan contains the sonic point
    Transonic,
}

impl WaveCase {
    /// Cases are tested in a fixed priority order; with a concave flux they
    /// are mutually exclusive.
    pub fn classify<F: ConcaveFlux + ?Sized>(a: f64, b: f64, flux: &F) -> Self {
        if a < b {
            let (fa, fb) = (flux.flux(a), flux.flux(b));
            if fa < fb {
                return WaveCase::ShockPositive;
            }
            if fa > fb {
                return WaveCase::ShockNegative;
            }
            if fa == fb {
                return WaveCase::StationaryShock;
            }
        }
        if a == b {
            return WaveCase::Constant;
        }
        let theta = flux.theta();
        if a < theta {
            WaveCase::RarefactionPositive
        } else if b > theta {
            WaveCase::RarefactionNegative
        } else {
            WaveCase::Transonic
        }
    }

    /// Left and right traces at the interface for this configuration.
    pub fn traces(self, a: f64, b: f64, theta: f64) -> (f64, f64) {
        match self {
            WaveCase::ShockPositive | WaveCase::RarefactionPositive => (a, a),
            WaveCase::ShockNegative | WaveCase::RarefactionNegative => (b, b),
            WaveCase::StationaryShock | WaveCase::Constant => (a, b),
            WaveCase::Transonic => (theta, theta),
        }
    }
}

/// Left and right traces of the Riemann problem with data `a | b`.
pub fn trace<F: ConcaveFlux + ?Sized>(a: f64, b: f64, flux: &F) -> (f64, f64) {
    WaveCase::classify(a, b, flux).traces(a, b, flux.theta())
}

/// Godunov flux of a single interface, f evaluated at the left trace.
///
/// When the traces differ (stationary shock, constant state) f takes the
/// same value on both sides, so the left one is enough.
pub fn godunov_flux_pair<F: ConcaveFlux + ?Sized>(a: f64, b: f64, flux: &F) -> f64 {
    match WaveCase::classify(a, b, flux) {
        WaveCase::Transonic => flux.maximum(),
        case => flux.flux(case.traces(a, b, flux.theta()).0),
    }
}
