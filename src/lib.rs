pub mod disc;
pub mod error;
pub mod io;
pub mod solver;

pub use disc::{
    boundary::{BoundaryCondition, BoundaryValue},
    flux::{ConcaveFlux, ConcaveFluxFn, Flux, Greenshields},
    riemann_solver::{WaveCase, trace},
};
pub use error::{ConlawError, Result};
pub use solver::SolverParameters;
