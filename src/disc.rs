pub mod boundary;
pub mod flux;
pub mod godunov1d;
pub mod interface_flux;
pub mod lax_friedrichs1d;
pub mod riemann_solver;
