use godunov_conlaw::{
    BoundaryCondition, BoundaryValue, ConcaveFlux, Flux, Greenshields,
    disc::{godunov1d::Disc1dGodunov, lax_friedrichs1d},
    io::param_parser::SolverParamParser,
};
use ndarray::{Array1, s};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn riemann_datum(n: usize, left: f64, right: f64) -> Array1<f64> {
    Array1::from_shape_fn(n, |i| if i < n / 2 { left } else { right })
}

#[test]
fn traffic_jam_shock_moves_upstream() {
    init_logging();
    let f = Greenshields::default();
    // free road meets a jam: f(0.2) = 0.16 > f(0.9) = 0.09, shock speed -0.1
    let n = 100;
    let mut u = riemann_datum(n, 0.2, 0.9);
    let mut disc = Disc1dGodunov::new(&f, BoundaryCondition::free_flow());
    let mass0 = u.sum();
    let dt_dx = 0.5;
    let steps = 40;
    for _ in 0..steps {
        u = disc.c_step(u.view(), dt_dx).unwrap();
    }
    // shock travelled 0.1 * 0.5 * 40 = 2 cells to the left
    assert!((u[n / 2 - 8] - 0.2).abs() < 1e-12);
    assert!(u[n / 2 - 1] > 0.8);
    assert!((u[n / 2 + 1] - 0.9).abs() < 1e-12);
    // boundary fluxes are f(0.2) in and f(0.9) out
    let expected_mass = mass0 + dt_dx * steps as f64 * (f.flux(0.2) - f.flux(0.9));
    assert!((u.sum() - expected_mass).abs() < 1e-10);
}

#[test]
fn green_light_rarefaction_is_transonic() {
    init_logging();
    let f = Greenshields::default();
    let n = 80;
    let mut u = riemann_datum(n, 1.0, 0.0);
    let bc = BoundaryCondition::new(BoundaryValue::FreeFlow, BoundaryValue::Fixed(0.0));
    let mut disc = Disc1dGodunov::new(&f, bc);
    for _ in 0..20 {
        let dt_dx = disc.compute_dt_dx(u.view(), 0.9).unwrap();
        u = disc.c_step(u.view(), dt_dx).unwrap();
    }
    // the fan is centred on the sonic density and the profile stays monotone
    assert!(u.slice(s![..n / 2]).iter().all(|&v| v >= 0.5 - 1e-12));
    assert!(u.slice(s![n / 2..]).iter().all(|&v| v <= 0.5 + 1e-12));
    assert!(u.windows(2).into_iter().all(|w| w[0] >= w[1] - 1e-12));
    assert_eq!(f.maximum(), 0.25);
}

#[test]
fn schemes_agree_on_smooth_data() {
    init_logging();
    let params = SolverParamParser::from_json(
        r#"{"cfl": 0.5, "final_time": 0.1, "cell_num": 400, "left_coord": 0.0, "right_coord": 1.0}"#,
    )
    .unwrap();
    let f = Greenshields::default();
    let dx = params.dx();
    let n = params.cell_num;
    let u0 = Array1::from_shape_fn(n, |i| {
        let x = params.left_coord + (i as f64 + 0.5) * dx;
        0.5 + 0.2 * (2.0 * std::f64::consts::PI * x).sin()
    });
    let dt_dx = params.dt_dx(u0.view(), &f).unwrap();
    let steps = (params.final_time / (dt_dx * dx)).ceil() as usize;

    let mut godunov = Disc1dGodunov::new(&f, BoundaryCondition::free_flow());
    let mut ug = u0.clone();
    let mut ulf = Array1::<f64>::zeros(n + 2);
    ulf.slice_mut(s![1..=n]).assign(&u0);
    ulf[0] = u0[0];
    ulf[n + 1] = u0[n - 1];
    for _ in 0..steps {
        ug = godunov.c_step(ug.view(), dt_dx).unwrap();
        ulf = lax_friedrichs1d::c_step(ulf.view(), &BoundaryCondition::free_flow(), &f, dt_dx).unwrap();
    }
    let diff = (&ug - &ulf.slice(s![1..=n])).mapv(f64::abs);
    let l1 = diff.sum() * dx;
    assert!(l1 < 0.05, "L1 difference {l1}");
}
