use ndarray as nd;
use proptest::prelude::*;
use boxwell::{
    params::{ PhysicalConstants, Shot },
    solve::{ self, Eigenstate },
    utils::{ wf_norm, wf_normalized },
};

fn state_from(wf: Vec<f64>, dx: f64) -> Eigenstate {
    let n = wf.len();
    Eigenstate {
        n: 1,
        e: 1.0,
        dx,
        x: (1..=n).map(|k| k as f64 * dx).collect(),
        wf: nd::Array1::from(wf),
        boundary: 0.0,
        trials: 1,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64, .. ProptestConfig::default()
    })]

    #[test]
    fn normalize_is_idempotent(
        wf in prop::collection::vec(-10.0f64..10.0, 1..200),
        dx in 1e-3f64..1.0,
    ) {
        prop_assume!(wf.iter().any(|qk| qk.abs() > 1e-3));
        let mut once = state_from(wf, dx);
        once.normalize().unwrap();
        let twice = once.normalized().unwrap();
        prop_assert!((once.norm() - 1.0).abs() < 1e-9);
        for (a, b) in once.wf.iter().zip(twice.wf.iter()) {
            prop_assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0));
        }
    }

    #[test]
    fn normalized_copy_matches_in_place(
        wf in prop::collection::vec(-10.0f64..10.0, 1..200),
        dx in 1e-3f64..1.0,
    ) {
        prop_assume!(wf.iter().any(|qk| qk.abs() > 1e-3));
        let mut state = state_from(wf, dx);
        let copy = wf_normalized(&state.wf, dx).unwrap();
        state.normalize().unwrap();
        prop_assert_eq!(state.wf, copy);
    }

    #[test]
    fn sample_count_is_ceiling(a in 0.1f64..5.0, dx in 1e-3f64..0.5) {
        let n = solve::grid_len(a, dx);
        let consts = PhysicalConstants { a, ..Default::default() };
        prop_assert_eq!(solve::integrate(3.0, &consts, dx).len(), n);
        prop_assert_eq!(solve::grid(a, dx).len(), n);
        prop_assert!((n as f64) * dx >= a * (1.0 - 1e-8));
        prop_assert!(((n - 1) as f64) * dx < a);
    }

    #[test]
    fn integration_is_deterministic(
        e in 0.0f64..100.0,
        psi0 in -1.0f64..1.0,
        dpsi0 in -1.0f64..1.0,
    ) {
        let consts = PhysicalConstants::default();
        let shot = Shot { psi0, dpsi0 };
        let q = solve::integrate_from(e, &consts, 0.01, shot);
        prop_assert_eq!(&q, &solve::integrate_from(e, &consts, 0.01, shot));
        prop_assert_eq!(q[q.len() - 1], solve::shoot(e, &consts, 0.01, shot));
        prop_assert!(wf_norm(&q, 0.01).is_finite());
    }
}
