use approx::assert_relative_eq;
use ndarray::{Array1, Axis, arr0, array};
use solute_transport::{
    AnalyticalSolution, BaseSolution, PulseSolution, RetardedSolution, SpecialFunctions,
    TransportParameters, evaluate_pulse_solution, evaluate_retarded_solution,
};

const TOLERANCE: f64 = 1e-12;

#[test]
fn reference_scenario() {
    let c = evaluate_retarded_solution(
        &arr0(100.0),
        &arr0(10.0),
        1.0,
        10.0,
        3.0,
        0.0,
        20.0,
        1.0,
    )
    .unwrap();

    let c = *c.first().unwrap();
    assert!(c > 0.0 && c < 1.0);
    assert_relative_eq!(c, 0.515_427_895_148_739_6, max_relative = 1e-12);
}

#[test]
#[allow(clippy::float_cmp)]
fn nothing_has_arrived_at_time_zero() {
    let x = Array1::linspace(0.1, 200.0, 50);
    let c = evaluate_pulse_solution(&x, &arr0(0.0), 1.0, 10.0, 3.0, 0.1, 20.0).unwrap();
    assert!(c.iter().all(|&c| c == 0.0));
}

#[test]
fn inlet_holds_boundary_concentration_while_source_is_on() {
    let t = Array1::linspace(0.05, 20.0, 40);
    for dispersion in [3.0, 0.1, 1e-4] {
        let c = evaluate_pulse_solution(&arr0(0.0), &t, 2.5, 10.0, dispersion, 0.0, 20.0).unwrap();
        for &c in &c {
            assert_relative_eq!(c, 2.5, max_relative = 1e-14);
        }
    }
}

#[test]
#[allow(clippy::float_cmp)]
fn zero_duration_is_always_off() {
    let x = array![0.0, 10.0, 100.0].insert_axis(Axis(1));
    let t = array![0.0, 1.0, 10.0, 100.0];
    let c = evaluate_pulse_solution(&x, &t, 1.0, 10.0, 3.0, 0.05, 0.0).unwrap();

    assert_eq!(c.shape(), &[3, 4]);
    assert!(c.iter().all(|&c| c == 0.0));
}

#[test]
fn breakthrough_rises_then_declines() {
    let duration = 10.0;
    let t = Array1::linspace(0.0, 40.0, 161);
    let c = evaluate_pulse_solution(&arr0(100.0), &t, 1.0, 10.0, 3.0, 0.0, duration).unwrap();
    let c: Vec<f64> = c.iter().copied().collect();

    let peak = c
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap();

    assert!(t[peak] >= duration, "peak at t = {}", t[peak]);
    for pair in c[..=peak].windows(2) {
        assert!(pair[1] >= pair[0] - TOLERANCE);
    }
    for pair in c[peak..].windows(2) {
        assert!(pair[1] <= pair[0] + TOLERANCE);
    }
    assert!(c[160] < 1e-6);
}

#[test]
fn long_pulse_degenerates_to_step() {
    let t = array![1.0, 5.0, 10.0, 15.0];
    let step = BaseSolution::new(10.0, 3.0, 0.0).concentration(&arr0(100.0), &t).unwrap();

    for duration in [1e9, f64::INFINITY] {
        let pulse = evaluate_pulse_solution(&arr0(100.0), &t, 1.0, 10.0, 3.0, 0.0, duration)
            .unwrap();
        for (p, s) in pulse.iter().zip(step.iter()) {
            assert_relative_eq!(*p, *s, max_relative = 1e-14);
        }
    }
}

#[test]
#[allow(clippy::float_cmp)]
fn unit_retardation_matches_pulse() {
    let x = Array1::linspace(0.0, 200.0, 21).insert_axis(Axis(1));
    let t = Array1::linspace(0.0, 40.0, 41);

    for reaction_rate in [0.0, 0.1] {
        let pulse = evaluate_pulse_solution(&x, &t, 1.0, 10.0, 3.0, reaction_rate, 20.0).unwrap();
        let retarded =
            evaluate_retarded_solution(&x, &t, 1.0, 10.0, 3.0, reaction_rate, 20.0, 1.0).unwrap();

        assert_eq!(pulse, retarded);
    }
}

#[test]
fn retardation_follows_similarity_transform() {
    let x = Array1::linspace(0.0, 150.0, 16).insert_axis(Axis(1));
    let t = Array1::linspace(0.5, 60.0, 120);

    for retardation in [1.5, 2.0, 4.0] {
        let retarded =
            evaluate_retarded_solution(&x, &t, 1.0, 10.0, 3.0, 0.05, 20.0, retardation).unwrap();

        // Direct substitution of the rescaled rates.
        let substituted = evaluate_pulse_solution(
            &x,
            &t,
            1.0,
            10.0 / retardation,
            3.0 / retardation,
            0.05 / retardation,
            20.0,
        )
        .unwrap();
        assert_eq!(retarded, substituted);

        // The same field on a clock running `retardation` times slower.
        let slowed = t.mapv(|t| t / retardation);
        let stretched =
            evaluate_pulse_solution(&x, &slowed, 1.0, 10.0, 3.0, 0.05, 20.0 / retardation)
                .unwrap();
        for (r, s) in retarded.iter().zip(stretched.iter()) {
            assert_relative_eq!(*r, *s, epsilon = 1e-12, max_relative = 1e-9);
        }
    }
}

#[test]
fn no_overflow_for_sharp_fronts() {
    let x = Array1::linspace(0.0, 500.0, 501).insert_axis(Axis(1));
    let t = Array1::linspace(0.01, 50.0, 500);
    let c = evaluate_pulse_solution(&x, &t, 1.0, 50.0, 0.01, 0.0, 100.0).unwrap();

    assert_eq!(c.shape(), &[501, 500]);
    assert!(c.iter().all(|c| c.is_finite()), "field has non-finite values");
    assert!(c.iter().all(|&c| (-TOLERANCE..=1.0 + TOLERANCE).contains(&c)));

    // Right at the front the plus term is tiny but not zero.
    let at_front = PulseSolution::new(50.0, 0.01, 0.0, 100.0).concentration_at(250.0, 5.0);
    assert_relative_eq!(at_front, 0.500_252_313_151_276_8, max_relative = 1e-9);
}

#[test]
fn outputs_stay_within_boundary_concentration() {
    let x = Array1::linspace(0.0, 300.0, 31).insert_axis(Axis(1));
    let t = Array1::linspace(0.0, 60.0, 61);

    for (velocity, dispersion, reaction_rate, retardation) in [
        (10.0, 3.0, 0.0, 1.0),
        (5.0, 10.0, 0.2, 1.0),
        (30.0, 1.0, 0.0, 3.0),
        (0.0, 2.0, 0.1, 1.0),
        (20.0, 0.05, 1.0, 2.0),
    ] {
        let params = TransportParameters {
            boundary_concentration: 4.0,
            velocity,
            dispersion,
            reaction_rate,
            pulse_duration: 15.0,
            retardation,
        };
        let solution = params.validate().unwrap().solution();
        let c = solution.concentration(&x, &t).unwrap();

        for &c in &c {
            assert!(
                (-TOLERANCE..=4.0 * (1.0 + TOLERANCE)).contains(&c),
                "{c} out of range for {params:?}"
            );
        }
    }
}

#[test]
fn reaction_lowers_concentration() {
    let with_reaction =
        evaluate_pulse_solution(&arr0(100.0), &arr0(10.0), 1.0, 10.0, 3.0, 0.05, 20.0).unwrap();
    assert_relative_eq!(
        *with_reaction.first().unwrap(),
        0.322_197_859_371_472_24,
        max_relative = 1e-10
    );
}

#[test]
fn invalid_inputs_produce_nan_not_errors() {
    let t = array![-1.0, 1.0];
    let c = evaluate_retarded_solution(&arr0(10.0), &t, 1.0, 10.0, 3.0, 0.0, 20.0, 1.0).unwrap();
    let c: Vec<f64> = c.iter().copied().collect();
    assert!(c[0].is_nan());
    assert!(c[1].is_finite());

    let t = array![1.0, 5.0];
    let c = evaluate_pulse_solution(&arr0(10.0), &t, 1.0, 10.0, -3.0, 0.0, 20.0).unwrap();
    assert!(c.iter().all(|c| c.is_nan()));
}

#[test]
fn solutions_are_shareable_across_threads() {
    let solution = RetardedSolution::new(10.0, 3.0, 0.0, 20.0, 2.0);
    let t = Array1::linspace(0.0, 40.0, 81);
    let expected = solution.concentration(&arr0(100.0), &t).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| solution.concentration(&arr0(100.0), &t).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

/// Error functions that only provide `erf` and `erfc`, relying on the
/// default `ln_erfc`.
#[derive(Debug, Clone, Copy)]
struct Minimal;

impl SpecialFunctions for Minimal {
    fn erf(&self, z: f64) -> f64 {
        statrs::function::erf::erf(z)
    }

    fn erfc(&self, z: f64) -> f64 {
        statrs::function::erf::erfc(z)
    }
}

#[test]
fn special_functions_are_swappable() {
    let custom = PulseSolution::from_base(
        BaseSolution::with_special_functions(50.0, 0.01, 0.0, Minimal),
        100.0,
    );
    let default = PulseSolution::new(50.0, 0.01, 0.0, 100.0);

    for (x, t) in [(0.0, 1.0), (250.0, 5.0), (400.0, 8.0), (100.0, 1.0)] {
        assert_relative_eq!(
            custom.concentration_at(x, t),
            default.concentration_at(x, t),
            max_relative = 1e-15
        );
    }
}
