use std::cell::{Cell, RefCell};

use approx::assert_relative_eq;

use odestep_core::{linspace, reference::forced_cubic};

use super::{Action, Error, Event, Method, Status, euler, rk2, rk4, solve, solve_unobserved};

type Stepper = fn(fn(f64, f64) -> f64, f64, &[f64]) -> Result<Vec<f64>, Error>;

const STEPPERS: [(&str, Stepper); 3] = [("euler", euler), ("rk2", rk2), ("rk4", rk4)];

fn constant_rate(_x: f64, _t: f64) -> f64 {
    1.0
}

#[test]
fn trajectory_matches_grid_length() {
    for n in [1, 2, 5, 20, 101] {
        let t = linspace(0.0, 3.0, n);
        for (name, stepper) in STEPPERS {
            let x = stepper(forced_cubic, 0.2, &t).expect("grid is not empty");
            assert_eq!(x.len(), t.len(), "{name} with {n} points");
        }
    }
}

#[test]
fn first_value_is_initial_condition() {
    let t = linspace(0.0, 1.0, 11);
    let x0 = 0.123_456_789;

    for (name, stepper) in STEPPERS {
        let x = stepper(forced_cubic, x0, &t).expect("grid is not empty");
        assert_eq!(x[0], x0, "{name}");
    }
}

#[test]
fn constant_rate_is_integrated_exactly() {
    // h = 0.25 is exactly representable, so every step is exact.
    let t = linspace(0.0, 2.0, 9);
    let x0 = 1.0;

    for (name, stepper) in STEPPERS {
        let x = stepper(constant_rate, x0, &t).expect("grid is not empty");
        for (i, &xi) in x.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected = x0 + i as f64 * 0.25;
            assert_eq!(xi, expected, "{name} at index {i}");
        }
    }
}

#[test]
fn single_point_grid_never_evaluates_derivative() {
    let calls = Cell::new(0);
    let counting = |x: f64, t: f64| {
        calls.set(calls.get() + 1);
        forced_cubic(x, t)
    };

    for method in Method::ALL {
        let solution = solve_unobserved(method, counting, 4.2, &[7.0]).expect("one point");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.x, vec![4.2]);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.evaluations, 0);
    }

    assert_eq!(calls.get(), 0);
}

#[test]
fn empty_grid_is_rejected() {
    for (name, stepper) in STEPPERS {
        assert_eq!(stepper(forced_cubic, 0.0, &[]), Err(Error::EmptyGrid), "{name}");
    }

    let observed = solve(Method::Rk4, forced_cubic, 0.0, &[], |_: &Event| -> Option<Action> {
        panic!("no events are emitted for an empty grid")
    });
    assert_eq!(observed, Err(Error::EmptyGrid));
}

#[test]
fn evaluation_count_scales_with_method() {
    let t = linspace(0.0, 1.0, 6);

    for method in Method::ALL {
        let calls = Cell::new(0);
        let counting = |x: f64, t: f64| {
            calls.set(calls.get() + 1);
            forced_cubic(x, t)
        };

        let solution = solve_unobserved(method, counting, 0.0, &t).expect("should solve");

        assert_eq!(solution.steps, 5);
        assert_eq!(solution.evaluations, 5 * method.evaluations_per_step());
        assert_eq!(calls.get(), solution.evaluations, "{method:?}");
    }
}

#[test]
fn non_uniform_grid_recomputes_step_size() {
    // f = 1 on t = [0, 0.5, 2, 2.25]: each step adds its own interval.
    let t = [0.0, 0.5, 2.0, 2.25];

    for (name, stepper) in STEPPERS {
        let x = stepper(constant_rate, 0.0, &t).expect("grid is not empty");
        assert_eq!(x, vec![0.0, 0.5, 2.0, 2.25], "{name}");
    }
}

#[test]
fn derivative_sees_grid_times() {
    let t = [0.0, 1.0, 3.0];
    let seen = RefCell::new(Vec::new());
    let recording = |_x: f64, t: f64| {
        seen.borrow_mut().push(t);
        0.0
    };

    rk4(recording, 0.0, &t).expect("should solve");

    // Each step evaluates at t, t + h/2 (twice), and t + h.
    assert_eq!(*seen.borrow(), vec![0.0, 0.5, 0.5, 1.0, 1.0, 2.0, 2.0, 3.0]);
}

#[test]
fn exponential_growth_converges_at_method_order() {
    let exact = 1.0_f64.exp();

    for method in Method::ALL {
        let error_at = |n: usize| {
            let t = linspace(0.0, 1.0, n + 1);
            let solution =
                solve_unobserved(method, |x: f64, _t: f64| x, 1.0, &t).expect("should solve");
            (solution.last().expect("non-empty") - exact).abs()
        };

        // Halving h should shrink the global error by about 2^order.
        let ratio = error_at(50) / error_at(100);
        let expected = f64::from(2_u32.pow(method.order()));
        assert_relative_eq!(ratio, expected, max_relative = 0.1);
    }
}

#[test]
fn non_finite_values_propagate() {
    // The derivative blows up once the state passes 1.
    let f = |x: f64, _t: f64| if x > 1.0 { f64::INFINITY } else { 1.0 };
    let t = linspace(0.0, 3.0, 7);

    for (name, stepper) in STEPPERS {
        let x = stepper(f, 0.0, &t).expect("non-finite values are not errors");

        assert_eq!(x.len(), t.len(), "{name}");
        assert!(x[0..3].iter().all(|v| v.is_finite()), "{name}: {x:?}");
        assert!(x[x.len() - 1].is_infinite() || x[x.len() - 1].is_nan(), "{name}: {x:?}");
    }
}

#[test]
fn observer_sees_every_point_in_order() {
    let t = linspace(0.0, 1.0, 5);
    let mut events = Vec::new();

    let solution = solve(Method::Rk2, forced_cubic, 0.5, &t, |event: &Event| {
        events.push(*event);
        None
    })
    .expect("should solve");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(events.len(), t.len());
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.step, i);
        assert_eq!(event.t, t[i]);
        assert_eq!(event.x, solution.x[i]);
    }
}

#[test]
fn observer_can_stop_early() {
    let t = linspace(0.0, 10.0, 101);

    let observer = |event: &Event| {
        if event.step >= 5 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution =
        solve(Method::Euler, forced_cubic, 0.0, &t, observer).expect("should stop early");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 5);
    assert_eq!(solution.x.len(), 6); // initial + 5 steps
    assert_eq!(solution.evaluations, 5);

    let full = euler(forced_cubic, 0.0, &t).expect("should solve");
    assert_eq!(solution.x[..], full[..6]);
}

#[test]
fn observer_can_stop_before_first_step() {
    let t = linspace(0.0, 1.0, 3);

    let solution = solve(Method::Rk4, forced_cubic, 2.0, &t, |_: &Event| {
        Some(Action::StopEarly)
    })
    .expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.x, vec![2.0]);
    assert_eq!(solution.steps, 0);
    assert_eq!(solution.evaluations, 0);
}

#[test]
fn repeated_calls_are_deterministic() {
    let t = linspace(0.0, 10.0, 20);

    for (name, stepper) in STEPPERS {
        let first = stepper(forced_cubic, 0.0, &t).expect("should solve");
        let second = stepper(forced_cubic, 0.0, &t).expect("should solve");
        assert_eq!(first, second, "{name}");
    }
}

#[test]
fn grid_is_not_mutated() {
    let t = linspace(0.0, 10.0, 20);
    let before = t.clone();

    for method in Method::ALL {
        solve_unobserved(method, forced_cubic, 0.0, &t).expect("should solve");
    }

    assert_eq!(t, before);
}
