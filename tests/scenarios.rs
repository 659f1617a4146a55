//! End-to-end circuit scenarios through the public API.

use blochsim::circuit::parse_script;
use blochsim::core::gates::Axis;
use blochsim::notation::{concise, render_joint};
use blochsim::{
    bloch_angles, compile, render_qubit, render_state, render_state_vector, transition, ArcPath, BlochAngles,
    Circuit, Complex, Error, SingleQubitGate, StateVector,
};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

fn nearly_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── Known scenarios ───────────────────────────────────────────────────────

#[test]
fn empty_single_qubit() {
    let c = Circuit::new(1).unwrap();
    assert_eq!(c.state().amplitudes(), &[Complex::ONE, Complex::ZERO]);
    assert_eq!(c.bloch_angles(0).unwrap(), BlochAngles::ZERO);
    assert_eq!(c.notation(), "|0⟩");
}

#[test]
fn hadamard_single_qubit() {
    let mut c = Circuit::new(1).unwrap();
    c.add_gate(10.0, 0, SingleQubitGate::H).unwrap();
    let s = Complex::real(FRAC_1_SQRT_2);
    assert_eq!(c.state().amplitudes(), &[s, s]);
    let a = c.bloch_angles(0).unwrap();
    assert!(nearly_eq(a.theta, FRAC_PI_2));
    assert!(nearly_eq(a.phi, 0.0));
    assert_eq!(c.notation(), "1/√2 (|0⟩ + |1⟩)");
}

#[test]
fn pauli_x_single_qubit() {
    let mut c = Circuit::new(1).unwrap();
    c.add_gate(10.0, 0, SingleQubitGate::X).unwrap();
    assert_eq!(c.state().amplitudes(), &[Complex::ZERO, Complex::ONE]);
    let a = c.bloch_angles(0).unwrap();
    assert!(nearly_eq(a.theta, PI));
    assert_eq!(a.phi, 0.0);
    assert_eq!(c.notation(), "|1⟩");
}

#[test]
fn bell_pair() {
    let mut c = Circuit::new(2).unwrap();
    c.add_gate(10.0, 0, SingleQubitGate::H).unwrap();
    c.add_cnot(20.0, 0, 1).unwrap();
    assert_eq!(c.state_vector_text(), "|ψ⟩ = (0.707)|00⟩ + (0.707)|11⟩");
    // Each qubit's bucket projection lands on the equator.
    for q in 0..2 {
        assert!(nearly_eq(c.bloch_angles(q).unwrap().theta, FRAC_PI_2));
    }
}

#[test]
fn two_qubit_uniform_superposition() {
    let mut c = Circuit::new(2).unwrap();
    c.add_gate(10.0, 0, SingleQubitGate::H).unwrap();
    c.add_gate(10.0, 1, SingleQubitGate::H).unwrap();
    assert_eq!(c.notation(), "1/2 (|00⟩ + |01⟩ + |10⟩ + |11⟩)");
}

#[test]
fn six_qubit_uniform_superposition() {
    let mut c = Circuit::new(6).unwrap();
    for q in 0..6 {
        c.add_gate(10.0, q, SingleQubitGate::H).unwrap();
    }
    let text = c.notation();
    assert!(text.starts_with("1/8 (|000000⟩ + |000001⟩"));
    assert_eq!(text.matches('|').count(), 64);
}

#[test]
fn rx_half_turn_follows_x_rotation_arc() {
    let mut c = Circuit::new(1).unwrap();
    let from = c.bloch_angles(0).unwrap();
    c.add_rotation_degrees(10.0, 0, Axis::X, 180.0).unwrap();
    let to = c.bloch_angles(0).unwrap();
    assert!(nearly_eq(to.theta, PI));

    let path = c.arc_path_for(0);
    assert_eq!(path, ArcPath::XRotation);
    for step in 0..10 {
        let p = transition(from, to, step as f64 / 10.0, path);
        assert_eq!(p.phi, -FRAC_PI_2);
    }
    assert_eq!(transition(from, to, 1.0, path), to);
}

#[test]
fn rx_after_x_comes_to_rest_on_plus_y() {
    let mut c = Circuit::new(1).unwrap();
    c.add_gate(10.0, 0, SingleQubitGate::X).unwrap();
    let from = c.bloch_angles(0).unwrap();
    c.add_rotation_degrees(20.0, 0, Axis::X, 90.0).unwrap();
    let to = c.bloch_angles(0).unwrap();

    let path = c.arc_path_for(0);
    assert_eq!(path, ArcPath::XRotation);
    let end = transition(from, to, 1.0, path);
    assert_eq!(end, to);
    let [x, y, z] = end.to_cartesian();
    assert!(x.abs() < 1e-9 && nearly_eq(y, 1.0) && z.abs() < 1e-9);
}

#[test]
fn ghz_three_qubits() {
    let c = parse_script("QUBITS 3\nH 0\nCNOT 0 1\nCNOT 0 2").unwrap();
    assert_eq!(c.state_vector_text(), "|ψ⟩ = (0.707)|000⟩ + (0.707)|111⟩");
}

#[test]
fn phase_states_render_with_i() {
    let mut c = Circuit::new(1).unwrap();
    c.add_gate(10.0, 0, SingleQubitGate::H).unwrap();
    c.add_rotation_degrees(20.0, 0, Axis::Z, 90.0).unwrap();
    assert_eq!(c.notation(), "1/√2 (|0⟩ + i|1⟩)");

    c.add_rotation_degrees(30.0, 0, Axis::Z, 180.0).unwrap();
    assert_eq!(c.notation(), "1/√2 (|0⟩ - i|1⟩)");
}

// ── Free functions at the crate root ──────────────────────────────────────

#[test]
fn crate_root_functions_agree_with_session() {
    let mut c = Circuit::new(3).unwrap();
    c.add_gate(10.0, 1, SingleQubitGate::X).unwrap();
    c.add_swap(20.0, 1, 2).unwrap();

    let state = compile(&c.gates(), 3);
    assert_eq!(&state, c.state());
    assert_eq!(render_state(&state), "|001⟩");
    assert_eq!(render_state_vector(&state), "|ψ⟩ = (1.000)|001⟩");
    assert!(nearly_eq(bloch_angles(&state, 2).theta, PI));
}

#[test]
fn render_helpers() {
    assert_eq!(render_qubit(FRAC_PI_2, PI), "1/√2 (|0⟩ - |1⟩)");
    let joint = render_joint(&[BlochAngles::new(FRAC_PI_2, 0.0), BlochAngles::new(FRAC_PI_2, 0.0)]);
    assert_eq!(concise(&joint), "1/2 (|00⟩ + |01⟩ + |10⟩ + |11⟩)");
}

// ── Degenerate inputs ─────────────────────────────────────────────────────

#[test]
fn cancelled_bucket_falls_back_to_north_pole() {
    // |−−⟩: both buckets of qubit 0 sum to zero.
    let h = 0.5;
    let s = StateVector::from_amplitudes(vec![
        Complex::real(h),
        Complex::real(-h),
        Complex::real(-h),
        Complex::real(h),
    ]);
    let a = bloch_angles(&s, 0);
    assert_eq!(a, BlochAngles::ZERO);
}

#[test]
fn boundary_errors() {
    let mut c = Circuit::new(2).unwrap();
    assert!(matches!(Circuit::new(7), Err(Error::QubitCount { .. })));
    assert!(matches!(
        c.add_rotation_degrees(10.0, 0, Axis::Y, 720.0),
        Err(Error::InvalidAngle { degrees }) if degrees == 720.0
    ));
    assert!(matches!(c.add_cnot(10.0, 0, 5), Err(Error::QubitOutOfRange { qubit: 5, .. })));
    assert!(c.is_empty());
}

#[test]
fn script_errors_carry_lines() {
    let err = parse_script("QUBITS 2\nH 0\nBOGUS 1").unwrap_err();
    assert!(matches!(err, Error::Lex { line: 3, .. }));
    let err = parse_script("QUBITS 2\nH 0\nCNOT 1").unwrap_err();
    assert!(matches!(err, Error::Parse { line: 3, .. }));
}

#[test]
fn snapshot_round_trips_through_json() {
    let c = parse_script("QUBITS 2\n@10 H 0\n@20 CNOT 0 1").unwrap();
    let json = serde_json::to_string(&c.snapshot()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["bloch"].as_array().unwrap().len(), 2);
    assert_eq!(value["gates"][1]["op"]["Cnot"], "Control");
}
