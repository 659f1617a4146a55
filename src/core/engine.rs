//! State vector engine.
//!
//! `apply_gate` is a pure function: it borrows the current state and returns
//! a fresh one. Callers replace their state wholesale.
//!
//! Two application strategies:
//!   - **single-qubit gates** go through the full 2^n × 2^n operator, built
//!     as the Kronecker product `F₀ ⊗ F₁ ⊗ … ⊗ Fₙ₋₁` where `F_q` is the gate
//!     and every other factor is I;
//!   - **CNOT and SWAP** are basis-index permutations: each amplitude is
//!     copied to the index obtained by flipping (CNOT) or exchanging (SWAP)
//!     bits, with no matrix involved.
//!
//! `embed_two_qubit` builds the operator a 4×4 gate would have on an
//! arbitrary pair so the permutation paths can be checked against it.
use super::complex::Complex;
use super::gates::{Gate, Matrix4x4, SingleQubitGate};
use super::operator::Operator;
use super::state::StateVector;
use tracing::{trace, warn};

/// Apply `gate` to `state`, returning the new state.
///
/// Panics on programmer errors: qubit indices outside the register or a
/// two-qubit gate with both ends on one wire.
pub fn apply_gate(state: &StateVector, gate: &Gate) -> StateVector {
    let n = state.num_qubits();
    assert!(
        gate.max_qubit() < n,
        "{gate} addresses a qubit outside the {n}-qubit register"
    );
    trace!(%gate, qubits = n, "applying gate");

    match *gate {
        Gate::Single { qubit, gate } => apply_single(state, sanitize(gate), qubit),
        Gate::Cnot { control, target } => apply_cnot(state, control, target),
        Gate::Swap { a, b } => apply_swap(state, a, b),
    }
}

/// Fold a sequence of gates over |0…0⟩.
pub fn run(num_qubits: usize, gates: &[Gate]) -> StateVector {
    gates
        .iter()
        .fold(StateVector::zero(num_qubits), |state, g| apply_gate(&state, g))
}

/// Replace a non-finite rotation angle with 0.
pub fn sanitize_angle(theta: f64) -> f64 {
    if theta.is_finite() {
        theta
    } else {
        warn!(theta, "non-finite rotation angle coerced to 0");
        0.0
    }
}

fn sanitize(gate: SingleQubitGate) -> SingleQubitGate {
    match gate.angle() {
        Some(theta) => gate.with_angle(sanitize_angle(theta)),
        None => gate,
    }
}

// ── Single-qubit path ─────────────────────────────────────────────────────

/// Full-space operator for `gate` on `qubit` of an `n`-qubit register.
pub fn full_operator(gate: &SingleQubitGate, qubit: usize, n: usize) -> Operator {
    assert!(qubit < n, "qubit {qubit} out of range for {n} qubits");
    let factor = Operator::from_2x2(&gate.matrix());
    let id = Operator::identity(2);
    (0..n).fold(Operator::identity(1), |acc, q| {
        acc.kron(if q == qubit { &factor } else { &id })
    })
}

fn apply_single(state: &StateVector, gate: SingleQubitGate, qubit: usize) -> StateVector {
    let op = full_operator(&gate, qubit, state.num_qubits());
    StateVector::from_amplitudes(op.mul_vec(state.amplitudes()))
}

// ── Permutation paths ─────────────────────────────────────────────────────

/// Build a new state where amplitude `i` moves to `image(i)`. `image` must
/// be a bijection on `0..dim`.
fn permute(state: &StateVector, image: impl Fn(usize) -> usize) -> StateVector {
    let mut out = vec![Complex::ZERO; state.dim()];
    for (i, &amp) in state.amplitudes().iter().enumerate() {
        out[image(i)] = amp;
    }
    StateVector::from_amplitudes(out)
}

fn apply_cnot(state: &StateVector, control: usize, target: usize) -> StateVector {
    assert_ne!(control, target, "control and target must be different qubits");
    let n = state.num_qubits();
    let target_mask = StateVector::mask(target, n);
    permute(state, |i| {
        if StateVector::bit(i, control, n) {
            i ^ target_mask
        } else {
            i
        }
    })
}

fn apply_swap(state: &StateVector, a: usize, b: usize) -> StateVector {
    assert_ne!(a, b, "SWAP requires two different qubits");
    let n = state.num_qubits();
    let both = StateVector::mask(a, n) | StateVector::mask(b, n);
    permute(state, |i| {
        if StateVector::bit(i, a, n) != StateVector::bit(i, b, n) {
            i ^ both
        } else {
            i
        }
    })
}

// ── Two-qubit embedding ───────────────────────────────────────────────────

/// The 2^n operator of a 4×4 gate acting on the ordered pair
/// (`first`, `second`), where `first` plays the role of the more
/// significant qubit of the 4×4 matrix. Qubits outside the pair see I.
pub fn embed_two_qubit(m: &Matrix4x4, first: usize, second: usize, n: usize) -> Operator {
    assert!(first < n && second < n, "pair ({first}, {second}) out of range for {n} qubits");
    assert_ne!(first, second, "a two-qubit gate needs two different qubits");

    let first_mask = StateVector::mask(first, n);
    let second_mask = StateVector::mask(second, n);
    let local = |i: usize| {
        (usize::from(i & first_mask != 0) << 1) | usize::from(i & second_mask != 0)
    };

    // ⟨row|U|col⟩ is non-zero only when row and col agree outside the pair.
    let pair_mask = first_mask | second_mask;
    Operator::from_fn(1 << n, |row, col| {
        if row & !pair_mask == col & !pair_mask {
            m[local(row)][local(col)]
        } else {
            Complex::ZERO
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gates::{cnot_matrix, swap_matrix};
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    fn h(q: usize) -> Gate {
        Gate::single(q, SingleQubitGate::H)
    }

    fn x(q: usize) -> Gate {
        Gate::single(q, SingleQubitGate::X)
    }

    #[test]
    fn test_x_flips_qubit_zero_msb() {
        let out = apply_gate(&StateVector::zero(2), &x(0));
        // qubit 0 is the most significant bit: |10⟩ = index 2
        assert_eq!(out.amplitude(2), Complex::ONE);
    }

    #[test]
    fn test_x_twice_is_exact_identity() {
        let start = run(3, &[h(0), Gate::single(1, SingleQubitGate::Ry(0.4))]);
        let twice = apply_gate(&apply_gate(&start, &x(2)), &x(2));
        assert!(twice.approx_eq(&start, 0.0));
    }

    #[test]
    fn test_hadamard_superposition() {
        let out = apply_gate(&StateVector::zero(1), &h(0));
        assert_eq!(out.amplitude(0), Complex::real(FRAC_1_SQRT_2));
        assert_eq!(out.amplitude(1), Complex::real(FRAC_1_SQRT_2));
    }

    #[test]
    fn test_bell_state() {
        let out = run(2, &[h(0), Gate::cnot(0, 1)]);
        let s = Complex::real(FRAC_1_SQRT_2);
        assert_eq!(out.amplitudes(), &[s, Complex::ZERO, Complex::ZERO, s]);
    }

    #[test]
    fn test_ghz_on_three_qubits() {
        let out = run(3, &[h(0), Gate::cnot(0, 1), Gate::cnot(1, 2)]);
        let p = out.probabilities();
        assert!((p[0] - 0.5).abs() < 1e-12);
        assert!((p[7] - 0.5).abs() < 1e-12);
        assert!(p[1..7].iter().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn test_cnot_control_zero_is_identity() {
        let start = run(2, &[x(1)]); // |01⟩
        let out = apply_gate(&start, &Gate::cnot(0, 1));
        assert!(out.approx_eq(&start, 0.0));
    }

    #[test]
    fn test_reversed_cnot() {
        // control = qubit 1, target = qubit 0: |01⟩ → |11⟩
        let out = apply_gate(&StateVector::basis(2, 0b01), &Gate::cnot(1, 0));
        assert_eq!(out.amplitude(0b11), Complex::ONE);
    }

    /// Operator whose column `c` is the gate applied to basis state `c`.
    fn operator_of(gate: &Gate, n: usize) -> Operator {
        let columns: Vec<StateVector> = (0..1 << n).map(|c| apply_gate(&StateVector::basis(n, c), gate)).collect();
        Operator::from_fn(1 << n, |r, c| columns[c].amplitude(r))
    }

    #[test]
    fn test_cnot_matches_embedded_matrix_for_two_qubits() {
        let permuted = operator_of(&Gate::cnot(0, 1), 2);
        assert!(permuted.approx_eq(&Operator::from_4x4(&cnot_matrix()), 1e-12));
        let reversed = operator_of(&Gate::cnot(1, 0), 2);
        assert!(!reversed.approx_eq(&Operator::from_4x4(&cnot_matrix()), 1e-12));
    }

    #[test]
    fn test_cnot_and_swap_match_embedding_for_all_pairs() {
        let n = 4;
        for c in 0..n {
            for t in (0..n).filter(|&t| t != c) {
                let perm = operator_of(&Gate::cnot(c, t), n);
                assert!(
                    perm.approx_eq(&embed_two_qubit(&cnot_matrix(), c, t, n), 1e-12),
                    "CNOT({c}, {t}) disagrees with its embedding"
                );

                let perm = operator_of(&Gate::swap(c, t), n);
                assert!(
                    perm.approx_eq(&embed_two_qubit(&swap_matrix(), c, t, n), 1e-12),
                    "SWAP({c}, {t}) disagrees with its embedding"
                );
            }
        }
    }

    #[test]
    fn test_embedding_is_unitary() {
        assert!(embed_two_qubit(&cnot_matrix(), 2, 0, 3).is_unitary(1e-12));
    }

    #[test]
    fn test_swap_moves_excitation() {
        let out = apply_gate(&StateVector::basis(3, 0b100), &Gate::swap(0, 2));
        assert_eq!(out.amplitude(0b001), Complex::ONE);
    }

    #[test]
    fn test_full_operator_matches_kron_order() {
        let op = full_operator(&SingleQubitGate::X, 2, 3);
        // X on the least significant qubit maps |000⟩ to |001⟩
        assert_eq!(op.get(1, 0), Complex::ONE);
        assert!(op.is_unitary(1e-12));
    }

    #[test]
    fn test_nan_angle_is_identity() {
        let start = run(1, &[h(0)]);
        let out = apply_gate(&start, &Gate::single(0, SingleQubitGate::Rz(f64::NAN)));
        assert!(out.approx_eq(&start, 1e-12));
        assert!(out.amplitudes().iter().all(|a| a.is_finite()));
        assert_eq!(sanitize_angle(f64::INFINITY), 0.0);
        assert_eq!(sanitize_angle(PI), PI);
    }

    #[test]
    fn test_input_state_untouched() {
        let start = StateVector::zero(2);
        let _ = apply_gate(&start, &h(1));
        assert_eq!(start, StateVector::zero(2));
    }

    #[test]
    #[should_panic(expected = "outside the 2-qubit register")]
    fn test_out_of_range_qubit_panics() {
        apply_gate(&StateVector::zero(2), &x(2));
    }

    #[test]
    #[should_panic(expected = "control and target must be different")]
    fn test_cnot_same_qubit_panics() {
        apply_gate(&StateVector::zero(2), &Gate::cnot(1, 1));
    }
}
