//! Quantum state vector.
//!
//! An n-qubit register holds 2^n complex amplitudes. Basis index `i` is read
//! as an n-bit string with **qubit 0 as the most significant bit**, so for
//! three qubits index 4 = `100` means qubit 0 is |1⟩ and qubits 1 and 2 are
//! |0⟩. Labels print in the same order, qubit 0 leftmost.
//!
//! The vector is never renormalized here. Unitary gates keep Σ|aᵢ|² = 1 on
//! their own; see `core::bloch` for the one place renormalization happens.
use super::complex::Complex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest register the simulator accepts.
pub const MAX_QUBITS: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex>,
}

impl StateVector {
    /// |0…0⟩ on `num_qubits` qubits.
    ///
    /// Panics outside `1..=MAX_QUBITS`; user-facing entry points validate
    /// the count first.
    pub fn zero(num_qubits: usize) -> Self {
        assert!(
            (1..=MAX_QUBITS).contains(&num_qubits),
            "qubit count {num_qubits} outside 1..={MAX_QUBITS}"
        );
        let mut amplitudes = vec![Complex::ZERO; 1 << num_qubits];
        amplitudes[0] = Complex::ONE;
        Self { num_qubits, amplitudes }
    }

    /// Wrap raw amplitudes. The length must be a power of two between 2 and
    /// 2^MAX_QUBITS. No normalization is applied.
    pub fn from_amplitudes(amplitudes: Vec<Complex>) -> Self {
        let len = amplitudes.len();
        assert!(
            len.is_power_of_two() && (2..=1 << MAX_QUBITS).contains(&len),
            "amplitude count {len} is not 2^n for n in 1..={MAX_QUBITS}"
        );
        Self {
            num_qubits: len.trailing_zeros() as usize,
            amplitudes,
        }
    }

    /// Computational basis state |index⟩.
    pub fn basis(num_qubits: usize, index: usize) -> Self {
        let mut state = Self::zero(num_qubits);
        assert!(index < state.dim(), "basis index {index} out of range");
        state.amplitudes[0] = Complex::ZERO;
        state.amplitudes[index] = Complex::ONE;
        state
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// 2^n
    #[inline]
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    #[inline]
    pub fn amplitudes(&self) -> &[Complex] {
        &self.amplitudes
    }

    #[inline]
    pub fn amplitude(&self, index: usize) -> Complex {
        self.amplitudes[index]
    }

    /// Σ|aᵢ|²
    pub fn norm_sq(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sq()).sum()
    }

    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sq()).collect()
    }

    /// Value of `qubit`'s bit in basis index `index` of an `n`-qubit register.
    #[inline]
    pub fn bit(index: usize, qubit: usize, n: usize) -> bool {
        (index >> (n - 1 - qubit)) & 1 == 1
    }

    /// Mask selecting `qubit`'s bit in an `n`-qubit basis index.
    #[inline]
    pub fn mask(qubit: usize, n: usize) -> usize {
        1 << (n - 1 - qubit)
    }

    /// Basis label of `index`, qubit 0 first: `basis_label(1)` on two qubits
    /// is `"01"`.
    pub fn basis_label(&self, index: usize) -> String {
        format!("{index:0width$b}", width = self.num_qubits)
    }

    /// Component-wise comparison within `tol`.
    pub fn approx_eq(&self, other: &StateVector, tol: f64) -> bool {
        self.num_qubits == other.num_qubits
            && self
                .amplitudes
                .iter()
                .zip(&other.amplitudes)
                .all(|(a, b)| a.approx_eq(*b, tol))
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "StateVector ({} qubits, dim={}):", self.num_qubits, self.dim())?;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let p = amp.norm_sq();
            if p > 1e-12 {
                writeln!(f, "  |{}⟩  {}  p={:.4}", self.basis_label(i), amp, p)?;
            }
        }
        Ok(())
    }
}
