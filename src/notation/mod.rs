//! Human-readable renderings of circuit state.
//!
//! - `qubit`: one qubit's ket from its Bloch angles
//! - `joint`: the register as a product of factors, with the uniform
//!   superposition collapsed to a single sum
//! - `vector`: the raw amplitude listing `|ψ⟩ = (a)|00⟩ + …`
//! - `details`: the step-by-step calculation walkthrough
//!
//! Every renderer has a `*_with` form taking a `NotationStyle`; the short
//! forms use `NotationStyle::default()`.
pub mod details;
pub mod joint;
pub mod qubit;
pub mod vector;

pub use details::details;
pub use joint::{concise, render_joint, render_joint_with, render_state, render_state_with};
pub use qubit::{format_amplitude, render_qubit, render_qubit_calculation, render_qubit_with};
pub use vector::{format_complex, render_state_vector, render_state_vector_with};

use serde::{Deserialize, Serialize};

/// Tolerance and precision used when turning numbers into notation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotationStyle {
    /// Absolute tolerance for recognizing special angles and amplitudes.
    pub tolerance: f64,
    /// Decimals for amplitudes and phases inside a ket.
    pub ket_decimals: usize,
    /// Decimals for complex amplitudes in the state-vector listing.
    pub vector_decimals: usize,
}

impl Default for NotationStyle {
    fn default() -> Self {
        Self { tolerance: 1e-6, ket_decimals: 2, vector_decimals: 3 }
    }
}

impl NotationStyle {
    #[inline]
    pub(crate) fn near(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.tolerance
    }
}
