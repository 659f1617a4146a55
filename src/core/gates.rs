//! Gate matrix library.
//!
//! Single-qubit gates are 2×2 complex unitaries, row-major (`m[row][col]`).
//! The two-qubit CNOT and SWAP are 4×4 permutation matrices over the basis
//! `|00⟩, |01⟩, |10⟩, |11⟩`, where the left bit belongs to the first qubit
//! of the pair. The engine applies both two-qubit gates as index
//! permutations; the 4×4 forms exist so that path can be checked against a
//! plain tensor-product embedding.
use super::complex::Complex;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// A 2×2 complex unitary acting on one qubit.
pub type Matrix2x2 = [[Complex; 2]; 2];

/// A 4×4 complex unitary acting on an ordered qubit pair.
pub type Matrix4x4 = [[Complex; 4]; 4];

// ── Fixed single-qubit matrices ───────────────────────────────────────────

pub fn identity() -> Matrix2x2 {
    [
        [Complex::ONE, Complex::ZERO],
        [Complex::ZERO, Complex::ONE],
    ]
}

/// H = (1/√2)·[[1, 1], [1, −1]]
pub fn hadamard() -> Matrix2x2 {
    let h = Complex::real(FRAC_1_SQRT_2);
    [[h, h], [h, -h]]
}

/// X = [[0, 1], [1, 0]]
pub fn pauli_x() -> Matrix2x2 {
    [
        [Complex::ZERO, Complex::ONE],
        [Complex::ONE, Complex::ZERO],
    ]
}

/// Y = [[0, −i], [i, 0]]
pub fn pauli_y() -> Matrix2x2 {
    [
        [Complex::ZERO, -Complex::I],
        [Complex::I, Complex::ZERO],
    ]
}

/// Z = [[1, 0], [0, −1]]
pub fn pauli_z() -> Matrix2x2 {
    [
        [Complex::ONE, Complex::ZERO],
        [Complex::ZERO, Complex::real(-1.0)],
    ]
}

// ── Rotations ─────────────────────────────────────────────────────────────

/// Rx(θ) = cos(θ/2)·I − i·sin(θ/2)·X
pub fn rx(theta: f64) -> Matrix2x2 {
    let (sin, cos) = (theta / 2.0).sin_cos();
    let c = Complex::real(cos);
    let s = Complex::new(0.0, -sin);
    [[c, s], [s, c]]
}

/// Ry(θ) = [[cos(θ/2), −sin(θ/2)], [sin(θ/2), cos(θ/2)]]
pub fn ry(theta: f64) -> Matrix2x2 {
    let (sin, cos) = (theta / 2.0).sin_cos();
    [
        [Complex::real(cos), Complex::real(-sin)],
        [Complex::real(sin), Complex::real(cos)],
    ]
}

/// Rz(θ) = diag(e^(−iθ/2), e^(iθ/2))
pub fn rz(theta: f64) -> Matrix2x2 {
    [
        [Complex::from_polar(1.0, -theta / 2.0), Complex::ZERO],
        [Complex::ZERO, Complex::from_polar(1.0, theta / 2.0)],
    ]
}

// ── Two-qubit matrices ────────────────────────────────────────────────────

fn permutation_4x4(image: [usize; 4]) -> Matrix4x4 {
    let mut m = [[Complex::ZERO; 4]; 4];
    for (col, &row) in image.iter().enumerate() {
        m[row][col] = Complex::ONE;
    }
    m
}

/// CNOT with the first (more significant) qubit of the pair as control:
/// |10⟩ ↔ |11⟩.
pub fn cnot_matrix() -> Matrix4x4 {
    permutation_4x4([0, 1, 3, 2])
}

/// SWAP: |01⟩ ↔ |10⟩.
pub fn swap_matrix() -> Matrix4x4 {
    permutation_4x4([0, 2, 1, 3])
}

// ── Gate kinds ────────────────────────────────────────────────────────────

/// Rotation axis for the parametrized gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Every gate that acts on exactly one wire. Rotation angles are radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SingleQubitGate {
    I,
    H,
    X,
    Y,
    Z,
    Rx(f64),
    Ry(f64),
    Rz(f64),
}

impl SingleQubitGate {
    pub fn rotation(axis: Axis, theta: f64) -> Self {
        match axis {
            Axis::X => Self::Rx(theta),
            Axis::Y => Self::Ry(theta),
            Axis::Z => Self::Rz(theta),
        }
    }

    /// The gate's 2×2 unitary.
    pub fn matrix(&self) -> Matrix2x2 {
        match *self {
            Self::I => identity(),
            Self::H => hadamard(),
            Self::X => pauli_x(),
            Self::Y => pauli_y(),
            Self::Z => pauli_z(),
            Self::Rx(theta) => rx(theta),
            Self::Ry(theta) => ry(theta),
            Self::Rz(theta) => rz(theta),
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::I => "I",
            Self::H => "H",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::Rx(_) => "RX",
            Self::Ry(_) => "RY",
            Self::Rz(_) => "RZ",
        }
    }

    /// Rotation angle in radians, `None` for the fixed gates.
    pub fn angle(&self) -> Option<f64> {
        match *self {
            Self::Rx(theta) | Self::Ry(theta) | Self::Rz(theta) => Some(theta),
            _ => None,
        }
    }

    /// Same gate kind with its angle replaced. Fixed gates are returned as is.
    pub fn with_angle(self, theta: f64) -> Self {
        match self {
            Self::Rx(_) => Self::Rx(theta),
            Self::Ry(_) => Self::Ry(theta),
            Self::Rz(_) => Self::Rz(theta),
            fixed => fixed,
        }
    }
}

/// Rotations print their angle in whole degrees: `RX(90°)`.
impl fmt::Display for SingleQubitGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.angle() {
            Some(theta) => write!(f, "{}({:.0}°)", self.mnemonic(), theta.to_degrees()),
            None => f.write_str(self.mnemonic()),
        }
    }
}

/// A gate bound to the wire(s) it acts on. This is the unit the engine
/// applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    Single { qubit: usize, gate: SingleQubitGate },
    Cnot { control: usize, target: usize },
    Swap { a: usize, b: usize },
}

impl Gate {
    pub fn single(qubit: usize, gate: SingleQubitGate) -> Self {
        Self::Single { qubit, gate }
    }

    pub fn cnot(control: usize, target: usize) -> Self {
        Self::Cnot { control, target }
    }

    pub fn swap(a: usize, b: usize) -> Self {
        Self::Swap { a, b }
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Single { gate, .. } => gate.mnemonic(),
            Self::Cnot { .. } => "CNOT",
            Self::Swap { .. } => "SWAP",
        }
    }

    /// Highest qubit index the gate touches.
    pub fn max_qubit(&self) -> usize {
        match *self {
            Self::Single { qubit, .. } => qubit,
            Self::Cnot { control, target } => control.max(target),
            Self::Swap { a, b } => a.max(b),
        }
    }

    pub fn touches(&self, q: usize) -> bool {
        match *self {
            Self::Single { qubit, .. } => qubit == q,
            Self::Cnot { control, target } => control == q || target == q,
            Self::Swap { a, b } => a == q || b == q,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single { qubit, gate } => write!(f, "{gate} q{qubit}"),
            Self::Cnot { control, target } => write!(f, "CNOT q{control} → q{target}"),
            Self::Swap { a, b } => write!(f, "SWAP q{a} ↔ q{b}"),
        }
    }
}
