//! Simulation core: amplitudes, gate matrices, the state vector engine and
//! Bloch extraction.
pub mod bloch;
pub mod complex;
pub mod engine;
pub mod gates;
pub mod operator;
pub mod state;

pub use bloch::{all_bloch_angles, bloch_angles, transition, ArcPath, BlochAngles};
pub use complex::Complex;
pub use engine::{apply_gate, embed_two_qubit, full_operator, run};
pub use gates::{Axis, Gate, Matrix2x2, Matrix4x4, SingleQubitGate};
pub use operator::Operator;
pub use state::{StateVector, MAX_QUBITS};
