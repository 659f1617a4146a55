//! # blochsim
//!
//! State-vector simulation core for a Bloch-sphere circuit visualizer.
//!
//! A circuit of up to six qubits is edited as placed gates on wires; every
//! edit recompiles the program from |0…0⟩ and exposes the state vector,
//! per-qubit Bloch angles and ket notation.
//!
//! ## Quick Start
//!
//! ```rust
//! use blochsim::{Circuit, SingleQubitGate};
//!
//! // Build a Bell state: (|00⟩ + |11⟩) / √2
//! let mut circuit = Circuit::new(2)?;
//! circuit.add_gate(10.0, 0, SingleQubitGate::H)?;
//! circuit.add_cnot(20.0, 0, 1)?;
//!
//! assert_eq!(circuit.state_vector_text(), "|ψ⟩ = (0.707)|00⟩ + (0.707)|11⟩");
//!
//! // Each qubit's projection onto its own Bloch sphere
//! let angles = circuit.bloch_angles(0)?;
//! println!("θ = {:.3}, φ = {:.3}", angles.theta, angles.phi);
//! # Ok::<(), blochsim::Error>(())
//! ```

pub mod circuit;
pub mod config;
pub mod core;
pub mod error;
pub mod notation;

pub use crate::circuit::{compile, parse_script, Circuit, CircuitSnapshot, GateId, PlacedGate, PlacedOp};
pub use crate::config::Config;
pub use crate::core::{
    bloch_angles, transition, ArcPath, Axis, BlochAngles, Complex, Gate, SingleQubitGate, StateVector,
    MAX_QUBITS,
};
pub use crate::error::{Error, Result};
pub use crate::notation::{render_qubit, render_state, render_state_vector, NotationStyle};
