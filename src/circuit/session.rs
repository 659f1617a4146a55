//! Circuit session: one editable circuit and its compiled state.
//!
//! `Circuit` owns the placed-gate program and the state vector derived from
//! it. Every mutation validates its input, edits the program, and then
//! recompiles the whole program from |0…0⟩ before returning, so `state()`
//! is always consistent with `gates()`. Mutations take `&mut self`; a
//! circuit therefore has exactly one writer at a time.
use super::placed::{sort_by_position, CnotRole, GateId, PlacedGate, PlacedOp};
use super::program::{compile, compile_steps};
use crate::core::bloch::{self, ArcPath, BlochAngles};
use crate::core::gates::{Axis, Gate, SingleQubitGate};
use crate::core::state::{StateVector, MAX_QUBITS};
use crate::error::{Error, Result};
use crate::notation::{self, NotationStyle};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct Circuit {
    qubit_count: usize,
    gates: Vec<PlacedGate>,
    next_id: u64,
    state: StateVector,
}

impl Circuit {
    pub fn new(qubit_count: usize) -> Result<Self> {
        check_qubit_count(qubit_count)?;
        Ok(Self {
            qubit_count,
            gates: Vec::new(),
            next_id: 0,
            state: StateVector::zero(qubit_count),
        })
    }

    #[inline]
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Placed gates in compile order (ascending position, stable).
    pub fn gates(&self) -> Vec<PlacedGate> {
        let mut sorted = self.gates.clone();
        sort_by_position(&mut sorted);
        sorted
    }

    pub fn get(&self, id: GateId) -> Option<&PlacedGate> {
        self.gates.iter().find(|g| g.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// The compiled state.
    #[inline]
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Gates the engine applied for the current program, in order.
    pub fn steps(&self) -> Vec<Gate> {
        compile_steps(&self.gates, self.qubit_count)
    }

    // ── Editing ───────────────────────────────────────────────────────────

    /// Place a single-qubit gate. Rotation angles are radians here; use
    /// `add_rotation_degrees` for values coming from a user.
    pub fn add_gate(&mut self, position: f64, qubit: usize, gate: SingleQubitGate) -> Result<GateId> {
        self.check_qubit(qubit)?;
        let id = self.push(position, qubit, PlacedOp::Single(gate));
        self.recompile();
        Ok(id)
    }

    /// Place RX/RY/RZ from an angle in degrees. The angle must be finite and
    /// within [0, 360]; anything else is rejected before it reaches the core.
    pub fn add_rotation_degrees(
        &mut self,
        position: f64,
        qubit: usize,
        axis: Axis,
        degrees: f64,
    ) -> Result<GateId> {
        let theta = degrees_to_radians(degrees)?;
        self.add_gate(position, qubit, SingleQubitGate::rotation(axis, theta))
    }

    /// Place both markers of a CNOT at `position`.
    pub fn add_cnot(&mut self, position: f64, control: usize, target: usize) -> Result<(GateId, GateId)> {
        self.check_pair(control, target)?;
        let c = self.push(position, control, PlacedOp::Cnot(CnotRole::Control));
        let t = self.push(position, target, PlacedOp::Cnot(CnotRole::Target));
        self.recompile();
        Ok((c, t))
    }

    /// Place both markers of a SWAP at `position`.
    pub fn add_swap(&mut self, position: f64, a: usize, b: usize) -> Result<(GateId, GateId)> {
        self.check_pair(a, b)?;
        let first = self.push(position, a, PlacedOp::Swap);
        let second = self.push(position, b, PlacedOp::Swap);
        self.recompile();
        Ok((first, second))
    }

    /// Remove a gate. Removing either marker of a two-qubit gate removes
    /// every marker of that kind in the same slot.
    pub fn remove(&mut self, id: GateId) -> Result<()> {
        let removed = *self.get(id).ok_or(Error::UnknownGate(id))?;
        let before = self.gates.len();
        if removed.op.is_two_qubit_marker() {
            let kind = removed.op.mnemonic();
            self.gates
                .retain(|g| !(g.op.is_two_qubit_marker() && g.op.mnemonic() == kind && g.same_slot(&removed)));
        } else {
            self.gates.retain(|g| g.id != id);
        }
        debug!(%id, removed = before - self.gates.len(), "removed gate");
        self.recompile();
        Ok(())
    }

    /// Change the register size. Shrinking to one qubit drops every
    /// two-qubit marker; otherwise gates on wires that no longer exist are
    /// dropped.
    pub fn set_qubit_count(&mut self, qubit_count: usize) -> Result<()> {
        check_qubit_count(qubit_count)?;
        if qubit_count == 1 {
            self.gates.retain(|g| !g.op.is_two_qubit_marker());
        }
        self.gates.retain(|g| g.qubit < qubit_count);
        info!(from = self.qubit_count, to = qubit_count, "qubit count changed");
        self.qubit_count = qubit_count;
        self.recompile();
        Ok(())
    }

    /// Remove every gate; the state returns to |0…0⟩.
    pub fn reset(&mut self) {
        self.gates.clear();
        self.state = StateVector::zero(self.qubit_count);
        debug!(qubit_count = self.qubit_count, "circuit reset");
    }

    // ── Derived views ─────────────────────────────────────────────────────

    pub fn bloch_angles(&self, qubit: usize) -> Result<BlochAngles> {
        self.check_qubit(qubit)?;
        Ok(bloch::bloch_angles(&self.state, qubit))
    }

    pub fn all_bloch_angles(&self) -> Vec<BlochAngles> {
        bloch::all_bloch_angles(&self.state)
    }

    /// Arrow path a view should animate `qubit` along: an X rotation when
    /// the last gate touching the wire is RX.
    pub fn arc_path_for(&self, qubit: usize) -> ArcPath {
        let last = self.steps().into_iter().rev().find(|g| g.touches(qubit));
        match last {
            Some(Gate::Single { gate: SingleQubitGate::Rx(_), .. }) => ArcPath::XRotation,
            _ => ArcPath::Shortest,
        }
    }

    /// Symbolic ket notation for the whole register.
    pub fn notation(&self) -> String {
        notation::render_state(&self.state)
    }

    /// Per-basis amplitude listing, `|ψ⟩ = (0.707)|00⟩ + …`.
    pub fn state_vector_text(&self) -> String {
        notation::render_state_vector(&self.state)
    }

    /// Multi-section calculation walkthrough.
    pub fn details(&self) -> String {
        notation::details(self, &NotationStyle::default())
    }

    pub fn snapshot(&self) -> CircuitSnapshot {
        CircuitSnapshot {
            qubit_count: self.qubit_count,
            gates: self.gates(),
            amplitudes: self.state.amplitudes().to_vec(),
            bloch: self.all_bloch_angles(),
            notation: self.notation(),
            state_vector: self.state_vector_text(),
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn push(&mut self, position: f64, qubit: usize, op: PlacedOp) -> GateId {
        let id = GateId(self.next_id);
        self.next_id += 1;
        self.gates.push(PlacedGate { id, position, qubit, op });
        debug!(%id, position, qubit, gate = op.mnemonic(), "placed gate");
        id
    }

    fn recompile(&mut self) {
        self.state = compile(&self.gates, self.qubit_count);
    }

    fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit < self.qubit_count {
            Ok(())
        } else {
            Err(Error::QubitOutOfRange { qubit, qubit_count: self.qubit_count })
        }
    }

    fn check_pair(&self, a: usize, b: usize) -> Result<()> {
        if self.qubit_count < 2 {
            return Err(Error::NeedsTwoQubits);
        }
        self.check_qubit(a)?;
        self.check_qubit(b)?;
        if a == b {
            return Err(Error::SameQubit { qubit: a });
        }
        Ok(())
    }
}

/// Serializable view of a circuit and everything derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct CircuitSnapshot {
    pub qubit_count: usize,
    pub gates: Vec<PlacedGate>,
    pub amplitudes: Vec<crate::core::complex::Complex>,
    pub bloch: Vec<BlochAngles>,
    pub notation: String,
    pub state_vector: String,
}

fn check_qubit_count(requested: usize) -> Result<()> {
    if (1..=MAX_QUBITS).contains(&requested) {
        Ok(())
    } else {
        Err(Error::QubitCount { requested, max: MAX_QUBITS })
    }
}

/// Boundary conversion for user-entered rotation angles.
pub fn degrees_to_radians(degrees: f64) -> Result<f64> {
    if degrees.is_finite() && (0.0..=360.0).contains(&degrees) {
        Ok(degrees.to_radians())
    } else {
        Err(Error::InvalidAngle { degrees })
    }
}
