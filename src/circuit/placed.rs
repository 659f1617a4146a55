//! Placed gates: the entries of a circuit program.
//!
//! A placed gate sits on one wire at a real-valued position. Two-qubit gates
//! are stored as two markers sharing a position, one per wire, and are only
//! paired up when the program is compiled.
use crate::core::gates::SingleQubitGate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Unique, never reused identifier of a placed gate within a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GateId(pub u64);

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which end of a CNOT a marker is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CnotRole {
    Control,
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlacedOp {
    Single(SingleQubitGate),
    Cnot(CnotRole),
    /// One end of a SWAP; both ends are equivalent.
    Swap,
}

impl PlacedOp {
    pub fn is_two_qubit_marker(&self) -> bool {
        !matches!(self, Self::Single(_))
    }

    /// True if `other` is the marker that completes `self` into a gate.
    pub fn pairs_with(&self, other: &PlacedOp) -> bool {
        matches!(
            (self, other),
            (Self::Cnot(CnotRole::Control), Self::Cnot(CnotRole::Target))
                | (Self::Cnot(CnotRole::Target), Self::Cnot(CnotRole::Control))
                | (Self::Swap, Self::Swap)
        )
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Single(g) => g.mnemonic(),
            Self::Cnot(_) => "CNOT",
            Self::Swap => "SWAP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedGate {
    pub id: GateId,
    /// Ordering key only; has no physical meaning.
    pub position: f64,
    pub qubit: usize,
    pub op: PlacedOp,
}

impl PlacedGate {
    /// Ascending position. `total_cmp` keeps the order total even for NaN
    /// positions, so sorting stays deterministic.
    pub fn cmp_position(&self, other: &PlacedGate) -> Ordering {
        self.position.total_cmp(&other.position)
    }

    /// Same placement slot: equal positions. `0.0` and `-0.0` share a slot,
    /// as do two NaN positions.
    pub fn same_slot(&self, other: &PlacedGate) -> bool {
        self.position == other.position
            || (self.position.is_nan() && other.position.is_nan())
    }
}

/// Stable sort by position; equal positions keep insertion order.
pub fn sort_by_position(gates: &mut [PlacedGate]) {
    gates.sort_by(PlacedGate::cmp_position);
}
