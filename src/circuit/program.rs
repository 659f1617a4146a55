//! Compiling a placed-gate program into a state vector.
//!
//! Pipeline: placed gates → stable sort by position → pair two-qubit markers
//! → `Vec<Gate>` → fold through the engine starting at |0…0⟩.
//!
//! Compilation never fails. Entries that cannot form a gate (an unpaired
//! CNOT or SWAP marker, a wire beyond the register) are transient editing
//! states and are skipped.
use super::placed::{sort_by_position, CnotRole, PlacedGate, PlacedOp};
use crate::core::engine;
use crate::core::gates::Gate;
use crate::core::state::StateVector;
use std::collections::HashSet;
use tracing::debug;

/// Replay `gates` against |0…0⟩ on `qubit_count` qubits.
pub fn compile(gates: &[PlacedGate], qubit_count: usize) -> StateVector {
    let steps = compile_steps(gates, qubit_count);
    debug!(qubit_count, entries = gates.len(), steps = steps.len(), "compiling circuit");
    engine::run(qubit_count, &steps)
}

/// The engine calls `compile` makes, in order.
pub fn compile_steps(gates: &[PlacedGate], qubit_count: usize) -> Vec<Gate> {
    let mut sorted = gates.to_vec();
    sort_by_position(&mut sorted);

    let mut consumed = HashSet::with_capacity(sorted.len());
    let mut steps = Vec::with_capacity(sorted.len());

    for (i, entry) in sorted.iter().enumerate() {
        if consumed.contains(&entry.id) {
            continue;
        }
        if entry.qubit >= qubit_count {
            debug!(id = %entry.id, qubit = entry.qubit, qubit_count, "skipping gate beyond register");
            continue;
        }

        match entry.op {
            PlacedOp::Single(gate) => {
                consumed.insert(entry.id);
                steps.push(Gate::single(entry.qubit, gate));
            }
            op => {
                let partner = sorted.iter().enumerate().find(|(j, p)| {
                    *j != i
                        && p.id != entry.id
                        && p.same_slot(entry)
                        && p.qubit != entry.qubit
                        && p.qubit < qubit_count
                        && op.pairs_with(&p.op)
                        && !consumed.contains(&p.id)
                });
                let Some((_, partner)) = partner else {
                    debug!(id = %entry.id, position = entry.position, "skipping unpaired {} marker", op.mnemonic());
                    continue;
                };
                consumed.insert(entry.id);
                consumed.insert(partner.id);
                steps.push(pair_gate(entry, partner));
            }
        }
    }

    steps
}

fn pair_gate(entry: &PlacedGate, partner: &PlacedGate) -> Gate {
    match entry.op {
        PlacedOp::Cnot(CnotRole::Control) => Gate::cnot(entry.qubit, partner.qubit),
        PlacedOp::Cnot(CnotRole::Target) => Gate::cnot(partner.qubit, entry.qubit),
        PlacedOp::Swap => Gate::swap(entry.qubit, partner.qubit),
        PlacedOp::Single(_) => unreachable!("single-qubit entries are never paired"),
    }
}
