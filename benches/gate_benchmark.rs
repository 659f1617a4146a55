/// blochsim Criterion Benchmark Suite
///
/// Covers:
///   - Single-qubit gate application (full Kronecker operator path)
///   - CNOT / SWAP application (index permutation path)
///   - Entangled state preparation (Bell, GHZ up to the 6-qubit limit)
///   - Bloch extraction and notation rendering
///   - Full session recompilation of random placed-gate programs
///   - Script front end (lex → parse → compile)
use blochsim::circuit::{compile, parse_script, CnotRole, PlacedGate, PlacedOp};
use blochsim::core::{all_bloch_angles, apply_gate, run, Gate, SingleQubitGate, StateVector, MAX_QUBITS};
use blochsim::notation::render_state;
use blochsim::GateId;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ── Gate application ──────────────────────────────────────────────────────

fn bench_single_qubit_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit_gates");
    for n in 1..=MAX_QUBITS {
        let state = StateVector::zero(n);
        group.bench_with_input(BenchmarkId::new("H", n), &n, |b, &n| {
            b.iter(|| apply_gate(black_box(&state), &Gate::single(n - 1, SingleQubitGate::H)));
        });
        group.bench_with_input(BenchmarkId::new("RY", n), &n, |b, _| {
            b.iter(|| apply_gate(black_box(&state), &Gate::single(0, SingleQubitGate::Ry(black_box(0.7)))));
        });
    }
    group.finish();
}

fn bench_two_qubit_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_qubit_gates");
    for n in 2..=MAX_QUBITS {
        let state = run(n, &[Gate::single(0, SingleQubitGate::H)]);
        group.bench_with_input(BenchmarkId::new("CNOT", n), &n, |b, &n| {
            b.iter(|| apply_gate(black_box(&state), &Gate::cnot(0, n - 1)));
        });
        group.bench_with_input(BenchmarkId::new("SWAP", n), &n, |b, &n| {
            b.iter(|| apply_gate(black_box(&state), &Gate::swap(0, n - 1)));
        });
    }
    group.finish();
}

// ── Entangled state preparation ───────────────────────────────────────────

fn bench_bell_state(c: &mut Criterion) {
    let gates = [Gate::single(0, SingleQubitGate::H), Gate::cnot(0, 1)];
    c.bench_function("bell_state_2qubits", |b| b.iter(|| run(black_box(2), &gates)));
}

fn bench_ghz_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("ghz_state");
    for n in 2..=MAX_QUBITS {
        let mut gates = vec![Gate::single(0, SingleQubitGate::H)];
        gates.extend((1..n).map(|q| Gate::cnot(0, q)));
        group.bench_with_input(BenchmarkId::new("GHZ", n), &n, |b, &n| {
            b.iter(|| run(black_box(n), &gates));
        });
    }
    group.finish();
}

// ── Readout ───────────────────────────────────────────────────────────────

fn bench_readout(c: &mut Criterion) {
    let gates: Vec<Gate> = (0..MAX_QUBITS).map(|q| Gate::single(q, SingleQubitGate::H)).collect();
    let state = run(MAX_QUBITS, &gates);
    c.bench_function("bloch_angles_6qubits", |b| b.iter(|| all_bloch_angles(black_box(&state))));
    c.bench_function("render_state_6qubits", |b| b.iter(|| render_state(black_box(&state))));
}

// ── Program compilation ───────────────────────────────────────────────────

/// Random program of `len` entries; two-qubit gates contribute both markers.
fn random_program(rng: &mut StdRng, n: usize, len: usize) -> Vec<PlacedGate> {
    let mut gates = Vec::with_capacity(len * 2);
    let mut next = 0u64;
    let mut place = |gates: &mut Vec<PlacedGate>, position: f64, qubit: usize, op: PlacedOp| {
        gates.push(PlacedGate { id: GateId(next), position, qubit, op });
        next += 1;
    };
    for _ in 0..len {
        let position = rng.gen_range(0.0..1000.0);
        let qubit = rng.gen_range(0..n);
        match rng.gen_range(0..6) {
            0 => {
                let other = (qubit + rng.gen_range(1..n)) % n;
                place(&mut gates, position, qubit, PlacedOp::Swap);
                place(&mut gates, position, other, PlacedOp::Swap);
            }
            1 => {
                let other = (qubit + rng.gen_range(1..n)) % n;
                place(&mut gates, position, qubit, PlacedOp::Cnot(CnotRole::Control));
                place(&mut gates, position, other, PlacedOp::Cnot(CnotRole::Target));
            }
            2 => place(&mut gates, position, qubit, PlacedOp::Single(SingleQubitGate::Rx(rng.gen_range(0.0..6.28)))),
            3 => place(&mut gates, position, qubit, PlacedOp::Single(SingleQubitGate::H)),
            4 => place(&mut gates, position, qubit, PlacedOp::Single(SingleQubitGate::Y)),
            _ => place(&mut gates, position, qubit, PlacedOp::Single(SingleQubitGate::Rz(rng.gen_range(0.0..6.28)))),
        }
    }
    gates
}

fn bench_compile_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_random");
    let mut rng = StdRng::seed_from_u64(0xB10C);
    for len in [10usize, 50, 200] {
        let program = random_program(&mut rng, MAX_QUBITS, len);
        group.bench_with_input(BenchmarkId::new("entries", len), &program, |b, program| {
            b.iter(|| compile(black_box(program), MAX_QUBITS));
        });
    }
    group.finish();
}

fn bench_script_bell(c: &mut Criterion) {
    let src = "QUBITS 2\n@10 H 0\n@20 CNOT 0 1";
    c.bench_function("script_bell_pipeline", |b| {
        b.iter(|| parse_script(black_box(src)).unwrap())
    });
}

fn bench_script_ghz(c: &mut Criterion) {
    let src = "QUBITS 6\nH 0\nCNOT 0 1\nCNOT 0 2\nCNOT 0 3\nCNOT 0 4\nCNOT 0 5\nRX 5 90\nRZ 4 45";
    c.bench_function("script_ghz_6qubits_pipeline", |b| {
        b.iter(|| parse_script(black_box(src)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_single_qubit_gates,
    bench_two_qubit_gates,
    bench_bell_state,
    bench_ghz_state,
    bench_readout,
    bench_compile_random,
    bench_script_bell,
    bench_script_ghz,
);
criterion_main!(benches);
