use anyhow::{Context, Result};
use blochsim::circuit::parse_script;
use blochsim::notation::{self, render_qubit_calculation, NotationStyle};
use blochsim::{transition, Axis, BlochAngles, Circuit, Config, SingleQubitGate};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "blochsim", version, about = "Bloch-sphere circuit simulator")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print a JSON snapshot instead of the text report
    #[arg(long, global = true)]
    json: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run built-in demonstration circuits
    Demo,
    /// Load a circuit script and report its state
    Run {
        /// Script file (`QUBITS <n>` followed by gate lines)
        script: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => run_demos(&config, cli.json),
        Commands::Run { script } => cli_run(&script, &config, cli.json),
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

// ── CLI ───────────────────────────────────────────────────────────────────

fn cli_run(path: &Path, config: &Config, json: bool) -> Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;
    let circuit = parse_script(&source).with_context(|| format!("Invalid script '{}'", path.display()))?;

    if json {
        return print_json(&circuit);
    }

    print_banner();
    println!("━━━ blochsim Script Runner ━━━━━━━━━━━━━━━━━━━━━━━");
    println!("File: {}\n", path.display());
    report(&circuit, &config.notation);
    Ok(())
}

fn print_json(circuit: &Circuit) -> Result<()> {
    let text = serde_json::to_string_pretty(&circuit.snapshot())?;
    println!("{text}");
    Ok(())
}

fn print_banner() {
    println!("╔══════════════════════════════════════════════╗");
    println!("║          blochsim v{:<26}║", env!("CARGO_PKG_VERSION"));
    println!("║     Bloch-Sphere Circuit Simulation Core     ║");
    println!("╚══════════════════════════════════════════════╝");
    println!();
}

/// Full text report: program, amplitudes, Bloch angles, notation, details.
fn report(circuit: &Circuit, style: &NotationStyle) {
    println!("Program ({} qubit(s)):", circuit.qubit_count());
    if circuit.is_empty() {
        println!("  (empty)");
    }
    for step in circuit.steps() {
        println!("  {step}");
    }
    println!();

    println!("State vector:");
    println!("  {}", notation::render_state_vector_with(circuit.state(), style));
    println!();

    println!("Bloch angles:");
    for (q, angles) in circuit.all_bloch_angles().iter().enumerate() {
        let [x, y, z] = angles.to_cartesian();
        println!(
            "  q{q}  θ = {:.3}  φ = {:.3}  (x, y, z) = ({x:+.3}, {y:+.3}, {z:+.3})",
            angles.theta, angles.phi
        );
        for line in render_qubit_calculation(angles.theta, angles.phi).lines() {
            println!("      {line}");
        }
    }
    println!();

    println!("Notation:");
    println!("  {}", notation::render_state_with(circuit.state(), style));
    println!();

    println!("Details:");
    for line in notation::details(circuit, style).lines() {
        println!("  {line}");
    }
    println!();
}

// ── Demos ─────────────────────────────────────────────────────────────────

fn run_demos(config: &Config, json: bool) -> Result<()> {
    if json {
        let mut circuit = Circuit::new(config.qubits)?;
        for q in 0..config.qubits {
            circuit.add_gate(10.0, q, SingleQubitGate::H)?;
        }
        return print_json(&circuit);
    }

    print_banner();
    demo_single_qubit(&config.notation)?;
    demo_bell_state(&config.notation)?;
    demo_uniform_superposition(config)?;
    demo_rx_transition()?;
    demo_editing(&config.notation)?;
    Ok(())
}

fn demo_single_qubit(style: &NotationStyle) -> Result<()> {
    println!("━━━ Demo 1: Single Qubit Basics ━━━━━━━━━━━━━━━━━");
    let mut circuit = Circuit::new(1)?;
    println!("Initial: {}", notation::render_state_with(circuit.state(), style));
    let h = circuit.add_gate(10.0, 0, SingleQubitGate::H)?;
    println!("After H: {}", notation::render_state_with(circuit.state(), style));
    circuit.add_gate(20.0, 0, SingleQubitGate::Z)?;
    println!("After Z: {}", notation::render_state_with(circuit.state(), style));
    circuit.add_rotation_degrees(30.0, 0, Axis::Z, 90.0)?;
    println!("After RZ(90°): {}", notation::render_state_with(circuit.state(), style));
    circuit.remove(h)?;
    println!("Without the H: {}", notation::render_state_with(circuit.state(), style));
    println!();
    Ok(())
}

fn demo_bell_state(style: &NotationStyle) -> Result<()> {
    println!("━━━ Demo 2: Bell State |Φ+⟩ ━━━━━━━━━━━━━━━━━━━━━");
    let mut circuit = Circuit::new(2)?;
    circuit.add_gate(10.0, 0, SingleQubitGate::H)?;
    circuit.add_cnot(20.0, 0, 1)?;
    report(&circuit, style);
    Ok(())
}

fn demo_uniform_superposition(config: &Config) -> Result<()> {
    println!("━━━ Demo 3: Uniform Superposition ({} qubits) ━━━━━", config.qubits);
    let mut circuit = Circuit::new(config.qubits)?;
    for q in 0..config.qubits {
        circuit.add_gate(10.0, q, SingleQubitGate::H)?;
    }
    println!("{}", notation::render_state_with(circuit.state(), &config.notation));
    println!();
    Ok(())
}

fn demo_rx_transition() -> Result<()> {
    println!("━━━ Demo 4: RX(180°) Arrow Path ━━━━━━━━━━━━━━━━━");
    let mut circuit = Circuit::new(1)?;
    let from = circuit.bloch_angles(0)?;
    circuit.add_rotation_degrees(10.0, 0, Axis::X, 180.0)?;
    let to = circuit.bloch_angles(0)?;
    let path = circuit.arc_path_for(0);
    println!("Path: {path:?}");
    for step in 0..=4 {
        let t = step as f64 / 4.0;
        let BlochAngles { theta, phi } = transition(from, to, t, path);
        println!("  t = {t:.2}  θ = {theta:.3}  φ = {phi:+.3}");
    }
    println!();
    Ok(())
}

fn demo_editing(style: &NotationStyle) -> Result<()> {
    println!("━━━ Demo 5: Editing a Circuit ━━━━━━━━━━━━━━━━━━━");
    let mut circuit = Circuit::new(3)?;
    circuit.add_gate(10.0, 0, SingleQubitGate::X)?;
    let (_, target) = circuit.add_cnot(20.0, 0, 2)?;
    circuit.add_swap(30.0, 1, 2)?;
    println!("X q0, CNOT q0 → q2, SWAP q1 ↔ q2:");
    println!("  {}", notation::render_state_vector_with(circuit.state(), style));

    circuit.remove(target)?;
    println!("Removed the CNOT (either marker removes the pair):");
    println!("  {}", notation::render_state_vector_with(circuit.state(), style));

    circuit.set_qubit_count(1)?;
    println!("Shrunk to 1 qubit (two-qubit gates dropped):");
    println!("  {}", notation::render_state_with(circuit.state(), style));
    println!();
    Ok(())
}
