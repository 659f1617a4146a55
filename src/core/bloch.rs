//! Bloch angle extraction.
//!
//! Reduces the joint state to a (θ, φ) pair per qubit. For qubit q the
//! amplitudes are split into two buckets by q's bit, each bucket is summed as
//! complex numbers, and the pair (α, β) is renormalized:
//!
//! ```text
//! α = Σ aᵢ  (bit q of i = 0)        θ = 2·acos(|α|)
//! β = Σ aᵢ  (bit q of i = 1)        φ = arg β − arg α
//! ```
//!
//! This is a projection, not an inverse. For an entangled register the pair
//! it produces is a visual approximation only: a Bell state's qubits each
//! come out on the equator even though neither qubit has a pure state.
use super::complex::Complex;
use super::state::StateVector;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// |α| below this is treated as zero when computing φ.
const ZERO_AMPLITUDE: f64 = 1e-12;

/// Polar (θ ∈ [0, π]) and azimuthal (φ ∈ [0, 2π)) angle of one qubit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BlochAngles {
    pub theta: f64,
    pub phi: f64,
}

impl BlochAngles {
    pub const ZERO: BlochAngles = BlochAngles { theta: 0.0, phi: 0.0 };

    pub fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// NaN components become 0 and φ is wrapped into [0, 2π).
    pub fn wrapped(self) -> Self {
        let theta = if self.theta.is_nan() { 0.0 } else { self.theta };
        let phi = if self.phi.is_finite() { wrap_phase(self.phi) } else { 0.0 };
        Self { theta, phi }
    }

    /// Unit vector (x, y, z) = (sinθ·cosφ, sinθ·sinφ, cosθ).
    pub fn to_cartesian(self) -> [f64; 3] {
        let (sin_t, cos_t) = self.theta.sin_cos();
        let (sin_p, cos_p) = self.phi.sin_cos();
        [sin_t * cos_p, sin_t * sin_p, cos_t]
    }

    /// Amplitudes (cos(θ/2), e^(iφ)·sin(θ/2)) of the pure state these angles
    /// describe.
    pub fn amplitudes(self) -> [Complex; 2] {
        let (sin, cos) = (self.theta / 2.0).sin_cos();
        [Complex::real(cos), Complex::from_polar(sin, self.phi)]
    }

    /// The single-qubit state these angles describe.
    pub fn to_state(self) -> StateVector {
        StateVector::from_amplitudes(self.amplitudes().to_vec())
    }
}

/// Map any finite angle into [0, 2π).
pub fn wrap_phase(phi: f64) -> f64 {
    let wrapped = phi.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Bloch angles of `qubit`, with φ wrapped into [0, 2π).
pub fn bloch_angles(state: &StateVector, qubit: usize) -> BlochAngles {
    let n = state.num_qubits();
    assert!(qubit < n, "qubit {qubit} out of range for {n} qubits");

    let (alpha, beta) = if n == 1 {
        (state.amplitude(0), state.amplitude(1))
    } else {
        let mut alpha = Complex::ZERO;
        let mut beta = Complex::ZERO;
        for (i, &amp) in state.amplitudes().iter().enumerate() {
            if StateVector::bit(i, qubit, n) {
                beta += amp;
            } else {
                alpha += amp;
            }
        }
        let norm = (alpha.norm_sq() + beta.norm_sq()).sqrt();
        if norm == 0.0 {
            // The buckets cancelled completely; there is no direction to
            // report, so fall back to the north pole.
            return BlochAngles::ZERO;
        }
        (alpha / norm, beta / norm)
    };

    angles_from_amplitudes(alpha, beta).wrapped()
}

/// Bloch angles for every qubit, in qubit order.
pub fn all_bloch_angles(state: &StateVector) -> Vec<BlochAngles> {
    (0..state.num_qubits()).map(|q| bloch_angles(state, q)).collect()
}

fn angles_from_amplitudes(alpha: Complex, beta: Complex) -> BlochAngles {
    let theta = 2.0 * alpha.norm().clamp(0.0, 1.0).acos();
    let phi = if alpha.norm() < ZERO_AMPLITUDE {
        0.0
    } else {
        beta.arg() - alpha.arg()
    };
    BlochAngles { theta, phi }
}

// ── Arrow transitions ─────────────────────────────────────────────────────

/// How an arrow travels between two Bloch points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArcPath {
    /// θ linear, φ along the shorter way round the equator.
    Shortest,
    /// φ held in the RX rotation plane (−π/2) en route, θ linear; ends on the target.
    XRotation,
}

/// θ differences smaller than this snap straight to the target.
const THETA_SNAP: f64 = 0.01;

/// Point on the path from `from` to `to` at `progress` ∈ [0, 1].
///
/// Both paths return exactly `to` at `progress == 1`. With
/// `ArcPath::XRotation` φ is held at −π/2 only while `progress < 1`.
pub fn transition(from: BlochAngles, to: BlochAngles, progress: f64, path: ArcPath) -> BlochAngles {
    let t = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    let lerp = |a: f64, b: f64| if t >= 1.0 { b } else { a + (b - a) * t };

    let (theta, phi) = match path {
        ArcPath::XRotation if t >= 1.0 => (to.theta, to.phi),
        ArcPath::XRotation => (lerp(from.theta, to.theta), -FRAC_PI_2),
        ArcPath::Shortest => {
            let theta = if (from.theta - to.theta).abs() < THETA_SNAP {
                to.theta
            } else {
                lerp(from.theta, to.theta)
            };
            let mut delta = to.phi - from.phi;
            if delta > PI {
                delta -= TAU;
            } else if delta < -PI {
                delta += TAU;
            }
            let phi = if t >= 1.0 { to.phi } else { from.phi + delta * t };
            (theta, phi)
        }
    };

    BlochAngles {
        theta: if theta.is_nan() { 0.0 } else { theta },
        phi: if phi.is_nan() { 0.0 } else { phi },
    }
}
