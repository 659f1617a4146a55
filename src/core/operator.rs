//! Dense square operators over the joint state space.
//!
//! A register of at most six qubits has dimension 64, so the full
//! 2^n × 2^n operator of a single-qubit gate is at most 4096 entries. The
//! engine builds it explicitly by Kronecker products rather than using a
//! strided pair update.
use super::complex::Complex;
use super::gates::{Matrix2x2, Matrix4x4};

#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    dim: usize,
    /// Row-major, `dim * dim` entries.
    entries: Vec<Complex>,
}

impl Operator {
    pub fn identity(dim: usize) -> Self {
        let mut entries = vec![Complex::ZERO; dim * dim];
        for i in 0..dim {
            entries[i * dim + i] = Complex::ONE;
        }
        Self { dim, entries }
    }

    /// Build a `dim × dim` operator entry by entry.
    pub fn from_fn(dim: usize, entry: impl Fn(usize, usize) -> Complex) -> Self {
        let entries = (0..dim * dim).map(|k| entry(k / dim, k % dim)).collect();
        Self { dim, entries }
    }

    pub fn from_2x2(m: &Matrix2x2) -> Self {
        Self {
            dim: 2,
            entries: m.iter().flatten().copied().collect(),
        }
    }

    pub fn from_4x4(m: &Matrix4x4) -> Self {
        Self {
            dim: 4,
            entries: m.iter().flatten().copied().collect(),
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex {
        self.entries[row * self.dim + col]
    }

    /// Kronecker product `self ⊗ rhs`. `self` is the more significant factor.
    pub fn kron(&self, rhs: &Operator) -> Operator {
        let dim = self.dim * rhs.dim;
        let mut entries = vec![Complex::ZERO; dim * dim];
        for ar in 0..self.dim {
            for ac in 0..self.dim {
                let a = self.get(ar, ac);
                if a.norm_sq() == 0.0 {
                    continue;
                }
                for br in 0..rhs.dim {
                    let row = ar * rhs.dim + br;
                    for bc in 0..rhs.dim {
                        let col = ac * rhs.dim + bc;
                        entries[row * dim + col] = a * rhs.get(br, bc);
                    }
                }
            }
        }
        Operator { dim, entries }
    }

    /// Matrix-vector product. Panics when `v.len() != dim`.
    pub fn mul_vec(&self, v: &[Complex]) -> Vec<Complex> {
        assert_eq!(v.len(), self.dim, "operator/vector dimension mismatch");
        self.entries
            .chunks_exact(self.dim)
            .map(|row| row.iter().zip(v).map(|(&m, &x)| m * x).sum())
            .collect()
    }

    /// Matrix product `self · rhs`.
    pub fn mul(&self, rhs: &Operator) -> Operator {
        assert_eq!(self.dim, rhs.dim, "operator dimension mismatch");
        let dim = self.dim;
        let mut entries = vec![Complex::ZERO; dim * dim];
        for r in 0..dim {
            for k in 0..dim {
                let a = self.get(r, k);
                if a.norm_sq() == 0.0 {
                    continue;
                }
                for c in 0..dim {
                    entries[r * dim + c] += a * rhs.get(k, c);
                }
            }
        }
        Operator { dim, entries }
    }

    /// Conjugate transpose.
    pub fn adjoint(&self) -> Operator {
        let dim = self.dim;
        let mut entries = vec![Complex::ZERO; dim * dim];
        for r in 0..dim {
            for c in 0..dim {
                entries[c * dim + r] = self.get(r, c).conj();
            }
        }
        Operator { dim, entries }
    }

    /// U·U† ≈ I within `tol` per entry.
    pub fn is_unitary(&self, tol: f64) -> bool {
        let product = self.mul(&self.adjoint());
        let id = Operator::identity(self.dim);
        product
            .entries
            .iter()
            .zip(&id.entries)
            .all(|(a, b)| a.approx_eq(*b, tol))
    }

    pub fn approx_eq(&self, other: &Operator, tol: f64) -> bool {
        self.dim == other.dim
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|(a, b)| a.approx_eq(*b, tol))
    }
}
