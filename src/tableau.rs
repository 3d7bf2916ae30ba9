use std::fmt;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::error::TableauError;
use crate::phase::pauli_product_phase;
use crate::result::MeasureResult;

// One row of the tableau: a signed n-qubit Pauli operator. The teacher kept
// this as a `TableauGeneratorRow<const N: usize>` with fixed-size arrays;
// here `n` is a runtime value, so the bit-pair columns are `Vec<bool>`.
#[derive(Debug, Clone)]
struct Row {
    sign: bool,
    x: Vec<bool>,
    z: Vec<bool>,
}

impl Row {
    fn zero(n: usize) -> Self {
        Row {
            sign: false,
            x: vec![false; n],
            z: vec![false; n],
        }
    }
}

/// An n-qubit stabilizer tableau, updated in place by Clifford gates and
/// computational-basis measurement (the Aaronson-Gottesman CHP algorithm).
///
/// Rows `[0, n)` are destabilizers, rows `[n, 2n)` are stabilizers, and row
/// `2n` is a scratch row used only transiently by a determined measurement.
/// `R` is the random-bit source consulted by `measure` for the random
/// branch; it defaults to `rand::rngs::StdRng` but any `RngCore`
/// implementor can be substituted with [`Tableau::with_rng`].
#[derive(Debug, Clone)]
pub struct Tableau<R = StdRng> {
    n: usize,
    rows: Vec<Row>,
    rng: R,
}

impl Tableau<StdRng> {
    /// Creates a new tableau of `n` qubits in the `|0...0>` state, seeded
    /// from OS entropy.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn new(n: usize) -> Self {
        Tableau::with_rng(n, StdRng::from_entropy())
    }

    /// Like [`Tableau::new`], but seeds the default RNG deterministically so
    /// runs are reproducible (the teacher's `seeded()`/`new(seed)` pair,
    /// generalized to arbitrary `n`).
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn with_seed(n: usize, seed: u64) -> Self {
        Tableau::with_rng(n, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Tableau<R> {
    /// Creates a new tableau of `n` qubits in the `|0...0>` state, drawing
    /// measurement randomness from the supplied `rng`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn with_rng(n: usize, rng: R) -> Self {
        assert!(n >= 1, "tableau requires at least one qubit, got {n}");

        let mut rows = Vec::with_capacity(2 * n + 1);
        for _ in 0..=2 * n {
            rows.push(Row::zero(n));
        }
        // |0...0>: stabilizer row n+i is +Z_i, destabilizer row i is +X_i.
        for i in 0..n {
            rows[i].x[i] = true;
            rows[n + i].z[i] = true;
        }

        Tableau { n, rows, rng }
    }

    /// The number of qubits this tableau tracks.
    pub fn num_qubits(&self) -> usize {
        self.n
    }

    fn check_qubit(&self, q: usize) {
        assert!(
            q < self.n,
            "qubit index {q} out of range for {} qubits",
            self.n
        );
    }

    /// Applies a CNOT gate with the given control and target qubits.
    ///
    /// # Panics
    /// Panics if `control` or `target` is out of range, or if
    /// `control == target`.
    pub fn cnot(&mut self, control: usize, target: usize) {
        self.check_qubit(control);
        self.check_qubit(target);
        assert!(
            control != target,
            "cnot control and target must differ, got {control}"
        );

        for row in &mut self.rows {
            // Snapshot the pre-update bits: the sign update depends on all
            // four, and must be computed before the column XORs below
            // change the operands out from under it.
            let xc = row.x[control];
            let zt = row.z[target];
            let xt = row.x[target];
            let zc = row.z[control];

            row.sign ^= xc && zt && (xt ^ zc ^ true);
            row.x[target] ^= xc;
            row.z[control] ^= zt;
        }
    }

    /// Applies a Hadamard gate to `qubit`.
    ///
    /// # Panics
    /// Panics if `qubit` is out of range.
    pub fn hadamard(&mut self, qubit: usize) {
        self.check_qubit(qubit);
        for row in &mut self.rows {
            let xq = row.x[qubit];
            let zq = row.z[qubit];
            row.sign ^= xq && zq;
            row.x[qubit] = zq;
            row.z[qubit] = xq;
        }
    }

    /// Applies a phase (S) gate to `qubit`.
    ///
    /// # Panics
    /// Panics if `qubit` is out of range.
    pub fn phase(&mut self, qubit: usize) {
        self.check_qubit(qubit);
        for row in &mut self.rows {
            row.sign ^= row.x[qubit] && row.z[qubit];
            row.z[qubit] ^= row.x[qubit];
        }
    }

    /// Multiplies row `k`'s Pauli into row `i`, preserving the tableau's
    /// commutation/sign invariants on row `i`.
    ///
    /// # Panics
    /// Panics (an implementer bug, not a caller error — see the crate-level
    /// error handling docs) if rows `i` and `k` do not commute.
    fn row_mult(&mut self, i: usize, k: usize) {
        let mut total = 0i32;
        for j in 0..self.n {
            total += pauli_product_phase(
                self.rows[i].x[j],
                self.rows[i].z[j],
                self.rows[k].x[j],
                self.rows[k].z[j],
            );
        }
        let total = total.rem_euclid(4);
        if total % 2 != 0 {
            let dump = self.to_string();
            log::error!(
                "rows {i} and {k} do not commute (phase sum {total} mod 4); tableau:\n{dump}"
            );
            panic!(
                "row_mult invariant violated: rows {i} and {k} do not commute \
                 (phase sum {total} mod 4)\n{dump}"
            );
        }
        let parity = (total / 2) % 2 == 1;
        self.rows[i].sign ^= self.rows[k].sign ^ parity;
        for j in 0..self.n {
            self.rows[i].x[j] ^= self.rows[k].x[j];
            self.rows[i].z[j] ^= self.rows[k].z[j];
        }
    }

    /// Performs a computational-basis (Z-basis) measurement of `qubit`.
    ///
    /// `bias` is the probability that a *random*-branch outcome is `true`;
    /// pass `0.5` for a fair coin. Determined-branch outcomes are forced by
    /// the stabilizer group and ignore `bias` entirely.
    ///
    /// # Panics
    /// Panics if `qubit` is out of range or `bias` is outside `[0, 1]`.
    ///
    /// # Errors
    /// Returns [`TableauError::RandomSource`] if the injected RNG fails to
    /// produce the bits needed for a random-branch measurement.
    pub fn measure(&mut self, qubit: usize, bias: f64) -> Result<MeasureResult, TableauError> {
        self.check_qubit(qubit);
        assert!(
            (0.0..=1.0).contains(&bias),
            "bias must be in [0, 1], got {bias}"
        );

        let n = self.n;
        let anticommuting = (n..2 * n).find(|&row| self.rows[row].x[qubit]);

        match anticommuting {
            Some(p) => {
                log::trace!(
                    "measure(qubit={qubit}): random branch, anticommuting stabilizer row {p}"
                );
                self.measure_random(qubit, p, bias)
            }
            None => {
                log::trace!("measure(qubit={qubit}): determined branch");
                Ok(self.measure_determined(qubit))
            }
        }
    }

    // Random branch: some stabilizer anticommutes with Z_qubit. `p` is the
    // smallest such stabilizer row index (deterministic tie-break).
    //
    // The row-update cascade multiplies the *pre-collapse* stabilizer
    // snapshot -- preserved at the destabilizer slot `p - n` in the line
    // below -- into every other anticommuting row, not the freshly written
    // +-Z_qubit row at `p`. See SPEC_FULL.md section 9 for why: this
    // matches Aaronson & Gottesman's published algorithm (and the Python
    // reference this crate is modeled on) rather than a naive reading of
    // "multiply in row p".
    fn measure_random(
        &mut self,
        qubit: usize,
        p: usize,
        bias: f64,
    ) -> Result<MeasureResult, TableauError> {
        let n = self.n;
        let destabilizer = p - n;

        self.rows[destabilizer] = self.rows[p].clone();
        self.rows[p] = Row::zero(n);
        self.rows[p].z[qubit] = true;

        self.rows[p].sign = draw_bit(&mut self.rng, bias)?;

        for i in 0..2 * n {
            if i != p && i != destabilizer && self.rows[i].x[qubit] {
                self.row_mult(i, destabilizer);
            }
        }

        Ok(MeasureResult::new(self.rows[p].sign, false))
    }

    // Determined branch: no stabilizer anticommutes with Z_qubit, so its
    // eigenvalue is forced. Accumulate the subset of stabilizers whose
    // paired destabilizer anticommutes with Z_qubit into the scratch row;
    // its sign is the measurement outcome.
    fn measure_determined(&mut self, qubit: usize) -> MeasureResult {
        let n = self.n;
        let scratch = 2 * n;
        self.rows[scratch] = Row::zero(n);
        for i in 0..n {
            if self.rows[i].x[qubit] {
                self.row_mult(scratch, i + n);
            }
        }
        MeasureResult::new(self.rows[scratch].sign, true)
    }

    /// Renders the tableau the same way [`std::fmt::Display`] does. Spelled
    /// out as its own method because the spec's interface table names it
    /// `format()`.
    pub fn format(&self) -> String {
        self.to_string()
    }
}

fn draw_bit<R: RngCore>(rng: &mut R, bias: f64) -> Result<bool, TableauError> {
    // Draw a uniform real in [0, 1) and report `true` iff it lands below
    // `bias`, so bias=0 always yields false and bias=1 always yields true.
    let mut buf = [0u8; 8];
    rng.try_fill_bytes(&mut buf)
        .map_err(|e| TableauError::RandomSource(e.to_string()))?;
    let draw = (u64::from_le_bytes(buf) as f64) / (u64::MAX as f64 + 1.0);
    Ok(draw < bias)
}

fn pauli_cell(x: bool, z: bool) -> char {
    match (x, z) {
        (false, false) => '.',
        (true, false) => 'X',
        (false, true) => 'Z',
        (true, true) => 'Y',
    }
}

impl<R> fmt::Display for Tableau<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let render_row = |row: &Row| -> String {
            let mut line = String::with_capacity(self.n + 1);
            line.push(if row.sign { '-' } else { '+' });
            for j in 0..self.n {
                line.push(pauli_cell(row.x[j], row.z[j]));
            }
            line
        };

        let mut lines = Vec::with_capacity(2 * self.n + 1);
        for row in &self.rows[self.n..2 * self.n] {
            lines.push(render_row(row));
        }
        lines.push("-".repeat(self.n + 1));
        for row in &self.rows[0..self.n] {
            lines.push(render_row(row));
        }

        write!(f, "{}", lines.join("\n"))
    }
}
