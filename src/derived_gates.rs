//! Derived Clifford gates and basis-change measurements.
//!
//! Everything here is a thin, fixed sequence of [`Tableau::cnot`],
//! [`Tableau::hadamard`], [`Tableau::phase`], and [`Tableau::measure`] --
//! no new tableau algebra. The sequences are transliterated from
//! `original_source/stabilizer_sim/stabilizer_sim_extra.py`, the `StabilizerSim`
//! convenience subclass this spec's derived-gate list was distilled from.

use rand::RngCore;

use crate::error::TableauError;
use crate::result::MeasureResult;
use crate::tableau::Tableau;

impl<R: RngCore> Tableau<R> {
    /// Pauli X.
    pub fn x(&mut self, a: usize) {
        self.hadamard(a);
        self.phase(a);
        self.phase(a);
        self.hadamard(a);
    }

    /// Pauli Y.
    pub fn y(&mut self, a: usize) {
        self.phase(a);
        self.phase(a);
        self.hadamard(a);
        self.phase(a);
        self.phase(a);
        self.hadamard(a);
    }

    /// Pauli Z.
    pub fn z(&mut self, a: usize) {
        self.phase(a);
        self.phase(a);
    }

    /// +90 degree rotation around the X axis.
    pub fn sqrt_x(&mut self, a: usize) {
        self.hadamard(a);
        self.phase(a);
        self.hadamard(a);
    }

    /// -90 degree rotation around the X axis.
    pub fn sqrt_x_dag(&mut self, a: usize) {
        self.hadamard(a);
        self.phase(a);
        self.phase(a);
        self.phase(a);
        self.hadamard(a);
    }

    /// +90 degree rotation around the Z axis. Alias for [`Tableau::phase`].
    pub fn sqrt_z(&mut self, a: usize) {
        self.phase(a);
    }

    /// -90 degree rotation around the Z axis.
    pub fn sqrt_z_dag(&mut self, a: usize) {
        self.phase(a);
        self.phase(a);
        self.phase(a);
    }

    /// 180 degree rotation around X+Z. Alias for [`Tableau::hadamard`].
    pub fn h_xz(&mut self, a: usize) {
        self.hadamard(a);
    }

    /// 180 degree rotation around Y+Z.
    pub fn h_yz(&mut self, a: usize) {
        self.hadamard(a);
        self.phase(a);
        self.hadamard(a);
        self.phase(a);
        self.phase(a);
    }

    /// 180 degree rotation around X+Y.
    pub fn h_xy(&mut self, a: usize) {
        self.hadamard(a);
        self.phase(a);
        self.phase(a);
        self.hadamard(a);
        self.phase(a);
    }

    /// X basis measurement.
    ///
    /// # Errors
    /// See [`Tableau::measure`].
    pub fn measure_x(&mut self, a: usize, bias: f64) -> Result<MeasureResult, TableauError> {
        self.hadamard(a);
        let v = self.measure(a, bias)?;
        self.hadamard(a);
        Ok(v)
    }

    /// Y basis measurement.
    ///
    /// # Errors
    /// See [`Tableau::measure`].
    pub fn measure_y(&mut self, a: usize, bias: f64) -> Result<MeasureResult, TableauError> {
        self.h_yz(a);
        let v = self.measure(a, bias)?;
        self.h_yz(a);
        Ok(v)
    }

    /// Z basis measurement. Alias for [`Tableau::measure`].
    ///
    /// # Errors
    /// See [`Tableau::measure`].
    pub fn measure_z(&mut self, a: usize, bias: f64) -> Result<MeasureResult, TableauError> {
        self.measure(a, bias)
    }

    /// X basis measurement followed by a reset to the `+1` eigenstate.
    ///
    /// # Errors
    /// See [`Tableau::measure`].
    pub fn measure_x_and_reset(
        &mut self,
        a: usize,
        bias: f64,
    ) -> Result<MeasureResult, TableauError> {
        self.hadamard(a);
        self.measure_z_and_reset(a, bias)
    }

    /// Y basis measurement followed by a reset to the `+1` eigenstate.
    ///
    /// # Errors
    /// See [`Tableau::measure`].
    pub fn measure_y_and_reset(
        &mut self,
        a: usize,
        bias: f64,
    ) -> Result<MeasureResult, TableauError> {
        self.h_yz(a);
        self.measure_z_and_reset(a, bias)
    }

    /// Z basis measurement followed by a reset to `|0>`.
    ///
    /// # Errors
    /// See [`Tableau::measure`].
    pub fn measure_z_and_reset(
        &mut self,
        a: usize,
        bias: f64,
    ) -> Result<MeasureResult, TableauError> {
        let v = self.measure(a, bias)?;
        if v.value {
            self.x(a);
        }
        Ok(v)
    }

    /// An X gate controlled by an X-axis control.
    pub fn xnot(&mut self, a: usize, b: usize) {
        self.hadamard(a);
        self.cnot(a, b);
        self.hadamard(a);
    }

    /// A Z gate controlled by a Z-axis control.
    pub fn cz(&mut self, a: usize, b: usize) {
        self.hadamard(b);
        self.cnot(a, b);
        self.hadamard(b);
    }
}

#[cfg(test)]
mod tests {
    use crate::result::MeasureResult;
    use crate::tableau::Tableau;

    #[test]
    fn x_flips_a_ground_state_qubit() {
        let mut t = Tableau::with_seed(1, 0);
        t.x(0);
        assert!(t.measure(0, 0.5).unwrap().determined);
        assert!(t.measure(0, 0.5).unwrap().value);
    }

    #[test]
    fn z_leaves_a_ground_state_qubit_unchanged() {
        let mut t = Tableau::with_seed(1, 0);
        t.z(0);
        let v = t.measure(0, 0.5).unwrap();
        assert!(v.determined);
        assert!(!v.value);
    }

    #[test]
    fn cz_is_its_own_inverse() {
        // CZ is diagonal in the computational basis, so CZ;CZ is identity
        // regardless of the state it's applied to.
        let mut t = Tableau::with_seed(2, 7);
        t.hadamard(0);
        t.hadamard(1);
        t.cz(0, 1);
        t.cz(0, 1);

        let mut baseline = Tableau::with_seed(2, 7);
        baseline.hadamard(0);
        baseline.hadamard(1);

        assert_eq!(t.format(), baseline.format());
    }

    #[test]
    fn measure_x_reports_the_plus_eigenstate_deterministically() {
        let mut t = Tableau::with_seed(1, 3);
        t.hadamard(0);
        let v = t.measure_x(0, 0.5).unwrap();
        assert!(v.determined);
        assert!(!v.value);
    }

    #[test]
    fn sqrt_x_applied_twice_is_a_pauli_x() {
        // sqrt_x;sqrt_x == H;S;H;H;S;H == H;S;S;H == H;Z;H == X (the middle
        // H;H cancels), so two applications flip |0> to |1> deterministically.
        let mut t = Tableau::with_seed(1, 0);
        t.sqrt_x(0);
        t.sqrt_x(0);
        let v = t.measure(0, 0.5).unwrap();
        assert!(v.determined);
        assert!(v.value);
    }

    #[test]
    fn measure_z_and_reset_always_leaves_the_ground_state() {
        let mut t = Tableau::with_seed(1, 0);
        t.x(0);
        let v = t.measure_z_and_reset(0, 0.5).unwrap();
        assert!(v.determined);
        assert!(v.value);
        // Having reset, a fresh measurement must come back to |0>.
        let after = t.measure(0, 0.5).unwrap();
        assert_eq!(after, MeasureResult::new(false, true));
    }
}
