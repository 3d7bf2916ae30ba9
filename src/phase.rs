/// Determines the power of `i` in the product of two single-qubit Paulis.
///
/// For example, `X * Y = iZ`, so this returns `+1` for `X` then `Y`.
///
/// Each Pauli is encoded as an `(x, z)` bit pair:
///
/// ```text
/// x z | Pauli
/// ----+-------
/// 0 0 | I
/// 1 0 | X
/// 1 1 | Y
/// 0 1 | Z
/// ```
pub fn pauli_product_phase(x1: bool, z1: bool, x2: bool, z2: bool) -> i32 {
    // Analyze by case over the first gate, same four-way split Aaronson and
    // Gottesman use: each row of the table is a single Pauli multiplying all
    // four possibilities for the second.
    if x1 && z1 {
        // Y * I = Y   (no phase)
        // Y * X = -iZ (-1)
        // Y * Y = I   (no phase)
        // Y * Z = +iX (+1)
        i32::from(z2) - i32::from(x2)
    } else if x1 {
        // X * I = X    (no phase)
        // X * X = I    (no phase)
        // X * Y = iZ   (+1)
        // X * Z = -iY  (-1)
        if z2 {
            2 * i32::from(x2) - 1
        } else {
            0
        }
    } else if z1 {
        // Z * I = Z    (no phase)
        // Z * X = -iY  (+1)
        // Z * Y = iX   (-1)
        // Z * Z = I    (no phase)
        if x2 {
            1 - 2 * i32::from(z2)
        } else {
            0
        }
    } else {
        // Identity commutes with everything and contributes no phase.
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Pauli encodings used by the 4x4 reference table in the module docs.
    const I: (bool, bool) = (false, false);
    const X: (bool, bool) = (true, false);
    const Y: (bool, bool) = (true, true);
    const Z: (bool, bool) = (false, true);

    fn phase_of(p1: (bool, bool), p2: (bool, bool)) -> i32 {
        pauli_product_phase(p1.0, p1.1, p2.0, p2.1)
    }

    #[test]
    fn matches_the_sixteen_entry_reference_table() {
        assert_eq!(phase_of(I, I), 0);
        assert_eq!(phase_of(I, X), 0);
        assert_eq!(phase_of(I, Y), 0);
        assert_eq!(phase_of(I, Z), 0);

        assert_eq!(phase_of(X, I), 0);
        assert_eq!(phase_of(X, X), 0);
        assert_eq!(phase_of(X, Y), 1);
        assert_eq!(phase_of(X, Z), -1);

        assert_eq!(phase_of(Y, I), 0);
        assert_eq!(phase_of(Y, X), -1);
        assert_eq!(phase_of(Y, Y), 0);
        assert_eq!(phase_of(Y, Z), 1);

        assert_eq!(phase_of(Z, I), 0);
        assert_eq!(phase_of(Z, X), 1);
        assert_eq!(phase_of(Z, Y), -1);
        assert_eq!(phase_of(Z, Z), 0);
    }

    #[test]
    fn identity_is_always_phase_free() {
        for p in [I, X, Y, Z] {
            assert_eq!(phase_of(I, p), 0);
        }
    }
}
