use std::fmt;

/// The outcome of a computational-basis measurement.
///
/// `value` is the measured bit. `determined` is `true` when the outcome
/// was forced by the current stabilizer group (no random bit consumed)
/// and `false` when a fresh random bit was drawn.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct MeasureResult {
    pub value: bool,
    pub determined: bool,
}

impl MeasureResult {
    pub fn new(value: bool, determined: bool) -> Self {
        MeasureResult { value, determined }
    }

    /// The measured bit. Rust has no `__bool__` hook, so truthiness is
    /// exposed through this accessor instead of a conversion trait.
    pub fn value(&self) -> bool {
        self.value
    }
}

impl PartialEq<bool> for MeasureResult {
    fn eq(&self, other: &bool) -> bool {
        self.value == *other
    }
}

impl fmt::Display for MeasureResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.value,
            if self.determined { "determined" } else { "random" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_checks_both_fields_against_another_result() {
        let a = MeasureResult::new(true, false);
        let b = MeasureResult::new(true, true);
        assert_eq!(a, MeasureResult::new(true, false));
        assert_ne!(a, b);
    }

    #[test]
    fn equality_against_a_bare_bool_ignores_determinacy() {
        let random_true = MeasureResult::new(true, false);
        let determined_true = MeasureResult::new(true, true);
        assert_eq!(random_true, true);
        assert_eq!(determined_true, true);
        assert_ne!(random_true, false);
    }

    #[test]
    fn display_matches_the_reference_format() {
        assert_eq!(MeasureResult::new(true, false).to_string(), "true (random)");
        assert_eq!(
            MeasureResult::new(false, true).to_string(),
            "false (determined)"
        );
    }
}
