use thiserror::Error;

/// The one recoverable runtime error at the tableau's public interface.
///
/// Out-of-range qubit indices, aliased CNOT operands, and out-of-range
/// biases are programmer-contract violations and panic instead of
/// returning this type -- see the crate-level docs.
#[derive(Error, Debug)]
pub enum TableauError {
    /// The injected random source could not produce the bits needed for a
    /// random-branch measurement.
    #[error("random source exhausted while drawing a measurement bit: {0}")]
    RandomSource(String),
}
