//! Seam traits between genotypes and the hosts that evaluate them.
//!
//! A genotype encodes how to build some evaluable artifact; it is not the
//! artifact itself. Hosts compile genotypes with [`Buildable::build`] and
//! run the result through [`Forwarder::forward`]. Genotypes that can check
//! their own structural invariants also implement [`Validatable`], which
//! test harnesses call after every mutation step.

use std::error::Error;

/// A network-like value that maps an input vector to an output vector.
///
/// `forward` may carry internal state between calls (recurrent networks
/// do); implementations that need a clean slate expose their own reset
/// mechanism.
pub trait Forwarder {
    /// Propagates `inputs` through the network and returns the outputs.
    ///
    /// # Panics
    /// Implementations panic if `inputs` has the wrong length: passing a
    /// mis-sized input vector is a programmer error, not a recoverable
    /// condition.
    fn forward(&mut self, inputs: &[f64]) -> Vec<f64>;
}

/// A genotype that can be compiled into an executable phenotype.
///
/// The phenotype owns all of its memory: building is a snapshot, and
/// mutating the genotype afterwards does not affect networks already
/// built from it.
pub trait Buildable {
    type Phenotype: Forwarder;

    /// Compiles this genotype into a phenotype.
    fn build(&self) -> Self::Phenotype;
}

/// A genotype that can exhaustively check its own structural invariants.
///
/// `validate` should never fail during normal operation; a failure means
/// either a bug in this crate or a hand-constructed invalid genotype. It
/// is intended for test harnesses and for checking freshly deserialized
/// data.
pub trait Validatable {
    type Error: Error;

    /// Returns `Ok(())` if every structural invariant holds, or a
    /// descriptive error naming the first violation found.
    fn validate(&self) -> Result<(), Self::Error>;
}
