//! The NEAT graph genome and its operators.
//!
//! A [`NeatGenome`] encodes how to build a neural network, much like the
//! DNA of an organism; it is not the network itself. Structural mutations
//! grow it over generations, crossover recombines weights, and
//! [`nevo::Buildable::build`] compiles it into a runnable
//! [`crate::networks::NeatPhenotype`].

mod activation;
mod crossover;
mod dot;
mod errors;
mod genome;
mod mutation;
mod serialization;

pub use activation::Activation;
pub use crossover::{NeatCrossoverAsexual, NeatCrossoverSimple};
pub use errors::GenomeValidationError;
pub use genome::{NeatGenome, NeuronId, SynapseClass, SynapseEndpoints, SynapseId};
pub use mutation::NeatMutationStd;
