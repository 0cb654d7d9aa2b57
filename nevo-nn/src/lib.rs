//! Neural-network genotypes for the `nevo` crate.
//!
//! The centrepiece is [`genomics::NeatGenome`], a NEAT-style graph
//! genotype: neurons and synapses addressed by globally unique ids, an
//! ordering invariant that keeps forward evaluation single-pass, and
//! structural mutation operators that grow topology over generations.
//! Genomes are compiled into [`networks::NeatPhenotype`]s for evaluation
//! and serialize to a stable JSON shape.
//!
//! A fixed-topology [`networks::DenseGenotype`] is also provided for
//! problems where only weights need to evolve.
//!
//! # Example usage: building and evaluating a minimal genome
//! ```
//! use nevo::{Buildable, Counter, Forwarder};
//! use nevo_nn::genomics::{Activation, NeatGenome};
//!
//! let counter = Counter::new();
//! let genome = NeatGenome::new(&counter, 2, 1, Activation::Tanh);
//!
//! // No synapses yet: the output neuron sees only tanh(0).
//! let mut network = genome.build();
//! assert_eq!(network.forward(&[1.0, -1.0]), vec![0.0]);
//! ```

pub mod genomics;
pub mod networks;
