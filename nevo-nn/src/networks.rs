//! Runnable networks: the compiled NEAT phenotype and a fixed-topology
//! dense network.

mod dense;
mod phenotype;

pub use dense::{DenseCrossoverUniform, DenseGenotype, DenseMutationStd};
pub use phenotype::NeatPhenotype;
