//! A generic toolkit for evolutionary computation.
//!
//! The crate is built around a small set of seams: a genotype is any type
//! that the host can score; [`Selection`] strategies pick parents from a
//! fitness-tagged pool of [`Agent`]s; [`Crossover`] and [`Mutation`]
//! strategies combine and perturb genotypes, usually composed into a
//! [`TwoPhaseReproduction`]; and a [`Population`] drives whole generations
//! of select-reproduce cycles. Network-shaped genotypes (the NEAT graph
//! genome and a dense feed-forward genome) are supplied by the companion
//! `nevo-nn` crate through the [`Buildable`] and [`Forwarder`] traits.
//!
//! Structural identifiers are issued by a single process-wide [`Counter`],
//! so every neuron, synapse and species created over a run has a globally
//! unique id.
//!
//! # Example usage: evolving an array of floats towards a target sum
//! ```
//! use nevo::genomes::{
//!     ArrayCrossoverKPoint, ArrayGenotype, ArrayMutationStd, NormalGenerator,
//! };
//! use nevo::{Population, SimplePopulation, TournamentSelection, TwoPhaseReproduction};
//!
//! // Fitness is maximal (zero) when the genotype's values sum to 10.
//! fn fitness(genotype: &ArrayGenotype<f64>) -> f64 {
//!     -(10.0 - genotype.values.iter().sum::<f64>()).abs()
//! }
//!
//! let generator = NormalGenerator::new(0.0, 0.5);
//! let selection = TournamentSelection::new(3);
//! let reproduction = TwoPhaseReproduction::new(
//!     ArrayCrossoverKPoint { k: 2 },
//!     ArrayMutationStd {
//!         mutate_probability: 0.1,
//!         mutate_std: 0.05,
//!     },
//! );
//!
//! let mut population =
//!     SimplePopulation::new(|| ArrayGenotype::random(10, &generator), 50, selection, reproduction);
//!
//! for _ in 0..10 {
//!     for agent in population.all_mut() {
//!         agent.fitness = fitness(&agent.genotype);
//!     }
//!     population = population.next_generation();
//! }
//! ```

mod agent;
mod counter;
mod genome;
pub mod genomes;
pub mod logging;
mod populations;
mod reproduction;
pub mod rng;
mod selection;

pub use agent::*;
pub use counter::*;
pub use genome::*;
pub use populations::*;
pub use reproduction::*;
pub use selection::*;
