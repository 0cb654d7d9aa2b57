//! Generational loops: flat, hill-climbing and speciated populations.
//!
//! All populations share one contract: the host scores every agent
//! returned by [`Population::all_mut`], then calls
//! [`Population::next_generation`] to produce the successor generation.
//! Scoring and stepping alternate; a population never evaluates fitness
//! itself.

mod hill_climber;
mod simple;
mod speciated;

pub use hill_climber::HillClimberPopulation;
pub use simple::SimplePopulation;
pub use speciated::{SpeciatedPopulation, SpeciesId};

use crate::Agent;

/// A pool of agents that can produce its own successor generation.
///
/// `next_generation` consumes the population: the selection and
/// reproduction strategies move into the successor, mirroring the fact
/// that exactly one generation is live at a time.
pub trait Population<G> {
    /// Produces the next generation by selecting parents and reproducing.
    ///
    /// Fitness must already have been assigned to every agent.
    fn next_generation(self) -> Self
    where
        Self: Sized;

    /// Every agent in the population, in no particular order.
    fn all(&self) -> Vec<&Agent<G>>;

    /// Mutable access to every agent, for fitness assignment.
    fn all_mut(&mut self) -> Vec<&mut Agent<G>>;
}
