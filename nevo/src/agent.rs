use serde::{Deserialize, Serialize};

/// A container pairing a genotype with its fitness
/// for the current generation.
///
/// The host assigns fitness after evaluating the genotype; population
/// loops only ever read it. A freshly created agent has fitness 0.
///
/// # Examples
/// ```
/// use nevo::Agent;
///
/// let mut agent = Agent::new(vec![1.0, 2.0]);
/// agent.fitness = -3.5;
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Agent<G> {
    pub genotype: G,
    pub fitness: f64,
}

impl<G> Agent<G> {
    /// Wraps a genotype in a new agent with fitness 0.
    pub fn new(genotype: G) -> Agent<G> {
        Agent {
            genotype,
            fitness: 0.0,
        }
    }
}
