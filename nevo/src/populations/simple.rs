use crate::{select_genotypes, Agent, Population, Reproduction, Selection};

/// A single flat pool of agents.
///
/// Each generation, the whole pool is handed to the selection strategy
/// and an entirely new pool of the same size is bred from it.
///
/// # Examples
/// ```
/// use nevo::genomes::{ArrayCrossoverUniform, ArrayGenotype, ArrayMutationStd, NormalGenerator};
/// use nevo::{Population, SimplePopulation, TournamentSelection, TwoPhaseReproduction};
///
/// let generator = NormalGenerator::new(0.0, 1.0);
/// let mut population = SimplePopulation::new(
///     || ArrayGenotype::random(4, &generator),
///     20,
///     TournamentSelection::new(3),
///     TwoPhaseReproduction::new(
///         ArrayCrossoverUniform,
///         ArrayMutationStd { mutate_probability: 0.2, mutate_std: 0.1 },
///     ),
/// );
///
/// assert_eq!(population.all().len(), 20);
/// population = population.next_generation();
/// assert_eq!(population.all().len(), 20);
/// ```
pub struct SimplePopulation<G, S, R> {
    agents: Vec<Agent<G>>,
    selection: S,
    reproduction: R,
}

impl<G, S, R> SimplePopulation<G, S, R>
where
    S: Selection<G>,
    R: Reproduction<G>,
{
    /// Creates a population of `count` agents, each with a fresh genotype
    /// from `new_genotype`.
    ///
    /// # Panics
    /// Panics if `count` is zero.
    pub fn new(
        mut new_genotype: impl FnMut() -> G,
        count: usize,
        selection: S,
        reproduction: R,
    ) -> SimplePopulation<G, S, R> {
        assert!(count >= 1, "cannot create a population with no members");
        SimplePopulation {
            agents: (0..count).map(|_| Agent::new(new_genotype())).collect(),
            selection,
            reproduction,
        }
    }

    /// Creates a population over an existing pool of agents, keeping
    /// their fitness values. Useful for changing strategies mid-run.
    ///
    /// # Panics
    /// Panics if `agents` is empty.
    pub fn from_agents(
        agents: Vec<Agent<G>>,
        selection: S,
        reproduction: R,
    ) -> SimplePopulation<G, S, R> {
        assert!(
            !agents.is_empty(),
            "cannot create a population with no members"
        );
        SimplePopulation {
            agents,
            selection,
            reproduction,
        }
    }

    /// Consumes the population, returning its agents.
    pub fn into_agents(self) -> Vec<Agent<G>> {
        self.agents
    }
}

impl<G, S, R> Population<G> for SimplePopulation<G, S, R>
where
    S: Selection<G>,
    R: Reproduction<G>,
{
    fn next_generation(mut self) -> Self {
        self.selection.set_agents(&self.agents);
        let agents = (0..self.agents.len())
            .map(|_| {
                let parents = select_genotypes(&self.selection, self.reproduction.num_parents());
                Agent::new(self.reproduction.reproduce(&parents))
            })
            .collect();
        SimplePopulation {
            agents,
            selection: self.selection,
            reproduction: self.reproduction,
        }
    }

    fn all(&self) -> Vec<&Agent<G>> {
        self.agents.iter().collect()
    }

    fn all_mut(&mut self) -> Vec<&mut Agent<G>> {
        self.agents.iter_mut().collect()
    }
}
