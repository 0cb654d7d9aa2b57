use crate::rng::std_n;
use crate::{select_genotypes, Agent, Counter, Population, Reproduction, Selection};

use ahash::RandomState;
use rand::{thread_rng, Rng};

use std::collections::HashMap;
use std::mem;
use std::sync::Arc;

/// Identifier of a species within a [`SpeciatedPopulation`].
///
/// Species ids are drawn from the same [`Counter`] as every other
/// structural id, so they never collide across generations.
pub type SpeciesId = usize;

/// A population partitioned into equally-sized species.
///
/// The species count and the per-species agent count are invariants of
/// the population: every generation produces exactly the same shape.
/// Each generation, with probability `remove_worst_species_chance`, the
/// species with the lowest mean fitness is removed; to keep the count
/// constant, one surviving species is "split": it reproduces under two
/// fresh ids at once.
///
/// Agents may additionally migrate between species: the number of random
/// cross-species swaps per generation is drawn as
/// `round(|N(0, 1)| * std_num_agents_swap)`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use nevo::genomes::{ArrayCrossoverUniform, ArrayGenotype, ArrayMutationStd, NormalGenerator};
/// use nevo::{Counter, Population, SpeciatedPopulation, TournamentSelection, TwoPhaseReproduction};
///
/// let counter = Arc::new(Counter::new());
/// let generator = NormalGenerator::new(0.0, 1.0);
/// let mut population = SpeciatedPopulation::new(
///     Arc::clone(&counter),
///     || ArrayGenotype::random(8, &generator),
///     3,
///     5,
///     0.2,
///     1.0,
///     TournamentSelection::new(2),
///     TwoPhaseReproduction::new(
///         ArrayCrossoverUniform,
///         ArrayMutationStd { mutate_probability: 0.1, mutate_std: 0.1 },
///     ),
/// );
///
/// for agent in population.all_mut() {
///     agent.fitness = agent.genotype.values.iter().sum();
/// }
/// population = population.next_generation();
///
/// // The shape is invariant across generations.
/// assert_eq!(population.num_species(), 3);
/// assert!(population.species().all(|(_, members)| members.len() == 5));
/// ```
pub struct SpeciatedPopulation<G, S, R> {
    species: HashMap<SpeciesId, Vec<Agent<G>>, RandomState>,
    remove_worst_species_chance: f64,
    std_num_agents_swap: f64,
    counter: Arc<Counter>,
    selection: S,
    reproduction: R,
}

impl<G, S, R> SpeciatedPopulation<G, S, R>
where
    S: Selection<G>,
    R: Reproduction<G>,
{
    /// Creates a population of `num_species` species, each holding
    /// `num_agents_per_species` fresh genotypes.
    ///
    /// # Panics
    /// Panics if either count is zero, or if
    /// `remove_worst_species_chance` is outside `[0, 1]`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        counter: Arc<Counter>,
        mut new_genotype: impl FnMut() -> G,
        num_species: usize,
        num_agents_per_species: usize,
        remove_worst_species_chance: f64,
        std_num_agents_swap: f64,
        selection: S,
        reproduction: R,
    ) -> SpeciatedPopulation<G, S, R> {
        assert!(num_species >= 1, "must have at least one species");
        let mut species = HashMap::default();
        for _ in 0..num_species {
            let agents = (0..num_agents_per_species)
                .map(|_| Agent::new(new_genotype()))
                .collect();
            species.insert(counter.next(), agents);
        }
        Self::from_species(
            counter,
            species,
            remove_worst_species_chance,
            std_num_agents_swap,
            selection,
            reproduction,
        )
    }

    /// Creates a population over pre-grouped agents.
    ///
    /// # Panics
    /// Panics if there are no species, if any species is empty or sized
    /// differently from the others, or if `remove_worst_species_chance`
    /// is outside `[0, 1]`.
    pub fn from_species(
        counter: Arc<Counter>,
        species: HashMap<SpeciesId, Vec<Agent<G>>, RandomState>,
        remove_worst_species_chance: f64,
        std_num_agents_swap: f64,
        selection: S,
        reproduction: R,
    ) -> SpeciatedPopulation<G, S, R> {
        assert!(
            !species.is_empty(),
            "must have at least one species to create a speciated population"
        );
        assert!(
            (0.0..=1.0).contains(&remove_worst_species_chance),
            "remove_worst_species_chance must be a probability, got {}",
            remove_worst_species_chance,
        );
        let size = species.values().next().unwrap().len();
        assert!(size >= 1, "species must have at least one member");
        assert!(
            species.values().all(|agents| agents.len() == size),
            "all species must have the same number of agents"
        );
        SpeciatedPopulation {
            species,
            remove_worst_species_chance,
            std_num_agents_swap,
            counter,
            selection,
            reproduction,
        }
    }

    /// Iterates over `(species id, members)` pairs, in no particular
    /// order.
    pub fn species(&self) -> impl Iterator<Item = (SpeciesId, &[Agent<G>])> + '_ {
        self.species.iter().map(|(&id, agents)| (id, &agents[..]))
    }

    /// The number of species.
    pub fn num_species(&self) -> usize {
        self.species.len()
    }
}

impl<G, S, R> Population<G> for SpeciatedPopulation<G, S, R>
where
    S: Selection<G>,
    R: Reproduction<G>,
{
    fn next_generation(mut self) -> Self {
        let mut rng = thread_rng();
        let num_species = self.species.len();
        let agents_per_species = self.species.values().next().unwrap().len();

        // Mean fitness per species; track the worst.
        let mut worst_id = 0;
        let mut worst_fitness = f64::INFINITY;
        for (&id, agents) in &self.species {
            let mean =
                agents.iter().map(|a| a.fitness).sum::<f64>() / agents_per_species as f64;
            if mean < worst_fitness {
                worst_fitness = mean;
                worst_id = id;
            }
        }

        // A lone species is never deleted; there would be nothing left
        // to split to cover the vacancy.
        let delete_worst = num_species > 1 && rng.gen_bool(self.remove_worst_species_chance);

        // Reproduction plans: (parent species, id in the next generation).
        let mut plans: Vec<(SpeciesId, SpeciesId)> = self
            .species
            .keys()
            .filter(|&&id| !(delete_worst && id == worst_id))
            .map(|&id| (id, id))
            .collect();
        if delete_worst {
            // Split one surviving species: it reproduces both under a
            // fresh id and under a second fresh id, restoring the count.
            let split = rng.gen_range(0..plans.len());
            plans[split].1 = self.counter.next();
            plans.push((plans[split].0, self.counter.next()));
        }

        let mut new_species: HashMap<SpeciesId, Vec<Agent<G>>, RandomState> = HashMap::default();
        for &(parent_id, new_id) in &plans {
            self.selection.set_agents(&self.species[&parent_id]);
            let mut agents = Vec::with_capacity(agents_per_species);
            for _ in 0..agents_per_species {
                let parents =
                    select_genotypes(&self.selection, self.reproduction.num_parents());
                agents.push(Agent::new(self.reproduction.reproduce(&parents)));
            }
            new_species.insert(new_id, agents);
        }

        // Migration: swap random agents between random species.
        for _ in 0..std_n(self.std_num_agents_swap) {
            let first_id = plans[rng.gen_range(0..plans.len())].1;
            let second_id = plans[rng.gen_range(0..plans.len())].1;
            let first_index = rng.gen_range(0..agents_per_species);
            let second_index = rng.gen_range(0..agents_per_species);
            if first_id == second_id {
                new_species
                    .get_mut(&first_id)
                    .unwrap()
                    .swap(first_index, second_index);
            } else {
                let mut taken = new_species.remove(&first_id).unwrap();
                let other = new_species.get_mut(&second_id).unwrap();
                mem::swap(&mut taken[first_index], &mut other[second_index]);
                new_species.insert(first_id, taken);
            }
        }

        // Sanity checks: violations here are bugs in this module, not
        // bad input data.
        assert_eq!(
            new_species.len(),
            num_species,
            "species count changed across a generation, should not have happened"
        );
        for (&id, agents) in &new_species {
            assert_eq!(
                agents.len(),
                agents_per_species,
                "species size changed across a generation, should not have happened"
            );
            assert!(
                !(delete_worst && id == worst_id),
                "worst species survived its deletion, should not have happened"
            );
        }
        if !delete_worst {
            assert!(
                new_species.contains_key(&worst_id),
                "a species disappeared without being deleted, should not have happened"
            );
        }

        SpeciatedPopulation {
            species: new_species,
            remove_worst_species_chance: self.remove_worst_species_chance,
            std_num_agents_swap: self.std_num_agents_swap,
            counter: self.counter,
            selection: self.selection,
            reproduction: self.reproduction,
        }
    }

    fn all(&self) -> Vec<&Agent<G>> {
        self.species.values().flatten().collect()
    }

    fn all_mut(&mut self) -> Vec<&mut Agent<G>> {
        self.species.values_mut().flatten().collect()
    }
}
