//! Crossover, mutation and their composition into reproduction.

/// A strategy for combining parent genotypes into a child genotype.
pub trait Crossover<G> {
    /// Combines the parents into a child.
    ///
    /// # Panics
    /// Panics if `parents.len() != self.num_parents()`.
    fn crossover(&self, parents: &[&G]) -> G;

    /// The number of parents this strategy requires: 1 for asexual
    /// strategies, 2 for sexual ones, possibly more for averaging
    /// schemes.
    fn num_parents(&self) -> usize;
}

/// A strategy for perturbing a genotype in place.
pub trait Mutation<G> {
    /// Mutates the genotype in place.
    fn mutate(&self, genotype: &mut G);
}

/// A strategy for producing a child genotype from a set of parents.
///
/// Most hosts use [`TwoPhaseReproduction`]; implementing this trait
/// directly allows more involved schemes.
pub trait Reproduction<G> {
    /// Produces a child from the given parents.
    ///
    /// # Panics
    /// Panics if `parents.len() != self.num_parents()`.
    fn reproduce(&self, parents: &[&G]) -> G;

    /// The number of parents required per child.
    fn num_parents(&self) -> usize;
}

/// A [`Reproduction`] that first applies a [`Crossover`] and then a
/// [`Mutation`] to the resulting child.
///
/// # Examples
/// ```
/// use nevo::genomes::{ArrayCrossoverUniform, ArrayGenotype, ArrayMutationStd};
/// use nevo::{Reproduction, TwoPhaseReproduction};
///
/// let reproduction = TwoPhaseReproduction::new(
///     ArrayCrossoverUniform,
///     ArrayMutationStd {
///         mutate_probability: 0.5,
///         mutate_std: 0.1,
///     },
/// );
///
/// let first = ArrayGenotype { values: vec![0.0; 8] };
/// let second = ArrayGenotype { values: vec![1.0; 8] };
///
/// assert_eq!(reproduction.num_parents(), 2);
/// let child = reproduction.reproduce(&[&first, &second]);
/// assert_eq!(child.values.len(), 8);
/// ```
pub struct TwoPhaseReproduction<C, M> {
    crossover: C,
    mutation: M,
}

impl<C, M> TwoPhaseReproduction<C, M> {
    /// Composes a crossover and a mutation into one reproduction strategy.
    pub fn new(crossover: C, mutation: M) -> TwoPhaseReproduction<C, M> {
        TwoPhaseReproduction {
            crossover,
            mutation,
        }
    }
}

impl<G, C, M> Reproduction<G> for TwoPhaseReproduction<C, M>
where
    C: Crossover<G>,
    M: Mutation<G>,
{
    fn reproduce(&self, parents: &[&G]) -> G {
        assert_eq!(
            parents.len(),
            self.crossover.num_parents(),
            "incorrect number of parents: got {}, expected {}",
            parents.len(),
            self.crossover.num_parents(),
        );
        let mut child = self.crossover.crossover(parents);
        self.mutation.mutate(&mut child);
        child
    }

    fn num_parents(&self) -> usize {
        self.crossover.num_parents()
    }
}
