use crate::{Crossover, Mutation};

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

/// A source of values for initialising genotypes.
pub trait Generator<T> {
    /// Produces the next value.
    fn generate(&self) -> T;
}

/// Generates floating-point values from a normal distribution.
///
/// # Examples
/// ```
/// use nevo::genomes::{Generator, NormalGenerator};
///
/// let generator = NormalGenerator::new(1.0, 0.0);
/// assert_eq!(generator.generate(), 1.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct NormalGenerator {
    mean: f64,
    std: f64,
}

impl NormalGenerator {
    /// # Panics
    /// Panics if `std` is negative.
    pub fn new(mean: f64, std: f64) -> NormalGenerator {
        assert!(std >= 0.0, "cannot have a negative standard deviation");
        NormalGenerator { mean, std }
    }
}

impl Generator<f64> for NormalGenerator {
    fn generate(&self) -> f64 {
        let draw: f64 = thread_rng().sample(StandardNormal);
        draw * self.std + self.mean
    }
}

/// Generates values drawn uniformly from a fixed set of choices.
#[derive(Clone, Debug)]
pub struct ChoicesGenerator<T> {
    choices: Vec<T>,
}

impl<T> ChoicesGenerator<T> {
    /// # Panics
    /// Panics if `choices` is empty.
    pub fn new(choices: Vec<T>) -> ChoicesGenerator<T> {
        assert!(!choices.is_empty(), "cannot have no choices");
        ChoicesGenerator { choices }
    }
}

impl<T: Clone> Generator<T> for ChoicesGenerator<T> {
    fn generate(&self) -> T {
        self.choices.choose(&mut thread_rng()).unwrap().clone()
    }
}

/// A genotype that is a flat array of values.
///
/// # Examples
/// ```
/// use nevo::genomes::{ArrayGenotype, NormalGenerator};
///
/// let genotype = ArrayGenotype::random(10, &NormalGenerator::new(0.0, 0.5));
/// assert_eq!(genotype.values.len(), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrayGenotype<T> {
    pub values: Vec<T>,
}

impl<T> ArrayGenotype<T> {
    /// Creates a genotype of `length` values pulled from `generator`.
    pub fn random(length: usize, generator: &impl Generator<T>) -> ArrayGenotype<T> {
        ArrayGenotype {
            values: (0..length).map(|_| generator.generate()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Selects each locus from one of two parents with equal probability.
/// The position of a locus has no effect on which parent it comes from.
pub struct ArrayCrossoverUniform;

impl<T: Clone> Crossover<ArrayGenotype<T>> for ArrayCrossoverUniform {
    fn crossover(&self, parents: &[&ArrayGenotype<T>]) -> ArrayGenotype<T> {
        assert_eq!(parents.len(), 2, "uniform crossover requires exactly 2 parents");
        let (first, second) = (parents[0], parents[1]);
        assert_eq!(
            first.len(),
            second.len(),
            "genotypes must have the same length for uniform crossover"
        );
        let mut rng = thread_rng();
        ArrayGenotype {
            values: first
                .values
                .iter()
                .zip(&second.values)
                .map(|(a, b)| if rng.gen_bool(0.5) { a.clone() } else { b.clone() })
                .collect(),
        }
    }

    fn num_parents(&self) -> usize {
        2
    }
}

/// Clones the single parent.
pub struct ArrayCrossoverAsexual;

impl<T: Clone> Crossover<ArrayGenotype<T>> for ArrayCrossoverAsexual {
    fn crossover(&self, parents: &[&ArrayGenotype<T>]) -> ArrayGenotype<T> {
        assert_eq!(parents.len(), 1, "asexual crossover requires exactly 1 parent");
        parents[0].clone()
    }

    fn num_parents(&self) -> usize {
        1
    }
}

/// Picks `k` random switch points and alternates which of the two parents
/// loci are copied from.
pub struct ArrayCrossoverKPoint {
    pub k: usize,
}

impl<T: Clone> Crossover<ArrayGenotype<T>> for ArrayCrossoverKPoint {
    fn crossover(&self, parents: &[&ArrayGenotype<T>]) -> ArrayGenotype<T> {
        assert_eq!(parents.len(), 2, "k-point crossover requires exactly 2 parents");
        let (first, second) = (parents[0], parents[1]);
        assert_eq!(
            first.len(),
            second.len(),
            "genotypes must have the same length for k-point crossover"
        );
        let mut rng = thread_rng();
        let mut switch_points: Vec<usize> = (0..self.k)
            .map(|_| rng.gen_range(0..first.len()))
            .collect();
        switch_points.sort_unstable();
        let mut from_first = rng.gen_bool(0.5);
        let mut next_switch = 0;
        let values = first
            .values
            .iter()
            .zip(&second.values)
            .enumerate()
            .map(|(i, (a, b))| {
                while next_switch < switch_points.len() && switch_points[next_switch] == i {
                    from_first = !from_first;
                    next_switch += 1;
                }
                if from_first {
                    a.clone()
                } else {
                    b.clone()
                }
            })
            .collect();
        ArrayGenotype { values }
    }

    fn num_parents(&self) -> usize {
        2
    }
}

/// Nudges each locus by a normal draw with probability
/// `mutate_probability`.
pub struct ArrayMutationStd {
    /// The probability of mutating each locus.
    pub mutate_probability: f64,
    /// The standard deviation of the nudge.
    pub mutate_std: f64,
}

impl Mutation<ArrayGenotype<f64>> for ArrayMutationStd {
    fn mutate(&self, genotype: &mut ArrayGenotype<f64>) {
        let mut rng = thread_rng();
        for value in &mut genotype.values {
            if rng.gen::<f64>() < self.mutate_probability {
                let draw: f64 = rng.sample(StandardNormal);
                *value += draw * self.mutate_std;
            }
        }
    }
}

/// Flips each boolean locus with probability `mutate_probability`.
pub struct ArrayMutationFlip {
    /// The probability of mutating each locus.
    pub mutate_probability: f64,
}

impl Mutation<ArrayGenotype<bool>> for ArrayMutationFlip {
    fn mutate(&self, genotype: &mut ArrayGenotype<bool>) {
        let mut rng = thread_rng();
        for value in &mut genotype.values {
            if rng.gen::<f64>() < self.mutate_probability {
                *value = !*value;
            }
        }
    }
}

/// Resamples each locus from a fixed choice set with probability
/// `mutate_probability`.
pub struct ArrayMutationChoices<T> {
    /// The probability of mutating each locus.
    pub mutate_probability: f64,
    pub choices: Vec<T>,
}

impl<T: Clone> Mutation<ArrayGenotype<T>> for ArrayMutationChoices<T> {
    fn mutate(&self, genotype: &mut ArrayGenotype<T>) {
        assert!(!self.choices.is_empty(), "cannot mutate from no choices");
        let mut rng = thread_rng();
        for value in &mut genotype.values {
            if rng.gen::<f64>() < self.mutate_probability {
                *value = self.choices.choose(&mut rng).unwrap().clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Crossover;

    #[test]
    fn uniform_crossover_takes_every_locus_from_a_parent() {
        let first = ArrayGenotype {
            values: vec![0.0; 32],
        };
        let second = ArrayGenotype {
            values: vec![1.0; 32],
        };
        let child = ArrayCrossoverUniform.crossover(&[&first, &second]);
        assert!(child.values.iter().all(|&v| v == 0.0 || v == 1.0));
    }

    #[test]
    fn k_point_crossover_switches_at_most_k_times() {
        let first = ArrayGenotype {
            values: vec![0.0; 64],
        };
        let second = ArrayGenotype {
            values: vec![1.0; 64],
        };
        let crossover = ArrayCrossoverKPoint { k: 3 };
        let child = crossover.crossover(&[&first, &second]);
        let switches = child
            .values
            .windows(2)
            .filter(|pair| pair[0] != pair[1])
            .count();
        assert!(switches <= 3);
    }

    #[test]
    fn zero_probability_mutation_is_a_no_op() {
        let mut genotype = ArrayGenotype {
            values: vec![1.0, 2.0, 3.0],
        };
        let mutation = ArrayMutationStd {
            mutate_probability: 0.0,
            mutate_std: 10.0,
        };
        mutation.mutate(&mut genotype);
        assert_eq!(genotype.values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn array_genotype_round_trips_through_json() {
        let genotype = ArrayGenotype {
            values: vec![1.5, -2.0, 0.25],
        };
        let encoded = serde_json::to_string(&genotype).unwrap();
        let decoded: ArrayGenotype<f64> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, genotype);
    }

    #[test]
    fn flip_mutation_with_certainty_inverts_everything() {
        let mut genotype = ArrayGenotype {
            values: vec![true, false, true],
        };
        let mutation = ArrayMutationFlip {
            mutate_probability: 1.0,
        };
        mutation.mutate(&mut genotype);
        assert_eq!(genotype.values, vec![false, true, false]);
    }
}
