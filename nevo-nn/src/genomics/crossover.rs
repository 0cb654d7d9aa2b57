use crate::genomics::NeatGenome;
use nevo::Crossover;

use rand::{thread_rng, Rng};

/// Sexual crossover in the NEAT tradition: the fitter parent dominates
/// structure.
///
/// The child is a clone of the first parent, so callers pass the fitter
/// parent first. For every synapse the two parents share, the child
/// adopts the second parent's weight with probability 0.5. Synapses and
/// neurons unique to the second parent are deliberately discarded.
///
/// # Examples
/// ```
/// use nevo::{Counter, Crossover};
/// use nevo_nn::genomics::{Activation, NeatCrossoverSimple, NeatGenome};
///
/// let counter = Counter::new();
/// let mut fitter = NeatGenome::new(&counter, 2, 1, Activation::Sigmoid);
/// fitter.add_random_synapse(&counter, 0.5, false);
/// let other = fitter.clone();
///
/// let child = NeatCrossoverSimple.crossover(&[&fitter, &other]);
/// assert_eq!(child.num_synapses(), fitter.num_synapses());
/// ```
pub struct NeatCrossoverSimple;

impl Crossover<NeatGenome> for NeatCrossoverSimple {
    fn crossover(&self, parents: &[&NeatGenome]) -> NeatGenome {
        assert_eq!(
            parents.len(),
            2,
            "expected 2 parents for simple crossover"
        );
        let (fitter, other) = (parents[0], parents[1]);
        let mut child = fitter.clone();
        let mut rng = thread_rng();
        for (sid, _, weight) in other.synapses() {
            if child.weight_of(sid).is_some() && rng.gen_bool(0.5) {
                child.set_synapse_weight(sid, weight);
            }
        }
        child
    }

    fn num_parents(&self) -> usize {
        2
    }
}

/// Asexual crossover: the child is a clone of the single parent.
pub struct NeatCrossoverAsexual;

impl Crossover<NeatGenome> for NeatCrossoverAsexual {
    fn crossover(&self, parents: &[&NeatGenome]) -> NeatGenome {
        assert_eq!(
            parents.len(),
            1,
            "expected 1 parent for asexual crossover"
        );
        parents[0].clone()
    }

    fn num_parents(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genomics::Activation;
    use nevo::{Counter, Validatable};

    #[test]
    fn simple_crossover_inherits_structure_from_the_first_parent() {
        let counter = Counter::new();
        let mut fitter = NeatGenome::new(&counter, 3, 1, Activation::Sigmoid);
        let mut other = NeatGenome::new(&counter, 3, 1, Activation::Sigmoid);
        for _ in 0..5 {
            fitter.add_random_synapse(&counter, 0.5, false);
            other.add_random_synapse(&counter, 0.5, false);
        }
        other.add_random_neuron(&counter, &[Activation::Tanh]);

        let child = NeatCrossoverSimple.crossover(&[&fitter, &other]);
        child.validate().unwrap();
        assert_eq!(child.num_neurons(), fitter.num_neurons());
        assert_eq!(child.num_synapses(), fitter.num_synapses());
        // Every child synapse comes from the fitter parent's structure.
        for (sid, _, _) in child.synapses() {
            assert!(fitter.weight_of(sid).is_some());
        }
    }

    #[test]
    fn shared_synapse_weights_come_from_either_parent() {
        let counter = Counter::new();
        let mut fitter = NeatGenome::new(&counter, 1, 1, Activation::Sigmoid);
        while !fitter.add_random_synapse(&counter, 0.5, false) {}
        let (sid, _, _) = fitter.synapses().next().unwrap();
        fitter.set_synapse_weight(sid, 1.0);
        let mut other = fitter.clone();
        other.set_synapse_weight(sid, -1.0);

        let mut adopted = 0;
        for _ in 0..200 {
            let child = NeatCrossoverSimple.crossover(&[&fitter, &other]);
            let weight = child.weight_of(sid).unwrap();
            assert!(weight == 1.0 || weight == -1.0);
            if weight == -1.0 {
                adopted += 1;
            }
        }
        // With probability 0.5 each way, both outcomes show up over 200
        // children. This failing by chance is beyond unlikely.
        assert!(adopted > 0 && adopted < 200);
    }

    #[test]
    fn asexual_crossover_clones_the_parent() {
        let counter = Counter::new();
        let mut parent = NeatGenome::new(&counter, 2, 2, Activation::Tanh);
        for _ in 0..4 {
            parent.add_random_synapse(&counter, 0.5, false);
        }
        let child = NeatCrossoverAsexual.crossover(&[&parent]);
        assert_eq!(child, parent);
    }

    #[test]
    #[should_panic]
    fn wrong_parent_count_is_rejected() {
        let counter = Counter::new();
        let parent = NeatGenome::new(&counter, 1, 1, Activation::Sigmoid);
        NeatCrossoverSimple.crossover(&[&parent]);
    }
}
