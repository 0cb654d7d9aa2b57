use crate::genomics::{Activation, NeatGenome};
use nevo::rng::std_n;
use nevo::{Counter, Mutation};

use std::sync::Arc;

/// The standard NEAT mutation pipeline, parameterised by per-category
/// standard deviations.
///
/// Each application schedules a count for every operator as
/// `round(|N(0, 1)| * std)` and runs the operator that many times, so
/// most generations apply a handful of small changes and the occasional
/// generation applies none or several. The per-operator counts are not
/// scaled by network size: larger networks tend to accumulate more
/// absolute change per generation.
///
/// Individual operators may fail silently (a saturated genome cannot
/// take another forward synapse, a genome without hidden neurons cannot
/// mutate an activation); the pipeline tolerates that and moves on.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use nevo::{Counter, Mutation};
/// use nevo_nn::genomics::{Activation, NeatGenome, NeatMutationStd};
///
/// let counter = Arc::new(Counter::new());
/// let mut genome = NeatGenome::new(&counter, 3, 1, Activation::Sigmoid);
///
/// let mutation = NeatMutationStd {
///     counter: Arc::clone(&counter),
///     possible_activations: vec![Activation::Relu, Activation::Tanh],
///     std_num_new_forward_synapses: 1.0,
///     std_num_new_recurrent_synapses: 0.0,
///     std_num_new_neurons: 0.5,
///     std_num_mutate_synapses: 2.0,
///     std_num_prune_synapses: 0.0,
///     std_num_mutate_activations: 0.5,
///     std_new_synapse_weight: 0.2,
///     std_mutate_synapse_weight: 0.4,
///     max_hidden_neurons: Some(3),
/// };
///
/// mutation.mutate(&mut genome);
/// # use nevo::Validatable;
/// # genome.validate().unwrap();
/// ```
pub struct NeatMutationStd {
    /// The counter used for new synapse and neuron ids.
    pub counter: Arc<Counter>,
    /// The candidate activations for new and mutated hidden neurons.
    pub possible_activations: Vec<Activation>,
    /// Standard deviation for the number of new forward synapses.
    pub std_num_new_forward_synapses: f64,
    /// Standard deviation for the number of new recurrent synapses.
    pub std_num_new_recurrent_synapses: f64,
    /// Standard deviation for the number of new hidden neurons.
    pub std_num_new_neurons: f64,
    /// Standard deviation for the number of weight nudges.
    pub std_num_mutate_synapses: f64,
    /// Standard deviation for the number of synapses to prune.
    pub std_num_prune_synapses: f64,
    /// Standard deviation for the number of activation changes.
    pub std_num_mutate_activations: f64,
    /// Standard deviation of the weight of newly added synapses.
    pub std_new_synapse_weight: f64,
    /// Standard deviation of the nudge applied to mutated weights.
    pub std_mutate_synapse_weight: f64,
    /// Cap on the number of hidden neurons this mutation will grow to;
    /// `None` means no cap.
    pub max_hidden_neurons: Option<usize>,
}

impl Mutation<NeatGenome> for NeatMutationStd {
    fn mutate(&self, genotype: &mut NeatGenome) {
        assert!(
            !self.possible_activations.is_empty(),
            "cannot mutate with no candidate activations"
        );
        for _ in 0..std_n(self.std_num_new_forward_synapses) {
            genotype.add_random_synapse(&self.counter, self.std_new_synapse_weight, false);
        }
        for _ in 0..std_n(self.std_num_new_recurrent_synapses) {
            genotype.add_random_synapse(&self.counter, self.std_new_synapse_weight, true);
        }
        for _ in 0..std_n(self.std_num_new_neurons) {
            let under_cap = self
                .max_hidden_neurons
                .map_or(true, |cap| genotype.num_hidden_neurons() < cap);
            if under_cap {
                genotype.add_random_neuron(&self.counter, &self.possible_activations);
            }
        }
        for _ in 0..std_n(self.std_num_mutate_synapses) {
            genotype.mutate_random_synapse(self.std_mutate_synapse_weight);
        }
        for _ in 0..std_n(self.std_num_prune_synapses) {
            genotype.remove_random_synapse();
        }
        for _ in 0..std_n(self.std_num_mutate_activations) {
            genotype.mutate_random_activation(&self.possible_activations);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nevo::Validatable;

    fn pipeline(counter: &Arc<Counter>) -> NeatMutationStd {
        NeatMutationStd {
            counter: Arc::clone(counter),
            possible_activations: vec![Activation::Relu, Activation::Tanh, Activation::Sigmoid],
            std_num_new_forward_synapses: 1.0,
            std_num_new_recurrent_synapses: 0.5,
            std_num_new_neurons: 0.5,
            std_num_mutate_synapses: 2.0,
            std_num_prune_synapses: 0.5,
            std_num_mutate_activations: 0.5,
            std_new_synapse_weight: 0.2,
            std_mutate_synapse_weight: 0.4,
            max_hidden_neurons: Some(3),
        }
    }

    #[test]
    fn repeated_mutation_preserves_validity() {
        let counter = Arc::new(Counter::new());
        let mutation = pipeline(&counter);
        let mut genome = NeatGenome::new(&counter, 3, 2, Activation::Sigmoid);
        for _ in 0..200 {
            mutation.mutate(&mut genome);
            genome.validate().unwrap();
        }
    }

    #[test]
    fn hidden_neuron_cap_is_respected() {
        let counter = Arc::new(Counter::new());
        let mutation = pipeline(&counter);
        let mut genome = NeatGenome::new(&counter, 3, 2, Activation::Sigmoid);
        for _ in 0..500 {
            mutation.mutate(&mut genome);
        }
        assert!(genome.num_hidden_neurons() <= 3);
    }

    #[test]
    fn uncapped_pipeline_grows_hidden_neurons() {
        let counter = Arc::new(Counter::new());
        let mutation = NeatMutationStd {
            max_hidden_neurons: None,
            std_num_new_neurons: 2.0,
            ..pipeline(&counter)
        };
        let mut genome = NeatGenome::new(&counter, 3, 2, Activation::Sigmoid);
        for _ in 0..100 {
            mutation.mutate(&mut genome);
        }
        assert!(genome.num_hidden_neurons() > 3);
        genome.validate().unwrap();
    }
}
