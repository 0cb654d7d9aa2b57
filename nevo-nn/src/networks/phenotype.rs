use crate::genomics::NeatGenome;
use nevo::{Buildable, Forwarder};

use crate::genomics::Activation;

/// A weighted connection to a later (forward) or not-later (recurrent)
/// position.
#[derive(Clone, Debug)]
struct Connection {
    to: usize,
    weight: f64,
}

/// A neural network compiled from a [`NeatGenome`].
///
/// The phenotype is a snapshot: it owns its activation table, adjacency
/// lists and accumulator buffers, and shares nothing with the genome it
/// was built from. Mutating the genome afterwards does not affect an
/// already-built phenotype.
///
/// Forward connections always target strictly later positions, so one
/// in-order sweep activates every neuron before any of its contributions
/// are consumed. Recurrent connections (backward and self-looping) read
/// only the previous step's post-activation values, which gives the
/// network its memory across [`Forwarder::forward`] calls.
///
/// # Examples
/// ```
/// use nevo::{Buildable, Counter, Forwarder};
/// use nevo_nn::genomics::{Activation, NeatGenome};
///
/// let counter = Counter::new();
/// let genome = NeatGenome::new(&counter, 10, 5, Activation::Tanh);
///
/// let mut network = genome.build();
/// let outputs = network.forward(&vec![0.0; 10]);
/// assert_eq!(outputs, vec![0.0; 5]);
/// ```
#[derive(Clone, Debug)]
pub struct NeatPhenotype {
    num_inputs: usize,
    num_outputs: usize,
    accumulators: Vec<f64>,
    last_accumulators: Vec<f64>,
    activations: Vec<Activation>,
    forward_connections: Vec<Vec<Connection>>,
    recurrent_connections: Vec<Vec<Connection>>,
    has_recurrent: bool,
}

impl Buildable for NeatGenome {
    type Phenotype = NeatPhenotype;

    /// Compiles the genome into a phenotype.
    ///
    /// Synapses are laid into the adjacency lists in id order, so two
    /// structurally equal genomes build networks whose forward passes
    /// are bitwise identical, since floating-point accumulation happens in
    /// the same order regardless of map iteration order.
    fn build(&self) -> NeatPhenotype {
        let size = self.num_neurons();
        let activations = self
            .neuron_order()
            .iter()
            .map(|&id| {
                self.activation_of(id)
                    .expect("every ordered neuron has an activation")
            })
            .collect();
        let mut forward_connections = vec![Vec::new(); size];
        let mut recurrent_connections = vec![Vec::new(); size];

        let mut synapses: Vec<_> = self.synapses().collect();
        synapses.sort_unstable_by_key(|&(sid, _, _)| sid);
        let mut has_recurrent = false;
        for (_, endpoints, weight) in synapses {
            let from_pos = self
                .position_of(endpoints.from)
                .expect("synapse endpoints are ordered neurons");
            let to_pos = self
                .position_of(endpoints.to)
                .expect("synapse endpoints are ordered neurons");
            let connection = Connection {
                to: to_pos,
                weight,
            };
            if to_pos > from_pos {
                forward_connections[from_pos].push(connection);
            } else {
                recurrent_connections[from_pos].push(connection);
                has_recurrent = true;
            }
        }

        NeatPhenotype {
            num_inputs: self.num_inputs(),
            num_outputs: self.num_outputs(),
            accumulators: vec![0.0; size],
            last_accumulators: vec![0.0; size],
            activations,
            forward_connections,
            recurrent_connections,
            has_recurrent,
        }
    }
}

impl Forwarder for NeatPhenotype {
    /// Propagates `inputs` through the network.
    ///
    /// Recurrent contributions are applied first, read from the previous
    /// step's snapshot; then neurons are activated in position order,
    /// each pushing its activated value along its forward connections.
    fn forward(&mut self, inputs: &[f64]) -> Vec<f64> {
        assert_eq!(
            inputs.len(),
            self.num_inputs,
            "incorrect number of inputs: got {}, expected {}",
            inputs.len(),
            self.num_inputs,
        );
        // Snapshot the previous step before resetting, in case any
        // recurrent connection needs it.
        if self.has_recurrent {
            self.last_accumulators.copy_from_slice(&self.accumulators);
        }
        for (position, slot) in self.accumulators.iter_mut().enumerate() {
            *slot = if position < inputs.len() {
                inputs[position]
            } else {
                0.0
            };
        }
        if self.has_recurrent {
            // Recurrent contributions read only the snapshot, so their
            // accumulation order is irrelevant.
            for position in 0..self.accumulators.len() {
                for connection in &self.recurrent_connections[position] {
                    self.accumulators[connection.to] +=
                        connection.weight * self.last_accumulators[position];
                }
            }
        }
        for position in 0..self.accumulators.len() {
            self.accumulators[position] =
                self.activations[position].apply(self.accumulators[position]);
            let activated = self.accumulators[position];
            for connection in &self.forward_connections[position] {
                // Forward connections only ever target later positions.
                self.accumulators[connection.to] += connection.weight * activated;
            }
        }
        self.accumulators[self.accumulators.len() - self.num_outputs..].to_vec()
    }
}

impl NeatPhenotype {
    /// Clears the recurrent memory of the phenotype. Weights are
    /// untouched.
    pub fn reset(&mut self) {
        for slot in &mut self.accumulators {
            *slot = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nevo::{Counter, Validatable};

    /// Builds the two-synapse genome `input -> hidden -> output` with
    /// unit weights, plus a self-loop on the hidden neuron if asked.
    fn chain_genome(counter: &Counter, self_loop: bool) -> NeatGenome {
        let mut genome = NeatGenome::new(counter, 1, 1, Activation::Linear);
        while !genome.add_random_synapse(counter, 0.5, false) {}
        assert!(genome.add_random_neuron(counter, &[Activation::Linear]));
        for (sid, _, _) in genome.synapses().collect::<Vec<_>>() {
            genome.set_synapse_weight(sid, 1.0);
        }
        if self_loop {
            let hidden = genome.neuron_order()[1];
            // The only legal self-loop in this genome is on the hidden
            // neuron, so retrying must eventually land there. Stray
            // backward synapses picked up along the way are silenced.
            while genome.synapse_between(hidden, hidden).is_none() {
                genome.add_random_synapse(counter, 0.5, true);
            }
            for (sid, endpoints, _) in genome.synapses().collect::<Vec<_>>() {
                let silenced = genome.position_of(endpoints.from).unwrap()
                    > genome.position_of(endpoints.to).unwrap();
                genome.set_synapse_weight(sid, if silenced { 0.0 } else { 1.0 });
            }
        }
        genome.validate().unwrap();
        genome
    }

    #[test]
    fn unconnected_outputs_see_only_their_activation_of_zero() {
        let counter = Counter::new();
        let genome = NeatGenome::new(&counter, 3, 2, Activation::Sigmoid);
        let mut network = genome.build();
        // sigmoid(0) = 0.5 for both outputs, whatever the inputs.
        assert_eq!(network.forward(&[5.0, -1.0, 2.0]), vec![0.5, 0.5]);
    }

    #[test]
    fn forward_chain_propagates_in_one_pass() {
        let counter = Counter::new();
        let genome = chain_genome(&counter, false);
        let mut network = genome.build();
        assert_eq!(network.forward(&[2.5]), vec![2.5]);
        assert_eq!(network.forward(&[-1.0]), vec![-1.0]);
    }

    #[test]
    fn self_loop_accumulates_across_steps() {
        let counter = Counter::new();
        let genome = chain_genome(&counter, true);
        let mut network = genome.build();
        // Hidden state h_t = x + h_{t-1}; output reads h_t.
        assert_eq!(network.forward(&[1.0]), vec![1.0]);
        assert_eq!(network.forward(&[1.0]), vec![2.0]);
        assert_eq!(network.forward(&[1.0]), vec![3.0]);
    }

    #[test]
    fn reset_clears_recurrent_memory() {
        let counter = Counter::new();
        let genome = chain_genome(&counter, true);
        let mut network = genome.build();
        network.forward(&[1.0]);
        network.forward(&[1.0]);
        network.reset();
        assert_eq!(network.forward(&[1.0]), vec![1.0]);
    }

    #[test]
    fn built_phenotype_is_independent_of_later_genome_mutation() {
        let counter = Counter::new();
        let mut genome = chain_genome(&counter, false);
        let mut network = genome.build();
        while genome.remove_random_synapse() {}
        // The phenotype still carries the original connections.
        assert_eq!(network.forward(&[2.0]), vec![2.0]);
    }

    #[test]
    #[should_panic]
    fn wrong_input_length_panics() {
        let counter = Counter::new();
        let genome = NeatGenome::new(&counter, 2, 1, Activation::Tanh);
        genome.build().forward(&[1.0]);
    }
}
