use crate::genomics::{Activation, GenomeValidationError};
use nevo::{Counter, Validatable};

use ahash::RandomState;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::{thread_rng, Rng};
use rand_distr::StandardNormal;

use std::collections::HashMap;
use std::fmt;
use std::mem;

/// Synapse weights are clamped to this magnitude on every write.
const MAX_SYNAPSE_VALUE: f64 = 3.0;

/// The unique identifier of a neuron in a [`NeatGenome`].
///
/// Neuron and synapse ids share one id space: both are issued by the same
/// [`Counter`], so no neuron ever has the same id as a synapse.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct NeuronId(pub usize);

/// The unique identifier of a synapse in a [`NeatGenome`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct SynapseId(pub usize);

impl fmt::Display for NeuronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SynapseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The endpoints of a synapse: the neuron it runs from and the neuron it
/// runs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SynapseEndpoints {
    pub from: NeuronId,
    pub to: NeuronId,
}

/// The positional class of a synapse, fixed for its whole lifetime.
///
/// Classification compares the *positions* of the endpoints in the
/// genome's neuron order, not their ids. Mutation never moves a synapse
/// between classes: neuron insertion places new neurons so that existing
/// orderings are preserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SynapseClass {
    /// Runs from an earlier position to a strictly later one.
    Forward,
    /// Runs from a later position to a strictly earlier one.
    Backward,
    /// Starts and ends on the same neuron.
    SelfLoop,
}

impl fmt::Display for SynapseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SynapseClass::Forward => "forward",
            SynapseClass::Backward => "backward",
            SynapseClass::SelfLoop => "self",
        })
    }
}

/// A genotype for a neural network, in the NEAT style.
///
/// The genome is a directed weighted graph over ordered neurons. The
/// first `num_inputs` positions of the order are input neurons, the last
/// `num_outputs` are outputs, and everything between is hidden; the order
/// encodes the topological layering used for single-pass evaluation.
/// Synapses are classified as forward, backward or self-looping by their
/// endpoint positions, and the class never changes.
///
/// This is conceptually the DNA of a network, not the network itself: to
/// run it, compile it with [`nevo::Buildable::build`] into a
/// [`crate::networks::NeatPhenotype`].
///
/// # Examples
/// ```
/// use nevo::Counter;
/// use nevo_nn::genomics::{Activation, NeatGenome};
///
/// let counter = Counter::new();
/// let genome = NeatGenome::new(&counter, 10, 5, Activation::Tanh);
///
/// assert_eq!(genome.num_inputs(), 10);
/// assert_eq!(genome.num_outputs(), 5);
/// assert_eq!(genome.num_neurons(), 15);
/// assert_eq!(genome.num_synapses(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct NeatGenome {
    max_synapse_value: f64,
    num_inputs: usize,
    num_outputs: usize,
    neuron_order: Vec<NeuronId>,
    inverse_neuron_order: HashMap<NeuronId, usize, RandomState>,
    activations: HashMap<NeuronId, Activation, RandomState>,
    weights: HashMap<SynapseId, f64, RandomState>,
    synapse_endpoints: HashMap<SynapseId, SynapseEndpoints, RandomState>,
    endpoint_synapses: HashMap<SynapseEndpoints, SynapseId, RandomState>,
    forward_synapses: Vec<SynapseId>,
    backward_synapses: Vec<SynapseId>,
    self_synapses: Vec<SynapseId>,
}

impl NeatGenome {
    /// Creates a genome with the given number of input and output
    /// neurons and no synapses.
    ///
    /// Input ids are allocated from the counter first, then output ids.
    /// Every input neuron gets the linear activation; every output
    /// neuron gets `output_activation`.
    ///
    /// # Panics
    /// Panics if `inputs` or `outputs` is zero.
    pub fn new(
        counter: &Counter,
        inputs: usize,
        outputs: usize,
        output_activation: Activation,
    ) -> NeatGenome {
        assert!(
            inputs >= 1 && outputs >= 1,
            "must have at least one input and one output"
        );
        let mut genome = NeatGenome {
            max_synapse_value: MAX_SYNAPSE_VALUE,
            num_inputs: inputs,
            num_outputs: outputs,
            neuron_order: Vec::with_capacity(inputs + outputs),
            inverse_neuron_order: HashMap::default(),
            activations: HashMap::default(),
            weights: HashMap::default(),
            synapse_endpoints: HashMap::default(),
            endpoint_synapses: HashMap::default(),
            forward_synapses: Vec::new(),
            backward_synapses: Vec::new(),
            self_synapses: Vec::new(),
        };
        for _ in 0..inputs {
            genome.push_neuron(NeuronId(counter.next()), Activation::Linear);
        }
        for _ in 0..outputs {
            genome.push_neuron(NeuronId(counter.next()), output_activation);
        }
        genome
    }

    /// Appends a neuron at the end of the order. Construction only.
    fn push_neuron(&mut self, id: NeuronId, activation: Activation) {
        self.neuron_order.push(id);
        self.inverse_neuron_order
            .insert(id, self.neuron_order.len() - 1);
        self.activations.insert(id, activation);
    }

    /// Rebuilds a genome from flat parts, classifying each synapse by its
    /// endpoint positions. Used by deserialization; the caller is
    /// expected to run [`Validatable::validate`] afterwards.
    pub(crate) fn from_parts(
        num_inputs: usize,
        num_outputs: usize,
        max_synapse_value: f64,
        neurons: Vec<(NeuronId, Activation)>,
        synapses: Vec<(SynapseId, NeuronId, NeuronId, f64)>,
    ) -> NeatGenome {
        let mut genome = NeatGenome {
            max_synapse_value,
            num_inputs,
            num_outputs,
            neuron_order: Vec::with_capacity(neurons.len()),
            inverse_neuron_order: HashMap::default(),
            activations: HashMap::default(),
            weights: HashMap::default(),
            synapse_endpoints: HashMap::default(),
            endpoint_synapses: HashMap::default(),
            forward_synapses: Vec::new(),
            backward_synapses: Vec::new(),
            self_synapses: Vec::new(),
        };
        for (id, activation) in neurons {
            genome.push_neuron(id, activation);
        }
        for (sid, from, to, weight) in synapses {
            let endpoints = SynapseEndpoints { from, to };
            genome.weights.insert(sid, weight);
            genome.synapse_endpoints.insert(sid, endpoints);
            genome.endpoint_synapses.insert(endpoints, sid);
            let from_pos = genome.inverse_neuron_order.get(&from).copied();
            let to_pos = genome.inverse_neuron_order.get(&to).copied();
            match (from_pos, to_pos) {
                (Some(f), Some(t)) => match Self::class_for_positions(f, t) {
                    SynapseClass::Forward => genome.forward_synapses.push(sid),
                    SynapseClass::Backward => genome.backward_synapses.push(sid),
                    SynapseClass::SelfLoop => genome.self_synapses.push(sid),
                },
                // Dangling endpoints are left unclassified; validation
                // reports them as a container-length mismatch.
                _ => {}
            }
        }
        genome
    }

    /// The number of input neurons.
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// The number of output neurons.
    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    /// The number of hidden neurons.
    pub fn num_hidden_neurons(&self) -> usize {
        self.neuron_order.len() - self.num_inputs - self.num_outputs
    }

    /// The total number of neurons.
    pub fn num_neurons(&self) -> usize {
        self.neuron_order.len()
    }

    /// The total number of synapses.
    pub fn num_synapses(&self) -> usize {
        self.weights.len()
    }

    /// The magnitude bound applied to every synapse weight.
    pub fn max_synapse_value(&self) -> f64 {
        self.max_synapse_value
    }

    /// The neuron ids in evaluation order: inputs first, outputs last.
    pub fn neuron_order(&self) -> &[NeuronId] {
        &self.neuron_order
    }

    /// The position of a neuron in the evaluation order.
    pub fn position_of(&self, neuron: NeuronId) -> Option<usize> {
        self.inverse_neuron_order.get(&neuron).copied()
    }

    /// The activation of a neuron.
    pub fn activation_of(&self, neuron: NeuronId) -> Option<Activation> {
        self.activations.get(&neuron).copied()
    }

    /// The endpoints of a synapse.
    pub fn endpoints_of(&self, synapse: SynapseId) -> Option<SynapseEndpoints> {
        self.synapse_endpoints.get(&synapse).copied()
    }

    /// The weight of a synapse.
    pub fn weight_of(&self, synapse: SynapseId) -> Option<f64> {
        self.weights.get(&synapse).copied()
    }

    /// The synapse running between the given neurons, if one exists.
    pub fn synapse_between(&self, from: NeuronId, to: NeuronId) -> Option<SynapseId> {
        self.endpoint_synapses
            .get(&SynapseEndpoints { from, to })
            .copied()
    }

    /// Iterates over every synapse as `(id, endpoints, weight)`, in no
    /// particular order.
    pub fn synapses(&self) -> impl Iterator<Item = (SynapseId, SynapseEndpoints, f64)> + '_ {
        self.weights
            .iter()
            .map(move |(&sid, &weight)| (sid, self.synapse_endpoints[&sid], weight))
    }

    /// The ids of all forward synapses.
    pub fn forward_synapses(&self) -> &[SynapseId] {
        &self.forward_synapses
    }

    /// The ids of all backward synapses.
    pub fn backward_synapses(&self) -> &[SynapseId] {
        &self.backward_synapses
    }

    /// The ids of all self-looping synapses.
    pub fn self_synapses(&self) -> &[SynapseId] {
        &self.self_synapses
    }

    /// Overwrites the weight of an existing synapse, clamped to the
    /// genome's weight bound. Returns `false` if no such synapse exists.
    pub fn set_synapse_weight(&mut self, synapse: SynapseId, weight: f64) -> bool {
        let max = self.max_synapse_value;
        match self.weights.get_mut(&synapse) {
            Some(slot) => {
                *slot = weight.clamp(-max, max);
                true
            }
            None => false,
        }
    }

    fn is_input_position(&self, position: usize) -> bool {
        position < self.num_inputs
    }

    fn is_output_position(&self, position: usize) -> bool {
        position >= self.neuron_order.len() - self.num_outputs
    }

    fn class_for_positions(from_pos: usize, to_pos: usize) -> SynapseClass {
        if from_pos < to_pos {
            SynapseClass::Forward
        } else if from_pos > to_pos {
            SynapseClass::Backward
        } else {
            SynapseClass::SelfLoop
        }
    }

    /// Adds a synapse between two random neurons, with a weight drawn
    /// from a normal distribution of the given standard deviation
    /// (clamped to the weight bound).
    ///
    /// If `recurrent` is false the synapse is forward in position; if
    /// true it is backward or self-looping. Synapses never terminate at
    /// an input and never connect two outputs, and endpoint pairs are
    /// unique. Returns `false` if no legal placement was found after 10
    /// attempts. On dense or tightly constrained genomes the operator
    /// simply has nothing left to do.
    ///
    /// # Examples
    /// ```
    /// use nevo::Counter;
    /// use nevo_nn::genomics::{Activation, NeatGenome};
    ///
    /// let counter = Counter::new();
    /// let mut genome = NeatGenome::new(&counter, 2, 2, Activation::Sigmoid);
    ///
    /// if genome.add_random_synapse(&counter, 0.5, false) {
    ///     assert_eq!(genome.num_synapses(), 1);
    ///     assert_eq!(genome.forward_synapses().len(), 1);
    /// }
    /// ```
    pub fn add_random_synapse(&mut self, counter: &Counter, weight_std: f64, recurrent: bool) -> bool {
        let mut rng = thread_rng();
        // Almost always finds a spot within 10 tries, unless the genome
        // really is saturated.
        for _ in 0..10 {
            let mut a_pos = rng.gen_range(0..self.neuron_order.len());
            let mut b_pos = rng.gen_range(0..self.neuron_order.len());
            if a_pos == b_pos && !recurrent {
                continue; // No self-connections on the forward pass.
            }
            if (!recurrent && a_pos > b_pos) || (recurrent && b_pos > a_pos) {
                mem::swap(&mut a_pos, &mut b_pos);
            }
            if self.is_input_position(b_pos)
                || (self.is_output_position(a_pos) && self.is_output_position(b_pos))
            {
                continue; // Into an input, or output to output.
            }
            let endpoints = SynapseEndpoints {
                from: self.neuron_order[a_pos],
                to: self.neuron_order[b_pos],
            };
            if self.endpoint_synapses.contains_key(&endpoints) {
                continue; // Already connected, try elsewhere.
            }
            let sid = SynapseId(counter.next());
            self.endpoint_synapses.insert(endpoints, sid);
            self.synapse_endpoints.insert(sid, endpoints);
            let draw: f64 = rng.sample(StandardNormal);
            self.weights.insert(
                sid,
                (draw * weight_std).clamp(-self.max_synapse_value, self.max_synapse_value),
            );
            if !recurrent {
                self.forward_synapses.push(sid);
            } else if endpoints.from == endpoints.to {
                self.self_synapses.push(sid);
            } else {
                self.backward_synapses.push(sid);
            }
            return true;
        }
        false
    }

    /// Splits a random forward synapse with a new hidden neuron.
    ///
    /// The old synapse is rewired to end at the new neuron, keeping its
    /// weight; a new synapse with weight 1 runs from the new neuron to
    /// the old target, so the network's behaviour is minimally disturbed
    /// at insertion. The neuron is placed at the rounded midpoint of the
    /// old endpoint positions, clamped into the hidden range, which keeps
    /// both halves forward. Its activation is chosen uniformly from
    /// `activations`.
    ///
    /// Returns `false` if the genome has no forward synapses. Neurons are
    /// only ever inserted on forward synapses, which keeps the
    /// forward/recurrent split clean.
    ///
    /// # Panics
    /// Panics if `activations` is empty, or if the chosen synapse turns
    /// out to connect two inputs, connect two outputs, or terminate at an
    /// input. Those states mean the genome is corrupted, not that the
    /// mutation merely failed.
    pub fn add_random_neuron(&mut self, counter: &Counter, activations: &[Activation]) -> bool {
        assert!(
            !activations.is_empty(),
            "must supply at least one candidate activation"
        );
        if self.forward_synapses.is_empty() {
            return false;
        }
        let mut rng = thread_rng();
        let sid = *self.forward_synapses.choose(&mut rng).unwrap();
        let endpoints = self.synapse_endpoints[&sid];
        let a_pos = self.inverse_neuron_order[&endpoints.from];
        let b_pos = self.inverse_neuron_order[&endpoints.to];

        if self.is_input_position(a_pos) && self.is_input_position(b_pos) {
            panic!("inserting a neuron on a synapse between two inputs: the genome is corrupted");
        } else if self.is_output_position(a_pos) && self.is_output_position(b_pos) {
            panic!("inserting a neuron on a synapse between two outputs: the genome is corrupted");
        } else if self.is_input_position(b_pos) {
            panic!(
                "inserting a neuron on a synapse terminating at an input: the genome is corrupted"
            );
        }

        let new_sid = SynapseId(counter.next());
        let new_nid = NeuronId(counter.next());

        // Rewire the old synapse to end at the new neuron, keeping its
        // weight, and run a unit-weight synapse on to the old target.
        let first_half = SynapseEndpoints {
            from: endpoints.from,
            to: new_nid,
        };
        let second_half = SynapseEndpoints {
            from: new_nid,
            to: endpoints.to,
        };
        self.endpoint_synapses.remove(&endpoints);
        self.endpoint_synapses.insert(first_half, sid);
        self.synapse_endpoints.insert(sid, first_half);
        self.endpoint_synapses.insert(second_half, new_sid);
        self.synapse_endpoints.insert(new_sid, second_half);
        self.weights.insert(new_sid, 1.0);
        // Midpoint placement keeps both halves forward.
        self.forward_synapses.push(new_sid);

        let midpoint = ((a_pos + b_pos) as f64 / 2.0).round() as usize;
        let start = self.num_inputs.max(a_pos + 1); // First valid position, inclusive.
        let end = (self.neuron_order.len() - self.num_outputs).min(b_pos); // Last valid position, inclusive.
        assert!(
            start <= end,
            "no valid placement for an inserted neuron: the genome is corrupted"
        );
        let position = midpoint.clamp(start, end);

        self.neuron_order.insert(position, new_nid);
        for i in position..self.neuron_order.len() {
            self.inverse_neuron_order.insert(self.neuron_order[i], i);
        }
        self.activations
            .insert(new_nid, *activations.choose(&mut rng).unwrap());

        true
    }

    /// Nudges the weight of a random synapse by a normal draw of the
    /// given standard deviation, clamped to the weight bound. Returns
    /// `false` if there are no synapses.
    pub fn mutate_random_synapse(&mut self, std: f64) -> bool {
        let mut rng = thread_rng();
        let sid = match self.weights.keys().choose(&mut rng) {
            Some(&sid) => sid,
            None => return false,
        };
        let max = self.max_synapse_value;
        let draw: f64 = rng.sample(StandardNormal);
        let weight = self.weights.get_mut(&sid).unwrap();
        *weight = (*weight + draw * std).clamp(-max, max);
        true
    }

    /// Sets the weight of a random synapse to zero. Returns `false` if
    /// there are no synapses.
    pub fn reset_random_synapse(&mut self) -> bool {
        let mut rng = thread_rng();
        let sid = match self.weights.keys().choose(&mut rng) {
            Some(&sid) => sid,
            None => return false,
        };
        self.weights.insert(sid, 0.0);
        true
    }

    /// Removes a random synapse. Returns `false` if there are none.
    ///
    /// Neurons left without synapses are not pruned: they keep their
    /// place in the order and may be reconnected by later mutations.
    pub fn remove_random_synapse(&mut self) -> bool {
        let mut rng = thread_rng();
        let sid = match self.weights.keys().choose(&mut rng) {
            Some(&sid) => sid,
            None => return false,
        };
        let endpoints = self.synapse_endpoints[&sid];
        let from_pos = self.inverse_neuron_order[&endpoints.from];
        let to_pos = self.inverse_neuron_order[&endpoints.to];
        let class_index = match Self::class_for_positions(from_pos, to_pos) {
            SynapseClass::Forward => &mut self.forward_synapses,
            SynapseClass::Backward => &mut self.backward_synapses,
            SynapseClass::SelfLoop => &mut self.self_synapses,
        };
        let index = class_index
            .iter()
            .position(|&s| s == sid)
            .expect("synapse missing from its class index: the genome is corrupted");
        class_index.swap_remove(index);
        self.weights.remove(&sid);
        self.synapse_endpoints.remove(&sid);
        self.endpoint_synapses.remove(&endpoints);
        true
    }

    /// Replaces the activation of a random hidden neuron with a uniform
    /// choice from `activations`. Returns `false` if there are no hidden
    /// neurons.
    pub fn mutate_random_activation(&mut self, activations: &[Activation]) -> bool {
        assert!(
            !activations.is_empty(),
            "must supply at least one candidate activation"
        );
        let num_hidden = self.num_hidden_neurons();
        if num_hidden == 0 {
            return false;
        }
        let mut rng = thread_rng();
        let position = self.num_inputs + rng.gen_range(0..num_hidden);
        let neuron = self.neuron_order[position];
        self.activations
            .insert(neuron, *activations.choose(&mut rng).unwrap());
        true
    }
}

/// Structural equality. The order of entries within each synapse class
/// index is insignificant (removal shuffles it), so the indices are
/// compared as sets.
impl PartialEq for NeatGenome {
    fn eq(&self, other: &NeatGenome) -> bool {
        fn sorted(ids: &[SynapseId]) -> Vec<SynapseId> {
            let mut ids = ids.to_vec();
            ids.sort_unstable();
            ids
        }
        self.max_synapse_value == other.max_synapse_value
            && self.num_inputs == other.num_inputs
            && self.num_outputs == other.num_outputs
            && self.neuron_order == other.neuron_order
            && self.inverse_neuron_order == other.inverse_neuron_order
            && self.activations == other.activations
            && self.weights == other.weights
            && self.synapse_endpoints == other.synapse_endpoints
            && self.endpoint_synapses == other.endpoint_synapses
            && sorted(&self.forward_synapses) == sorted(&other.forward_synapses)
            && sorted(&self.backward_synapses) == sorted(&other.backward_synapses)
            && sorted(&self.self_synapses) == sorted(&other.self_synapses)
    }
}

impl Validatable for NeatGenome {
    type Error = GenomeValidationError;

    /// Checks every structural invariant of the genome.
    ///
    /// This should never fail: a failure means a bug in this crate, or a
    /// genome that was invalid when deserialized. It is intended for test
    /// harnesses and for post-load checking.
    fn validate(&self) -> Result<(), GenomeValidationError> {
        use GenomeValidationError::*;

        if self.num_inputs < 1 {
            return Err(NotEnoughInputs(self.num_inputs));
        }
        if self.num_outputs < 1 {
            return Err(NotEnoughOutputs(self.num_outputs));
        }
        if self.neuron_order.len() < self.num_inputs + self.num_outputs {
            return Err(TooFewNeurons {
                neurons: self.neuron_order.len(),
                inputs: self.num_inputs,
                outputs: self.num_outputs,
            });
        }
        if self.max_synapse_value <= 0.0 {
            return Err(NonPositiveMaxSynapseValue(self.max_synapse_value));
        }

        if self.neuron_order.len() != self.inverse_neuron_order.len()
            || self.neuron_order.len() != self.activations.len()
        {
            return Err(MismatchedNeuronContainers {
                order: self.neuron_order.len(),
                inverse_order: self.inverse_neuron_order.len(),
                activations: self.activations.len(),
            });
        }

        let classified =
            self.forward_synapses.len() + self.backward_synapses.len() + self.self_synapses.len();
        if self.weights.len() != self.synapse_endpoints.len()
            || self.weights.len() != self.endpoint_synapses.len()
            || self.weights.len() != classified
        {
            return Err(MismatchedSynapseContainers {
                weights: self.weights.len(),
                endpoints: self.synapse_endpoints.len(),
                inverse_endpoints: self.endpoint_synapses.len(),
                classified,
            });
        }

        // Neuron and synapse ids must not collide in the shared id space.
        let mut seen = std::collections::HashSet::with_capacity_and_hasher(
            self.activations.len() + self.weights.len(),
            RandomState::default(),
        );
        for id in self.activations.keys() {
            if !seen.insert(id.0) {
                return Err(DuplicateId(id.0));
            }
        }
        for id in self.weights.keys() {
            if !seen.insert(id.0) {
                return Err(DuplicateId(id.0));
            }
        }

        // The two synapse lookups must be mutual inverses. One direction
        // suffices: the lengths already match.
        for (&sid, endpoints) in &self.synapse_endpoints {
            match self.endpoint_synapses.get(endpoints) {
                Some(&back) if back == sid => {}
                _ => return Err(AsymmetricEndpointLookup(sid)),
            }
            if !self.weights.contains_key(&sid) {
                return Err(MissingWeight(sid));
            }
        }

        // Neuron order and its inverse must agree at every position.
        for (position, neuron) in self.neuron_order.iter().enumerate() {
            if self.inverse_neuron_order.get(neuron) != Some(&position) {
                return Err(AsymmetricNeuronOrder(position));
            }
        }

        // Every synapse must sit in the class its endpoint positions
        // dictate, never terminate at an input, and never connect two
        // outputs.
        let classes = [
            (SynapseClass::Forward, &self.forward_synapses),
            (SynapseClass::Backward, &self.backward_synapses),
            (SynapseClass::SelfLoop, &self.self_synapses),
        ];
        for (class, ids) in classes {
            for &sid in ids.iter() {
                let endpoints = self.synapse_endpoints[&sid];
                let from_pos = self.inverse_neuron_order[&endpoints.from];
                let to_pos = self.inverse_neuron_order[&endpoints.to];
                if Self::class_for_positions(from_pos, to_pos) != class {
                    return Err(MisclassifiedSynapse { id: sid, class });
                }
                if self.is_input_position(to_pos) {
                    return Err(SynapseIntoInput(sid));
                }
                if self.is_output_position(from_pos) && self.is_output_position(to_pos) {
                    return Err(SynapseBetweenOutputs(sid));
                }
            }
        }

        for (&sid, &weight) in &self.weights {
            if !(-self.max_synapse_value..=self.max_synapse_value).contains(&weight) {
                return Err(WeightOutOfBounds {
                    id: sid,
                    weight,
                    bound: self.max_synapse_value,
                });
            }
        }

        Ok(())
    }
}
