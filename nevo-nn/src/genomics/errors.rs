use crate::genomics::{SynapseClass, SynapseId};

use std::error::Error;
use std::fmt;

/// A structural invariant violated by a [`NeatGenome`].
///
/// Produced by [`nevo::Validatable::validate`], and surfaced as a
/// deserialization error when a decoded genome fails its post-load check.
/// Seeing one of these outside deserialization means a bug in this crate,
/// not bad user data.
///
/// [`NeatGenome`]: crate::genomics::NeatGenome
#[derive(Clone, Debug, PartialEq)]
pub enum GenomeValidationError {
    /// The genome has no input neurons.
    NotEnoughInputs(usize),
    /// The genome has no output neurons.
    NotEnoughOutputs(usize),
    /// Fewer neurons than the declared input and output counts require.
    TooFewNeurons {
        neurons: usize,
        inputs: usize,
        outputs: usize,
    },
    /// The weight bound is zero or negative.
    NonPositiveMaxSynapseValue(f64),
    /// The neuron order, its inverse and the activation table disagree in
    /// size.
    MismatchedNeuronContainers {
        order: usize,
        inverse_order: usize,
        activations: usize,
    },
    /// The weight table, the two endpoint lookups and the class indices
    /// disagree in size.
    MismatchedSynapseContainers {
        weights: usize,
        endpoints: usize,
        inverse_endpoints: usize,
        classified: usize,
    },
    /// An id appears more than once across neurons and synapses.
    DuplicateId(usize),
    /// The endpoint lookups are not mutual inverses for this synapse.
    AsymmetricEndpointLookup(SynapseId),
    /// A synapse has endpoints but no weight.
    MissingWeight(SynapseId),
    /// The neuron order and its inverse disagree at this position.
    AsymmetricNeuronOrder(usize),
    /// A synapse sits in a class index its endpoint positions contradict.
    MisclassifiedSynapse { id: SynapseId, class: SynapseClass },
    /// A synapse terminates at an input position.
    SynapseIntoInput(SynapseId),
    /// A synapse both starts and ends at output positions.
    SynapseBetweenOutputs(SynapseId),
    /// A weight lies outside the genome's weight bound.
    WeightOutOfBounds {
        id: SynapseId,
        weight: f64,
        bound: f64,
    },
}

impl fmt::Display for GenomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use GenomeValidationError::*;
        match self {
            NotEnoughInputs(count) => write!(f, "not enough inputs: {}", count),
            NotEnoughOutputs(count) => write!(f, "not enough outputs: {}", count),
            TooFewNeurons {
                neurons,
                inputs,
                outputs,
            } => write!(
                f,
                "{} inputs and {} outputs are not possible with only {} neurons",
                inputs, outputs, neurons
            ),
            NonPositiveMaxSynapseValue(bound) => {
                write!(f, "invalid maximum synapse value: {}", bound)
            }
            MismatchedNeuronContainers {
                order,
                inverse_order,
                activations,
            } => write!(
                f,
                "neuron containers disagree in size: order {}, inverse order {}, activations {}",
                order, inverse_order, activations
            ),
            MismatchedSynapseContainers {
                weights,
                endpoints,
                inverse_endpoints,
                classified,
            } => write!(
                f,
                "synapse containers disagree in size: weights {}, endpoints {}, \
                 inverse endpoints {}, classified {}",
                weights, endpoints, inverse_endpoints, classified
            ),
            DuplicateId(id) => write!(f, "repeated id: {}", id),
            AsymmetricEndpointLookup(id) => write!(
                f,
                "endpoint lookups are not symmetrical for synapse {}",
                id
            ),
            MissingWeight(id) => write!(f, "synapse {} has endpoints but no weight", id),
            AsymmetricNeuronOrder(position) => write!(
                f,
                "neuron order and inverse neuron order disagree at position {}",
                position
            ),
            MisclassifiedSynapse { id, class } => write!(
                f,
                "synapse {} is incorrectly classified as {}",
                id, class
            ),
            SynapseIntoInput(id) => write!(f, "synapse {} terminates at an input", id),
            SynapseBetweenOutputs(id) => {
                write!(f, "synapse {} runs between two outputs", id)
            }
            WeightOutOfBounds { id, weight, bound } => write!(
                f,
                "synapse {} has weight {} outside the bound of {}",
                id, weight, bound
            ),
        }
    }
}

impl Error for GenomeValidationError {}
