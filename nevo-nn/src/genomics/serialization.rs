//! JSON persistence for [`NeatGenome`].
//!
//! The wire shape is a flat object: input and output counts, the neuron
//! list (whose order *is* the evaluation order), the synapse list, and
//! the weight bound. Synapse class indices are not stored; they are
//! reconstructed from endpoint positions on load, and the decoded genome
//! is validated before it is handed back, so an invalid genome surfaces as
//! a deserialization error.

use crate::genomics::{Activation, NeatGenome, NeuronId, SynapseId};
use nevo::Validatable;

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
struct RawNeuron {
    id: NeuronId,
    activation: Activation,
}

#[derive(Serialize, Deserialize)]
struct RawSynapse {
    id: SynapseId,
    from: NeuronId,
    to: NeuronId,
    weight: f64,
}

#[derive(Serialize, Deserialize)]
struct RawGenome {
    num_in: usize,
    num_out: usize,
    neurons: Vec<RawNeuron>,
    synapses: Vec<RawSynapse>,
    max_synapse_val: f64,
}

impl Serialize for NeatGenome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawGenome {
            num_in: self.num_inputs(),
            num_out: self.num_outputs(),
            neurons: self
                .neuron_order()
                .iter()
                .map(|&id| RawNeuron {
                    id,
                    activation: self
                        .activation_of(id)
                        .expect("every ordered neuron has an activation"),
                })
                .collect(),
            synapses: self
                .synapses()
                .map(|(id, endpoints, weight)| RawSynapse {
                    id,
                    from: endpoints.from,
                    to: endpoints.to,
                    weight,
                })
                .collect(),
            max_synapse_val: self.max_synapse_value(),
        };
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NeatGenome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<NeatGenome, D::Error> {
        let raw = RawGenome::deserialize(deserializer)?;
        let genome = NeatGenome::from_parts(
            raw.num_in,
            raw.num_out,
            raw.max_synapse_val,
            raw.neurons
                .into_iter()
                .map(|n| (n.id, n.activation))
                .collect(),
            raw.synapses
                .into_iter()
                .map(|s| (s.id, s.from, s.to, s.weight))
                .collect(),
        );
        genome
            .validate()
            .map_err(|e| D::Error::custom(format!("genome was invalid upon loading: {}", e)))?;
        Ok(genome)
    }
}
