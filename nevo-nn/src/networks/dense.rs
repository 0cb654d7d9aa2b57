use crate::genomics::Activation;
use nevo::genomes::Generator;
use nevo::{Crossover, Forwarder, Mutation};

use ndarray::{Array1, Array2};
use rand::{thread_rng, Rng};
use rand_distr::StandardNormal;

/// A genotype that is itself a dense feed-forward neural network.
///
/// Unlike the NEAT genome, the topology is fixed at creation: evolution
/// only touches the weights and biases. Because the genotype is directly
/// runnable it implements [`Forwarder`] itself; there is no separate
/// phenotype to build.
///
/// # Examples
/// ```
/// use nevo::genomes::NormalGenerator;
/// use nevo::Forwarder;
/// use nevo_nn::genomics::Activation;
/// use nevo_nn::networks::DenseGenotype;
///
/// let generator = NormalGenerator::new(0.0, 0.5);
/// let mut network = DenseGenotype::new(
///     &[3, 5, 2],
///     Activation::Linear,
///     Activation::Relu,
///     Activation::Tanh,
///     &generator,
///     &generator,
/// );
///
/// let outputs = network.forward(&[1.0, 0.5, -0.5]);
/// assert_eq!(outputs.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DenseGenotype {
    weights: Vec<Array2<f64>>,
    biases: Vec<Array1<f64>>,
    buffers: Vec<Array1<f64>>,
    input_activation: Activation,
    hidden_activation: Activation,
    output_activation: Activation,
}

impl DenseGenotype {
    /// Creates a dense genotype of the given layer shape, pulling initial
    /// weights and biases from the generators.
    ///
    /// # Panics
    /// Panics if `shape` has fewer than two layers.
    pub fn new(
        shape: &[usize],
        input: Activation,
        hidden: Activation,
        output: Activation,
        weights: &impl Generator<f64>,
        biases: &impl Generator<f64>,
    ) -> DenseGenotype {
        assert!(shape.len() >= 2, "cannot have fewer than two layers");
        DenseGenotype {
            weights: shape
                .windows(2)
                .map(|pair| Array2::from_shape_fn((pair[1], pair[0]), |_| weights.generate()))
                .collect(),
            biases: shape
                .iter()
                .map(|&size| Array1::from_shape_fn(size, |_| biases.generate()))
                .collect(),
            buffers: shape.iter().map(|&size| Array1::zeros(size)).collect(),
            input_activation: input,
            hidden_activation: hidden,
            output_activation: output,
        }
    }

    /// The number of layers, including input and output.
    pub fn num_layers(&self) -> usize {
        self.buffers.len()
    }

    fn activation_for_layer(&self, layer: usize) -> Activation {
        if layer == 0 {
            self.input_activation
        } else if layer == self.buffers.len() - 1 {
            self.output_activation
        } else {
            self.hidden_activation
        }
    }
}

impl Forwarder for DenseGenotype {
    fn forward(&mut self, inputs: &[f64]) -> Vec<f64> {
        assert_eq!(
            inputs.len(),
            self.buffers[0].len(),
            "incorrect number of inputs: got {}, expected {}",
            inputs.len(),
            self.buffers[0].len(),
        );
        for (slot, &input) in self.buffers[0].iter_mut().zip(inputs) {
            *slot = input;
        }
        for layer in 0..self.buffers.len() {
            let activation = self.activation_for_layer(layer);
            self.buffers[layer] += &self.biases[layer];
            self.buffers[layer].mapv_inplace(|x| activation.apply(x));
            if layer + 1 < self.buffers.len() {
                let next = self.weights[layer].dot(&self.buffers[layer]);
                self.buffers[layer + 1] = next;
            }
        }
        self.buffers.last().unwrap().to_vec()
    }
}

/// Uniform crossover over dense genotypes: every weight and bias is
/// copied from a uniformly chosen parent. The parent count is
/// configurable.
pub struct DenseCrossoverUniform {
    pub parents: usize,
}

impl Crossover<DenseGenotype> for DenseCrossoverUniform {
    fn crossover(&self, parents: &[&DenseGenotype]) -> DenseGenotype {
        assert!(self.parents >= 1, "must have at least one parent");
        assert_eq!(
            parents.len(),
            self.parents,
            "incorrect number of parents: got {}, expected {}",
            parents.len(),
            self.parents,
        );
        let mut child = parents[0].clone();
        for parent in parents {
            assert_eq!(
                parent.num_layers(),
                child.num_layers(),
                "parents must have the same number of layers"
            );
        }
        let mut rng = thread_rng();
        for (index, weights) in child.weights.iter_mut().enumerate() {
            for parent in parents {
                assert_eq!(
                    parent.weights[index].dim(),
                    weights.dim(),
                    "parents must have identically shaped layers"
                );
            }
            for (position, slot) in weights.indexed_iter_mut() {
                let parent = parents[rng.gen_range(0..parents.len())];
                *slot = parent.weights[index][position];
            }
        }
        for (index, biases) in child.biases.iter_mut().enumerate() {
            for parent in parents {
                assert_eq!(
                    parent.biases[index].len(),
                    biases.len(),
                    "parents must have identically shaped layers"
                );
            }
            for (position, slot) in biases.indexed_iter_mut() {
                let parent = parents[rng.gen_range(0..parents.len())];
                *slot = parent.biases[index][position];
            }
        }
        child
    }

    fn num_parents(&self) -> usize {
        self.parents
    }
}

/// Per-element mutation of a dense genotype: each weight and bias is,
/// with its category's chance, nudged by a normal draw and clamped to
/// its category's bound.
pub struct DenseMutationStd {
    /// The standard deviation of weight nudges.
    pub weight_std: f64,
    /// The standard deviation of bias nudges.
    pub bias_std: f64,
    /// The magnitude bound on weights; use `f64::INFINITY` for no bound.
    pub weight_max: f64,
    /// The magnitude bound on biases; use `f64::INFINITY` for no bound.
    pub bias_max: f64,
    /// The chance each weight is mutated.
    pub weight_chance: f64,
    /// The chance each bias is mutated.
    pub bias_chance: f64,
}

impl Mutation<DenseGenotype> for DenseMutationStd {
    fn mutate(&self, genotype: &mut DenseGenotype) {
        let mut rng = thread_rng();
        for weights in &mut genotype.weights {
            for slot in weights.iter_mut() {
                if rng.gen::<f64>() < self.weight_chance {
                    let draw: f64 = rng.sample(StandardNormal);
                    *slot = (*slot + draw * self.weight_std)
                        .clamp(-self.weight_max, self.weight_max);
                }
            }
        }
        for biases in &mut genotype.biases {
            for slot in biases.iter_mut() {
                if rng.gen::<f64>() < self.bias_chance {
                    let draw: f64 = rng.sample(StandardNormal);
                    *slot =
                        (*slot + draw * self.bias_std).clamp(-self.bias_max, self.bias_max);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nevo::genomes::NormalGenerator;

    fn zeroed(shape: &[usize]) -> DenseGenotype {
        let generator = NormalGenerator::new(0.0, 0.0);
        DenseGenotype::new(
            shape,
            Activation::Linear,
            Activation::Linear,
            Activation::Linear,
            &generator,
            &generator,
        )
    }

    #[test]
    fn zero_weight_network_outputs_zero() {
        let mut network = zeroed(&[4, 6, 3]);
        assert_eq!(network.forward(&[1.0, 2.0, 3.0, 4.0]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn constant_bias_flows_through_linear_layers() {
        let weights = NormalGenerator::new(0.0, 0.0);
        let biases = NormalGenerator::new(1.0, 0.0);
        let mut network = DenseGenotype::new(
            &[2, 2],
            Activation::Linear,
            Activation::Linear,
            Activation::Linear,
            &weights,
            &biases,
        );
        // Zero weights: only the output layer's bias survives.
        assert_eq!(network.forward(&[3.0, -3.0]), vec![1.0, 1.0]);
    }

    #[test]
    #[should_panic]
    fn single_layer_shapes_are_rejected() {
        zeroed(&[5]);
    }

    #[test]
    fn mutation_respects_bounds() {
        let mut network = zeroed(&[3, 3]);
        let mutation = DenseMutationStd {
            weight_std: 100.0,
            bias_std: 100.0,
            weight_max: 2.0,
            bias_max: 0.5,
            weight_chance: 1.0,
            bias_chance: 1.0,
        };
        for _ in 0..10 {
            mutation.mutate(&mut network);
        }
        assert!(network.weights.iter().flat_map(|w| w.iter()).all(|w| w.abs() <= 2.0));
        assert!(network.biases.iter().flat_map(|b| b.iter()).all(|b| b.abs() <= 0.5));
    }

    #[test]
    fn uniform_crossover_mixes_parent_values() {
        let mut first = zeroed(&[2, 2]);
        let mut second = zeroed(&[2, 2]);
        for slot in first.weights[0].iter_mut() {
            *slot = 1.0;
        }
        for slot in second.weights[0].iter_mut() {
            *slot = -1.0;
        }
        let crossover = DenseCrossoverUniform { parents: 2 };
        let child = crossover.crossover(&[&first, &second]);
        assert!(child.weights[0].iter().all(|&w| w == 1.0 || w == -1.0));
    }
}
