use serde::{Deserialize, Serialize};

use std::fmt;

/// The pointwise activation function applied by a neuron.
///
/// Activations are plain values; every neuron holds exactly one. They
/// serialize to and from their lowercase names, so `"tanh"` round-trips
/// to [`Activation::Tanh`] and an unknown name is a deserialization
/// error.
///
/// # Examples
/// ```
/// use nevo_nn::genomics::Activation;
///
/// assert_eq!(Activation::Relu.apply(-2.0), 0.0);
/// assert_eq!(Activation::Relu.apply(2.0), 2.0);
///
/// let decoded: Activation = serde_json::from_str("\"sigmoid\"").unwrap();
/// assert_eq!(decoded, Activation::Sigmoid);
/// assert!(serde_json::from_str::<Activation>("\"softplus\"").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// y = x
    Linear,
    /// y = x {x > 0} | y = 0 {x <= 0}
    Relu,
    /// y = 1 / (1 + e^-x)
    Sigmoid,
    /// y = tanh(x)
    Tanh,
    /// y = sin(x)
    Sin,
    /// y = cos(x)
    Cos,
}

impl Activation {
    /// Every activation, in catalogue order.
    pub const ALL: [Activation; 6] = [
        Activation::Linear,
        Activation::Relu,
        Activation::Sigmoid,
        Activation::Tanh,
        Activation::Sin,
        Activation::Cos,
    ];

    /// Applies the activation function to the given value.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Linear => x,
            Activation::Relu => {
                if x < 0.0 {
                    0.0
                } else {
                    x
                }
            }
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
            Activation::Sin => x.sin(),
            Activation::Cos => x.cos(),
        }
    }

    /// The canonical lowercase name, as used in JSON.
    pub fn name(self) -> &'static str {
        match self {
            Activation::Linear => "linear",
            Activation::Relu => "relu",
            Activation::Sigmoid => "sigmoid",
            Activation::Tanh => "tanh",
            Activation::Sin => "sin",
            Activation::Cos => "cos",
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
