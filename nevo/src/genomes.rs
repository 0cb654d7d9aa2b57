//! Genotype implementations that need nothing beyond the core traits.
//!
//! Network-shaped genotypes live in the companion `nevo-nn` crate; this
//! module provides the plain array genotype and the value generators used
//! to initialise it.

mod array;

pub use array::{
    ArrayCrossoverAsexual, ArrayCrossoverKPoint, ArrayCrossoverUniform, ArrayGenotype,
    ArrayMutationChoices, ArrayMutationFlip, ArrayMutationStd, ChoicesGenerator, Generator,
    NormalGenerator,
};
