//! A small end-to-end run: a speciated population of float arrays
//! evolving towards a target sum.

use nevo::genomes::{ArrayCrossoverKPoint, ArrayGenotype, ArrayMutationStd, NormalGenerator};
use nevo::{Counter, Population, SpeciatedPopulation, TournamentSelection, TwoPhaseReproduction};

use std::sync::Arc;

#[test]
fn speciated_floats_converge_on_a_target_sum() {
    let counter = Arc::new(Counter::new());
    let generator = NormalGenerator::new(0.0, 0.5);
    let mut population = SpeciatedPopulation::new(
        Arc::clone(&counter),
        || ArrayGenotype::random(10, &generator),
        5,
        20,
        0.1,
        2.5,
        TournamentSelection::new(3),
        TwoPhaseReproduction::new(
            ArrayCrossoverKPoint { k: 2 },
            ArrayMutationStd {
                mutate_probability: 0.1,
                mutate_std: 0.05,
            },
        ),
    );

    // Fitness is maximal (zero) when the values sum to 10.
    let fitness =
        |genotype: &ArrayGenotype<f64>| -(10.0 - genotype.values.iter().sum::<f64>()).abs();

    let mut best = f64::NEG_INFINITY;
    for _ in 0..100 {
        best = f64::NEG_INFINITY;
        for agent in population.all_mut() {
            agent.fitness = fitness(&agent.genotype);
            if agent.fitness > best {
                best = agent.fitness;
            }
        }
        if best > -0.1 {
            break;
        }
        population = population.next_generation();
    }

    assert!(best > -0.1, "failed to converge, ending with fitness {}", best);
}
