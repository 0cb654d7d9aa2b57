//! Structural guarantees of the population loops.

use nevo::genomes::{
    ArrayCrossoverAsexual, ArrayCrossoverUniform, ArrayGenotype, ArrayMutationStd,
    NormalGenerator,
};
use nevo::{
    Counter, EliteSelection, HillClimberPopulation, Population, SpeciatedPopulation,
    TournamentSelection, TwoPhaseReproduction,
};

use std::collections::HashSet;
use std::sync::Arc;

fn sum_fitness(genotype: &ArrayGenotype<f64>) -> f64 {
    genotype.values.iter().sum()
}

#[test]
fn speciated_population_keeps_its_shape() {
    let counter = Arc::new(Counter::new());
    let generator = NormalGenerator::new(0.0, 1.0);
    let mut population = SpeciatedPopulation::new(
        Arc::clone(&counter),
        || ArrayGenotype::random(4, &generator),
        5,
        10,
        0.5,
        1.0,
        TournamentSelection::new(2),
        TwoPhaseReproduction::new(
            ArrayCrossoverUniform,
            ArrayMutationStd {
                mutate_probability: 0.2,
                mutate_std: 0.1,
            },
        ),
    );

    for _ in 0..25 {
        for agent in population.all_mut() {
            agent.fitness = sum_fitness(&agent.genotype);
        }
        population = population.next_generation();

        assert_eq!(population.num_species(), 5);
        let mut seen = HashSet::new();
        for (id, members) in population.species() {
            assert_eq!(members.len(), 10);
            assert!(seen.insert(id), "duplicate species id {}", id);
        }
        assert_eq!(population.all().len(), 50);
    }
}

#[test]
fn worst_species_is_replaced_when_removal_is_certain() {
    let counter = Arc::new(Counter::new());
    let generator = NormalGenerator::new(0.0, 1.0);
    let mut population = SpeciatedPopulation::new(
        Arc::clone(&counter),
        || ArrayGenotype::random(4, &generator),
        4,
        8,
        1.0,
        0.0,
        TournamentSelection::new(2),
        TwoPhaseReproduction::new(
            ArrayCrossoverUniform,
            ArrayMutationStd {
                mutate_probability: 0.2,
                mutate_std: 0.1,
            },
        ),
    );

    for _ in 0..10 {
        for agent in population.all_mut() {
            agent.fitness = sum_fitness(&agent.genotype);
        }
        // Find the worst species the same way the population will.
        let mut worst_id = 0;
        let mut worst_mean = f64::INFINITY;
        for (id, members) in population.species() {
            let mean =
                members.iter().map(|a| a.fitness).sum::<f64>() / members.len() as f64;
            if mean < worst_mean {
                worst_mean = mean;
                worst_id = id;
            }
        }

        population = population.next_generation();

        assert_eq!(population.num_species(), 4);
        assert!(
            population.species().all(|(id, _)| id != worst_id),
            "worst species {} survived certain removal",
            worst_id
        );
    }
}

#[test]
fn lone_species_survives_certain_removal() {
    let counter = Arc::new(Counter::new());
    let generator = NormalGenerator::new(0.0, 1.0);
    let mut population = SpeciatedPopulation::new(
        Arc::clone(&counter),
        || ArrayGenotype::random(4, &generator),
        1,
        6,
        1.0,
        0.0,
        TournamentSelection::new(2),
        TwoPhaseReproduction::new(
            ArrayCrossoverUniform,
            ArrayMutationStd {
                mutate_probability: 0.2,
                mutate_std: 0.1,
            },
        ),
    );

    for agent in population.all_mut() {
        agent.fitness = sum_fitness(&agent.genotype);
    }
    population = population.next_generation();
    assert_eq!(population.num_species(), 1);
    assert_eq!(population.all().len(), 6);
}

#[test]
fn hill_climber_preserves_the_selected_parent() {
    let generator = NormalGenerator::new(0.0, 1.0);
    let mut population = HillClimberPopulation::new(
        ArrayGenotype::random(4, &generator),
        ArrayGenotype::random(4, &generator),
        EliteSelection::new(),
        TwoPhaseReproduction::new(
            ArrayCrossoverAsexual,
            ArrayMutationStd {
                mutate_probability: 1.0,
                mutate_std: 0.5,
            },
        ),
    );

    for _ in 0..20 {
        let mut best = None;
        let mut best_fitness = f64::NEG_INFINITY;
        for agent in population.all_mut() {
            agent.fitness = sum_fitness(&agent.genotype);
            if agent.fitness > best_fitness {
                best_fitness = agent.fitness;
                best = Some(agent.genotype.clone());
            }
        }

        population = population.next_generation();
        let (kept, _) = population.both();
        assert_eq!(kept.genotype, best.unwrap());
    }
}

#[test]
#[should_panic]
fn hill_climber_rejects_multi_parent_reproduction() {
    let generator = NormalGenerator::new(0.0, 1.0);
    let population = HillClimberPopulation::new(
        ArrayGenotype::random(4, &generator),
        ArrayGenotype::random(4, &generator),
        TournamentSelection::new(2),
        TwoPhaseReproduction::new(
            ArrayCrossoverUniform,
            ArrayMutationStd {
                mutate_probability: 0.5,
                mutate_std: 0.5,
            },
        ),
    );
    population.next_generation();
}
