//! Whole-loop convergence tests: XOR with a feed-forward genome, and a
//! sequence-memory task exercising recurrent synapses.

use nevo::{
    Buildable, Counter, Forwarder, Population, SimplePopulation, TournamentSelection,
    TwoPhaseReproduction, Validatable,
};
use nevo_nn::genomics::{Activation, NeatCrossoverSimple, NeatGenome, NeatMutationStd};

use std::sync::Arc;

type NeatPopulation = SimplePopulation<
    NeatGenome,
    TournamentSelection<NeatGenome>,
    TwoPhaseReproduction<NeatCrossoverSimple, NeatMutationStd>,
>;

fn standard_pipeline(
    counter: &Arc<Counter>,
    recurrent_std: f64,
    prune_std: f64,
) -> NeatMutationStd {
    NeatMutationStd {
        counter: Arc::clone(counter),
        possible_activations: Activation::ALL.to_vec(),
        std_num_new_forward_synapses: 1.0,
        std_num_new_recurrent_synapses: recurrent_std,
        std_num_new_neurons: 0.5,
        std_num_mutate_synapses: 2.0,
        std_num_prune_synapses: prune_std,
        std_num_mutate_activations: 0.5,
        std_new_synapse_weight: 0.2,
        std_mutate_synapse_weight: 0.4,
        max_hidden_neurons: Some(3),
    }
}

fn seeded_population(counter: &Arc<Counter>, inputs: usize, recurrent_std: f64) -> NeatPopulation {
    let mut original = NeatGenome::new(counter, inputs, 1, Activation::Sigmoid);
    original.add_random_synapse(counter, 0.3, false);
    SimplePopulation::new(
        || {
            let mut genotype = original.clone();
            genotype.add_random_synapse(counter, 0.3, false);
            genotype
        },
        100,
        TournamentSelection::new(3),
        TwoPhaseReproduction::new(NeatCrossoverSimple, standard_pipeline(counter, recurrent_std, 0.0)),
    )
}

/// Scores one genome against a dataset of single-output rows, evaluated
/// with `steps` sequential forward calls per row batch. Error is the
/// cubed absolute difference, negated so that 0 is perfect.
fn score(genome: &NeatGenome, rows: &[(&[f64], f64)]) -> f64 {
    let mut network = genome.build();
    let mut fitness = 0.0;
    for &(inputs, target) in rows {
        let prediction = network.forward(inputs)[0];
        fitness -= (prediction - target).abs().powi(3);
    }
    fitness
}

/// Runs the generational loop until the best fitness clears -0.1, up to
/// 5000 generations. When `adaptive_pruning` is set, pruning switches on
/// (sigma 0.5) once the best fitness passes -0.4.
fn evolve_until_converged(
    counter: Arc<Counter>,
    mut population: NeatPopulation,
    rows: &[(&[f64], f64)],
    recurrent_std: f64,
    adaptive_pruning: bool,
) {
    let mut best_fitness = f64::NEG_INFINITY;
    let mut best_genome = None;
    let mut pruning_enabled = false;

    for _ in 0..5000 {
        best_fitness = f64::NEG_INFINITY;
        for agent in population.all_mut() {
            agent.fitness = score(&agent.genotype, rows);
            if agent.fitness > best_fitness {
                best_fitness = agent.fitness;
                best_genome = Some(agent.genotype.clone());
            }
        }
        if best_fitness > -0.1 {
            break;
        }
        if adaptive_pruning && !pruning_enabled && best_fitness > -0.4 {
            // The topology is good enough: start trimming excess
            // synapses while the weights keep converging.
            pruning_enabled = true;
            population = SimplePopulation::from_agents(
                population.into_agents(),
                TournamentSelection::new(3),
                TwoPhaseReproduction::new(
                    NeatCrossoverSimple,
                    standard_pipeline(&counter, recurrent_std, 0.5),
                ),
            );
        }
        population = population.next_generation();
    }

    assert!(
        best_fitness > -0.1,
        "failed to converge, ending with fitness {}",
        best_fitness
    );
    best_genome.unwrap().validate().unwrap();
}

#[test]
fn xor_is_learnable() {
    // The third input is a constant bias.
    let rows: [(&[f64], f64); 4] = [
        (&[0.0, 0.0, 1.0], 0.0),
        (&[0.0, 1.0, 1.0], 1.0),
        (&[1.0, 0.0, 1.0], 1.0),
        (&[1.0, 1.0, 1.0], 0.0),
    ];
    let counter = Arc::new(Counter::new());
    let population = seeded_population(&counter, 3, 0.0);
    evolve_until_converged(counter, population, &rows, 0.0, true);
}

#[test]
fn recurrent_memory_is_learnable() {
    let counter = Arc::new(Counter::new());
    let population = seeded_population(&counter, 1, 0.5);

    // Same input every step; the target sequence can only be produced by
    // carrying state across the four forward calls.
    let targets = [0.0, 1.0, 1.0, 0.0];
    let score_sequence = |genome: &NeatGenome| {
        let mut network = genome.build();
        let mut fitness = 0.0;
        for &target in &targets {
            let prediction = network.forward(&[1.0])[0];
            fitness -= (prediction - target).abs().powi(3);
        }
        fitness
    };

    let mut population = population;
    let mut best_fitness = f64::NEG_INFINITY;
    let mut best_genome = None;
    for _ in 0..5000 {
        best_fitness = f64::NEG_INFINITY;
        for agent in population.all_mut() {
            agent.fitness = score_sequence(&agent.genotype);
            if agent.fitness > best_fitness {
                best_fitness = agent.fitness;
                best_genome = Some(agent.genotype.clone());
            }
        }
        if best_fitness > -0.1 {
            break;
        }
        population = population.next_generation();
    }

    assert!(
        best_fitness > -0.1,
        "failed to converge, ending with fitness {}",
        best_fitness
    );
    best_genome.unwrap().validate().unwrap();
}
