//! Evolves an XOR approximator with a speciated population of NEAT
//! genomes, then prints the champion as JSON.

use nevo::logging::{EvolutionLogger, ReportingLevel};
use nevo::{
    Buildable, Counter, Forwarder, Population, SpeciatedPopulation, TournamentSelection,
    TwoPhaseReproduction, Validatable,
};
use nevo_nn::genomics::{Activation, NeatCrossoverSimple, NeatGenome, NeatMutationStd};

use std::sync::Arc;

const MAX_GENERATIONS: usize = 5000;
const TARGET_FITNESS: f64 = -0.1;

// The third input is a constant bias.
const ROWS: [([f64; 3], f64); 4] = [
    ([0.0, 0.0, 1.0], 0.0),
    ([0.0, 1.0, 1.0], 1.0),
    ([1.0, 0.0, 1.0], 1.0),
    ([1.0, 1.0, 1.0], 0.0),
];

fn evaluate(genome: &NeatGenome) -> f64 {
    let mut network = genome.build();
    let mut fitness = 0.0;
    for (inputs, target) in &ROWS {
        let prediction = network.forward(inputs)[0];
        fitness -= (prediction - target).abs().powi(3);
    }
    fitness
}

fn main() {
    let counter = Arc::new(Counter::new());

    let mutation = NeatMutationStd {
        counter: Arc::clone(&counter),
        possible_activations: Activation::ALL.to_vec(),
        std_num_new_forward_synapses: 1.0,
        std_num_new_recurrent_synapses: 0.0,
        std_num_new_neurons: 0.5,
        std_num_mutate_synapses: 2.0,
        std_num_prune_synapses: 0.0,
        std_num_mutate_activations: 0.5,
        std_new_synapse_weight: 0.2,
        std_mutate_synapse_weight: 0.4,
        max_hidden_neurons: Some(3),
    };

    let mut original = NeatGenome::new(&counter, 3, 1, Activation::Sigmoid);
    original.add_random_synapse(&counter, 0.3, false);

    let mut population = SpeciatedPopulation::new(
        Arc::clone(&counter),
        || {
            let mut genotype = original.clone();
            genotype.add_random_synapse(&counter, 0.3, false);
            genotype
        },
        5,
        20,
        0.3,
        1.0,
        TournamentSelection::new(3),
        TwoPhaseReproduction::new(NeatCrossoverSimple, mutation),
    );

    let mut logger = EvolutionLogger::new(ReportingLevel::Champion);

    for generation in 0..MAX_GENERATIONS {
        for agent in population.all_mut() {
            agent.fitness = evaluate(&agent.genotype);
        }
        logger.snapshot(&population);
        let log = logger.last().expect("a snapshot was just taken");
        if generation % 50 == 0 {
            println!("{}", log);
        }
        if log.fitness.maximum > TARGET_FITNESS {
            break;
        }
        population = population.next_generation();
    }

    let log = logger.last().expect("at least one generation was logged");
    let champion = log
        .champion
        .as_ref()
        .expect("the champion reporting level keeps genomes");
    match champion.validate() {
        Ok(()) => {}
        Err(error) => {
            eprintln!("champion failed validation: {}", error);
            std::process::exit(1);
        }
    }

    if log.fitness.maximum > TARGET_FITNESS {
        println!("solution found after {} generations", log.generation + 1);
    } else {
        println!(
            "no solution after {} generations (best fitness {:.4})",
            MAX_GENERATIONS, log.fitness.maximum
        );
    }
    println!(
        "{}",
        serde_json::to_string_pretty(champion).expect("genomes serialize to JSON")
    );
}
