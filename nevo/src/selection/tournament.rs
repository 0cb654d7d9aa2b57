use crate::{Agent, Selection};

use rand::{thread_rng, Rng};

/// Selects the best agent from a random tournament of agents.
///
/// Each `select` samples `tournament_size` agents uniformly with
/// replacement and returns the one with the highest fitness, ties going
/// to the first seen. Larger tournaments mean stronger selective
/// pressure.
///
/// # Examples
/// ```
/// use nevo::{Agent, Selection, TournamentSelection};
///
/// let mut selection = TournamentSelection::new(2);
/// let mut agents = vec![Agent::new('a'), Agent::new('b')];
/// agents[1].fitness = 1.0;
///
/// selection.set_agents(&agents);
/// let winner = selection.select();
/// assert!(winner.genotype == 'a' || winner.genotype == 'b');
/// ```
#[derive(Clone, Debug)]
pub struct TournamentSelection<G> {
    /// The number of agents drawn into each tournament.
    pub tournament_size: usize,
    agents: Vec<Agent<G>>,
}

impl<G> TournamentSelection<G> {
    /// Creates a tournament of the given size, with an empty pool.
    pub fn new(tournament_size: usize) -> TournamentSelection<G> {
        TournamentSelection {
            tournament_size,
            agents: Vec::new(),
        }
    }
}

impl<G: Clone> Selection<G> for TournamentSelection<G> {
    fn set_agents(&mut self, agents: &[Agent<G>]) {
        self.agents = agents.to_vec();
    }

    fn select(&self) -> &Agent<G> {
        assert!(
            self.tournament_size >= 1,
            "tournament size must be at least 1"
        );
        assert!(
            !self.agents.is_empty(),
            "set_agents must be called with at least one agent before select"
        );
        let mut rng = thread_rng();
        let mut best = &self.agents[rng.gen_range(0..self.agents.len())];
        for _ in 1..self.tournament_size {
            let challenger = &self.agents[rng.gen_range(0..self.agents.len())];
            if challenger.fitness > best.fitness {
                best = challenger;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustive_tournament_always_returns_the_best() {
        let mut agents: Vec<Agent<usize>> = (0..10).map(Agent::new).collect();
        for agent in &mut agents {
            agent.fitness = agent.genotype as f64;
        }
        // A tournament much larger than the pool almost surely sees agent 9.
        let mut selection = TournamentSelection::new(1000);
        selection.set_agents(&agents);
        assert_eq!(selection.select().genotype, 9);
    }

    #[test]
    #[should_panic]
    fn select_before_set_agents_panics() {
        let selection = TournamentSelection::<usize>::new(3);
        selection.select();
    }
}
