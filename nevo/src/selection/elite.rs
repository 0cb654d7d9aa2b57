use crate::{Agent, Selection};

/// Always selects the single best agent of the generation.
///
/// `set_agents` scans the pool once for the maximum-fitness agent; every
/// subsequent `select` returns that agent.
///
/// # Examples
/// ```
/// use nevo::{Agent, EliteSelection, Selection};
///
/// let mut selection = EliteSelection::new();
/// let mut agents = vec![Agent::new('a'), Agent::new('b'), Agent::new('c')];
/// agents[1].fitness = 2.0;
///
/// selection.set_agents(&agents);
/// assert_eq!(selection.select().genotype, 'b');
/// assert_eq!(selection.select().genotype, 'b');
/// ```
#[derive(Clone, Debug, Default)]
pub struct EliteSelection<G> {
    best: Option<Agent<G>>,
}

impl<G> EliteSelection<G> {
    pub fn new() -> EliteSelection<G> {
        EliteSelection { best: None }
    }
}

impl<G: Clone> Selection<G> for EliteSelection<G> {
    fn set_agents(&mut self, agents: &[Agent<G>]) {
        let mut best_fitness = f64::NEG_INFINITY;
        let mut best = None;
        for agent in agents {
            if agent.fitness > best_fitness {
                best_fitness = agent.fitness;
                best = Some(agent);
            }
        }
        self.best = best.cloned();
    }

    fn select(&self) -> &Agent<G> {
        self.best.as_ref().expect(
            "set_agents must be called before select, \
             with at least one agent of fitness above negative infinity",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_maximum_across_reselects() {
        let mut agents: Vec<Agent<i32>> = (0..5).map(Agent::new).collect();
        agents[3].fitness = 10.0;
        let mut selection = EliteSelection::new();
        selection.set_agents(&agents);
        for _ in 0..10 {
            assert_eq!(selection.select().genotype, 3);
        }
    }

    #[test]
    #[should_panic]
    fn all_nan_fitness_pool_panics_on_select() {
        let mut agents = vec![Agent::new(0)];
        agents[0].fitness = f64::NAN;
        let mut selection = EliteSelection::new();
        selection.set_agents(&agents);
        selection.select();
    }
}
