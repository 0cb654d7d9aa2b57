use crate::{Agent, Population, Reproduction, Selection};

/// A two-agent population implementing a stochastic hill climb.
///
/// Each generation, one of the two agents is selected as the parent. The
/// next generation keeps an untouched clone of the parent's genotype in
/// slot A and places a mutated offspring in slot B, so the best genotype
/// found so far is never lost.
///
/// Only single-parent reproduction makes sense here; pairing a hill
/// climber with a multi-parent strategy is a programmer error.
pub struct HillClimberPopulation<G, S, R> {
    a: Agent<G>,
    b: Agent<G>,
    selection: S,
    reproduction: R,
}

impl<G, S, R> HillClimberPopulation<G, S, R>
where
    S: Selection<G>,
    R: Reproduction<G>,
{
    pub fn new(
        initial_a: G,
        initial_b: G,
        selection: S,
        reproduction: R,
    ) -> HillClimberPopulation<G, S, R> {
        HillClimberPopulation {
            a: Agent::new(initial_a),
            b: Agent::new(initial_b),
            selection,
            reproduction,
        }
    }

    /// Both agents, in (A, B) order.
    pub fn both(&self) -> (&Agent<G>, &Agent<G>) {
        (&self.a, &self.b)
    }
}

impl<G, S, R> Population<G> for HillClimberPopulation<G, S, R>
where
    G: Clone,
    S: Selection<G>,
    R: Reproduction<G>,
{
    fn next_generation(self) -> Self {
        assert_eq!(
            self.reproduction.num_parents(),
            1,
            "hill climber only supports single-parent reproduction"
        );
        let HillClimberPopulation {
            a,
            b,
            mut selection,
            reproduction,
        } = self;
        let pool = [a, b];
        selection.set_agents(&pool);
        let parent = selection.select();
        let a = Agent::new(parent.genotype.clone());
        let b = Agent::new(reproduction.reproduce(&[&parent.genotype]));
        HillClimberPopulation {
            a,
            b,
            selection,
            reproduction,
        }
    }

    fn all(&self) -> Vec<&Agent<G>> {
        vec![&self.a, &self.b]
    }

    fn all_mut(&mut self) -> Vec<&mut Agent<G>> {
        vec![&mut self.a, &mut self.b]
    }
}
