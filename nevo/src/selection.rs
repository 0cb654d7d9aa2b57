//! Strategies for picking parents from a fitness-scored pool of agents.

mod elite;
mod tournament;

pub use elite::EliteSelection;
pub use tournament::TournamentSelection;

use crate::Agent;

/// A two-phase parent picker.
///
/// `set_agents` is called once per generation with the whole scored pool,
/// which lets a strategy do its per-generation work (caching, scanning for
/// a maximum, pre-sorting) exactly once. `select` is then called
/// repeatedly, once per parent needed.
pub trait Selection<G> {
    /// Caches whatever this strategy needs from the generation's pool.
    fn set_agents(&mut self, agents: &[Agent<G>]);

    /// Picks one agent from the cached pool.
    ///
    /// # Panics
    /// Panics if called before `set_agents`.
    fn select(&self) -> &Agent<G>;
}

/// Selects `n` genotypes with repeated calls to [`Selection::select`].
pub fn select_genotypes<G, S: Selection<G>>(selection: &S, n: usize) -> Vec<&G> {
    (0..n).map(|_| &selection.select().genotype).collect()
}
