//! Generational snapshot logging.
//!
//! An [`EvolutionLogger`] records one [`Log`] per call, capturing fitness
//! statistics for the generation and, depending on the
//! [`ReportingLevel`], a clone of the champion genotype.

use crate::Population;

use std::fmt;

/// How much of a population each snapshot keeps.
#[derive(Clone, Copy, Debug)]
pub enum ReportingLevel {
    /// Clones the champion genotype into every snapshot.
    Champion,
    /// Keeps statistics only.
    NoGenomes,
}

/// A struct for reporting basic statistical data.
#[derive(Clone, Debug)]
pub struct Stats {
    pub maximum: f64,
    pub minimum: f64,
    pub mean: f64,
    pub median: f64,
}

impl Stats {
    /// Returns statistics about the numbers in a sequence.
    ///
    /// # Examples
    /// ```
    /// use nevo::logging::Stats;
    ///
    /// let stats = Stats::from_iter([-2.0, -1.0, 0.5, 1.0, 1.5].iter().copied());
    /// assert_eq!(stats.maximum, 1.5);
    /// assert_eq!(stats.minimum, -2.0);
    /// assert_eq!(stats.mean, 0.0);
    /// assert_eq!(stats.median, 0.5);
    /// ```
    pub fn from_iter(data: impl Iterator<Item = f64>) -> Stats {
        let mut data: Vec<f64> = data.collect();
        assert!(!data.is_empty(), "cannot compute statistics of no data");
        let (mut max, mut min, mut sum) = (f64::MIN, f64::MAX, 0.0);
        for d in &data {
            max = d.max(max);
            min = d.min(min);
            sum += d;
        }
        let mean = sum / data.len() as f64;
        data.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
        let mid = data.len() / 2;
        let median = if data.len() % 2 == 0 {
            (data[mid - 1] + data[mid]) / 2.0
        } else {
            data[mid]
        };
        Stats {
            maximum: max,
            minimum: min,
            mean,
            median,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "max {:.4}, min {:.4}, mean {:.4}, median {:.4}",
            self.maximum, self.minimum, self.mean, self.median
        )
    }
}

/// A snapshot of one generation.
#[derive(Clone, Debug)]
pub struct Log<G> {
    pub generation: usize,
    pub agent_count: usize,
    pub fitness: Stats,
    /// The highest-fitness genotype, if the reporting level keeps it.
    pub champion: Option<G>,
}

impl<G> fmt::Display for Log<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "generation {} ({} agents): fitness {}",
            self.generation, self.agent_count, self.fitness
        )
    }
}

/// A log of the evolution of a population over time.
///
/// # Examples
/// ```
/// use nevo::genomes::{ArrayCrossoverUniform, ArrayGenotype, ArrayMutationStd, NormalGenerator};
/// use nevo::logging::{EvolutionLogger, ReportingLevel};
/// use nevo::{SimplePopulation, TournamentSelection, TwoPhaseReproduction};
///
/// let generator = NormalGenerator::new(0.0, 1.0);
/// let population = SimplePopulation::new(
///     || ArrayGenotype::random(4, &generator),
///     10,
///     TournamentSelection::new(2),
///     TwoPhaseReproduction::new(
///         ArrayCrossoverUniform,
///         ArrayMutationStd { mutate_probability: 0.2, mutate_std: 0.1 },
///     ),
/// );
///
/// let mut logger = EvolutionLogger::new(ReportingLevel::NoGenomes);
/// logger.snapshot(&population);
/// assert_eq!(logger.iter().count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct EvolutionLogger<G> {
    reporting_level: ReportingLevel,
    logs: Vec<Log<G>>,
    generation: usize,
}

impl<G: Clone> EvolutionLogger<G> {
    /// Returns a logger with the given reporting level.
    pub fn new(reporting_level: ReportingLevel) -> EvolutionLogger<G> {
        EvolutionLogger {
            reporting_level,
            logs: Vec::new(),
            generation: 0,
        }
    }

    /// Stores a snapshot of the population; generations are numbered by
    /// snapshot order, starting at 0.
    pub fn snapshot<P: Population<G>>(&mut self, population: &P) {
        let agents = population.all();
        let fitness = Stats::from_iter(agents.iter().map(|a| a.fitness));
        let champion = match self.reporting_level {
            ReportingLevel::Champion => agents
                .iter()
                .max_by(|a, b| a.fitness.partial_cmp(&b.fitness).unwrap())
                .map(|a| a.genotype.clone()),
            ReportingLevel::NoGenomes => None,
        };
        self.logs.push(Log {
            generation: self.generation,
            agent_count: agents.len(),
            fitness,
            champion,
        });
        self.generation += 1;
    }

    /// Iterates over all stored snapshots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Log<G>> {
        self.logs.iter()
    }

    /// The most recent snapshot, if any.
    pub fn last(&self) -> Option<&Log<G>> {
        self.logs.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_even_sized_data_averages_the_middle_pair() {
        let stats = Stats::from_iter([4.0, 1.0, 2.0, 3.0].iter().copied());
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.mean, 2.5);
    }

    #[test]
    fn single_sample_stats() {
        let stats = Stats::from_iter(std::iter::once(7.0));
        assert_eq!(stats.maximum, 7.0);
        assert_eq!(stats.minimum, 7.0);
        assert_eq!(stats.mean, 7.0);
        assert_eq!(stats.median, 7.0);
    }
}
