//! Small stochastic helpers shared by mutation pipelines and populations.

use rand::thread_rng;
use rand::Rng;
use rand_distr::StandardNormal;

/// Derives a count from a standard deviation: `round(|N(0, 1)| * std)`,
/// capped at `10 * std` against pathological tail draws.
///
/// Mutation pipelines use this to schedule a variable number of
/// applications of each operator per generation, and the speciated
/// population uses it to schedule cross-species migrations.
///
/// # Examples
/// ```
/// use nevo::rng::std_n;
///
/// assert_eq!(std_n(0.0), 0);
/// for _ in 0..100 {
///     assert!(std_n(1.5) <= 15);
/// }
/// ```
pub fn std_n(std: f64) -> usize {
    if std <= 0.0 {
        return 0;
    }
    let draw: f64 = thread_rng().sample(StandardNormal);
    (draw * std).abs().round().min((10.0 * std).round()) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_std_never_schedules() {
        for _ in 0..100 {
            assert_eq!(std_n(0.0), 0);
        }
    }

    #[test]
    fn counts_stay_under_the_cap() {
        for _ in 0..10_000 {
            assert!(std_n(0.5) <= 5);
        }
    }
}
