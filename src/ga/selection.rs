//! Ranking, elitism and parent sampling.
//!
//! Each generation the population is ranked by fitness with a stable
//! sort. The first `elite_count` ranked individuals survive unchanged;
//! every remaining slot is filled by a child of two distinct parents
//! drawn uniformly, without replacement, from the first
//! `parent_pool_size` ranked individuals.
//!
//! # Rank direction
//!
//! Fitness is the negated total completion time. Sorting that value in
//! ascending order puts the *largest* total completion first, which is
//! the opposite of minimization. [`RankingOrder`] makes the direction
//! explicit:
//!
//! | Order | Sort | First-ranked |
//! |-------|------|--------------|
//! | `MinimizeCompletion` | fitness descending | smallest total completion |
//! | `Literal` | fitness ascending | largest total completion |

use std::cmp::Ordering;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{GaConfig, Individual, Population};

/// Direction in which individuals are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingOrder {
    /// Best (lowest total completion) first.
    #[default]
    MinimizeCompletion,
    /// Ascending by raw fitness value, i.e. worst total completion first.
    Literal,
}

impl RankingOrder {
    /// Ordering of two fitness values; `Less` ranks `a` ahead of `b`.
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        match self {
            RankingOrder::MinimizeCompletion => b.total_cmp(&a),
            RankingOrder::Literal => a.total_cmp(&b),
        }
    }
}

/// An individual together with its fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub individual: Individual,
    pub fitness: f64,
}

/// Errors raised while ranking or sampling parents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("InsufficientParents: min_required={min_required}, provided={provided}")]
    InsufficientParents { min_required: usize, provided: usize },
    #[error("EmptyPopulation: nothing to rank")]
    EmptyPopulation,
    #[error("FitnessLengthMismatch: individuals={individuals}, fitness={fitness}")]
    FitnessLengthMismatch { individuals: usize, fitness: usize },
}

/// Elitist truncation selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionStrategy {
    pub ranking: RankingOrder,
    pub elite_count: usize,
    pub parent_pool_size: usize,
}

impl Default for SelectionStrategy {
    fn default() -> Self {
        Self::new(RankingOrder::default())
    }
}

impl SelectionStrategy {
    /// Two elites, parents drawn from the top five.
    pub fn new(ranking: RankingOrder) -> Self {
        Self {
            ranking,
            elite_count: 2,
            parent_pool_size: 5,
        }
    }

    pub fn from_config(config: &GaConfig) -> Self {
        Self {
            ranking: config.ranking,
            elite_count: config.elite_count,
            parent_pool_size: config.parent_pool_size,
        }
    }

    /// Pairs each individual with its fitness and ranks the result.
    ///
    /// `fitness[i]` belongs to `population[i]`.
    ///
    /// # Errors
    /// [`SelectionError::FitnessLengthMismatch`] if the two lengths differ.
    pub fn rank(
        &self,
        population: Population,
        fitness: Vec<f64>,
    ) -> Result<Vec<Scored>, SelectionError> {
        if population.len() != fitness.len() {
            return Err(SelectionError::FitnessLengthMismatch {
                individuals: population.len(),
                fitness: fitness.len(),
            });
        }
        let mut scored: Vec<Scored> = population
            .into_iter()
            .zip(fitness)
            .map(|(individual, fitness)| Scored {
                individual,
                fitness,
            })
            .collect();
        self.sort(&mut scored);
        Ok(scored)
    }

    /// Stable sort in rank order.
    pub fn sort(&self, scored: &mut [Scored]) {
        scored.sort_by(|a, b| self.ranking.compare(a.fitness, b.fitness));
    }

    /// The leading `elite_count` individuals of a ranked slice.
    pub fn elites<'r>(&self, ranked: &'r [Scored]) -> &'r [Scored] {
        &ranked[..self.elite_count.min(ranked.len())]
    }

    /// The leading `parent_pool_size` individuals of a ranked slice.
    pub fn parent_pool<'r>(&self, ranked: &'r [Scored]) -> &'r [Scored] {
        &ranked[..self.parent_pool_size.min(ranked.len())]
    }

    /// Draws two distinct parents from the parent pool.
    pub fn sample_parents<'r, R: Rng + ?Sized>(
        &self,
        ranked: &'r [Scored],
        rng: &mut R,
    ) -> Result<(&'r Individual, &'r Individual), SelectionError> {
        let pool = self.parent_pool(ranked);
        if pool.len() < 2 {
            return Err(SelectionError::InsufficientParents {
                min_required: 2,
                provided: pool.len(),
            });
        }
        let picked = rand::seq::index::sample(rng, pool.len(), 2);
        Ok((
            &pool[picked.index(0)].individual,
            &pool[picked.index(1)].individual,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Gene;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn tagged(tag: usize) -> Individual {
        Individual::from_genes(vec![Gene::new(tag, 0)])
    }

    fn sample_population() -> (Population, Vec<f64>) {
        let pop = (0..6).map(tagged).collect();
        let fitness = vec![-30.0, -10.0, -50.0, -20.0, -40.0, -60.0];
        (pop, fitness)
    }

    fn tags(ranked: &[Scored]) -> Vec<usize> {
        ranked.iter().map(|s| s.individual.genes()[0].job).collect()
    }

    #[test]
    fn test_minimize_ranks_lowest_completion_first() {
        let strategy = SelectionStrategy::new(RankingOrder::MinimizeCompletion);
        let (pop, fitness) = sample_population();
        let ranked = strategy.rank(pop, fitness).unwrap();

        assert_eq!(tags(&ranked), vec![1, 3, 0, 4, 2, 5]);
        assert_eq!(ranked[0].fitness, -10.0);
    }

    #[test]
    fn test_literal_ranks_ascending_fitness() {
        // Ascending by negated total: largest total completion first.
        let strategy = SelectionStrategy::new(RankingOrder::Literal);
        let (pop, fitness) = sample_population();
        let ranked = strategy.rank(pop, fitness).unwrap();

        assert_eq!(tags(&ranked), vec![5, 2, 4, 0, 3, 1]);
        assert_eq!(ranked[0].fitness, -60.0);
    }

    #[test]
    fn test_sort_is_stable() {
        let strategy = SelectionStrategy::default();
        let pop = (0..4).map(tagged).collect();
        let ranked = strategy.rank(pop, vec![-5.0, -5.0, -1.0, -5.0]).unwrap();
        assert_eq!(tags(&ranked), vec![2, 0, 1, 3]);
    }

    #[test]
    fn test_elites_and_pool() {
        let strategy = SelectionStrategy::default();
        let (pop, fitness) = sample_population();
        let ranked = strategy.rank(pop, fitness).unwrap();

        assert_eq!(tags(strategy.elites(&ranked)), vec![1, 3]);
        assert_eq!(tags(strategy.parent_pool(&ranked)), vec![1, 3, 0, 4, 2]);
    }

    #[test]
    fn test_small_population_truncates() {
        let strategy = SelectionStrategy::default();
        let ranked = strategy.rank(vec![tagged(0)], vec![-1.0]).unwrap();
        assert_eq!(strategy.elites(&ranked).len(), 1);
        assert_eq!(strategy.parent_pool(&ranked).len(), 1);
    }

    #[test]
    fn test_parents_are_distinct_and_from_pool() {
        let strategy = SelectionStrategy::default();
        let (pop, fitness) = sample_population();
        let ranked = strategy.rank(pop, fitness).unwrap();
        let pool_tags = tags(strategy.parent_pool(&ranked));
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let (p1, p2) = strategy.sample_parents(&ranked, &mut rng).unwrap();
            let (t1, t2) = (p1.genes()[0].job, p2.genes()[0].job);
            assert_ne!(t1, t2);
            assert!(pool_tags.contains(&t1));
            assert!(pool_tags.contains(&t2));
        }
    }

    #[test]
    fn test_parent_sampling_covers_pool_uniformly() {
        let strategy = SelectionStrategy::default();
        let (pop, fitness) = sample_population();
        let ranked = strategy.rank(pop, fitness).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0usize; 6];

        let draws = 5000;
        for _ in 0..draws {
            let (p1, p2) = strategy.sample_parents(&ranked, &mut rng).unwrap();
            counts[p1.genes()[0].job] += 1;
            counts[p2.genes()[0].job] += 1;
        }

        // Worst individual (tag 5) is outside the pool.
        assert_eq!(counts[5], 0);
        // Each pool member is picked in 2/5 of the draws.
        for tag in [0, 1, 2, 3, 4] {
            let share = counts[tag] as f64 / draws as f64;
            assert!((share - 0.4).abs() < 0.05, "tag {tag}: {share}");
        }
    }

    #[test]
    fn test_insufficient_parents() {
        let strategy = SelectionStrategy::default();
        let ranked = strategy.rank(vec![tagged(0)], vec![-1.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let err = strategy.sample_parents(&ranked, &mut rng).unwrap_err();
        assert_eq!(
            err,
            SelectionError::InsufficientParents {
                min_required: 2,
                provided: 1
            }
        );
    }

    #[test]
    fn test_rank_rejects_fitness_length_mismatch() {
        let strategy = SelectionStrategy::default();
        let pop: Population = (0..3).map(tagged).collect();

        let err = strategy.rank(pop.clone(), vec![-1.0, -2.0]).unwrap_err();
        assert_eq!(
            err,
            SelectionError::FitnessLengthMismatch {
                individuals: 3,
                fitness: 2
            }
        );
        assert!(strategy.rank(pop, vec![-1.0; 4]).is_err());
    }
}
