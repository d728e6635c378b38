//! GA run configuration.

use serde::{Deserialize, Serialize};

use super::RankingOrder;

/// Parameters of one evolution run.
///
/// Unknown fields are rejected; missing fields take their defaults.
///
/// # Example
///
/// ```
/// use u_schedule_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generation_count(50)
///     .with_seed(7);
/// assert_eq!(config.mutation_rate, 0.1);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GaConfig {
    /// Individuals per generation (default: 10).
    pub population_size: usize,
    /// Number of generations to evolve (default: 30).
    pub generation_count: usize,
    /// Per-gene machine reassignment probability in `[0, 1]` (default: 0.1).
    pub mutation_rate: f64,
    /// Top-ranked individuals carried unchanged into the next generation (default: 2).
    pub elite_count: usize,
    /// Number of top-ranked individuals parents are sampled from (default: 5).
    pub parent_pool_size: usize,
    /// Rank direction (default: [`RankingOrder::MinimizeCompletion`]).
    pub ranking: RankingOrder,
    /// Seed for [`super::EvolutionEngine::run_seeded`]. `None` = seed from the OS.
    pub seed: Option<u64>,
    /// Evaluate fitness on the rayon thread pool (default: false).
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            generation_count: 30,
            mutation_rate: 0.1,
            elite_count: 2,
            parent_pool_size: 5,
            ranking: RankingOrder::default(),
            seed: None,
            parallel: false,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    pub fn with_generation_count(mut self, count: usize) -> Self {
        self.generation_count = count;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_elite_count(mut self, count: usize) -> Self {
        self.elite_count = count;
        self
    }

    pub fn with_parent_pool_size(mut self, size: usize) -> Self {
        self.parent_pool_size = size;
        self
    }

    pub fn with_ranking(mut self, ranking: RankingOrder) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
