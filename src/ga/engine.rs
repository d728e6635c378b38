//! Generational GA driver.
//!
//! # Lifecycle
//!
//! ```text
//! Initialized ──step──▶ Evolving ──step × (G-1)──▶ Converged ──finish──▶ EvolutionResult
//! ```
//!
//! A run performs exactly `generation_count` generations; there is no
//! early exit. Each generation:
//!
//! 1. Evaluate every individual (optionally on the rayon pool).
//! 2. Rank with the [`SelectionStrategy`].
//! 3. Copy the elites into the next population unchanged.
//! 4. Fill the remaining slots with mutated crossover children of
//!    parents sampled from the top of the ranking.
//!
//! After the last generation the population is ranked once more and
//! the first-ranked individual is the result.
//!
//! All randomness comes from the caller's RNG, consumed sequentially, so
//! a fixed seed reproduces a run exactly, with or without parallel
//! evaluation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{
    FitnessEvaluator, GaConfig, GeneticOperators, Individual, Population, Scored,
    SelectionError, SelectionStrategy,
};
use crate::error::ScheduleError;
use crate::export::ScheduleExporter;
use crate::models::{JobCatalog, MachineSet};
use crate::validation::{validate_input, validate_population};

/// Phase of an [`EvolutionRun`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Initial population created, no generation run yet.
    Initialized,
    /// At least one generation run, more remaining.
    Evolving,
    /// All generations run.
    Converged,
}

/// Population statistics of one generation, taken at ranking time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,
    /// Fitness of the first-ranked individual.
    pub leader_fitness: f64,
    /// Lowest total completion time in the population.
    pub min_total_completion: f64,
    /// Mean total completion time.
    pub mean_total_completion: f64,
    /// Highest total completion time in the population.
    pub max_total_completion: f64,
}

impl GenerationStats {
    fn from_ranked(generation: usize, ranked: &[Scored]) -> Self {
        let totals = ranked.iter().map(|s| -s.fitness);
        let (min, max, sum) = totals.fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), t| (min.min(t), max.max(t), sum + t),
        );
        Self {
            generation,
            leader_fitness: ranked.first().map_or(f64::NAN, |s| s.fitness),
            min_total_completion: min,
            mean_total_completion: sum / ranked.len().max(1) as f64,
            max_total_completion: max,
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// First-ranked individual after the final generation.
    pub best: Individual,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// Generations performed.
    pub generations: usize,
    /// Per-generation statistics, in order.
    pub history: Vec<GenerationStats>,
}

/// Validated GA problem: catalog, machines and parameters.
///
/// # Example
///
/// ```
/// use u_schedule_ga::ga::{EvolutionEngine, GaConfig};
/// use u_schedule_ga::models::{Job, JobCatalog, MachineSet};
///
/// let catalog = JobCatalog::new(vec![Job::new("J1", 4.0), Job::new("J2", 6.0)]);
/// let machines = MachineSet::new(["M1", "M2"]);
/// let config = GaConfig::default().with_seed(42);
/// let engine = EvolutionEngine::new(catalog, machines, config).unwrap();
///
/// let result = engine.run_seeded().unwrap();
/// assert_eq!(result.generations, 30);
/// assert_eq!(result.best.len(), 2);
///
/// let schedule = engine.exporter().export(&result.best).unwrap();
/// assert_eq!(schedule.summary.total_jobs, 2);
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionEngine {
    catalog: JobCatalog,
    machines: MachineSet,
    config: GaConfig,
    selection: SelectionStrategy,
    operators: GeneticOperators,
}

impl EvolutionEngine {
    /// Validates the inputs and builds an engine.
    ///
    /// # Errors
    /// Any [`ScheduleError`] precondition failure; see [`validate_input`].
    pub fn new(
        catalog: JobCatalog,
        machines: MachineSet,
        config: GaConfig,
    ) -> Result<Self, ScheduleError> {
        validate_input(&catalog, &machines, &config)?;
        Ok(Self {
            selection: SelectionStrategy::from_config(&config),
            operators: GeneticOperators::new(config.mutation_rate),
            catalog,
            machines,
            config,
        })
    }

    pub fn catalog(&self) -> &JobCatalog {
        &self.catalog
    }

    pub fn machines(&self) -> &MachineSet {
        &self.machines
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    pub fn selection(&self) -> &SelectionStrategy {
        &self.selection
    }

    pub fn evaluator(&self) -> FitnessEvaluator<'_> {
        FitnessEvaluator::new(&self.catalog, &self.machines)
    }

    pub fn exporter(&self) -> ScheduleExporter<'_> {
        ScheduleExporter::new(&self.catalog, &self.machines)
    }

    /// Creates a fresh run with a random initial population.
    pub fn start<R: Rng + ?Sized>(&self, rng: &mut R) -> EvolutionRun<'_> {
        let population = Individual::random_population(
            self.config.population_size,
            &self.catalog,
            &self.machines,
            rng,
        );
        EvolutionRun::new(self, population)
    }

    /// Runs all generations with the given RNG.
    #[instrument(level = "info", skip(self, rng), fields(
        jobs = self.catalog.len(),
        machines = self.machines.len(),
        population_size = self.config.population_size,
        generations = self.config.generation_count
    ))]
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<EvolutionResult, ScheduleError> {
        self.start(rng).finish(rng)
    }

    /// Runs with a [`StdRng`] seeded from `config.seed`, or from the OS
    /// when no seed is configured.
    pub fn run_seeded(&self) -> Result<EvolutionResult, ScheduleError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run(&mut rng)
    }
}

/// State of one invocation of the engine.
///
/// Owns the current population; nothing is shared between runs.
#[derive(Debug, Clone)]
pub struct EvolutionRun<'e> {
    engine: &'e EvolutionEngine,
    state: RunState,
    generation: usize,
    population: Population,
    history: Vec<GenerationStats>,
}

impl<'e> EvolutionRun<'e> {
    fn new(engine: &'e EvolutionEngine, population: Population) -> Self {
        Self {
            engine,
            state: RunState::Initialized,
            generation: 0,
            population,
            history: Vec::with_capacity(engine.config.generation_count),
        }
    }

    /// Starts a run from an explicit population.
    ///
    /// # Errors
    /// See [`validate_population`]: the population must hold
    /// `population_size` individuals with one in-range gene per catalog job.
    pub fn with_population(
        engine: &'e EvolutionEngine,
        population: Population,
    ) -> Result<Self, ScheduleError> {
        validate_population(&population, &engine.catalog, &engine.machines, &engine.config)?;
        Ok(Self::new(engine, population))
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Fitness of every individual, in population order.
    pub fn evaluate(&self) -> Vec<f64> {
        let evaluator = self.engine.evaluator();
        if self.engine.config.parallel {
            self.population
                .par_iter()
                .map(|ind| evaluator.evaluate(ind))
                .collect()
        } else {
            self.population
                .iter()
                .map(|ind| evaluator.evaluate(ind))
                .collect()
        }
    }

    /// The current population, scored and ranked.
    pub fn ranked(&self) -> Result<Vec<Scored>, ScheduleError> {
        let ranked = self
            .engine
            .selection
            .rank(self.population.clone(), self.evaluate())?;
        Ok(ranked)
    }

    /// Runs one generation. Returns `false` once all generations are done.
    ///
    /// # Errors
    /// [`ScheduleError::Selection`] if ranking or parent sampling fails.
    /// The run must be discarded afterwards.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<bool, ScheduleError> {
        let total = self.engine.config.generation_count;
        if self.generation >= total {
            self.state = RunState::Converged;
            return Ok(false);
        }

        let fitness = self.evaluate();
        let population = std::mem::take(&mut self.population);
        let selection = &self.engine.selection;
        let ranked = selection.rank(population, fitness)?;

        let stats = GenerationStats::from_ranked(self.generation, &ranked);
        tracing::debug!(
            generation = self.generation,
            leader_fitness = stats.leader_fitness,
            min_total = stats.min_total_completion,
            mean_total = stats.mean_total_completion,
            "generation ranked"
        );
        self.history.push(stats);

        let size = self.engine.config.population_size;
        let mut next: Population = Vec::with_capacity(size);
        next.extend(
            selection
                .elites(&ranked)
                .iter()
                .map(|s| s.individual.clone()),
        );
        while next.len() < size {
            let (p1, p2) = selection.sample_parents(&ranked, rng)?;
            next.push(
                self.engine
                    .operators
                    .breed(p1, p2, &self.engine.machines, rng),
            );
        }

        self.population = next;
        self.generation += 1;
        self.state = if self.generation >= total {
            RunState::Converged
        } else {
            RunState::Evolving
        };
        Ok(true)
    }

    /// Runs the remaining generations and returns the first-ranked individual.
    pub fn finish<R: Rng + ?Sized>(
        mut self,
        rng: &mut R,
    ) -> Result<EvolutionResult, ScheduleError> {
        while self.step(rng)? {}

        let ranked = self.ranked()?;
        let best = ranked
            .into_iter()
            .next()
            .ok_or(SelectionError::EmptyPopulation)?;

        tracing::info!(
            generations = self.generation,
            best_fitness = best.fitness,
            "evolution converged"
        );

        Ok(EvolutionResult {
            best: best.individual,
            best_fitness: best.fitness,
            generations: self.generation,
            history: self.history,
        })
    }
}
