//! Generational loop execution.
//!
//! [`perform_iteration`] is one generation: mutate → score → replicate elites.
//! [`EvolveRunner`] seeds the population, repeats generations, and picks the
//! final winner.

use super::config::EvolveConfig;
use super::mutation::{change_budget, mutate, MutationOutcome};
use super::types::{Score, Weights};
use crate::error::Error;
use crate::grid::Grid;
use crate::problem::PartitionProblem;
use crate::random::rng_from_option;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::instrument;

/// Summary of one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationReport {
    /// Lowest fitness in the population after mutation.
    pub best_fitness: u64,
    /// Index of the best-fitness candidate; pass it as the next `previous_best`.
    pub best_index: usize,
    /// Index of the lowest-disparity candidate.
    pub best_disparity_index: usize,
    /// Index of the lowest edge-cut candidate.
    pub best_edge_cut_index: usize,
    /// Mutation totals across the population.
    pub mutations: MutationOutcome,
}

/// Runs one generation over `population` in place.
///
/// 1. Every candidate except `previous_best` receives
///    [`change_budget(iteration)`](change_budget) neighbour adoptions.
/// 2. All candidates are scored; the best fitness, best disparity and best
///    edge-cut are tracked, the lowest index winning ties.
/// 3. The remaining slots are overwritten in index order: the first
///    `2 * gen_base - 1` with the best-fitness grid, the next `gen_base - 1`
///    with the best-disparity grid, the next `gen_base - 1` with the best
///    edge-cut grid. The three elite slots themselves are never written.
///
/// `population` must hold `4 * gen_base` grids of the problem's shape.
///
/// # Panics
/// Panics if `population` is empty.
pub fn perform_iteration<R: Rng>(
    iteration: usize,
    population: &mut [Grid],
    problem: &PartitionProblem,
    config: &EvolveConfig,
    previous_best: usize,
    rng: &mut R,
) -> IterationReport {
    debug_assert_eq!(population.len(), config.population_size());

    let budget = change_budget(iteration);
    let mut mutations = MutationOutcome::default();
    for (i, grid) in population.iter_mut().enumerate() {
        if i != previous_best {
            mutations.absorb(mutate(grid, budget, config.max_attempts_per_change, rng));
        }
    }

    let scores = score_population(problem, population, config.weights);
    let best_index = first_min_by_key(&scores, |s| s.fitness);
    let best_disparity_index = first_min_by_key(&scores, |s| s.disparity as u64);
    let best_edge_cut_index = first_min_by_key(&scores, |s| s.edge_cut as u64);

    replicate_elites(
        population,
        config.gen_base,
        [best_index, best_disparity_index, best_edge_cut_index],
    );

    IterationReport {
        best_fitness: scores[best_index].fitness,
        best_index,
        best_disparity_index,
        best_edge_cut_index,
        mutations,
    }
}

/// Overwrites non-elite slots with copies of `[best, best_disparity, best_edge_cut]`
/// in the proportions `2g - 1`, `g - 1`, `g - 1`.
fn replicate_elites(population: &mut [Grid], gen_base: usize, elites: [usize; 3]) {
    let quotas = [
        2 * gen_base - 1,
        gen_base.saturating_sub(1),
        gen_base.saturating_sub(1),
    ];
    let mut slots = (0..population.len()).filter(|i| !elites.contains(i));

    for (source, copies) in elites.into_iter().zip(quotas) {
        if copies == 0 {
            continue;
        }
        let template = population[source].clone();
        for slot in slots.by_ref().take(copies) {
            population[slot].clone_from(&template);
        }
    }
}

/// Scores every candidate in index order.
fn score_population(
    problem: &PartitionProblem,
    population: &[Grid],
    weights: Weights,
) -> Vec<Score> {
    population
        .iter()
        .map(|grid| problem.score(grid, weights))
        .collect()
}

/// Index of the first minimum of `key` over `scores`.
fn first_min_by_key(scores: &[Score], key: impl Fn(&Score) -> u64) -> usize {
    scores
        .iter()
        .enumerate()
        .min_by_key(|(_, s)| key(s))
        .map(|(i, _)| i)
        .expect("population must not be empty")
}

/// Result of an evolutionary partitioning run.
#[derive(Debug, Clone)]
pub struct EvolveResult {
    /// The grid every candidate started from.
    pub initial: Grid,

    /// The best grid of the final population.
    pub best: Grid,

    /// Index of `best` in the final population.
    pub best_index: usize,

    /// Score of `best`.
    pub best_score: Score,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness of the seed population followed by the best fitness of
    /// every generation.
    pub fitness_history: Vec<u64>,

    /// Scores of the final population in index order.
    pub scores: Vec<Score>,

    /// Mutation totals over the whole run.
    pub mutations: MutationOutcome,

    /// Seed of the random source actually used.
    pub seed: u64,
}

/// Executes the evolutionary partitioner.
///
/// # Usage
///
/// ```
/// use u_partition::evolve::{EvolveConfig, EvolveRunner};
/// use u_partition::PartitionProblem;
///
/// let problem = PartitionProblem::new(6, 6, 4);
/// let config = EvolveConfig::default()
///     .with_gen_base(4)
///     .with_iterations(30)
///     .with_seed(42);
/// let result = EvolveRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.scores.len(), 16);
/// ```
pub struct EvolveRunner;

impl EvolveRunner {
    /// Runs from a uniformly random seed grid.
    pub fn run(problem: &PartitionProblem, config: &EvolveConfig) -> Result<EvolveResult, Error> {
        Self::run_with_cancel(problem, None, config, None)
    }

    /// Runs with every candidate starting as a copy of `seed_grid`.
    pub fn run_from(
        problem: &PartitionProblem,
        seed_grid: Grid,
        config: &EvolveConfig,
    ) -> Result<EvolveResult, Error> {
        Self::run_with_cancel(problem, Some(seed_grid), config, None)
    }

    /// Runs with an optional seed grid and cancellation token.
    ///
    /// If `cancel` is set to `true`, the run stops before the next
    /// generation and reports the best candidate of the current population.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            height = problem.height,
            width = problem.width,
            places = problem.places,
            gen_base = config.gen_base,
        )
    )]
    pub fn run_with_cancel(
        problem: &PartitionProblem,
        seed_grid: Option<Grid>,
        config: &EvolveConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<EvolveResult, Error> {
        problem.validate()?;
        config.validate().map_err(Error::InvalidConfig)?;

        let (mut rng, seed) = rng_from_option(config.seed);

        // 1. Seed population
        let initial = match seed_grid {
            Some(grid) => {
                problem.check_grid(&grid)?;
                grid
            }
            None => problem.random_grid(&mut rng),
        };
        let initial_score = problem.score(&initial, config.weights);
        let mut population = vec![initial.clone(); config.population_size()];

        let mut fitness_history = Vec::with_capacity(config.iterations + 1);
        fitness_history.push(initial_score.fitness);

        let mut previous_best = 0;
        let mut mutations = MutationOutcome::default();
        let mut cancelled = false;
        let mut generations = 0;

        // 2. Generational loop
        for iteration in 0..config.iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let report = perform_iteration(
                iteration,
                &mut population,
                problem,
                config,
                previous_best,
                &mut rng,
            );
            previous_best = report.best_index;
            mutations.absorb(report.mutations);
            fitness_history.push(report.best_fitness);
            generations += 1;

            tracing::debug!(
                iteration,
                best_fitness = report.best_fitness,
                best_index = report.best_index,
                skipped = report.mutations.skipped,
                "generation complete"
            );
        }

        // 3. Final selection
        let scores = score_population(problem, &population, config.weights);
        let best_index = first_min_by_key(&scores, |s| s.fitness);
        let best_score = scores[best_index];

        tracing::info!(
            seed,
            generations,
            fitness = best_score.fitness,
            disparity = best_score.disparity,
            edge_cut = best_score.edge_cut,
            "evolution finished"
        );

        Ok(EvolveResult {
            initial,
            best: population.swap_remove(best_index),
            best_index,
            best_score,
            generations,
            cancelled,
            fitness_history,
            scores,
            mutations,
            seed,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
