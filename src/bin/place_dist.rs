//! Partitions a 33x33 grid into 128 places and prints the result.
//!
//! Pass `--normalize` to balance the winning grid with the boundary
//! normalizer before printing it.

use tracing::Level;
use u_partition::evolve::{EvolveConfig, EvolveRunner, Weights};
use u_partition::normalize::{normalize_sizes, NormalizeConfig};
use u_partition::PartitionProblem;

fn main() -> Result<(), u_partition::Error> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let problem = PartitionProblem::new(33, 33, 128);
    problem.validate()?;

    let (target, leftover) = problem.target_share();
    let (x_splits, y_splits) = problem.splits();
    tracing::info!(target, leftover, x_splits, y_splits, "problem size");

    let config = EvolveConfig::default()
        .with_gen_base(50)
        .with_iterations(500)
        .with_weights(Weights::new(3, 2));

    let normalize = std::env::args().skip(1).any(|arg| arg == "--normalize");
    let mut result = EvolveRunner::run(&problem, &config)?;
    println!("{}", result.initial.render(problem.places));

    for (i, score) in result.scores.iter().enumerate() {
        println!(
            "{i} edge cut is {} and disparity is {} fitness {}",
            score.edge_cut, score.disparity, score.fitness
        );
    }
    println!();

    if normalize {
        let outcome =
            normalize_sizes(&mut result.best, problem.places, &NormalizeConfig::default())?;
        let score = problem.score(&result.best, config.weights);
        tracing::info!(
            passes = outcome.passes,
            swaps = outcome.swaps,
            disparity = score.disparity,
            edge_cut = score.edge_cut,
            "normalized best grid"
        );
    }
    print!("{}", result.best.render(problem.places));

    Ok(())
}
