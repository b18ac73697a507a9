use std::path::PathBuf;

use anyhow::Context as _;
use attrevo_genetic::{BreedingSchedule, EvolutionParams, Evolver, GeneCatalog, RunSeed};
use chrono::Utc;
use clap::Parser;
use rand::Rng as _;

use crate::{
    report,
    summary::{BestChromosome, RunSummary},
    util,
};

/// Evolves combinations of weighted attribute genes with a genetic algorithm.
///
/// Every option defaults to the reference run: 100 chromosomes of 7 genes for 50
/// generations.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Number of chromosomes in the initial population
    #[arg(long)]
    population_size: Option<usize>,
    /// Number of genes in each chromosome
    #[arg(long)]
    gene_count: Option<usize>,
    /// Number of generations to evolve
    #[arg(long)]
    generations: Option<usize>,
    /// Share of the population used as breeding stock
    #[arg(long)]
    selection_fraction: Option<f64>,
    /// Share of genes replaced per mutation
    #[arg(long)]
    mutation_fraction: Option<f64>,
    /// Mutants appended per breeding round [default: population size * mutation fraction]
    #[arg(long)]
    mutation_batch: Option<usize>,
    /// Breeding rounds per generation: `single` or `all`
    #[arg(long)]
    breeding: Option<BreedingSchedule>,
    /// Maximum population size (unbounded when omitted)
    #[arg(long)]
    population_cap: Option<usize>,
    /// Generations between two reports
    #[arg(long)]
    report_interval: Option<usize>,
    /// Random seed as 32 hex digits (random when omitted)
    #[arg(long)]
    seed: Option<RunSeed>,
    /// Write a JSON summary of the run to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

impl CommandArgs {
    fn params(&self) -> EvolutionParams {
        let defaults = EvolutionParams::default();
        let population_size = self.population_size.unwrap_or(defaults.population_size);
        let mutation_fraction = self.mutation_fraction.unwrap_or(defaults.mutation_fraction);
        let mutation_batch = self.mutation_batch.unwrap_or_else(|| {
            EvolutionParams::default_mutation_batch(population_size, mutation_fraction)
        });
        EvolutionParams {
            population_size,
            gene_count: self.gene_count.unwrap_or(defaults.gene_count),
            num_generations: self.generations.unwrap_or(defaults.num_generations),
            selection_fraction: self
                .selection_fraction
                .unwrap_or(defaults.selection_fraction),
            mutation_fraction,
            mutation_batch,
            breeding: self.breeding.unwrap_or(defaults.breeding),
            population_cap: self.population_cap.or(defaults.population_cap),
            report_interval: self.report_interval.unwrap_or(defaults.report_interval),
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let evolver = Evolver::new(GeneCatalog::standard(), args.params())
        .context("Invalid evolution parameters")?;
    let catalog = evolver.catalog();

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    eprintln!("Seed: {seed}");

    let outcome = evolver.run(&mut seed.rng(), |generation_report| {
        report::print_generation(catalog, generation_report);
    });
    report::print_best(catalog, &outcome.best);

    if let Some(path) = &args.output {
        let summary = RunSummary {
            seed,
            params: evolver.params().clone(),
            generations: evolver.params().num_generations,
            final_population: outcome.population.len(),
            best: BestChromosome {
                genes: catalog
                    .labels(&outcome.best.chromosome)
                    .into_iter()
                    .map(str::to_owned)
                    .collect(),
                fitness: outcome.best.fitness,
            },
            finished_at: Utc::now(),
        };
        util::save_json(&summary, path)?;

        eprintln!();
        eprintln!("Summary saved successfully");
        eprintln!("  Path: {}", path.display());
        eprintln!("  Final population: {}", summary.final_population);
        eprintln!("  Best fitness: {}", summary.best.fitness);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_gives_defaults() {
        let args = CommandArgs::try_parse_from(["attrevo"]).unwrap();
        assert_eq!(args.params(), EvolutionParams::default());
        assert!(args.seed.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = CommandArgs::try_parse_from([
            "attrevo",
            "--gene-count",
            "12",
            "--generations",
            "5",
            "--breeding",
            "all",
            "--population-cap",
            "150",
            "--seed",
            "000102030405060708090a0b0c0d0e0f",
        ])
        .unwrap();

        let params = args.params();
        assert_eq!(params.gene_count, 12);
        assert_eq!(params.num_generations, 5);
        assert_eq!(params.breeding, BreedingSchedule::All);
        assert_eq!(params.population_cap, Some(150));
        assert_eq!(params.population_size, 100);
        assert_eq!(
            args.seed.unwrap().to_string(),
            "000102030405060708090a0b0c0d0e0f"
        );
    }

    #[test]
    fn test_mutation_batch_follows_population_size() {
        let args = CommandArgs::try_parse_from(["attrevo", "--population-size", "250"]).unwrap();
        assert_eq!(args.params().mutation_batch, 25);

        let args = CommandArgs::try_parse_from([
            "attrevo",
            "--population-size",
            "250",
            "--mutation-batch",
            "1",
        ])
        .unwrap();
        let params = args.params();
        assert_eq!(params.mutation_batch, 1);
        assert_eq!(params.mutation_steps(12), 1);
    }

    #[test]
    fn test_rejects_malformed_seed() {
        assert!(CommandArgs::try_parse_from(["attrevo", "--seed", "abc"]).is_err());
    }

    #[test]
    fn test_oversized_gene_count_is_invalid() {
        let args = CommandArgs::try_parse_from(["attrevo", "--gene-count", "13"]).unwrap();
        assert!(Evolver::new(GeneCatalog::standard(), args.params()).is_err());
    }
}
