//! Genetic algorithm evolving combinations of weighted attribute genes.
//!
//! A chromosome is a short, duplicate-free list of genes drawn from a [`GeneCatalog`].
//! Every gene is either beneficial or detrimental and carries a magnitude; the fitness of a
//! chromosome sums the signed weights of its genes and adds one point per beneficial gene
//! (minus one per detrimental gene). The [`Evolver`] grows a population of chromosomes
//! toward higher fitness over a fixed number of generations.
//!
//! # How a Run Works
//!
//! 1. **Population** - `population_size` random chromosomes of `gene_count` genes
//! 2. **Selection** - The fittest `selection_fraction` becomes breeding stock
//! 3. **Reproduction** - Crossover children and mutants are appended to the population
//! 4. **Repeat** - For `num_generations` generations, reporting every `report_interval`
//! 5. **Result** - The fittest chromosome of the final population
//!
//! See the [`evolver`] module for the operators.
//!
//! # Example
//!
//! ```
//! use attrevo_genetic::{EvolutionParams, Evolver, GeneCatalog, RunSeed};
//!
//! let evolver = Evolver::new(GeneCatalog::standard(), EvolutionParams::default()).unwrap();
//! let mut rng = RunSeed::from_bytes([42; 16]).rng();
//!
//! let outcome = evolver.run(&mut rng, |report| {
//!     println!("generation {}: best {}", report.generation, report.stats.max);
//! });
//! assert_eq!(outcome.population.len(), 100 + 50 * 11);
//! ```
//!
//! # Current Limitations
//!
//! - **Growing population**: survivors are never dropped, so the population grows by a
//!   fixed amount each generation unless `population_cap` is set
//! - **Fixed scoring**: fitness is always the catalog's weight-plus-sign rule
//! - **No convergence detection**: a run always lasts `num_generations` generations

pub use self::{
    catalog::{Gene, GeneCatalog, GeneId, Polarity},
    chromosome::Chromosome,
    evolver::Evolver,
    params::{BreedingSchedule, EvolutionParams, InvalidConfiguration},
    run::{GenerationReport, RunOutcome, ScoredChromosome},
    seed::{ParseSeedError, RunSeed},
    stats::FitnessStats,
};

pub mod catalog;
mod chromosome;
pub mod evolver;
pub mod params;
mod run;
mod seed;
mod stats;
