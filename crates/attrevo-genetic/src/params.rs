//! Run parameters and their validation.
//!
//! Every count the engine uses is derived here from [`EvolutionParams`], always by
//! truncating `count * fraction` toward zero.

use serde::Serialize;

/// How many breeding rounds a generation advance runs.
///
/// A breeding round appends one crossover child followed by a batch of mutants.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::FromStr)]
#[serde(rename_all = "kebab-case")]
pub enum BreedingSchedule {
    /// One round per generation: a single child plus one mutant batch.
    #[default]
    Single,
    /// `population_size * selection_fraction` rounds per generation.
    All,
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum InvalidConfiguration {
    #[display("population size must be positive")]
    ZeroPopulationSize,
    #[display("gene count must be positive")]
    ZeroGeneCount,
    #[display("gene count {gene_count} exceeds the {catalog_size} genes in the catalog")]
    GeneCountExceedsCatalog {
        gene_count: usize,
        catalog_size: usize,
    },
    #[display("number of generations must be positive")]
    ZeroGenerations,
    #[display("{name} must be in (0, 1], got {value}")]
    FractionOutOfRange { name: &'static str, value: f64 },
    #[display(
        "selecting {selection_fraction} of {population_size} chromosomes leaves no breeding stock"
    )]
    EmptyBreedingStock {
        population_size: usize,
        selection_fraction: f64,
    },
    #[display("report interval must be positive")]
    ZeroReportInterval,
    #[display("population cap {cap} is below the population size {population_size}")]
    CapBelowPopulationSize { cap: usize, population_size: usize },
}

/// Parameters of an evolution run.
///
/// The defaults are the reference run: 100 chromosomes of 7 genes evolved for 50
/// generations, with 10% selection and mutation fractions and batches of 10 mutants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvolutionParams {
    /// Size of the initial population, and its minimum size afterwards
    pub population_size: usize,
    /// Number of genes drawn for each new chromosome
    pub gene_count: usize,
    /// Number of generation advances
    pub num_generations: usize,
    /// Share of the population kept as breeding stock (and shown in reports)
    pub selection_fraction: f64,
    /// Share of a chromosome's genes replaced per mutation
    pub mutation_fraction: f64,
    /// Mutants appended per breeding round; zero disables mutation
    pub mutation_batch: usize,
    pub breeding: BreedingSchedule,
    /// Upper bound on the population size; unbounded when `None`
    pub population_cap: Option<usize>,
    /// Generations between two progress reports
    pub report_interval: usize,
}

impl Default for EvolutionParams {
    fn default() -> Self {
        let population_size = 100;
        let mutation_fraction = 0.1;
        Self {
            population_size,
            gene_count: 7,
            num_generations: 50,
            selection_fraction: 0.1,
            mutation_fraction,
            mutation_batch: Self::default_mutation_batch(population_size, mutation_fraction),
            breeding: BreedingSchedule::default(),
            population_cap: None,
            report_interval: 10,
        }
    }
}

impl EvolutionParams {
    /// Mutant batch used when none is given: `population_size * mutation_fraction`.
    #[must_use]
    pub fn default_mutation_batch(population_size: usize, mutation_fraction: f64) -> usize {
        fraction_of(population_size, mutation_fraction)
    }

    /// Checks the parameters against a catalog of `catalog_size` genes.
    pub fn validate(&self, catalog_size: usize) -> Result<(), InvalidConfiguration> {
        if self.population_size == 0 {
            return Err(InvalidConfiguration::ZeroPopulationSize);
        }
        if self.gene_count == 0 {
            return Err(InvalidConfiguration::ZeroGeneCount);
        }
        if self.gene_count > catalog_size {
            return Err(InvalidConfiguration::GeneCountExceedsCatalog {
                gene_count: self.gene_count,
                catalog_size,
            });
        }
        if self.num_generations == 0 {
            return Err(InvalidConfiguration::ZeroGenerations);
        }
        for (name, value) in [
            ("selection fraction", self.selection_fraction),
            ("mutation fraction", self.mutation_fraction),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(InvalidConfiguration::FractionOutOfRange { name, value });
            }
        }
        if self.selection_count(self.population_size) == 0 {
            return Err(InvalidConfiguration::EmptyBreedingStock {
                population_size: self.population_size,
                selection_fraction: self.selection_fraction,
            });
        }
        if self.report_interval == 0 {
            return Err(InvalidConfiguration::ZeroReportInterval);
        }
        if let Some(cap) = self.population_cap {
            if cap < self.population_size {
                return Err(InvalidConfiguration::CapBelowPopulationSize {
                    cap,
                    population_size: self.population_size,
                });
            }
        }
        Ok(())
    }

    /// Number of chromosomes selected out of a population of `len`.
    #[must_use]
    pub fn selection_count(&self, len: usize) -> usize {
        fraction_of(len, self.selection_fraction)
    }

    /// Number of genes replaced when mutating a chromosome of `len` genes.
    #[must_use]
    pub fn mutation_steps(&self, len: usize) -> usize {
        fraction_of(len, self.mutation_fraction)
    }

    #[must_use]
    pub fn breeding_rounds(&self) -> usize {
        let rounds = fraction_of(self.population_size, self.selection_fraction);
        match self.breeding {
            BreedingSchedule::Single => rounds.min(1),
            BreedingSchedule::All => rounds,
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn fraction_of(count: usize, fraction: f64) -> usize {
    (count as f64 * fraction) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_counts() {
        let params = EvolutionParams::default();
        assert_eq!(params.selection_count(100), 10);
        assert_eq!(params.selection_count(111), 11);
        assert_eq!(params.selection_count(9), 0);
        assert_eq!(params.mutation_steps(7), 0);
        assert_eq!(params.mutation_steps(12), 1);
        assert_eq!(params.mutation_batch, 10);
        assert_eq!(params.breeding_rounds(), 1);
    }

    #[test]
    fn test_mutation_batch_is_independent_of_steps() {
        let params = EvolutionParams {
            mutation_batch: 1,
            ..EvolutionParams::default()
        };
        assert_eq!(params.validate(12), Ok(()));
        assert_eq!(params.mutation_steps(7), 0);
        assert_eq!(params.mutation_steps(12), 1);
        assert_eq!(params.breeding_rounds(), 1);

        assert_eq!(EvolutionParams::default_mutation_batch(250, 0.1), 25);
        assert_eq!(EvolutionParams::default_mutation_batch(100, 0.05), 5);
    }

    #[test]
    fn test_all_rounds_schedule() {
        let params = EvolutionParams {
            breeding: BreedingSchedule::All,
            ..EvolutionParams::default()
        };
        assert_eq!(params.breeding_rounds(), 10);
    }

    #[test]
    fn test_breeding_schedule_from_str() {
        assert_eq!(
            "single".parse::<BreedingSchedule>().unwrap(),
            BreedingSchedule::Single
        );
        assert_eq!(
            "All".parse::<BreedingSchedule>().unwrap(),
            BreedingSchedule::All
        );
        assert!("some".parse::<BreedingSchedule>().is_err());
    }

    #[test]
    fn test_default_is_valid() {
        assert_eq!(EvolutionParams::default().validate(12), Ok(()));
    }

    #[test]
    fn test_gene_count_boundaries() {
        let full = EvolutionParams {
            gene_count: 12,
            ..EvolutionParams::default()
        };
        assert_eq!(full.validate(12), Ok(()));

        let too_many = EvolutionParams {
            gene_count: 13,
            ..EvolutionParams::default()
        };
        assert_eq!(
            too_many.validate(12),
            Err(InvalidConfiguration::GeneCountExceedsCatalog {
                gene_count: 13,
                catalog_size: 12,
            })
        );

        let none = EvolutionParams {
            gene_count: 0,
            ..EvolutionParams::default()
        };
        assert_eq!(none.validate(12), Err(InvalidConfiguration::ZeroGeneCount));
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        let params = EvolutionParams {
            population_size: 0,
            ..EvolutionParams::default()
        };
        assert_eq!(
            params.validate(12),
            Err(InvalidConfiguration::ZeroPopulationSize)
        );

        let params = EvolutionParams {
            num_generations: 0,
            ..EvolutionParams::default()
        };
        assert_eq!(
            params.validate(12),
            Err(InvalidConfiguration::ZeroGenerations)
        );

        let params = EvolutionParams {
            report_interval: 0,
            ..EvolutionParams::default()
        };
        assert_eq!(
            params.validate(12),
            Err(InvalidConfiguration::ZeroReportInterval)
        );
    }

    #[test]
    fn test_rejects_bad_fractions() {
        for value in [0.0, -0.5, 1.5, f64::NAN] {
            let params = EvolutionParams {
                mutation_fraction: value,
                ..EvolutionParams::default()
            };
            assert!(matches!(
                params.validate(12),
                Err(InvalidConfiguration::FractionOutOfRange {
                    name: "mutation fraction",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_rejects_empty_breeding_stock() {
        let params = EvolutionParams {
            population_size: 9,
            ..EvolutionParams::default()
        };
        assert!(matches!(
            params.validate(12),
            Err(InvalidConfiguration::EmptyBreedingStock {
                population_size: 9,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_small_cap() {
        let params = EvolutionParams {
            population_cap: Some(99),
            ..EvolutionParams::default()
        };
        assert_eq!(
            params.validate(12),
            Err(InvalidConfiguration::CapBelowPopulationSize {
                cap: 99,
                population_size: 100,
            })
        );
    }

    #[test]
    fn test_error_message() {
        let err = InvalidConfiguration::GeneCountExceedsCatalog {
            gene_count: 13,
            catalog_size: 12,
        };
        assert_eq!(
            err.to_string(),
            "gene count 13 exceeds the 12 genes in the catalog"
        );
    }
}
