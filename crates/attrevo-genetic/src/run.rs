//! The top-level evolution loop.

use rand::Rng;

use crate::{chromosome::Chromosome, evolver::Evolver, stats::FitnessStats};

/// A chromosome together with its fitness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredChromosome {
    pub chromosome: Chromosome,
    pub fitness: i32,
}

/// Snapshot of the population emitted every `report_interval` generations.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// 1-indexed generation number
    pub generation: usize,
    pub population_size: usize,
    /// Current breeding stock, best first
    pub top: Vec<ScoredChromosome>,
    pub stats: FitnessStats,
}

/// Result of a complete run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Final population, in generation order
    pub population: Vec<Chromosome>,
    /// First chromosome of maximum fitness in the final population
    pub best: ScoredChromosome,
}

impl Evolver {
    /// Runs `num_generations` generation advances starting from a random population.
    ///
    /// `on_report` is called after every `report_interval`-th generation.
    pub fn run<R, F>(&self, rng: &mut R, mut on_report: F) -> RunOutcome
    where
        R: Rng + ?Sized,
        F: FnMut(&GenerationReport),
    {
        let params = self.params();
        let mut population = self.random_population(rng);

        for generation in 1..=params.num_generations {
            population = self.next_generation(&population, rng);
            if generation % params.report_interval == 0 {
                on_report(&self.report(generation, &population));
            }
        }

        let best = self
            .best(&population)
            .expect("population should never be empty");
        RunOutcome { population, best }
    }

    /// Builds the snapshot of `population` at `generation`.
    ///
    /// # Panics
    ///
    /// Panics if `population` is empty.
    #[must_use]
    pub fn report(&self, generation: usize, population: &[Chromosome]) -> GenerationReport {
        let top = self
            .select(population)
            .into_iter()
            .map(|chromosome| self.score(chromosome))
            .collect();
        let stats = FitnessStats::new(population.iter().map(|c| self.fitness(c)))
            .expect("population should never be empty");
        GenerationReport {
            generation,
            population_size: population.len(),
            top,
            stats,
        }
    }

    /// Returns the first chromosome of maximum fitness, or `None` for an empty population.
    #[must_use]
    pub fn best(&self, population: &[Chromosome]) -> Option<ScoredChromosome> {
        population
            .iter()
            .map(|chromosome| (chromosome, self.fitness(chromosome)))
            .reduce(|best, candidate| {
                if candidate.1 > best.1 {
                    candidate
                } else {
                    best
                }
            })
            .map(|(chromosome, fitness)| ScoredChromosome {
                chromosome: chromosome.clone(),
                fitness,
            })
    }

    fn score(&self, chromosome: Chromosome) -> ScoredChromosome {
        let fitness = self.fitness(&chromosome);
        ScoredChromosome {
            chromosome,
            fitness,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{catalog::GeneCatalog, params::EvolutionParams, seed::RunSeed};

    use super::*;

    fn evolver() -> Evolver {
        Evolver::new(GeneCatalog::standard(), EvolutionParams::default()).unwrap()
    }

    #[test]
    fn test_run_reports_every_tenth_generation() {
        let evolver = evolver();
        let mut reports = vec![];
        let outcome = evolver.run(&mut RunSeed::from_bytes([1; 16]).rng(), |report| {
            reports.push(report.clone());
        });

        let generations = reports.iter().map(|r| r.generation).collect::<Vec<_>>();
        assert_eq!(generations, vec![10, 20, 30, 40, 50]);
        for report in &reports {
            assert_eq!(report.population_size, 100 + 11 * report.generation);
            assert_eq!(report.top.len(), report.population_size / 10);
            assert!(report.top.is_sorted_by(|a, b| a.fitness >= b.fitness));
            assert_eq!(report.top[0].fitness, report.stats.max);
        }
        assert_eq!(outcome.population.len(), 100 + 11 * 50);
        assert_eq!(outcome.best.fitness, reports[4].stats.max);
    }

    #[test]
    fn test_run_is_reproducible() {
        let evolver = evolver();
        let seed = RunSeed::from_bytes([0x2a; 16]);

        let mut first_reports = vec![];
        let first = evolver.run(&mut seed.rng(), |r| first_reports.push(r.clone()));
        let mut second_reports = vec![];
        let second = evolver.run(&mut seed.rng(), |r| second_reports.push(r.clone()));

        assert_eq!(first, second);
        assert_eq!(first_reports, second_reports);
    }

    #[test]
    fn test_best_prefers_first_of_equal_scores() {
        let evolver = evolver();
        let catalog = evolver.catalog();
        let low = catalog.chromosome(["Lazy"]).unwrap();
        let first = catalog.chromosome(["Loyalty", "Lazy"]).unwrap();
        let second = catalog.chromosome(["Perseverance", "Racism"]).unwrap();

        let best = evolver.best(&[low, first.clone(), second]).unwrap();
        assert_eq!(best.chromosome, first);
        assert_eq!(best.fitness, 7);
        assert_eq!(evolver.best(&[]), None);
    }
}
