//! Genetic operators and the generation-advance step.
//!
//! # Algorithm Overview
//!
//! Each generation advance:
//!
//! 1. **Copy** - The incoming population is carried over whole, in its original order
//! 2. **Selection** - The top `selection_fraction` of the population (by fitness) becomes the
//!    breeding stock
//! 3. **Crossover** - Two parents drawn with replacement from the stock produce one child by
//!    single-point splicing
//! 4. **Mutation** - A batch of chromosomes drawn from the incoming population is appended as
//!    mutated copies
//!
//! Steps 3 and 4 form one breeding round; [`BreedingSchedule`](crate::BreedingSchedule)
//! decides how many rounds run. Nothing is ever removed, so the population grows every
//! generation unless a `population_cap` is set.
//!
//! # Genetic Operators
//!
//! ## Selection
//!
//! Stable sort by descending fitness, then truncation. Chromosomes with equal fitness keep
//! their relative order.
//!
//! ## Crossover
//!
//! The child takes `parent1`'s genes before a random cut point, then the genes of `parent2`
//! that are not already present, in `parent2`'s order, up to `gene_count` genes. When
//! `parent2` cannot fill the remainder the child is simply shorter.
//!
//! ## Mutation
//!
//! `mutation_fraction` of the chromosome's genes are overwritten, one random position at a
//! time, with genes the chromosome does not yet carry. With the default 7 genes and a 0.1
//! fraction no gene is replaced, so mutants are plain copies.
//!
//! # Randomness
//!
//! Every operator takes the generator by `&mut` and draws from it in a fixed order, so a
//! seeded generator reproduces a run exactly.

use std::cmp::Reverse;

use rand::{
    Rng,
    seq::{IndexedRandom as _, index},
};

use crate::{
    catalog::{GeneCatalog, GeneId},
    chromosome::Chromosome,
    params::{EvolutionParams, InvalidConfiguration},
};

/// Evolutionary engine for one catalog and one set of parameters.
#[derive(Debug, Clone)]
pub struct Evolver {
    catalog: GeneCatalog,
    params: EvolutionParams,
}

impl Evolver {
    /// Creates an engine after validating `params` against `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`] if any parameter is out of range, notably if
    /// `gene_count` exceeds the number of genes in the catalog.
    pub fn new(
        catalog: GeneCatalog,
        params: EvolutionParams,
    ) -> Result<Self, InvalidConfiguration> {
        params.validate(catalog.len())?;
        Ok(Self { catalog, params })
    }

    #[must_use]
    pub fn catalog(&self) -> &GeneCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn params(&self) -> &EvolutionParams {
        &self.params
    }

    #[must_use]
    pub fn fitness(&self, chromosome: &Chromosome) -> i32 {
        self.catalog.fitness(chromosome)
    }

    /// Draws `gene_count` distinct genes uniformly at random, in random order.
    pub fn create_chromosome<R>(&self, rng: &mut R) -> Chromosome
    where
        R: Rng + ?Sized,
    {
        let genes = index::sample(rng, self.catalog.len(), self.params.gene_count)
            .into_iter()
            .map(GeneId)
            .collect();
        Chromosome::from_genes(genes)
    }

    /// Creates the initial population of `population_size` random chromosomes.
    pub fn random_population<R>(&self, rng: &mut R) -> Vec<Chromosome>
    where
        R: Rng + ?Sized,
    {
        (0..self.params.population_size)
            .map(|_| self.create_chromosome(rng))
            .collect()
    }

    /// Sorts chromosomes by descending fitness, keeping the order of equal scores.
    pub fn rank(&self, population: &mut [Chromosome]) {
        population.sort_by_cached_key(|chromosome| Reverse(self.fitness(chromosome)));
    }

    /// Returns the fittest `selection_fraction` of `population`, best first.
    ///
    /// The count is taken from the current length of `population`, so it grows with the
    /// population.
    #[must_use]
    pub fn select(&self, population: &[Chromosome]) -> Vec<Chromosome> {
        let mut ranked = population.to_vec();
        self.rank(&mut ranked);
        ranked.truncate(self.params.selection_count(population.len()));
        ranked
    }

    /// Splices two parents at a random cut point in `[1, gene_count - 1]`.
    ///
    /// See [`Self::crossover_at`].
    pub fn crossover<R>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> Chromosome
    where
        R: Rng + ?Sized,
    {
        let gene_count = self.params.gene_count;
        let cut = if gene_count > 1 {
            rng.random_range(1..gene_count)
        } else {
            1
        };
        self.crossover_at(parent1, parent2, cut)
    }

    /// Splices two parents at `cut`.
    ///
    /// The child starts with `parent1`'s first `cut` genes (all of them if `parent1` is
    /// shorter), followed by `parent2`'s genes that the prefix lacks, in order, until the
    /// child holds `gene_count` genes or `parent2` runs out.
    #[must_use]
    pub fn crossover_at(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        cut: usize,
    ) -> Chromosome {
        let prefix = &parent1.genes()[..cut.min(parent1.len())];
        let remaining = self.params.gene_count.saturating_sub(prefix.len());

        let mut genes = prefix.to_vec();
        genes.extend(
            parent2
                .genes()
                .iter()
                .copied()
                .filter(|gene| !prefix.contains(gene))
                .take(remaining),
        );
        Chromosome::from_genes(genes)
    }

    /// Returns a copy of `chromosome` with some genes replaced by unused ones.
    ///
    /// Runs `mutation_fraction * len` steps. Each step overwrites a random position with a
    /// random gene absent from the copy; a step is skipped when the copy already holds
    /// every gene of the catalog.
    pub fn mutate<R>(&self, chromosome: &Chromosome, rng: &mut R) -> Chromosome
    where
        R: Rng + ?Sized,
    {
        let mut genes = chromosome.genes().to_vec();
        for _ in 0..self.params.mutation_steps(genes.len()) {
            let index = rng.random_range(0..genes.len());
            let unused = self
                .catalog
                .ids()
                .filter(|gene| !genes.contains(gene))
                .collect::<Vec<_>>();
            if let Some(&gene) = unused.choose(rng) {
                genes[index] = gene;
            }
        }
        Chromosome::from_genes(genes)
    }

    /// Produces the next generation from `population`.
    ///
    /// The result starts with `population` unchanged, followed by, for each breeding round,
    /// one crossover child and `mutation_batch` mutants of chromosomes drawn from
    /// `population`. With [`BreedingSchedule::Single`](crate::BreedingSchedule::Single)
    /// that is exactly one child and `mutation_batch` mutants.
    ///
    /// If `population_cap` is set and exceeded, the result is ranked and truncated to the
    /// cap.
    pub fn next_generation<R>(&self, population: &[Chromosome], rng: &mut R) -> Vec<Chromosome>
    where
        R: Rng + ?Sized,
    {
        let mut next = population.to_vec();
        let parents = self.select(population);

        for _ in 0..self.params.breeding_rounds() {
            let Some(parent1) = parents.choose(rng) else {
                break;
            };
            let Some(parent2) = parents.choose(rng) else {
                break;
            };
            next.push(self.crossover(parent1, parent2, rng));

            for _ in 0..self.params.mutation_batch {
                let Some(source) = population.choose(rng) else {
                    break;
                };
                next.push(self.mutate(source, rng));
            }
        }

        if let Some(cap) = self.params.population_cap {
            if next.len() > cap {
                self.rank(&mut next);
                next.truncate(cap);
            }
        }
        next
    }
}
