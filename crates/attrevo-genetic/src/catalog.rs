//! The gene catalog: every attribute a chromosome can carry.
//!
//! A catalog is an immutable, ordered list of [`Gene`]s. Each gene has a unique label and a
//! tagged weight made of a [`Polarity`] and a magnitude. Chromosomes refer to genes through
//! [`GeneId`]s, which are positions in the catalog they were drawn from.
//!
//! The catalog also owns the scoring rule, since fitness is nothing more than a lookup of
//! each gene's weight and polarity.
//!
//! # Example
//!
//! ```
//! use attrevo_genetic::catalog::GeneCatalog;
//!
//! let catalog = GeneCatalog::standard();
//! let chromosome = catalog
//!     .chromosome(["Honesty", "Lie", "Lazy", "Loyalty", "Respect", "Punctual", "Trustworthy"])
//!     .unwrap();
//! assert_eq!(catalog.fitness(&chromosome), 35);
//! ```

use std::{collections::HashSet, fmt};

use serde::Serialize;

use crate::chromosome::Chromosome;

/// Whether a gene improves or worsens a chromosome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Beneficial,
    Detrimental,
}

impl Polarity {
    /// Normalized contribution of a gene with this polarity: `+1` or `-1`.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Beneficial => 1,
            Self::Detrimental => -1,
        }
    }
}

/// A labeled attribute with a fixed signed weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gene {
    label: String,
    polarity: Polarity,
    magnitude: u16,
}

impl Gene {
    #[must_use]
    pub fn new(label: impl Into<String>, polarity: Polarity, magnitude: u16) -> Self {
        Self {
            label: label.into(),
            polarity,
            magnitude,
        }
    }

    #[must_use]
    pub fn beneficial(label: impl Into<String>, magnitude: u16) -> Self {
        Self::new(label, Polarity::Beneficial, magnitude)
    }

    #[must_use]
    pub fn detrimental(label: impl Into<String>, magnitude: u16) -> Self {
        Self::new(label, Polarity::Detrimental, magnitude)
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Signed weight: the magnitude, negated for detrimental genes.
    #[must_use]
    pub fn weight(&self) -> i32 {
        self.polarity.sign() * i32::from(self.magnitude)
    }
}

/// Position of a gene inside its [`GeneCatalog`].
///
/// Ids are only meaningful for the catalog that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeneId(pub(crate) usize);

impl GeneId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown gene '{label}'")]
pub struct UnknownGeneError {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("gene '{label}' appears more than once in the catalog")]
pub struct DuplicateGeneError {
    pub label: String,
}

const STANDARD_GENES: [(&str, Polarity, u16); 12] = [
    ("Honesty", Polarity::Beneficial, 10),
    ("Perseverance", Polarity::Beneficial, 9),
    ("Loyalty", Polarity::Beneficial, 8),
    ("Respect", Polarity::Beneficial, 7),
    ("Punctual", Polarity::Beneficial, 6),
    ("Trustworthy", Polarity::Beneficial, 5),
    ("Lie", Polarity::Detrimental, 3),
    ("Lazy", Polarity::Detrimental, 1),
    ("Racism", Polarity::Detrimental, 2),
    ("Addiction", Polarity::Detrimental, 4),
    ("SpendThrift", Polarity::Detrimental, 7),
    ("Deception", Polarity::Detrimental, 8),
];

/// Immutable mapping from gene label to tagged weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneCatalog {
    genes: Vec<Gene>,
}

impl GeneCatalog {
    /// Builds a catalog from genes in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateGeneError`] if two genes share a label.
    pub fn new<I>(genes: I) -> Result<Self, DuplicateGeneError>
    where
        I: IntoIterator<Item = Gene>,
    {
        let genes = genes.into_iter().collect::<Vec<_>>();
        let mut labels = HashSet::with_capacity(genes.len());
        for gene in &genes {
            if !labels.insert(gene.label()) {
                return Err(DuplicateGeneError {
                    label: gene.label.clone(),
                });
            }
        }
        Ok(Self { genes })
    }

    /// The built-in twelve-gene catalog: six beneficial genes followed by six detrimental
    /// ones.
    #[must_use]
    pub fn standard() -> Self {
        let genes = STANDARD_GENES
            .iter()
            .map(|&(label, polarity, magnitude)| Gene::new(label, polarity, magnitude))
            .collect();
        Self { genes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Iterates over the ids of every gene, in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = GeneId> {
        (0..self.genes.len()).map(GeneId)
    }

    #[must_use]
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Returns the gene behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this catalog.
    #[must_use]
    pub fn gene(&self, id: GeneId) -> &Gene {
        &self.genes[id.0]
    }

    /// Looks up a gene by label.
    pub fn find(&self, label: &str) -> Result<GeneId, UnknownGeneError> {
        self.genes
            .iter()
            .position(|gene| gene.label() == label)
            .map(GeneId)
            .ok_or_else(|| UnknownGeneError {
                label: label.to_owned(),
            })
    }

    /// Builds a chromosome from gene labels.
    ///
    /// Labels are kept exactly as given, repeats included.
    pub fn chromosome<'a, I>(&self, labels: I) -> Result<Chromosome, UnknownGeneError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let genes = labels
            .into_iter()
            .map(|label| self.find(label))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Chromosome::from_genes(genes))
    }

    /// Returns the labels of a chromosome's genes, in order.
    #[must_use]
    pub fn labels<'a>(&'a self, chromosome: &Chromosome) -> Vec<&'a str> {
        chromosome
            .genes()
            .iter()
            .map(|&id| self.gene(id).label())
            .collect()
    }

    /// Scores a chromosome.
    ///
    /// The score is the sum of every gene's signed weight, plus one normalized point per
    /// distinct gene: `+1` for beneficial genes and `-1` for detrimental ones. A gene that
    /// appears twice adds its weight twice but its sign only once.
    #[must_use]
    pub fn fitness(&self, chromosome: &Chromosome) -> i32 {
        let raw = chromosome
            .genes()
            .iter()
            .map(|&id| self.gene(id).weight())
            .sum::<i32>();
        let mut seen = HashSet::with_capacity(chromosome.len());
        let normalized = chromosome
            .genes()
            .iter()
            .filter(|&&id| seen.insert(id))
            .map(|&id| self.gene(id).polarity().sign())
            .sum::<i32>();
        raw + normalized
    }

    /// Wraps a chromosome so it formats as a list of labels, e.g. `[Honesty, Lie]`.
    #[must_use]
    pub fn display<'a>(&'a self, chromosome: &'a Chromosome) -> ChromosomeDisplay<'a> {
        ChromosomeDisplay {
            catalog: self,
            chromosome,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChromosomeDisplay<'a> {
    catalog: &'a GeneCatalog,
    chromosome: &'a Chromosome,
}

impl fmt::Display for ChromosomeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, &id) in self.chromosome.genes().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(self.catalog.gene(id).label())?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_layout() {
        let catalog = GeneCatalog::standard();
        assert_eq!(catalog.len(), 12);

        let beneficial = catalog
            .genes()
            .iter()
            .filter(|gene| gene.polarity() == Polarity::Beneficial)
            .count();
        assert_eq!(beneficial, 6);
        assert_eq!(catalog.gene(GeneId(0)).label(), "Honesty");
        assert_eq!(catalog.gene(GeneId(11)).weight(), -8);
    }

    #[test]
    fn test_fitness_of_reference_chromosome() {
        let catalog = GeneCatalog::standard();
        let chromosome = catalog
            .chromosome([
                "Honesty",
                "Lie",
                "Lazy",
                "Loyalty",
                "Respect",
                "Punctual",
                "Trustworthy",
            ])
            .unwrap();

        // raw 10 - 3 - 1 + 8 + 7 + 6 + 5 = 32, normalized 5 - 2 = 3
        assert_eq!(catalog.fitness(&chromosome), 35);
    }

    #[test]
    fn test_fitness_counts_sign_once_per_label() {
        let catalog = GeneCatalog::standard();
        let chromosome = catalog.chromosome(["Deception", "Deception"]).unwrap();

        assert_eq!(catalog.fitness(&chromosome), -8 - 8 - 1);
    }

    #[test]
    fn test_fitness_of_empty_chromosome() {
        let catalog = GeneCatalog::standard();
        let labels: [&str; 0] = [];
        let chromosome = catalog.chromosome(labels).unwrap();
        assert_eq!(catalog.fitness(&chromosome), 0);
    }

    #[test]
    fn test_unknown_label() {
        let catalog = GeneCatalog::standard();
        let err = catalog.chromosome(["Honesty", "Kindness"]).unwrap_err();
        assert_eq!(err.label, "Kindness");
        assert_eq!(err.to_string(), "unknown gene 'Kindness'");
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let err = GeneCatalog::new([
            Gene::beneficial("Patience", 3),
            Gene::detrimental("Patience", 2),
        ])
        .unwrap_err();
        assert_eq!(err.label, "Patience");
    }

    #[test]
    fn test_display_lists_labels() {
        let catalog = GeneCatalog::standard();
        let chromosome = catalog.chromosome(["Racism", "Loyalty"]).unwrap();
        assert_eq!(
            catalog.display(&chromosome).to_string(),
            "[Racism, Loyalty]"
        );
        assert_eq!(catalog.labels(&chromosome), vec!["Racism", "Loyalty"]);
    }
}
