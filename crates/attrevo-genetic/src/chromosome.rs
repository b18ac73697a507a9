use crate::catalog::GeneId;

/// An ordered sequence of genes representing one candidate solution.
///
/// Chromosomes are plain values: operators never modify one in place, they build a new
/// chromosome instead. Chromosomes produced by [`Evolver`](crate::Evolver) never repeat a
/// gene and hold at most `gene_count` genes; crossover may yield shorter ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chromosome {
    genes: Vec<GeneId>,
}

impl Chromosome {
    pub(crate) fn from_genes(genes: Vec<GeneId>) -> Self {
        Self { genes }
    }

    #[must_use]
    pub fn genes(&self) -> &[GeneId] {
        &self.genes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Returns `true` if no gene appears twice.
    #[must_use]
    pub fn has_distinct_genes(&self) -> bool {
        self.genes
            .iter()
            .enumerate()
            .all(|(i, gene)| !self.genes[..i].contains(gene))
    }
}
