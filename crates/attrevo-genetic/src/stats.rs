/// Summary of the fitness scores of a population.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessStats {
    pub min: i32,
    pub max: i32,
    pub mean: f64,
    /// Upper median for even-sized inputs
    pub median: i32,
}

impl FitnessStats {
    /// Computes statistics from unsorted scores.
    ///
    /// Returns `None` if `scores` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use attrevo_genetic::FitnessStats;
    /// let stats = FitnessStats::new([5, -2, 4, 1, 3]).unwrap();
    /// assert_eq!(stats.min, -2);
    /// assert_eq!(stats.max, 5);
    /// assert_eq!(stats.mean, 2.2);
    /// assert_eq!(stats.median, 3);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(scores: I) -> Option<Self>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut scores = scores.into_iter().collect::<Vec<_>>();
        scores.sort_unstable();

        let min = *scores.first()?;
        let max = *scores.last()?;
        let sum = scores.iter().copied().map(i64::from).sum::<i64>();
        let mean = sum as f64 / scores.len() as f64;
        let median = scores[scores.len() / 2];

        Some(Self {
            min,
            max,
            mean,
            median,
        })
    }
}
