use attrevo_genetic::{EvolutionParams, RunSeed};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON record of a finished run, enough to replay it with `--seed`.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub seed: RunSeed,
    pub params: EvolutionParams,
    pub generations: usize,
    pub final_population: usize,
    pub best: BestChromosome,
    pub finished_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BestChromosome {
    pub genes: Vec<String>,
    pub fitness: i32,
}
