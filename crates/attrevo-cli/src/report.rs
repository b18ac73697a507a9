use attrevo_genetic::{GeneCatalog, GenerationReport, ScoredChromosome};

pub fn print_generation(catalog: &GeneCatalog, report: &GenerationReport) {
    let GenerationReport {
        generation,
        population_size,
        top,
        stats,
    } = report;

    println!("Generation {generation}:");
    for ScoredChromosome {
        chromosome,
        fitness,
    } in top
    {
        println!("Chromosome: {}", catalog.display(chromosome));
        println!("Fitness Score: {fitness}");
        println!();
    }

    eprintln!("Generation #{generation}:");
    eprintln!("  Population: {population_size}");
    eprintln!("  Fitness Stats:");
    eprintln!("    Min:    {}", stats.min);
    eprintln!("    Max:    {}", stats.max);
    eprintln!("    Mean:   {:.3}", stats.mean);
    eprintln!("    Median: {}", stats.median);
}

pub fn print_best(catalog: &GeneCatalog, best: &ScoredChromosome) {
    println!("Best Chromosome: {}", catalog.display(&best.chromosome));
    println!("Best Chromosome Score: {}", best.fitness);
}
