use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mldata::dataset::{convert_arrays, Sample};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Bernoulli, StandardNormal};
use tracing::{debug, info};

/// Generate a small synthetic dataset and print its samples.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// The function the ideal vectors are computed with.
    #[arg(long, value_enum, default_value_t = Gate::Xor)]
    dataset: Gate,
    /// The number of samples to generate.
    #[arg(long, default_value_t = 8)]
    rows: usize,
    /// Seed for the random generator, drawn from the OS when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Gate {
    Add,
    And,
    Xor,
}

impl Gate {
    fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::And => "and",
            Self::Xor => "xor",
        }
    }
}

type Matrices = (Vec<Vec<f64>>, Vec<Vec<f64>>);

fn dataset_add<R: Rng>(rng: &mut R, rows: usize) -> Matrices {
    let mut inputs = Vec::with_capacity(rows);
    let mut ideals = Vec::with_capacity(rows);
    for _ in 0..rows {
        let x: f64 = rng.sample(StandardNormal);
        let y: f64 = rng.sample(StandardNormal);
        inputs.push(vec![x, y]);
        ideals.push(vec![x + y]);
    }
    (inputs, ideals)
}

fn dataset_bits<R, F>(rng: &mut R, rows: usize, gate: F) -> Result<Matrices>
where
    R: Rng,
    F: Fn(bool, bool) -> bool,
{
    let dist = Bernoulli::new(0.5).context("invalid bit probability")?;
    let convert = |x| if x { 1.0 } else { 0.0 };
    let mut inputs = Vec::with_capacity(rows);
    let mut ideals = Vec::with_capacity(rows);
    for _ in 0..rows {
        let x = rng.sample(dist);
        let y = rng.sample(dist);
        inputs.push(vec![convert(x), convert(y)]);
        ideals.push(vec![convert(gate(x, y))]);
    }
    Ok((inputs, ideals))
}

fn build(gate: Gate, rng: &mut StdRng, rows: usize) -> Result<Vec<Sample>> {
    let (inputs, ideals) = match gate {
        Gate::Add => dataset_add(rng, rows),
        Gate::And => dataset_bits(rng, rows, |x, y| x & y)?,
        Gate::Xor => dataset_bits(rng, rows, |x, y| x ^ y)?,
    };
    let mut samples = convert_arrays(&inputs, &ideals)
        .with_context(|| format!("failed to build the {} dataset", gate.name()))?;
    for (row, sample) in samples.iter_mut().enumerate() {
        sample.set_label(Some(format!("{}-{}", gate.name(), row)));
    }
    Ok(samples)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mldata=info".parse().context("invalid log directive")?),
        )
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let samples = build(cli.dataset, &mut rng, cli.rows)?;
    info!(dataset = cli.dataset.name(), samples = samples.len(), "dataset built");
    for sample in &samples {
        debug!(supervised = sample.is_supervised(), label = sample.label(), "sample");
        println!("{}", sample);
    }
    Ok(())
}
