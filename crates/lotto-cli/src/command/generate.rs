use std::path::PathBuf;

use anyhow::Context as _;
use chrono::{Local, NaiveDate};
use lotto_engine::{DrawRecord, MAX_NUMBER, NUMBERS_PER_DRAW};
use rand::{Rng as _, SeedableRng as _, seq::index};
use rand_pcg::Pcg32;
use tracing::info;

use crate::util::Output;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Number of combinations to generate
    #[arg(long, default_value_t = 100)]
    count: usize,
    /// RNG seed; random if omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Round number of the first combination
    #[arg(long, default_value_t = 1)]
    start_round: u32,
    /// Date stamped on every combination (YYYY-MM-DD); today if omitted
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    info!("generating {} combinations with seed {seed}", arg.count);
    let date = arg.date.unwrap_or_else(|| Local::now().date_naive());
    let draws = generate(arg.count, arg.start_round, date, seed)?;
    Output::save_json(&draws, arg.output.clone())
}

/// Draws `count` combinations plus a bonus number each, without replacement.
fn generate(
    count: usize,
    start_round: u32,
    date: NaiveDate,
    seed: u64,
) -> anyhow::Result<Vec<DrawRecord>> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..count)
        .map(|i| -> anyhow::Result<DrawRecord> {
            let round = u32::try_from(i)
                .ok()
                .and_then(|i| start_round.checked_add(i))
                .context("round number overflow")?;
            let picked = index::sample(&mut rng, usize::from(MAX_NUMBER), NUMBERS_PER_DRAW + 1)
                .into_iter()
                .map(|n| u8::try_from(n + 1))
                .collect::<Result<Vec<_>, _>>()?;
            let (numbers, bonus) = picked.split_at(NUMBERS_PER_DRAW);
            Ok(DrawRecord::from_slice(date, round, numbers, bonus[0])?)
        })
        .collect()
}
