use std::{io::Write as _, path::PathBuf};

use lotto_evaluator::{
    scoring::{PatternScore, ScoreStatistics, Scorer, score_statistics},
    weights::PatternWeights,
};
use lotto_pattern::PatternConfig;
use serde::Serialize;
use tracing::info;

use crate::{
    command::{ReportFormat, WeightingArgs},
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScoreArg {
    /// Historical draws JSON file
    #[arg(long)]
    history: PathBuf,
    /// Candidate combinations JSON file; scores the history itself if omitted
    #[arg(long)]
    candidates: Option<PathBuf>,
    #[clap(flatten)]
    weighting: WeightingArgs,
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    format: ReportFormat,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ScoreReport<'a> {
    weights: &'a PatternWeights,
    statistics: &'a ScoreStatistics,
    scores: &'a [PatternScore],
}

pub(crate) fn run(arg: &ScoreArg, config: &PatternConfig) -> anyhow::Result<()> {
    let history = util::read_history_file(&arg.history)?;
    let candidates = match &arg.candidates {
        Some(path) => util::read_candidates_file(path)?,
        None => history.clone(),
    };

    let mode = arg.weighting.to_mode()?;
    let scorer = Scorer::from_history(&history, &mode, *config);
    let scores = scorer.score_batch(&candidates);
    let statistics = score_statistics(&scores);
    info!("scored {} candidates", scores.len());

    let mut output = Output::from_output_path(arg.output.clone())?;
    match arg.format {
        ReportFormat::Json => output.write_json(ScoreReport {
            weights: scorer.weights(),
            statistics: &statistics,
            scores: &scores,
        })?,
        ReportFormat::Table => {
            writeln!(
                output,
                "  {:>6}  {:<22} {:>7} {:>5}  Violated",
                "Round", "Numbers", "Score", "Grade"
            )?;
            writeln!(output, "{}", "-".repeat(72))?;
            for s in &scores {
                let violated = s.violated().map(|p| p.id()).collect::<Vec<_>>();
                writeln!(
                    output,
                    "  {:>6}  {:<22} {:>7.2} {:>5}  {}",
                    s.round,
                    s.numbers.to_string(),
                    s.score,
                    s.grade.label(),
                    violated.join(", "),
                )?;
            }
            writeln!(output)?;
            write_statistics(&mut output, &statistics)?;
            output.flush()?;
        }
    }
    Ok(())
}

fn write_statistics(output: &mut Output, statistics: &ScoreStatistics) -> anyhow::Result<()> {
    writeln!(output, "Score statistics")?;
    writeln!(output, "{}", "-".repeat(30))?;
    writeln!(output, "  {:<10} {:>8.2}", "average", statistics.average)?;
    writeln!(output, "  {:<10} {:>8.2}", "median", statistics.median)?;
    writeln!(output, "  {:<10} {:>8.2}", "min", statistics.min)?;
    writeln!(output, "  {:<10} {:>8.2}", "max", statistics.max)?;
    writeln!(output, "Grades")?;
    for (grade, count) in &statistics.grade_distribution {
        writeln!(output, "  {:<10} {:>8}", grade.label(), count)?;
    }
    Ok(())
}
