use std::{io::Write as _, path::PathBuf};

use anyhow::bail;
use lotto_evaluator::{
    filter::{
        DEFAULT_EFFECTIVENESS_THRESHOLDS, EffectivenessReport, FilterConfig, FilterResult,
        ScoreFilter, SortBy, ThresholdResult,
    },
    scoring::{Grade, Scorer},
};
use lotto_pattern::{Pattern, PatternConfig};
use serde::Serialize;
use tracing::info;

use crate::{
    command::{ReportFormat, WeightingArgs},
    util::{self, Output},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
enum SortArg {
    #[default]
    ScoreDesc,
    ScoreAsc,
    RoundDesc,
    RoundAsc,
}

impl From<SortArg> for SortBy {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::ScoreDesc => SortBy::ScoreDesc,
            SortArg::ScoreAsc => SortBy::ScoreAsc,
            SortArg::RoundDesc => SortBy::RoundDesc,
            SortArg::RoundAsc => SortBy::RoundAsc,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct FilterArg {
    /// Historical draws JSON file
    #[arg(long)]
    history: PathBuf,
    /// Candidate combinations JSON file
    #[arg(long)]
    candidates: PathBuf,
    #[clap(flatten)]
    weighting: WeightingArgs,
    /// Minimum score a candidate must reach
    #[arg(long, default_value_t = 80.0)]
    min_score: f64,
    /// Keep only candidates scoring at most this much, ignoring grades and patterns
    #[arg(long)]
    max_score: Option<f64>,
    /// Maximum number of candidates to report
    #[arg(long, default_value_t = 1000)]
    max_results: usize,
    /// Grades to keep
    #[arg(long, value_delimiter = ',', default_values = ["S+", "S", "A+", "A"])]
    grades: Vec<Grade>,
    #[arg(long, value_enum, default_value_t = SortArg::ScoreDesc)]
    sort_by: SortArg,
    /// Patterns every kept candidate must satisfy
    #[arg(long, value_delimiter = ',')]
    require: Vec<Pattern>,
    /// Patterns no kept candidate may violate
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<Pattern>,
    /// Keep candidates by satisfied pattern count instead of score
    #[arg(long, conflicts_with = "max_score")]
    min_satisfied: Option<usize>,
    /// Keep candidates by violated pattern count instead of score
    #[arg(long, conflicts_with = "max_score")]
    max_violated: Option<usize>,
    /// Report the threshold whose pass count is closest to this number
    #[arg(long)]
    target_count: Option<usize>,
    /// Also run the filter once per threshold
    #[arg(long, value_delimiter = ',')]
    thresholds: Vec<f64>,
    /// Actual winning draws to measure how many each threshold would keep
    #[arg(long)]
    winners: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    format: ReportFormat,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

impl FilterArg {
    fn to_filter_config(&self) -> FilterConfig {
        FilterConfig {
            min_score: self.min_score,
            max_results: self.max_results,
            include_grades: self.grades.iter().copied().collect(),
            sort_by: self.sort_by.into(),
            require_patterns: self.require.iter().copied().collect(),
            exclude_patterns: self.exclude.iter().copied().collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct FilterReport {
    result: FilterResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    optimal_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    thresholds: Vec<ThresholdResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    effectiveness: Vec<EffectivenessReport>,
}

pub(crate) fn run(arg: &FilterArg, config: &PatternConfig) -> anyhow::Result<()> {
    if let Some(max_score) = arg.max_score
        && max_score < arg.min_score
    {
        bail!(
            "--max-score ({max_score}) is lower than --min-score ({})",
            arg.min_score
        );
    }

    let history = util::read_history_file(&arg.history)?;
    let candidates = util::read_candidates_file(&arg.candidates)?;
    let mode = arg.weighting.to_mode()?;
    let filter = ScoreFilter::new(Scorer::from_history(&history, &mode, *config));
    let filter_config = arg.to_filter_config();

    let result = if let Some(max_score) = arg.max_score {
        filter.filter_by_score_range(&candidates, arg.min_score, max_score, arg.max_results)
    } else if arg.min_satisfied.is_some() || arg.max_violated.is_some() {
        let mut result = filter.filter_by_pattern_count(
            &candidates,
            arg.min_satisfied.unwrap_or(0),
            arg.max_violated.unwrap_or(Pattern::COUNT),
        );
        result.filtered_scores.truncate(arg.max_results);
        result
    } else {
        filter.filter_by_score(&candidates, &filter_config)
    };
    info!(
        "{} of {} candidates passed ({:.1}%)",
        result.total_passed, result.total_evaluated, result.filtering_rate
    );

    let optimal_threshold = arg
        .target_count
        .map(|target| filter.optimal_threshold(&candidates, target));
    let thresholds =
        filter.filter_with_multiple_thresholds(&candidates, &arg.thresholds, &filter_config);
    let effectiveness = match &arg.winners {
        Some(path) => {
            let winners = util::read_draws_file("winners", path)?;
            let sweep = if arg.thresholds.is_empty() {
                &DEFAULT_EFFECTIVENESS_THRESHOLDS[..]
            } else {
                &arg.thresholds[..]
            };
            filter.analyze_filter_effectiveness(&candidates, &winners, sweep)
        }
        None => vec![],
    };

    let report = FilterReport {
        result,
        optimal_threshold,
        thresholds,
        effectiveness,
    };
    let mut output = Output::from_output_path(arg.output.clone())?;
    match arg.format {
        ReportFormat::Json => output.write_json(&report)?,
        ReportFormat::Table => {
            write_table(&mut output, &report)?;
            output.flush()?;
        }
    }
    Ok(())
}

fn write_table(output: &mut Output, report: &FilterReport) -> anyhow::Result<()> {
    let result = &report.result;
    writeln!(
        output,
        "Passed {} of {} candidates ({:.1}%), showing {}",
        result.total_passed,
        result.total_evaluated,
        result.filtering_rate,
        result.filtered_scores.len()
    )?;
    writeln!(output, "{}", "-".repeat(48))?;
    for s in &result.filtered_scores {
        writeln!(
            output,
            "  {:>6}  {:<22} {:>7.2} {:>3}",
            s.round,
            s.numbers.to_string(),
            s.score,
            s.grade.label()
        )?;
    }

    if let Some(threshold) = report.optimal_threshold {
        writeln!(output)?;
        writeln!(output, "Optimal threshold: {threshold:.0}")?;
    }

    if !report.thresholds.is_empty() {
        writeln!(output)?;
        writeln!(output, "  {:>9} {:>8} {:>9}", "Threshold", "Passed", "Rate")?;
        for t in &report.thresholds {
            writeln!(
                output,
                "  {:>9.1} {:>8} {:>8.1}%",
                t.threshold, t.result.total_passed, t.result.filtering_rate
            )?;
        }
    }

    if !report.effectiveness.is_empty() {
        writeln!(output)?;
        writeln!(
            output,
            "  {:>9} {:>8} {:>9} {:>8} {:>9} {:>10}",
            "Threshold", "Passed", "Rate", "Winners", "Capture", "Avg winner"
        )?;
        for e in &report.effectiveness {
            writeln!(
                output,
                "  {:>9.1} {:>8} {:>8.1}% {:>8} {:>8.1}% {:>10.2}",
                e.threshold,
                e.total_filtered,
                e.filtering_rate,
                e.winners_captured,
                e.capture_rate,
                e.avg_winner_score
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;
    use crate::command::{CommandArgs, Mode};

    fn parse(extra: &[&str]) -> FilterArg {
        let args = ["lotto", "filter", "--history", "h.json", "--candidates", "c.json"];
        let args = CommandArgs::try_parse_from(args.iter().chain(extra)).unwrap();
        let Mode::Filter(arg) = args.mode else {
            panic!("expected the filter subcommand");
        };
        arg
    }

    #[test]
    fn test_defaults_match_library_defaults() {
        assert_eq!(parse(&[]).to_filter_config(), FilterConfig::default());
    }

    #[test]
    fn test_lists_are_comma_separated() {
        let config = parse(&[
            "--grades",
            "S+,B",
            "--require",
            "total_sum,ac_value",
            "--exclude",
            "frog_exclusion",
            "--sort-by",
            "round-asc",
        ])
        .to_filter_config();
        assert_eq!(
            config.include_grades.into_iter().collect::<Vec<_>>(),
            vec![Grade::SPlus, Grade::B]
        );
        assert_eq!(
            config.require_patterns.into_iter().collect::<Vec<_>>(),
            vec![Pattern::TotalSum, Pattern::AcValue]
        );
        assert!(config.exclude_patterns.contains(&Pattern::FrogExclusion));
        assert!(config.sort_by.is_round_asc());
    }

    #[test]
    fn test_unknown_pattern_is_rejected() {
        let args = [
            "lotto",
            "filter",
            "--history",
            "h.json",
            "--candidates",
            "c.json",
            "--require",
            "lucky_seven",
        ];
        assert!(CommandArgs::try_parse_from(args).is_err());
    }
}
