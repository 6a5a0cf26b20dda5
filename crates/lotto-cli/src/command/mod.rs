use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use lotto_evaluator::weights::{DEFAULT_RECENT_COUNT, WeightingMode};
use lotto_pattern::{PatternConfig, SpanRule};
use tracing::info;

use crate::util;

use self::{
    filter::FilterArg, generate::GenerateArg, reliability::ReliabilityArg, score::ScoreArg,
    trend::TrendArg,
};

mod filter;
mod generate;
mod reliability;
mod score;
mod trend;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(flatten)]
    pattern: PatternArgs,
    /// What to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Report how often each pattern held over a history
    Reliability(#[clap(flatten)] ReliabilityArg),
    /// Score combinations against weights learned from a history
    Score(#[clap(flatten)] ScoreArg),
    /// Keep the candidates that pass score, grade and pattern constraints
    Filter(#[clap(flatten)] FilterArg),
    /// Analyze pattern trends, windows, cycles and correlations
    Trend(#[clap(flatten)] TrendArg),
    /// Generate random candidate combinations
    Generate(#[clap(flatten)] GenerateArg),
}

/// Pattern bounds shared by every subcommand.
#[derive(Debug, Clone, clap::Args)]
struct PatternArgs {
    /// Inclusive lower bound of the last-digit sum
    #[arg(long, global = true, default_value_t = 14)]
    last_digit_sum_min: u32,
    /// Inclusive upper bound of the last-digit sum
    #[arg(long, global = true, default_value_t = 38)]
    last_digit_sum_max: u32,
    /// Require a low start and a high end instead of rejecting them
    #[arg(long, global = true)]
    literal_span_rule: bool,
}

impl PatternArgs {
    fn to_config(&self) -> anyhow::Result<PatternConfig> {
        if self.last_digit_sum_min > self.last_digit_sum_max {
            bail!(
                "--last-digit-sum-min ({}) is greater than --last-digit-sum-max ({})",
                self.last_digit_sum_min,
                self.last_digit_sum_max
            );
        }
        let span_rule = if self.literal_span_rule {
            SpanRule::LiteralLowStartHighEnd
        } else {
            SpanRule::ExcludeLowStartHighEnd
        };
        Ok(PatternConfig {
            last_digit_sum_min: self.last_digit_sum_min,
            last_digit_sum_max: self.last_digit_sum_max,
            span_rule,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
enum ReportFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
enum WeightingKind {
    /// Satisfaction rate / 10
    #[default]
    Static,
    /// Blend of overall and recent satisfaction
    Dynamic,
    /// Weights read from --weights
    Custom,
}

/// How scoring weights are derived.
#[derive(Debug, Clone, clap::Args)]
struct WeightingArgs {
    #[arg(long, value_enum, default_value_t = WeightingKind::Static)]
    weighting: WeightingKind,
    /// Recent draws blended into dynamic weights
    #[arg(long, default_value_t = DEFAULT_RECENT_COUNT)]
    recent_count: usize,
    /// JSON object of pattern id to weight, for custom weighting
    #[arg(long)]
    weights: Option<PathBuf>,
}

impl WeightingArgs {
    fn to_mode(&self) -> anyhow::Result<WeightingMode> {
        let mode = match self.weighting {
            WeightingKind::Static => WeightingMode::Static,
            WeightingKind::Dynamic => WeightingMode::Dynamic {
                recent_count: self.recent_count,
            },
            WeightingKind::Custom => {
                let Some(path) = &self.weights else {
                    bail!("--weights is required with --weighting custom");
                };
                WeightingMode::Custom(util::read_weights_file(path)?)
            }
        };
        info!("weighting mode: {:?}", self.weighting);
        Ok(mode)
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let config = args.pattern.to_config()?;
    match args.mode {
        Mode::Reliability(arg) => reliability::run(&arg, &config)?,
        Mode::Score(arg) => score::run(&arg, &config)?,
        Mode::Filter(arg) => filter::run(&arg, &config)?,
        Mode::Trend(arg) => trend::run(&arg, &config)?,
        Mode::Generate(arg) => generate::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_global_pattern_args() {
        let args = CommandArgs::try_parse_from([
            "lotto",
            "reliability",
            "--history",
            "h.json",
            "--last-digit-sum-min",
            "15",
            "--literal-span-rule",
        ])
        .unwrap();
        let config = args.pattern.to_config().unwrap();
        assert_eq!(config.last_digit_sum_min, 15);
        assert_eq!(config.last_digit_sum_max, 38);
        assert!(config.span_rule.is_literal_low_start_high_end());
    }

    #[test]
    fn test_inverted_last_digit_bounds_are_rejected() {
        let args = CommandArgs::try_parse_from([
            "lotto",
            "generate",
            "--last-digit-sum-min",
            "40",
        ])
        .unwrap();
        assert!(args.pattern.to_config().is_err());
    }

    #[test]
    fn test_custom_weighting_requires_file() {
        let args = WeightingArgs {
            weighting: WeightingKind::Custom,
            recent_count: DEFAULT_RECENT_COUNT,
            weights: None,
        };
        assert!(args.to_mode().is_err());
    }
}
