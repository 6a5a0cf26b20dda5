use std::{io::Write as _, path::PathBuf};

use lotto_analysis::{
    correlation::{DEFAULT_CORRELATION_THRESHOLD, PatternCorrelation, analyze_pattern_correlations},
    cycle::{
        DEFAULT_MAX_CYCLE_LENGTH, DEFAULT_MIN_CYCLE_LENGTH, PatternCycle, find_pattern_cycles,
    },
    trend::{PatternTrend, TrendConfig, analyze_pattern_trends},
    window::{DEFAULT_WINDOW_SIZES, WindowAnalysis, analyze_moving_window},
};
use lotto_pattern::{Pattern, PatternConfig, PatternMap};
use serde::Serialize;
use tracing::info;

use crate::{
    command::ReportFormat,
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TrendArg {
    /// Historical draws JSON file
    #[arg(long)]
    history: PathBuf,
    /// Number of most recent draws compared against the whole history
    #[arg(long, default_value_t = 50)]
    recent_count: usize,
    /// Window size for volatility
    #[arg(long, default_value_t = 10)]
    window_size: usize,
    /// Pattern to analyze over moving windows and violation cycles
    #[arg(long)]
    pattern: Option<Pattern>,
    /// Moving window sizes used with --pattern
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_WINDOW_SIZES)]
    window_sizes: Vec<usize>,
    #[arg(long, default_value_t = DEFAULT_MIN_CYCLE_LENGTH)]
    min_cycle_length: u32,
    #[arg(long, default_value_t = DEFAULT_MAX_CYCLE_LENGTH)]
    max_cycle_length: u32,
    /// Minimum absolute phi coefficient reported
    #[arg(long, default_value_t = DEFAULT_CORRELATION_THRESHOLD)]
    correlation_threshold: f64,
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    format: ReportFormat,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct PatternFocus {
    pattern: Pattern,
    windows: Vec<WindowAnalysis>,
    cycles: Vec<PatternCycle>,
}

#[derive(Debug, Serialize)]
struct TrendReport {
    trends: PatternMap<PatternTrend>,
    correlations: Vec<PatternCorrelation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus: Option<PatternFocus>,
}

pub(crate) fn run(arg: &TrendArg, config: &PatternConfig) -> anyhow::Result<()> {
    let history = util::read_history_file(&arg.history)?;
    let trend_config = TrendConfig {
        recent_count: arg.recent_count,
        window_size: arg.window_size,
    };

    let trends = analyze_pattern_trends(&history, &trend_config, config);
    let correlations = analyze_pattern_correlations(&history, arg.correlation_threshold, config);
    info!(
        "found {} pattern pairs with |phi| >= {}",
        correlations.len(),
        arg.correlation_threshold
    );
    let focus = arg.pattern.map(|pattern| PatternFocus {
        pattern,
        windows: analyze_moving_window(&history, pattern, &arg.window_sizes, config),
        cycles: find_pattern_cycles(
            &history,
            pattern,
            arg.min_cycle_length,
            arg.max_cycle_length,
            config,
        ),
    });

    let report = TrendReport {
        trends,
        correlations,
        focus,
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

fn write_table(output: &mut Output, report: &TrendReport) -> anyhow::Result<()> {
    writeln!(
        output,
        "  {:<28} {:>8} {:>8} {:>8} {:>10} {:<9} Advice",
        "Pattern", "Overall", "Recent", "Trend", "Volatility", "Stability"
    )?;
    writeln!(output, "{}", "-".repeat(110))?;
    for (pattern, t) in report.trends.iter() {
        writeln!(
            output,
            "  {:<28} {:>7.1}% {:>7.1}% {:>1} {:>+6.1} {:>10.2} {:<9} {}",
            pattern.name(),
            t.overall_satisfaction_rate,
            t.recent_satisfaction_rate,
            t.trend_direction.symbol(),
            t.trend_value,
            t.volatility,
            t.stability.to_string(),
            t.recommendation,
        )?;
    }

    writeln!(output)?;
    if report.correlations.is_empty() {
        writeln!(output, "No strongly correlated pattern pairs")?;
    } else {
        writeln!(output, "Correlated pattern pairs")?;
        for c in &report.correlations {
            writeln!(
                output,
                "  {:<28} {:<28} {:>+6.3}",
                c.pattern1.name(),
                c.pattern2.name(),
                c.value
            )?;
        }
    }

    if let Some(focus) = &report.focus {
        writeln!(output)?;
        writeln!(output, "{} over moving windows", focus.pattern.name())?;
        for w in &focus.windows {
            writeln!(
                output,
                "  last {:>4} (rounds {}-{}) {:>7.1}% satisfied",
                w.window_size, w.start_round, w.end_round, w.satisfaction_rate
            )?;
        }
        writeln!(output, "Violation cycles")?;
        for c in &focus.cycles {
            writeln!(
                output,
                "  {:>6} -> {:>6} ({} rounds)",
                c.start_round, c.end_round, c.cycle_length
            )?;
        }
    }
    Ok(())
}
