use std::{io::Write as _, path::PathBuf};

use lotto_evaluator::reliability::{analyze_pattern_reliability, sorted_by_rate};
use lotto_pattern::PatternConfig;

use crate::{
    command::ReportFormat,
    util::{self, Output},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ReliabilityArg {
    /// Historical draws JSON file
    #[arg(long)]
    history: PathBuf,
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    format: ReportFormat,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ReliabilityArg, config: &PatternConfig) -> anyhow::Result<()> {
    let history = util::read_history_file(&arg.history)?;
    let reliability = analyze_pattern_reliability(&history, config);

    let mut output = Output::from_output_path(arg.output.clone())?;
    match arg.format {
        ReportFormat::Json => output.write_json(&reliability)?,
        ReportFormat::Table => {
            writeln!(output, "Pattern reliability over {} draws", history.len())?;
            writeln!(output, "{}", "-".repeat(60))?;
            writeln!(
                output,
                "  {:<28} {:>9} {:>7} {:>10}",
                "Pattern", "Rate", "Weight", "Satisfied"
            )?;
            for (pattern, r) in sorted_by_rate(&reliability) {
                writeln!(
                    output,
                    "  {:<28} {:>8.1}% {:>7.2} {:>10}",
                    pattern.name(),
                    r.satisfaction_rate,
                    r.weight,
                    format!("{}/{}", r.satisfied_count, r.total_samples),
                )?;
            }
            output.flush()?;
        }
    }
    Ok(())
}
