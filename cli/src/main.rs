mod logging;
mod table;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use weekspend_core::model::insight::{DEFAULT_HIGH_AVERAGE, DEFAULT_MODERATE_AVERAGE};
use weekspend_core::time::DAYS_IN_WEEK;
use weekspend_core::{parse_amount, DailySeries, ReportService, SpendingBands, WeekCollector, WeeklyReport};

#[derive(Parser)]
#[command(name = "weekspend")]
#[command(about = "Track a week of daily spending against a budget", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format for the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Daily average above which spending is reported as high
    #[arg(long, env = "WEEKSPEND_HIGH_AVERAGE", default_value_t = DEFAULT_HIGH_AVERAGE, global = true)]
    high_average: f64,

    /// Daily average above which spending is reported as moderate
    #[arg(long, env = "WEEKSPEND_MODERATE_AVERAGE", default_value_t = DEFAULT_MODERATE_AVERAGE, global = true)]
    moderate_average: f64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Enter spending for each day of the week interactively (default)
    Track {
        /// Weekly spending limit; prompted for when omitted
        #[arg(long, value_parser = parse_amount)]
        limit: Option<f64>,
    },
    /// Build a report from amounts given on the command line
    Report {
        /// Weekly spending limit
        #[arg(long, value_parser = parse_amount)]
        limit: f64,
        /// Daily amounts, Monday first
        #[arg(value_parser = parse_amount)]
        amounts: Vec<f64>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Table,
    Json,
}

/// Only the plain-text session shares stdout with its prompts; structured
/// output keeps stdout for the report alone.
fn prompts_on_stdout(format: OutputFormat) -> bool {
    format == OutputFormat::Text
}

fn prompt_writer(format: OutputFormat) -> Box<dyn Write> {
    if prompts_on_stdout(format) {
        Box::new(io::stdout())
    } else {
        Box::new(io::stderr())
    }
}

fn render(report: &WeeklyReport, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => report.render_text(),
        OutputFormat::Table => table::render_table(report),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            json
        }
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let bands = SpendingBands::new(cli.high_average, cli.moderate_average)?;
    let service = ReportService::new(bands);

    let command = cli.command.unwrap_or(Commands::Track { limit: None });
    let (series, limit) = match command {
        Commands::Track { limit } => {
            let stdin = io::stdin();
            let mut collector = WeekCollector::new(stdin.lock(), prompt_writer(cli.format));
            let week = collector.collect(limit)?;
            (week.series, week.limit)
        }
        Commands::Report { limit, amounts } => {
            if amounts.len() != DAYS_IN_WEEK {
                warn!(
                    count = amounts.len(),
                    "expected {} daily amounts, reporting on what was given",
                    DAYS_IN_WEEK
                );
            }
            (DailySeries::from(amounts), limit)
        }
    };

    info!(days = series.len(), limit, "generating report");
    let report = service.build(&series, limit);
    print!("{}", render(&report, cli.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_command() {
        let cli = Cli::try_parse_from([
            "weekspend", "report", "--limit", "100", "20", "0", "15", "100", "5", "10", "0",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Report { limit, amounts }) => {
                assert_eq!(limit, 100.0);
                assert_eq!(amounts, vec![20.0, 0.0, 15.0, 100.0, 5.0, 10.0, 0.0]);
            }
            _ => panic!("expected report command"),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_report_rejects_negative_amount() {
        let result = Cli::try_parse_from(["weekspend", "report", "--limit", "100", "20", "-5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_after_amounts() {
        let cli = Cli::try_parse_from(["weekspend", "report", "--limit", "100", "20", "-v"]).unwrap();

        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Some(Commands::Report { ref amounts, .. }) if amounts == &vec![20.0]));
    }

    #[test]
    fn test_prompts_leave_stdout_for_structured_output() {
        assert!(prompts_on_stdout(OutputFormat::Text));
        assert!(!prompts_on_stdout(OutputFormat::Json));
        assert!(!prompts_on_stdout(OutputFormat::Table));
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::try_parse_from([
            "weekspend", "-vv", "track", "--limit", "$80", "--format", "json",
            "--high-average", "70",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.high_average, 70.0);
        assert!(matches!(cli.command, Some(Commands::Track { limit: Some(l) }) if l == 80.0));
    }

    #[test]
    fn test_no_subcommand_defaults_to_track() {
        let cli = Cli::try_parse_from(["weekspend"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_render_json() {
        let series = DailySeries::new(&[60.0; 7]);
        let report = ReportService::default().build(&series, 500.0);
        let out = render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["spending_level"], "high");
        assert_eq!(value["budget"]["status"], "within");
        assert_eq!(value["budget"]["remaining"], 80.0);
    }

    #[test]
    fn test_render_text_matches_report() {
        let series = DailySeries::new(&[10.0, 10.0]);
        let report = ReportService::default().build(&series, 15.0);
        let out = render(&report, OutputFormat::Text).unwrap();

        assert_eq!(out, report.render_text());
        assert!(out.contains("Day 2: $10.0"));
        assert!(out.contains("exceeded your budget by $5.0"));
    }
}
