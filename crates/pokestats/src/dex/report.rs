use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use pokestats_core::config::{parse_config, ConfigOverrides, PipelineParams, ReportConfig};
use pokestats_core::report::Report;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::{create_client, run_pipeline};
use crate::status::StatusSpinner;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone, Default)]
#[command(after_help = "EXAMPLES:
  # Report over the first 20 of 200 listed Pokémon:
  pokestats report

  # Detail 50 Pokémon and look for water types starting with \"s\":
  pokestats report --details 50 --type water --prefix s

  # Machine-readable output:
  pokestats report --json

NOTES:
  - --limit and --details fall back to 200 and 20 when missing or not a positive number
  - Weights are in decagrams (the API's unit); --threshold uses the same unit
  - Settings are read from ~/.config/pokestats/config.toml when present")]
pub struct ReportOptions {
    /// Number of Pokémon to list
    #[arg(short, long, env = "POKESTATS_LIMIT")]
    pub limit: Option<String>,

    /// Number of listed Pokémon to fetch details for
    #[arg(short, long, env = "POKESTATS_DETAILS")]
    pub details: Option<String>,

    /// Weight threshold in decagrams for the "heavier than" check
    #[arg(long, env = "POKESTATS_THRESHOLD")]
    pub threshold: Option<u64>,

    /// Name prefix to search for
    #[arg(long, env = "POKESTATS_PREFIX")]
    pub prefix: Option<String>,

    /// Type to filter by
    #[arg(long = "type", value_name = "TYPE", env = "POKESTATS_TYPE")]
    pub type_filter: Option<String>,

    /// How many of the heaviest Pokémon to show
    #[arg(long)]
    pub top_heaviest: Option<usize>,

    /// How many Pokémon to show in name order
    #[arg(long)]
    pub top_by_name: Option<usize>,

    /// Path to a TOML config file
    #[arg(short, long, env = "POKESTATS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ReportOptions {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            weight_threshold: self.threshold,
            search_prefix: self.prefix.clone(),
            type_filter: self.type_filter.clone(),
            top_heaviest: self.top_heaviest,
            top_by_name: self.top_by_name,
        }
    }
}

/// Report plus the parameters it was produced with
#[derive(Debug, Serialize, Clone)]
pub struct ReportOutput {
    pub params: PipelineParams,
    pub report: Report,
    pub lines: Vec<String>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|dir| dir.join("pokestats").join("config.toml"))
}

/// Read the config file, if any. An explicit path must exist; the default
/// location is skipped when absent.
pub fn load_config(explicit: Option<&Path>) -> Result<ReportConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path().filter(|p| p.is_file()) {
            Some(path) => path,
            None => return Ok(ReportConfig::default()),
        },
    };

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    parse_config(&contents).map_err(|e| eyre!("{}: {}", path.display(), e))
}

/// Resolve configuration and parameters, run the pipeline, and return the report
pub async fn report_data(
    options: &ReportOptions,
    global: &crate::Global,
    spinner: &StatusSpinner,
) -> Result<ReportOutput> {
    let config = load_config(options.config.as_deref())?.with_overrides(options.overrides());
    let params = PipelineParams::resolve(options.limit.as_deref(), options.details.as_deref());

    if global.verbose {
        eprintln!(
            "limit={} details={} concurrency={} config={:?}",
            params.limit, params.detail_count, global.concurrency, config
        );
    }

    let client = create_client(global)?;
    let report = run_pipeline(&client, params, global.concurrency, &config, |phase| {
        spinner.update(phase)
    })
    .await?;

    let lines = report.lines();
    Ok(ReportOutput {
        params,
        report,
        lines,
    })
}

pub async fn run(options: ReportOptions, global: crate::Global) -> Result<()> {
    let spinner = StatusSpinner::new(global.quiet);
    let result = report_data(&options, &global, &spinner).await;
    spinner.finish();

    let output = result?;

    if options.json {
        println!("{}", format_report_json(&output)?);
    } else {
        print!("{}", format_report_text(&output.report));
    }

    Ok(())
}

fn format_report_json(output: &ReportOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn format_report_text(report: &Report) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        report.header().to_uppercase().bright_cyan().bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    for section in report.sections() {
        result.push_str(&format!("\n{}\n", section.title.bright_yellow().bold()));
        for line in &section.lines {
            result.push_str(&format!("    {line}\n"));
        }
    }

    result.push('\n');
    result
}
