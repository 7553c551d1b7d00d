use anyhow::Context;
use bindzone_application::use_cases::ParseZoneFileUseCase;
use bindzone_domain::{BindParseResult, CliOverrides, LogFormat};
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::process::ExitCode;
use tracing::{debug, info};

mod bootstrap;

#[derive(Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "bindzone")]
#[command(version)]
#[command(about = "Parse a BIND zone file into importable DNS records")]
struct Cli {
    /// Zone file to parse, or "-" for stdin
    #[arg(value_name = "FILE")]
    file: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum)]
    log_format: Option<LogFormatArg>,

    /// Reject zone files larger than this many bytes
    #[arg(long)]
    max_input_bytes: Option<usize>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print record counts per type instead of the records
    #[arg(long)]
    summary: bool,
}

fn read_input(file: &str) -> anyhow::Result<String> {
    if file == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read zone file from stdin")?;
        return Ok(content);
    }
    let bytes = std::fs::read(file).with_context(|| format!("Failed to read {}", file))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn summary_json(result: &BindParseResult) -> serde_json::Value {
    let counts: serde_json::Map<String, serde_json::Value> = result
        .count_by_type()
        .into_iter()
        .map(|(t, n)| (t.as_str().to_string(), n.into()))
        .collect();
    serde_json::json!({
        "total": result.records.len(),
        "types": counts,
        "errors": result.errors,
        "warnings": result.warnings,
    })
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        max_input_bytes: cli.max_input_bytes,
        log_level: cli.log_level.clone(),
        log_format: cli.log_format.map(LogFormat::from),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!(version = env!("CARGO_PKG_VERSION"), file = %cli.file, "Starting bindzone");

    let content = read_input(&cli.file)?;
    let use_case = ParseZoneFileUseCase::new(config.import.clone());
    let result = use_case.execute(&content);

    let output = if cli.summary {
        summary_json(&result)
    } else {
        serde_json::to_value(&result)?
    };
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);

    if result.is_success() {
        info!(records = result.records.len(), "Import ready");
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
