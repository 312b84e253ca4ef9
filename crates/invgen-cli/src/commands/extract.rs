//! Extract command - run the rules and emit the guesses.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use serde::Serialize;

use invgen_core::{ExtractionResult, extract_fields};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file (PDF or image)
    #[arg(required = true)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use embedded PDF text only, never OCR
    #[arg(long)]
    text_only: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// Flat view of an extraction result for serialization.
#[derive(Serialize)]
struct GuessReport<'a> {
    entity: &'a str,
    date: String,
    amount: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_token: Option<&'a str>,
}

impl<'a> GuessReport<'a> {
    fn new(result: &'a ExtractionResult) -> Self {
        Self {
            entity: &result.draft.entity,
            date: result.draft.date.to_string(),
            amount: &result.draft.amount,
            description: &result.draft.description,
            date_token: result.guesses.date_token.as_deref(),
        }
    }
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let artifact = super::read_artifact(&args.input)?;
    let backend = super::make_backend(&config, args.text_only);

    let result = extract_fields(&artifact, &config, backend.as_ref())?;
    let report = GuessReport::new(&result);

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Csv => format_csv(&report)?,
        OutputFormat::Text => format_text(&report),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{output}");
    }

    Ok(())
}

fn format_csv(report: &GuessReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["entity", "date", "amount", "description", "date_token"])?;
    wtr.write_record([
        report.entity,
        report.date.as_str(),
        report.amount,
        report.description,
        report.date_token.unwrap_or(""),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &GuessReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Entity:      {}\n", report.entity));
    output.push_str(&format!("Date:        {}\n", report.date));
    output.push_str(&format!("Amount:      {}\n", report.amount));
    output.push_str(&format!("Description: {}\n", report.description));
    if let Some(token) = report.date_token {
        output.push_str(&format!("Date token:  {token}\n"));
    }

    output
}
