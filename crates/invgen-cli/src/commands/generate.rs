//! Generate command - full pipeline from one scan to one invoice PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDate;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use invgen_core::{Corrections, extract_fields, render_invoice};

use super::StyleArg;

/// Arguments for the generate command.
#[derive(Args)]
pub struct GenerateArgs {
    /// Input file (PDF or image)
    #[arg(required = true)]
    input: PathBuf,

    /// Invoice template
    #[arg(short, long, value_enum, default_value = "simple")]
    style: StyleArg,

    /// Override the guessed entity name
    #[arg(long)]
    entity: Option<String>,

    /// Override the transaction date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Override the guessed amount
    #[arg(long)]
    amount: Option<String>,

    /// Override the guessed description
    #[arg(long)]
    description: Option<String>,

    /// Output file (default: the suggested filename)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use embedded PDF text only, never OCR
    #[arg(long)]
    text_only: bool,

    /// Print the extracted text
    #[arg(long)]
    show_text: bool,
}

pub fn run(args: GenerateArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let artifact = super::read_artifact(&args.input)?;

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Reading source text...");
    pb.set_position(10);

    let backend = super::make_backend(&config, args.text_only);
    let result = extract_fields(&artifact, &config, backend.as_ref())?;

    pb.set_message("Rendering invoice...");
    pb.set_position(70);

    if args.show_text {
        pb.suspend(|| {
            println!("{}", style("Extracted text:").bold());
            println!("{}", result.raw_text);
        });
    }

    let guesses = &result.guesses;
    pb.suspend(|| {
        println!("{}", style("Guessed fields:").bold());
        print_guess("entity", guesses.entity.as_deref());
        print_guess("amount", guesses.amount.as_deref());
        print_guess("description", guesses.description.as_deref());
        println!("  date:        {} (today)", result.draft.date);
    });

    let corrections = Corrections {
        entity: args.entity,
        date: args.date,
        amount: args.amount,
        description: args.description,
    };
    if !corrections.is_empty() {
        debug!("Applying command-line corrections");
    }
    let fields = corrections.apply(result.draft);

    let rendered = render_invoice(&fields, args.style.into())?;

    pb.set_position(90);

    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(&rendered.filename));
    fs::write(&output_path, &rendered.data)?;

    pb.finish_and_clear();

    println!(
        "{} Invoice written to {} ({} bytes)",
        style("✓").green(),
        output_path.display(),
        rendered.data.len()
    );
    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn print_guess(name: &str, value: Option<&str>) {
    match value {
        Some(value) => println!("  {:<12} {}", format!("{name}:"), value),
        None => println!("  {:<12} {}", format!("{name}:"), style("(blank)").dim()),
    }
}
