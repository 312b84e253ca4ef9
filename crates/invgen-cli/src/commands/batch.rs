//! Batch command - generate invoices for every file matching a glob.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use invgen_core::{Corrections, extract_fields, render_invoice};

use super::StyleArg;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Invoice template applied to every file
    #[arg(short, long, value_enum, default_value = "simple")]
    style: StyleArg,

    /// Output directory (default: next to each input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Use embedded PDF text only, never OCR
    #[arg(long)]
    text_only: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "pdf" | "png" | "jpg" | "jpeg")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files for pattern: {}", args.input);
    }

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let backend = super::make_backend(&config, args.text_only);
    let mut succeeded = 0usize;
    let mut failed: Vec<(PathBuf, String)> = Vec::new();

    for path in &files {
        pb.set_message(path.display().to_string());

        match process_one(path, &args, &config, backend.as_ref()) {
            Ok(output_path) => {
                debug!(input = %path.display(), output = %output_path.display(), "Generated");
                succeeded += 1;
            }
            Err(e) => {
                error!(input = %path.display(), error = %e, "Generation failed");
                if !args.continue_on_error {
                    pb.abandon();
                    return Err(e.context(format!("while processing {}", path.display())));
                }
                failed.push((path.clone(), e.to_string()));
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    println!(
        "{} {} generated, {} failed in {:.1?}",
        style("✓").green(),
        succeeded,
        failed.len(),
        start.elapsed()
    );
    for (path, reason) in &failed {
        println!("  {} {}: {}", style("✗").red(), path.display(), reason);
    }

    Ok(())
}

fn process_one(
    path: &PathBuf,
    args: &BatchArgs,
    config: &invgen_core::InvgenConfig,
    backend: &dyn invgen_core::OcrBackend,
) -> anyhow::Result<PathBuf> {
    let artifact = super::read_artifact(path)?;
    let result = extract_fields(&artifact, config, backend)?;

    // Batch runs take the draft as-is; corrections are interactive-only.
    let fields = Corrections::default().apply(result.draft);
    let rendered = render_invoice(&fields, args.style.into())?;

    let output_path = match &args.output_dir {
        Some(dir) => dir.join(&rendered.filename),
        None => path.with_file_name(&rendered.filename),
    };
    fs::write(&output_path, &rendered.data)?;

    Ok(output_path)
}
