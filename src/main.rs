//! factcheck — collect the fact-check comments embedded in character pages.
//!
//! Scans the profile pages of a site directory, pulls out each page's
//! `CHARACTER FACT CHECK INFORMATION` comment (or a placeholder built from
//! the page markup), adds a section for every data record that has no
//! page, and writes everything to one report file with a summary.
//!
//! `factcheck -r site` writes `site/character-fact-checks.txt`.

mod config;
mod discover;
mod model;
mod parser;
mod pipeline;
mod reconcile;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "factcheck",
    about = "Aggregate character fact-check comments into a single report"
)]
struct Cli {
    /// Site root containing the character pages
    #[arg(short = 'r', long, default_value = ".")]
    root: PathBuf,

    /// Report file. Relative paths resolve against the root.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// File name to skip (repeatable). Replaces the default exclusion list.
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,

    /// Subdirectory holding data records and extra pages
    #[arg(long, default_value = config::DEFAULT_CHARACTERS_DIR)]
    characters_dir: String,

    /// Print the report to stdout instead of writing the file
    #[arg(long)]
    stdout: bool,

    /// Debug-level diagnostics on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    fn to_config(&self) -> Config {
        let mut config = Config::new(self.root.clone()).with_characters_dir(&self.characters_dir);
        if let Some(ref output) = self.output {
            config = config.with_output(output);
        }
        if !self.exclude.is_empty() {
            config = config.with_exclusions(self.exclude.clone());
        }
        config
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "factcheck=debug" } else { "factcheck=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Console progress. Goes to stderr when stdout carries the report.
fn progress(report_on_stdout: bool, line: &str) {
    if report_on_stdout {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let started = Instant::now();
    let config = cli.to_config();
    let inputs = pipeline::Inputs::discover(&config)?;
    progress(
        cli.stdout,
        &format!(
            "Found {} character files and {} data files",
            inputs.profiles.len(),
            inputs.data_records.len()
        ),
    );
    let doc = pipeline::build_report(&inputs);
    let text = render::report::render_report(&doc, &render::report::generated_at());

    if cli.stdout {
        print!("{}", text);
        return Ok(());
    }

    fs::write(&config.output, &text)
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    let s = &doc.summary;
    println!("Processed {} characters", s.processed());
    println!("  with fact check comments: {}", s.extracted);
    println!(
        "  placeholders: {} ({} from data records only)",
        s.placeholders, s.reconciled
    );
    println!("  missing: {}", s.missing);
    println!("Saved to {}", config.output.display());
    println!("Done in {:.2?}", started.elapsed());
    Ok(())
}
