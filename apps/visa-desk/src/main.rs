//! Visa Desk binary
//!
//! `analyze` prints the summary panels for one document, `review` opens an
//! interactive checklist session on stdin.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use compliance_engine::RuleExtractor;
use shared_docs::LoadError;
use shared_types::Analysis;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use visa_desk::{review, ChecklistSession, DeskConfig, DeskReport, Region};

#[derive(Parser, Debug)]
#[command(name = "visa-desk")]
#[command(version, about = "Summarise visa regulation documents for the consulting desk")]
struct Cli {
    /// Log extraction details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the summary, checklist and sales panels for a document
    Analyze {
        #[command(flatten)]
        doc: DocArgs,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Walk through the document checklist interactively
    Review {
        #[command(flatten)]
        doc: DocArgs,
    },
}

#[derive(Args, Debug)]
struct DocArgs {
    /// Regulation document (PDF or DOCX)
    file: PathBuf,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Region / visa type shown in the report header
    #[arg(short, long, value_enum)]
    region: Option<Region>,
}

impl DocArgs {
    fn desk_config(&self) -> DeskConfig {
        let mut config = DeskConfig::load_with_fallback(self.config.as_deref());
        if let Some(region) = self.region {
            config.region = region;
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the report, so logs go to stderr
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Analyze { doc, json } => {
            let config = doc.desk_config();
            let analysis = analyze_file(&doc.file)?;

            if json || config.output.json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                let session = ChecklistSession::new(analysis.checklist.clone());
                print!("{}", DeskReport::new(&analysis, &session, &config));
            }
        }
        Command::Review { doc } => {
            let config = doc.desk_config();
            let analysis = analyze_file(&doc.file)?;
            let mut session = ChecklistSession::new(analysis.checklist.clone());

            print!("{}", DeskReport::new(&analysis, &session, &config));
            println!();

            let stdin = std::io::stdin();
            review::run_review(&mut session, stdin.lock(), std::io::stdout())
                .context("Checklist review failed")?;
        }
    }

    Ok(())
}

fn analyze_file(path: &Path) -> Result<Analysis> {
    let text = match shared_docs::load_path(path) {
        Ok(text) => text,
        Err(LoadError::UnsupportedFormat(name)) => {
            bail!("Desteklenmeyen dosya formatı. ({})", name)
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to load {}", path.display()));
        }
    };

    let file_name = path.file_name().map(|name| name.to_string_lossy());
    Ok(RuleExtractor::new(text).analyze(file_name.as_deref()))
}
