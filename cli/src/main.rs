//! docx2wiki CLI - Word document to wiki markup conversion
//!
//! A command-line tool for converting the body of DOCX files to wiki markup.

use clap::{Parser, Subcommand};
use colored::*;
use docx2wiki::RenderOptions;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Word document to wiki markup conversion
#[derive(Parser)]
#[command(
    name = "docx2wiki",
    author = "iyulab",
    version,
    about = "Convert Word documents to wiki markup",
    long_about = "docx2wiki - Word (.docx) to wiki markup converter.\n\n\
                  Renders headings, bullet lists, tables and named pictures \
                  as lightweight wiki markup."
)]
struct Cli {
    /// Enable info-level logging (otherwise RUST_LOG applies)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to wiki markup
    #[command(visible_alias = "c")]
    Convert {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Omit !name! placeholders for pictures
        #[arg(long)]
        no_pictures: bool,

        /// Maximum heading level (1-6)
        #[arg(long, default_value = "6")]
        max_heading: u8,
    },

    /// Dump the parsed document tree as JSON
    Tree {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            no_pictures,
            max_heading,
        } => {
            let pb = create_spinner("Converting document...");

            let options = RenderOptions::new()
                .with_pictures(!no_pictures)
                .with_max_heading(max_heading);
            let result = docx2wiki::to_wiki_with_options(&input, &options);

            pb.finish_and_clear();
            let markup = result?;
            tracing::info!(input = %input.display(), bytes = markup.len(), "Converted document");

            write_output(output.as_ref(), &markup)?;

            if let Some(path) = output {
                eprintln!(
                    "{} Converted to wiki markup: {}",
                    "✓".green().bold(),
                    path.display()
                );
            }
        }

        Commands::Tree {
            input,
            output,
            compact,
        } => {
            let pb = create_spinner("Parsing document...");
            let result = docx2wiki::parse_file(&input);
            pb.finish_and_clear();
            let tree = result?;

            let json = if compact {
                serde_json::to_string(&tree)?
            } else {
                serde_json::to_string_pretty(&tree)?
            };

            write_output(output.as_ref(), &json)?;
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "docx2wiki".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Word document to wiki markup conversion");
    println!();
    println!("Supported formats: DOCX");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Write markup exactly as produced; stdout output is not given an extra
/// trailing newline.
fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content.as_bytes())?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}
