//! Glomscore: glomerulosclerosis lesion scoring.
//!
//! Glomscore computes the glomerulosclerosis (GS) score, the proportion
//! of glomeruli exhibiting global sclerosis, from two annotation
//! collections (non-sclerosed and sclerosed), together with a 95% Wilson
//! score confidence interval. Annotation geometry is never interpreted;
//! only the size of each collection feeds the score.
//!
//! # Modules
//!
//! - [`annotation`]: Annotation document model and JSON loading
//! - [`score`]: Proportion and interval estimation, report record
//! - [`error`]: Error types for glomscore operations

pub mod annotation;
pub mod error;
pub mod score;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::GlomscoreError;
pub use score::{compute_gs, GsReport};

/// The glomscore CLI application.
#[derive(Parser)]
#[command(name = "glomscore")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Compute the glomerulosclerosis score from two annotation files.
    Score(ScoreArgs),
}

/// Arguments for the score subcommand.
#[derive(clap::Args)]
struct ScoreArgs {
    /// Directory where the glomeruli annotation files are stored.
    #[arg(long, default_value = ".")]
    annotation_dir: PathBuf,

    /// Name of the file containing annotations for non-globally sclerotic
    /// glomeruli (i.e. normal glomeruli).
    #[arg(long, default_value = "non_globally_sclerotic_glomeruli.json")]
    ngsg_file: String,

    /// Name of the file containing annotations for globally sclerotic
    /// glomeruli.
    #[arg(long, default_value = "globally_sclerotic_glomeruli.json")]
    gsg_file: String,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,

    /// Directory in which to store results. Results will be saved as
    /// 'glomerulosclerosis.csv'.
    #[arg(long)]
    results_dir: Option<PathBuf>,
}

/// Run the glomscore CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), GlomscoreError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Score(args)) => run_score(args),
        None => {
            // No subcommand: just print a usage hint and exit successfully
            println!("glomscore {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Glomerulosclerosis lesion scoring from annotation counts.");
            println!();
            println!("Run 'glomscore --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the score subcommand.
fn run_score(args: ScoreArgs) -> Result<(), GlomscoreError> {
    let ngsg_path = args.annotation_dir.join(&args.ngsg_file);
    let gsg_path = args.annotation_dir.join(&args.gsg_file);

    // Load annotations; only collection cardinality feeds the score
    let ngsg = annotation::io_json::read_annotation_json(&ngsg_path)?;
    let gsg = annotation::io_json::read_annotation_json(&gsg_path)?;

    let report = score::compute_gs(ngsg.element_count() as u64, gsg.element_count() as u64)?;

    // Output results
    match args.output.as_str() {
        "json" => {
            let json =
                serde_json::to_string_pretty(&report).map_err(GlomscoreError::ReportJson)?;
            println!("{}", json);
        }
        _ => {
            // Default text output
            print!("{}", report);
        }
    }

    if let Some(dir) = &args.results_dir {
        let path = score::write_csv_report(dir, &report)?;
        println!("Results written to {}", path.display());
    }

    Ok(())
}
