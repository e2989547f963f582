#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
//! CLI for aligning the first two sequences of a FASTA file.

mod example;
mod fasta;
mod utils;

use std::path::PathBuf;

use affine_nw::{AlignmentMatrix, ScoreModel};
use clap::{CommandFactory, Parser};

/// Global alignment with identity/substitution scores and affine gap costs.
///
/// Without an input file and all four scores, runs a worked example instead.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a FASTA file. The first two sequences are aligned.
    #[arg(short('i'), long)]
    inp_path: Option<PathBuf>,

    /// Score for aligning two equal symbols.
    #[arg(long, allow_negative_numbers = true)]
    identity: Option<f64>,

    /// Score for aligning two different symbols.
    #[arg(long, allow_negative_numbers = true)]
    substitution: Option<f64>,

    /// Cost of opening a gap.
    #[arg(long, allow_negative_numbers = true)]
    gap_open: Option<f64>,

    /// Cost of extending a gap by one position.
    #[arg(long, allow_negative_numbers = true)]
    gap_extend: Option<f64>,

    /// The name of the log file, written under `./logs/`.
    #[arg(short('l'), long, default_value = "nw-shell")]
    log_name: String,
}

impl Args {
    /// The scoring scheme, if all four scores were given.
    ///
    /// # Errors
    ///
    /// If any score is not a finite number.
    fn score_model(&self) -> Result<Option<ScoreModel<f64>>, String> {
        let (Some(identity), Some(substitution), Some(gap_open), Some(gap_extend)) =
            (self.identity, self.substitution, self.gap_open, self.gap_extend)
        else {
            return Ok(None);
        };

        for (name, value) in [
            ("identity", identity),
            ("substitution", substitution),
            ("gap-open", gap_open),
            ("gap-extend", gap_extend),
        ] {
            if !value.is_finite() {
                return Err(format!("The {name} score must be a finite number, got {value}."));
            }
        }

        Ok(Some(ScoreModel::new(identity, substitution, gap_open, gap_extend)))
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    // We need the `_guard` in scope to ensure proper logging.
    let (_guard, log_path) = utils::configure_logger(&args.log_name)?;
    eprintln!("Log file: {log_path:?}");
    ftlog::info!("{args:?}");

    let (Some(inp_path), Some(model)) = (&args.inp_path, args.score_model()?) else {
        ftlog::info!("Not enough arguments. Running the worked example.");
        println!("{}", Args::command().render_long_help());
        println!("\n########################\n");
        println!("{}", example::run()?);
        return Ok(());
    };

    let [seq1, seq2] = fasta::first_two(fasta::read(inp_path)?)?;
    ftlog::info!("Aligning sequences of lengths {} and {}.", seq1.len(), seq2.len());

    let mut matrix = AlignmentMatrix::new(&seq1, &seq2, model)?;
    matrix.fill();
    ftlog::info!("Optimal score: {}", matrix.score());

    println!("{matrix}");
    let [x_aligned, y_aligned] = matrix.alignment_str();
    println!("{x_aligned}\n{y_aligned}");

    Ok(())
}
