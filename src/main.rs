use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chessdss::analysis::report::{analyze_batch_with_progress, analyze_with, read_fen_list};
use chessdss::analysis::AnalysisParams;
use chessdss::perft::perft;
use chessdss::search::eval::evaluate;
use chessdss::Position;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Parser, Debug)]
#[command(author, version, about = "Chess decision support: best move, payoff matrix and dominated moves", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyse one position and print the JSON report
    Analyze {
        #[arg(long)]
        fen: String,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Analyse one FEN per line, writing one JSON report per line
    Batch {
        #[arg(long)]
        input: PathBuf,
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = 1)]
        threads: usize,
    },
    /// Print the static material evaluation
    Eval {
        #[arg(long, default_value = STARTPOS)]
        fen: String,
    },
    /// Count leaf nodes to verify move generation and apply/undo
    Perft {
        #[arg(long, default_value = STARTPOS)]
        fen: String,
        #[arg(long, default_value_t = 3)]
        depth: u32,
    },
}

fn cmd_analyze(fen: &str, pretty: bool) -> Result<()> {
    let report = analyze_with(fen, AnalysisParams::default())?;
    let json = if pretty { serde_json::to_string_pretty(&report)? } else { serde_json::to_string(&report)? };
    println!("{json}");
    Ok(())
}

fn cmd_batch(input: &PathBuf, out: Option<&PathBuf>, threads: usize) -> Result<()> {
    let fens = read_fen_list(input).with_context(|| format!("reading {}", input.display()))?;
    info!("analysing {} positions on {} threads", fens.len(), threads.max(1));

    let pb = ProgressBar::new(fens.len() as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} [{elapsed_precise}]")?);
    let params = AnalysisParams::default();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads.max(1)).build()?;
    let t0 = Instant::now();
    let reports = pool.install(|| analyze_batch_with_progress(&fens, params, || pb.inc(1)));
    pb.finish_and_clear();

    let mut w: Box<dyn Write> = match out {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| format!("creating {}", path.display()))?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut failures = 0usize;
    for (fen, report) in fens.iter().zip(reports) {
        match report {
            Ok(r) => writeln!(w, "{}", serde_json::to_string(&r)?)?,
            Err(e) => {
                failures += 1;
                warn!("{e}");
                writeln!(w, "{}", serde_json::json!({ "fen": fen, "error": e.to_string() }))?;
            }
        }
    }
    w.flush()?;
    info!("done in {:.2}s ({} failed)", t0.elapsed().as_secs_f64(), failures);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    match args.command {
        Command::Analyze { fen, pretty } => cmd_analyze(&fen, pretty)?,
        Command::Batch { input, out, threads } => cmd_batch(&input, out.as_ref(), threads)?,
        Command::Eval { fen } => {
            let pos = Position::from_fen(&fen)?;
            println!("{}", evaluate(&pos));
        }
        Command::Perft { fen, depth } => {
            let mut pos = Position::from_fen(&fen)?;
            let t0 = Instant::now();
            let nodes = perft(&mut pos, depth);
            println!("perft({depth}) = {nodes} in {:.3}s", t0.elapsed().as_secs_f64());
        }
    }
    Ok(())
}
