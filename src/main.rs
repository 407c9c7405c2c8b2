use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use colored::Colorize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use id3_tree::prelude::*;

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;


/// Grow an ID3 decision tree from a CSV file of categorical values.
#[derive(Parser, Debug)]
#[command(name = "id3-tree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file; every column but the target is an attribute
    #[arg(value_hint = ValueHint::FilePath)]
    path: PathBuf,

    /// Target column (default: the last column)
    #[arg(short, long)]
    target: Option<String>,

    /// The file has no header row
    #[arg(long)]
    no_header: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write the tree to this file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Print only a summary line instead of the tree
    #[arg(short, long)]
    quiet: bool,

    /// Score candidate attributes on a single thread
    #[arg(long)]
    sequential: bool,

    /// Debug level: -d, -dd, -ddd
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}


#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Indented text
    Text,
    /// Graphviz DOT
    Dot,
    /// Nested JSON
    Json,
}


fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("{}", format!("Error: {e}").red());
        process::exit(1);
    }
}


fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}


fn run(cli: &Cli) -> Result<()> {
    let mut reader = SampleReader::<_, String>::default()
        .file(&cli.path)
        .has_header(!cli.no_header);
    if let Some(target) = &cli.target {
        reader = reader.target_feature(target.clone());
    }
    let sample = reader.read()?;

    let tree = Id3Builder::new(&sample)
        .parallel(!cli.sequential)
        .build()?
        .generate_tree();

    if cli.quiet {
        println!(
            "{} nodes, {} leaves, depth {} (target: {})",
            tree.len(),
            tree.n_leaves(),
            tree.depth(),
            tree.target().label(),
        );
        return Ok(());
    }

    let colored = cli.output.is_none()
        && cli.format == Format::Text
        && io::stdout().is_terminal();
    let rendered = match cli.format {
        Format::Text => tree.printer().colored(colored).to_string(),
        Format::Dot => tree.to_dot(),
        Format::Json => tree.to_json()?,
    };

    match &cli.output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }
    Ok(())
}
