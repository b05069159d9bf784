//! Train an ID3 tree on one CSV file and classify the rows of another.
use clap::Parser;
use colored::Colorize;

use std::path::PathBuf;
use std::process;

use id3_tree::{
    Id3Builder,
    Result,
    read_csv,
};
use id3_tree::research::{
    LearningCurve,
    plot_learning_curve,
};


/// Arguments of the `id3` command
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "id3", version, about)]
struct Args {
    /// Training data (CSV, header first, class last)
    train: PathBuf,

    /// Rows to classify (CSV, same layout as the training data)
    test: PathBuf,

    /// Write the tree as a Graphviz file
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Write the classifier as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Draw the learning curve into this PNG file
    #[arg(long)]
    curve: Option<PathBuf>,

    /// Trials per training size for the learning curve
    #[arg(
        long,
        default_value_t = 20,
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    trials: u64,

    /// Grow sibling subtrees in parallel
    #[arg(long)]
    parallel: bool,

    /// Print training statistics
    #[arg(short, long)]
    verbose: bool,

    /// Do not print the tree
    #[arg(short, long)]
    quiet: bool,
}


fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{} {e}", "Error:".bold().red());
        process::exit(1);
    }
}


fn run(args: &Args) -> Result<()> {
    let train = read_csv(&args.train)?;
    let test = read_csv(&args.test)?;

    let id3 = Id3Builder::new()
        .parallel(args.parallel)
        .verbose(args.verbose)
        .build();
    let f = id3.fit(&train)?;

    if !args.quiet {
        print!("{f}");
    }
    for label in f.classify_rows(&test, true)? {
        println!("{label}");
    }

    if let Some(path) = &args.dot {
        f.to_dot_file(path)?;
    }
    if let Some(path) = &args.json {
        f.save(path)?;
    }
    if let Some(path) = &args.curve {
        let points = LearningCurve::new(&train, &test)
            .learner(Id3Builder::new().parallel(args.parallel).build())
            .trials(args.trials as usize)
            .shuffle(true)
            .verbose(args.verbose)
            .run()?;
        plot_learning_curve(&points, path, "Learning curve")?;
    }

    Ok(())
}
