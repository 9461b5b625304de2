use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use file_comparer::{errors::errors::ErrorTip, render_difference, Comparer, Comparison, Options};
use log::{error, info};

/// Compares two text files, allowing numbers to differ within a relative tolerance.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Left file
    left: PathBuf,

    /// Right file
    right: PathBuf,

    /// Relative tolerance for numbers: |a-b| <= tolerance * max(|a|,|b|)
    #[arg(short, long, default_value_t = 0.0)]
    tolerance: f64,

    /// Ignore whitespace tokens, so runs of spaces of different length compare equal
    #[arg(short = 'w', long)]
    ignore_whitespace: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let options = Options::default().with_ignore_whitespace_tokens(args.ignore_whitespace);

    let start = Instant::now();

    let result = Comparer::new(args.tolerance, options).and_then(|comparer| {
        info!(
            "Comparing with relative tolerance {} and {:?}",
            comparer.relative_tolerance(),
            comparer.options()
        );
        comparer.compare_paths(&args.left, &args.right)
    });

    info!("Compared in {:?}", start.elapsed());

    match result {
        Ok(Comparison::Equal) => ExitCode::SUCCESS,
        Ok(Comparison::Different(difference)) => {
            eprint!(
                "{}",
                render_difference(
                    &difference,
                    &args.left.to_string_lossy(),
                    &args.right.to_string_lossy()
                )
            );
            ExitCode::from(1)
        }
        Err(err) => {
            error!("{}", err);
            if let ErrorTip::None = err.get_tip() {
                eprintln!("Error: {}", err.get_error_name());
            } else {
                eprintln!("Error: {} ({})", err.get_error_name(), err.get_tip());
            }
            ExitCode::from(2)
        }
    }
}
