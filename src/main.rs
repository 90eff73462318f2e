use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{debug, error};

use mls_panel::{parse_bits, parse_taps, GridShape, PanelOutput, PanelRequest, Result};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// `[1, 0, 0, 1, ...]`
    List,
    /// `1001...`
    Compact,
}

/// Maximum length sequence generator for diffuser panel hole patterns
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Degree of the polynomial (number of shift register stages)
    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u64).range(2..=16))]
    degree: u64,

    /// Initial seed, one bit per stage, e.g. '1,0,0,1' for degree 4
    #[arg(short, long, default_value = "1,0,0,1")]
    seed: String,

    /// Feedback taps, 0-indexed, e.g. '3,2' for taps at positions 4 and 3
    #[arg(short, long, default_value = "3,2")]
    taps: String,

    /// Grid rows
    #[arg(short, long, requires = "cols", value_parser = clap::value_parser!(u64).range(2..=50))]
    rows: Option<u64>,

    /// Grid columns
    #[arg(short, long, requires = "rows", value_parser = clap::value_parser!(u64).range(2..=50))]
    cols: Option<u64>,

    /// How to print the sequence
    #[arg(short, long, value_enum, default_value_t = Format::List)]
    format: Format,
}

impl Args {
    fn to_request(&self) -> Result<PanelRequest> {
        let grid = match (self.rows, self.cols) {
            (Some(rows), Some(cols)) => Some(GridShape {
                rows: rows as usize,
                cols: cols as usize,
            }),
            _ => None,
        };

        Ok(PanelRequest {
            degree: self.degree as usize,
            seed: parse_bits(&self.seed)?,
            taps: parse_taps(&self.taps)?,
            grid,
        })
    }
}

fn print_output(output: &PanelOutput, format: Format) {
    let sequence = &output.sequence;
    println!("Generated MLS sequence of length {}:", sequence.len());
    match format {
        Format::List => println!("{}", sequence),
        Format::Compact => println!("{}", sequence.compact()),
    }

    if let Some(grid) = &output.grid {
        println!();
        println!(
            "Grid {} x {} ({} holes):",
            grid.rows(),
            grid.cols(),
            grid.holes()
        );
        println!("{}", grid);
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    debug!("{:?}", args);

    match args.to_request().and_then(|request| request.run()) {
        Ok(output) => {
            print_output(&output, args.format);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{:?}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
