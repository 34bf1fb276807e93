//! Espresso Logic Minimizer - Command Line Interface
//!
//! A thin CLI over the native `Cover`/`Minimizable` API.

use clap::{Parser, ValueEnum};
use espresso_min::{Cover, CoverType, EspressoConfig, Minimizable, PLAReader, PLAWriter};
use std::path::PathBuf;
use std::process;

const VERSION: &str = "espresso-min (native Rust port of UC Berkeley Espresso-II)";

#[derive(Debug, Clone, PartialEq, ValueEnum)]
enum Command {
    /// Run the Espresso heuristic minimization algorithm (default)
    Espresso,
    /// Exact minimization via branch-and-bound unate covering
    Exact,
    /// Echo the PLA without modification
    Echo,
    /// Print statistics about the PLA
    Stats,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputType {
    /// ON-set only
    F,
    /// ON-set and don't-care set
    Fd,
    /// ON-set and OFF-set
    Fr,
    /// ON-set, don't-care set, and OFF-set
    Fdr,
}

impl From<OutputType> for CoverType {
    fn from(val: OutputType) -> Self {
        match val {
            OutputType::F => CoverType::F,
            OutputType::Fd => CoverType::FD,
            OutputType::Fr => CoverType::FR,
            OutputType::Fdr => CoverType::FDR,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "espresso")]
#[command(about = "Espresso heuristic logic minimizer", long_about = None)]
#[command(version = VERSION)]
struct Args {
    /// Input PLA file (required)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Subcommand to execute
    #[arg(short = 'D', long = "do", value_enum, default_value = "espresso")]
    command: Command,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value = "f")]
    output_format: OutputType,

    /// Provide execution summary
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Suppress printing of solution
    #[arg(short = 'x', long = "no-output")]
    no_output: bool,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Use single expand/irredundant pass instead of iterating to a fixed point
    #[arg(long = "fast")]
    single_expand: bool,

    /// Use SUPER_GASP instead of LAST_GASP in the perturbation step
    #[arg(long = "super-gasp")]
    use_super_gasp: bool,

    /// Skip the MAKE_SPARSE pass
    #[arg(long = "skip-make-sparse")]
    skip_make_sparse: bool,
}

fn main() {
    let args = Args::parse();

    if args.summary {
        eprintln!("{}", VERSION);
        eprintln!();
    }

    let mut cover = match Cover::from_pla_file(&args.input) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading PLA file '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    if args.summary {
        eprintln!(
            "Input: {} inputs, {} outputs, {} cubes",
            cover.num_inputs(),
            cover.num_outputs(),
            cover.num_cubes()
        );
        eprintln!();
    }

    let config = EspressoConfig {
        single_expand: args.single_expand,
        use_super_gasp: args.use_super_gasp,
        skip_make_sparse: args.skip_make_sparse,
        ..Default::default()
    };

    match args.command {
        Command::Espresso => {
            if args.summary {
                eprintln!("Running Espresso heuristic minimization...");
            }
            cover = match cover.minimize_with_config(&config) {
                Ok(minimized) => minimized,
                Err(e) => {
                    eprintln!("Error during minimization: {}", e);
                    process::exit(1);
                }
            };
        }
        Command::Exact => {
            if args.summary {
                eprintln!("Running exact minimization...");
            }
            cover = match cover.minimize_exact_with_config(&config) {
                Ok(minimized) => minimized,
                Err(e) => {
                    eprintln!("Error during minimization: {}", e);
                    process::exit(1);
                }
            };
        }
        Command::Echo => {
            if args.summary {
                eprintln!("Echoing PLA without modification...");
            }
        }
        Command::Stats => {
            println!("PLA Statistics:");
            println!("  Inputs:  {}", cover.num_inputs());
            println!("  Outputs: {}", cover.num_outputs());
            println!("  Cubes:   {}", cover.num_cubes());
            if args.no_output {
                process::exit(0);
            }
        }
    };

    if args.summary {
        eprintln!(
            "Output: {} inputs, {} outputs, {} cubes",
            cover.num_inputs(),
            cover.num_outputs(),
            cover.num_cubes()
        );
        eprintln!();
    }

    if !args.no_output {
        let output_type = CoverType::from(args.output_format);

        if let Some(ref output_path) = args.output_file {
            match cover.to_pla_file(output_path, output_type) {
                Ok(_) => {
                    if args.summary {
                        eprintln!("Wrote output to: {}", output_path.display());
                    }
                }
                Err(e) => {
                    eprintln!("Error writing output file: {}", e);
                    process::exit(1);
                }
            }
        } else {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            if let Err(e) = cover.write_pla(&mut handle, output_type) {
                eprintln!("Error writing PLA output: {}", e);
                process::exit(1);
            }
        }
    }

    if args.summary {
        eprintln!("Done.");
    }
}
