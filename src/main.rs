use std::{path::PathBuf, process};

use anyhow::Context;
use clap::Parser;
use peoplegen::consts::consts::{PersonCount, PersonCountError};
use peoplegen::generator::generator::Generator;
use peoplegen::generator::options::GeneratorOptions;
use peoplegen::persistence::file::write_dataset;

/// 👪 Generates a JSON list of random people with birth / death years between 1900 and 2000
#[derive(Parser, Debug)]
struct Cli {
    /// Number of people to generate, between 1 and 9001
    #[clap(short = 'n', long = "count", allow_negative_numbers = true)]
    count: Option<String>,

    /// File the list of people is written to, replaced if it already exists
    #[clap(short = 'o', long = "output", value_parser = parse_output_path)]
    output: PathBuf,

    /// Seed for the random generator, the same seed always produces the same list
    #[clap(long)]
    seed: Option<u64>,
}

fn parse_output_path(value: &str) -> Result<PathBuf, String> {
    if value.trim().is_empty() {
        return Err("Output path cannot be empty".to_string());
    }

    Ok(PathBuf::from(value))
}

// Reported as a single line, before anything is generated or written
fn exit_invalid_count(reason: PersonCountError) -> ! {
    eprintln!("error: {}", reason);

    process::exit(2);
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let args = Cli::parse();

    let count = PersonCount::from_argument(args.count.as_deref())
        .unwrap_or_else(|reason| exit_invalid_count(reason));

    let options = GeneratorOptions::default()
        .set_count(count)
        .set_output(args.output)
        .set_seed(args.seed);

    let people = Generator::from_options(&options).generate(options.count);

    let written = write_dataset(&options.output, &people)
        .context("Failed to write list of random people")?;

    println!(
        "Successfully wrote list of random people to: {}",
        written.display()
    );

    Ok(())
}
