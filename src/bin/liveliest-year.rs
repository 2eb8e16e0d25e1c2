use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use num_format::{Locale, ToFormattedString};
use peoplegen::census::census::{liveliest_years, people_alive_per_year, write_report};
use peoplegen::persistence::file::read_dataset;

/// 📅 Finds the year(s) in which the most people from a generated list were alive
#[derive(Parser, Debug)]
struct Cli {
    /// JSON list of people, as written by `peoplegen`
    input: std::path::PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let args = Cli::parse();

    let people = read_dataset(&args.input)?;

    log::info!(
        "Loaded {} people from {}",
        people.len().to_formatted_string(&Locale::en),
        args.input.display()
    );

    let people_by_year = people_alive_per_year(&people)
        .with_context(|| format!("Invalid list of people in {}", args.input.display()))?;

    let liveliest = liveliest_years(&people_by_year);

    let mut out = BufWriter::new(io::stdout().lock());
    write_report(&mut out, &liveliest, &people_by_year)?;
    out.flush()?;

    Ok(())
}
