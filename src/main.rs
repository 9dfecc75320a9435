use anyhow::Context;
use clap::Parser;
use even_filter::{print_even_numbers, EVEN_ARR, HEADER};
use log::info;
use std::io::{self, Write};

/// Prints the even numbers of a fixed array.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", HEADER).context("failed to write header")?;
    let evens =
        print_even_numbers(&mut out, &EVEN_ARR).context("failed to write even numbers")?;
    out.flush().context("failed to flush stdout")?;

    info!("printed {} of {} numbers", evens.len(), EVEN_ARR.len());
    Ok(())
}
