use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use runrating_core::cli::{render_rating, render_speed, render_table, run_menu};
use runrating_core::{plan_for_rating, rate_performance, rating_table, RaceTime};

#[derive(Parser, Debug)]
#[command(
    name = "runrating",
    about = "Convert between running speed, rating (ELO), distance and finish time"
)]
struct Cli {
    /// Print the report as JSON instead of text (one-shot commands only)
    #[arg(long, global = true)]
    json: bool,
    /// Without a subcommand the interactive menu is started
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rating and average speed for a finished distance
    Rating {
        #[arg(long)]
        distance: f64,
        #[arg(long, default_value_t = 0)]
        hours: i64,
        #[arg(long, default_value_t = 0)]
        minutes: i64,
        #[arg(long, default_value_t = 0.0)]
        seconds: f64,
    },
    /// Speed and finish time needed for a target rating
    Speed {
        #[arg(long)]
        distance: f64,
        #[arg(long)]
        rating: f64,
    },
    /// Speed and finish time for a range of ratings
    Table {
        #[arg(long)]
        distance: f64,
        #[arg(long)]
        start: f64,
        #[arg(long)]
        end: f64,
        #[arg(long, default_value_t = 100.0)]
        step: f64,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

// Menyen skriver alltid tekst; --json gir bare mening for engangskommandoer
fn check_args(cli: &Cli) -> Result<()> {
    if cli.json && cli.command.is_none() {
        bail!("--json needs a subcommand (rating, speed or table)");
    }
    Ok(())
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    check_args(&cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let Some(command) = cli.command else {
        log::info!("starting interactive menu");
        run_menu(io::stdin().lock(), out)?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Rating {
            distance,
            hours,
            minutes,
            seconds,
        } => {
            let report = rate_performance(distance, RaceTime::new(hours, minutes, seconds))
                .context("computing rating")?;
            if cli.json {
                emit_json(&mut out, &report)?;
            } else {
                render_rating(&mut out, &report)?;
            }
        }
        Commands::Speed { distance, rating } => {
            let report = plan_for_rating(distance, rating).context("computing speed")?;
            if cli.json {
                emit_json(&mut out, &report)?;
            } else {
                render_speed(&mut out, &report)?;
            }
        }
        Commands::Table {
            distance,
            start,
            end,
            step,
        } => {
            let table = rating_table(distance, start, end, step).context("building rating table")?;
            if cli.json {
                emit_json(&mut out, &table)?;
            } else {
                render_table(&mut out, &table)?;
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn emit_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(out, "{json}").context("writing to stdout")?;
    Ok(())
}
