// core/src/cli.rs
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::Context;
use thiserror::Error;

use crate::error::CalcError;
use crate::models::{RaceTime, RatingReport, RatingTable, SpeedReport};
use crate::report::{plan_for_rating, rate_performance, rating_table};

#[derive(Debug, Error)]
enum MenuError {
    #[error("end of input")]
    Eof,
    #[error("could not read {token:?} as {what}")]
    Parse { token: String, what: &'static str },
    #[error(transparent)]
    Calc(#[from] CalcError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Whitespace-separerte tokens fra en linjebasert kilde. Et token kan stå på
/// samme linje som forrige eller på en ny.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String, MenuError> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Ok(tok);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(MenuError::Eof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn parse<T: FromStr>(&mut self, what: &'static str) -> Result<T, MenuError> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| MenuError::Parse { token, what })
    }

    /// Kast resten av inneværende linje etter feil input.
    fn discard_line(&mut self) {
        self.pending.clear();
    }
}

fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{text}")?;
    out.flush()
}

pub fn render_rating<W: Write>(out: &mut W, report: &RatingReport) -> io::Result<()> {
    writeln!(out, "Your speed is: {:.2} km/h", report.speed_kmh)?;
    writeln!(out, "Your running rating is: {:.0} ELO", report.rating)
}

pub fn render_speed<W: Write>(out: &mut W, report: &SpeedReport) -> io::Result<()> {
    writeln!(
        out,
        "Rating of {:.0} ELO for a distance of {:.2} km, Average speed of {:.2} km/h.",
        report.rating, report.distance_km, report.speed_kmh
    )?;
    writeln!(out, "Time of {}.", report.time)
}

pub fn render_table<W: Write>(out: &mut W, table: &RatingTable) -> io::Result<()> {
    for row in &table.rows {
        writeln!(out)?;
        writeln!(
            out,
            "Rating {:.0} ELO, Distance {:.2} km, Speed {:.2} km/h",
            row.rating, row.distance_km, row.speed_kmh
        )?;
        writeln!(out, "Time {}.", row.time)?;
    }
    Ok(())
}

fn get_rating<R: BufRead, W: Write>(tokens: &mut Tokens<R>, out: &mut W) -> Result<(), MenuError> {
    prompt(out, "Enter distance (in km): ")?;
    let distance: f64 = tokens.parse("distance")?;
    prompt(out, "Enter time (hours minutes seconds): ")?;
    let hours: i64 = tokens.parse("hours")?;
    let minutes: i64 = tokens.parse("minutes")?;
    let seconds: f64 = tokens.parse("seconds")?;

    let report = rate_performance(distance, RaceTime::new(hours, minutes, seconds))?;
    render_rating(out, &report)?;
    Ok(())
}

fn get_speed<R: BufRead, W: Write>(tokens: &mut Tokens<R>, out: &mut W) -> Result<(), MenuError> {
    prompt(out, "Enter distance (in km): ")?;
    let distance: f64 = tokens.parse("distance")?;
    prompt(out, "Enter desired rating: ")?;
    let rating: f64 = tokens.parse("rating")?;

    let report = plan_for_rating(distance, rating)?;
    render_speed(out, &report)?;
    Ok(())
}

fn get_table<R: BufRead, W: Write>(tokens: &mut Tokens<R>, out: &mut W) -> Result<(), MenuError> {
    prompt(out, "Enter distance (in km): ")?;
    let distance: f64 = tokens.parse("distance")?;
    prompt(out, "Start rating: ")?;
    let start: f64 = tokens.parse("start rating")?;
    prompt(out, "End rating: ")?;
    let end: f64 = tokens.parse("end rating")?;
    prompt(out, "Each step is x rating: ")?;
    let step: f64 = tokens.parse("step")?;

    let table = rating_table(distance, start, end, step)?;
    render_table(out, &table)?;
    Ok(())
}

fn run_choice<R: BufRead, W: Write>(tokens: &mut Tokens<R>, out: &mut W) -> Result<(), MenuError> {
    writeln!(out)?;
    writeln!(out, "Choose an option:")?;
    writeln!(out, "1. Get Rating")?;
    writeln!(out, "2. Get Speed/Time")?;
    writeln!(out, "3. Rating table")?;
    prompt(out, "Enter choice: ")?;

    let choice: i64 = tokens.parse("menu choice")?;
    match choice {
        1 => get_rating(tokens, out),
        2 => get_speed(tokens, out),
        3 => get_table(tokens, out),
        other => {
            log::debug!("unknown menu choice {other}");
            writeln!(out, "Unknown choice")?;
            Ok(())
        }
    }
}

/// Interaktiv meny. Går til input er tom (EOF); ugyldig input skrives ut og
/// menyen vises på nytt.
pub fn run_menu<R: BufRead, W: Write>(input: R, mut out: W) -> anyhow::Result<()> {
    let mut tokens = Tokens::new(input);
    loop {
        match run_choice(&mut tokens, &mut out) {
            Ok(()) => {}
            Err(MenuError::Eof) => {
                writeln!(out).context("writing to stdout")?;
                return Ok(());
            }
            Err(err @ (MenuError::Parse { .. } | MenuError::Calc(_))) => {
                tokens.discard_line();
                writeln!(out, "Invalid input: {err}").context("writing to stdout")?;
            }
            Err(MenuError::Io(err)) => return Err(err).context("menu I/O failed"),
        }
    }
}
