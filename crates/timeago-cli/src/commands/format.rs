//! Format command implementation

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;
use tabled::{Table, settings::{Style, Color, Modify, object::Rows}};
use timeago_engine::{FormatOptions, Formatted, TimeAgo, TimeInput};
use crate::helpers::{format_date, format_interval, parse_input, suggest};
use crate::output::FormatRow;

/// Formats every input relative to `now`
pub fn cmd_format(
    timeago: &TimeAgo,
    inputs: &[String],
    style: &str,
    now: Option<&str>,
    future: bool,
    table: bool,
) -> Result<()> {
    if timeago.styles().get(style).is_none() {
        eprintln!("{} Unknown style '{}'", "❌".red(), style.bold());
        if let Some(name) = suggest(style, timeago.styles().names()) {
            eprintln!("{} Did you mean '{}'?", "💡".yellow(), name.bright_cyan());
        }
        std::process::exit(1);
    }

    let now = match now {
        Some(raw) => parse_input(raw)?.epoch_millis(),
        None => chrono::Utc::now().timestamp_millis(),
    };
    let options = FormatOptions { future, now: Some(now) };

    let instants = inputs
        .iter()
        .map(|raw| parse_input(raw))
        .collect::<Result<Vec<TimeInput>>>()?;

    log::debug!("Formatting {} input(s) with style {}", instants.len(), style);
    let results = instants
        .par_iter()
        .map(|instant| timeago.format_with_refresh(*instant, style, &options))
        .collect::<Result<Vec<Formatted>, _>>()?;

    if !table {
        for formatted in &results {
            println!("{}", formatted.text);
        }
        return Ok(());
    }

    let rows: Vec<FormatRow> = inputs
        .iter()
        .zip(&instants)
        .zip(results)
        .map(|((raw, instant), formatted)| FormatRow {
            input: raw.clone(),
            date: format_date(instant),
            text: formatted.text,
            refresh: format_interval(formatted.refresh_in_ms),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Color::FG_BRIGHT_CYAN));
    println!("{}", table);

    Ok(())
}
