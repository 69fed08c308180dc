//! Styles command implementation

use anyhow::Result;
use colored::Colorize;
use tabled::{Table, settings::{Style, Color, Modify, object::Rows}};
use timeago_engine::{Styles, DEFAULT_STYLE};
use crate::output::StyleRow;

/// Lists the named styles
pub fn cmd_styles(styles: &Styles) -> Result<()> {
    let rows: Vec<StyleRow> = styles
        .iter()
        .map(|(name, style)| {
            let units = match style.units() {
                Some(units) => units.iter().map(|unit| unit.as_str()).collect::<Vec<_>>(),
                None => style.scale().units().into_iter().map(|unit| unit.as_str()).collect(),
            };
            StyleRow {
                name: if name == DEFAULT_STYLE {
                    format!("{} (default)", name)
                } else {
                    name.to_string()
                },
                flavours: style.flavours().join(", "),
                rounding: style.rounding().as_str().to_string(),
                units: units.join(", "),
            }
        })
        .collect();

    println!("{}", "Styles:".bright_cyan().bold());
    let mut table = Table::new(rows);
    table.with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Color::FG_BRIGHT_CYAN));
    println!("{}", table);

    Ok(())
}
