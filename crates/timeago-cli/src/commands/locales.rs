//! Locales command implementation

use anyhow::Result;
use colored::Colorize;
use tabled::{Table, settings::{Style, Color, Modify, object::Rows}};
use timeago_core::{resolve_now, LONG};
use timeago_locale::LocaleRegistry;
use crate::output::LocaleRow;

/// Lists registered locales; marks the default and the active one
pub fn cmd_locales(registry: &LocaleRegistry, active: &str) -> Result<()> {
    let default = registry.default_locale();
    let tags = registry.locales();

    let rows: Vec<LocaleRow> = tags
        .iter()
        .filter_map(|tag| registry.get(tag))
        .map(|data| {
            let long = data.flavour(LONG);
            let now = long
                .and_then(|messages| resolve_now(false, messages, long, data.now_messages()))
                .unwrap_or("-")
                .to_string();
            let mut marker = Vec::new();
            if data.locale() == default {
                marker.push("default");
            }
            if data.locale() == active {
                marker.push("active");
            }
            LocaleRow {
                tag: data.locale().to_string(),
                flavours: data.flavours().collect::<Vec<_>>().join(", "),
                now,
                marker: marker.join(", "),
            }
        })
        .collect();

    println!("{} {}", "Registered locales:".bright_cyan().bold(), rows.len().to_string().bold());
    let mut table = Table::new(rows);
    table.with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Color::FG_BRIGHT_CYAN));
    println!("{}", table);

    Ok(())
}
