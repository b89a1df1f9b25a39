//! `appwatch list`: headless package listing.

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use crate::common::config::AppConfig;
use crate::common::package::{PackageRecord, enumerate};
use crate::ui::prelude::*;

/// Exit code when enumeration itself failed.
pub const EXIT_ENUMERATION_FAILED: i32 = 2;

pub fn run_list(config: &AppConfig, search: Option<&str>, table: bool) -> Result<i32> {
    let records = match enumerate(config.aur_helper()) {
        Ok(records) => records,
        Err(err) => {
            tracing::error!(error = %err, "error loading apps");
            emit(
                Level::Error,
                "list.failed",
                &format!("Error listing apps: {err}"),
                None,
            );
            return Ok(EXIT_ENUMERATION_FAILED);
        }
    };

    let records = filter_records(records, search);
    tracing::info!(count = records.len(), "listed packages");

    match get_output_format() {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&records).context("serializing package list")?;
            println!("{json}");
        }
        OutputFormat::Text if table => println!("{}", render_table(&records)),
        OutputFormat::Text => {
            for record in &records {
                println!("{}", record.to_tsv());
            }
        }
    }

    Ok(0)
}

/// Keep records whose name contains `search`, ignoring case.
pub fn filter_records(records: Vec<PackageRecord>, search: Option<&str>) -> Vec<PackageRecord> {
    match search.map(str::trim).filter(|q| !q.is_empty()) {
        Some(query) => records.into_iter().filter(|r| r.matches(query)).collect(),
        None => records,
    }
}

fn render_table(records: &[PackageRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Source", "Name", "Version"]);

    for record in records {
        table.add_row(vec![
            record.source.label(),
            record.name.as_str(),
            record.version.as_str(),
        ]);
    }
    table
}
