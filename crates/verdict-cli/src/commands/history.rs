use std::path::Path;

use chrono::{DateTime, Local, Utc};
use comfy_table::{ContentArrangement, Table};

use verdict_core::HistoryLog;
use verdict_core::config::DEFAULT_STORAGE_KEY;

use crate::store::FileStore;

pub fn run(data_file: &Path, clear: bool) -> Result<(), String> {
    if clear {
        let mut session = super::open_session(data_file, None);
        session.clear_history();
        if !session.last_persist_ok() {
            return Err("could not write history file".into());
        }
        println!("History cleared.");
        return Ok(());
    }

    let store = FileStore::new(data_file);
    let log = HistoryLog::load(&store, DEFAULT_STORAGE_KEY);

    if log.is_empty() {
        println!("  No decisions yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["When", "Mode", "Prompt", "Result"]);

    for rec in log.entries() {
        table.add_row(vec![
            format_age(rec.timestamp),
            format!("{} {}", rec.icon, rec.mode),
            rec.prompt.clone(),
            rec.result.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} decisions", log.len());

    Ok(())
}

/// Human-readable age of a millisecond epoch timestamp.
fn format_age(timestamp_ms: i64) -> String {
    let Some(then) = DateTime::from_timestamp_millis(timestamp_ms) else {
        return "—".to_string();
    };
    let diff = Utc::now() - then;

    if diff.num_seconds() < 60 {
        "just now".to_string()
    } else if diff.num_minutes() < 60 {
        format!("{} min ago", diff.num_minutes())
    } else if diff.num_hours() < 24 {
        format!("{} h ago", diff.num_hours())
    } else {
        then.with_timezone(&Local).format("%d.%m %H:%M").to_string()
    }
}
