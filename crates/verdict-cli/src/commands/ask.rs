use std::path::Path;

use colored::Colorize;

use verdict_core::engine::answer_for_text;

pub fn run(data_file: &Path, seed: Option<u64>, question: &str) -> Result<(), String> {
    let mut session = super::open_session(data_file, seed);
    let record = session.ask(question);

    let icon = answer_for_text(&record.result).map(|a| a.icon).unwrap_or("🎲");
    println!("  {}", record.prompt.dimmed());
    println!("  {icon} {}", record.result.bold());

    super::warn_if_not_persisted(&session);
    Ok(())
}
