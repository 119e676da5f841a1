use std::path::Path;

use colored::Colorize;

pub fn run(data_file: &Path, seed: Option<u64>) -> Result<(), String> {
    let mut session = super::open_session(data_file, seed);
    let record = session.flip();

    let icon = if record.result == "Heads" { "🦅" } else { "🪙" };
    println!("  {icon} {}", record.result.bold());

    super::warn_if_not_persisted(&session);
    Ok(())
}
