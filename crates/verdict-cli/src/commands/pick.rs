use std::path::Path;

use colored::Colorize;

pub fn run(data_file: &Path, seed: Option<u64>, options: &[String]) -> Result<(), String> {
    let mut session = super::open_session(data_file, seed);
    for option in options {
        session.add_option(option).map_err(|e| e.to_string())?;
    }

    let record = session.spin().map_err(|e| e.to_string())?;
    println!("  🎉 {}", record.result.bold());
    println!("  {}", record.prompt.dimmed());

    super::warn_if_not_persisted(&session);
    Ok(())
}
