//! Interactive decision session (REPL).

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use colored::Colorize;

use verdict_core::engine::answer_for_text;
use verdict_core::options::MAX_OPTIONS;
use verdict_core::{DecisionSession, KvStore};

/// Preview frames shown before the final wheel pick. Presentation pacing
/// only; exactly one record is written per spin.
const SPIN_FRAMES: usize = 6;

const HELP: &str = "\
Decision Commands:
  ask <question>   Ask the yes/no oracle
  flip             Flip a coin
  add <text>       Add a wheel option (max 10)
  remove <number>  Remove a wheel option
  list             List wheel options
  spin             Spin the wheel (needs 2+ options)
  history          Show recent decisions
  clear            Clear the history
  help             Show this help
  quit             Exit";

pub fn run(data_file: &Path, seed: Option<u64>) -> Result<(), String> {
    let mut session = super::open_session(data_file, seed);

    println!("  {} decision session", "Starting".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            println!("Goodbye!");
            break;
        }

        let result = if input.eq_ignore_ascii_case("spin") {
            animated_spin(&mut session)
        } else {
            process_line(&mut session, input)
        };

        match result {
            Ok(output) => println!("{output}\n"),
            Err(e) => println!("{}\n", e.yellow()),
        }
    }

    Ok(())
}

/// Spin with a short preview animation. Frames are uniform picks that are
/// never recorded; only the final pick lands in the history.
fn animated_spin<S: KvStore>(session: &mut DecisionSession<S>) -> Result<String, String> {
    session.begin_spin().map_err(|e| e.to_string())?;

    for _ in 0..SPIN_FRAMES {
        match session.spin_preview() {
            Ok(frame) => {
                println!("  🎯 {frame}");
                thread::sleep(Duration::from_millis(80));
            }
            Err(e) => {
                session.cancel_spin();
                return Err(e.to_string());
            }
        }
    }

    let record = session.finish_spin().map_err(|e| e.to_string())?;
    Ok(format!("  🎉 {}", record.result.bold()))
}

/// Process one line of user input and return a response.
fn process_line<S: KvStore>(
    session: &mut DecisionSession<S>,
    input: &str,
) -> Result<String, String> {
    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

    match cmd.as_str() {
        "ask" => {
            let record = session.ask(rest);
            let icon = answer_for_text(&record.result).map(|a| a.icon).unwrap_or("🎲");
            Ok(format!("  {icon} {}", record.result))
        }
        "flip" => {
            let record = session.flip();
            Ok(format!("  🪙 {}", record.result))
        }
        "spin" => {
            // Plain spin without animation (the run loop animates instead).
            let record = session.spin().map_err(|e| e.to_string())?;
            Ok(format!("  🎉 {}", record.result))
        }
        "add" => {
            session.add_option(rest).map_err(|e| e.to_string())?;
            Ok(format!(
                "Added: {rest} ({}/{})",
                session.options().len(),
                MAX_OPTIONS
            ))
        }
        "remove" => {
            let number: usize = rest
                .parse()
                .map_err(|_| "usage: remove <number>".to_string())?;
            let index = number
                .checked_sub(1)
                .ok_or_else(|| "usage: remove <number>".to_string())?;
            let removed = session.remove_option(index).map_err(|e| e.to_string())?;
            Ok(format!("Removed: {removed}"))
        }
        "list" => {
            if session.options().is_empty() {
                return Ok("No options yet. Use 'add <text>'.".to_string());
            }
            let mut out = format!(
                "Options ({}/{}):\n",
                session.options().len(),
                MAX_OPTIONS
            );
            for (i, opt) in session.options().entries().iter().enumerate() {
                out.push_str(&format!("  {}. {opt}\n", i + 1));
            }
            Ok(out.trim_end().to_string())
        }
        "history" => {
            if session.history().is_empty() {
                return Ok("No decisions yet.".to_string());
            }
            let mut out = format!("History ({} decisions):\n", session.history().len());
            for rec in session.history().entries() {
                out.push_str(&format!("  {} {} — {}\n", rec.icon, rec.prompt, rec.result));
            }
            Ok(out.trim_end().to_string())
        }
        "clear" => {
            session.clear_history();
            Ok("History cleared.".to_string())
        }
        "help" => Ok(HELP.to_string()),
        _ => Err(format!("unknown command: {cmd} (try 'help')")),
    }
}
