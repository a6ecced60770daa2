use crate::traits::Prompter;
use crate::ui;
use colored::Colorize;
use dialoguer::Confirm;
use std::io::{self, BufRead, Write};

/// Asks on the controlling terminal
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, question: &str) -> bool {
        prompt_yes_no(question)
    }
}

/// Answers "no" to everything without asking (machine output mode)
pub struct DeclineAll;

impl Prompter for DeclineAll {
    fn confirm(&self, question: &str) -> bool {
        ui::verbose(&format!("Declined without asking: {}", question));
        false
    }
}

/// Ask a yes/no question, defaulting to no.
///
/// End of input, read errors and Ctrl-C all count as "no". A terminal gets
/// a single-key confirm; piped stdin is read one line at a time.
pub fn prompt_yes_no(question: &str) -> bool {
    if ui::take_interrupted() {
        return false;
    }

    if atty::is(atty::Stream::Stdin) {
        let reply = Confirm::new()
            .with_prompt(question.yellow().to_string())
            .default(false)
            .interact_opt();
        return confirmed(reply, ui::take_interrupted);
    }

    print!("{} {} ", question.yellow(), "(y/N):".yellow());
    if let Err(e) = io::stdout().flush() {
        ui::warning(&format!("Failed to flush terminal: {}", e));
        return false;
    }
    read_answer(&mut io::stdin().lock(), ui::take_interrupted)
}

/// Outcome of the terminal confirm. Only an explicit yes counts.
fn confirmed(reply: dialoguer::Result<Option<bool>>, interrupted: impl FnOnce() -> bool) -> bool {
    if interrupted() {
        return false;
    }
    match reply {
        Ok(Some(answer)) => answer,
        // Esc or q
        Ok(None) => false,
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => false,
        Err(e) => {
            ui::warning(&format!("Failed to read input: {}", e));
            false
        }
    }
}

/// Read one answer line from `input`
fn read_answer(input: &mut impl BufRead, interrupted: impl FnOnce() -> bool) -> bool {
    let mut line = String::new();
    let read = input.read_line(&mut line);

    // The signal handler already printed the cancellation notice
    if interrupted() {
        return false;
    }

    match read {
        Ok(0) => {
            println!();
            false
        }
        Ok(_) => is_yes(&line),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => false,
        Err(e) => {
            ui::warning(&format!("Failed to read input: {}", e));
            false
        }
    }
}

pub(crate) fn is_yes(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    input == "y" || input == "yes"
}
