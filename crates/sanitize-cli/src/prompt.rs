use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use sanitize_core::{Choice, Prompt, Result, SanitizeError, Subject};

/// Numbered single-choice prompt on the terminal.
#[derive(Default)]
pub struct TerminalPrompt {
    rl: Option<DefaultEditor>,
}

impl TerminalPrompt {
    fn editor(&mut self) -> Result<&mut DefaultEditor> {
        if self.rl.is_none() {
            let rl = DefaultEditor::new().map_err(|e| SanitizeError::Prompt(e.to_string()))?;
            self.rl = Some(rl);
        }
        self.rl
            .as_mut()
            .ok_or_else(|| SanitizeError::Prompt("no line editor".into()))
    }
}

impl Prompt for TerminalPrompt {
    fn select(&mut self, subject: Subject, choices: &[Choice]) -> Result<String> {
        println!("{}", subject.message().yellow());
        for (i, c) in choices.iter().enumerate() {
            println!("  {} {}", format!("{:>2})", i + 1).bold(), c.label);
        }
        let rl = self.editor()?;
        loop {
            match rl.readline("> ") {
                Ok(line) => match parse_choice(&line, choices) {
                    Some(i) => return Ok(choices[i].value.clone()),
                    None => println!(
                        "{}",
                        format!("Enter a number between 1 and {}", choices.len()).red()
                    ),
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    return Err(SanitizeError::Cancelled);
                }
                Err(e) => return Err(SanitizeError::Prompt(e.to_string())),
            }
        }
    }

    fn auto_selected(&mut self, subject: Subject, label: &str) {
        let line = match subject {
            Subject::Player => format!("Selected player: {}", label.bold()),
            Subject::Save => format!("Selected save: {}", label.bold()),
        };
        println!("{}", line.cyan());
    }
}

/// Accepts a 1-based index or an exact label.
pub fn parse_choice(input: &str, choices: &[Choice]) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(n) = input.parse::<usize>()
        && (1..=choices.len()).contains(&n)
    {
        return Some(n - 1);
    }
    choices.iter().position(|c| c.label == input)
}
