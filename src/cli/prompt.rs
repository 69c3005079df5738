use std::io::{self, BufRead, Stdout, Write};

use colored::Colorize;

/// Questions the setup wizard asks. `None` means the user cancelled
/// (end of input).
pub trait Prompter {
    fn confirm(&mut self, message: &str, default: bool) -> Option<bool>;

    /// Asks until a non-empty answer is given; `required` is shown after an
    /// empty one.
    fn text(&mut self, message: &str, placeholder: &str, required: &str) -> Option<String>;

    /// Returns the index of the chosen option. Each option is `(label, hint)`.
    fn select(
        &mut self,
        message: &str,
        options: &[(String, String)],
        default: usize,
    ) -> Option<usize>;
}

/// Line-based prompts over any reader/writer pair.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.output, "{} {} ", "?".green().bold(), prompt);
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn say(&mut self, message: &str) {
        let _ = writeln!(self.output, "{}", message);
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn confirm(&mut self, message: &str, default: bool) -> Option<bool> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        loop {
            let answer = self.ask(&format!("{} {}", message, hint.dimmed()))?;
            match answer.to_lowercase().as_str() {
                "" => return Some(default),
                "y" | "yes" => return Some(true),
                "n" | "no" => return Some(false),
                _ => self.say(&format!("  {}", "Please answer y or n.".yellow())),
            }
        }
    }

    fn text(&mut self, message: &str, placeholder: &str, required: &str) -> Option<String> {
        loop {
            let answer = self.ask(&format!("{} {}", message, placeholder.dimmed()))?;
            if !answer.is_empty() {
                return Some(answer);
            }
            self.say(&format!("  {}", required.yellow()));
        }
    }

    fn select(
        &mut self,
        message: &str,
        options: &[(String, String)],
        default: usize,
    ) -> Option<usize> {
        self.say(&format!("{} {}", "?".green().bold(), message));
        for (i, (label, hint)) in options.iter().enumerate() {
            self.say(&format!("  {:>2}) {}  {}", i + 1, label, hint.dimmed()));
        }

        loop {
            let answer = self.ask(&format!("Choose [{}]:", default + 1))?;
            if answer.is_empty() {
                return Some(default);
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Some(n - 1),
                _ => self.say(&format!(
                    "  {}",
                    format!("Enter a number between 1 and {}.", options.len()).yellow()
                )),
            }
        }
    }
}
