use std::io::{self, BufRead, Stderr, StdinLock, Write};

use crate::ui::prompt::{InitialPath, PathPicker, PickRequest, Prompter, Question};

/// Asks questions on stderr and reads answers from stdin.
/// End of input counts as "no".
pub struct TerminalPrompter<R = StdinLock<'static>, W = Stderr> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl TerminalPrompter {
    pub fn new(assume_yes: bool) -> Self {
        TerminalPrompter::with_io(io::stdin().lock(), io::stderr(), assume_yes)
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn with_io(input: R, output: W, assume_yes: bool) -> Self {
        TerminalPrompter {
            input,
            output,
            assume_yes,
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn confirm(&mut self, question: &Question) -> bool {
        if self.assume_yes {
            let _ = writeln!(self.output, "{} [y/N] y", question);
            return true;
        }
        let _ = write!(self.output, "{} [y/N] ", question);
        let _ = self.output.flush();
        let answer = self.read_line();
        if answer.is_none() {
            let _ = writeln!(self.output);
        }
        matches!(
            answer.as_deref().map(str::to_ascii_lowercase).as_deref(),
            Some("y") | Some("yes")
        )
    }

    fn show_error(&mut self, message: &str) {
        let _ = writeln!(self.output, "error: {}", message);
    }
}

impl<R: BufRead, W: Write> PathPicker for TerminalPrompter<R, W> {
    fn pick(&mut self, request: &PickRequest) -> Option<String> {
        let start = match &request.initial {
            InitialPath::Absolute(path) => path,
            InitialPath::SuggestedName(name) => name,
        };
        let _ = write!(
            self.output,
            "{} [{}] (empty to cancel): ",
            request.title(),
            start
        );
        let _ = self.output.flush();
        self.read_line().filter(|path| !path.is_empty())
    }
}
