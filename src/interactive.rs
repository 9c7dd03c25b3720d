use std::io::{self, BufRead, Write};

/// Operator interaction used by the provisioner.
pub trait InteractiveIo {
    /// Asks a yes/no question; only `y` or `yes` (any case) count as yes.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be written or the answer read.
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;

    /// Asks for a free-form value. An empty string means no value was given.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be written or the answer read.
    fn prompt_value(&mut self, prompt: &str) -> io::Result<String>;

    /// # Errors
    ///
    /// Returns an error if the lines cannot be written.
    fn report(&mut self, lines: &[String]) -> io::Result<()>;
}

/// Line-oriented prompt over any reader/writer pair, typically stdin/stdout.
pub struct Prompt<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Prompt<'a> {
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    fn prompt_text(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        // End of input reads as an empty answer.
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

impl InteractiveIo for Prompt<'_> {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.prompt_text(prompt)?;
        Ok(is_affirmative(&answer))
    }

    fn prompt_value(&mut self, prompt: &str) -> io::Result<String> {
        self.prompt_text(prompt)
    }

    fn report(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        self.output.flush()
    }
}

pub(crate) fn is_affirmative(answer: &str) -> bool {
    let normalized = answer.trim().to_ascii_lowercase();
    normalized == "y" || normalized == "yes"
}
