use std::io::{self, BufRead, Write};

use crate::{evaluate, interpreter::lexer::tokenize};

/// What a session does after a line fails to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnError {
    /// Report the error and move on to the next line.
    #[default]
    Continue,
    /// Report the error and end the session.
    Exit,
}

/// What a session does with each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Evaluate the line and print its value.
    #[default]
    Evaluate,
    /// Print the tokens of the line, one per output line.
    Tokens,
}

/// Counts of the lines a session processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Lines that produced a result.
    pub evaluated: usize,
    /// Lines that failed.
    pub failed:    usize,
}

/// A read–evaluate–print loop over any line source.
///
/// Every line is handled with a fresh lexer and interpreter, so one line can
/// never observe the state of another. Lines that are empty or hold only
/// spaces are skipped; any other whitespace is left for the lexer to reject.
///
/// # Example
/// ```
/// use intcalc::repl::{OnError, Repl};
///
/// let input = "2 + 3\n1 / 0\n(2 + 3) * 4\n";
/// let mut out = Vec::new();
/// let mut err = Vec::new();
///
/// let summary = Repl::new().on_error(OnError::Continue)
///                          .run(input.as_bytes(), &mut out, &mut err)
///                          .unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "5\n20\n");
/// assert_eq!(summary.evaluated, 2);
/// assert_eq!(summary.failed, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Repl {
    prompt:   Option<String>,
    on_error: OnError,
    mode:     Mode,
}

impl Repl {
    /// Creates a session with no prompt that evaluates every line and keeps
    /// going after errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prompt written before each line is read.
    #[must_use]
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Sets the policy applied after a failing line.
    #[must_use]
    pub fn on_error(mut self, on_error: OnError) -> Self {
        self.on_error = on_error;
        self
    }

    /// Sets what is done with each line.
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Runs the session until the input is exhausted.
    ///
    /// Results go to `out`; diagnostics go to `err` as `error: <message>`.
    /// Under [`OnError::Exit`] the session ends right after the first failing
    /// line.
    ///
    /// # Errors
    /// Returns any I/O error raised while reading `input` or writing output.
    pub fn run<R, W, E>(&self, input: R, out: &mut W, err: &mut E) -> io::Result<Summary>
        where R: BufRead,
              W: Write,
              E: Write
    {
        let mut summary = Summary::default();
        let mut lines = input.lines();

        loop {
            if let Some(prompt) = &self.prompt {
                write!(out, "{prompt}")?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            if line.trim_matches(' ').is_empty() {
                continue;
            }

            match self.process_line(&line, out)? {
                Ok(()) => summary.evaluated += 1,
                Err(message) => {
                    summary.failed += 1;
                    writeln!(err, "error: {message}")?;

                    if self.on_error == OnError::Exit {
                        break;
                    }
                },
            }
        }

        log::debug!("session finished: {} evaluated, {} failed",
                    summary.evaluated,
                    summary.failed);
        Ok(summary)
    }

    /// Handles exactly one expression, as given on a command line.
    ///
    /// Unlike [`Repl::run`], nothing is skipped and nothing is split: an empty
    /// expression is evaluated (and fails), and a newline inside the
    /// expression is an unknown character. No prompt is written.
    ///
    /// # Errors
    /// Returns any I/O error raised while writing output.
    ///
    /// # Example
    /// ```
    /// use intcalc::repl::Repl;
    ///
    /// let mut out = Vec::new();
    /// let mut err = Vec::new();
    ///
    /// let summary = Repl::new().run_expression("", &mut out, &mut err).unwrap();
    /// assert_eq!(summary.failed, 1);
    /// assert!(out.is_empty());
    /// ```
    pub fn run_expression<W, E>(&self,
                                expression: &str,
                                out: &mut W,
                                err: &mut E)
                                -> io::Result<Summary>
        where W: Write,
              E: Write
    {
        let mut summary = Summary::default();

        match self.process_line(expression, out)? {
            Ok(()) => summary.evaluated += 1,
            Err(message) => {
                summary.failed += 1;
                writeln!(err, "error: {message}")?;
            },
        }

        Ok(summary)
    }

    /// Handles one line, writing its output on success.
    ///
    /// The outer `Result` carries I/O failures; the inner one carries the
    /// message of an evaluation failure.
    fn process_line<W: Write>(&self, line: &str, out: &mut W) -> io::Result<Result<(), String>> {
        match self.mode {
            Mode::Evaluate => match evaluate(line) {
                Ok(value) => {
                    log::debug!("{line:?} = {value}");
                    writeln!(out, "{value}")?;
                    Ok(Ok(()))
                },
                Err(e) => {
                    log::debug!("{line:?} failed: {e:?}");
                    Ok(Err(e.to_string()))
                },
            },
            Mode::Tokens => match tokenize(line) {
                Ok(tokens) => {
                    for token in tokens {
                        writeln!(out, "Type: {} Lexeme: {:?}", token.kind(), token.symbol())?;
                    }
                    Ok(Ok(()))
                },
                Err(e) => {
                    log::debug!("{line:?} failed to lex: {e:?}");
                    Ok(Err(e.to_string()))
                },
            },
        }
    }
}
