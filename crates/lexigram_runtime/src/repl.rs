//! The query REPL.

use std::io::BufRead;

use lexigram_foundation::{Error, ErrorKind, Result};

use crate::command::Command;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The knowledge base being queried.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL over the session with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        let mut words: Vec<String> = session.lexicon().words().map(str::to_string).collect();
        words.extend(session.grammar().non_terminals().iter().map(ToString::to_string));
        words.sort_unstable();
        words.dedup();
        editor.set_words(words);

        Self {
            editor,
            session,
            show_banner: true,
            prompt: "lexigram> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the REPL loop until end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if is_blank(&input) {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(output) => print!("{output}"),
            Err(e) => print_error(&e),
        }
        Ok(true)
    }

    /// Evaluates one command line and returns the rendered answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not a valid command.
    pub fn eval(&self, input: &str) -> Result<String> {
        Ok(Command::parse(input)?.run(&self.session))
    }

    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1mlexigram\x1b[0m {}", env!("CARGO_PKG_VERSION"));
        println!("{} | {}", self.session.grammar(), self.session.lexicon());
        println!("Type `help` for commands, Ctrl+D to exit.\n");
    }
}

/// Evaluates command lines from a reader, writing answers to stdout.
///
/// Blank lines and `;` comment lines are skipped. An invalid command is
/// reported on stderr and evaluation continues.
///
/// # Errors
///
/// Returns an error if reading fails. The count of invalid commands is
/// returned on success.
pub fn run_batch(session: &Session, input: impl BufRead) -> Result<usize> {
    let mut failures = 0;
    for line in input.lines() {
        let line = line.map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        if is_blank(&line) {
            continue;
        }
        match Command::parse(&line) {
            Ok(command) => print!("{}", command.run(session)),
            Err(e) => {
                print_error(&e);
                failures += 1;
            }
        }
    }
    Ok(failures)
}

fn is_blank(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(';')
}

fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}
