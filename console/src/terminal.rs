use std::fmt::Display;
use std::io::{BufRead, Write};

use error_stack::ResultExt;
use kernel::KernelError;

/// Line-oriented prompt over any reader and writer.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            closed: false,
        }
    }

    /// Whether input has run out. Nothing more will be read once it has.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Asks for one line. `None` once input is exhausted.
    pub fn prompt(&mut self, label: &str) -> error_stack::Result<Option<String>, KernelError> {
        if self.closed {
            return Ok(None);
        }
        write!(self.output, "{label}: ")
            .and_then(|_| self.output.flush())
            .change_context(KernelError::Internal)
            .attach_printable("failed to write prompt")?;

        // Bytes that are not UTF-8 become U+FFFD instead of failing the read.
        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .change_context(KernelError::Internal)
            .attach_printable("failed to read input")?;
        if read == 0 {
            self.closed = true;
            writeln!(self.output)
                .change_context(KernelError::Internal)
                .attach_printable("failed to write output")?;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn say(&mut self, line: impl Display) -> error_stack::Result<(), KernelError> {
        writeln!(self.output, "{line}")
            .change_context(KernelError::Internal)
            .attach_printable("failed to write output")
    }

    pub fn say_all(&mut self, lines: &[String]) -> error_stack::Result<(), KernelError> {
        lines.iter().try_for_each(|line| self.say(line))
    }

    /// Waits for Enter.
    pub fn pause(&mut self) -> error_stack::Result<(), KernelError> {
        self.prompt("Press Enter to continue").map(|_| ())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use kernel::KernelError;

    use crate::terminal::Terminal;

    #[test]
    fn prompt_strips_line_endings_and_reports_end_of_input(
    ) -> error_stack::Result<(), KernelError> {
        let mut terminal = Terminal::new(Cursor::new("Dune\r\n  \n"), Vec::new());
        assert_eq!(terminal.prompt("Title")?.as_deref(), Some("Dune"));
        assert_eq!(terminal.prompt("Author")?.as_deref(), Some("  "));
        assert_eq!(terminal.prompt("Year")?, None);
        assert!(terminal.is_closed());
        assert_eq!(terminal.prompt("Again")?, None);

        let output = String::from_utf8(terminal.into_output()).expect("utf-8 output");
        assert_eq!(output, "Title: Author: Year: \n");
        Ok(())
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() -> error_stack::Result<(), KernelError> {
        let mut terminal = Terminal::new(Cursor::new(b"Caf\xe9\nDune\n".to_vec()), Vec::new());
        assert_eq!(terminal.prompt("Title")?.as_deref(), Some("Caf\u{FFFD}"));
        assert_eq!(terminal.prompt("Title")?.as_deref(), Some("Dune"));
        assert!(!terminal.is_closed());
        Ok(())
    }
}
