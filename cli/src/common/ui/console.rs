//! # Terminal Console
//!
//! File: cli/src/common/ui/console.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! ## Overview
//!
//! Connects the dialogue engine to a terminal through two halves:
//! - [`ConsoleInput`] implements [`LineSource`]: prints a `You: ` prompt and
//!   reads one line.
//! - [`ConsoleOutput`] implements [`MessageSink`]: prints
//!   `<bot name>: <message>`, optionally typing it out one character at a time.
//!
//! I/O failures never reach the conversation: a failed read is reported as
//! end of input (the conversation then says goodbye) and a failed write is
//! logged and dropped. Bytes that are not valid UTF-8 are replaced with
//! U+FFFD, so a garbled line is just another line of text.
//!
use crate::dialogue::{LineSource, MessageSink};
use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};
use std::thread;
use std::time::Duration;
use tracing::warn;

const USER_PROMPT: &str = "You: ";

/// Reads user lines, printing a prompt before each one.
pub struct ConsoleInput<I, P> {
    input: I,
    prompt_out: P,
}

/// Prints bot messages.
pub struct ConsoleOutput<O> {
    output: O,
    speaker: String,
    typing_delay: Duration,
}

/// # Standard I/O Console (`stdio`)
///
/// Builds both halves on the process's stdin/stdout. The typing animation
/// is only enabled when stdout is a terminal, so piped output is written
/// immediately.
///
/// ## Arguments
///
/// * `speaker` - Name printed in front of every bot message.
/// * `typing_delay_ms` - Per-character delay; `0` disables the animation.
pub fn stdio(
    speaker: &str,
    typing_delay_ms: u64,
) -> (ConsoleInput<StdinLock<'static>, Stdout>, ConsoleOutput<Stdout>) {
    let delay = if io::stdout().is_terminal() {
        typing_delay_ms
    } else {
        0
    };
    (
        ConsoleInput::new(io::stdin().lock(), io::stdout()),
        ConsoleOutput::new(io::stdout(), speaker, Duration::from_millis(delay)),
    )
}

impl<I: BufRead, P: Write> ConsoleInput<I, P> {
    pub fn new(input: I, prompt_out: P) -> Self {
        Self { input, prompt_out }
    }

    /// Gives back the prompt writer, mainly so tests can inspect it.
    pub fn into_prompt_output(self) -> P {
        self.prompt_out
    }
}

impl<I: BufRead, P: Write> LineSource for ConsoleInput<I, P> {
    fn read_line(&mut self) -> Option<String> {
        if let Err(e) = write!(self.prompt_out, "{USER_PROMPT}").and_then(|_| self.prompt_out.flush())
        {
            warn!("Failed to print input prompt: {}", e);
        }
        let mut buf = Vec::new();
        match self.input.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                Some(line.trim_end_matches(['\r', '\n']).to_string())
            }
            Err(e) => {
                warn!("Failed to read from input: {}", e);
                None
            }
        }
    }
}

impl<O: Write> ConsoleOutput<O> {
    pub fn new(output: O, speaker: &str, typing_delay: Duration) -> Self {
        Self {
            output,
            speaker: speaker.to_string(),
            typing_delay,
        }
    }

    /// Gives back the writer, mainly so tests can inspect what was printed.
    pub fn into_output(self) -> O {
        self.output
    }

    fn write_message(&mut self, message: &str) -> io::Result<()> {
        write!(self.output, "{}: ", self.speaker)?;
        if self.typing_delay.is_zero() {
            writeln!(self.output, "{message}")?;
        } else {
            for c in message.chars() {
                write!(self.output, "{c}")?;
                self.output.flush()?;
                thread::sleep(self.typing_delay);
            }
            writeln!(self.output)?;
        }
        self.output.flush()
    }
}

impl<O: Write> MessageSink for ConsoleOutput<O> {
    fn emit(&mut self, message: &str) {
        if let Err(e) = self.write_message(message) {
            warn!("Failed to write message: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn input(text: &str) -> ConsoleInput<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleInput::new(Cursor::new(text.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn read_line_strips_line_endings_and_prompts() {
        let mut c = input("hello there\r\nsecond\n");
        assert_eq!(c.read_line(), Some("hello there".to_string()));
        assert_eq!(c.read_line(), Some("second".to_string()));
        assert_eq!(c.read_line(), None);
        let printed = String::from_utf8(c.into_prompt_output()).unwrap();
        assert_eq!(printed, "You: You: You: ");
    }

    #[test]
    fn blank_line_is_not_end_of_input() {
        let mut c = input("\n");
        assert_eq!(c.read_line(), Some(String::new()));
        assert_eq!(c.read_line(), None);
    }

    #[test]
    fn invalid_utf8_line_is_not_end_of_input() {
        let mut c = ConsoleInput::new(
            Cursor::new(b"\xff\xfe bad\nwhat is phishing?\n".to_vec()),
            Vec::new(),
        );
        let first = c.read_line().expect("malformed line should still be a line");
        assert!(first.ends_with(" bad"));
        assert!(first.contains('\u{FFFD}'));
        assert_eq!(c.read_line(), Some("what is phishing?".to_string()));
        assert_eq!(c.read_line(), None);
    }

    #[test]
    fn emit_prefixes_speaker() {
        let mut out = ConsoleOutput::new(Vec::new(), "Bot", Duration::ZERO);
        out.emit("Stay safe!");
        out.emit("Bye.");
        let printed = String::from_utf8(out.into_output()).unwrap();
        assert_eq!(printed, "Bot: Stay safe!\nBot: Bye.\n");
    }

    #[test]
    fn typed_output_matches_plain_output() {
        let mut out = ConsoleOutput::new(Vec::new(), "Bot", Duration::from_millis(1));
        out.emit("abc");
        assert_eq!(String::from_utf8(out.into_output()).unwrap(), "Bot: abc\n");
    }
}
