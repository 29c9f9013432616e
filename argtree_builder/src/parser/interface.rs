use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// A line accepts more text only while it stays under this share of the width.
const SPLIT_FACTOR: f64 = 0.9;

/// Greedy word wrapping for the usage text.
///
/// Text is appended to the current line while `current + 1 + text < max_width`
/// (no separating space is added to an empty or indent-only line).
/// Otherwise, if the line is under 90% full and the text has spaces, the text is retried word by word.
/// Otherwise the text starts a new line, indented to `indent`.
#[derive(Debug)]
pub(crate) struct LineWrapper {
    max_width: usize,
    indent: usize,
    lines: Vec<String>,
    current: String,
}

impl LineWrapper {
    pub(crate) fn new(max_width: usize, start: impl Into<String>, indent: usize) -> Self {
        Self {
            max_width,
            indent,
            lines: Vec::default(),
            current: start.into(),
        }
    }

    pub(crate) fn push(&mut self, text: &str) {
        let text = text.trim();

        if text.is_empty() {
            return;
        }

        let blank = self.current.trim().is_empty();
        let separator = if blank { 0 } else { 1 };

        if self.current.len() + separator + text.len() < self.max_width {
            if !blank {
                self.current.push(' ');
            }

            self.current.push_str(text);
        } else if (self.current.len() as f64) < self.max_width as f64 * SPLIT_FACTOR
            && text.contains(' ')
        {
            for word in text.split(' ') {
                self.push(word);
            }
        } else if blank {
            // Nothing narrower can be made of it.
            self.current.push_str(text);
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Wrapping at {} for '{text}'.", self.current.len());
            }

            let full = std::mem::replace(&mut self.current, " ".repeat(self.indent));
            self.lines.push(full);
            self.current.push_str(text);
        }
    }

    pub(crate) fn finish(mut self) -> Vec<String> {
        if !self.current.trim().is_empty() {
            self.lines.push(self.current);
        }

        self.lines
    }
}

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: &ParseError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: &ParseError) {
        eprintln!("{error}");
    }
}
