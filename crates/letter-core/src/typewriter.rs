//! Character-by-character reveal of the letter.
//!
//! The revealer only tracks positions. Pacing belongs to the controller,
//! which schedules one `RevealNext` continuation per step so that a reset can
//! cancel the reveal at any point.

use crate::constants::INK_CUE_EVERY_CHARS;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealLine {
    pub text: String,
    pub revealed_chars: usize,
    pub done: bool,
}

impl RevealLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            revealed_chars: 0,
            done: false,
        }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// The revealed prefix, cut on a char boundary.
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.revealed_chars) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    fn rewind(&mut self) {
        self.revealed_chars = 0;
        self.done = false;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    /// One more character of `line` is visible. `ink` asks for an ink cue,
    /// `line_complete` means the next step starts a new line.
    Revealed {
        line: usize,
        ink: bool,
        line_complete: bool,
    },
    Finished,
}

#[derive(Debug)]
pub struct TypewriterRevealer {
    lines: Vec<RevealLine>,
    current: usize,
    running: bool,
}

impl TypewriterRevealer {
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: texts.into_iter().map(RevealLine::new).collect(),
            current: 0,
            running: false,
        }
    }

    pub fn lines(&self) -> &[RevealLine] {
        &self.lines
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.lines.iter().all(|l| l.done)
    }

    /// Rewind every line and arm the reveal from the first line.
    pub fn start(&mut self) {
        self.reset();
        self.running = true;
    }

    pub fn reset(&mut self) {
        for line in &mut self.lines {
            line.rewind();
        }
        self.current = 0;
        self.running = false;
    }

    /// Stop advancing but keep what is already shown.
    pub fn halt(&mut self) {
        self.running = false;
    }

    pub fn advance(&mut self) -> RevealStep {
        if !self.running {
            return RevealStep::Finished;
        }
        let Some(line) = self.lines.get_mut(self.current) else {
            self.running = false;
            return RevealStep::Finished;
        };
        let index = self.current;
        let len = line.char_len();
        if line.revealed_chars < len {
            line.revealed_chars += 1;
        }
        let ink = line.revealed_chars > 0 && line.revealed_chars % INK_CUE_EVERY_CHARS == 0;
        let line_complete = line.revealed_chars >= len;
        if line_complete {
            line.done = true;
            self.current += 1;
        }
        RevealStep::Revealed {
            line: index,
            ink,
            line_complete,
        }
    }
}
