use crate::error::CardError;

/// Hint strings shown below the envelope as the experience progresses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hints {
    pub ready: String,
    pub dragging: String,
    pub released: String,
    pub opening: String,
    pub finished: String,
}

impl Default for Hints {
    fn default() -> Self {
        Self {
            ready: "Press and drag across the wax seal to open.".to_string(),
            dragging: "Keep dragging to crack the wax seal…".to_string(),
            released: "Press and drag farther to break the seal.".to_string(),
            opening: "The letter is opening…".to_string(),
            finished: String::new(),
        }
    }
}

/// Static letter content supplied by the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterContent {
    pub lines: Vec<String>,
    pub hints: Hints,
}

impl LetterContent {
    pub fn new<I, S>(lines: I) -> Result<Self, CardError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            return Err(CardError::EmptyLetter);
        }
        Ok(Self {
            lines,
            hints: Hints::default(),
        })
    }

    pub fn with_hints(mut self, hints: Hints) -> Self {
        self.hints = hints;
        self
    }
}
