use super::{Line, Narrator};

/// Recording narrator for tests and headless hosts.
///
/// Lines are stored in the order they were narrated; `end_game` flips a
/// latch the host can poll.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<Line>,
    endings: usize,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines, in order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The recorded text only, one entry per line.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    /// The last recorded line, if any.
    pub fn last(&self) -> Option<&Line> {
        self.lines.last()
    }

    /// True if any recorded line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.text.contains(needle))
    }

    /// True once `end_game` has been received.
    pub fn ended(&self) -> bool {
        self.endings > 0
    }

    /// How many times `end_game` has been received. A correctly driven
    /// game never reports more than one.
    pub fn endings(&self) -> usize {
        self.endings
    }

    /// Forget the recorded lines. The ended latch is left alone.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Narrator for Transcript {
    fn say(&mut self, line: &Line) {
        self.lines.push(line.clone());
    }

    fn end_game(&mut self) {
        self.endings += 1;
    }
}
