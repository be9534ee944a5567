//! The narrator contract: how the engine emits text to its host.
//!
//! The engine never prints. Every piece of prose is a [`Line`] handed to
//! a [`Narrator`], and a terminal outcome is announced through
//! [`Narrator::end_game`] exactly once per game. Hosts decide how to
//! render the styling hints.

/// A narrator that records everything it is told.
pub mod transcript;

pub use transcript::Transcript;

/// A foreground-color hint for styled narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    /// Triumphant or safe moments.
    Green,
    /// Death and irreversible mistakes.
    Red,
}

/// One piece of narration: text plus optional styling hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The prose itself.
    pub text: String,
    /// Foreground-color hint, if any.
    pub tint: Option<Tint>,
    /// Emphasis (italics) hint.
    pub emphasis: bool,
}

impl Line {
    /// Plain, unstyled text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tint: None,
            emphasis: false,
        }
    }

    /// Text with a foreground-color hint.
    pub fn tinted(text: impl Into<String>, tint: Tint) -> Self {
        Self {
            text: text.into(),
            tint: Some(tint),
            emphasis: false,
        }
    }

    /// Mark this line emphasized.
    pub fn emphasized(mut self) -> Self {
        self.emphasis = true;
        self
    }
}

/// The output channel the engine narrates through.
///
/// Implementations render [`Line`]s however they like. `end_game` is
/// called exactly once when the game reaches a terminal state, after
/// which the host should stop submitting input.
pub trait Narrator {
    /// Display one line of narration.
    fn say(&mut self, line: &Line);

    /// The game has ended; no further input will be processed.
    fn end_game(&mut self);
}
