use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// How far a clue has been revealed. Only ever moves forward within a round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Showing {
    Unrevealed,
    Question,
    Answer,
}

impl Showing {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Unrevealed => Some(Self::Question),
            Self::Question => Some(Self::Answer),
            Self::Answer => None,
        }
    }
}

impl Default for Showing {
    fn default() -> Self {
        Self::Unrevealed
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    showing: Showing,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: Showing::Unrevealed,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn showing(&self) -> Showing {
        self.showing
    }

    /// Text currently visible for this clue, `None` while unrevealed.
    pub fn visible_text(&self) -> Option<&str> {
        match self.showing {
            Showing::Unrevealed => None,
            Showing::Question => Some(&self.question),
            Showing::Answer => Some(&self.answer),
        }
    }

    pub fn reveal(&mut self) -> RevealOutcome {
        match self.showing.next() {
            Some(next) => {
                self.showing = next;
                match next {
                    Showing::Question => RevealOutcome::QuestionShown,
                    _ => RevealOutcome::AnswerShown,
                }
            }
            None => RevealOutcome::NoChange,
        }
    }
}

impl From<&RawClue> for Clue {
    fn from(raw: &RawClue) -> Self {
        Self::new(raw.question.trim(), raw.answer.trim())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(id: CategoryId, title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            id,
            title: title.into(),
            clues,
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub(crate) fn clue_mut(&mut self, index: usize) -> Option<&mut Clue> {
        self.clues.get_mut(index)
    }
}
