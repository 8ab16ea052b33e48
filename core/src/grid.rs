use alloc::vec::Vec;

use crate::*;

/// Glyph shown in a cell whose clue has not been revealed yet.
pub const PLACEHOLDER: &str = "?";

/// What a single grid cell displays.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellContent<'a> {
    Placeholder,
    Question(&'a str),
    Answer(&'a str),
}

impl<'a> CellContent<'a> {
    pub fn of(clue: &'a Clue) -> Self {
        match clue.showing() {
            Showing::Unrevealed => Self::Placeholder,
            Showing::Question => Self::Question(clue.question()),
            Showing::Answer => Self::Answer(clue.answer()),
        }
    }

    pub const fn text(self) -> &'a str {
        match self {
            Self::Placeholder => PLACEHOLDER,
            Self::Question(text) | Self::Answer(text) => text,
        }
    }

    /// Answers get a distinct style.
    pub const fn is_answer(self) -> bool {
        matches!(self, Self::Answer(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridCell<'a> {
    pub id: CellId,
    pub content: CellContent<'a>,
}

/// Table-shaped view of a board: one header label per category and one row per clue index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridLayout<'a> {
    pub header: Vec<&'a str>,
    pub rows: Vec<Vec<GridCell<'a>>>,
}

impl<'a> GridLayout<'a> {
    pub fn from_board(board: &'a Board) -> Self {
        let header = board.categories().iter().map(Category::title).collect();
        let rows = (0..board.clues_per_category())
            .map(|clue| {
                board
                    .categories()
                    .iter()
                    .enumerate()
                    .map(|(category, column)| GridCell {
                        id: CellId::new(category, clue),
                        content: CellContent::of(&column.clues()[clue]),
                    })
                    .collect()
            })
            .collect();

        Self { header, rows }
    }

    pub fn cell(&self, id: CellId) -> Option<&GridCell<'a>> {
        self.rows.get(id.clue)?.get(id.category)
    }
}
