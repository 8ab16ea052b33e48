#![no_std]

extern crate alloc;

pub use board::*;
pub use builder::*;
pub use clue::*;
pub use error::*;
pub use grid::*;
pub use round::*;
pub use selector::*;
pub use source::*;
pub use types::*;

mod board;
mod builder;
mod clue;
mod error;
mod grid;
mod round;
mod selector;
mod source;
#[cfg(test)]
mod testing;
mod types;

/// Category ids the remote catalog is known to serve broken data for.
pub const DEFAULT_DENYLIST: &[CategoryId] = &[1, 37, 21, 70, 34, 78];

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoardConfig {
    /// Number of categories (columns) on the board.
    pub categories: usize,
    /// Number of clues (rows) per category.
    pub clues_per_category: usize,
    /// How many summaries to request from the catalog.
    pub catalog_size: usize,
    pub denylist: &'static [CategoryId],
}

impl BoardConfig {
    pub const fn new_unchecked(categories: usize, clues_per_category: usize) -> Self {
        Self {
            categories,
            clues_per_category,
            catalog_size: 99,
            denylist: DEFAULT_DENYLIST,
        }
    }

    pub fn new(categories: usize, clues_per_category: usize) -> Result<Self> {
        Self::new_unchecked(categories, clues_per_category).validated()
    }

    pub fn with_catalog_size(self, catalog_size: usize) -> Result<Self> {
        Self {
            catalog_size,
            ..self
        }
        .validated()
    }

    pub fn with_denylist(self, denylist: &'static [CategoryId]) -> Self {
        Self { denylist, ..self }
    }

    pub fn validated(self) -> Result<Self> {
        if self.categories == 0 {
            return Err(TriviaError::InvalidConfig("need at least one category"));
        }
        if self.clues_per_category == 0 {
            return Err(TriviaError::InvalidConfig("need at least one clue per category"));
        }
        if self.catalog_size < self.categories {
            return Err(TriviaError::InvalidConfig(
                "catalog size must cover the category count",
            ));
        }
        Ok(self)
    }

    pub fn is_denied(&self, id: CategoryId) -> bool {
        self.denylist.contains(&id)
    }

    pub const fn total_cells(&self) -> usize {
        self.categories.saturating_mul(self.clues_per_category)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(6, 5)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    QuestionShown,
    AnswerShown,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            QuestionShown => true,
            AnswerShown => true,
        }
    }
}
