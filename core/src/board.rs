use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// All categories of one round, in column order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardParts")]
pub struct Board {
    categories: Vec<Category>,
    clues_per_category: usize,
}

/// Unchecked shape of a serialized board, only turned into a [`Board`] through [`Board::new`].
#[derive(Deserialize)]
struct BoardParts {
    categories: Vec<Category>,
    clues_per_category: usize,
}

impl TryFrom<BoardParts> for Board {
    type Error = TriviaError;

    fn try_from(parts: BoardParts) -> Result<Self> {
        let columns = parts.categories.len();
        let config = BoardConfig {
            catalog_size: columns,
            ..BoardConfig::new_unchecked(columns, parts.clues_per_category)
        }
        .validated()?;
        Board::new(parts.categories, &config)
    }
}

impl Board {
    /// Checks the board shape against `config`: exactly `categories` columns, each with exactly
    /// `clues_per_category` clues.
    pub fn new(categories: Vec<Category>, config: &BoardConfig) -> Result<Self> {
        if categories.len() != config.categories {
            return Err(TriviaError::NotEnoughCategories {
                wanted: config.categories,
                available: categories.len(),
            });
        }
        if let Some(short) = categories
            .iter()
            .find(|category| category.clues().len() != config.clues_per_category)
        {
            return Err(TriviaError::InsufficientClues {
                category: short.id(),
                wanted: config.clues_per_category,
                available: short.clues().len(),
            });
        }

        Ok(Self {
            categories,
            clues_per_category: config.clues_per_category,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn clues_per_category(&self) -> usize {
        self.clues_per_category
    }

    pub fn validate_cell(&self, cell: CellId) -> Result<CellId> {
        if cell.category < self.categories.len() && cell.clue < self.clues_per_category {
            Ok(cell)
        } else {
            Err(TriviaError::InvalidCell(cell))
        }
    }

    pub fn clue_at(&self, cell: CellId) -> Result<&Clue> {
        let cell = self.validate_cell(cell)?;
        Ok(&self.categories[cell.category].clues()[cell.clue])
    }

    /// Advances the clue under `cell` one reveal step.
    pub fn reveal(&mut self, cell: CellId) -> Result<RevealOutcome> {
        let cell = self.validate_cell(cell)?;
        self.categories[cell.category]
            .clue_mut(cell.clue)
            .map(Clue::reveal)
            .ok_or(TriviaError::InvalidCell(cell))
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = CellId> + use<> {
        let columns = self.categories.len();
        (0..self.clues_per_category)
            .flat_map(move |clue| (0..columns).map(move |category| CellId::new(category, clue)))
    }
}
