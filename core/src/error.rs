use alloc::string::String;
use thiserror::Error;

use crate::{CategoryId, CellId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    #[error("Could not load trivia data: {0}")]
    Source(String),
    #[error("Category {category} has only {available} usable clues, {wanted} needed")]
    InsufficientClues {
        category: CategoryId,
        wanted: usize,
        available: usize,
    },
    #[error("Not enough usable categories, wanted {wanted} but only {available} available")]
    NotEnoughCategories { wanted: usize, available: usize },
    #[error("Invalid cell {0}")]
    InvalidCell(CellId),
    #[error("Invalid board config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = core::result::Result<T, TriviaError>;
