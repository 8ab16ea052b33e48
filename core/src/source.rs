use alloc::vec::Vec;
use rand::Rng;
use rand::seq::index;

use crate::*;

/// Remote trivia catalog.
///
/// Implementations only move data; selection, sampling and validation happen in this crate so
/// they behave the same regardless of where the data comes from.
#[allow(async_fn_in_trait)]
pub trait TriviaSource {
    /// Lists up to `count` category summaries.
    async fn catalog(&self, count: usize) -> Result<Vec<CategorySummary>>;

    /// Full clue listing for one category.
    async fn category(&self, id: CategoryId) -> Result<CategoryDetail>;
}

/// Turns a fetched category into a board column of `count` randomly chosen, unrevealed clues.
pub fn sample_category<R: Rng + ?Sized>(
    id: CategoryId,
    detail: &CategoryDetail,
    count: usize,
    rng: &mut R,
) -> Result<Category> {
    let usable: Vec<&RawClue> = detail.clues.iter().filter(|clue| clue.is_usable()).collect();
    if usable.len() < count {
        return Err(TriviaError::InsufficientClues {
            category: id,
            wanted: count,
            available: usable.len(),
        });
    }

    let clues = index::sample(rng, usable.len(), count)
        .into_iter()
        .map(|i| Clue::from(usable[i]))
        .collect();

    Ok(Category::new(id, detail.title.trim(), clues))
}

pub async fn fetch_category<S, R>(
    source: &S,
    id: CategoryId,
    config: &BoardConfig,
    rng: &mut R,
) -> Result<Category>
where
    S: TriviaSource + ?Sized,
    R: Rng + ?Sized,
{
    let detail = source.category(id).await?;
    sample_category(id, &detail, config.clues_per_category, rng)
}
