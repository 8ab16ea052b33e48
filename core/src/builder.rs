use alloc::vec::Vec;
use futures_util::future::try_join_all;
use rand::Rng;

use crate::*;

/// Loads a complete board from `source`.
///
/// Category details are fetched concurrently and kept in selection order. A category that turns
/// out to have too few usable clues is swapped for a spare from the catalog; any source error
/// aborts the whole build, so callers only ever see a full board or an error.
pub async fn build_board<S, R>(source: &S, config: &BoardConfig, rng: &mut R) -> Result<Board>
where
    S: TriviaSource + ?Sized,
    R: Rng + ?Sized,
{
    let config = config.validated()?;

    let catalog = source.catalog(config.catalog_size).await?;
    let mut pool = CategoryPool::from_catalog(&catalog, &config);
    let ids = pool.draw(rng, config.categories)?;
    log::debug!("selected categories: {:?}", ids);

    let details = try_join_all(ids.iter().map(|&id| source.category(id))).await?;

    let mut slots: Vec<Option<Category>> = Vec::with_capacity(config.categories);
    for (id, detail) in ids.into_iter().zip(&details) {
        match sample_category(id, detail, config.clues_per_category, rng) {
            Ok(category) => slots.push(Some(category)),
            Err(TriviaError::InsufficientClues { available, .. }) => {
                log::warn!("category {} has {} usable clues, replacing it", id, available);
                slots.push(None);
            }
            Err(err) => return Err(err),
        }
    }

    let mut filled = slots.iter().filter(|slot| slot.is_some()).count();
    for slot in slots.iter_mut().filter(|slot| slot.is_none()) {
        *slot = Some(replacement_category(source, &config, &mut pool, rng, filled).await?);
        filled += 1;
    }

    let categories = slots.into_iter().flatten().collect();
    Board::new(categories, &config)
}

async fn replacement_category<S, R>(
    source: &S,
    config: &BoardConfig,
    pool: &mut CategoryPool,
    rng: &mut R,
    filled: usize,
) -> Result<Category>
where
    S: TriviaSource + ?Sized,
    R: Rng + ?Sized,
{
    while let Some(id) = pool.draw_one(rng) {
        match fetch_category(source, id, config, rng).await {
            Ok(category) => {
                log::debug!("replacement category: {}", id);
                return Ok(category);
            }
            Err(TriviaError::InsufficientClues { available, .. }) => {
                log::warn!("spare category {} has {} usable clues, skipping", id, available);
            }
            Err(err) => return Err(err),
        }
    }

    Err(TriviaError::NotEnoughCategories {
        wanted: config.categories,
        available: filled,
    })
}
