use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::Rng;
use rand::seq::index;

use crate::*;

/// Eligible catalog categories that have not been drawn yet.
///
/// Denylisted ids, categories reporting fewer clues than a board column needs and duplicate
/// catalog entries are dropped up front, so every draw is uniform over the usable remainder and
/// never repeats an id.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryPool {
    spares: Vec<CategoryId>,
}

impl CategoryPool {
    pub fn from_catalog(catalog: &[CategorySummary], config: &BoardConfig) -> Self {
        let mut seen = BTreeSet::new();
        let spares: Vec<CategoryId> = catalog
            .iter()
            .filter(|summary| !config.is_denied(summary.id))
            .filter(|summary| summary.clues_count >= config.clues_per_category)
            .map(|summary| summary.id)
            .filter(|&id| seen.insert(id))
            .collect();

        log::debug!(
            "category pool: {} eligible out of {} listed",
            spares.len(),
            catalog.len()
        );
        Self { spares }
    }

    pub fn available(&self) -> usize {
        self.spares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spares.is_empty()
    }

    /// Draws `count` distinct ids uniformly at random and removes them from the pool.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) -> Result<Vec<CategoryId>> {
        let available = self.spares.len();
        if count > available {
            return Err(TriviaError::NotEnoughCategories {
                wanted: count,
                available,
            });
        }

        let picked: Vec<usize> = index::sample(rng, available, count).into_iter().collect();
        let ids = picked.iter().map(|&i| self.spares[i]).collect();

        let mut picked = picked;
        picked.sort_unstable_by(|a, b| b.cmp(a));
        for i in picked {
            self.spares.swap_remove(i);
        }

        Ok(ids)
    }

    pub fn draw_one<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<CategoryId> {
        if self.spares.is_empty() {
            return None;
        }
        self.draw(rng, 1).ok().and_then(|ids| ids.first().copied())
    }
}

/// Picks `config.categories` distinct usable category ids out of `catalog`.
pub fn select_category_ids<R: Rng + ?Sized>(
    catalog: &[CategorySummary],
    config: &BoardConfig,
    rng: &mut R,
) -> Result<Vec<CategoryId>> {
    CategoryPool::from_catalog(catalog, config).draw(rng, config.categories)
}
