use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::future::Future;

use futures_util::FutureExt;

use crate::*;

/// In-memory catalog whose futures are always immediately ready.
#[derive(Debug, Default)]
pub(crate) struct MemorySource {
    pub catalog: Vec<CategorySummary>,
    pub details: BTreeMap<CategoryId, CategoryDetail>,
    pub fail_catalog: bool,
    pub fail_category: Option<CategoryId>,
    pub fetched: RefCell<Vec<CategoryId>>,
    pub catalog_calls: Cell<usize>,
}

impl MemorySource {
    /// Catalog with ids `ids`, each listing `clues` distinct clues.
    pub fn with_categories(ids: impl IntoIterator<Item = CategoryId>, clues: usize) -> Self {
        let mut source = Self::default();
        for id in ids {
            source.insert(id, clues, clues);
        }
        source
    }

    /// Adds a category whose catalog entry claims `listed` clues but which actually serves
    /// `served` of them.
    pub fn insert(&mut self, id: CategoryId, listed: usize, served: usize) {
        self.catalog.push(CategorySummary {
            id,
            title: format!("category {}", id),
            clues_count: listed,
        });
        self.details.insert(
            id,
            CategoryDetail {
                id,
                title: format!("category {}", id),
                clues: (0..served)
                    .map(|i| RawClue {
                        question: format!("question {} of {}", i, id),
                        answer: format!("answer {} of {}", i, id),
                    })
                    .collect(),
            },
        );
    }
}

impl TriviaSource for MemorySource {
    async fn catalog(&self, count: usize) -> Result<Vec<CategorySummary>> {
        self.catalog_calls.set(self.catalog_calls.get() + 1);
        if self.fail_catalog {
            return Err(TriviaError::Source("catalog unavailable".to_string()));
        }
        Ok(self.catalog.iter().take(count).cloned().collect())
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail> {
        self.fetched.borrow_mut().push(id);
        if self.fail_category == Some(id) {
            return Err(TriviaError::Source(format!("category {} unavailable", id)));
        }
        self.details
            .get(&id)
            .cloned()
            .ok_or_else(|| TriviaError::Source(format!("no category {}", id)))
    }
}

/// Drives a future that never actually suspends.
pub(crate) fn run_ready<F: Future>(future: F) -> F::Output {
    future
        .now_or_never()
        .expect("in-memory source futures complete immediately")
}
