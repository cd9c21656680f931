use async_trait::async_trait;
use axum_helpers::pagination::PageRequest;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::BeerResult;
use crate::models::{Beer, BeerFilter};

/// Repository trait for Beer persistence
///
/// Listing is ordered by beer name, then id, so pages are stable between
/// calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BeerRepository: Send + Sync {
    /// Get a beer by ID
    async fn get_by_id(&self, id: Uuid) -> BeerResult<Option<Beer>>;

    /// One page of the beers matching `filter`, together with the number of
    /// all matches. Both come from the same snapshot of the data.
    async fn page(
        &self,
        filter: BeerFilter,
        page: PageRequest,
    ) -> BeerResult<(Vec<Beer>, u64)>;
}

/// In-memory implementation of BeerRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryBeerRepository {
    beers: Arc<RwLock<HashMap<Uuid, Beer>>>,
}

impl InMemoryBeerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_beers(beers: impl IntoIterator<Item = Beer>) -> Self {
        let beers = beers.into_iter().map(|b| (b.id, b)).collect();
        Self {
            beers: Arc::new(RwLock::new(beers)),
        }
    }

    /// Insert or replace a beer, returning the previous value for its id.
    pub async fn insert(&self, beer: Beer) -> Option<Beer> {
        let mut beers = self.beers.write().await;
        tracing::debug!(beer_id = %beer.id, "Stored beer");
        beers.insert(beer.id, beer)
    }

    pub async fn len(&self) -> usize {
        self.beers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.beers.read().await.is_empty()
    }
}

#[async_trait]
impl BeerRepository for InMemoryBeerRepository {
    async fn get_by_id(&self, id: Uuid) -> BeerResult<Option<Beer>> {
        let beers = self.beers.read().await;
        Ok(beers.get(&id).cloned())
    }

    async fn page(
        &self,
        filter: BeerFilter,
        page: PageRequest,
    ) -> BeerResult<(Vec<Beer>, u64)> {
        let beers = self.beers.read().await;

        let mut matches: Vec<&Beer> = beers.values().filter(|b| filter.matches(b)).collect();
        matches.sort_by(|a, b| a.beer_name.cmp(&b.beer_name).then(a.id.cmp(&b.id)));
        let total = matches.len() as u64;

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.page_size()).unwrap_or(usize::MAX);

        let content = matches
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        Ok((content, total))
    }
}
