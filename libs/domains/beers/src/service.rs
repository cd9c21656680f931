//! Beer Service - query operations used by the HTTP layer

use async_trait::async_trait;
use axum_helpers::pagination::{PageRequest, PagedResult};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{BeerError, BeerResult};
use crate::models::{Beer, BeerFilter, BeerStyle};
use crate::repository::BeerRepository;

/// Read-side contract between the controller and the domain.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BeerService: Send + Sync {
    /// Fetch a single beer, `BeerError::NotFound` when absent
    async fn get_beer_by_id(&self, id: Uuid) -> BeerResult<Beer>;

    /// One page of the beers matching every supplied filter.
    ///
    /// `total_elements` counts all matches; a page index past the end yields
    /// empty content rather than an error.
    async fn list_beers(
        &self,
        beer_name: Option<String>,
        beer_style: Option<BeerStyle>,
        page: PageRequest,
    ) -> BeerResult<PagedResult<Beer>>;
}

/// BeerService backed by a BeerRepository
pub struct RepositoryBeerService<R: BeerRepository> {
    repository: Arc<R>,
}

impl<R: BeerRepository> RepositoryBeerService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

impl<R: BeerRepository> Clone for RepositoryBeerService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[async_trait]
impl<R: BeerRepository> BeerService for RepositoryBeerService<R> {
    #[instrument(skip(self))]
    async fn get_beer_by_id(&self, id: Uuid) -> BeerResult<Beer> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(BeerError::NotFound(id))
    }

    #[instrument(skip(self))]
    async fn list_beers(
        &self,
        beer_name: Option<String>,
        beer_style: Option<BeerStyle>,
        page: PageRequest,
    ) -> BeerResult<PagedResult<Beer>> {
        let filter = BeerFilter::new(beer_name, beer_style);

        let (content, total_elements) = self.repository.page(filter, page).await?;
        if content.is_empty() && page.offset() >= total_elements {
            tracing::debug!(total_elements, "Requested page is past the last match");
        }
        Ok(PagedResult::new(content, page, total_elements))
    }
}
